// src/app/vue.rs
//
// Vue (UI egui)
// -------------
// Objectifs :
// - Afficheur en haut, texte du tampon rendu tel quel, aligné à droite
// - Pavé 4 colonnes repris de la disposition classique :
//     C  DEL  /  *
//     7   8   9  -
//     4   5   6  +
//     1   2   3  =
//     0 (double)  .
// - Clavier : chiffres/./opérateurs tapent directement, Entrée évalue,
//   Backspace efface le dernier caractère (Échap est géré dans app.rs)
//
// Aucune logique d'expression ici : chaque interaction devient une
// Touche envoyée à l'état.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::Touche;

/* ------------------------ Couleurs du pavé ------------------------ */

const COULEUR_CLEAR: egui::Color32 = egui::Color32::from_rgb(204, 51, 51);
const COULEUR_DEL: egui::Color32 = egui::Color32::from_rgb(230, 128, 26);
const COULEUR_OP: egui::Color32 = egui::Color32::from_rgb(51, 153, 204);
const COULEUR_EGAL: egui::Color32 = egui::Color32::from_rgb(51, 204, 77);
const COULEUR_CHIFFRE: egui::Color32 = egui::Color32::from_rgb(77, 77, 77);

/* ------------------------ Dimensions ------------------------ */

const TAILLE_TOUCHE: [f32; 2] = [64.0, 44.0];
// double largeur = deux touches + l'espacement entre elles
const TAILLE_TOUCHE_DOUBLE: [f32; 2] = [134.0, 44.0];
const ESPACEMENT: f32 = 6.0;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(ESPACEMENT, ESPACEMENT);

        self.touches_clavier(ui);

        self.ui_afficheur(ui);
        ui.add_space(4.0);
        self.ui_pave(ui);
    }

    /* ------------------------ Clavier ------------------------ */

    // Entrée évalue, Backspace efface ; le reste passe par les
    // événements texte ('1', '+', '=', 'c'…) via Touche::depuis_char.
    fn touches_clavier(&mut self, ui: &mut egui::Ui) {
        let evenements = ui.input(|i| i.events.clone());
        for ev in evenements {
            if let egui::Event::Text(texte) = ev {
                for c in texte.chars() {
                    if let Some(touche) = Touche::depuis_char(c) {
                        self.touche(touche);
                    }
                }
            }
        }

        if ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            self.touche(Touche::Egal);
        }
        if ui.input(|i| i.key_pressed(egui::Key::Backspace)) {
            self.touche(Touche::Del);
        }
    }

    /* ------------------------ Afficheur ------------------------ */

    fn ui_afficheur(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.tampon.texte())
                            .monospace()
                            .size(32.0),
                    );
                });
            });
    }

    /* ------------------------ Pavé ------------------------ */

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            self.bouton(ui, "C", COULEUR_CLEAR, Touche::Clear, TAILLE_TOUCHE);
            self.bouton(ui, "DEL", COULEUR_DEL, Touche::Del, TAILLE_TOUCHE);
            self.bouton(ui, "/", COULEUR_OP, Touche::Slash, TAILLE_TOUCHE);
            self.bouton(ui, "*", COULEUR_OP, Touche::Star, TAILLE_TOUCHE);
        });

        ui.horizontal(|ui| {
            self.bouton(ui, "7", COULEUR_CHIFFRE, Touche::Chiffre(7), TAILLE_TOUCHE);
            self.bouton(ui, "8", COULEUR_CHIFFRE, Touche::Chiffre(8), TAILLE_TOUCHE);
            self.bouton(ui, "9", COULEUR_CHIFFRE, Touche::Chiffre(9), TAILLE_TOUCHE);
            self.bouton(ui, "-", COULEUR_OP, Touche::Minus, TAILLE_TOUCHE);
        });

        ui.horizontal(|ui| {
            self.bouton(ui, "4", COULEUR_CHIFFRE, Touche::Chiffre(4), TAILLE_TOUCHE);
            self.bouton(ui, "5", COULEUR_CHIFFRE, Touche::Chiffre(5), TAILLE_TOUCHE);
            self.bouton(ui, "6", COULEUR_CHIFFRE, Touche::Chiffre(6), TAILLE_TOUCHE);
            self.bouton(ui, "+", COULEUR_OP, Touche::Plus, TAILLE_TOUCHE);
        });

        ui.horizontal(|ui| {
            self.bouton(ui, "1", COULEUR_CHIFFRE, Touche::Chiffre(1), TAILLE_TOUCHE);
            self.bouton(ui, "2", COULEUR_CHIFFRE, Touche::Chiffre(2), TAILLE_TOUCHE);
            self.bouton(ui, "3", COULEUR_CHIFFRE, Touche::Chiffre(3), TAILLE_TOUCHE);
            self.bouton(ui, "=", COULEUR_EGAL, Touche::Egal, TAILLE_TOUCHE);
        });

        ui.horizontal(|ui| {
            self.bouton(
                ui,
                "0",
                COULEUR_CHIFFRE,
                Touche::Chiffre(0),
                TAILLE_TOUCHE_DOUBLE,
            );
            self.bouton(ui, ".", COULEUR_CHIFFRE, Touche::Point, TAILLE_TOUCHE);
        });
    }

    fn bouton(
        &mut self,
        ui: &mut egui::Ui,
        label: &str,
        couleur: egui::Color32,
        touche: Touche,
        taille: [f32; 2],
    ) {
        let resp = ui.add_sized(
            taille,
            egui::Button::new(
                egui::RichText::new(label)
                    .size(20.0)
                    .color(egui::Color32::WHITE),
            )
            .fill(couleur),
        );

        if resp.clicked() {
            self.touche(touche);
        }
    }
}
