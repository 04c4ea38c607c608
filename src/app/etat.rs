//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder le tampon de saisie de la session et relayer les
//! touches vers le noyau. Toute la logique d'expression vit dans
//! noyau/tampon.rs ; ici on ne fait que transmettre et journaliser.
//!
//! Contrats :
//! - Une fenêtre = une session = un Tampon (aucun partage).
//! - La vue lit `tampon.texte()` après chaque touche et l'affiche
//!   tel quel, sans retouche.

use tracing::debug;

use crate::noyau::{Tampon, Touche};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub tampon: Tampon,
}

impl AppCalc {
    /// Relaye une touche (bouton ou clavier) vers le noyau.
    pub fn touche(&mut self, touche: Touche) {
        self.tampon.appliquer(touche);

        if touche == Touche::Egal {
            debug!(
                texte = self.tampon.texte(),
                resultat = self.tampon.dernier_resultat(),
                "évaluation"
            );
        } else {
            debug!(
                ?touche,
                texte = self.tampon.texte(),
                frais = self.tampon.nouvelle_expression(),
                "touche appliquée"
            );
        }
    }

    /// C : remise à zéro (bouton "C" ou Échap).
    pub fn effacer(&mut self) {
        self.touche(Touche::Clear);
    }
}
