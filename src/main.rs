// src/main.rs
//
// Calculatrice de poche — point d'entrée natif
// --------------------------------------------
// But:
// - eframe::run_native + NativeOptions (taille fixe façon calculette)
// - Journalisation : tracing-subscriber, pilotée par RUST_LOG
//   (ex: RUST_LOG=calculatrice_poche=debug pour suivre les touches)
//
// IMPORTANT (structure projet):
// - `impl eframe::App for AppCalc` vit dans src/app.rs
// - Ici: point d'entrée seulement

use eframe::egui;
use tracing_subscriber::EnvFilter;

mod app;
mod noyau;

use app::AppCalc;

/// Titre de la fenêtre.
const TITRE_APP: &str = "Calculatrice de poche";

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([320.0, 420.0])
            .with_min_inner_size([300.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|cc| {
            // fond sombre, comme une calculette
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::<AppCalc>::default())
        }),
    )
}
