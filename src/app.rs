// src/app.rs
//
// Calculatrice : module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + touches.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier : chaque événement (texte ou touche nommée) devient UNE touche,
// appliquée dans l’ordre, avant de dessiner la frame.

pub mod etat;
pub mod touches;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::config::Theme;
use touches::Touche;

/// Visuels egui du thème choisi.
pub fn visuels(theme: Theme) -> egui::Visuals {
    match theme {
        Theme::Clair => egui::Visuals::light(),
        Theme::Sombre => egui::Visuals::dark(),
    }
}

fn touches_clavier(ctx: &egui::Context) -> Vec<Touche> {
    ctx.input(|i| {
        let mut out = Vec::new();
        for ev in &i.events {
            match ev {
                egui::Event::Text(t) => out.extend(t.chars().filter_map(touches::depuis_caractere)),
                egui::Event::Key {
                    key, pressed: true, ..
                } => out.extend(touches::depuis_cle(*key)),
                _ => {}
            }
        }
        out
    })
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for touche in touches_clavier(ctx) {
            self.appuyer(touche);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
