// src/app/vue.rs
//
// Vue (UI egui) : natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - La vue ne lit QUE l’instantané (jamais la calculatrice directement)
// - Tactile : gros boutons, pavé 4 colonnes
// - Erreur : affichage en couleur d’erreur + message en toutes lettres juste dessous

use eframe::egui;

use super::etat::AppCalc;
use super::touches::Touche;
use crate::noyau::{Instantane, Operateur};

/// Pavé : une ligne = une rangée de la grille.
const PAVE: [[Touche; 4]; 5] = [
    [
        Touche::Effacer,
        Touche::Annuler,
        Touche::Retour,
        Touche::Operation(Operateur::Division),
    ],
    [
        Touche::Chiffre('7'),
        Touche::Chiffre('8'),
        Touche::Chiffre('9'),
        Touche::Operation(Operateur::Multiplication),
    ],
    [
        Touche::Chiffre('4'),
        Touche::Chiffre('5'),
        Touche::Chiffre('6'),
        Touche::Operation(Operateur::Soustraction),
    ],
    [
        Touche::Chiffre('1'),
        Touche::Chiffre('2'),
        Touche::Chiffre('3'),
        Touche::Operation(Operateur::Addition),
    ],
    [
        Touche::Signe,
        Touche::Chiffre('0'),
        Touche::Chiffre('.'),
        Touche::Egal,
    ],
];

const TAILLE_BOUTON: [f32; 2] = [64.0, 44.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice");
                ui.add_space(6.0);

                self.ui_affichage(ui);

                ui.add_space(8.0);
                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                self.ui_historique(ui);
            });
    }

    fn ui_affichage(&self, ui: &mut egui::Ui) {
        let i = &self.instantane;

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                // Opérande précédente + opération active (ligne discrète)
                let precedente = match (&i.operande_precedente, &i.symbole) {
                    (Some(p), Some(s)) => format!("{p} {s}"),
                    _ => String::new(),
                };
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(precedente)
                            .monospace()
                            .size(16.0)
                            .color(ui.visuals().weak_text_color()),
                    );
                });

                let mut texte = egui::RichText::new(&i.affichage).monospace().size(34.0);
                if i.en_erreur() {
                    texte = texte.color(ui.visuals().error_fg_color);
                }
                let libelle = libelle_affichage(i);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(texte).widget_info(|| {
                        egui::WidgetInfo::labeled(egui::WidgetType::Label, true, &libelle)
                    });
                });
            });

        if let Some(msg) = &self.instantane.erreur {
            ui.add_space(4.0);
            ui.colored_label(ui.visuals().error_fg_color, msg.as_str());
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in PAVE {
                    for touche in rangee {
                        self.bouton(ui, touche);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: Touche) {
        let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(touche.libelle()));
        if resp.clicked() {
            self.appuyer(touche);
        }
    }

    fn ui_historique(&self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Historique")
            .default_open(false)
            .show(ui, |ui| {
                if self.historique.is_empty() {
                    ui.weak("aucun calcul");
                    return;
                }
                for ligne in &self.historique {
                    ui.monospace(ligne.as_str());
                }
            });
    }
}

/// Libellé lu par les lecteurs d’écran (AccessKit) pour l’affichage principal.
fn libelle_affichage(i: &Instantane) -> String {
    match &i.erreur {
        Some(msg) => format!("Affichage : {}, {msg}", i.affichage),
        None => format!("Affichage : {}", i.affichage),
    }
}
