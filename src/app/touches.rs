//! src/app/touches.rs
//!
//! Traduction clavier / boutons -> touches de la calculatrice.
//! Une touche = un appel au noyau (voir AppCalc::appuyer).

use eframe::egui;
use tracing::trace;

use crate::noyau::Operateur;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// `0-9` ou `.`
    Chiffre(char),
    Operation(Operateur),
    Egal,
    /// C : annule l’opération en attente, sinon remise à zéro.
    Effacer,
    /// CE : abandonne seulement l’opération en attente.
    Annuler,
    Signe,
    Retour,
}

impl Touche {
    /// Libellé du bouton correspondant.
    pub fn libelle(self) -> String {
        match self {
            Touche::Chiffre(c) => c.to_string(),
            Touche::Operation(op) => op.symbole().to_string(),
            Touche::Egal => "=".to_string(),
            Touche::Effacer => "C".to_string(),
            Touche::Annuler => "CE".to_string(),
            Touche::Signe => "±".to_string(),
            Touche::Retour => "DEL".to_string(),
        }
    }
}

/// Caractère tapé (événement texte). Les caractères sans touche sont ignorés.
pub fn depuis_caractere(c: char) -> Option<Touche> {
    match c {
        '0'..='9' | '.' => Some(Touche::Chiffre(c)),
        '=' => Some(Touche::Egal),
        _ => {
            let mut buf = [0u8; 4];
            match c.encode_utf8(&mut buf).parse::<Operateur>() {
                Ok(op) => Some(Touche::Operation(op)),
                Err(e) => {
                    trace!(%e, "caractère ignoré");
                    None
                }
            }
        }
    }
}

/// Touche nommée (Enter, Backspace, ...).
pub fn depuis_cle(cle: egui::Key) -> Option<Touche> {
    match cle {
        egui::Key::Enter => Some(Touche::Egal),
        egui::Key::Backspace => Some(Touche::Retour),
        egui::Key::Escape => Some(Touche::Effacer),
        egui::Key::Delete => Some(Touche::Annuler),
        _ => None,
    }
}
