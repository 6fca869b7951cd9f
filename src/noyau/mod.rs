//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - format.rs    : nombre <-> texte groupé ("1,234.5"), renormalisation de saisie
//! - operation.rs : opérateurs + combinaison pure
//! - erreur.rs    : erreurs utilisateur / fautes
//! - machine.rs   : machine à états (affichage, opérande, opération, erreur)
//!
//! Aucune I/O ici : tout est synchrone, déterministe, testable sans UI.

pub mod erreur;
pub mod format;
pub mod machine;
pub mod operation;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use machine::{Calculatrice, Instantane};
pub use operation::Operateur;
