// src/noyau/erreur.rs
//
// Erreurs du noyau.
//
// Deux familles bien séparées :
// - ErreurCalcul : erreurs utilisateur, récupérables, stockées dans l’état
//   (affichage forcé à "Error", message exposé à la vue).
// - OperationNonSupportee : faute de programmation / de traduction clavier,
//   remontée en Result (jamais stockée dans l’état).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Erreurs visibles par l’utilisateur. Le message (`Display`) est exactement
/// celui annoncé à côté de l’affichage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ErreurCalcul {
    /// Caractère saisi hors `[0-9.]`.
    #[error("Invalid input")]
    InvalidInput,

    /// Plafond de chiffres atteint.
    #[error("Max digits reached")]
    MaxDigitsReached,

    /// Opérande illisible ou non fini.
    #[error("Invalid number")]
    InvalidNumber,

    #[error("Cannot divide by zero")]
    DivideByZero,

    /// Résultat NaN.
    #[error("Invalid operation")]
    InvalidOperation,

    /// Résultat infini.
    #[error("Overflow")]
    Overflow,

    /// Résultat fini mais hors de ±2^53.
    #[error("Number too large")]
    NumberTooLarge,
}

/// Symbole d’opération hors de l’ensemble fermé `+ - * /`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported operation: {0:?}")]
pub struct OperationNonSupportee(pub String);
