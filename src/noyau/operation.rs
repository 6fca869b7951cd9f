// src/noyau/operation.rs
//
// Opérations binaires : ensemble fermé + dispatch pur.
// L’opération en attente ne capture rien : seule l’étiquette est stockée,
// la combinaison se fait ici, à partir des deux opérandes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::erreur::OperationNonSupportee;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operateur {
    Addition,
    Soustraction,
    Multiplication,
    Division,
}

impl Operateur {
    pub const TOUS: [Operateur; 4] = [
        Operateur::Addition,
        Operateur::Soustraction,
        Operateur::Multiplication,
        Operateur::Division,
    ];

    /// Symbole affiché à côté de l’opérande précédente.
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Addition => "+",
            Operateur::Soustraction => "-",
            Operateur::Multiplication => "*",
            Operateur::Division => "/",
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbole())
    }
}

impl FromStr for Operateur {
    type Err = OperationNonSupportee;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operateur::TOUS
            .into_iter()
            .find(|op| op.symbole() == s)
            .ok_or_else(|| OperationNonSupportee(s.to_string()))
    }
}

/// gauche (op) droite, en f64 brut : la validation du résultat
/// (NaN, infini, bornes) est faite par la machine.
pub fn combiner(gauche: f64, droite: f64, op: Operateur) -> f64 {
    match op {
        Operateur::Addition => gauche + droite,
        Operateur::Soustraction => gauche - droite,
        Operateur::Multiplication => gauche * droite,
        Operateur::Division => gauche / droite,
    }
}
