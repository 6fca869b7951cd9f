// src/noyau/machine.rs
//
// Machine à états de la calculatrice.
//
// État : affichage + opérande précédente + opération en attente + erreur.
// Chaque méthode publique remplace l’état d’un bloc, sans I/O.
//
// Invariants :
// - erreur présente => affichage == "Error", ni opérande précédente ni opération ;
// - opération en attente <=> opérande précédente présente ;
// - au plus une opération en attente (enchaînement immédiat, pas de priorité).

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::erreur::ErreurCalcul;
use super::format::{compter_chiffres, number_to_text, renormalize, text_to_number};
use super::operation::{combiner, Operateur};

/// Texte affiché tant qu’une erreur est active.
pub const MARQUEUR_ERREUR: &str = "Error";

/// Plafond de chiffres saisis (hors séparateurs, point, signe).
pub const CHIFFRES_MAX: usize = 15;

/// ±2^53 : au-delà, un f64 ne représente plus tous les entiers.
pub const LIMITE_SURE: f64 = 9_007_199_254_740_992.0;

const ZERO: &str = "0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculatrice {
    affichage: String,
    operande_precedente: Option<String>,
    operation: Option<Operateur>,
    erreur: Option<ErreurCalcul>,
}

/// Vue figée de l’état, à sonder par l’UI après chaque appel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instantane {
    pub affichage: String,
    pub operande_precedente: Option<String>,
    pub symbole: Option<String>,
    pub erreur: Option<String>,
}

impl Instantane {
    pub fn en_erreur(&self) -> bool {
        self.erreur.is_some()
    }
}

impl Default for Instantane {
    fn default() -> Self {
        Calculatrice::default().instantane()
    }
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self {
            affichage: ZERO.to_string(),
            operande_precedente: None,
            operation: None,
            erreur: None,
        }
    }
}

/// NaN, infini, puis bornes sûres.
fn valider_resultat(v: f64) -> Result<f64, ErreurCalcul> {
    if v.is_nan() {
        return Err(ErreurCalcul::InvalidOperation);
    }
    if v.is_infinite() {
        return Err(ErreurCalcul::Overflow);
    }
    if v.abs() > LIMITE_SURE {
        return Err(ErreurCalcul::NumberTooLarge);
    }
    Ok(v)
}

fn lire_operande(texte: &str) -> Result<f64, ErreurCalcul> {
    text_to_number(texte)
        .filter(|v| v.is_finite())
        .ok_or(ErreurCalcul::InvalidNumber)
}

impl Calculatrice {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Accès ------------------------ */

    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    pub fn operande_precedente(&self) -> Option<&str> {
        self.operande_precedente.as_deref()
    }

    pub fn operation(&self) -> Option<Operateur> {
        self.operation
    }

    pub fn symbole_operation(&self) -> Option<&'static str> {
        self.operation().map(Operateur::symbole)
    }

    pub fn erreur(&self) -> Option<ErreurCalcul> {
        self.erreur
    }

    pub fn message_erreur(&self) -> Option<String> {
        self.erreur().map(|e| e.to_string())
    }

    pub fn has_error(&self) -> bool {
        self.erreur.is_some()
    }

    pub fn instantane(&self) -> Instantane {
        Instantane {
            affichage: self.affichage().to_string(),
            operande_precedente: self.operande_precedente().map(str::to_string),
            symbole: self.symbole_operation().map(str::to_string),
            erreur: self.message_erreur(),
        }
    }

    /* ------------------------ Transitions internes ------------------------ */

    fn reinitialiser(&mut self) {
        *self = Self::default();
    }

    /// Entrée dans l’état d’erreur : l’opération en cours est abandonnée.
    fn set_erreur(&mut self, e: ErreurCalcul) {
        debug!(erreur = %e, affichage = %self.affichage, "calculatrice en erreur");
        self.affichage = MARQUEUR_ERREUR.to_string();
        self.operande_precedente = None;
        self.operation = None;
        self.erreur = Some(e);
    }

    fn evaluer(&self, op: Operateur) -> Result<f64, ErreurCalcul> {
        let droite = lire_operande(&self.affichage)?;
        if op == Operateur::Division && droite == 0.0 {
            return Err(ErreurCalcul::DivideByZero);
        }
        let gauche = match self.operande_precedente.as_deref() {
            Some(t) => lire_operande(t)?,
            None => 0.0,
        };
        valider_resultat(combiner(gauche, droite, op))
    }

    /* ------------------------ Opérations ------------------------ */

    /// Ajoute un chiffre `0-9` ou le point décimal.
    ///
    /// Une erreur active est d’abord effacée (nouveau calcul). Le regroupement
    /// est différé tant qu’une partie décimale se tape ("10.0" reste "10.0").
    pub fn add_digit(&mut self, chiffre: char) {
        if self.erreur.is_some() {
            self.reinitialiser();
        }

        if !(chiffre.is_ascii_digit() || chiffre == '.') {
            self.set_erreur(ErreurCalcul::InvalidInput);
            return;
        }

        if chiffre != '.' && compter_chiffres(&self.affichage) >= CHIFFRES_MAX {
            self.set_erreur(ErreurCalcul::MaxDigitsReached);
            return;
        }

        if self.affichage == ZERO && chiffre != '.' {
            self.affichage = chiffre.to_string();
            return;
        }

        if chiffre == '.' && self.affichage.contains('.') {
            return;
        }

        self.affichage.push(chiffre);

        let decimale_en_cours =
            self.affichage.contains('.') && (chiffre == '.' || self.affichage.ends_with('0'));
        if !decimale_en_cours {
            self.affichage = renormalize(&self.affichage);
        }
    }

    /// Choisit l’opération suivante. Une opération déjà en attente est d’abord
    /// résolue (gauche à droite) ; si cette résolution échoue, rien n’est choisi.
    pub fn select_operation(&mut self, op: Operateur) {
        if self.erreur.is_some() {
            return;
        }

        if self.operation.is_some() {
            self.calculate();
            if self.erreur.is_some() {
                return;
            }
        }

        debug!(operation = %op, operande = %self.affichage, "select_operation");
        let precedente = std::mem::replace(&mut self.affichage, ZERO.to_string());
        self.operande_precedente = Some(precedente);
        self.operation = Some(op);
    }

    /// Résout l’opération en attente avec l’affichage comme second opérande.
    pub fn calculate(&mut self) {
        let Some(op) = self.operation else {
            return;
        };

        match self.evaluer(op) {
            Ok(resultat) => {
                self.affichage = number_to_text(resultat);
                self.operande_precedente = None;
                self.operation = None;
                debug!(resultat = %self.affichage, "calculate");
            }
            Err(e) => self.set_erreur(e),
        }
    }

    /// Abandonne l’opération en attente et réaffiche le premier opérande.
    pub fn cancel_operation(&mut self) {
        if self.erreur.is_some() {
            return;
        }
        self.affichage = self
            .operande_precedente
            .take()
            .unwrap_or_else(|| ZERO.to_string());
        self.operation = None;
    }

    /// Avec une opération en attente : annulation d’un niveau.
    /// Sinon : retour complet à l’état initial (erreur comprise).
    pub fn clear(&mut self) {
        if self.operation.is_some() {
            self.cancel_operation();
        } else {
            self.reinitialiser();
        }
    }

    pub fn toggle_sign(&mut self) {
        if self.erreur.is_some() {
            return;
        }

        let Some(v) = text_to_number(&self.affichage) else {
            self.set_erreur(ErreurCalcul::InvalidNumber);
            return;
        };

        match valider_resultat(-v) {
            Ok(oppose) => self.affichage = number_to_text(oppose),
            Err(e) => self.set_erreur(e),
        }
    }

    /// Retire le dernier caractère, sans regrouper. En erreur : retour à "0".
    pub fn backspace(&mut self) {
        if self.erreur.is_some() {
            self.reinitialiser();
            return;
        }

        self.affichage.pop();
        if self.affichage.is_empty() || self.affichage == "-" {
            self.affichage = ZERO.to_string();
        }
    }
}
