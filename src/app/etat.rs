//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder la calculatrice (noyau), l’instantané affiché, les réglages
//! et un historique local des calculs terminés.
//!
//! Contrats :
//! - Une touche = un appel au noyau, puis un nouvel instantané (sondé par la vue).
//! - Aucun calcul ici : la logique reste dans le noyau.
//! - Historique borné par les réglages.

use std::collections::VecDeque;

use tracing::debug;

use super::touches::Touche;
use crate::config::Reglages;
use crate::noyau::format::renormalize;
use crate::noyau::{Calculatrice, Instantane};

#[derive(Clone, Debug)]
pub struct AppCalc {
    calc: Calculatrice,

    // --- sorties (relues par vue.rs) ---
    pub instantane: Instantane,
    pub historique: VecDeque<String>,

    // --- paramètres ---
    pub reglages: Reglages,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(Reglages::default())
    }
}

impl AppCalc {
    pub fn new(reglages: Reglages) -> Self {
        let calc = Calculatrice::new();
        Self {
            instantane: calc.instantane(),
            calc,
            historique: VecDeque::new(),
            reglages,
        }
    }

    /// Point d’entrée unique des boutons et du clavier.
    pub fn appuyer(&mut self, touche: Touche) {
        let avant = self.calc.instantane();

        match touche {
            Touche::Chiffre(c) => self.calc.add_digit(c),
            Touche::Operation(op) => self.calc.select_operation(op),
            Touche::Egal => self.calc.calculate(),
            Touche::Effacer => self.calc.clear(),
            Touche::Annuler => self.calc.cancel_operation(),
            Touche::Signe => self.calc.toggle_sign(),
            Touche::Retour => self.calc.backspace(),
        }

        self.instantane = self.calc.instantane();
        debug!(
            ?touche,
            affichage = %self.instantane.affichage,
            erreur = self.calc.has_error(),
            "touche"
        );

        if let Some(ligne) = ligne_historique(&avant, &self.instantane, touche) {
            self.historique.push_front(ligne);
            self.historique.truncate(self.reglages.historique_max);
        }
    }
}

/// "a op b = r" si la touche a résolu une opération en attente sans erreur.
fn ligne_historique(avant: &Instantane, apres: &Instantane, touche: Touche) -> Option<String> {
    if apres.en_erreur() {
        return None;
    }
    let (Some(gauche), Some(symbole)) = (&avant.operande_precedente, &avant.symbole) else {
        return None;
    };

    let resultat = match touche {
        Touche::Egal => &apres.affichage,
        // enchaînement : le résultat devient la nouvelle opérande
        Touche::Operation(_) => apres.operande_precedente.as_ref()?,
        _ => return None,
    };

    // la saisie peut être restée non groupée ("1,23" après un retour)
    let gauche = renormalize(gauche);
    let droite = renormalize(&avant.affichage);
    Some(format!("{gauche} {symbole} {droite} = {resultat}"))
}
