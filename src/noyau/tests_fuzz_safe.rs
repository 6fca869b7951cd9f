//! Tests fuzz safe : séquences de touches aléatoires, invariants d’état.
//!
//! - RNG déterministe (seed fixe)
//! - longueur bornée
//! - budget temps global
//! - invariants vérifiés après CHAQUE touche

use std::time::{Duration, Instant};

use super::format::text_to_number;
use super::machine::{Calculatrice, Instantane, MARQUEUR_ERREUR};
use super::operation::Operateur;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Touches aléatoires ------------------------ */

/// Applique une touche tirée au sort ; renvoie son nom (pour les messages).
fn touche_au_hasard(rng: &mut Rng, c: &mut Calculatrice) -> String {
    // chiffres surreprésentés : sinon les nombres restent minuscules
    match rng.pick(20) {
        0..=9 => {
            let ch = char::from(b'0' + rng.pick(10) as u8);
            c.add_digit(ch);
            ch.to_string()
        }
        10 => {
            c.add_digit('.');
            ".".to_string()
        }
        11 => {
            // caractère hors domaine, rare
            let ch = ['a', ',', '-', ' '][rng.pick(4) as usize];
            c.add_digit(ch);
            format!("{ch:?}")
        }
        12 | 13 => {
            let op = Operateur::TOUS[rng.pick(4) as usize];
            c.select_operation(op);
            op.symbole().to_string()
        }
        14 => {
            c.calculate();
            "=".to_string()
        }
        15 => {
            c.toggle_sign();
            "±".to_string()
        }
        16 => {
            c.backspace();
            "DEL".to_string()
        }
        17 => {
            c.cancel_operation();
            "annuler".to_string()
        }
        18 => {
            c.clear();
            "C".to_string()
        }
        _ => {
            c.add_digit('0');
            "0".to_string()
        }
    }
}

fn check_invariants(c: &Calculatrice, trace: &[String]) {
    if c.has_error() {
        assert_eq!(c.affichage(), MARQUEUR_ERREUR, "trace={trace:?}");
        assert!(c.operande_precedente().is_none(), "trace={trace:?}");
        assert!(c.operation().is_none(), "trace={trace:?}");
    } else {
        assert!(
            text_to_number(c.affichage()).is_some(),
            "affichage illisible {:?} trace={trace:?}",
            c.affichage()
        );
    }

    assert_eq!(
        c.operation().is_some(),
        c.operande_precedente().is_some(),
        "opération <=> opérande, trace={trace:?}"
    );

    if let Some(p) = c.operande_precedente() {
        assert!(text_to_number(p).is_some(), "opérande illisible {p:?} trace={trace:?}");
    }
}

fn campagne(seed: u64, sequences: usize, longueur: usize) -> Vec<Instantane> {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(seed);
    let mut fins = Vec::with_capacity(sequences);

    for _ in 0..sequences {
        budget(t0, max);

        let mut c = Calculatrice::new();
        let mut trace = Vec::with_capacity(longueur);
        for _ in 0..longueur {
            trace.push(touche_au_hasard(&mut rng, &mut c));
            check_invariants(&c, &trace);
        }
        fins.push(c.instantane());
    }

    fins
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_invariants_d_etat() {
    let fins = campagne(0xC0FFEE_u64, 200, 60);

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    let en_erreur = fins.iter().filter(|i| i.en_erreur()).count();
    assert!(en_erreur > 0, "aucune erreur vue: fuzz trop “sage”");
    assert!(en_erreur < fins.len(), "que des erreurs: fuzz trop “brutal”");
}

#[test]
fn fuzz_safe_determinisme() {
    let a = campagne(0xBADC0DE_u64, 50, 40);
    let b = campagne(0xBADC0DE_u64, 50, 40);
    assert_eq!(a, b);
}
