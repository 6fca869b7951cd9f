// src/noyau/format.rs
//
// Affichage : nombre <-> texte groupé ("1,234,567.5").
//
// Contrats :
// - fonctions pures, déterministes ;
// - partie fractionnaire plafonnée à DECIMALES_MAX chiffres (arrondi de `format!`) ;
// - valeurs spéciales : "∞", "-∞", "NaN" ;
// - -0 s’affiche "0".

/// Séparateur de milliers.
pub const SEPARATEUR: char = ',';

/// Plafond de chiffres après la virgule.
pub const DECIMALES_MAX: usize = 10;

pub const INFINI: &str = "∞";
pub const MOINS_INFINI: &str = "-∞";
pub const PAS_UN_NOMBRE: &str = "NaN";

/* ------------------------ Texte -> nombre ------------------------ */

/// Retire les séparateurs puis lit `-?[0-9]*\.?[0-9]*` (au moins un chiffre).
/// Refuse tout le reste ("Error", "1e5", "inf", "1.2.3", "-", "").
pub fn text_to_number(texte: &str) -> Option<f64> {
    let brut: String = texte.chars().filter(|&c| c != SEPARATEUR).collect();
    let corps = brut.strip_prefix('-').unwrap_or(&brut);

    let mut chiffres = 0usize;
    let mut points = 0usize;
    for c in corps.chars() {
        match c {
            '0'..='9' => chiffres += 1,
            '.' => points += 1,
            _ => return None,
        }
    }
    if chiffres == 0 || points > 1 {
        return None;
    }

    brut.parse::<f64>().ok()
}

/* ------------------------ Nombre -> texte ------------------------ */

/// Insère le séparateur tous les 3 chiffres (depuis la droite).
fn grouper(entier: &str) -> String {
    let n = entier.len();
    let mut out = String::with_capacity(n + n / 3);
    for (i, c) in entier.chars().enumerate() {
        if i > 0 && (n - i) % 3 == 0 {
            out.push(SEPARATEUR);
        }
        out.push(c);
    }
    out
}

pub fn number_to_text(valeur: f64) -> String {
    if valeur.is_nan() {
        return PAS_UN_NOMBRE.to_string();
    }
    if valeur.is_infinite() {
        let s = if valeur > 0.0 { INFINI } else { MOINS_INFINI };
        return s.to_string();
    }

    let brut = if valeur.fract() == 0.0 {
        format!("{valeur:.0}")
    } else {
        let s = format!("{:.*}", DECIMALES_MAX, valeur);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    };

    let (signe, corps) = match brut.strip_prefix('-') {
        Some(reste) => ("-", reste),
        None => ("", brut.as_str()),
    };

    // -0, ou un résultat qui s’arrondit à zéro au 10e chiffre
    if corps.chars().all(|c| c == '0' || c == '.') {
        return "0".to_string();
    }

    match corps.split_once('.') {
        Some((entier, frac)) => format!("{signe}{}.{frac}", grouper(entier)),
        None => format!("{signe}{}", grouper(corps)),
    }
}

/* ------------------------ Saisie ------------------------ */

/// Relit puis réécrit le texte (regroupement, zéros inutiles).
/// Un texte illisible est rendu tel quel.
pub fn renormalize(texte: &str) -> String {
    match text_to_number(texte) {
        Some(v) => number_to_text(v),
        None => texte.to_string(),
    }
}

/// Nombre de chiffres saisis (hors séparateurs, point, signe).
pub fn compter_chiffres(texte: &str) -> usize {
    texte.chars().filter(char::is_ascii_digit).count()
}
