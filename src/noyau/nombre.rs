// src/noyau/nombre.rs
//
// Texte <-> f64 pour l’affichage.
// Les valeurs non finies s’écrivent Infinity / -Infinity / NaN (et se relisent).
// Hors de [1e-6, 1e21[ (en valeur absolue) : notation exponentielle courte.

/// En dessous (en valeur absolue), écriture exponentielle.
const PLANCHER_DECIMAL: f64 = 1e-6;

/// À partir de (en valeur absolue), écriture exponentielle.
const PLAFOND_DECIMAL: f64 = 1e21;

/// Lit l’affichage comme un f64. Texte illisible => NaN (jamais d’erreur).
pub fn lire_nombre(s: &str) -> f64 {
    // f64::from_str accepte déjà "infinity" / "nan" sans casse.
    s.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Écrit un f64 en décimal court (aller-retour exact).
pub fn nombre_en_texte(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    // -0 s’affiche 0
    if v == 0.0 {
        return "0".to_string();
    }
    let m = v.abs();
    if m < PLANCHER_DECIMAL || m >= PLAFOND_DECIMAL {
        return signer_exposant(format!("{v:e}"));
    }
    format!("{v}")
}

/// "1.5e12" -> "1.5e+12" ; un exposant négatif reste tel quel.
pub fn signer_exposant(brut: String) -> String {
    match brut.split_once('e') {
        Some((mantisse, exposant)) if !exposant.starts_with('-') => {
            format!("{mantisse}e+{exposant}")
        }
        _ => brut,
    }
}
