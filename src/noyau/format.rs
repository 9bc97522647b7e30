// src/noyau/format.rs
//
// Projection d’affichage : ne modifie jamais l’état du moteur.

use super::nombre::{lire_nombre, nombre_en_texte, signer_exposant};

/// Au-delà, l’affichage brut est reformaté.
pub const LONGUEUR_MAX: usize = 12;

/// Au-delà (strictement, en valeur absolue), passage en notation exponentielle.
pub const SEUIL_EXPONENTIEL: f64 = 999_999_999_999.0;

/// Chiffres après la virgule en notation fixe comme exponentielle.
pub const DECIMALES: usize = 6;

/// Formate l’affichage :
/// - ≤ 12 caractères : inchangé (on garde la frappe exacte, "3." ou "1.50")
/// - sinon |v| > 999 999 999 999 : exponentielle à 6 décimales ("1.234568e+12")
/// - sinon fixe à 6 décimales, zéros finaux puis point final retirés
pub fn formater_affichage(affichage: &str) -> String {
    if affichage.chars().count() <= LONGUEUR_MAX {
        return affichage.to_string();
    }

    let v = lire_nombre(affichage);
    if v.abs() > SEUIL_EXPONENTIEL {
        format_exponentiel(v, DECIMALES)
    } else {
        format_fixe(v, DECIMALES)
    }
}

/// d.dddddde+N / d.dddddde-N (exposant toujours signé).
fn format_exponentiel(v: f64, decimales: usize) -> String {
    if !v.is_finite() {
        return nombre_en_texte(v);
    }

    signer_exposant(format!("{v:.decimales$e}"))
}

fn format_fixe(v: f64, decimales: usize) -> String {
    if !v.is_finite() {
        return nombre_en_texte(v);
    }

    let brut = format!("{v:.decimales$}");
    if !brut.contains('.') {
        return brut;
    }
    brut.trim_end_matches('0').trim_end_matches('.').to_string()
}
