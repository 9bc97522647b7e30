//! Tests de scénarios : séquences de touches complètes, comme au pavé.
//!
//! Chaque scénario part d’un moteur neuf et passe par les libellés de touches
//! (même chemin que la vue : libellé -> Intention -> Moteur).

use super::format::formater_affichage;
use super::operation::Operation;
use super::{Intention, Moteur};

fn jouer(touches: &[&str]) -> Moteur {
    let mut m = Moteur::new();
    for t in touches {
        let i = Intention::depuis_touche(t).unwrap_or_else(|e| panic!("touche {t:?} : {e}"));
        m.appliquer(i)
            .unwrap_or_else(|e| panic!("appliquer({i:?}) : {e}"));
    }
    m
}

/// Une touche par caractère : "12+3=" -> ["1", "2", "+", "3", "="].
fn jouer_texte(touches: &str) -> Moteur {
    let touches: Vec<String> = touches.chars().map(String::from).collect();
    let refs: Vec<&str> = touches.iter().map(String::as_str).collect();
    jouer(&refs)
}

fn assert_affiche(touches: &[&str], attendu: &str) {
    let m = jouer(touches);
    assert_eq!(m.affichage(), attendu, "touches={touches:?}");
}

#[test]
fn scen_addition_simple() {
    assert_affiche(&["5", "+", "3", "="], "8");
}

#[test]
fn scen_division_par_zero_affiche_infinity() {
    let m = jouer(&["6", "÷", "0", "="]);
    assert_eq!(m.affichage(), "Infinity");
    assert_eq!(m.affichage_formate(), "Infinity");
}

#[test]
fn scen_zero_sur_zero_nan() {
    assert_affiche(&["0", "÷", "0", "="], "NaN");
}

#[test]
fn scen_chainage_sans_priorite() {
    assert_affiche(&["2", "+", "3", "×", "4", "="], "20");
}

#[test]
fn scen_chainage_affiche_le_resultat_intermediaire() {
    let m = jouer(&["2", "+", "3", "×"]);
    assert_eq!(m.affichage(), "5");
    assert_eq!(m.valeur_precedente(), Some(5.0));
    assert_eq!(m.operation_en_attente(), Some(Operation::Multiplication));
    assert!(m.attente_nouvelle_saisie());
}

#[test]
fn scen_infinity_continue_de_chainer() {
    assert_affiche(&["1", "÷", "0", "-", "1", "="], "Infinity");
    assert_affiche(&["1", "÷", "0", "×", "0", "="], "NaN");
}

#[test]
fn scen_decimales() {
    assert_affiche(&["0", ".", "1", "+", ".", "2", "="], "0.30000000000000004");
    let m = jouer(&["0", ".", "1", "+", ".", "2", "="]);
    assert_eq!(m.affichage_formate(), "0.3");
}

#[test]
fn scen_soustraction_negative() {
    assert_affiche(&["3", "-", "8", "="], "-5");
}

#[test]
fn scen_grand_resultat_exponentiel() {
    let m = jouer_texte("9999999×9999999=");
    assert_eq!(m.affichage(), "99999980000001");
    assert_eq!(m.affichage_formate(), "9.999998e+13");
}

#[test]
fn scen_saisie_longue_projetee_sans_toucher_l_etat() {
    let m = jouer_texte("1234567890123");
    assert_eq!(m.affichage(), "1234567890123");
    assert_eq!(m.affichage_formate(), "1.234568e+12");
    assert_eq!(formater_affichage(m.affichage()), m.affichage_formate());
    assert_eq!(m.affichage(), "1234567890123");
}

#[test]
fn scen_effacer_puis_recommencer() {
    assert_affiche(&["7", "×", "6", "C", "2", "+", "2", "="], "4");
}

#[test]
fn scen_operateur_remplace_puis_calcule() {
    assert_affiche(&["8", "+", "÷", "2", "="], "4");
}

#[test]
fn scen_grand_resultat_negatif_exponentiel() {
    let m = jouer_texte("0-1234567890123=");
    assert_eq!(m.affichage(), "-1234567890123");
    assert_eq!(m.affichage_formate(), "-1.234568e+12");

    let m = jouer_texte("0-10000000000000×1000000000=");
    assert_eq!(m.affichage(), "-1e+22");
    assert_eq!(m.affichage_formate(), "-1e+22");
}

#[test]
fn scen_tres_petit_resultat_en_exposant() {
    let m = jouer_texte("15÷100000000000=");
    assert_eq!(m.affichage(), "1.5e-10");
    assert_eq!(m.affichage_formate(), "1.5e-10");
}
