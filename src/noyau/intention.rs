// src/noyau/intention.rs

use super::erreur::ErreurNoyau;
use super::operation::Operation;

/// Ce que la vue peut demander au moteur (une touche = une intention).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intention {
    /// '0'..='9' ou '.'
    Saisie(char),
    Operation(Operation),
    Egal,
    Effacer,
}

impl Intention {
    /// Libellé de touche -> intention.
    /// "0".."9", ".", "+", "-", "×", "÷" (ou "*", "/"), "=", "C".
    pub fn depuis_touche(touche: &str) -> Result<Intention, ErreurNoyau> {
        let t = touche.trim();
        let mut chars = t.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err(ErreurNoyau::ToucheInconnue(touche.to_string()));
        };

        match c {
            '0'..='9' | '.' => Ok(Intention::Saisie(c)),
            '=' => Ok(Intention::Egal),
            'C' | 'c' => Ok(Intention::Effacer),
            _ => Operation::depuis_symbole(c)
                .map(Intention::Operation)
                .ok_or_else(|| ErreurNoyau::ToucheInconnue(touche.to_string())),
        }
    }
}
