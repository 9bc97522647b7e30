//! Noyau de la calculatrice (quatre opérations)
//!
//! Organisation interne :
//! - operation.rs : les 4 opérations + évaluation f64
//! - nombre.rs    : texte <-> f64 (Infinity / NaN compris)
//! - format.rs    : projection d’affichage (12 caractères, fixe / exponentielle)
//! - intention.rs : touches du pavé -> intentions
//! - moteur.rs    : machine à états (saisie, chaînage, "=", C)
//! - erreur.rs    : erreurs à la frontière des intentions

pub mod erreur;
pub mod format;
pub mod intention;
pub mod moteur;
pub mod nombre;
pub mod operation;

#[cfg(test)]
mod tests_scenarios;


// API publique minimale
pub use erreur::ErreurNoyau;
pub use intention::Intention;
pub use moteur::Moteur;
