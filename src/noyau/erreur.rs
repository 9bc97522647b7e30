// src/noyau/erreur.rs

/// Erreurs du noyau : uniquement à la frontière des intentions.
/// Les calculs eux-mêmes ne signalent rien (division par zéro => Infinity/NaN affiché).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErreurNoyau {
    #[error("jeton invalide : {0:?} (attendu 0-9 ou '.')")]
    JetonInvalide(char),

    #[error("touche inconnue : {0:?}")]
    ToucheInconnue(String),
}
