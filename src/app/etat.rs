//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter le moteur et relayer les touches du pavé.
//!
//! Contrats :
//! - Aucun calcul ici : tout passe par `noyau::Moteur`.
//! - Une touche = une intention, appliquée jusqu’au bout avant la suivante.

use tracing::warn;

use crate::noyau::format::formater_affichage;
use crate::noyau::nombre::nombre_en_texte;
use crate::noyau::{ErreurNoyau, Intention, Moteur};

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub moteur: Moteur,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            moteur: Moteur::new(),
        }
    }
}

impl AppCalc {
    /// Touche du pavé (libellé affiché) -> transition du moteur.
    /// Un libellé inconnu laisse l’état intact et est journalisé.
    pub fn appuyer(&mut self, touche: &str) -> Result<(), ErreurNoyau> {
        let resultat = Intention::depuis_touche(touche).and_then(|i| self.moteur.appliquer(i));
        if let Err(e) = &resultat {
            warn!(touche, erreur = %e, "touche refusée");
        }
        resultat
    }

    /// Texte à montrer dans l’écran de la calculatrice.
    pub fn ecran(&self) -> String {
        self.moteur.affichage_formate()
    }

    /// Valeur brute complète quand l’écran la raccourcit (infobulle), sinon None.
    pub fn valeur_complete(&self) -> Option<&str> {
        let brut = self.moteur.affichage();
        (self.ecran() != brut).then_some(brut)
    }

    /// Rappel discret de l’opération en attente ("12 +"), au-dessus de l’écran.
    pub fn rappel_operation(&self) -> Option<String> {
        let gauche = self.moteur.valeur_precedente()?;
        let op = self.moteur.operation_en_attente()?;
        Some(format!(
            "{} {}",
            formater_affichage(&nombre_en_texte(gauche)),
            op.symbole()
        ))
    }
}
