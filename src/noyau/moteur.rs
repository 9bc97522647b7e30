//! src/noyau/moteur.rs
//!
//! Moteur de la calculatrice : machine à états pure, sans vue.
//!
//! Contrats :
//! - `affichage` n’est jamais vide ; la saisie ne produit jamais deux '.'.
//! - Pas de priorité des opérateurs : chaque opération s’applique dès la suivante
//!   (2 + 3 × 4 = 20).
//! - Aucune erreur de calcul : division par zéro => Infinity / NaN affiché tel quel.

use tracing::debug;

use super::erreur::ErreurNoyau;
use super::format::formater_affichage;
use super::intention::Intention;
use super::nombre::{lire_nombre, nombre_en_texte};
use super::operation::{evaluer, Operation};

const AFFICHAGE_INITIAL: &str = "0";

#[derive(Clone, Debug, PartialEq)]
pub struct Moteur {
    affichage: String,
    valeur_precedente: Option<f64>,
    operation_en_attente: Option<Operation>,
    attente_nouvelle_saisie: bool,
}

impl Default for Moteur {
    fn default() -> Self {
        Self {
            affichage: AFFICHAGE_INITIAL.to_string(),
            valeur_precedente: None,
            operation_en_attente: None,
            attente_nouvelle_saisie: false,
        }
    }
}

impl Moteur {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Lecture ------------------------ */

    /// Valeur brute (aussi l’opérande en cours de saisie).
    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    /// Ce que la vue doit montrer (projection, sans effet sur l’état).
    pub fn affichage_formate(&self) -> String {
        formater_affichage(&self.affichage)
    }

    pub fn valeur_precedente(&self) -> Option<f64> {
        self.valeur_precedente
    }

    pub fn operation_en_attente(&self) -> Option<Operation> {
        self.operation_en_attente
    }

    #[cfg(test)]
    pub fn attente_nouvelle_saisie(&self) -> bool {
        self.attente_nouvelle_saisie
    }

    /* ------------------------ Transitions ------------------------ */

    /// Aiguillage d’une intention de la vue vers la transition correspondante.
    pub fn appliquer(&mut self, intention: Intention) -> Result<(), ErreurNoyau> {
        match intention {
            Intention::Saisie(c) => self.saisir(c)?,
            Intention::Operation(op) => self.choisir_operation(op),
            Intention::Egal => self.egal(),
            Intention::Effacer => self.effacer(),
        }
        debug!(?intention, affichage = %self.affichage, "transition");
        Ok(())
    }

    /// Saisie d’un chiffre ou du point décimal.
    ///
    /// - après un opérateur ou "=" : le jeton remplace l’affichage
    /// - sinon concaténation, le "0" initial étant remplacé
    /// - '.' : ignoré si l’opérande en a déjà un ; en tête il devient "0."
    pub fn saisir(&mut self, jeton: char) -> Result<(), ErreurNoyau> {
        if !jeton.is_ascii_digit() && jeton != '.' {
            return Err(ErreurNoyau::JetonInvalide(jeton));
        }

        if self.attente_nouvelle_saisie {
            self.affichage = premier_jeton(jeton);
            self.attente_nouvelle_saisie = false;
            return Ok(());
        }

        if jeton == '.' {
            if self.affichage.contains('.') {
                debug!(affichage = %self.affichage, "second point ignoré");
            } else {
                self.affichage.push('.');
            }
            return Ok(());
        }

        if self.affichage == AFFICHAGE_INITIAL {
            self.affichage = jeton.to_string();
        } else {
            self.affichage.push(jeton);
        }
        Ok(())
    }

    /// Choix d’un opérateur binaire.
    ///
    /// Si une opération attend déjà et qu’un opérande a été saisi depuis,
    /// elle est évaluée tout de suite (chaînage gauche -> droite).
    /// Deux opérateurs d’affilée : le second remplace le premier, sans calcul.
    pub fn choisir_operation(&mut self, op: Operation) {
        if self.attente_nouvelle_saisie && self.operation_en_attente.is_some() {
            self.operation_en_attente = Some(op);
            return;
        }

        let courante = lire_nombre(&self.affichage);

        let gauche = match (self.valeur_precedente, self.operation_en_attente) {
            (Some(precedente), Some(en_attente)) => {
                let r = evaluer(precedente, courante, en_attente);
                self.affichage = nombre_en_texte(r);
                r
            }
            _ => courante,
        };

        self.valeur_precedente = Some(gauche);
        self.operation_en_attente = Some(op);
        self.attente_nouvelle_saisie = true;
    }

    /// "=" : résout l’opération en attente ; sans opération, ne fait rien.
    pub fn egal(&mut self) {
        let (Some(precedente), Some(op)) = (self.valeur_precedente, self.operation_en_attente)
        else {
            return;
        };

        let r = evaluer(precedente, lire_nombre(&self.affichage), op);
        self.affichage = nombre_en_texte(r);
        self.valeur_precedente = None;
        self.operation_en_attente = None;
        self.attente_nouvelle_saisie = true;
    }

    /// C : remise à l’état initial, sans condition.
    pub fn effacer(&mut self) {
        *self = Self::default();
    }
}

fn premier_jeton(jeton: char) -> String {
    if jeton == '.' {
        "0.".to_string()
    } else {
        jeton.to_string()
    }
}
