//! src/noyau/machine.rs
//!
//! Machine à états de la calculatrice (sans vue, sans egui).
//!
//! Rôle : un état unique (affichage, opérande, opérateur, nouvelle_saisie,
//! historique) et une transition pure par touche. L’état est remplacé en bloc
//! à chaque pression — jamais muté en place par l’appelant.
//!
//! Contrats :
//! - Aucune évaluation différée : chaque touche est traitée entièrement.
//! - Aucune panique : les conditions anormales (÷0, √ de négatif, 1/0)
//!   deviennent l’affichage "Error" + message d’historique.
//! - Sortie d’erreur uniquement par C ou CE (ou une nouvelle saisie).

use super::arith::{self, ErreurCalc};
use super::format::{arrondi_affichable, format_nombre, LONGUEUR_AFFICHAGE};
use super::touches::{Operateur, Touche};

/// Affichage en condition anormale.
pub const AFFICHAGE_ERREUR: &str = "Error";

/// Messages d’historique des conditions anormales.
pub const MSG_DIVISION_ZERO: &str = "Cannot divide by zero";
pub const MSG_ENTREE_INVALIDE: &str = "Invalid input";

/// État complet de la calculatrice.
///
/// Invariant : `affichage` est toujours un numéral décimal valide, "0",
/// "Error", ou un numéral terminé par "." en attente de chiffres ; sa
/// longueur est bornée à `LONGUEUR_AFFICHAGE` pendant la saisie.
#[derive(Clone, Debug, PartialEq)]
pub struct Etat {
    // --- affichage ---
    pub affichage: String,
    pub historique: String,

    // --- opération en attente ---
    pub operande: Option<f64>,
    pub operateur: Option<Operateur>,

    // --- saisie ---
    // true : le prochain chiffre démarre un nouveau nombre.
    pub nouvelle_saisie: bool,
}

impl Default for Etat {
    fn default() -> Self {
        Self {
            affichage: "0".to_string(),
            historique: String::new(),
            operande: None,
            operateur: None,
            nouvelle_saisie: true,
        }
    }
}

/// Lecture de l’affichage en nombre, sémantique parseFloat :
/// texte illisible ("Error", "-" après ⌫) => NaN, jamais d’échec.
fn lire(affichage: &str) -> f64 {
    affichage.parse().unwrap_or(f64::NAN)
}

impl Etat {
    /// Transition pure : renvoie l’état suivant, `self` reste intact.
    pub fn appliquer(&self, touche: Touche) -> Etat {
        let mut e = self.clone();
        match touche {
            Touche::Chiffre(d) => e.chiffre(d),
            Touche::Point => e.point(),
            Touche::Operateur(op) => e.operateur(op),
            Touche::Egal => e.egal(),
            Touche::Clear => e = Etat::default(),
            Touche::ClearEntree => e.clear_entree(),
            Touche::Retour => e.retour(),
            Touche::Signe => e.signe(),
            Touche::Racine => e.racine(),
            Touche::Carre => e.carre(),
            Touche::Inverse => e.inverse(),
        }
        e
    }

    /* ------------------------ Saisie ------------------------ */

    /// Chiffre d ∈ 0..=9 : démarre ou prolonge le nombre courant.
    fn chiffre(&mut self, d: u8) {
        debug_assert!(d <= 9);
        let c = char::from(b'0' + d);

        if self.nouvelle_saisie {
            self.affichage = c.to_string();
            self.nouvelle_saisie = false;
        } else if self.affichage.len() < LONGUEUR_AFFICHAGE {
            if self.affichage == "0" {
                // "0" se remplace, on ne préfixe pas
                self.affichage = c.to_string();
            } else {
                self.affichage.push(c);
            }
        }
    }

    fn point(&mut self) {
        if self.nouvelle_saisie {
            self.affichage = "0.".to_string();
            self.nouvelle_saisie = false;
        } else if !self.affichage.contains('.') {
            self.affichage.push('.');
        }
    }

    fn retour(&mut self) {
        // Inerte sur un résultat frais et sur "Error".
        if self.nouvelle_saisie || self.affichage == AFFICHAGE_ERREUR {
            return;
        }
        self.affichage.pop();
        if self.affichage.is_empty() {
            self.affichage = "0".to_string();
        }
    }

    fn signe(&mut self) {
        if self.affichage != "0" && self.affichage != AFFICHAGE_ERREUR {
            self.affichage = format_nombre(-lire(&self.affichage));
        }
    }

    fn clear_entree(&mut self) {
        // Seule la saisie repart ; opération en attente + historique intacts.
        self.affichage = "0".to_string();
        self.nouvelle_saisie = true;
    }

    /* ------------------------ Opérations binaires ------------------------ */

    fn operateur(&mut self, op: Operateur) {
        let courant = lire(&self.affichage);

        match (self.operande, self.operateur) {
            // Premier opérande capturé.
            (None, _) => {
                self.operande = Some(courant);
                self.historique = format!("{} {}", format_nombre(courant), op.symbole());
            }

            // Enchaînement sans "=" : l’opérateur précédent s’applique d’abord.
            (Some(a), Some(prec)) if !self.nouvelle_saisie => {
                match arith::appliquer(a, courant, prec) {
                    Ok(r) => {
                        self.operande = Some(r);
                        self.affichage = format_nombre(r);
                        self.historique = format!("{} {}", format_nombre(r), op.symbole());
                    }
                    Err(ErreurCalc::DivisionParZero) => {
                        self.basculer_erreur(MSG_DIVISION_ZERO);
                        return;
                    }
                }
            }

            // Opérateur re-pressé sans nouvelle saisie : simple remplacement.
            (Some(a), _) => {
                self.historique = format!("{} {}", format_nombre(a), op.symbole());
            }
        }

        self.operateur = Some(op);
        self.nouvelle_saisie = true;
    }

    fn egal(&mut self) {
        let (Some(a), Some(op)) = (self.operande, self.operateur) else {
            return;
        };
        let b = lire(&self.affichage);

        match arith::appliquer(a, b, op) {
            Ok(r) => {
                self.affichage = format_nombre(arrondi_affichable(r));
                self.historique = format!(
                    "{} {} {} =",
                    format_nombre(a),
                    op.symbole(),
                    format_nombre(b)
                );
            }
            Err(ErreurCalc::DivisionParZero) => {
                self.affichage = AFFICHAGE_ERREUR.to_string();
                self.historique = MSG_DIVISION_ZERO.to_string();
            }
        }

        self.operande = None;
        self.operateur = None;
        self.nouvelle_saisie = true;
    }

    /* ------------------------ Fonctions unaires ------------------------ */

    fn racine(&mut self) {
        let n = lire(&self.affichage);
        if n < 0.0 {
            self.erreur_saisie(MSG_ENTREE_INVALIDE);
        } else {
            self.affichage = format_nombre(n.sqrt());
            self.historique = format!("√{} =", format_nombre(n));
            self.nouvelle_saisie = true;
        }
    }

    fn carre(&mut self) {
        let n = lire(&self.affichage);
        self.affichage = format_nombre(n * n);
        self.historique = format!("{}² =", format_nombre(n));
        self.nouvelle_saisie = true;
    }

    fn inverse(&mut self) {
        let n = lire(&self.affichage);
        if n == 0.0 {
            self.erreur_saisie(MSG_DIVISION_ZERO);
        } else {
            self.affichage = format_nombre(1.0 / n);
            self.historique = format!("1/{} =", format_nombre(n));
            self.nouvelle_saisie = true;
        }
    }

    /* ------------------------ Erreurs ------------------------ */

    /// Erreur de saisie (√ de négatif, 1/0) : l’opération en attente survit,
    /// mais le prochain chiffre doit repartir de zéro (invariant d’affichage).
    fn erreur_saisie(&mut self, msg: &str) {
        self.affichage = AFFICHAGE_ERREUR.to_string();
        self.historique = msg.to_string();
        self.nouvelle_saisie = true;
    }

    /// Erreur de calcul en plein enchaînement : tout état en attente est
    /// abandonné, comme pour "=".
    fn basculer_erreur(&mut self, msg: &str) {
        self.affichage = AFFICHAGE_ERREUR.to_string();
        self.historique = msg.to_string();
        self.operande = None;
        self.operateur = None;
        self.nouvelle_saisie = true;
    }
}
