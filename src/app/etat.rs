//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder l’état de la machine (noyau) pour la durée de vie du
//! widget, et le remplacer en bloc à chaque touche. Rien d’autre : pas de
//! logique d’affichage ici, pas de persistance entre sessions.

use crate::noyau::{Etat, Touche};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub etat: Etat,
}

impl AppCalc {
    /// Dispatch d’une touche : transition pure, état remplacé en bloc.
    pub fn presser(&mut self, touche: Touche) {
        self.etat = self.etat.appliquer(touche);
    }
}
