//! Noyau calculatrice
//!
//! Organisation interne :
//! - touches.rs : vocabulaire d’entrée (Touche, Operateur)
//! - arith.rs   : arithmétique f64 + erreur en valeur (÷0)
//! - machine.rs : état + transitions (le cœur)
//! - format.rs  : rendu décimal + arrondi de fin de calcul

pub mod arith;
pub mod format;
pub mod machine;
pub mod touches;


#[cfg(test)]
mod tests_scenarios;

// API publique minimale
pub use machine::Etat;
pub use touches::{Operateur, Touche};
