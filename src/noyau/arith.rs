// src/noyau/arith.rs

use super::touches::Operateur;

/// Échec arithmétique, porté en valeur (jamais de panique).
/// L’UI le traduit en affichage "Error" + message d’historique.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErreurCalc {
    DivisionParZero,
}

/// Applique `a op b` en double IEEE.
///
/// Contrats :
/// - seule la division signale `DivisionParZero` (b == 0) ;
/// - `%` est le reste flottant natif : le signe suit le dividende
///   (0 % 0 et x % 0 donnent NaN, comme en flottant standard).
pub fn appliquer(a: f64, b: f64, op: Operateur) -> Result<f64, ErreurCalc> {
    match op {
        Operateur::Plus => Ok(a + b),
        Operateur::Moins => Ok(a - b),
        Operateur::Fois => Ok(a * b),
        Operateur::Division => {
            if b == 0.0 {
                Err(ErreurCalc::DivisionParZero)
            } else {
                Ok(a / b)
            }
        }
        Operateur::Reste => Ok(a % b),
    }
}
