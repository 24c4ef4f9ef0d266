// src/noyau/touches.rs

/// Opérateur binaire du pavé.
///
/// Enum fermé : pas de cas "opérateur inconnu" possible côté arithmétique.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Division,
    Reste,
}

impl Operateur {
    /// Symbole affiché (pavé + historique). Moins/Fois/Division en Unicode,
    /// comme sur les touches.
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "−",
            Operateur::Fois => "×",
            Operateur::Division => "÷",
            Operateur::Reste => "%",
        }
    }
}

/// Une touche du pavé = un événement de la machine à états.
/// Chaque clic de bouton envoie exactement une `Touche`, rien d’autre.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// Chiffre 0..=9.
    Chiffre(u8),
    /// Point décimal ".".
    Point,
    /// Sélection d’un opérateur binaire.
    Operateur(Operateur),
    /// "=" : évalue l’opération en attente.
    Egal,
    /// "C" : remise à zéro totale (affichage + opération + historique).
    Clear,
    /// "CE" : efface seulement la saisie en cours.
    ClearEntree,
    /// "⌫" : retire le dernier caractère saisi.
    Retour,
    /// "±" : change le signe de l’affichage.
    Signe,
    /// "√" : racine carrée de l’affichage.
    Racine,
    /// "x²" : carré de l’affichage.
    Carre,
    /// "1/x" : inverse de l’affichage.
    Inverse,
}
