//! Tests des opérations (campagne) : binaires, enchaînement, unaires, erreurs.
//!
//! Notes (aligné avec le comportement du noyau) :
//! - L’enchaînement est associatif à gauche, sans priorité d’opérateurs :
//!   `4 × 2 + 1 =` calcule (4×2) d’abord, puis +1.
//! - Un opérateur re-pressé sans nouvelle saisie remplace l’opérateur
//!   (historique mis à jour, aucun calcul).
//! - Toute condition anormale est en bande : affichage "Error" + message
//!   d’historique, jamais de panique.

use super::arith::{self, ErreurCalc};
use super::format::{arrondi_affichable, format_nombre};
use super::machine::{Etat, AFFICHAGE_ERREUR, MSG_DIVISION_ZERO, MSG_ENTREE_INVALIDE};
use super::touches::{Operateur, Touche};

use Operateur::{Division, Fois, Moins, Plus, Reste};
use Touche::{Carre, Chiffre, Egal, Inverse, Point, Racine, Signe};

fn op(o: Operateur) -> Touche {
    Touche::Operateur(o)
}

/// Déroule une séquence de touches depuis l’état initial.
fn suite(touches: &[Touche]) -> Etat {
    let mut etat = Etat::default();
    for &t in touches {
        etat = etat.appliquer(t);
    }
    etat
}

/* ------------------------ Binaires simples ------------------------ */

#[test]
fn scn_addition() {
    let e = suite(&[Chiffre(7), op(Plus), Chiffre(5), Egal]);
    assert_eq!(e.affichage, "12");
    assert_eq!(e.historique, "7 + 5 =");
}

#[test]
fn scn_soustraction() {
    let e = suite(&[Chiffre(9), op(Moins), Chiffre(4), Egal]);
    assert_eq!(e.affichage, "5");
    assert_eq!(e.historique, "9 − 4 =");
}

#[test]
fn scn_multiplication() {
    let e = suite(&[Chiffre(6), op(Fois), Chiffre(7), Egal]);
    assert_eq!(e.affichage, "42");
    assert_eq!(e.historique, "6 × 7 =");
}

#[test]
fn scn_division() {
    let e = suite(&[Chiffre(8), op(Division), Chiffre(4), Egal]);
    assert_eq!(e.affichage, "2");
    assert_eq!(e.historique, "8 ÷ 4 =");
}

#[test]
fn scn_reste_signe_du_dividende() {
    let e = suite(&[Chiffre(7), op(Reste), Chiffre(3), Egal]);
    assert_eq!(e.affichage, "1");
    assert_eq!(e.historique, "7 % 3 =");

    // dividende négatif => reste négatif (sémantique flottante native)
    let e = suite(&[Chiffre(7), Signe, op(Reste), Chiffre(3), Egal]);
    assert_eq!(e.affichage, "-1");
    assert_eq!(e.historique, "-7 % 3 =");
}

/* ------------------------ Enchaînement ------------------------ */

#[test]
fn scn_chainage_gauche_sans_priorite() {
    // 4 × 2 + 1 = : (4×2) d’abord, l’historique montre l’étape 8 + 1
    let e = suite(&[Chiffre(4), op(Fois), Chiffre(2), op(Plus), Chiffre(1), Egal]);
    assert_eq!(e.affichage, "9");
    assert_eq!(e.historique, "8 + 1 =");
}

#[test]
fn scn_chainage_long() {
    let e = suite(&[
        Chiffre(1),
        Chiffre(0),
        Chiffre(0),
        op(Moins),
        Chiffre(1),
        op(Moins),
        Chiffre(1),
        Egal,
    ]);
    assert_eq!(e.affichage, "98");
    assert_eq!(e.historique, "99 − 1 =");
}

#[test]
fn scn_operateur_repete_sans_calcul() {
    // Deux opérateurs d’affilée : pas de second calcul, affichage intact
    let e = suite(&[Chiffre(7), op(Plus), op(Plus)]);
    assert_eq!(e.affichage, "7");
    assert_eq!(e.historique, "7 +");
    assert_eq!(e.operande, Some(7.0));
}

#[test]
fn scn_operateur_remplace() {
    // Le dernier opérateur pressé gagne : 7 + × 5 = => 35
    let e = suite(&[Chiffre(7), op(Plus), op(Fois), Chiffre(5), Egal]);
    assert_eq!(e.affichage, "35");
    assert_eq!(e.historique, "7 × 5 =");
}

#[test]
fn scn_egal_sans_operation_en_attente() {
    let e = suite(&[Chiffre(5), Egal]);
    assert_eq!(e.affichage, "5");
    assert_eq!(e.historique, "");
}

/* ------------------------ Division par zéro ------------------------ */

#[test]
fn scn_division_par_zero() {
    let e = suite(&[Chiffre(8), op(Division), Chiffre(0), Egal]);
    assert_eq!(e.affichage, AFFICHAGE_ERREUR);
    assert_eq!(e.historique, MSG_DIVISION_ZERO);
    assert_eq!(e.operande, None);
    assert_eq!(e.operateur, None);
}

#[test]
fn scn_division_par_zero_en_chainage() {
    // 8 ÷ 0 + : l’erreur tombe au moment du chaînage, l’opération est abandonnée
    let e = suite(&[Chiffre(8), op(Division), Chiffre(0), op(Plus)]);
    assert_eq!(e.affichage, AFFICHAGE_ERREUR);
    assert_eq!(e.historique, MSG_DIVISION_ZERO);
    assert_eq!(e.operande, None);
    assert_eq!(e.operateur, None);

    // et on repart proprement
    let e = suite(&[
        Chiffre(8),
        op(Division),
        Chiffre(0),
        op(Plus),
        Chiffre(5),
        Egal,
    ]);
    assert_eq!(e.affichage, "5");
}

/* ------------------------ Unaires ------------------------ */

#[test]
fn scn_racine() {
    let e = suite(&[Chiffre(9), Racine]);
    assert_eq!(e.affichage, "3");
    assert_eq!(e.historique, "√9 =");
    assert!(e.nouvelle_saisie);

    let e = suite(&[Chiffre(2), Racine]);
    assert_eq!(e.affichage, format_nombre(2f64.sqrt()));
}

#[test]
fn scn_racine_de_negatif() {
    let e = suite(&[Chiffre(4), Signe, Racine]);
    assert_eq!(e.affichage, AFFICHAGE_ERREUR);
    assert_eq!(e.historique, MSG_ENTREE_INVALIDE);
}

#[test]
fn scn_carre() {
    let e = suite(&[Chiffre(1), Chiffre(2), Carre]);
    assert_eq!(e.affichage, "144");
    assert_eq!(e.historique, "12² =");
    assert!(e.nouvelle_saisie);
}

#[test]
fn scn_inverse() {
    let e = suite(&[Chiffre(8), Inverse]);
    assert_eq!(e.affichage, "0.125");
    assert_eq!(e.historique, "1/8 =");
}

#[test]
fn scn_inverse_de_zero() {
    let e = suite(&[Chiffre(0), Inverse]);
    assert_eq!(e.affichage, AFFICHAGE_ERREUR);
    assert_eq!(e.historique, MSG_DIVISION_ZERO);
}

/* ------------------------ Arrondi de fin de calcul ------------------------ */

#[test]
fn scn_arrondi_10_chiffres_significatifs() {
    // 2/3 en double fait 18 caractères : arrondi à 10 chiffres au "="
    let e = suite(&[Chiffre(2), op(Division), Chiffre(3), Egal]);
    assert_eq!(e.affichage, "0.6666666667");
    assert_eq!(e.historique, "2 ÷ 3 =");
}

#[test]
fn scn_arrondi_gomme_le_bruit_binaire() {
    // 0.1 + 0.2 = 0.30000000000000004 en double => affiché "0.3"
    let e = suite(&[Point, Chiffre(1), op(Plus), Point, Chiffre(2), Egal]);
    assert_eq!(e.affichage, "0.3");
    assert_eq!(e.historique, "0.1 + 0.2 =");
}

/* ------------------------ Cœur arithmétique ------------------------ */

#[test]
fn scn_arith_division_par_zero_en_valeur() {
    assert_eq!(
        arith::appliquer(8.0, 0.0, Division),
        Err(ErreurCalc::DivisionParZero)
    );
    assert_eq!(arith::appliquer(8.0, 2.0, Division), Ok(4.0));
}

#[test]
fn scn_arith_reste_par_zero_donne_nan() {
    // seul ÷ a la garde ; % hérite du NaN flottant
    let r = arith::appliquer(5.0, 0.0, Reste).unwrap();
    assert!(r.is_nan());
}

#[test]
fn scn_format_nombre() {
    assert_eq!(format_nombre(12.0), "12");
    assert_eq!(format_nombre(0.5), "0.5");
    assert_eq!(format_nombre(-0.0), "0");
    assert_eq!(format_nombre(-5.0), "-5");
}

#[test]
fn scn_arrondi_affichable() {
    // court : inchangé
    assert_eq!(arrondi_affichable(0.125), 0.125);
    // long : 10 chiffres significatifs
    assert_eq!(arrondi_affichable(2.0 / 3.0), 0.6666666667);
}
