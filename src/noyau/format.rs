// src/noyau/format.rs

/// Largeur maximale de l’affichage pendant la saisie (en caractères).
pub const LONGUEUR_AFFICHAGE: usize = 12;

/// Formate un f64 pour l’affichage : représentation décimale la plus courte
/// qui fait l’aller-retour, avec -0 normalisé en "0".
pub fn format_nombre(x: f64) -> String {
    if x == 0.0 {
        // couvre aussi -0.0 (égal à 0.0 en IEEE)
        return "0".to_string();
    }
    format!("{x}")
}

/// Arrondi de fin de calcul ("=") : si le rendu décimal dépasse la largeur
/// de l’affichage, on arrondit à 10 chiffres significatifs puis on relit
/// la valeur (l’affichage repart du nombre arrondi, pas du texte long).
pub fn arrondi_affichable(x: f64) -> f64 {
    if format_nombre(x).len() <= LONGUEUR_AFFICHAGE {
        return x;
    }
    // {:.9e} = 10 chiffres significatifs en notation scientifique
    format!("{x:.9e}").parse().unwrap_or(x)
}
