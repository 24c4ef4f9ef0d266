// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Pavé fixe 4 colonnes, 20 touches : un clic = une Touche, rien d’autre
// - Pas de raccourcis clavier, pas d’anti-rebond : l’egui immédiat suffit
// - Couleurs par famille de touches (effacement / opérateurs / chiffres / "=")

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::Touche;

/// Dimensions des touches (tactile : gros boutons).
const TAILLE_TOUCHE: [f32; 2] = [70.0, 46.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);

        self.ui_ecran(ui);

        ui.add_space(4.0);

        self.ui_pave(ui);

        ui.add_space(4.0);
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new("Calculatrice Pro v1.0").weak().small());
        });
    }

    /* ------------------------ Écran ------------------------ */

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        // Ligne d’historique : alignée à droite, jamais d’affaissement
        // vertical quand elle est vide.
        let historique = if self.etat.historique.is_empty() {
            " "
        } else {
            self.etat.historique.as_str()
        };
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(historique)
                    .monospace()
                    .color(egui::Color32::from_rgb(192, 132, 252)),
            );
        });

        // Affichage principal : cadre sombre, gros monospace à droite.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(&self.etat.affichage)
                            .monospace()
                            .size(34.0),
                    );
                });
            });
    }

    /* ------------------------ Pavé (20 touches) ------------------------ */

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        use crate::noyau::Operateur::*;
        use Touche::*;

        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([8.0, 8.0])
            .show(ui, |ui| {
                self.touche(ui, "C", Clear, Famille::Efface);
                self.touche(ui, "CE", ClearEntree, Famille::EffaceEntree);
                self.touche(ui, "⌫", Retour, Famille::Fonction);
                self.touche(ui, "÷", Touche::Operateur(Division), Famille::Operateur);
                ui.end_row();

                self.touche(ui, "√", Racine, Famille::Fonction);
                self.touche(ui, "x²", Carre, Famille::Fonction);
                self.touche(ui, "1/x", Inverse, Famille::Fonction);
                self.touche(ui, "×", Touche::Operateur(Fois), Famille::Operateur);
                ui.end_row();

                self.touche(ui, "7", Chiffre(7), Famille::Chiffre);
                self.touche(ui, "8", Chiffre(8), Famille::Chiffre);
                self.touche(ui, "9", Chiffre(9), Famille::Chiffre);
                self.touche(ui, "−", Touche::Operateur(Moins), Famille::Operateur);
                ui.end_row();

                self.touche(ui, "4", Chiffre(4), Famille::Chiffre);
                self.touche(ui, "5", Chiffre(5), Famille::Chiffre);
                self.touche(ui, "6", Chiffre(6), Famille::Chiffre);
                self.touche(ui, "+", Touche::Operateur(Plus), Famille::Operateur);
                ui.end_row();

                self.touche(ui, "1", Chiffre(1), Famille::Chiffre);
                self.touche(ui, "2", Chiffre(2), Famille::Chiffre);
                self.touche(ui, "3", Chiffre(3), Famille::Chiffre);
                self.touche(ui, "%", Touche::Operateur(Reste), Famille::Operateur);
                ui.end_row();

                self.touche(ui, "±", Signe, Famille::Chiffre);
                self.touche(ui, "0", Chiffre(0), Famille::Chiffre);
                self.touche(ui, ".", Point, Famille::Chiffre);
                self.touche(ui, "=", Egal, Famille::Egal);
                ui.end_row();
            });
    }

    fn touche(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche, famille: Famille) {
        let bouton = egui::Button::new(
            egui::RichText::new(label)
                .size(18.0)
                .color(egui::Color32::WHITE),
        )
        .fill(famille.fond());

        if ui.add_sized(TAILLE_TOUCHE, bouton).clicked() {
            self.presser(touche);
        }
    }
}

/// Famille visuelle d’une touche (couleur de fond seulement).
#[derive(Clone, Copy, Debug)]
enum Famille {
    Efface,
    EffaceEntree,
    Fonction,
    Operateur,
    Chiffre,
    Egal,
}

impl Famille {
    fn fond(self) -> egui::Color32 {
        match self {
            Famille::Efface => egui::Color32::from_rgb(220, 38, 38),
            Famille::EffaceEntree => egui::Color32::from_rgb(234, 88, 12),
            Famille::Fonction => egui::Color32::from_rgb(71, 85, 105),
            Famille::Operateur => egui::Color32::from_rgb(147, 51, 234),
            Famille::Chiffre => egui::Color32::from_rgb(51, 65, 85),
            Famille::Egal => egui::Color32::from_rgb(22, 163, 74),
        }
    }
}
