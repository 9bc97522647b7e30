// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran : affichage formaté par le noyau, aligné à droite (valeur brute en infobulle)
// - Pavé 4 colonnes : C (double) ÷ × / 7 8 9 - / 4 5 6 + / 1 2 3 = (double hauteur) / 0 (double) .
// - Le tout centré dans la fenêtre (ou le canvas)
//
// Note :
// - Pas de clavier : seuls les clics/taps produisent des intentions.

use eframe::egui;

use super::etat::AppCalc;

/// Taille d’une touche simple.
const TOUCHE: [f32; 2] = [64.0, 56.0];

/// Espace entre touches (horizontal et vertical).
const ESPACE: f32 = 8.0;

/// Largeur du pavé : 4 touches + 3 espaces.
const LARGEUR: f32 = TOUCHE[0] * 4.0 + ESPACE * 3.0;

/// Hauteur approximative du widget complet (titre + écran + pavé), pour le centrage vertical.
const HAUTEUR_ESTIMEE: f32 = 520.0;

const HAUTEUR_ECRAN: f32 = 96.0;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(ESPACE, ESPACE);

        let marge_haut = ((ui.available_height() - HAUTEUR_ESTIMEE) / 2.0).max(0.0);
        let marge_gauche = ((ui.available_width() - LARGEUR) / 2.0).max(0.0);

        ui.add_space(marge_haut);
        ui.horizontal(|ui| {
            ui.add_space(marge_gauche);
            ui.vertical(|ui| {
                ui.set_width(LARGEUR);

                ui.vertical_centered(|ui| {
                    ui.heading("Calculatrice");
                    ui.weak("Simple et élégante");
                });
                ui.add_space(12.0);

                self.ui_ecran(ui);
                ui.add_space(12.0);

                self.ui_pave(ui);
            });
        });
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let texte = self.ecran();
        let rappel = self.rappel_operation().unwrap_or_default();
        let complet = self.valeur_complete();

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.set_min_height(HAUTEUR_ECRAN);
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.label(egui::RichText::new(rappel).monospace().weak().size(16.0));
                    let resp = ui.label(egui::RichText::new(texte).monospace().size(40.0));
                    if let Some(brut) = complet {
                        resp.on_hover_text(brut);
                    }
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let [w, h] = TOUCHE;
        let double_largeur = [w * 2.0 + ESPACE, h];
        let double_hauteur = [w, h * 2.0 + ESPACE];

        ui.horizontal(|ui| {
            self.touche(ui, "C", double_largeur, Genre::Effacer);
            self.touche(ui, "÷", TOUCHE, Genre::Operation);
            self.touche(ui, "×", TOUCHE, Genre::Operation);
        });

        ui.horizontal(|ui| {
            self.touche(ui, "7", TOUCHE, Genre::Chiffre);
            self.touche(ui, "8", TOUCHE, Genre::Chiffre);
            self.touche(ui, "9", TOUCHE, Genre::Chiffre);
            self.touche(ui, "-", TOUCHE, Genre::Operation);
        });

        ui.horizontal(|ui| {
            self.touche(ui, "4", TOUCHE, Genre::Chiffre);
            self.touche(ui, "5", TOUCHE, Genre::Chiffre);
            self.touche(ui, "6", TOUCHE, Genre::Chiffre);
            self.touche(ui, "+", TOUCHE, Genre::Operation);
        });

        // "=" occupe deux rangées : bloc de gauche (3 colonnes) + "=" à droite
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    self.touche(ui, "1", TOUCHE, Genre::Chiffre);
                    self.touche(ui, "2", TOUCHE, Genre::Chiffre);
                    self.touche(ui, "3", TOUCHE, Genre::Chiffre);
                });
                ui.horizontal(|ui| {
                    self.touche(ui, "0", double_largeur, Genre::Chiffre);
                    self.touche(ui, ".", TOUCHE, Genre::Chiffre);
                });
            });
            self.touche(ui, "=", double_hauteur, Genre::Egal);
        });
    }

    fn touche(&mut self, ui: &mut egui::Ui, label: &str, taille: [f32; 2], genre: Genre) {
        let bouton = egui::Button::new(egui::RichText::new(label).size(24.0))
            .fill(genre.fond(ui.visuals()));

        if ui.add_sized(taille, bouton).clicked() {
            // refus déjà journalisé par appuyer()
            let _ = self.appuyer(label);
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Genre {
    Chiffre,
    Operation,
    Egal,
    Effacer,
}

impl Genre {
    fn fond(self, visuals: &egui::Visuals) -> egui::Color32 {
        match self {
            Genre::Chiffre => visuals.widgets.inactive.weak_bg_fill,
            Genre::Operation => visuals.selection.bg_fill,
            Genre::Egal => egui::Color32::from_rgb(0xE8, 0x8B, 0x1A),
            Genre::Effacer => egui::Color32::from_rgb(0xC6, 0x3B, 0x3B),
        }
    }
}
