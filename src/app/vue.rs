// src/app/vue.rs
//
// Vue (UI egui) : natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter exécute la commande (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Boutons de commande : EVAL/MOSTRAR × PRE/POST remplacent l’en-tête de la ligne

use eframe::egui;
use tracing::{debug, warn};

use super::etat::{AppCalc, Demarche};
use crate::noyau::jetons::{is_operator, precedence};
use crate::noyau::{analyser, parse_commande, Action, Commande, Notation};

/// Mots d’en-tête reconnus (pour remplacer la commande sans toucher à l’expression).
const MOTS_ENTETE: [&str; 4] = ["EVAL", "MOSTRAR", "PRE", "POST"];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice PRE/POST");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);

                ui.add_space(8.0);
                self.ui_historique(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Commande :");

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: EVAL POST 8 3 - 8 4 4 * + *   ou   MOSTRAR PRE + + * 3 4 5 7")
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter exécute (seulement si le champ est focus)
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.executer_commande();
            self.focus_entree = true;
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’entrée", BoutonAction::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultat + erreur + démarche",
                BoutonAction::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale (historique compris)", BoutonAction::ResetTotal);
        });

        ui.add_space(8.0);

        // En-têtes de commande + "="
        ui.horizontal_wrapped(|ui| {
            for (action, notation) in [
                (Action::Eval, Notation::Prefixe),
                (Action::Eval, Notation::Postfixe),
                (Action::Mostrar, Notation::Prefixe),
                (Action::Mostrar, Notation::Postfixe),
            ] {
                self.bouton_entete(ui, action, notation);
            }

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.executer_commande();
                self.focus_entree = true;
            }
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_pile")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_insert(ui, "7", InsertKind::Digit);
                self.bouton_insert(ui, "8", InsertKind::Digit);
                self.bouton_insert(ui, "9", InsertKind::Digit);
                self.bouton_action(ui, "DEL", "Efface le dernier jeton", BoutonAction::Backspace);
                ui.end_row();

                self.bouton_insert(ui, "4", InsertKind::Digit);
                self.bouton_insert(ui, "5", InsertKind::Digit);
                self.bouton_insert(ui, "6", InsertKind::Digit);
                self.bouton_insert(ui, "+", InsertKind::Op);
                ui.end_row();

                self.bouton_insert(ui, "1", InsertKind::Digit);
                self.bouton_insert(ui, "2", InsertKind::Digit);
                self.bouton_insert(ui, "3", InsertKind::Digit);
                self.bouton_insert(ui, "-", InsertKind::Op);
                ui.end_row();

                self.bouton_insert(ui, "0", InsertKind::Digit);
                self.bouton_insert(ui, "ESP", InsertKind::Espace);
                self.bouton_insert(ui, "*", InsertKind::Op);
                self.bouton_insert(ui, "/", InsertKind::Op);
                ui.end_row();
            });
    }

    /// Backspace par jeton : retire le dernier mot entier (opérateur, nombre, en-tête).
    fn backspace_entree(&mut self) {
        let fin = self.entree.trim_end().len();
        self.entree.truncate(fin);

        let debut = self
            .entree
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map_or(0, |(i, c)| i + c.len_utf8());
        let dernier = &self.entree[debut..];

        // un opérateur part seul ; un nombre perd un chiffre à la fois
        if is_operator(dernier) || MOTS_ENTETE.contains(&dernier) {
            self.entree.truncate(debut);
        } else {
            self.entree.pop();
        }

        let fin = self.entree.trim_end().len();
        self.entree.truncate(fin);
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        let titre = if self.libelle.is_empty() {
            "Résultat"
        } else {
            self.libelle.as_str()
        };
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, "resultat_out", &self.resultat, 2);
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "Ordre de lecture", "demarche_lecture", &self.demarche.lecture);
                Self::champ_demarche(ui, "Infix", "demarche_infix", &self.demarche.infix);
                Self::champ_demarche(ui, "Valeur", "demarche_valeur", &self.demarche.valeur);
                Self::champ_demarche(ui, "Note", "demarche_note", &self.demarche.note);
            });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        let mut rappel: Option<usize> = None;

        egui::CollapsingHeader::new(format!("Historique ({})", self.historique.len()))
            .default_open(false)
            .show(ui, |ui| {
                if self.historique.is_empty() {
                    ui.monospace("vide");
                    return;
                }
                for (i, l) in self.historique.iter().enumerate() {
                    ui.horizontal(|ui| {
                        if ui.small_button("rappel").on_hover_text("Recharger la commande").clicked() {
                            rappel = Some(i);
                        }
                        ui.monospace(l.commande.as_str());
                        ui.label("=>");
                        if l.ok {
                            ui.monospace(l.sortie.as_str());
                        } else {
                            ui.colored_label(ui.visuals().error_fg_color, l.sortie.as_str());
                        }
                    });
                }
            });

        if let Some(i) = rappel {
            self.rappeler(i);
        }
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 1);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: BoutonAction) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                BoutonAction::ClearEntree => self.clear_entree(),
                BoutonAction::ClearResultats => self.clear_resultats(),
                BoutonAction::ResetTotal => self.reset_total(),
                BoutonAction::Backspace => self.backspace_entree(),
            }
            self.focus_entree = true;
        }
    }

    /// Remplace l’en-tête (EVAL/MOSTRAR, PRE/POST) en gardant l’expression.
    fn bouton_entete(&mut self, ui: &mut egui::Ui, action: Action, notation: Notation) {
        let label = format!("{} {}", action.mot(), notation.mot());
        let resp = ui.add_sized([96.0, 28.0], egui::Button::new(label.as_str()));
        if !resp.clicked() {
            return;
        }

        let expr: Vec<&str> = self
            .entree
            .split_whitespace()
            .skip_while(|m| MOTS_ENTETE.contains(&m.to_uppercase().as_str()))
            .collect();

        self.entree = if expr.is_empty() {
            format!("{label} ")
        } else {
            format!("{label} {}", expr.join(" "))
        };
        self.focus_entree = true;
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, kind: InsertKind) {
        let mut btn = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if let InsertKind::Op = kind {
            btn = btn.on_hover_text(format!("précédence {}", precedence(label)));
        }
        if !btn.clicked() {
            return;
        }

        match kind {
            InsertKind::Op => {
                // opérateur = jeton isolé
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                if !self.entree.is_empty() {
                    self.entree.push(' ');
                }
                self.entree.push_str(label);
                self.entree.push(' ');
            }
            InsertKind::Digit => {
                // chiffre collé à un opérateur => espace avant
                let dernier = self.entree.split_whitespace().next_back().unwrap_or("");
                if !self.entree.ends_with(' ') && is_operator(dernier) {
                    self.entree.push(' ');
                }
                self.entree.push_str(label);
            }
            InsertKind::Espace => {
                if !self.entree.is_empty() && !self.entree.ends_with(' ') {
                    self.entree.push(' ');
                }
            }
        }

        self.focus_entree = true;
    }

    /// Exécute la ligne via le noyau, puis dépose résultat/démarche/historique dans l’état UI.
    fn executer_commande(&mut self) {
        let ligne = self.entree.trim().to_string();

        let (action, notation, jetons) = match parse_commande(&ligne) {
            Ok(Commande::Salir) => {
                debug!("SALIR demandé depuis l’UI");
                self.quitter = true;
                return;
            }
            Ok(Commande::Calcul {
                action,
                notation,
                jetons,
            }) => (action, notation, jetons),
            Err(e) => {
                warn!(ligne = %ligne, erreur = %e, "commande rejetée");
                self.set_erreur(e.to_string());
                return;
            }
        };

        match analyser(&jetons, action, notation) {
            Ok(a) => {
                debug!(
                    action = action.mot(),
                    notation = notation.mot(),
                    resultat = %a.resultat,
                    "commande exécutée"
                );
                let libelle = match action {
                    Action::Eval => "Résultat",
                    Action::Mostrar => "Infix",
                };
                let d = a.demarche;
                let d_ui = Demarche {
                    jetons: d.jetons,
                    lecture: d.lecture,
                    infix: d.infix,
                    valeur: d.valeur,
                    note: d.note,
                };
                self.push_historique(ligne, a.resultat.clone(), true);
                self.set_resultats(libelle, a.resultat, d_ui);
            }
            Err(e) => {
                warn!(ligne = %ligne, erreur = %e, "expression invalide");
                self.push_historique(ligne, e.to_string(), false);
                self.set_erreur(format!("Expression invalide : {e}"));
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum BoutonAction {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}

#[derive(Clone, Copy, Debug)]
enum InsertKind {
    Digit,
    Op,
    Espace,
}
