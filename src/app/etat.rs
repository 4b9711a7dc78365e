//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur, historique,
//! démarche) et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Historique borné.

use std::collections::VecDeque;

/// Nombre de lignes d’historique par défaut.
pub const HISTORIQUE_DEFAUT: usize = 50;

/// Garde-fou : on borne l’historique (anti-abus / mémoire).
pub const HISTORIQUE_MAX: usize = 1000;

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub lecture: String,
    pub infix: String,
    pub valeur: String,
    pub note: String,
}

/// Une commande passée + ce qu’elle a produit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LigneHistorique {
    pub commande: String,
    pub sortie: String,
    pub ok: bool,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub libelle: String,  // "Résultat" (EVAL) ou "Infix" (MOSTRAR)
    pub resultat: String, // dernière sortie réussie
    pub erreur: String,   // message d’erreur (commande ou expression)

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- historique (plus récent en tête) ---
    pub historique: VecDeque<LigneHistorique>,
    pub historique_max: usize,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
    // SALIR demandé : app.rs ferme la fenêtre.
    pub quitter: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::avec_historique(HISTORIQUE_DEFAUT)
    }
}

impl AppCalc {
    pub fn avec_historique(historique_max: usize) -> Self {
        let historique_max = historique_max.min(HISTORIQUE_MAX);
        Self {
            entree: String::new(),
            libelle: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            historique: VecDeque::with_capacity(historique_max),
            historique_max,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
            quitter: false,
        }
    }

    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + historique).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.historique.clear();
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.libelle.clear();
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// On CONSERVE le dernier résultat pour ne pas “effacer l’écran” sur une faute ;
    /// la démarche, elle, n’est plus fiable.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet.
    pub fn set_resultats(
        &mut self,
        libelle: impl Into<String>,
        resultat: impl Into<String>,
        demarche: Demarche,
    ) {
        self.erreur.clear();
        self.libelle = libelle.into();
        self.resultat = resultat.into();
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /// Ajoute en tête ; la plus ancienne ligne tombe si la borne est atteinte.
    pub fn push_historique(&mut self, commande: impl Into<String>, sortie: impl Into<String>, ok: bool) {
        if self.historique_max == 0 {
            return;
        }
        while self.historique.len() >= self.historique_max {
            self.historique.pop_back();
        }
        self.historique.push_front(LigneHistorique {
            commande: commande.into(),
            sortie: sortie.into(),
            ok,
        });
    }

    /// Recharge une commande de l’historique dans l’entrée.
    pub fn rappeler(&mut self, index: usize) {
        if let Some(l) = self.historique.get(index) {
            self.entree = l.commande.clone();
            self.focus_entree = true;
        }
    }
}
