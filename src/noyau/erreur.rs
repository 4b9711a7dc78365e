// src/noyau/erreur.rs
//
// Erreurs du noyau (expressions) et de la couche commande.
//
// Contrat côté API publique (eval_pre/eval_post/afficher_pre/afficher_post) :
// toutes ces erreurs deviennent `None`. Le détail ne sert qu’à la démarche UI
// et aux logs.

use thiserror::Error;

/// Échec d’évaluation ou de conversion d’une expression PRE/POST.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurExpr {
    /// Pile trop courte pour un opérateur, ou pile finale de taille ≠ 1.
    #[error("expression mal formée")]
    MalFormee,

    /// Ni entier, ni opérateur parmi + - * /.
    #[error("jeton inconnu: '{0}'")]
    JetonInconnu(String),

    #[error("division par zéro")]
    DivisionParZero,
}

/// Ligne de commande rejetée avant d’atteindre le noyau.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurCommande {
    #[error("Entrée vide")]
    CommandeVide,

    #[error("Format de commande incorrect. Utiliser EVAL/MOSTRAR <ORDRE> <EXPR>")]
    FormatIncorrect,

    #[error("Ordre non reconnu '{0}'. Doit être PRE ou POST.")]
    OrdreInconnu(String),

    #[error("Action non reconnue '{0}'. Utiliser EVAL, MOSTRAR ou SALIR.")]
    ActionInconnue(String),
}
