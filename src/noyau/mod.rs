//! Noyau PRE/POST
//!
//! Organisation interne :
//! - jetons.rs   : jetons (entiers, + - * /), précédences
//! - rpn.rs      : notation + parcours à pile commun (PRE inversée)
//! - eval.rs     : évaluation entière + pipeline UI (démarche)
//! - format.rs   : conversion infix (parenthèses minimales sûres)
//! - commande.rs : EVAL|MOSTRAR PRE|POST ..., SALIR
//! - erreur.rs   : erreurs typées

pub mod commande;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use commande::{parse_commande, Commande};
pub use eval::{analyser, eval_post, eval_pre, Action};
pub use format::{afficher_post, afficher_pre};
pub use rpn::Notation;
