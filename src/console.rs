// src/console.rs
//
// Boucle de commandes texte (natif seulement) : `--console`.
//
//   Action : EVAL POST 8 3 - 8 4 4 * + *
//   Résultat : 120
//
// Passe par l’API publique à Option (eval_pre/eval_post/afficher_pre/afficher_post) :
// un résultat absent donne un message d’erreur générique, puis la boucle continue.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::noyau::erreur::ErreurCommande;
use crate::noyau::{
    afficher_post, afficher_pre, eval_post, eval_pre, parse_commande, Action, Commande, Notation,
};

#[derive(Debug, PartialEq, Eq)]
pub enum Reponse {
    /// Ligne à afficher.
    Texte(String),
    /// Ligne vide : rien à dire.
    Rien,
    Quitter,
}

/// Traite une ligne saisie.
pub fn repondre(ligne: &str) -> Reponse {
    let (action, notation, jetons) = match parse_commande(ligne) {
        Ok(Commande::Salir) => return Reponse::Quitter,
        Ok(Commande::Calcul {
            action,
            notation,
            jetons,
        }) => (action, notation, jetons),
        Err(ErreurCommande::CommandeVide) => return Reponse::Rien,
        Err(e) => {
            warn!(ligne = ligne.trim(), erreur = %e, "commande rejetée");
            return Reponse::Texte(format!("Erreur : {e}"));
        }
    };

    debug!(action = action.mot(), notation = notation.mot(), jetons = jetons.len(), "commande");

    let texte = match action {
        Action::Eval => {
            let r = match notation {
                Notation::Prefixe => eval_pre(&jetons),
                Notation::Postfixe => eval_post(&jetons),
            };
            match r {
                Some(v) => format!("Résultat : {v}"),
                None => "Erreur : l’expression est invalide ou mal formée pour l’évaluation.".into(),
            }
        }
        Action::Mostrar => {
            let r = match notation {
                Notation::Prefixe => afficher_pre(&jetons),
                Notation::Postfixe => afficher_post(&jetons),
            };
            match r {
                Some(s) => format!("Infix : {s}"),
                None => {
                    "Erreur : l’expression est invalide ou mal formée pour la conversion infix.".into()
                }
            }
        }
    };

    Reponse::Texte(texte)
}

/// Boucle complète sur n’importe quelle entrée/sortie (testable).
/// S’arrête sur SALIR ou fin de flux.
pub fn boucle<R: BufRead, W: Write>(mut entree: R, mut sortie: W) -> io::Result<()> {
    writeln!(sortie, "Calculatrice d’expressions PRE/POST")?;
    writeln!(
        sortie,
        "Commandes : EVAL PRE/POST <expr>, MOSTRAR PRE/POST <expr>, SALIR"
    )?;

    let mut ligne = String::new();
    loop {
        write!(sortie, "\nAction : ")?;
        sortie.flush()?;

        ligne.clear();
        if entree.read_line(&mut ligne)? == 0 {
            // fin de flux (Ctrl-D, pipe fermé)
            writeln!(sortie)?;
            break;
        }

        match repondre(&ligne) {
            Reponse::Texte(t) => writeln!(sortie, "{t}")?,
            Reponse::Rien => {}
            Reponse::Quitter => {
                writeln!(sortie, "Sortie du programme.")?;
                break;
            }
        }
    }

    Ok(())
}

pub fn run() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    boucle(stdin.lock(), stdout.lock())
}
