// src/noyau/commande.rs
//
// Grammaire de la ligne de commande (console + UI) :
//   EVAL|MOSTRAR PRE|POST <jeton> <jeton> ...
//   SALIR
//
// La ligne est passée en majuscules puis découpée sur les blancs.
// Le noyau (eval/format) ne voit que les jetons.

use super::erreur::ErreurCommande;
use super::eval::Action;
use super::rpn::Notation;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Commande {
    Calcul {
        action: Action,
        notation: Notation,
        jetons: Vec<String>,
    },
    Salir,
}

impl Action {
    pub fn depuis_mot(mot: &str) -> Option<Action> {
        match mot {
            "EVAL" => Some(Action::Eval),
            "MOSTRAR" => Some(Action::Mostrar),
            _ => None,
        }
    }

    pub fn mot(self) -> &'static str {
        match self {
            Action::Eval => "EVAL",
            Action::Mostrar => "MOSTRAR",
        }
    }
}

pub fn parse_commande(ligne: &str) -> Result<Commande, ErreurCommande> {
    let mots: Vec<String> = ligne
        .to_uppercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();

    let Some(premier) = mots.first() else {
        return Err(ErreurCommande::CommandeVide);
    };

    if premier == "SALIR" {
        return Ok(Commande::Salir);
    }

    if mots.len() < 3 {
        return Err(ErreurCommande::FormatIncorrect);
    }

    // ordre vérifié avant l’action (même priorité que la boucle d’origine)
    let notation =
        Notation::depuis_mot(&mots[1]).ok_or_else(|| ErreurCommande::OrdreInconnu(mots[1].clone()))?;
    let action =
        Action::depuis_mot(premier).ok_or_else(|| ErreurCommande::ActionInconnue(premier.clone()))?;

    Ok(Commande::Calcul {
        action,
        notation,
        jetons: mots[2..].to_vec(),
    })
}
