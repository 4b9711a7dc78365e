//! Noyau : évaluation (pipeline réel)
//!
//! jetons -> ordre de lecture (PRE inversée) -> pile -> entier
//!
//! `analyser` fait le même travail pour l’UI : résultat + démarche
//! (jetons, ordre de lecture, forme infix, valeur si calculable).

use num_bigint::BigInt;
use num_traits::Zero;

use super::erreur::ErreurExpr;
use super::format::to_infix;
use super::jetons::{format_tokens, Op};
use super::rpn::{reduire, Notation};

/// Ce que l’utilisateur demande : calculer ou montrer en infix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Eval,
    Mostrar,
}

#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub lecture: String,
    pub infix: String,
    pub valeur: String,
    pub note: String,
}

#[derive(Clone, Debug)]
pub struct Analyse {
    pub resultat: String,
    pub demarche: DemarcheNoyau,
}

fn appliquer(op: Op, a: BigInt, b: BigInt) -> Result<BigInt, ErreurExpr> {
    Ok(match op {
        Op::Plus => a + b,
        Op::Minus => a - b,
        Op::Star => a * b,
        Op::Slash => {
            if b.is_zero() {
                return Err(ErreurExpr::DivisionParZero);
            }
            // BigInt : division tronquée vers zéro
            a / b
        }
    })
}

/// Évalue une expression PRE ou POST déjà découpée en jetons.
pub fn evaluer<S: AsRef<str>>(tokens: &[S], notation: Notation) -> Result<BigInt, ErreurExpr> {
    reduire(tokens, notation, |valeur, _| valeur, appliquer)
}

/// API publique : EVAL POST. `None` si l’expression est invalide
/// (y compris division par zéro).
pub fn eval_post<S: AsRef<str>>(tokens: &[S]) -> Option<BigInt> {
    evaluer(tokens, Notation::Postfixe).ok()
}

/// API publique : EVAL PRE. `None` si l’expression est invalide.
pub fn eval_pre<S: AsRef<str>>(tokens: &[S]) -> Option<BigInt> {
    evaluer(tokens, Notation::Prefixe).ok()
}

/// Pipeline complet pour l’UI.
///
/// L’erreur renvoyée est celle de l’action demandée. La démarche tente
/// toujours les deux (infix + valeur) : une division par zéro n’empêche pas
/// MOSTRAR, et reste signalée dans la démarche.
pub fn analyser<S: AsRef<str>>(
    tokens: &[S],
    action: Action,
    notation: Notation,
) -> Result<Analyse, ErreurExpr> {
    let infix = to_infix(tokens, notation);
    let valeur = evaluer(tokens, notation);

    let resultat = match action {
        Action::Eval => valeur.clone()?.to_string(),
        Action::Mostrar => infix.clone()?,
    };

    let demarche = DemarcheNoyau {
        jetons: format_tokens(tokens),
        lecture: format_tokens(&notation.ordre_de_lecture(tokens)),
        infix: infix.unwrap_or_else(|e| e.to_string()),
        valeur: match valeur {
            Ok(v) => v.to_string(),
            Err(e) => e.to_string(),
        },
        note: match notation {
            Notation::Prefixe => {
                "PRE : jetons lus de droite à gauche ; le sommet de pile est l’opérande gauche.".into()
            }
            Notation::Postfixe => {
                "POST : jetons lus de gauche à droite ; le sommet de pile est l’opérande droit.".into()
            }
        },
    };

    Ok(Analyse {
        resultat,
        demarche,
    })
}
