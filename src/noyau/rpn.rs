// src/noyau/rpn.rs
//
// Parcours à pile commun (évaluation + conversion infix)
// Objectif:
// - Une seule discipline de pile pour PRE et POST
// - Les feuilles et les noeuds sont fournis par l’appelant (valeur, fragment...)
//
// Règles:
// - POST : lecture gauche -> droite ; le sommet dépilé est l’opérande DROIT.
// - PRE  : lecture droite -> gauche (jetons inversés) ; le sommet dépilé est
//          l’opérande GAUCHE. Lire une PRE à l’envers est le miroir exact
//          d’une POST, rôles gauche/droite échangés.
// - Pile finale : exactement un élément, sinon expression mal formée.

use num_bigint::BigInt;

use super::erreur::ErreurExpr;
use super::jetons::{lire_jeton, Op, Tok};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notation {
    Prefixe,
    Postfixe,
}

impl Notation {
    /// Mot-clé de commande : "PRE" / "POST" (déjà en majuscules).
    pub fn depuis_mot(mot: &str) -> Option<Notation> {
        match mot {
            "PRE" => Some(Notation::Prefixe),
            "POST" => Some(Notation::Postfixe),
            _ => None,
        }
    }

    pub fn mot(self) -> &'static str {
        match self {
            Notation::Prefixe => "PRE",
            Notation::Postfixe => "POST",
        }
    }

    /// Jetons dans l’ordre où la pile les consomme.
    pub fn ordre_de_lecture<S: AsRef<str>>(self, tokens: &[S]) -> Vec<&str> {
        let it = tokens.iter().map(AsRef::as_ref);
        match self {
            Notation::Prefixe => it.rev().collect(),
            Notation::Postfixe => it.collect(),
        }
    }
}

/// Réduit une suite de jetons PRE/POST à un seul élément de type `T`.
///
/// - `feuille(valeur, texte)` : construit l’élément d’un entier littéral
/// - `noeud(op, gauche, droite)` : combine deux éléments (peut échouer)
///
/// Un jeton inconnu échoue immédiatement, sans être sauté.
pub fn reduire<S, T, F, G>(
    tokens: &[S],
    notation: Notation,
    mut feuille: F,
    mut noeud: G,
) -> Result<T, ErreurExpr>
where
    S: AsRef<str>,
    F: FnMut(BigInt, String) -> T,
    G: FnMut(Op, T, T) -> Result<T, ErreurExpr>,
{
    let mut pile: Vec<T> = Vec::with_capacity(tokens.len());

    for s in notation.ordre_de_lecture(tokens) {
        match lire_jeton(s)? {
            Tok::Num { valeur, texte } => pile.push(feuille(valeur, texte)),

            Tok::Op(op) => {
                let haut = pile.pop().ok_or(ErreurExpr::MalFormee)?;
                let dessous = pile.pop().ok_or(ErreurExpr::MalFormee)?;

                let (gauche, droite) = match notation {
                    Notation::Prefixe => (haut, dessous),
                    Notation::Postfixe => (dessous, haut),
                };

                pile.push(noeud(op, gauche, droite)?);
            }
        }
    }

    if pile.len() != 1 {
        return Err(ErreurExpr::MalFormee);
    }
    pile.pop().ok_or(ErreurExpr::MalFormee)
}
