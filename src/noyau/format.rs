// src/noyau/format.rs
//
// PRE/POST -> infix (parenthèses là où l’arbre l’exige)

use super::erreur::ErreurExpr;
use super::rpn::{reduire, Notation};

/// Précédence réservée aux littéraux : jamais de parenthèses autour.
const PRECEDENCE_ATOME: u8 = 3;

/// Morceau d’infix déjà construit + précédence de son opérateur racine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
    pub texte: String,
    pub precedence: u8,
}

impl Fragment {
    fn atome(texte: String) -> Self {
        Self {
            texte,
            precedence: PRECEDENCE_ATOME,
        }
    }
}

fn entre_parentheses(texte: &str) -> String {
    format!("({texte})")
}

/// Conversion vers l’infix.
///
/// Parenthèses:
/// - gauche : dès qu’elle est composée (précédence < 3), quelle que soit
///   la précédence de l’opérateur courant (l’arbre d’origine est conservé)
/// - droite : si sa précédence ne dépasse pas strictement celle de
///   l’opérateur courant (associativité à gauche)
pub fn to_infix<S: AsRef<str>>(tokens: &[S], notation: Notation) -> Result<String, ErreurExpr> {
    let racine = reduire(
        tokens,
        notation,
        |_, texte| Fragment::atome(texte),
        |op, gauche, droite| {
            let p = op.precedence();

            let g = if gauche.precedence < PRECEDENCE_ATOME {
                entre_parentheses(&gauche.texte)
            } else {
                gauche.texte
            };
            let d = if droite.precedence <= p {
                entre_parentheses(&droite.texte)
            } else {
                droite.texte
            };

            Ok(Fragment {
                texte: format!("{g} {} {d}", op.symbole()),
                precedence: p,
            })
        },
    )?;

    Ok(racine.texte)
}

/// API publique : MOSTRAR PRE. `None` si l’expression est invalide.
pub fn afficher_pre<S: AsRef<str>>(tokens: &[S]) -> Option<String> {
    to_infix(tokens, Notation::Prefixe).ok()
}

/// API publique : MOSTRAR POST. `None` si l’expression est invalide.
pub fn afficher_post<S: AsRef<str>>(tokens: &[S]) -> Option<String> {
    to_infix(tokens, Notation::Postfixe).ok()
}
