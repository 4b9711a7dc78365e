// src/noyau/jetons.rs

use num_bigint::BigInt;

use super::erreur::ErreurExpr;

/// Opérateurs binaires reconnus. Tous associent à gauche.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Minus,
    Star,
    Slash,
}

impl Op {
    pub fn depuis_str(s: &str) -> Option<Op> {
        match s {
            "+" => Some(Op::Plus),
            "-" => Some(Op::Minus),
            "*" => Some(Op::Star),
            "/" => Some(Op::Slash),
            _ => None,
        }
    }

    /// Plus grand nombre = lie plus fort.
    pub fn precedence(self) -> u8 {
        match self {
            Op::Plus | Op::Minus => 1,
            Op::Star | Op::Slash => 2,
        }
    }

    pub fn symbole(self) -> &'static str {
        match self {
            Op::Plus => "+",
            Op::Minus => "-",
            Op::Star => "*",
            Op::Slash => "/",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    /// Entier littéral. `texte` garde l’écriture d’origine (ex: "+5", "007")
    /// pour l’affichage infix.
    Num { valeur: BigInt, texte: String },
    Op(Op),
}

/// Vrai ssi le jeton est exactement l’un de "+", "-", "*", "/".
pub fn is_operator(token: &str) -> bool {
    Op::depuis_str(token).is_some()
}

/// Précédence d’un opérateur donné sous forme texte ; 0 pour tout le reste.
pub fn precedence(token: &str) -> u8 {
    Op::depuis_str(token).map_or(0, Op::precedence)
}

/// Entier littéral : signe optionnel (+/-) puis au moins un chiffre ASCII.
/// Un "-" seul reste un opérateur.
fn lire_entier(s: &str) -> Option<BigInt> {
    let (negatif, chiffres) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    if chiffres.is_empty() || !chiffres.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let n = BigInt::parse_bytes(chiffres.as_bytes(), 10)?;
    Some(if negatif { -n } else { n })
}

/// Lit UN jeton déjà découpé (pas d’espaces attendus).
pub fn lire_jeton(s: &str) -> Result<Tok, ErreurExpr> {
    if let Some(valeur) = lire_entier(s) {
        return Ok(Tok::Num {
            valeur,
            texte: s.to_string(),
        });
    }

    Op::depuis_str(s)
        .map(Tok::Op)
        .ok_or_else(|| ErreurExpr::JetonInconnu(s.to_string()))
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(" ")
}
