//! Tests de propriétés (campagne) : arbres aléatoires -> PRE/POST -> noyau.
//!
//! But : vérifier les invariants sur beaucoup d’expressions sans chauffer la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//!
//! Invariants :
//! - eval_post(post(A)) == valeur(A) et eval_pre(pre(A)) == valeur(A)
//!   (None si une division par zéro apparaît dans A)
//! - l’infix produit, relu par un shunting-yard standard (gauche, * / > + -),
//!   redonne la même valeur
//! - PRE et POST du même arbre donnent le même infix
//! - deux appels identiques donnent le même résultat

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_traits::Zero;

use super::jetons::Op;
use super::{afficher_post, afficher_pre, eval_post, eval_pre};

/* ------------------------ RNG déterministe minimal ------------------------ */

struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Arbres ------------------------ */

enum Arbre {
    Num(u32),
    Noeud(Op, Box<Arbre>, Box<Arbre>),
}

const OPS: [Op; 4] = [Op::Plus, Op::Minus, Op::Star, Op::Slash];

fn gen_arbre(rng: &mut Rng, profondeur: u32) -> Arbre {
    if profondeur == 0 || rng.pick(4) == 0 {
        // 0 inclus : les divisions par zéro doivent donner None partout
        return Arbre::Num(rng.pick(10));
    }
    let op = OPS[rng.pick(4) as usize];
    let g = gen_arbre(rng, profondeur - 1);
    let d = gen_arbre(rng, profondeur - 1);
    Arbre::Noeud(op, Box::new(g), Box::new(d))
}

fn calcule(op: Op, a: BigInt, b: BigInt) -> Option<BigInt> {
    match op {
        Op::Plus => Some(a + b),
        Op::Minus => Some(a - b),
        Op::Star => Some(a * b),
        Op::Slash if b.is_zero() => None,
        Op::Slash => Some(a / b),
    }
}

fn valeur(a: &Arbre) -> Option<BigInt> {
    match a {
        Arbre::Num(n) => Some(BigInt::from(*n)),
        Arbre::Noeud(op, g, d) => calcule(*op, valeur(g)?, valeur(d)?),
    }
}

fn en_post(a: &Arbre, out: &mut Vec<String>) {
    match a {
        Arbre::Num(n) => out.push(n.to_string()),
        Arbre::Noeud(op, g, d) => {
            en_post(g, out);
            en_post(d, out);
            out.push(op.symbole().to_string());
        }
    }
}

fn en_pre(a: &Arbre, out: &mut Vec<String>) {
    match a {
        Arbre::Num(n) => out.push(n.to_string()),
        Arbre::Noeud(op, g, d) => {
            out.push(op.symbole().to_string());
            en_pre(g, out);
            en_pre(d, out);
        }
    }
}

/* ------------------------ Relecture infix (shunting-yard) ------------------------ */

#[derive(Clone, Copy, Debug)]
enum Lu {
    Num(u32),
    Op(Op),
    LPar,
    RPar,
}

fn lire_infix(s: &str) -> Vec<Lu> {
    let chars: Vec<char> = s.chars().collect();
    let mut out = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        match c {
            ' ' => {}
            '(' => out.push(Lu::LPar),
            ')' => out.push(Lu::RPar),
            '0'..='9' => {
                let start = i;
                while i + 1 < chars.len() && chars[i + 1].is_ascii_digit() {
                    i += 1;
                }
                let n: String = chars[start..=i].iter().collect();
                out.push(Lu::Num(n.parse().unwrap()));
            }
            _ => {
                let op = Op::depuis_str(&c.to_string())
                    .unwrap_or_else(|| panic!("caractère inattendu {c:?} dans {s:?}"));
                out.push(Lu::Op(op));
            }
        }
        i += 1;
    }
    out
}

/// Infix -> RPN, opérateurs associatifs à gauche.
fn infix_vers_rpn(lus: &[Lu]) -> Vec<Lu> {
    let mut out = Vec::new();
    let mut ops: Vec<Lu> = Vec::new();

    for &l in lus {
        match l {
            Lu::Num(_) => out.push(l),
            Lu::LPar => ops.push(l),
            Lu::RPar => {
                while let Some(top) = ops.pop() {
                    if matches!(top, Lu::LPar) {
                        break;
                    }
                    out.push(top);
                }
            }
            Lu::Op(op) => {
                while let Some(&Lu::Op(top)) = ops.last() {
                    if top.precedence() >= op.precedence() {
                        out.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }
                ops.push(l);
            }
        }
    }
    while let Some(op) = ops.pop() {
        out.push(op);
    }
    out
}

fn valeur_infix(s: &str) -> Option<BigInt> {
    let mut st: Vec<BigInt> = Vec::new();
    for l in infix_vers_rpn(&lire_infix(s)) {
        match l {
            Lu::Num(n) => st.push(BigInt::from(n)),
            Lu::Op(op) => {
                let b = st.pop().expect("rpn invalide");
                let a = st.pop().expect("rpn invalide");
                st.push(calcule(op, a, b)?);
            }
            Lu::LPar | Lu::RPar => panic!("parenthèse en RPN pour {s:?}"),
        }
    }
    assert_eq!(st.len(), 1, "infix {s:?}");
    st.pop()
}

/* ------------------------ Campagne ------------------------ */

#[test]
fn prop_arbres_aleatoires() {
    let start = Instant::now();
    let max = Duration::from_secs(10);
    let mut rng = Rng::new(0xC0FFEE);

    for _ in 0..2000 {
        budget(start, max);

        let a = gen_arbre(&mut rng, 5);
        let attendu = valeur(&a);

        let mut post = Vec::new();
        en_post(&a, &mut post);
        let mut pre = Vec::new();
        en_pre(&a, &mut pre);

        assert_eq!(eval_post(&post), attendu, "post={post:?}");
        assert_eq!(eval_pre(&pre), attendu, "pre={pre:?}");

        let infix_post = afficher_post(&post)
            .unwrap_or_else(|| panic!("afficher_post a échoué pour {post:?}"));
        let infix_pre =
            afficher_pre(&pre).unwrap_or_else(|| panic!("afficher_pre a échoué pour {pre:?}"));
        assert_eq!(infix_post, infix_pre, "post={post:?} pre={pre:?}");

        assert_eq!(valeur_infix(&infix_post), attendu, "infix={infix_post:?}");
    }
}

#[test]
fn prop_idempotence() {
    let mut rng = Rng::new(7);
    for _ in 0..200 {
        let a = gen_arbre(&mut rng, 4);
        let mut post = Vec::new();
        en_post(&a, &mut post);
        let mut pre = Vec::new();
        en_pre(&a, &mut pre);

        assert_eq!(eval_post(&post), eval_post(&post));
        assert_eq!(eval_pre(&pre), eval_pre(&pre));
        assert_eq!(afficher_post(&post), afficher_post(&post));
        assert_eq!(afficher_pre(&pre), afficher_pre(&pre));
    }
}

#[test]
fn prop_relecture_exemples() {
    // sanity du shunting-yard de test lui-même
    assert_eq!(valeur_infix("1 - 2 - 3"), Some(BigInt::from(-4)));
    assert_eq!(valeur_infix("1 - (2 - 3)"), Some(BigInt::from(2)));
    assert_eq!(valeur_infix("(8 - 3) * (8 + 4 * 4)"), Some(BigInt::from(120)));
    assert_eq!(valeur_infix("8 / 0"), None);
}
