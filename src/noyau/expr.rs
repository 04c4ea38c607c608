// src/noyau/expr.rs
//
// AST typé de l'expression validée.
// - Num : littéral f64
// - Add/Sub/Mul/Div : opérations binaires
//
// IMPORTANT (SAFE):
// - evaluer() ne produit jamais d'infini via '/' : le diviseur nul est
//   détecté AVANT la division (DivisionParZero), même pour 0.0 flottant.
// - Le caractère fini du résultat FINAL est vérifié par le pipeline
//   (eval.rs), pas ici : un intermédiaire non fini se propage et sera
//   classé Depassement à la sortie.

use super::erreur::ErreurEval;

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Num(f64),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Évaluation récursive en sémantique f64 native.
    /// La profondeur est bornée par la taille d'une saisie humaine
    /// (quelques dizaines de caractères), pas de garde-fou de pile.
    pub fn evaluer(&self) -> Result<f64, ErreurEval> {
        use Expr::*;

        match self {
            Num(v) => Ok(*v),

            Add(a, b) => Ok(a.evaluer()? + b.evaluer()?),
            Sub(a, b) => Ok(a.evaluer()? - b.evaluer()?),
            Mul(a, b) => Ok(a.evaluer()? * b.evaluer()?),

            Div(a, b) => {
                let num = a.evaluer()?;
                let den = b.evaluer()?;
                if den == 0.0 {
                    return Err(ErreurEval::DivisionParZero);
                }
                Ok(num / den)
            }
        }
    }
}
