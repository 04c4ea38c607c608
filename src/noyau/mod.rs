//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - tampon.rs  : tampon de saisie (machine à états Touche -> texte)
//! - jetons.rs  : tokenisation
//! - rpn.rs     : shunting-yard + construction Expr
//! - expr.rs    : AST typé + évaluation f64
//! - format.rs  : affichage du résultat (repli entier)
//! - eval.rs    : pipeline complet
//! - erreur.rs  : taxonomie ErreurEval

pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod tampon;

#[cfg(test)]
mod tests_proprietes;


// API publique minimale
pub use erreur::ErreurEval;
pub use eval::eval_expression;
pub use format::format_resultat;
pub use tampon::{Tampon, Touche};
