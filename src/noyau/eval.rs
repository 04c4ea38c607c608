//! Noyau — évaluation (pipeline réel)
//!
//! retrait des opérateurs de fin -> tokenize -> RPN -> Expr -> evaluer
//!        -> contrôle fini -> f64
//!
//! Remarque : aucune pré-passe regex ; la grammaire est appliquée par le
//! couple tokenize/to_rpn/from_rpn (voir rpn.rs), la validation et la
//! construction de l'AST se font en une seule passe.

use super::erreur::ErreurEval;
use super::jetons::tokenize;
use super::rpn::{from_rpn, to_rpn};

/// API publique : évalue un instantané du texte du tampon.
///
/// Sans état, ré-entrante : chaque session peut l'appeler sans
/// coordination.
///
/// Étapes :
/// 1. retire les opérateurs de fin ("12+" vaut "12") ; vide => Vide
/// 2. tokenize (caractères hors grammaire, double point => SyntaxeInvalide)
/// 3. RPN + AST (adjacences, parenthèses, arité => SyntaxeInvalide)
/// 4. évaluation f64 (diviseur nul => DivisionParZero)
/// 5. résultat fini exigé (infini/NaN => Depassement)
pub fn eval_expression(texte: &str) -> Result<f64, ErreurEval> {
    // 1) Opérateurs de fin
    let mut s = texte.trim();
    while s.ends_with(['+', '-', '*', '/']) {
        s = s[..s.len() - 1].trim_end();
    }
    if s.is_empty() {
        return Err(ErreurEval::Vide);
    }

    // 2) Jetons
    let jetons = tokenize(s)?;

    // 3) RPN -> AST
    let rpn = to_rpn(&jetons)?;
    let expr = from_rpn(&rpn)?;

    // 4) Évaluation
    let valeur = expr.evaluer()?;

    // 5) Fini exigé (pas de propagation d'infini/NaN à l'affichage)
    if !valeur.is_finite() {
        return Err(ErreurEval::Depassement);
    }

    Ok(valeur)
}
