// src/noyau/erreur.rs
//
// Taxonomie d'erreurs du noyau.
// Tout échec d'évaluation passe par ErreurEval : rien ne panique,
// rien ne sort du noyau autrement que par ce type.

use thiserror::Error;

/// Erreur d'évaluation d'une expression.
///
/// C'est le tampon (voir `tampon.rs`) qui traduit chaque variante en
/// texte d'affichage ; ici on ne décrit que la cause.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ErreurEval {
    /// Expression vide après retrait des opérateurs de fin.
    #[error("entrée vide")]
    Vide,

    /// Violation de la grammaire : caractère interdit, opérateurs
    /// adjacents, double point dans un nombre, parenthèses déséquilibrées…
    /// Le détail est conservé pour les journaux, pas pour l'affichage.
    #[error("syntaxe invalide: {0}")]
    SyntaxeInvalide(String),

    /// Diviseur évalué à zéro (y compris 0.0 flottant).
    #[error("division par zéro")]
    DivisionParZero,

    /// Résultat non fini (infini ou NaN).
    #[error("dépassement de capacité")]
    Depassement,
}

impl ErreurEval {
    /// Raccourci : erreur de syntaxe avec message.
    pub fn syntaxe(msg: impl Into<String>) -> Self {
        ErreurEval::SyntaxeInvalide(msg.into())
    }
}
