// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis reconstruire Expr
//
// C'est ici que la grammaire est réellement appliquée (pas de pré-passe
// regex) :
// - deux opérateurs adjacents => erreur ("5**3", "5*-3", "2+-1")
// - opérateur sans opérande gauche => erreur ("+5", "*2", "(+3")
// - parenthèses déséquilibrées dans les deux sens => erreur
// - arité incomplète => erreur, via la pile de from_rpn ("5+", "()")
//
// Moins unaire:
// - accepté SEULEMENT en tête d'expression ou juste après '(' ; on
//   injecte 0 : "-x" => "0 x -". Après un autre opérateur, c'est une
//   adjacence et on refuse.

use super::erreur::ErreurEval;
use super::expr::Expr;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(12), Plus, Num(3), Star, Num(4)]
///   rpn:    [Num(12), Num(3), Num(4), Star, Plus]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurEval> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un atome ou une expression fermée.
    // Sert à détecter le moins unaire et les opérateurs adjacents.
    let mut prev_was_value = false;

    // vrai en tête d'expression et juste après '(' : seules positions
    // où un moins unaire est admis.
    let mut apres_ouvrante = true;

    // équilibre des parenthèses (')' orpheline refusée immédiatement)
    let mut profondeur: usize = 0;

    for tok in tokens.iter().copied() {
        match tok {
            Tok::Num(_) => {
                out.push(tok);
                prev_was_value = true;
                apres_ouvrante = false;
            }

            Tok::LPar => {
                ops.push(tok);
                profondeur += 1;
                prev_was_value = false;
                apres_ouvrante = true;
            }

            Tok::RPar => {
                if profondeur == 0 {
                    return Err(ErreurEval::syntaxe("parenthèse fermante sans ouvrante"));
                }
                profondeur -= 1;

                // dépile jusqu'à '('
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        break;
                    }
                    out.push(top);
                }

                prev_was_value = true;
                apres_ouvrante = false;
            }

            Tok::Plus | Tok::Star | Tok::Slash => {
                if !prev_was_value {
                    return Err(ErreurEval::syntaxe(if apres_ouvrante {
                        "opérateur sans opérande gauche"
                    } else {
                        "opérateurs adjacents"
                    }));
                }

                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) {
                        break;
                    }
                    if precedence(top) >= precedence(&tok) {
                        out.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }

                ops.push(tok);
                prev_was_value = false;
                apres_ouvrante = false;
            }

            Tok::Minus => {
                if !prev_was_value {
                    // moins unaire : seulement en tête ou après '('
                    if !apres_ouvrante {
                        return Err(ErreurEval::syntaxe("opérateurs adjacents"));
                    }
                    out.push(Tok::Num(0.0));
                }

                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) {
                        break;
                    }
                    if precedence(top) >= precedence(&Tok::Minus) {
                        out.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }

                ops.push(Tok::Minus);
                prev_was_value = false;
                apres_ouvrante = false;
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurEval::syntaxe("parenthèses non fermées"));
        }
        out.push(op);
    }

    Ok(out)
}

/// Construit une Expr à partir d'une RPN.
///
/// Toute violation d'arité (opérande manquante, opérandes en trop)
/// ressort en SyntaxeInvalide : c'est le filet qui attrape "5+",
/// "()", "1 2", etc.
pub fn from_rpn(rpn: &[Tok]) -> Result<Expr, ErreurEval> {
    let mut st: Vec<Expr> = Vec::new();

    for tok in rpn.iter().copied() {
        match tok {
            Tok::Num(v) => st.push(Expr::Num(v)),

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = st.pop().ok_or_else(|| ErreurEval::syntaxe("expression invalide"))?;
                let a = st.pop().ok_or_else(|| ErreurEval::syntaxe("expression invalide"))?;

                let e = match tok {
                    Tok::Plus => Expr::Add(Box::new(a), Box::new(b)),
                    Tok::Minus => Expr::Sub(Box::new(a), Box::new(b)),
                    Tok::Star => Expr::Mul(Box::new(a), Box::new(b)),
                    Tok::Slash => Expr::Div(Box::new(a), Box::new(b)),
                    _ => unreachable!(),
                };

                st.push(e);
            }

            Tok::LPar | Tok::RPar => {
                return Err(ErreurEval::syntaxe("parenthèse inattendue en RPN"))
            }
        }
    }

    if st.len() != 1 {
        return Err(ErreurEval::syntaxe("expression invalide"));
    }
    Ok(st.pop().unwrap())
}
