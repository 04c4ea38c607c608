// src/noyau/jetons.rs

use super::erreur::ErreurEval;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,

    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, .5, 5.)
/// - opérateurs + - * /
/// - parenthèses ( )
/// - espaces (ignorés)
///
/// Refusé ici (SyntaxeInvalide) :
/// - tout autre caractère
/// - un point isolé (".")
/// - un second point dans le même nombre ("3..5", "3.5.2")
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            continue;
        }

        // Opérateurs
        match c {
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Minus);
                i += 1;
                continue;
            }
            '*' => {
                out.push(Tok::Star);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Nombre : chiffres, au plus un point ("12", "3.5", ".5", "5.")
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            let mut chiffres = 0usize;

            while i < chars.len() && chars[i].is_ascii_digit() {
                chiffres += 1;
                i += 1;
            }
            if i < chars.len() && chars[i] == '.' {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    chiffres += 1;
                    i += 1;
                }
            }

            if chiffres == 0 {
                return Err(ErreurEval::syntaxe("point sans chiffre"));
            }
            // un second point collé au même nombre : "3..5", "3.5.2"
            if i < chars.len() && chars[i] == '.' {
                return Err(ErreurEval::syntaxe("deux points dans le même nombre"));
            }

            let txt: String = chars[start..i].iter().collect();
            let v: f64 = txt
                .parse()
                .map_err(|_| ErreurEval::syntaxe(format!("nombre invalide: {txt:?}")))?;
            out.push(Tok::Num(v));
            continue;
        }

        return Err(ErreurEval::syntaxe(format!("caractère inattendu: '{c}'")));
    }

    Ok(out)
}
