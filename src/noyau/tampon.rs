//! src/noyau/tampon.rs
//!
//! Tampon de saisie (machine à états).
//!
//! Rôle : transformer le flux de touches en un texte d'expression bien
//! formé, AVANT toute évaluation. Les invariants de saisie sont garantis
//! par construction, pas détectés après coup :
//! - jamais deux opérateurs consécutifs (le dernier remplace l'autre)
//! - au plus un point par série numérique
//! - texte jamais vide ("0" est l'état canonique sans saisie)
//!
//! Contrats :
//! - Aucune panique, aucune erreur retournée : chaque touche aboutit.
//! - La validité sémantique n'est contrôlée qu'au '=' (via eval.rs).
//! - Une session = un Tampon ; aucun partage.

use super::erreur::ErreurEval;
use super::eval::eval_expression;
use super::format::format_resultat;

/// Texte canonique “aucune saisie”.
pub const TEXTE_ZERO: &str = "0";

/// Marqueur d'erreur générique (syntaxe, dépassement).
pub const AFFICHAGE_ERREUR: &str = "Error";

/// Marqueur dédié à la division par zéro.
pub const AFFICHAGE_DIV_ZERO: &str = "Error: Div/0";

/// Une touche = une interaction utilisateur, déjà décodée par le
/// “front” (boutons ou clavier). Rien d'autre n'entre dans le noyau.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(u8), // 0..=9
    Point,

    Plus,
    Minus,
    Star,
    Slash,

    Clear, // C
    Del,   // DEL
    Egal,  // =
}

impl Touche {
    /// Décodage clavier : '0'..'9', '.', '+', '-', '*', '/', 'c'/'C', '='.
    /// DEL n'a pas de caractère (Backspace est géré par la vue).
    pub fn depuis_char(c: char) -> Option<Touche> {
        match c {
            '0'..='9' => Some(Touche::Chiffre(c as u8 - b'0')),
            '.' => Some(Touche::Point),
            '+' => Some(Touche::Plus),
            '-' => Some(Touche::Minus),
            '*' => Some(Touche::Star),
            '/' => Some(Touche::Slash),
            'c' | 'C' => Some(Touche::Clear),
            '=' => Some(Touche::Egal),
            _ => None,
        }
    }
}

/// État d'une session de saisie.
///
/// Créé une fois au démarrage, muté uniquement par [`Tampon::appliquer`],
/// jamais détruit en cours de session (seulement remis à zéro par C).
#[derive(Clone, Debug)]
pub struct Tampon {
    // texte affiché tel quel par la vue
    texte: String,

    // vrai juste après un résultat, une erreur ou C : la prochaine
    // saisie de chiffre/point REMPLACE le texte au lieu de l'étendre
    nouvelle_expression: bool,

    // dernier résultat numérique (0.0 tant que rien n'a été évalué)
    dernier_resultat: f64,
}

impl Default for Tampon {
    fn default() -> Self {
        Self {
            texte: TEXTE_ZERO.to_string(),
            nouvelle_expression: true,
            dernier_resultat: 0.0,
        }
    }
}

impl Tampon {
    /* ------------------------ Lecture (pour la vue et les tests) ------------------------ */

    /// Texte courant, à rendre tel quel.
    pub fn texte(&self) -> &str {
        &self.texte
    }

    pub fn dernier_resultat(&self) -> f64 {
        self.dernier_resultat
    }

    pub fn nouvelle_expression(&self) -> bool {
        self.nouvelle_expression
    }

    /* ------------------------ Transition ------------------------ */

    /// Applique une touche. Ne panique jamais, ne retourne jamais
    /// d'erreur : les états intermédiaires malformés sont impossibles.
    pub fn appliquer(&mut self, touche: Touche) {
        match touche {
            Touche::Clear => self.effacer(),
            Touche::Del => self.supprimer_dernier(),
            Touche::Egal => self.evaluer(),

            Touche::Plus => self.inserer_operateur('+'),
            Touche::Minus => self.inserer_operateur('-'),
            Touche::Star => self.inserer_operateur('*'),
            Touche::Slash => self.inserer_operateur('/'),

            Touche::Chiffre(d) => self.inserer_chiffre((b'0' + d % 10) as char),
            Touche::Point => self.inserer_point(),
        }
    }

    /* ------------------------ Touches de contrôle ------------------------ */

    /// C : remise à zéro totale, quel que soit l'état courant.
    fn effacer(&mut self) {
        self.texte.clear();
        self.texte.push_str(TEXTE_ZERO);
        self.dernier_resultat = 0.0;
        self.nouvelle_expression = true;
    }

    /// DEL : retire le dernier caractère ; un texte d'un seul caractère
    /// redevient "0" (jamais de texte vide). Ne touche pas au mode frais.
    fn supprimer_dernier(&mut self) {
        if self.texte.len() > 1 {
            self.texte.pop();
        } else {
            self.texte.clear();
            self.texte.push_str(TEXTE_ZERO);
        }
    }

    /// '=' : évalue l'instantané du texte et installe le résultat (ou le
    /// marqueur d'erreur). Dans tous les cas la prochaine saisie de
    /// chiffre/point repart sur une expression neuve.
    fn evaluer(&mut self) {
        match eval_expression(&self.texte) {
            Ok(v) => {
                self.texte = format_resultat(v);
                self.dernier_resultat = v;
            }
            Err(ErreurEval::Vide) => {
                self.texte.clear();
                self.texte.push_str(TEXTE_ZERO);
            }
            Err(ErreurEval::DivisionParZero) => {
                self.texte.clear();
                self.texte.push_str(AFFICHAGE_DIV_ZERO);
            }
            Err(ErreurEval::SyntaxeInvalide(_)) | Err(ErreurEval::Depassement) => {
                self.texte.clear();
                self.texte.push_str(AFFICHAGE_ERREUR);
            }
        }
        self.nouvelle_expression = true;
    }

    /* ------------------------ Touches de saisie ------------------------ */

    /// Opérateur : remplace un opérateur de fin au lieu d'empiler
    /// (le dernier tapé gagne) ; sinon s'ajoute au texte. En mode frais,
    /// l'opérateur ENCHAÎNE sur le résultat précédent ("5" puis '+' donne
    /// "5+").
    fn inserer_operateur(&mut self, c: char) {
        if self.texte.ends_with(['+', '-', '*', '/']) {
            self.texte.pop();
        }
        self.texte.push(c);
        self.nouvelle_expression = false;
    }

    fn inserer_chiffre(&mut self, c: char) {
        if self.nouvelle_expression {
            self.texte.clear();
            self.texte.push(c);
            self.nouvelle_expression = false;
            return;
        }

        // zéro de tête supprimé : "0" puis '7' donne "7", pas "07"
        if self.texte == TEXTE_ZERO {
            self.texte.clear();
        }
        self.texte.push(c);
    }

    fn inserer_point(&mut self) {
        if self.nouvelle_expression {
            self.texte.clear();
            self.texte.push('.');
            self.nouvelle_expression = false;
            return;
        }

        // un seul point par série numérique ; sinon la touche est ignorée
        if self.serie_courante_a_point() {
            return;
        }
        self.texte.push('.');
    }

    /// Série numérique courante = fin du texte jusqu'au dernier
    /// opérateur ou parenthèse. Vrai si elle contient déjà un point.
    fn serie_courante_a_point(&self) -> bool {
        for c in self.texte.chars().rev() {
            match c {
                '.' => return true,
                '+' | '-' | '*' | '/' | '(' | ')' => return false,
                _ => {}
            }
        }
        false
    }
}
