//! Tests de propriétés (campagne) : le contrat observable du noyau,
//! de bout en bout (Tampon + eval_expression).
//!
//! Chaque test correspond à une propriété affichable à l'utilisateur :
//! ce que le texte contient après une suite de touches, et ce que '='
//! en fait. Les détails internes (RPN, AST) ont leurs tests dans leurs
//! modules respectifs.

use super::erreur::ErreurEval;
use super::eval::eval_expression;
use super::format::format_resultat;
use super::tampon::{Tampon, Touche, AFFICHAGE_DIV_ZERO, AFFICHAGE_ERREUR};

/* ------------------------ Helpers ------------------------ */

fn tape(t: &mut Tampon, s: &str) {
    for c in s.chars() {
        let touche =
            Touche::depuis_char(c).unwrap_or_else(|| panic!("caractère non mappé: {c:?}"));
        t.appliquer(touche);
    }
}

fn texte_apres(s: &str) -> String {
    let mut t = Tampon::default();
    tape(&mut t, s);
    t.texte().to_string()
}

fn operateurs_adjacents(texte: &str) -> bool {
    let cars: Vec<char> = texte.chars().collect();
    cars.windows(2)
        .any(|w| "+-*/".contains(w[0]) && "+-*/".contains(w[1]))
}

/* ------------------------ Propriétés de saisie ------------------------ */

#[test]
fn prop_concatenation_avec_zero_supprime() {
    // une suite de chiffres/points s'accumule telle quelle,
    // zéro de tête supprimé
    assert_eq!(texte_apres("123"), "123");
    assert_eq!(texte_apres("0123"), "123");
    assert_eq!(texte_apres("1.25"), "1.25");
}

#[test]
fn prop_jamais_deux_operateurs_adjacents() {
    // quel que soit l'enchaînement, le second opérateur remplace le premier
    for seq in ["5+-", "5+*", "5*/+-", "1+2-*3"] {
        let texte = texte_apres(seq);
        assert!(
            !operateurs_adjacents(&texte),
            "seq={seq:?} texte={texte:?}"
        );
    }
    assert_eq!(texte_apres("5+-"), "5-");
}

#[test]
fn prop_suppr_termine_sur_zero_jamais_vide() {
    let mut t = Tampon::default();
    tape(&mut t, "9.75*3");
    for _ in 0..20 {
        t.appliquer(Touche::Del);
        assert!(!t.texte().is_empty());
    }
    assert_eq!(t.texte(), "0");
}

#[test]
fn prop_clear_inconditionnel() {
    // C ramène le même état quel que soit le point de départ
    for seq in ["", "12+3", "12+3=", "10/0=", "5.5"] {
        let mut t = Tampon::default();
        tape(&mut t, seq);
        t.appliquer(Touche::Clear);
        assert_eq!(t.texte(), "0", "seq={seq:?}");
        assert_eq!(t.dernier_resultat(), 0.0, "seq={seq:?}");
        assert!(t.nouvelle_expression(), "seq={seq:?}");
    }
}

#[test]
fn prop_chiffre_apres_egal_remplace_tout() {
    let mut t = Tampon::default();
    tape(&mut t, "6*7=");
    assert_eq!(t.texte(), "42");
    tape(&mut t, "3");
    assert_eq!(t.texte(), "3");
}

/* ------------------------ Propriétés d'évaluation ------------------------ */

#[test]
fn prop_precedence_pas_gauche_droite_naive() {
    // 12+3*4 = 24, pas 60
    assert_eq!(eval_expression("12+3*4").unwrap(), 24.0);
}

#[test]
fn prop_division_par_zero_jamais_infinie() {
    assert_eq!(
        eval_expression("10/0"),
        Err(ErreurEval::DivisionParZero)
    );
}

#[test]
fn prop_syntaxe_invalide_classee() {
    for s in ["3..5", "5**3", "(2+3"] {
        assert!(
            matches!(eval_expression(s), Err(ErreurEval::SyntaxeInvalide(_))),
            "s={s:?}"
        );
    }
}

#[test]
fn prop_nombre_seul_et_repli_entier() {
    let v = eval_expression("7").unwrap();
    assert_eq!(v, 7.0);
    assert_eq!(format_resultat(v), "7");

    let v = eval_expression("2.5+2.5").unwrap();
    assert_eq!(v, 5.0);
    assert_eq!(format_resultat(v), "5");
}

/* ------------------------ Propriétés d'erreur bout en bout ------------------------ */

#[test]
fn prop_marqueurs_d_erreur_et_reprise() {
    // Div/0 : marqueur dédié, puis reprise propre sur un chiffre
    let mut t = Tampon::default();
    tape(&mut t, "10/0=");
    assert_eq!(t.texte(), AFFICHAGE_DIV_ZERO);
    tape(&mut t, "4+4=");
    assert_eq!(t.texte(), "8");

    // dépassement : marqueur générique, même reprise
    let mut t = Tampon::default();
    for _ in 0..400 {
        t.appliquer(Touche::Chiffre(9));
    }
    tape(&mut t, "=");
    assert_eq!(t.texte(), AFFICHAGE_ERREUR);
    tape(&mut t, "1+1=");
    assert_eq!(t.texte(), "2");
}

#[test]
fn prop_scenario_complet() {
    // le scénario “caisse” : saisie, correction, enchaînement
    let mut t = Tampon::default();
    tape(&mut t, "12.5*3");
    t.appliquer(Touche::Del); // "12.5*"
    tape(&mut t, "4=");
    assert_eq!(t.texte(), "50");
    tape(&mut t, "+25=");
    assert_eq!(t.texte(), "75");
    assert_eq!(t.dernier_resultat(), 75.0);
}
