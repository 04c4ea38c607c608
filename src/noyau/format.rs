// src/noyau/format.rs

/// Au-delà de 2^53, f64 ne représente plus tous les entiers : on ne
/// “replie” en entier que dans cette plage.
const ENTIER_MAX_SUR: f64 = 9_007_199_254_740_992.0; // 2^53

/// Affichage d'un résultat numérique.
///
/// - valeur mathématiquement entière (et dans la plage sûre) : sans
///   point décimal ni zéro de fin ("5", pas "5.0")
/// - sinon : représentation décimale la plus courte qui re-parse à
///   l'identique (Display de f64)
pub fn format_resultat(v: f64) -> String {
    if v == v.trunc() && v.abs() <= ENTIER_MAX_SUR {
        // v as i64 est exact ici (plage 2^53 incluse dans i64)
        return format!("{}", v as i64);
    }
    format!("{v}")
}
