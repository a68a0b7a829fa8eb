use polars::prelude::*;

use crate::errors::ParserError;
use crate::model::SchemaReport;

/// Attention-check question with no analytical value.
pub const DECOY_COLUMN: &str = "Quelle est la couleur du ciel?";

/// Survey question text, as exported, paired with its canonical column name.
pub const SOURCE_COLUMNS: [(&str, &str); 28] = [
    ("Horodateur", "timestamp"),
    ("1. Quel est votre âge ?", "age"),
    ("2. Genre", "gender"),
    ("3. Quel est votre statut actuel ?", "status"),
    ("4. Pays de résidence", "country"),
    (
        "1. Quels réseaux sociaux utilisez-vous au moins une fois par semaine ?",
        "platforms",
    ),
    (
        "2. Parmi ces réseaux, lequel utilisez-vous le plus ?",
        "main_platform",
    ),
    (
        "3.Et lequel utilisez-vous en deuxième le plus ?",
        "second_platform",
    ),
    (
        "4. En moyenne, combien de temps passez-vous par jour sur tous les réseaux sociaux confondus ?",
        "daily_time_cat",
    ),
    (
        " 5. À quels moments de la journée utilisez-vous le plus les réseaux sociaux ?",
        "day_moments",
    ),
    (
        "6. Quelles activités faites-vous le plus souvent sur les réseaux sociaux ?",
        "activities",
    ),
    (
        "7. Pour le réseau que vous utilisez le plus, l’utilisation influence comment votre humeur ?",
        "mood_impact",
    ),
    (
        "8. Après avoir utilisé vos réseaux sociaux, vous vous sentez le plus souvent :",
        "emotions",
    ),
    (
        "9. Pensez-vous que votre usage des réseaux sociaux affecte votre confiance en vous ?",
        "self_esteem_impact",
    ),
    (
        "10. En général, qu’est-ce qui vous fait arrêter de scroller ?",
        "stop_scrolling_reason",
    ),
    (
        "11. Sur une échelle de 1 à 7, quel a été votre niveau d’anxiété cette semaine ?",
        "anxiety_score",
    ),
    (
        "12. Quand vous vous sentez anxieux, utilisez-vous davantage les réseaux sociaux ?",
        "anxiety_more_usage",
    ),
    (
        "13. Après avoir utilisé les réseaux sociaux, votre anxiété :",
        "anxiety_after",
    ),
    (
        "14. Avez-vous des difficultés de sommeil liées à l’usage des réseaux sociaux ?",
        "sleep_difficulties",
    ),
    (
        "15. À quelle fréquence utilisez-vous votre téléphone dans les 30 minutes avant de dormir ?",
        "phone_before_sleep",
    ),
    (
        "16. Avez-vous déjà essayé de réduire votre usage, sans succès ?",
        "failed_reduction",
    ),
    (
        "17. Perdez-vous la notion du temps lorsque vous utilisez les réseaux sociaux ?",
        "time_loss",
    ),
    (
        "18. Vous sentez-vous obligé(e) de vérifier vos notifications ?",
        "notification_compulsion",
    ),
    (
        "19. Votre usage impacte-t-il votre productivité ou vos études ?",
        "productivity_impact",
    ),
    (
        "20. Vous arrive-t-il de culpabiliser après avoir utilisé les réseaux sociaux ?",
        "guilt_after_use",
    ),
    (
        "21. Sur une échelle de 1 à 7, comment évalueriez-vous votre maîtrise de votre usage des réseaux sociaux ?",
        "self_control_score",
    ),
    (
        "22. Pensez-vous que votre usage actuel est sain ?",
        "usage_is_healthy",
    ),
    (
        "23. Qu’aimeriez-vous améliorer dans votre usage ?",
        "improvement_wish",
    ),
];

pub fn canonical_columns() -> impl Iterator<Item = &'static str> {
    SOURCE_COLUMNS.iter().map(|(_, canonical)| *canonical)
}

/// Drops the decoy column and renames source headers to canonical names in place.
///
/// Headers match exactly first, then by trimmed equality. A frame that already carries a
/// canonical name is left as is, so mapping is idempotent.
pub fn apply_schema(df: &mut DataFrame) -> Result<SchemaReport, ParserError> {
    let mut report = SchemaReport::default();

    if let Some(decoy) = find_header(&column_names(df), DECOY_COLUMN) {
        df.drop_in_place(&decoy).map_err(|err| ParserError::Validation {
            message: format!("failed to drop column '{decoy}': {err}"),
        })?;
        report.dropped_decoy = true;
    }

    let present = column_names(df);

    for (source, canonical) in SOURCE_COLUMNS {
        if present.iter().any(|name| name == canonical) {
            continue;
        }
        match find_header(&present, source) {
            Some(header) => {
                df.rename(&header, canonical.into())
                    .map_err(|err| ParserError::Validation {
                        message: format!("failed to rename '{header}' to '{canonical}': {err}"),
                    })?;
                report.renamed += 1;
            }
            None => report.absent.push(canonical),
        }
    }

    report.unmapped = present
        .into_iter()
        .filter(|name| !is_known_header(name))
        .collect();

    Ok(report)
}

fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect()
}

fn find_header(present: &[String], wanted: &str) -> Option<String> {
    present
        .iter()
        .find(|name| name.as_str() == wanted)
        .or_else(|| present.iter().find(|name| name.trim() == wanted.trim()))
        .cloned()
}

fn is_known_header(name: &str) -> bool {
    SOURCE_COLUMNS.iter().any(|(source, canonical)| {
        name == *canonical || name == *source || name.trim() == source.trim()
    })
}
