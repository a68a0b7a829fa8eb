//! Lookup tables for the fixed French answer labels.
//!
//! Exact-label mappers compare against [`normalize_label`] output and never guess: anything
//! outside the table is missing. Keyword mappers (risk and anxiety cycle) use substring
//! containment with a fixed priority.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::types::{DailyTimeBucket, Gender};

const NEUTRAL_DASH: char = '–';

static GENDER_LABELS: Lazy<HashMap<String, Gender>> = Lazy::new(|| {
    [
        ("Homme", Gender::Male),
        ("Femme", Gender::Female),
        ("Autre", Gender::Other),
        ("Je préfère ne pas répondre", Gender::Other),
    ]
    .into_iter()
    .map(|(label, gender)| (normalize_label(label), gender))
    .collect()
});

static DAILY_TIME_LABELS: Lazy<HashMap<String, DailyTimeBucket>> = Lazy::new(|| {
    DailyTimeBucket::ALL
        .into_iter()
        .map(|bucket| (normalize_label(bucket.label()), bucket))
        .collect()
});

static ANXIETY_DELTA_LABELS: Lazy<HashMap<String, i64>> = Lazy::new(|| {
    [("diminue", -1), ("ne change pas", 0), ("augmente", 1)]
        .into_iter()
        .map(|(label, delta)| (normalize_label(label), delta))
        .collect()
});

/// Lower-cases, trims, collapses inner whitespace and folds dash variants to `–`.
pub fn normalize_label(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
        .chars()
        .map(|c| match c {
            '-' | '‐' | '‑' | '‒' | '—' | '−' => NEUTRAL_DASH,
            other => other,
        })
        .collect()
}

fn lookup<T: Copy>(table: &HashMap<String, T>, raw: Option<&str>) -> Option<T> {
    table.get(&normalize_label(raw?)).copied()
}

pub fn map_gender(raw: Option<&str>) -> Option<Gender> {
    lookup(&GENDER_LABELS, raw)
}

pub fn map_daily_time(raw: Option<&str>) -> Option<DailyTimeBucket> {
    lookup(&DAILY_TIME_LABELS, raw)
}

/// `oui` → true, `non` → false, anything else missing.
pub fn map_yes_no(raw: Option<&str>) -> Option<bool> {
    match normalize_label(raw?).as_str() {
        "oui" => Some(true),
        "non" => Some(false),
        _ => None,
    }
}

/// Change in anxiety after use: −1 (decreases), 0 (unchanged), +1 (increases).
pub fn map_anxiety_delta(raw: Option<&str>) -> Option<i64> {
    lookup(&ANXIETY_DELTA_LABELS, raw)
}

/// Risk contribution of a frequency answer, in {0, 0.25, 0.5, 1}.
///
/// Unrecognized text scores 0.
pub fn frequency_risk(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };
    let text = raw.to_lowercase();
    let contains_any = |keywords: &[&str]| keywords.iter().any(|k| text.contains(k));

    if contains_any(&["jamais", "non", "pas du tout"]) {
        0.0
    } else if text.contains("rarement") {
        0.25
    } else if text.contains("parfois") {
        0.5
    } else if contains_any(&["souvent", "toujours", "fréquemment", "oui"]) {
        1.0
    } else {
        0.0
    }
}

/// 1 when the self-rated productivity impact is 5 or more, else 0.
pub fn productivity_risk(raw: Option<&str>) -> f64 {
    let parsed = raw.and_then(|value| value.trim().replace(',', ".").parse::<f64>().ok());
    match parsed {
        Some(score) if score >= 5.0 => 1.0,
        _ => 0.0,
    }
}

/// Does anxiety drive usage: 2 (yes), 1 (sometimes), 0 otherwise.
pub fn cycle_trigger(raw: Option<&str>) -> i64 {
    let text = raw.map(str::to_lowercase).unwrap_or_default();
    if text.contains("oui") {
        2
    } else if text.contains("parfois") {
        1
    } else {
        0
    }
}

/// Does usage change anxiety: 1 (worse), −1 (better), 0 otherwise.
pub fn cycle_outcome(raw: Option<&str>) -> i64 {
    let text = raw.map(str::to_lowercase).unwrap_or_default();
    if text.contains("augmente") {
        1
    } else if text.contains("diminue") {
        -1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_labels_map_and_others_are_missing() {
        assert_eq!(map_gender(Some("Homme")), Some(Gender::Male));
        assert_eq!(map_gender(Some(" femme ")), Some(Gender::Female));
        assert_eq!(map_gender(Some("Autre")), Some(Gender::Other));
        assert_eq!(
            map_gender(Some("Je  préfère ne pas RÉPONDRE")),
            Some(Gender::Other)
        );
        assert_eq!(map_gender(Some("H")), None);
        assert_eq!(map_gender(None), None);
    }

    #[test]
    fn daily_time_buckets_tolerate_dash_variants() {
        assert_eq!(
            map_daily_time(Some("Moins de 30 minutes")),
            Some(DailyTimeBucket::UnderHalfHour)
        );
        assert_eq!(
            map_daily_time(Some("30 min - 1 heure")),
            Some(DailyTimeBucket::HalfHourToHour)
        );
        assert_eq!(
            map_daily_time(Some("1-2 heures")),
            Some(DailyTimeBucket::OneToTwoHours)
        );
        assert_eq!(
            map_daily_time(Some("PLUS DE 4 HEURES")),
            Some(DailyTimeBucket::OverFourHours)
        );
        assert_eq!(map_daily_time(Some("beaucoup")), None);
    }

    #[test]
    fn bucket_estimates_are_ordered() {
        let hours: Vec<f64> = DailyTimeBucket::ALL
            .iter()
            .map(|b| b.hours_estimate())
            .collect();
        assert!(hours.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(DailyTimeBucket::OverFourHours.hours_estimate(), 5.0);
        assert_eq!(DailyTimeBucket::UnderHalfHour.intensity(), 1);
    }

    #[test]
    fn yes_no_is_strict() {
        assert_eq!(map_yes_no(Some("Oui")), Some(true));
        assert_eq!(map_yes_no(Some(" NON ")), Some(false));
        assert_eq!(map_yes_no(Some("Parfois")), None);
        assert_eq!(map_yes_no(Some("nan")), None);
        assert_eq!(map_yes_no(None), None);
    }

    #[test]
    fn anxiety_delta_labels() {
        assert_eq!(map_anxiety_delta(Some("Diminue")), Some(-1));
        assert_eq!(map_anxiety_delta(Some("Ne change pas")), Some(0));
        assert_eq!(map_anxiety_delta(Some("augmente ")), Some(1));
        assert_eq!(map_anxiety_delta(Some("nan")), None);
        assert_eq!(map_anxiety_delta(None), None);
    }

    #[test]
    fn frequency_keywords_follow_priority() {
        assert_eq!(frequency_risk(Some("Jamais")), 0.0);
        assert_eq!(frequency_risk(Some("Rarement")), 0.25);
        assert_eq!(frequency_risk(Some("Parfois")), 0.5);
        assert_eq!(frequency_risk(Some("Très souvent")), 1.0);
        assert_eq!(frequency_risk(Some("Toujours")), 1.0);
        assert_eq!(frequency_risk(Some("Fréquemment")), 1.0);
        assert_eq!(frequency_risk(Some("Oui")), 1.0);
        assert_eq!(frequency_risk(Some("Non, pas du tout")), 0.0);
        assert_eq!(frequency_risk(Some("Peut-être")), 0.0);
        assert_eq!(frequency_risk(None), 0.0);
    }

    #[test]
    fn productivity_threshold() {
        assert_eq!(productivity_risk(Some("5")), 1.0);
        assert_eq!(productivity_risk(Some(" 7 ")), 1.0);
        assert_eq!(productivity_risk(Some("4,5")), 0.0);
        assert_eq!(productivity_risk(Some("5,5")), 1.0);
        assert_eq!(productivity_risk(Some("4")), 0.0);
        assert_eq!(productivity_risk(Some("beaucoup")), 0.0);
        assert_eq!(productivity_risk(None), 0.0);
    }

    #[test]
    fn anxiety_cycle_classifiers() {
        assert_eq!(cycle_trigger(Some("Oui, souvent")), 2);
        assert_eq!(cycle_trigger(Some("Parfois")), 1);
        assert_eq!(cycle_trigger(Some("Non")), 0);
        assert_eq!(cycle_trigger(None), 0);

        assert_eq!(cycle_outcome(Some("Augmente")), 1);
        assert_eq!(cycle_outcome(Some("Diminue")), -1);
        assert_eq!(cycle_outcome(Some("Ne change pas")), 0);
        assert_eq!(cycle_outcome(None), 0);
    }
}
