use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed set of country categories produced by the country normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Country {
    Tunisia,
    France,
    Lebanon,
    #[serde(rename = "USA")]
    Usa,
    Canada,
    Luxembourg,
    Other,
    Unknown,
}

impl Country {
    pub const ALL: [Country; 8] = [
        Country::Tunisia,
        Country::France,
        Country::Lebanon,
        Country::Usa,
        Country::Canada,
        Country::Luxembourg,
        Country::Other,
        Country::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Country::Tunisia => "Tunisia",
            Country::France => "France",
            Country::Lebanon => "Lebanon",
            Country::Usa => "USA",
            Country::Canada => "Canada",
            Country::Luxembourg => "Luxembourg",
            Country::Other => "Other",
            Country::Unknown => "Unknown",
        }
    }

    /// Whether a match rule may target this category. `Other` and `Unknown` are fallbacks.
    pub fn is_matchable(&self) -> bool {
        !matches!(self, Country::Other | Country::Unknown)
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Country {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        Country::ALL
            .iter()
            .copied()
            .find(|country| country.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| format!("unknown country category '{trimmed}'"))
    }
}

/// Answer buckets of the "time spent per day" question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DailyTimeBucket {
    UnderHalfHour,
    HalfHourToHour,
    OneToTwoHours,
    TwoToThreeHours,
    ThreeToFourHours,
    OverFourHours,
}

impl DailyTimeBucket {
    pub const ALL: [DailyTimeBucket; 6] = [
        DailyTimeBucket::UnderHalfHour,
        DailyTimeBucket::HalfHourToHour,
        DailyTimeBucket::OneToTwoHours,
        DailyTimeBucket::TwoToThreeHours,
        DailyTimeBucket::ThreeToFourHours,
        DailyTimeBucket::OverFourHours,
    ];

    /// Label as it appears in the survey form.
    pub fn label(&self) -> &'static str {
        match self {
            DailyTimeBucket::UnderHalfHour => "Moins de 30 minutes",
            DailyTimeBucket::HalfHourToHour => "30 min – 1 heure",
            DailyTimeBucket::OneToTwoHours => "1–2 heures",
            DailyTimeBucket::TwoToThreeHours => "2–3 heures",
            DailyTimeBucket::ThreeToFourHours => "3–4 heures",
            DailyTimeBucket::OverFourHours => "Plus de 4 heures",
        }
    }

    /// Representative hours per day for the bucket.
    pub fn hours_estimate(&self) -> f64 {
        match self {
            DailyTimeBucket::UnderHalfHour => 0.25,
            DailyTimeBucket::HalfHourToHour => 0.75,
            DailyTimeBucket::OneToTwoHours => 1.5,
            DailyTimeBucket::TwoToThreeHours => 2.5,
            DailyTimeBucket::ThreeToFourHours => 3.5,
            DailyTimeBucket::OverFourHours => 5.0,
        }
    }

    /// Ordinal position, 1 (least) to 6 (most).
    pub fn intensity(&self) -> i64 {
        match self {
            DailyTimeBucket::UnderHalfHour => 1,
            DailyTimeBucket::HalfHourToHour => 2,
            DailyTimeBucket::OneToTwoHours => 3,
            DailyTimeBucket::TwoToThreeHours => 4,
            DailyTimeBucket::ThreeToFourHours => 5,
            DailyTimeBucket::OverFourHours => 6,
        }
    }
}

/// How the six risk dimensions are scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskScheme {
    /// Frequency answers weighted 0 / 0.25 / 0.5 / 1.
    #[default]
    Weighted,
    /// Yes/no answers counted 0 or 1.
    Boolean,
}

impl RiskScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskScheme::Weighted => "weighted",
            RiskScheme::Boolean => "boolean",
        }
    }
}

impl fmt::Display for RiskScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
