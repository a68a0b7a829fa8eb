//! Free-text country normalization.
//!
//! Respondents typed their country of residence by hand, so the column holds city names,
//! spelling variants and mixed scripts. Each category owns a list of substrings; rules are
//! tried in table order and the first category with a substring contained in the cleaned
//! input wins. Order matters: short patterns such as `us` would otherwise claim inputs that
//! an earlier rule is meant to catch.

use once_cell::sync::Lazy;

use crate::config::ConfigError;
use crate::types::Country;

const BUILTIN_RULES: &[(Country, &[&str])] = &[
    (
        Country::Tunisia,
        &[
            "tunis",
            "Tunisie",
            "tunisie",
            "Sfax",
            "jelma",
            "monastir",
            "hammem chat",
            "Médenine",
            "medenine",
            "عين دراهم",
            "Tunis",
            "TUNISIE",
            "TUNISIA",
            "Tunis / Tunisie",
            "Tunis . Tunisie",
        ],
    ),
    (
        Country::France,
        &[
            "france",
            "Lyon /France",
            "Lyon . France",
            "lyon",
            "paris",
            "marseille",
        ],
    ),
    (
        Country::Lebanon,
        &[
            "liban",
            "lebanon",
            "le Liban",
            "Libanon",
            "Liban",
            "Lebanese University",
            "Lebanon",
            "Beyrouth",
            "Beirut",
        ],
    ),
    (
        Country::Usa,
        &[
            "usa",
            "new york",
            "New York",
            "United States",
            "United States of America",
            "US",
            "U.S.A",
            "États-Unis",
            "etats unis",
            "Etats Unis",
        ],
    ),
    (Country::Canada, &["canada"]),
    (Country::Luxembourg, &["luxembourg"]),
];

static BUILTIN_TABLE: Lazy<CountryTable> = Lazy::new(|| CountryTable {
    rules: BUILTIN_RULES
        .iter()
        .map(|(category, patterns)| CountryRule {
            category: *category,
            patterns: patterns.iter().map(|p| p.to_lowercase()).collect(),
        })
        .collect(),
});

/// One category and the lower-cased substrings that select it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRule {
    category: Country,
    patterns: Vec<String>,
}

impl CountryRule {
    pub fn new<I, S>(category: Country, patterns: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if !category.is_matchable() {
            return Err(ConfigError::InvalidCategory(category.to_string()));
        }

        let mut lowered = Vec::new();
        for pattern in patterns {
            let pattern = pattern.as_ref().to_lowercase();
            if pattern.trim().is_empty() {
                return Err(ConfigError::EmptyPattern(category.to_string()));
            }
            lowered.push(pattern);
        }

        if lowered.is_empty() {
            return Err(ConfigError::EmptyPattern(category.to_string()));
        }

        Ok(Self {
            category,
            patterns: lowered,
        })
    }

    pub fn category(&self) -> Country {
        self.category
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    fn matches(&self, cleaned: &str) -> bool {
        self.patterns
            .iter()
            .any(|pattern| cleaned.contains(pattern.as_str()))
    }
}

/// Ordered country rules. Built once at start-up and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryTable {
    rules: Vec<CountryRule>,
}

impl CountryTable {
    pub fn new(rules: Vec<CountryRule>) -> Result<Self, ConfigError> {
        for (idx, rule) in rules.iter().enumerate() {
            if rules[..idx]
                .iter()
                .any(|earlier| earlier.category == rule.category)
            {
                return Err(ConfigError::DuplicateCategory(rule.category.to_string()));
            }
        }
        Ok(Self { rules })
    }

    pub fn builtin() -> &'static CountryTable {
        &BUILTIN_TABLE
    }

    pub fn rules(&self) -> &[CountryRule] {
        &self.rules
    }

    /// Maps a raw answer to exactly one category.
    pub fn classify(&self, raw: Option<&str>) -> Country {
        let Some(raw) = raw else {
            return Country::Unknown;
        };
        let cleaned = raw.trim().to_lowercase();
        if cleaned.is_empty() {
            return Country::Unknown;
        }

        self.rules
            .iter()
            .find(|rule| rule.matches(&cleaned))
            .map(|rule| rule.category)
            .unwrap_or(Country::Other)
    }
}

impl Default for CountryTable {
    fn default() -> Self {
        BUILTIN_TABLE.clone()
    }
}
