//! Strength classification from length, class variety and character repetition.

use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StrengthLevel {
    Weak,
    Fair,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    pub const ALL: [StrengthLevel; 4] = [
        StrengthLevel::Weak,
        StrengthLevel::Fair,
        StrengthLevel::Strong,
        StrengthLevel::VeryStrong,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Fair => "Fair",
            StrengthLevel::Strong => "Strong",
            StrengthLevel::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The three signals the rule table matches on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    /// Character count.
    pub length: usize,
    /// How many of lowercase, uppercase, digit and other appear (0..=4).
    pub variety: u8,
    /// Distinct characters over length, in (0, 1].
    pub uniqueness_ratio: f64,
}

impl Metrics {
    pub fn measure(password: &str) -> Self {
        let mut has_lower = false;
        let mut has_upper = false;
        let mut has_digit = false;
        let mut has_other = false;
        let mut distinct = HashSet::new();
        let mut length = 0usize;

        for c in password.chars() {
            length += 1;
            distinct.insert(c);
            if c.is_lowercase() {
                has_lower = true;
            } else if c.is_uppercase() {
                has_upper = true;
            } else if c.is_ascii_digit() {
                has_digit = true;
            } else {
                has_other = true;
            }
        }

        let variety = [has_lower, has_upper, has_digit, has_other]
            .iter()
            .filter(|&&present| present)
            .count() as u8;
        let uniqueness_ratio = if length == 0 {
            0.0
        } else {
            distinct.len() as f64 / length as f64
        };

        Self {
            length,
            variety,
            uniqueness_ratio,
        }
    }
}

struct Rule {
    matches: fn(&Metrics) -> bool,
    level: StrengthLevel,
}

fn weak(m: &Metrics) -> bool {
    m.length < 8 || m.variety < 2 || m.uniqueness_ratio < 0.5
}

fn fair(m: &Metrics) -> bool {
    m.length <= 10 && m.variety >= 2 && m.uniqueness_ratio >= 0.5
}

fn strong(m: &Metrics) -> bool {
    m.length <= 14 && m.variety == 4 && m.uniqueness_ratio >= 0.7
}

fn very_strong(m: &Metrics) -> bool {
    m.length > 14 && m.variety == 4 && m.uniqueness_ratio >= 0.8
}

// Checked top to bottom, first match wins. The rows do not partition the
// input space: anything unmatched (e.g. length 12, variety 4, ratio 0.6)
// lands on FALLBACK.
const RULES: [Rule; 4] = [
    Rule {
        matches: weak,
        level: StrengthLevel::Weak,
    },
    Rule {
        matches: fair,
        level: StrengthLevel::Fair,
    },
    Rule {
        matches: strong,
        level: StrengthLevel::Strong,
    },
    Rule {
        matches: very_strong,
        level: StrengthLevel::VeryStrong,
    },
];

const FALLBACK: StrengthLevel = StrengthLevel::Fair;

/// Classify a password. Blank input is `Weak`.
pub fn evaluate(password: &str) -> StrengthLevel {
    if password.trim().is_empty() {
        return StrengthLevel::Weak;
    }
    classify(&Metrics::measure(password))
}

pub fn classify(metrics: &Metrics) -> StrengthLevel {
    RULES
        .iter()
        .find(|rule| (rule.matches)(metrics))
        .map_or(FALLBACK, |rule| rule.level)
}
