//! Lookup Categories
//!
//! The closed set of rules-reference categories a user can query, and the
//! per-category wording used in replies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::SrdError;

/// One rules-reference category, selected by command name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Spell,
    Condition,
    Feature,
    Language,
    School,
    DamageType,
    Trait,
    Monster,
    Equipment,
}

impl Category {
    pub const ALL: &'static [Category] = &[
        Category::Spell,
        Category::Condition,
        Category::Feature,
        Category::Language,
        Category::School,
        Category::DamageType,
        Category::Trait,
        Category::Monster,
        Category::Equipment,
    ];

    /// Chat command name (without prefix).
    pub fn command_name(self) -> &'static str {
        match self {
            Self::Spell => "spell",
            Self::Condition => "condition",
            Self::Feature => "feature",
            Self::Language => "language",
            Self::School => "school",
            Self::DamageType => "damagetype",
            Self::Trait => "trait",
            Self::Monster => "monster",
            Self::Equipment => "equipment",
        }
    }

    /// Plural noun used in "not found" replies.
    pub fn plural_noun(self) -> &'static str {
        match self {
            Self::Spell => "spells",
            Self::Condition => "conditions",
            Self::Feature => "features",
            Self::Language => "languages",
            Self::School => "schools",
            Self::DamageType => "damage types",
            Self::Trait => "traits",
            Self::Monster => "monsters",
            Self::Equipment => "equipment pieces",
        }
    }

    /// Alternate request to search with when the first search finds nothing.
    ///
    /// Equipment names in the dataset are comma-separated ("Armor, Leather"),
    /// so "armor leather" is retried as "armor, leather". Other categories
    /// have no fallback.
    pub fn fallback_query(self, request: &str) -> Option<String> {
        match self {
            Self::Equipment => {
                let words: Vec<&str> = request.split_whitespace().collect();
                if words.len() < 2 {
                    return None;
                }
                Some(words.join(", "))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command_name())
    }
}

impl FromStr for Category {
    type Err = SrdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.command_name() == lowered)
            .ok_or_else(|| SrdError::UnknownCommand(s.to_string()))
    }
}
