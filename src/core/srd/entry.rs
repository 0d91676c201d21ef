//! SRD Entry Types
//!
//! One record type per [`Category`], plus the [`Entry`] union the search
//! backends return. Field names follow the SRD dataset's JSON keys.

use serde::{Deserialize, Serialize};

use super::category::Category;

/// Anything with a display name that the resolver can match against.
pub trait Named {
    fn name(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spell {
    pub name: String,
    /// Level and school line, e.g. "3rd-level evocation".
    pub subhead: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub higher_levels: Option<String>,
    pub casting_time: String,
    pub casting_range: String,
    pub components: String,
    pub duration: String,
    /// Player's Handbook page.
    pub page: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    pub level: u32,
    #[serde(rename = "featureclass")]
    pub feature_class: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    #[serde(rename = "languagetype")]
    pub language_type: String,
    #[serde(rename = "typicalspeakers")]
    pub typical_speakers: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct School {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageType {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trait {
    pub name: String,
    pub description: String,
    /// Races that can take this trait, already joined for display.
    #[serde(rename = "finalraces")]
    pub races: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    pub name: String,
    pub subhead: String,
    pub attributes: String,
    #[serde(rename = "abilityscores")]
    pub ability_scores: String,
    pub features: String,
    pub actions: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub name: String,
    pub context: String,
}

/// A single record from the rules dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum Entry {
    Spell(Spell),
    Condition(Condition),
    Feature(Feature),
    Language(Language),
    School(School),
    DamageType(DamageType),
    Trait(Trait),
    Monster(Monster),
    Equipment(Equipment),
}

impl Entry {
    pub fn category(&self) -> Category {
        match self {
            Self::Spell(_) => Category::Spell,
            Self::Condition(_) => Category::Condition,
            Self::Feature(_) => Category::Feature,
            Self::Language(_) => Category::Language,
            Self::School(_) => Category::School,
            Self::DamageType(_) => Category::DamageType,
            Self::Trait(_) => Category::Trait,
            Self::Monster(_) => Category::Monster,
            Self::Equipment(_) => Category::Equipment,
        }
    }
}

impl Named for Entry {
    fn name(&self) -> &str {
        match self {
            Self::Spell(e) => &e.name,
            Self::Condition(e) => &e.name,
            Self::Feature(e) => &e.name,
            Self::Language(e) => &e.name,
            Self::School(e) => &e.name,
            Self::DamageType(e) => &e.name,
            Self::Trait(e) => &e.name,
            Self::Monster(e) => &e.name,
            Self::Equipment(e) => &e.name,
        }
    }
}

#[cfg(test)]
impl Named for String {
    fn name(&self) -> &str {
        self
    }
}

#[cfg(test)]
impl Named for &str {
    fn name(&self) -> &str {
        self
    }
}

macro_rules! impl_entry_record {
    ($($record:ident),* $(,)?) => {
        $(
            impl Named for $record {
                fn name(&self) -> &str {
                    &self.name
                }
            }

            impl From<$record> for Entry {
                fn from(record: $record) -> Self {
                    Entry::$record(record)
                }
            }
        )*
    };
}

impl_entry_record!(
    Spell, Condition, Feature, Language, School, DamageType, Trait, Monster, Equipment,
);
