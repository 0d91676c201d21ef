//! Test Fixtures
//!
//! Builders for SRD entries with plausible field values.

#![allow(dead_code)]

use crate::core::srd::entry::{
    Condition, DamageType, Entry, Equipment, Feature, Language, Monster, School, Spell, Trait,
};

// =============================================================================
// Entry Fixtures
// =============================================================================

pub fn spell(name: &str, description: &str) -> Entry {
    Spell {
        name: name.to_string(),
        subhead: "3rd-level evocation".to_string(),
        description: description.to_string(),
        higher_levels: None,
        casting_time: "1 action".to_string(),
        casting_range: "150 feet".to_string(),
        components: "V, S, M".to_string(),
        duration: "Instantaneous".to_string(),
        page: 241,
    }
    .into()
}

pub fn condition(name: &str) -> Entry {
    Condition {
        name: name.to_string(),
        description: format!("While {}, a creature suffers.", name.to_lowercase()),
    }
    .into()
}

pub fn feature(name: &str, description: &str) -> Entry {
    Feature {
        name: name.to_string(),
        level: 2,
        feature_class: "Druid".to_string(),
        description: description.to_string(),
    }
    .into()
}

pub fn language(name: &str) -> Entry {
    Language {
        name: name.to_string(),
        language_type: "standard".to_string(),
        typical_speakers: format!("{name} speakers"),
    }
    .into()
}

pub fn school(name: &str) -> Entry {
    School {
        name: name.to_string(),
        description: format!("{name} spells."),
    }
    .into()
}

pub fn damage_type(name: &str) -> Entry {
    DamageType {
        name: name.to_string(),
        description: format!("{name} damage."),
    }
    .into()
}

pub fn trait_entry(name: &str) -> Entry {
    Trait {
        name: name.to_string(),
        description: format!("{name} trait."),
        races: "Dwarf, Elf".to_string(),
    }
    .into()
}

pub fn monster(name: &str, actions: &str) -> Entry {
    Monster {
        name: name.to_string(),
        subhead: "Medium humanoid, any alignment".to_string(),
        attributes: "Armor Class 12".to_string(),
        ability_scores: "STR 10 DEX 14".to_string(),
        features: "Keen Senses".to_string(),
        actions: actions.to_string(),
    }
    .into()
}

pub fn equipment(name: &str) -> Entry {
    Equipment {
        name: name.to_string(),
        context: format!("{name}: 10 gp"),
    }
    .into()
}

/// Text of `words` space-separated words, each `word_len` chars long.
pub fn long_text(words: usize, word_len: usize) -> String {
    vec!["w".repeat(word_len); words].join(" ")
}
