//! Entry Formatting
//!
//! Renders a resolved [`Entry`] into the replies a chat adapter sends, one
//! renderer per category.

use super::embed::{Embed, Reply};
use super::entry::{
    Condition, DamageType, Entry, Equipment, Feature, Language, Monster, School, Spell, Trait,
};
use super::error::Result;
use super::paginator::{hard_split, split_text};

/// Display settings shared by every renderer.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    pub colour: u32,
    pub prefix: String,
    pub continuation_limit: usize,
    pub hard_split_threshold: usize,
}

/// Replies for `entry`, in send order.
pub fn render(entry: &Entry, opts: &FormatOptions) -> Result<Vec<Reply>> {
    match entry {
        Entry::Spell(spell) => render_spell(spell, opts),
        Entry::Condition(condition) => Ok(vec![render_condition(condition, opts)]),
        Entry::Feature(feature) => render_feature(feature, opts),
        Entry::Language(language) => Ok(vec![render_language(language, opts)]),
        Entry::School(school) => Ok(vec![render_school(school, opts)]),
        Entry::DamageType(damage) => Ok(vec![render_damage_type(damage, opts)]),
        Entry::Trait(t) => Ok(vec![render_trait(t, opts)]),
        Entry::Monster(monster) => render_monster(monster, opts),
        Entry::Equipment(equipment) => Ok(vec![render_equipment(equipment, opts)]),
    }
}

/// "Could be: **A - B**." disambiguation line.
pub fn disambiguation<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let names: Vec<&str> = names.into_iter().collect();
    format!("Could be: **{}**.", names.join(" - "))
}

// ============================================================================
// Continuation-embed policy
// ============================================================================

fn spell_body(spell: &Spell) -> String {
    let mut body = format!("*{}*\n{}", spell.subhead, spell.description);
    if let Some(higher) = &spell.higher_levels {
        body.push_str("\n\u{2001}**At Higher Levels. **");
        body.push_str(higher);
    }
    body
}

fn render_spell(spell: &Spell, opts: &FormatOptions) -> Result<Vec<Reply>> {
    let pages = split_text(&spell_body(spell), opts.continuation_limit)?;
    let last = pages.len().saturating_sub(1);

    let mut replies: Vec<Reply> = Vec::with_capacity(pages.len());
    for (i, page) in pages.iter().enumerate() {
        let title = if i == 0 {
            spell.name.clone()
        } else {
            format!("{} *(continued)*", spell.name)
        };
        let mut embed = Embed::new(opts.colour)
            .with_title(title)
            .with_description(page.as_str());
        if i == last {
            embed = with_spell_stats(embed, spell);
        }
        replies.push(Reply::from(embed));
    }

    Ok(replies)
}

fn with_spell_stats(embed: Embed, spell: &Spell) -> Embed {
    embed
        .with_field("Casting Time", &spell.casting_time, true)
        .with_field("Range", &spell.casting_range, true)
        .with_field("Components", &spell.components, true)
        .with_field("Duration", &spell.duration, true)
        .with_footer(format!("Player's Handbook, page {}.", spell.page))
}

// ============================================================================
// Two-part hard-split policy
// ============================================================================

fn two_part(title: &str, content: &str, opts: &FormatOptions) -> Result<Vec<Reply>> {
    let blocks = hard_split(content, opts.hard_split_threshold)?;
    Ok(blocks
        .into_iter()
        .enumerate()
        .map(|(i, block)| {
            let title = if i == 0 {
                title.to_string()
            } else {
                format!("{title} *continued*")
            };
            Reply::from(
                Embed::new(opts.colour)
                    .with_title(title)
                    .with_description(block),
            )
        })
        .collect())
}

fn render_feature(feature: &Feature, opts: &FormatOptions) -> Result<Vec<Reply>> {
    let content = format!(
        "*Level {} {} feature* \n{}",
        feature.level, feature.feature_class, feature.description
    );
    two_part(&feature.name, &content, opts)
}

fn render_monster(monster: &Monster, opts: &FormatOptions) -> Result<Vec<Reply>> {
    let stat_block = Embed::new(opts.colour)
        .with_field(&monster.name, &monster.subhead, false)
        .with_field("Attributes", &monster.attributes, false)
        .with_field("Ability Scores", &monster.ability_scores, false)
        .with_field("Features", &monster.features, false);

    let mut replies = vec![Reply::from(stat_block)];
    replies.extend(two_part("Actions", &monster.actions, opts)?);
    Ok(replies)
}

// ============================================================================
// Single-embed categories
// ============================================================================

fn render_condition(condition: &Condition, opts: &FormatOptions) -> Reply {
    Embed::new(opts.colour)
        .with_field(&condition.name, &condition.description, true)
        .into()
}

fn render_language(language: &Language, opts: &FormatOptions) -> Reply {
    let content = format!(
        "{} is a {} language spoken mainly by {}",
        language.name, language.language_type, language.typical_speakers
    );
    Embed::new(opts.colour)
        .with_field(&language.name, content, false)
        .into()
}

fn render_school(school: &School, opts: &FormatOptions) -> Reply {
    Embed::new(opts.colour)
        .with_field(&school.name, &school.description, false)
        .into()
}

fn render_damage_type(damage: &DamageType, opts: &FormatOptions) -> Reply {
    Embed::new(opts.colour)
        .with_field(&damage.name, &damage.description, false)
        .with_footer(format!(
            "Use {}damagetype {{type}} to look up any of the damage types.",
            opts.prefix
        ))
        .into()
}

fn render_trait(t: &Trait, opts: &FormatOptions) -> Reply {
    Embed::new(opts.colour)
        .with_field(&t.name, &t.description, false)
        .with_field(
            "Races",
            format!("The following races can get this trait: {}", t.races),
            false,
        )
        .with_footer(format!(
            "Use {}trait {{type}} to look up any of the traits.",
            opts.prefix
        ))
        .into()
}

fn render_equipment(equipment: &Equipment, opts: &FormatOptions) -> Reply {
    Embed::new(opts.colour)
        .with_field(&equipment.name, &equipment.context, false)
        .with_footer(format!(
            "Use {}equipment {{type}} to look up any of the equipment items.",
            opts.prefix
        ))
        .into()
}
