/// SRD Lookup - rules reference for TTRPG chat bots
///
/// Resolves user-typed names against System Reference Document entries
/// (spells, monsters, conditions, ...) and formats the result as chat
/// embeds, splitting long text to fit message limits.

pub mod config;
pub mod core;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
