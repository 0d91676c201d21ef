//! SRD Reference Lookup
//!
//! Name lookup over the System Reference Document for chat commands such as
//! `;spell fireball`:
//!
//! - [`resolver`]: picks one entry, a disambiguation list, or nothing
//! - [`paginator`]: splits long text to fit message limits
//! - [`service`]: the command handler tying search, resolution and
//!   formatting together
//!
//! Searching itself is delegated to an [`SrdSource`].

pub mod category;
pub mod cooldown;
pub mod embed;
pub mod entry;
pub mod error;
pub mod format;
pub mod paginator;
pub mod query;
pub mod resolver;
pub mod service;
pub mod source;

pub use category::Category;
pub use embed::{Embed, EmbedField, Reply, PHB_COLOUR};
pub use entry::{
    Condition, DamageType, Entry, Equipment, Feature, Language, Monster, Named, School, Spell,
    Trait,
};
pub use error::{Result, SrdError};
pub use paginator::{hard_split, split_text};
pub use query::{parse_invocation, Invocation, Query};
pub use resolver::{resolve, MatchOutcome};
pub use service::LookupService;
pub use source::{InMemorySource, SrdSource};
