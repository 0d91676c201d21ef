//! Reply Model
//!
//! Transport-neutral messages produced by the command layer. A chat adapter
//! turns these into whatever its platform sends (Discord embeds, plain text).

use serde::{Deserialize, Serialize};

/// Default embed colour (Player's Handbook parchment).
pub const PHB_COLOUR: u32 = 0xeeeea0;

/// A name/value pair shown inside an embed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Rich message card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Embed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub colour: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
}

impl Embed {
    pub fn new(colour: u32) -> Self {
        Self {
            title: None,
            description: None,
            colour,
            fields: Vec::new(),
            footer: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_field(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }
}

/// One outgoing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "body", rename_all = "snake_case")]
pub enum Reply {
    Text(String),
    Embed(Embed),
}

impl Reply {
    pub fn text(message: impl Into<String>) -> Self {
        Self::Text(message.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Embed(_) => None,
        }
    }

    pub fn as_embed(&self) -> Option<&Embed> {
        match self {
            Self::Embed(embed) => Some(embed),
            Self::Text(_) => None,
        }
    }

    /// JSON payload for adapters that forward replies over a wire.
    pub fn to_json(&self) -> super::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<Embed> for Reply {
    fn from(embed: Embed) -> Self {
        Self::Embed(embed)
    }
}
