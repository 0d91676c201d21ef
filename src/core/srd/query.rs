//! Request Normalization
//!
//! Turns a raw chat message into a command [`Invocation`] and its arguments
//! into a [`Query`].

use std::fmt;

use super::category::Category;

/// User-typed lookup text, trimmed. Casing is kept for display and re-search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    raw: String,
}

impl Query {
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self {
            raw: raw.as_ref().trim().to_string(),
        }
    }

    /// Join command arguments with single spaces.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        let joined = args
            .iter()
            .map(|a| a.as_ref())
            .collect::<Vec<_>>()
            .join(" ");
        Self::new(joined)
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Lowercased form, for comparison only.
    pub fn folded(&self) -> String {
        self.raw.to_lowercase()
    }

    pub fn char_len(&self) -> usize {
        self.raw.chars().count()
    }

    pub fn is_shorter_than(&self, min_chars: usize) -> bool {
        self.char_len() < min_chars
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// A parsed lookup command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub user_id: u64,
    pub category: Category,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(user_id: u64, category: Category, args: &[&str]) -> Self {
        Self {
            user_id,
            category,
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    pub fn query(&self) -> Query {
        Query::from_args(&self.args)
    }
}

/// Parse `message` as `<prefix><command> [words...]`.
///
/// Returns `None` for messages without the prefix or with an unknown command.
pub fn parse_invocation(prefix: &str, user_id: u64, message: &str) -> Option<Invocation> {
    let rest = message.trim_start().strip_prefix(prefix)?;
    // the command must follow the prefix directly
    if rest.starts_with(char::is_whitespace) {
        return None;
    }
    let command_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
    let category = rest[..command_end].parse::<Category>().ok()?;

    Some(Invocation {
        user_id,
        category,
        args: split_args(&rest[command_end..]),
    })
}

/// Split command arguments on whitespace. A double-quoted run is one
/// argument with the quotes removed; an unclosed quote runs to the end.
fn split_args(input: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        let mut arg = String::new();
        if c == '"' {
            chars.next();
            for c in chars.by_ref() {
                if c == '"' {
                    break;
                }
                arg.push(c);
            }
        } else {
            while let Some(&c) = chars.peek() {
                if c.is_whitespace() {
                    break;
                }
                arg.push(c);
                chars.next();
            }
        }
        args.push(arg);
    }

    args
}
