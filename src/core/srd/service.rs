//! Lookup Service
//!
//! The command handler shared by every category: cooldown, request
//! validation, search (with the equipment retry), resolution and rendering.

use std::time::Instant;

use tracing::{debug, info};

use crate::config::AppConfig;

use super::category::Category;
use super::cooldown::CooldownTracker;
use super::embed::Reply;
use super::entry::{Entry, Named};
use super::error::Result;
use super::format::{self, FormatOptions};
use super::query::{Invocation, Query};
use super::resolver::{resolve, MatchOutcome};
use super::source::SrdSource;

pub const REQUEST_TOO_SHORT: &str = "Request too short.";

/// Handles lookup commands against one search backend.
pub struct LookupService<S> {
    source: S,
    format: FormatOptions,
    min_query_chars: usize,
    cooldowns: CooldownTracker,
}

impl<S: SrdSource> LookupService<S> {
    pub fn new(source: S, config: &AppConfig) -> Self {
        Self {
            source,
            format: FormatOptions {
                colour: config.bot.embed_colour,
                prefix: config.bot.prefix.clone(),
                continuation_limit: config.pagination.continuation_limit,
                hard_split_threshold: config.pagination.hard_split_threshold,
            },
            min_query_chars: config.bot.min_query_chars,
            cooldowns: CooldownTracker::new(config.bot.cooldown_secs),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn cooldowns(&self) -> &CooldownTracker {
        &self.cooldowns
    }

    /// Run one command and return the replies to send, in order.
    ///
    /// # Errors
    /// - `SrdError::OnCooldown` when the user repeats the command too soon
    /// - `SrdError::Search` when the backend fails
    /// - `SrdError::InvalidArgument` when pagination limits are zero
    pub async fn handle(&self, invocation: &Invocation) -> Result<Vec<Reply>> {
        let category = invocation.category;
        let query = invocation.query();
        debug!(command = %category, request = %query, "command called");

        if let Err(e) = self.cooldowns.check(invocation.user_id, category) {
            info!(user_id = invocation.user_id, command = %category, "{}", e);
            return Err(e);
        }

        self.lookup(category, query).await
    }

    /// [`handle`](Self::handle) without the cooldown.
    pub async fn lookup(&self, category: Category, query: Query) -> Result<Vec<Reply>> {
        if query.is_shorter_than(self.min_query_chars) {
            return Ok(vec![Reply::text(REQUEST_TOO_SHORT)]);
        }

        let start = Instant::now();
        let (query, matches) = self.search_with_fallback(category, query).await?;

        let replies = match resolve(query.as_str(), &matches) {
            MatchOutcome::NoMatch => vec![Reply::text(format!(
                "Couldn't find any {} that match '{}'.",
                category.plural_noun(),
                query
            ))],
            MatchOutcome::Ambiguous(candidates) => {
                debug!(command = %category, candidates = candidates.len(), "ambiguous request");
                vec![Reply::text(format::disambiguation(
                    candidates.iter().map(Entry::name),
                ))]
            }
            MatchOutcome::Resolved(entry) => {
                debug!(command = %category, name = entry.name(), "resolved");
                format::render(entry, &self.format)?
            }
        };

        debug!(
            command = %category,
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "finished search"
        );
        Ok(replies)
    }

    /// Search, retrying once with the category's fallback request when
    /// nothing matched. Returns the request that produced the matches.
    async fn search_with_fallback(
        &self,
        category: Category,
        query: Query,
    ) -> Result<(Query, Vec<Entry>)> {
        let matches = self.source.search(category, query.as_str()).await?;
        if !matches.is_empty() {
            return Ok((query, matches));
        }

        match category.fallback_query(query.as_str()) {
            Some(retry) => {
                debug!(command = %category, retry = %retry, "retrying search");
                let retry = Query::new(retry);
                let matches = self.source.search(category, retry.as_str()).await?;
                Ok((retry, matches))
            }
            None => Ok((query, matches)),
        }
    }
}

impl<S> std::fmt::Debug for LookupService<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupService")
            .field("format", &self.format)
            .field("min_query_chars", &self.min_query_chars)
            .finish_non_exhaustive()
    }
}

