//! Random joke selection.

use chrono::{DateTime, Local};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::category::CategoryName;
use crate::dataset::JokeDataset;
use crate::error::JokeError;

/// Label attached to every response; the jokes are local, not fetched.
pub const SOURCE_LABEL: &str = "本地模拟数据";

/// `strftime` pattern for [`JokeResponse::query_time`].
pub const QUERY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A selected joke, ready to be returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JokeResponse {
    pub joke: String,
    pub category: CategoryName,
    pub query_time: String,
    pub source: &'static str,
}

/// Picks jokes from a [`JokeDataset`].
///
/// An absent or empty category means "any": the category is drawn uniformly
/// from the dataset first, then a joke uniformly from that category. A
/// non-empty category that is not in the dataset is rejected before any
/// randomness is drawn.
#[derive(Debug, Clone)]
pub struct JokeSelector {
    dataset: JokeDataset,
}

impl JokeSelector {
    /// Creates a selector over a dataset.
    pub fn new(dataset: JokeDataset) -> Self {
        Self { dataset }
    }

    /// Returns the dataset this selector draws from.
    pub fn dataset(&self) -> &JokeDataset {
        &self.dataset
    }

    /// Builds the error returned for a category outside the dataset.
    pub fn invalid_category(&self, requested: impl Into<String>) -> JokeError {
        let requested = requested.into();
        tracing::debug!(%requested, "unknown category");
        JokeError::InvalidCategory {
            requested,
            valid: self.dataset.categories().cloned().collect(),
        }
    }

    /// Selects a joke, stamping the response with the current local time.
    pub fn select<R: Rng + ?Sized>(
        &self,
        category: Option<&str>,
        rng: &mut R,
    ) -> Result<JokeResponse, JokeError> {
        self.select_at(category, rng, Local::now())
    }

    /// Selects a joke, stamping the response with `now`.
    #[tracing::instrument(skip(self, rng, now))]
    pub fn select_at<R: Rng + ?Sized>(
        &self,
        category: Option<&str>,
        rng: &mut R,
        now: DateTime<Local>,
    ) -> Result<JokeResponse, JokeError> {
        let entry = match category.filter(|c| !c.is_empty()) {
            Some(requested) => self
                .dataset
                .entry(requested)
                .ok_or_else(|| self.invalid_category(requested))?,
            None => self
                .dataset
                .entries()
                .choose(rng)
                .ok_or(JokeError::NoCategories)?,
        };

        let joke = entry
            .jokes
            .choose(rng)
            .ok_or_else(|| JokeError::NoJokes(entry.category.clone()))?;

        tracing::debug!(category = %entry.category, "joke selected");

        Ok(JokeResponse {
            joke: joke.clone(),
            category: entry.category.clone(),
            query_time: now.format(QUERY_TIME_FORMAT).to_string(),
            source: SOURCE_LABEL,
        })
    }
}

impl Default for JokeSelector {
    fn default() -> Self {
        Self::new(JokeDataset::builtin())
    }
}
