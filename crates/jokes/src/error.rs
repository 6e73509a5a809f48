//! Joke selection and dataset error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::category::CategoryName;

/// Errors that can occur while selecting a joke.
#[derive(Debug, Error)]
pub enum JokeError {
    /// The caller asked for a category the dataset does not contain.
    #[error("不支持的分类，请从[{}]中选择", quoted_list(.valid))]
    InvalidCategory {
        requested: String,
        valid: Vec<CategoryName>,
    },

    /// The dataset has no categories to choose from.
    ///
    /// Datasets built through `JokeDataset`'s constructors always have at
    /// least one category; seeing this means the dataset was misconfigured
    /// and it is reported as a server error.
    #[error("No categories available")]
    NoCategories,

    /// A known category has no jokes to choose from.
    #[error("Category {0} has no jokes")]
    NoJokes(CategoryName),
}

/// Errors that can occur while building or loading a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// No categories were supplied.
    #[error("Dataset has no categories")]
    Empty,

    /// A category name is empty or whitespace only.
    #[error("Dataset contains a blank category name")]
    BlankCategory,

    /// The same category was supplied more than once.
    #[error("Duplicate category: {0}")]
    DuplicateCategory(CategoryName),

    /// A category was supplied with an empty joke list.
    #[error("Category {0} has no jokes")]
    EmptyCategory(CategoryName),

    /// The dataset file could not be read.
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset document is not valid JSON of the expected shape.
    #[error("Failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

fn quoted_list(names: &[CategoryName]) -> String {
    names
        .iter()
        .map(|n| format!("'{n}'"))
        .collect::<Vec<_>>()
        .join(", ")
}
