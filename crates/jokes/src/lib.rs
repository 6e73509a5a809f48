//! Joke dataset and random selection.
//!
//! This crate provides:
//! - `JokeDataset`, an immutable, validated category-to-jokes mapping
//! - `JokeSelector`, uniform random selection with category validation
//! - `RandomSource`, the randomness seam shared by request handlers
//! - `Descriptor`, the self-describing capability document

pub mod category;
pub mod dataset;
pub mod descriptor;
pub mod error;
pub mod random;
pub mod selector;

pub use category::CategoryName;
pub use dataset::{CategoryEntry, JokeDataset};
pub use descriptor::Descriptor;
pub use error::{DatasetError, JokeError};
pub use random::RandomSource;
pub use selector::{JokeResponse, JokeSelector, QUERY_TIME_FORMAT, SOURCE_LABEL};
