//! Capability descriptor for automated callers.

use serde::Serialize;

use crate::category::CategoryName;
use crate::dataset::JokeDataset;

/// Name the service advertises itself under.
pub const SERVICE_NAME: &str = "JokeGenerator";

/// Human-readable summary of what the service does.
pub const SERVICE_DESCRIPTION: &str = "生成随机中文笑话，适合聊天互动场景";

/// Self-description of the joke capability and its parameter schema.
///
/// The allowed categories are taken from the dataset, so the advertised
/// schema always matches what the selector accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Descriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: ParameterSchema,
}

/// JSON-schema object describing the accepted parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterSchema {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub properties: Properties,
}

/// The named parameters; `category` is the only one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Properties {
    pub category: CategoryProperty,
}

/// Schema of the optional `category` string and its allowed values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryProperty {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(rename = "enum")]
    pub allowed: Vec<CategoryName>,
    pub description: String,
}

impl Descriptor {
    /// Builds the descriptor for a dataset.
    pub fn for_dataset(dataset: &JokeDataset) -> Self {
        let allowed: Vec<CategoryName> = dataset.categories().cloned().collect();
        let description = format!(
            "笑话分类，支持{}",
            allowed
                .iter()
                .map(CategoryName::as_str)
                .collect::<Vec<_>>()
                .join("/")
        );

        Self {
            name: SERVICE_NAME,
            description: SERVICE_DESCRIPTION,
            parameters: ParameterSchema {
                kind: "object",
                properties: Properties {
                    category: CategoryProperty {
                        kind: "string",
                        allowed,
                        description,
                    },
                },
            },
        }
    }
}
