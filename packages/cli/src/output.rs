//! Serializable output records for `--json`

use keyforge_key::{GeneratorKind, GeneratorOptions};
use serde::Serialize;

/// One row of `keyforge list --json`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorInfo {
    /// Generator id
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Description
    pub description: &'static str,
    /// Built-in default options
    pub defaults: GeneratorOptions,
    /// Suggested `[min, max]` length, if length applies
    pub length_range: Option<[usize; 2]>,
    /// Accepted `format` values
    pub formats: Vec<&'static str>,
}

impl From<GeneratorKind> for GeneratorInfo {
    fn from(kind: GeneratorKind) -> Self {
        Self {
            id: kind.id(),
            name: kind.name(),
            description: kind.description(),
            defaults: kind.default_options(),
            length_range: kind.length_range().map(|r| [*r.start(), *r.end()]),
            formats: kind.formats(),
        }
    }
}

/// Result of `keyforge gen --json`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Generated {
    /// Generator id
    pub generator: &'static str,
    /// Generated values
    pub values: Vec<String>,
    /// Whether values came from a seeded, non-secure source
    pub seeded: bool,
    /// Estimated entropy per value
    pub entropy_bits: f64,
    /// Rating of `entropy_bits`
    pub strength: String,
}

/// One entry of `keyforge quick --json`
#[derive(Debug, Serialize)]
pub struct QuickValue {
    /// Generator id
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Generated value, or the error placeholder
    pub value: String,
}
