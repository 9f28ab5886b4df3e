//! Schema.org `Dataset` output model, serialized as JSON-LD.
//!
//! The structures here mirror the Schema.org vocabulary subset this tool
//! emits: `Dataset` with nested `Person`, `DataDownload` and `Organization`
//! nodes. Serde renames produce the JSON-LD `@context`/`@type` keys and
//! camelCase property names.

use serde::Serialize;

/// JSON-LD context emitted on every dataset record.
pub const SCHEMA_ORG_CONTEXT: &str = "https://schema.org";

/// A Schema.org `Dataset` record.
///
/// Optional scalar fields are omitted from the output when absent;
/// list fields serialize as empty arrays.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SchemaDataset {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    /// The catalog's identifier for the dataset.
    pub identifier: String,
    /// Dataset title, trimmed.
    pub name: String,
    /// Sanitized plain-text description; empty when the source had none.
    pub description: String,
    /// Landing page on the source catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    /// ISO-8601 creation timestamp, passed through from the catalog unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_published: Option<String>,
    /// ISO-8601 modification timestamp, passed through unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_language: Option<String>,
    pub keywords: Vec<String>,
    pub creator: Vec<Person>,
    pub maintainer: Vec<Person>,
    pub distribution: Vec<DataDownload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<Organization>,
}

impl SchemaDataset {
    /// Creates an empty dataset record for the given identifier.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            context: SCHEMA_ORG_CONTEXT,
            schema_type: "Dataset",
            identifier: identifier.into(),
            name: String::new(),
            description: String::new(),
            url: None,
            license: None,
            date_published: None,
            date_modified: None,
            in_language: None,
            keywords: Vec::new(),
            creator: Vec::new(),
            maintainer: Vec::new(),
            distribution: Vec::new(),
            publisher: None,
        }
    }
}

/// A Schema.org `Person` node for creators and maintainers.
///
/// `given_name` and `family_name` are always present; a single-token name
/// leaves `family_name` empty rather than omitting the field.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    /// The full name as it appeared in the catalog.
    pub name: String,
    pub given_name: String,
    pub family_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Person {
    pub fn new(
        name: impl Into<String>,
        given_name: impl Into<String>,
        family_name: impl Into<String>,
    ) -> Self {
        Self {
            schema_type: "Person",
            name: name.into(),
            given_name: given_name.into(),
            family_name: family_name.into(),
            email: None,
        }
    }
}

/// A Schema.org `DataDownload` node, one per catalog resource.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DataDownload {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub content_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl DataDownload {
    pub fn new(content_url: impl Into<String>) -> Self {
        Self {
            schema_type: "DataDownload",
            name: None,
            content_url: content_url.into(),
            encoding_format: None,
            description: None,
        }
    }
}

/// A Schema.org `Organization` node for the publishing body.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Organization {
    pub fn new(name: Option<String>, description: Option<String>) -> Self {
        Self {
            schema_type: "Organization",
            name,
            description,
        }
    }
}
