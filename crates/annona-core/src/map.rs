//! Mapping from raw CKAN package records to Schema.org `Dataset` records.
//!
//! [`map_package`] is a pure transform over one [`RawPackage`]; the only
//! structural requirement is the package identifier. Every other field is
//! optional and degrades to an empty or omitted output field.
//! [`map_catalog`] applies the transform over a whole batch with per-package
//! failure isolation: one malformed record is logged and skipped, the rest
//! of the batch is unaffected.

use serde_json::Value;

use crate::error::AppError;
use crate::models::RawPackage;
use crate::sanitize::{split_name, strip_html};
use crate::schema::{DataDownload, Organization, Person, SchemaDataset};

/// Maps one raw CKAN package record to a Schema.org `Dataset`.
///
/// # Arguments
///
/// * `raw` - The raw package metadata as fetched from the catalog
/// * `catalog_url` - Base URL of the source catalog, used to build the
///   dataset landing page
///
/// # Errors
///
/// Returns `AppError::MappingError` when the record has no identifier.
/// Missing optional fields never fail: absent text maps to an empty string,
/// absent lists to empty lists, absent scalars to omitted output fields.
///
/// # Examples
///
/// ```
/// use annona_core::map::map_package;
/// use annona_core::models::RawPackage;
///
/// let raw: RawPackage = serde_json::from_str(
///     r#"{"id": "ds1", "title": " Rainfall Data ", "notes": "<p>Annual totals</p>"}"#,
/// ).unwrap();
///
/// let dataset = map_package(&raw, "https://data.example.org").unwrap();
/// assert_eq!(dataset.name, "Rainfall Data");
/// assert_eq!(dataset.description, "Annual totals");
/// ```
pub fn map_package(raw: &RawPackage, catalog_url: &str) -> Result<SchemaDataset, AppError> {
    let id = raw
        .id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::MappingError("package record has no id".to_string()))?;

    let mut dataset = SchemaDataset::new(id);

    dataset.name = raw.title.as_deref().unwrap_or_default().trim().to_string();
    dataset.description = strip_html(raw.notes.as_deref().unwrap_or_default());

    dataset.url = raw
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(|n| format!("{}/dataset/{}", catalog_url.trim_end_matches('/'), n));

    dataset.license = non_blank(raw.license_url.as_deref())
        .or_else(|| non_blank(raw.license_title.as_deref()));

    // Timestamps are passed through as the catalog's ISO-8601 strings.
    dataset.date_published = raw.metadata_created.clone();
    dataset.date_modified = raw.metadata_modified.clone();
    dataset.in_language = non_blank(raw.language.as_deref());

    dataset.keywords = raw
        .tags
        .iter()
        .flatten()
        .filter_map(|t| non_blank(t.display_name.as_deref()))
        .collect();

    dataset.creator = parse_person_list(raw.author.as_deref(), "author_name", "author_email");
    dataset.maintainer =
        parse_person_list(raw.maintainer.as_deref(), "maintainer_name", "maintainer_email");

    // Resources without a URL cannot become a DataDownload; skip them.
    dataset.distribution = raw
        .resources
        .iter()
        .flatten()
        .filter_map(|res| {
            let url = non_blank(res.url.as_deref())?;
            let mut download = DataDownload::new(url);
            download.name = non_blank(res.name.as_deref());
            download.encoding_format = non_blank(res.format.as_deref());
            download.description = sanitized(res.description.as_deref());
            Some(download)
        })
        .collect();

    dataset.publisher = raw.organization.as_ref().map(|org| {
        Organization::new(
            non_blank(org.title.as_deref()),
            sanitized(org.description.as_deref()),
        )
    });

    Ok(dataset)
}

/// Maps a batch of raw package records, preserving input order.
///
/// A package failing with `MappingError` is logged and skipped; the batch
/// is never aborted for one bad record.
pub fn map_catalog(raw_packages: &[RawPackage], catalog_url: &str) -> Vec<SchemaDataset> {
    raw_packages
        .iter()
        .filter_map(|raw| match map_package(raw, catalog_url) {
            Ok(dataset) => Some(dataset),
            Err(e) => {
                let label = raw
                    .name
                    .as_deref()
                    .or(raw.title.as_deref())
                    .unwrap_or("<unnamed>");
                tracing::warn!("Skipping package '{}': {}", label, e);
                None
            }
        })
        .collect()
}

/// Parses an author/maintainer field into Schema.org `Person` nodes.
///
/// CKAN portals encode these fields inconsistently: some store a plain full
/// name, others a JSON-encoded list (or single object) of
/// `{<name_key>, <email_key>}` records. All three encodings are accepted;
/// anything unusable yields an empty list rather than an error.
fn parse_person_list(field: Option<&str>, name_key: &str, email_key: &str) -> Vec<Person> {
    let Some(text) = field else {
        return Vec::new();
    };
    if text.trim().is_empty() {
        return Vec::new();
    }

    match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(items)) => items
            .iter()
            .filter_map(|item| person_from_object(item, name_key, email_key))
            .collect(),
        Ok(value @ Value::Object(_)) => person_from_object(&value, name_key, email_key)
            .into_iter()
            .collect(),
        // Not structured metadata: treat the whole field as one full name.
        _ => person_from_name(text, None).into_iter().collect(),
    }
}

fn person_from_object(value: &Value, name_key: &str, email_key: &str) -> Option<Person> {
    let name = value.get(name_key)?.as_str()?;
    let email = value
        .get(email_key)
        .and_then(Value::as_str)
        .filter(|e| !e.trim().is_empty())
        .map(str::to_string);
    person_from_name(name, email)
}

fn person_from_name(full_name: &str, email: Option<String>) -> Option<Person> {
    let trimmed = full_name.trim();
    if trimmed.is_empty() {
        return None;
    }
    let split = split_name(trimmed);
    let mut person = Person::new(trimmed, split.given, split.family);
    person.email = email;
    Some(person)
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Sanitizes an optional free-text field, mapping blank results to `None`.
fn sanitized(value: Option<&str>) -> Option<String> {
    let text = strip_html(value.unwrap_or_default());
    if text.is_empty() { None } else { Some(text) }
}
