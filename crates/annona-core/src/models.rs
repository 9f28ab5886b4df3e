//! Raw wire models for the CKAN action API.
//!
//! CKAN enforces no fixed schema on package metadata: any field may be
//! absent or `null`, and different portals populate different subsets.
//! Every field here is therefore optional; the mapper decides which
//! absences matter (only the package identifier does).

use serde::Deserialize;

/// Raw dataset metadata as returned by the CKAN `package_show` API.
///
/// Decoded defensively: deserialization never fails on a missing or null
/// field, and unknown fields are ignored.
///
/// # Examples
///
/// ```
/// use annona_core::models::RawPackage;
///
/// let json = r#"{
///     "id": "dataset-123",
///     "title": "My Dataset",
///     "notes": null,
///     "resources": [{"url": "http://x/data.csv", "format": "CSV"}]
/// }"#;
///
/// let raw: RawPackage = serde_json::from_str(json).unwrap();
/// assert_eq!(raw.id.as_deref(), Some("dataset-123"));
/// assert!(raw.notes.is_none());
/// assert_eq!(raw.resources.as_ref().unwrap().len(), 1);
/// ```
#[derive(Deserialize, Debug, Clone, Default)]
pub struct RawPackage {
    /// Unique identifier for the dataset.
    pub id: Option<String>,
    /// URL-friendly name/slug of the dataset.
    pub name: Option<String>,
    /// Human-readable title of the dataset.
    pub title: Option<String>,
    /// Free-text description, frequently containing HTML markup.
    pub notes: Option<String>,
    /// Author field; either a plain full name or a JSON-encoded list of
    /// `{author_name, author_email}` objects depending on the portal.
    pub author: Option<String>,
    /// Maintainer field; same encoding variants as `author`.
    pub maintainer: Option<String>,
    pub license_title: Option<String>,
    pub license_url: Option<String>,
    /// Creation timestamp as an ISO-8601 string.
    pub metadata_created: Option<String>,
    /// Last-modification timestamp as an ISO-8601 string.
    pub metadata_modified: Option<String>,
    pub language: Option<String>,
    pub tags: Option<Vec<RawTag>>,
    pub resources: Option<Vec<RawResource>>,
    pub organization: Option<RawOrganization>,
}

/// A downloadable resource attached to a package.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct RawResource {
    pub name: Option<String>,
    pub url: Option<String>,
    pub format: Option<String>,
    pub description: Option<String>,
}

/// A keyword tag attached to a package.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct RawTag {
    pub display_name: Option<String>,
}

/// The organization that published a package.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct RawOrganization {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_package_full_deserialization() {
        let json = r#"{
            "id": "test-id",
            "name": "test-name",
            "title": "Test Title",
            "notes": "Test notes",
            "author": "Jane Smith",
            "metadata_created": "2024-01-01T00:00:00",
            "tags": [{"display_name": "Tag1"}],
            "resources": [{"name": "Resource 1", "url": "http://res.url", "format": "CSV"}],
            "organization": {"title": "Test Org", "description": "About the org"}
        }"#;

        let raw: RawPackage = serde_json::from_str(json).unwrap();
        assert_eq!(raw.id.as_deref(), Some("test-id"));
        assert_eq!(raw.title.as_deref(), Some("Test Title"));
        assert_eq!(raw.author.as_deref(), Some("Jane Smith"));
        assert_eq!(raw.tags.as_ref().unwrap().len(), 1);
        assert_eq!(
            raw.resources.as_ref().unwrap()[0].url.as_deref(),
            Some("http://res.url")
        );
        assert_eq!(
            raw.organization.as_ref().unwrap().title.as_deref(),
            Some("Test Org")
        );
    }

    #[test]
    fn test_raw_package_empty_object() {
        let raw: RawPackage = serde_json::from_str("{}").unwrap();
        assert!(raw.id.is_none());
        assert!(raw.tags.is_none());
        assert!(raw.resources.is_none());
    }

    #[test]
    fn test_raw_package_null_fields() {
        // Portals emit explicit nulls for cleared fields
        let json = r#"{
            "id": "x",
            "notes": null,
            "tags": null,
            "resources": null,
            "organization": null
        }"#;
        let raw: RawPackage = serde_json::from_str(json).unwrap();
        assert!(raw.notes.is_none());
        assert!(raw.tags.is_none());
        assert!(raw.organization.is_none());
    }

    #[test]
    fn test_raw_package_ignores_unknown_fields() {
        let json = r#"{"id": "x", "num_resources": 3, "extras": [{"key": "a"}]}"#;
        let raw: RawPackage = serde_json::from_str(json).unwrap();
        assert_eq!(raw.id.as_deref(), Some("x"));
    }
}
