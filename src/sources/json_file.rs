// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Record source backed by a directory of JSON listings.
//!
//! Each file id maps to `<directory>/<file_id>.json`, holding either a listing
//! page, a bare array of collaborations, or an API error body:
//!
//! ```json
//! { "total_count": 1, "entries": [ { "status": "accepted", "accessible_by": { "type": "user", "id": "u1" } } ] }
//! ```
//!
//! ```json
//! { "type": "error", "status": 404, "message": "Not Found" }
//! ```

use async_trait::async_trait;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::errors::{FetchError, NOT_FOUND_STATUS};
use crate::model::{ApiErrorBody, CollaborationPage, RawCollaboration};
use crate::sources::api_error_message;
use crate::traits::RecordSource;

/// Code reported for listings that cannot be read or parsed.
pub const UNREADABLE_LISTING_STATUS: i32 = 500;

pub struct JsonFileRecordSource {
    directory: PathBuf,
}

impl JsonFileRecordSource {
    pub fn new<P: AsRef<Path>>(directory: P) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Path of the listing for `file_id`, or `None` if the id could escape the
    /// directory.
    fn listing_path(&self, file_id: &str) -> Option<PathBuf> {
        let escapes = file_id.is_empty()
            || file_id.contains('/')
            || file_id.contains('\\')
            || file_id.contains("..");
        if escapes {
            None
        } else {
            Some(self.directory.join(format!("{}.json", file_id)))
        }
    }
}

fn not_found() -> FetchError {
    FetchError::not_found(NOT_FOUND_STATUS, api_error_message(NOT_FOUND_STATUS))
}

fn unreadable(file_id: &str, reason: impl std::fmt::Display) -> FetchError {
    FetchError::generic(
        UNREADABLE_LISTING_STATUS,
        format!("Failed to read collaborations for file '{}': {}", file_id, reason),
    )
}

/// Interpret a listing document.
fn parse_listing(file_id: &str, content: &str) -> Result<Vec<RawCollaboration>, FetchError> {
    let document: Value = serde_json::from_str(content).map_err(|e| unreadable(file_id, e))?;

    let is_error_body = document.get("type").and_then(Value::as_str) == Some("error");
    if is_error_body {
        let body: ApiErrorBody =
            serde_json::from_value(document).map_err(|e| unreadable(file_id, e))?;
        return Err(FetchError::from_status(body.status, body.message));
    }

    if document.is_array() {
        return serde_json::from_value(document).map_err(|e| unreadable(file_id, e));
    }

    let page: CollaborationPage =
        serde_json::from_value(document).map_err(|e| unreadable(file_id, e))?;
    if let Some(total_count) = page.total_count {
        if total_count != page.entries.len() as u64 {
            return Err(unreadable(
                file_id,
                format!(
                    "total_count {} does not match {} entries",
                    total_count,
                    page.entries.len()
                ),
            ));
        }
    }
    Ok(page.entries)
}

#[async_trait]
impl RecordSource for JsonFileRecordSource {
    async fn fetch_collaborations(&self, file_id: &str) -> Result<Vec<RawCollaboration>, FetchError> {
        let path = self.listing_path(file_id).ok_or_else(not_found)?;

        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(not_found()),
            Err(e) => return Err(unreadable(file_id, e)),
        };

        parse_listing(file_id, &content)
    }

    fn name(&self) -> &'static str {
        "json_file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FetchErrorKind;
    use tempfile::TempDir;

    fn write_listing(dir: &TempDir, file_id: &str, content: &str) {
        std::fs::write(dir.path().join(format!("{}.json", file_id)), content).unwrap();
    }

    #[tokio::test]
    async fn test_reads_listing_page() {
        let dir = TempDir::new().unwrap();
        write_listing(
            &dir,
            "12345",
            r#"{
                "total_count": 2,
                "entries": [
                    { "status": "accepted", "accessible_by": { "type": "user", "id": "user1", "login": "user1@example.com" } },
                    { "status": "pending", "accessible_by": { "type": "group", "id": "group1" } }
                ]
            }"#,
        );

        let source = JsonFileRecordSource::new(dir.path());
        let entries = source.fetch_collaborations("12345").await.unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].status, "accepted");
        assert_eq!(entries[1].accessible_by.as_ref().unwrap().id, "group1");
    }

    #[tokio::test]
    async fn test_reads_bare_array() {
        let dir = TempDir::new().unwrap();
        write_listing(
            &dir,
            "12345",
            r#"[ { "status": "pending", "accessible_by": { "type": "user", "id": "user3" } } ]"#,
        );

        let source = JsonFileRecordSource::new(dir.path());
        let entries = source.fetch_collaborations("12345").await.unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_listing_is_not_found() {
        let dir = TempDir::new().unwrap();
        let source = JsonFileRecordSource::new(dir.path());

        let error = source.fetch_collaborations("nope").await.unwrap_err();
        assert_eq!(error, FetchError::not_found(404, "API Error [404]"));
    }

    #[tokio::test]
    async fn test_error_body_is_classified_by_status() {
        let dir = TempDir::new().unwrap();
        write_listing(&dir, "gone", r#"{ "type": "error", "status": 404, "message": "Not Found" }"#);
        write_listing(
            &dir,
            "broken",
            r#"{ "type": "error", "status": 500, "message": "General API Error:\nUnexpected Error" }"#,
        );

        let source = JsonFileRecordSource::new(dir.path());

        let gone = source.fetch_collaborations("gone").await.unwrap_err();
        assert_eq!(gone.kind, FetchErrorKind::NotFound);
        assert_eq!(gone.message, "Not Found");

        let broken = source.fetch_collaborations("broken").await.unwrap_err();
        assert_eq!(broken.kind, FetchErrorKind::Generic);
        assert_eq!(broken.code, 500);
        assert_eq!(broken.message, "General API Error:\nUnexpected Error");
    }

    #[tokio::test]
    async fn test_malformed_listing_is_generic_failure() {
        let dir = TempDir::new().unwrap();
        write_listing(&dir, "bad", "{ not json");

        let source = JsonFileRecordSource::new(dir.path());
        let error = source.fetch_collaborations("bad").await.unwrap_err();

        assert_eq!(error.kind, FetchErrorKind::Generic);
        assert_eq!(error.code, UNREADABLE_LISTING_STATUS);
        assert!(error.message.starts_with("Failed to read collaborations for file 'bad'"));
    }

    #[tokio::test]
    async fn test_object_without_entries_is_generic_failure() {
        let dir = TempDir::new().unwrap();
        write_listing(&dir, "counted", r#"{ "total_count": 3 }"#);
        write_listing(
            &dir,
            "single",
            r#"{ "status": "accepted", "accessible_by": { "type": "user", "id": "user1" } }"#,
        );

        let source = JsonFileRecordSource::new(dir.path());

        for file_id in ["counted", "single"] {
            let error = source.fetch_collaborations(file_id).await.unwrap_err();
            assert_eq!(error.kind, FetchErrorKind::Generic, "{}", file_id);
            assert_eq!(error.code, UNREADABLE_LISTING_STATUS);
        }
    }

    #[tokio::test]
    async fn test_total_count_must_match_entries() {
        let dir = TempDir::new().unwrap();
        write_listing(
            &dir,
            "short",
            r#"{ "total_count": 2, "entries": [ { "status": "pending", "accessible_by": { "type": "user", "id": "u1" } } ] }"#,
        );
        write_listing(&dir, "empty", r#"{ "total_count": 0, "entries": [] }"#);

        let source = JsonFileRecordSource::new(dir.path());

        let error = source.fetch_collaborations("short").await.unwrap_err();
        assert_eq!(error.code, UNREADABLE_LISTING_STATUS);
        assert!(error.message.contains("total_count 2 does not match 1 entries"));

        assert!(source.fetch_collaborations("empty").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_file_id_cannot_escape_directory() {
        let dir = TempDir::new().unwrap();
        let source = JsonFileRecordSource::new(dir.path());

        for file_id in ["../secret", "a/b", "", ".."] {
            let error = source.fetch_collaborations(file_id).await.unwrap_err();
            assert!(error.is_not_found(), "expected not-found for {:?}", file_id);
        }
    }
}
