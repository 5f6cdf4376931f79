// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for record source fetches and raw record ingestion.

use crate::errors::{FetchError, RecordError};
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A raw collaboration was dropped during ingestion.
///
/// # Log Level
/// `warn!` - Degraded result, the record is missing from the attributes
///
/// # Example
/// ```
/// use collab_classifier::errors::RecordError;
/// use collab_classifier::observability::messages::source::RecordSkipped;
///
/// let error = RecordError::UnsupportedStatus {
///     status: "rejected".to_string(),
///     collaborator_id: "user1".to_string(),
/// };
/// let msg = RecordSkipped { error: &error };
///
/// tracing::warn!("{}", msg);
/// ```
pub struct RecordSkipped<'a> {
    pub error: &'a RecordError,
}

impl Display for RecordSkipped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Skipping collaboration: {}", self.error)
    }
}

impl StructuredLog for RecordSkipped<'_> {
    fn log(&self) {
        tracing::warn!(error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("record_skipped", span_name = name, error = %self.error)
    }
}

/// Collaborations were fetched from a source.
///
/// # Log Level
/// `debug!` - Per-file detail
pub struct CollaborationsFetched<'a> {
    pub source: &'a str,
    pub file_id: &'a str,
    pub entry_count: usize,
}

impl Display for CollaborationsFetched<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Fetched {} collaborations for file '{}' from {}",
            self.entry_count, self.file_id, self.source
        )
    }
}

impl StructuredLog for CollaborationsFetched<'_> {
    fn log(&self) {
        tracing::debug!(
            source = self.source,
            file_id = self.file_id,
            entry_count = self.entry_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "fetch",
            span_name = name,
            source = self.source,
            file_id = self.file_id,
        )
    }
}

/// A source failed to fetch collaborations.
///
/// # Log Level
/// `warn!` for not-found, `error!` otherwise
pub struct FetchFailed<'a> {
    pub source: &'a str,
    pub file_id: &'a str,
    pub error: &'a FetchError,
}

impl Display for FetchFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Failed to fetch collaborations for file '{}' from {}: [{}] {}",
            self.file_id, self.source, self.error.code, self.error.message
        )
    }
}

impl StructuredLog for FetchFailed<'_> {
    fn log(&self) {
        if self.error.is_not_found() {
            tracing::warn!(
                source = self.source,
                file_id = self.file_id,
                code = self.error.code,
                "{}", self
            );
        } else {
            tracing::error!(
                source = self.source,
                file_id = self.file_id,
                code = self.error.code,
                "{}", self
            );
        }
    }

    fn span(&self, name: &str) -> Span {
        if self.error.is_not_found() {
            tracing::warn_span!(
                "fetch_failed",
                span_name = name,
                source = self.source,
                file_id = self.file_id,
                code = self.error.code,
            )
        } else {
            tracing::error_span!(
                "fetch_failed",
                span_name = name,
                source = self.source,
                file_id = self.file_id,
                code = self.error.code,
            )
        }
    }
}
