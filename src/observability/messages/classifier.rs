// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Collaborations were classified into partitions.
///
/// # Log Level
/// `debug!` - Per-file detail
pub struct ClassificationCompleted<'a> {
    pub file_id: &'a str,
    pub total_count: usize,
    pub accepted_count: usize,
    pub pending_count: usize,
}

impl Display for ClassificationCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Classified {} collaborations for file '{}': accepted={}, pending={}",
            self.total_count, self.file_id, self.accepted_count, self.pending_count
        )
    }
}

impl StructuredLog for ClassificationCompleted<'_> {
    fn log(&self) {
        tracing::debug!(
            file_id = self.file_id,
            total_count = self.total_count,
            accepted_count = self.accepted_count,
            pending_count = self.pending_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "classification",
            span_name = name,
            file_id = self.file_id,
            total_count = self.total_count,
        )
    }
}
