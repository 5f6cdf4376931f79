// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for processor execution and routing events.
//!
//! This module contains message types for logging events related to:
//! * Processor execution lifecycle (start, completion, failure)
//! * File id resolution

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Processor execution started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use collab_classifier::observability::messages::processor::ProcessorExecutionStarted;
///
/// let msg = ProcessorExecutionStarted {
///     processor_id: "file_collaborators",
///     file_id: "12345",
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ProcessorExecutionStarted<'a> {
    pub processor_id: &'a str,
    pub file_id: &'a str,
}

impl Display for ProcessorExecutionStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' execution started: file_id={}",
            self.processor_id, self.file_id
        )
    }
}

impl StructuredLog for ProcessorExecutionStarted<'_> {
    fn log(&self) {
        tracing::info!(
            processor_id = self.processor_id,
            file_id = self.file_id,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "processor",
            span_name = name,
            processor_id = self.processor_id,
            file_id = self.file_id,
        )
    }
}

/// Processor execution completed and was routed to success.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ProcessorExecutionCompleted<'a> {
    pub processor_id: &'a str,
    pub file_id: &'a str,
    pub attribute_count: usize,
    pub duration: std::time::Duration,
}

impl Display for ProcessorExecutionCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' completed: file_id={}, attributes={}, duration={:?}",
            self.processor_id, self.file_id, self.attribute_count, self.duration
        )
    }
}

impl StructuredLog for ProcessorExecutionCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            processor_id = self.processor_id,
            file_id = self.file_id,
            attribute_count = self.attribute_count,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "processor_completed",
            span_name = name,
            processor_id = self.processor_id,
            file_id = self.file_id,
            duration = ?self.duration,
        )
    }
}

/// Processor execution was routed to a failure relationship.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use collab_classifier::observability::messages::processor::ProcessorExecutionFailed;
///
/// let msg = ProcessorExecutionFailed {
///     processor_id: "file_collaborators",
///     route: "not_found",
///     code: 404,
///     message: "API Error [404]",
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct ProcessorExecutionFailed<'a> {
    pub processor_id: &'a str,
    pub route: &'a str,
    pub code: i32,
    pub message: &'a str,
}

impl Display for ProcessorExecutionFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processor '{}' routed to {}: [{}] {}",
            self.processor_id, self.route, self.code, self.message
        )
    }
}

impl StructuredLog for ProcessorExecutionFailed<'_> {
    fn log(&self) {
        tracing::error!(
            processor_id = self.processor_id,
            route = self.route,
            code = self.code,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "processor_failed",
            span_name = name,
            processor_id = self.processor_id,
            route = self.route,
            code = self.code,
        )
    }
}
