// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Messages are organized by subsystem:
//!
//! * `classifier` - aggregation results
//! * `processor` - processor execution lifecycle and routing
//! * `source` - record source fetches and record ingestion

use tracing::Span;

pub mod classifier;
pub mod processor;
pub mod source;

/// A message that knows its own log level and structured fields.
pub trait StructuredLog {
    /// Emit the message at its documented level, with its fields attached.
    fn log(&self);

    /// Build a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
