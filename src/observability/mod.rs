// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging.
//!
//! Diagnostic and operational log lines are centralized as message types that
//! implement `Display` and [`messages::StructuredLog`], so log text lives in
//! one place and every event carries the same structured fields wherever it
//! is emitted.
//!
//! # Usage
//!
//! ```rust
//! use collab_classifier::observability::messages::processor::ProcessorExecutionFailed;
//! use collab_classifier::observability::messages::StructuredLog;
//!
//! let msg = ProcessorExecutionFailed {
//!     processor_id: "file_collaborators",
//!     route: "failure",
//!     code: 500,
//!     message: "General API Error",
//! };
//!
//! msg.log();
//! ```

pub mod messages;
