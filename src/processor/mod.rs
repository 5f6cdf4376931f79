// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The file-collaborators processor and its file id property.

mod collaborators;
mod file_id;


pub use collaborators::CollaboratorsProcessor;
pub use file_id::FileIdProperty;

/// Code routed to `failure` when the file id cannot be resolved.
pub const INVALID_FILE_ID_STATUS: i32 = 400;
/// Code routed to `failure` when a collaboration is rejected under the
/// `fail` policy.
pub const UNSUPPORTED_RECORD_STATUS: i32 = 422;
