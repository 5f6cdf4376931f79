// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Record source implementations.
//!
//! * `memory` - scripted collaborations or errors per file id, for tests and demos
//! * `json_file` - one already-paginated JSON listing per file id in a directory

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileRecordSource;
pub use memory::InMemoryRecordSource;

/// Message the storage API reports for a bare status failure.
pub fn api_error_message(code: i32) -> String {
    format!("API Error [{}]", code)
}
