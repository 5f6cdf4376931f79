// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod fetch;
mod record;

pub use config::ConfigError;
pub use fetch::{FetchError, FetchErrorKind, NOT_FOUND_STATUS};
pub use record::RecordError;
