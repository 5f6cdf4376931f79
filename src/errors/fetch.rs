// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Classified failures reported by a record source.

use thiserror::Error;

/// Status code the storage API uses for a missing file.
pub const NOT_FOUND_STATUS: i32 = 404;

/// Classification of a fetch failure.
///
/// Only two classes are distinguished downstream: the file does not exist,
/// or anything else went wrong talking to the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    NotFound,
    Generic,
}

impl FetchErrorKind {
    /// Classify an API status code. Only 404 counts as not-found.
    pub fn from_status(code: i32) -> Self {
        if code == NOT_FOUND_STATUS {
            FetchErrorKind::NotFound
        } else {
            FetchErrorKind::Generic
        }
    }
}

/// A failure to fetch the collaborations of a file.
///
/// `message` is carried verbatim, including any embedded newlines.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct FetchError {
    pub code: i32,
    pub message: String,
    pub kind: FetchErrorKind,
}

impl FetchError {
    pub fn new(code: i32, message: impl Into<String>, kind: FetchErrorKind) -> Self {
        Self {
            code,
            message: message.into(),
            kind,
        }
    }

    pub fn not_found(code: i32, message: impl Into<String>) -> Self {
        Self::new(code, message, FetchErrorKind::NotFound)
    }

    pub fn generic(code: i32, message: impl Into<String>) -> Self {
        Self::new(code, message, FetchErrorKind::Generic)
    }

    /// Build an error whose kind follows from the status code.
    pub fn from_status(code: i32, message: impl Into<String>) -> Self {
        Self::new(code, message, FetchErrorKind::from_status(code))
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == FetchErrorKind::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_status() {
        assert_eq!(FetchErrorKind::from_status(404), FetchErrorKind::NotFound);
        assert_eq!(FetchErrorKind::from_status(500), FetchErrorKind::Generic);
        assert_eq!(FetchErrorKind::from_status(403), FetchErrorKind::Generic);
    }

    #[test]
    fn test_display_is_message_verbatim() {
        let error = FetchError::generic(500, "General API Error:\nUnexpected Error");
        assert_eq!(error.to_string(), "General API Error:\nUnexpected Error");
        assert!(!error.is_not_found());
    }
}
