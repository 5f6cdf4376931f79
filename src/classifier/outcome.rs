// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

use crate::classifier::attributes::{Attributes, ERROR_CODE, ERROR_MESSAGE};
use crate::errors::{FetchError, FetchErrorKind};

/// Downstream relationship an outcome is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Success,
    NotFound,
    Failure,
}

impl Route {
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Success => "success",
            Route::NotFound => "not_found",
            Route::Failure => "failure",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying one file's collaborations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassificationOutcome {
    Success(Attributes),
    NotFound { code: i32, message: String },
    Failure { code: i32, message: String },
}

impl ClassificationOutcome {
    pub fn route(&self) -> Route {
        match self {
            ClassificationOutcome::Success(_) => Route::Success,
            ClassificationOutcome::NotFound { .. } => Route::NotFound,
            ClassificationOutcome::Failure { .. } => Route::Failure,
        }
    }

    /// Attributes to attach to the routed unit of work.
    ///
    /// Failures carry `error.code` (stringified) and `error.message`.
    pub fn into_attributes(self) -> Attributes {
        match self {
            ClassificationOutcome::Success(attributes) => attributes,
            ClassificationOutcome::NotFound { code, message }
            | ClassificationOutcome::Failure { code, message } => {
                let mut attributes = Attributes::new();
                attributes.insert(ERROR_CODE, code.to_string());
                attributes.insert(ERROR_MESSAGE, message);
                attributes
            }
        }
    }
}

/// Map a classified fetch error onto its outcome. Code and message are kept
/// verbatim.
pub fn map_fetch_error(error: FetchError) -> ClassificationOutcome {
    let FetchError {
        code,
        message,
        kind,
    } = error;
    match kind {
        FetchErrorKind::NotFound => ClassificationOutcome::NotFound { code, message },
        FetchErrorKind::Generic => ClassificationOutcome::Failure { code, message },
    }
}
