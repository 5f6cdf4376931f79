// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::fmt;

/// Where the processor takes the file id from.
///
/// `${name}` reads the incoming attribute `name`; anything else is the file
/// id itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileIdProperty {
    Literal(String),
    Attribute(String),
}

impl FileIdProperty {
    pub fn parse(value: &str) -> Result<Self, String> {
        let value = value.trim();
        if value.is_empty() {
            return Err("file id must not be empty".to_string());
        }

        if let Some(rest) = value.strip_prefix("${") {
            let name = rest
                .strip_suffix('}')
                .ok_or_else(|| format!("unterminated attribute reference '{}'", value))?;
            if name.is_empty() || name.contains(['$', '{', '}']) {
                return Err(format!("invalid attribute reference '{}'", value));
            }
            return Ok(FileIdProperty::Attribute(name.to_string()));
        }

        if value.contains("${") {
            return Err(format!(
                "attribute reference must be the whole value, got '{}'",
                value
            ));
        }

        Ok(FileIdProperty::Literal(value.to_string()))
    }

    /// Resolve against incoming attributes. A missing or blank attribute
    /// resolves to nothing.
    pub fn resolve(&self, attributes: &HashMap<String, String>) -> Option<String> {
        match self {
            FileIdProperty::Literal(id) => Some(id.clone()),
            FileIdProperty::Attribute(name) => attributes
                .get(name)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string),
        }
    }
}

impl fmt::Display for FileIdProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileIdProperty::Literal(id) => write!(f, "{}", id),
            FileIdProperty::Attribute(name) => write!(f, "${{{}}}", name),
        }
    }
}
