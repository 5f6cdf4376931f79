// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

/// Who a collaboration grants access to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollaboratorKind {
    User,
    Group,
}

impl CollaboratorKind {
    /// Plural name used in attribute keys (`users`, `groups`).
    pub fn attribute_segment(&self) -> &'static str {
        match self {
            CollaboratorKind::User => "users",
            CollaboratorKind::Group => "groups",
        }
    }
}

impl fmt::Display for CollaboratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollaboratorKind::User => write!(f, "user"),
            CollaboratorKind::Group => write!(f, "group"),
        }
    }
}

/// Whether the collaborator has accepted the invitation yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollaborationStatus {
    Accepted,
    Pending,
}

impl CollaborationStatus {
    pub fn attribute_segment(&self) -> &'static str {
        match self {
            CollaborationStatus::Accepted => "accepted",
            CollaborationStatus::Pending => "pending",
        }
    }
}

impl fmt::Display for CollaborationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.attribute_segment())
    }
}

/// One grant of file access to a user or group.
///
/// `email` is `None` when the collaborator has no resolvable login. An empty
/// string is a present (if useless) email and is kept as such.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollaborationRecord {
    pub kind: CollaboratorKind,
    pub id: String,
    pub status: CollaborationStatus,
    pub email: Option<String>,
}

impl CollaborationRecord {
    pub fn new(
        kind: CollaboratorKind,
        id: impl Into<String>,
        status: CollaborationStatus,
        email: Option<String>,
    ) -> Self {
        Self {
            kind,
            id: id.into(),
            status,
            email,
        }
    }

    pub fn user(id: &str, status: CollaborationStatus, email: Option<&str>) -> Self {
        Self::new(CollaboratorKind::User, id, status, email.map(str::to_string))
    }

    pub fn group(id: &str, status: CollaborationStatus, email: Option<&str>) -> Self {
        Self::new(CollaboratorKind::Group, id, status, email.map(str::to_string))
    }
}
