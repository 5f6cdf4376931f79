// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::classifier::attributes::{
    emails_attribute, ids_attribute, prefixed, Attributes, LIST_SEPARATOR, PARTITIONS, TOTAL_COUNT,
};
use crate::model::{CollaborationRecord, CollaborationStatus, CollaboratorKind};

/// Ids and emails collected for one (status, kind) partition.
///
/// The two lists are filtered independently: a collaborator without an email
/// contributes to `ids` only, so the lists are not positionally aligned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollaboratorLists {
    pub ids: Vec<String>,
    pub emails: Vec<String>,
}

impl CollaboratorLists {
    fn push(&mut self, record: CollaborationRecord) {
        self.ids.push(record.id);
        if let Some(email) = record.email {
            self.emails.push(email);
        }
    }
}

/// Collaborations partitioned by status and collaborator kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationResult {
    pub total_count: usize,
    pub accepted_users: CollaboratorLists,
    pub accepted_groups: CollaboratorLists,
    pub pending_users: CollaboratorLists,
    pub pending_groups: CollaboratorLists,
}

impl ClassificationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// File one record under its partition.
    pub fn add(&mut self, record: CollaborationRecord) {
        self.total_count += 1;
        self.lists_mut(record.status, record.kind).push(record);
    }

    pub fn lists(&self, status: CollaborationStatus, kind: CollaboratorKind) -> &CollaboratorLists {
        match (status, kind) {
            (CollaborationStatus::Accepted, CollaboratorKind::User) => &self.accepted_users,
            (CollaborationStatus::Accepted, CollaboratorKind::Group) => &self.accepted_groups,
            (CollaborationStatus::Pending, CollaboratorKind::User) => &self.pending_users,
            (CollaborationStatus::Pending, CollaboratorKind::Group) => &self.pending_groups,
        }
    }

    fn lists_mut(
        &mut self,
        status: CollaborationStatus,
        kind: CollaboratorKind,
    ) -> &mut CollaboratorLists {
        match (status, kind) {
            (CollaborationStatus::Accepted, CollaboratorKind::User) => &mut self.accepted_users,
            (CollaborationStatus::Accepted, CollaboratorKind::Group) => &mut self.accepted_groups,
            (CollaborationStatus::Pending, CollaboratorKind::User) => &mut self.pending_users,
            (CollaborationStatus::Pending, CollaboratorKind::Group) => &mut self.pending_groups,
        }
    }

    /// Sum of the four id-list lengths. Always equal to `total_count`.
    pub fn classified_ids(&self) -> usize {
        PARTITIONS
            .iter()
            .map(|(status, kind)| self.lists(*status, *kind).ids.len())
            .sum()
    }

    /// Serialize into the fixed attribute set.
    ///
    /// All nine attributes are always present; an empty list becomes `""`.
    pub fn attributes(&self, prefix: Option<&str>) -> Attributes {
        let mut attributes = Attributes::new();
        attributes.insert(prefixed(prefix, TOTAL_COUNT), self.total_count.to_string());

        for (status, kind) in PARTITIONS {
            let lists = self.lists(status, kind);
            attributes.insert(
                prefixed(prefix, &ids_attribute(status, kind)),
                lists.ids.join(LIST_SEPARATOR),
            );
            attributes.insert(
                prefixed(prefix, &emails_attribute(status, kind)),
                lists.emails.join(LIST_SEPARATOR),
            );
        }

        attributes
    }
}
