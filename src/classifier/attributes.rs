// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::{BTreeMap, HashMap};

use crate::model::{CollaborationStatus, CollaboratorKind};

/// Attribute holding the number of classified collaborations.
pub const TOTAL_COUNT: &str = "total_count";
/// Attribute holding the stringified error code on a failure route.
pub const ERROR_CODE: &str = "error.code";
/// Attribute holding the error message on a failure route.
pub const ERROR_MESSAGE: &str = "error.message";

/// Separator between list elements in an attribute value.
pub const LIST_SEPARATOR: &str = ",";

/// Every (status, kind) partition, in the order attributes are emitted.
pub const PARTITIONS: [(CollaborationStatus, CollaboratorKind); 4] = [
    (CollaborationStatus::Accepted, CollaboratorKind::User),
    (CollaborationStatus::Accepted, CollaboratorKind::Group),
    (CollaborationStatus::Pending, CollaboratorKind::User),
    (CollaborationStatus::Pending, CollaboratorKind::Group),
];

/// `accepted.users.ids` and friends.
pub fn ids_attribute(status: CollaborationStatus, kind: CollaboratorKind) -> String {
    format!("{}.{}.ids", status.attribute_segment(), kind.attribute_segment())
}

/// `accepted.users.emails` and friends.
pub fn emails_attribute(status: CollaborationStatus, kind: CollaboratorKind) -> String {
    format!("{}.{}.emails", status.attribute_segment(), kind.attribute_segment())
}

/// Prepend `prefix.` to an attribute name. An empty prefix is no prefix.
pub fn prefixed(prefix: Option<&str>, name: &str) -> String {
    match prefix {
        Some(p) if !p.is_empty() => format!("{}.{}", p, name),
        _ => name.to_string(),
    }
}

/// Attribute names mapped to string values, iterated in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(pub BTreeMap<String, String>);

impl Attributes {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }
}

impl From<BTreeMap<String, String>> for Attributes {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

impl From<HashMap<String, String>> for Attributes {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map.into_iter().collect())
    }
}

impl From<Attributes> for BTreeMap<String, String> {
    fn from(attributes: Attributes) -> Self {
        attributes.0
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl IntoIterator for Attributes {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_names() {
        assert_eq!(
            ids_attribute(CollaborationStatus::Accepted, CollaboratorKind::User),
            "accepted.users.ids"
        );
        assert_eq!(
            emails_attribute(CollaborationStatus::Pending, CollaboratorKind::Group),
            "pending.groups.emails"
        );
    }

    #[test]
    fn test_prefixed() {
        assert_eq!(prefixed(None, TOTAL_COUNT), "total_count");
        assert_eq!(prefixed(Some(""), TOTAL_COUNT), "total_count");
        assert_eq!(
            prefixed(Some("box.collaborations"), "pending.users.ids"),
            "box.collaborations.pending.users.ids"
        );
    }

    #[test]
    fn test_attributes_iterate_in_key_order() {
        let attributes: Attributes = vec![("b", "2"), ("a", "1"), ("c", "3")].into_iter().collect();
        let keys: Vec<&String> = attributes.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert_eq!(attributes.get("b"), Some("2"));
    }
}
