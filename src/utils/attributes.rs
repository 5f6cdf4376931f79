// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::classifier::Attributes;

/// Overlay produced attributes onto the incoming ones.
///
/// Incoming attributes are kept; a produced attribute with the same name
/// replaces the incoming value.
///
/// # Example
///
/// ```rust
/// use collab_classifier::classifier::Attributes;
/// use collab_classifier::utils::overlay_attributes;
///
/// let incoming: Attributes = vec![("box.id", "12345"), ("total_count", "stale")].into_iter().collect();
/// let produced: Attributes = vec![("total_count", "5")].into_iter().collect();
///
/// let merged = overlay_attributes(incoming, produced);
///
/// assert_eq!(merged.get("box.id"), Some("12345"));
/// assert_eq!(merged.get("total_count"), Some("5"));
/// ```
pub fn overlay_attributes(mut incoming: Attributes, produced: Attributes) -> Attributes {
    for (name, value) in produced {
        incoming.insert(name, value);
    }
    incoming
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_keeps_incoming_attributes() {
        let incoming: Attributes = vec![("box.id", "1"), ("filename", "a.txt")].into_iter().collect();
        let produced: Attributes = vec![("total_count", "0")].into_iter().collect();

        let merged = overlay_attributes(incoming, produced);

        assert_eq!(merged.len(), 3);
        assert_eq!(merged.get("filename"), Some("a.txt"));
        assert_eq!(merged.get("total_count"), Some("0"));
    }

    #[test]
    fn test_overlay_empty_produced() {
        let incoming: Attributes = vec![("key", "value")].into_iter().collect();
        let merged = overlay_attributes(incoming.clone(), Attributes::new());
        assert_eq!(merged, incoming);
    }

    #[test]
    fn test_overlay_replaces_same_name() {
        let incoming: Attributes = vec![("error.code", "old")].into_iter().collect();
        let produced: Attributes = vec![("error.code", "404")].into_iter().collect();

        let merged = overlay_attributes(incoming, produced);
        assert_eq!(merged.get("error.code"), Some("404"));
    }
}
