// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Partitioning of collaboration records into routed attributes.
//!
//! [`classify`] makes a single pass over already-fetched records and files
//! each one under its (status, kind) partition, keeping encounter order.
//! [`ClassificationResult::attributes`] serializes the partitions into the
//! fixed attribute set:
//!
//! ```text
//! total_count
//! accepted.users.ids      accepted.users.emails
//! accepted.groups.ids     accepted.groups.emails
//! pending.users.ids       pending.users.emails
//! pending.groups.ids      pending.groups.emails
//! ```
//!
//! Lists are comma-joined; an empty list is emitted as an empty string.
//!
//! # Example
//! ```
//! use collab_classifier::classifier::classify;
//! use collab_classifier::model::{CollaborationRecord, CollaborationStatus};
//!
//! let result = classify(vec![
//!     CollaborationRecord::user("user1", CollaborationStatus::Accepted, Some("user1@example.com")),
//!     CollaborationRecord::group("group1", CollaborationStatus::Pending, None),
//! ]);
//!
//! let attributes = result.attributes(None);
//! assert_eq!(attributes.get("total_count"), Some("2"));
//! assert_eq!(attributes.get("pending.groups.ids"), Some("group1"));
//! assert_eq!(attributes.get("pending.groups.emails"), Some(""));
//! ```

pub mod attributes;
mod outcome;
mod result;

pub use attributes::Attributes;
pub use outcome::{map_fetch_error, ClassificationOutcome, Route};
pub use result::{ClassificationResult, CollaboratorLists};

use crate::errors::FetchError;
use crate::model::CollaborationRecord;

/// Partition records by (status, kind), preserving encounter order.
pub fn classify<I>(records: I) -> ClassificationResult
where
    I: IntoIterator<Item = CollaborationRecord>,
{
    let mut result = ClassificationResult::new();
    for record in records {
        result.add(record);
    }
    result
}

/// Classify a fetch result. A fetch error short-circuits into its mapped
/// outcome; no partial attributes are produced.
pub fn classify_outcome<I>(
    fetched: Result<I, FetchError>,
    prefix: Option<&str>,
) -> ClassificationOutcome
where
    I: IntoIterator<Item = CollaborationRecord>,
{
    match fetched {
        Ok(records) => ClassificationOutcome::Success(classify(records).attributes(prefix)),
        Err(error) => map_fetch_error(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::attributes::{ERROR_CODE, ERROR_MESSAGE, PARTITIONS};
    use crate::model::{CollaborationStatus::*, CollaboratorKind};

    fn five_collaborations() -> Vec<CollaborationRecord> {
        vec![
            CollaborationRecord::user("user1", Accepted, Some("user1@example.com")),
            CollaborationRecord::user("user2", Accepted, Some("user2@example.com")),
            CollaborationRecord::group("group1", Accepted, Some("group1@example.com")),
            CollaborationRecord::user("user3", Pending, Some("user3@example.com")),
            CollaborationRecord::group("group2", Pending, Some("group2@example.com")),
        ]
    }

    #[test]
    fn test_classify_mixed_collaborations() {
        let attributes = classify(five_collaborations()).attributes(None);

        assert_eq!(attributes.get("total_count"), Some("5"));
        assert_eq!(attributes.get("accepted.users.ids"), Some("user1,user2"));
        assert_eq!(attributes.get("accepted.groups.ids"), Some("group1"));
        assert_eq!(attributes.get("pending.users.ids"), Some("user3"));
        assert_eq!(attributes.get("pending.groups.ids"), Some("group2"));
        assert_eq!(
            attributes.get("accepted.users.emails"),
            Some("user1@example.com,user2@example.com")
        );
        assert_eq!(attributes.get("accepted.groups.emails"), Some("group1@example.com"));
        assert_eq!(attributes.get("pending.users.emails"), Some("user3@example.com"));
        assert_eq!(attributes.get("pending.groups.emails"), Some("group2@example.com"));
        assert_eq!(attributes.len(), 9);
    }

    #[test]
    fn test_classify_empty_input_emits_empty_lists() {
        let result = classify(Vec::new());
        assert_eq!(result.total_count, 0);

        let attributes = result.attributes(None);
        assert_eq!(attributes.len(), 9);
        assert_eq!(attributes.get("total_count"), Some("0"));
        for (name, value) in attributes.iter() {
            if name != "total_count" {
                assert_eq!(value, "", "expected empty value for {}", name);
            }
        }
    }

    #[test]
    fn test_missing_email_keeps_id_and_skips_email() {
        let result = classify(vec![
            CollaborationRecord::user("user1", Accepted, Some("user1@example.com")),
            CollaborationRecord::user("user2", Accepted, None),
            CollaborationRecord::user("user3", Accepted, Some("user3@example.com")),
        ]);

        assert_eq!(result.accepted_users.ids, vec!["user1", "user2", "user3"]);
        assert_eq!(
            result.accepted_users.emails,
            vec!["user1@example.com", "user3@example.com"]
        );

        let attributes = result.attributes(None);
        assert_eq!(attributes.get("accepted.users.ids"), Some("user1,user2,user3"));
        assert_eq!(
            attributes.get("accepted.users.emails"),
            Some("user1@example.com,user3@example.com")
        );
    }

    #[test]
    fn test_empty_email_is_present() {
        let result = classify(vec![CollaborationRecord::group("group1", Pending, Some(""))]);
        assert_eq!(result.pending_groups.emails, vec![String::new()]);
    }

    #[test]
    fn test_order_is_encounter_order_not_sorted() {
        let result = classify(vec![
            CollaborationRecord::user("zeta", Pending, None),
            CollaborationRecord::group("g", Accepted, None),
            CollaborationRecord::user("alpha", Pending, None),
            CollaborationRecord::user("mid", Pending, None),
        ]);
        assert_eq!(result.pending_users.ids, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_total_count_matches_id_lists() {
        let records: Vec<CollaborationRecord> = (0..12)
            .map(|i| {
                let (status, kind) = PARTITIONS[i % PARTITIONS.len()];
                let id = format!("c{}", i);
                let email = if i % 3 == 0 { None } else { Some(format!("{}@example.com", id)) };
                CollaborationRecord::new(kind, id, status, email)
            })
            .collect();

        for n in 0..=records.len() {
            let input = &records[..n];
            let result = classify(input.to_vec());

            assert_eq!(result.total_count, n);
            assert_eq!(result.classified_ids(), result.total_count);

            let emails: usize = PARTITIONS
                .iter()
                .map(|(s, k)| result.lists(*s, *k).emails.len())
                .sum();
            assert_eq!(emails, input.iter().filter(|r| r.email.is_some()).count());

            for record in input {
                assert!(result.lists(record.status, record.kind).ids.contains(&record.id));
            }
        }
    }

    #[test]
    fn test_classify_is_idempotent() {
        assert_eq!(classify(five_collaborations()), classify(five_collaborations()));
    }

    #[test]
    fn test_classify_concurrently_over_disjoint_inputs() {
        let handles: Vec<_> = (0..4)
            .map(|n| {
                std::thread::spawn(move || {
                    let records: Vec<CollaborationRecord> = (0..n + 1)
                        .map(|i| CollaborationRecord::user(&format!("u{}", i), Accepted, None))
                        .collect();
                    classify(records).total_count
                })
            })
            .collect();

        let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(counts, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_attributes_with_prefix() {
        let attributes = classify(five_collaborations()).attributes(Some("box.collaborations"));
        assert_eq!(attributes.get("box.collaborations.total_count"), Some("5"));
        assert_eq!(
            attributes.get("box.collaborations.accepted.users.ids"),
            Some("user1,user2")
        );
        assert!(!attributes.contains_key("total_count"));
    }

    #[test]
    fn test_lists_lookup_matches_fields() {
        let result = classify(five_collaborations());
        assert_eq!(
            result.lists(Pending, CollaboratorKind::Group).ids,
            vec!["group2".to_string()]
        );
    }

    #[test]
    fn test_not_found_error_maps_to_not_found_outcome() {
        let outcome = map_fetch_error(FetchError::not_found(404, "API Error [404]"));

        assert_eq!(outcome.route(), Route::NotFound);
        assert_eq!(
            outcome,
            ClassificationOutcome::NotFound {
                code: 404,
                message: "API Error [404]".to_string(),
            }
        );

        let attributes = outcome.into_attributes();
        assert_eq!(attributes.get(ERROR_CODE), Some("404"));
        assert_eq!(attributes.get(ERROR_MESSAGE), Some("API Error [404]"));
    }

    #[test]
    fn test_generic_error_maps_to_failure_outcome_verbatim() {
        let outcome = map_fetch_error(FetchError::generic(500, "General API Error:\nUnexpected Error"));

        assert_eq!(outcome.route(), Route::Failure);
        let attributes = outcome.into_attributes();
        assert_eq!(attributes.get(ERROR_CODE), Some("500"));
        assert_eq!(
            attributes.get(ERROR_MESSAGE),
            Some("General API Error:\nUnexpected Error")
        );
    }

    #[test]
    fn test_classify_outcome_short_circuits_on_error() {
        let fetched: Result<Vec<CollaborationRecord>, FetchError> =
            Err(FetchError::not_found(404, "API Error [404]"));
        let outcome = classify_outcome(fetched, Some("box.collaborations"));
        assert_eq!(outcome.route(), Route::NotFound);

        let attributes = outcome.into_attributes();
        assert_eq!(attributes.len(), 2);
        assert!(!attributes.contains_key("box.collaborations.total_count"));
    }

    #[test]
    fn test_classify_outcome_success() {
        let outcome = classify_outcome(Ok::<_, FetchError>(five_collaborations()), None);
        assert_eq!(outcome.route(), Route::Success);
        assert_eq!(outcome.into_attributes().get("total_count"), Some("5"));
    }
}
