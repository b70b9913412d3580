//! Item-scoped filtering over interaction logs.
//!
//! Filtering is a single pass that keeps records in their original order.
//! An absent item id means "no filter": the input comes back untouched.

use tracing::trace;

use crate::model::interaction::InteractionLog;

/// Optional criteria applied to a list of interactions.
///
/// Every `None` criterion matches everything, so `InteractionFilter::default()`
/// keeps every record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionFilter {
    /// Keep only interactions with this `item_id` (exact match, `0` included).
    pub item_id: Option<i64>,
}

impl InteractionFilter {
    #[must_use]
    pub const fn for_item(item_id: Option<i64>) -> Self {
        Self { item_id }
    }

    /// Returns true when no criterion is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.item_id.is_none()
    }

    #[must_use]
    pub const fn matches(&self, log: &InteractionLog) -> bool {
        match self.item_id {
            Some(item_id) => log.item_id == item_id,
            None => true,
        }
    }

    /// Keep the matching records of `records`, preserving their order.
    #[must_use]
    pub fn apply(&self, mut records: Vec<InteractionLog>) -> Vec<InteractionLog> {
        if self.is_empty() {
            return records;
        }

        let before = records.len();
        records.retain(|log| self.matches(log));
        trace!(
            item_id = ?self.item_id,
            before,
            kept = records.len(),
            "filtered interactions"
        );
        records
    }
}

/// Return the interactions whose `item_id` equals `item_id`, or all of them
/// when `item_id` is `None`.
#[must_use]
pub fn filter_by_item_id(
    records: Vec<InteractionLog>,
    item_id: Option<i64>,
) -> Vec<InteractionLog> {
    InteractionFilter::for_item(item_id).apply(records)
}

/// Borrowing counterpart of [`filter_by_item_id`].
pub fn matching_item(
    records: &[InteractionLog],
    item_id: Option<i64>,
) -> impl Iterator<Item = &InteractionLog> {
    let filter = InteractionFilter::for_item(item_id);
    records.iter().filter(move |log| filter.matches(log))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_log(id: i64, learner_id: i64, item_id: i64) -> InteractionLog {
        InteractionLog::new(id, learner_id, item_id, "attempt")
    }

    #[test]
    fn returns_all_when_item_id_is_none() {
        let interactions = vec![make_log(1, 1, 1), make_log(2, 2, 2)];
        let result = filter_by_item_id(interactions.clone(), None);
        assert_eq!(result, interactions);
    }

    #[test]
    fn none_hands_back_the_same_vector() {
        let interactions = vec![make_log(1, 1, 1), make_log(2, 2, 2)];
        let before = interactions.as_ptr();
        let result = filter_by_item_id(interactions, None);
        assert_eq!(result.as_ptr(), before);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn returns_empty_for_empty_input() {
        assert!(filter_by_item_id(Vec::new(), Some(1)).is_empty());
        assert!(filter_by_item_id(Vec::new(), None).is_empty());
    }

    #[test]
    fn returns_interaction_with_matching_ids() {
        let interactions = vec![make_log(1, 1, 1), make_log(2, 2, 2)];
        let result = filter_by_item_id(interactions, Some(1));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);
    }

    #[test]
    fn learner_id_does_not_affect_matching() {
        let interactions = vec![make_log(1, 2, 1)];
        let result = filter_by_item_id(interactions, Some(1));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].item_id, 1);
        assert_eq!(result[0].learner_id, 2);
    }

    #[test]
    fn returns_empty_when_no_item_id_matches() {
        let interactions = vec![make_log(1, 1, 2), make_log(2, 2, 3)];
        assert!(filter_by_item_id(interactions, Some(99)).is_empty());
    }

    #[test]
    fn returns_empty_for_single_non_matching_item() {
        assert!(filter_by_item_id(vec![make_log(1, 1, 5)], Some(6)).is_empty());
    }

    #[test]
    fn returns_entire_list_when_all_items_match() {
        let interactions = vec![make_log(1, 1, 7), make_log(2, 2, 7), make_log(3, 3, 7)];
        let result = filter_by_item_id(interactions.clone(), Some(7));
        assert_eq!(result, interactions);
    }

    #[test]
    fn returns_only_matching_subset_from_mixed_list() {
        let interactions = vec![
            make_log(1, 1, 3),
            make_log(2, 2, 4),
            make_log(3, 3, 3),
            make_log(4, 4, 5),
        ];
        let result = filter_by_item_id(interactions, Some(3));
        assert!(result.iter().all(|log| log.item_id == 3));
        let ids: Vec<i64> = result.iter().map(|log| log.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn zero_is_a_real_item_id() {
        let interactions = vec![make_log(1, 1, 0), make_log(2, 2, 1)];
        let result = filter_by_item_id(interactions, Some(0));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].item_id, 0);
    }

    #[test]
    fn borrowing_form_agrees_with_owning_form() {
        let interactions = vec![
            make_log(1, 1, 3),
            make_log(2, 2, 4),
            make_log(3, 3, 3),
        ];
        let borrowed: Vec<InteractionLog> =
            matching_item(&interactions, Some(3)).cloned().collect();
        assert_eq!(borrowed, filter_by_item_id(interactions.clone(), Some(3)));
        assert_eq!(matching_item(&interactions, None).count(), 3);
    }

    #[test]
    fn default_filter_is_empty_and_matches_everything() {
        let filter = InteractionFilter::default();
        assert!(filter.is_empty());
        assert!(filter.matches(&make_log(1, 1, -4)));
        assert!(!InteractionFilter::for_item(Some(2)).matches(&make_log(1, 1, 3)));
    }
}
