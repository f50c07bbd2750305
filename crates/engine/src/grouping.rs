//! Clustering records by (direction, calendar day) and ordering the
//! clusters for display.

use std::cmp::Ordering;

use api_types::transaction::{Direction, TransactionRecord};
use chrono::NaiveDate;

/// Composite grouping key for one cluster of records.
///
/// Either component may be absent (unrecognized direction code,
/// unparsable timestamp). Absence is a valid, distinct key value: two
/// records with no direction on the same day share a group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GroupKey {
    pub direction: Option<Direction>,
    pub day: Option<NaiveDate>,
}

impl GroupKey {
    #[must_use]
    pub fn of(record: &TransactionRecord) -> Self {
        Self {
            direction: record.direction(),
            day: record.calendar_day(),
        }
    }
}

/// Groups records by [`GroupKey`] and sorts the groups for display.
///
/// Grouping uses a linear-scan ordered map (a `Vec` of groups) rather
/// than a hash map: groups appear in first-seen order, members stay in
/// fetch order, and the sort tie-break below is therefore deterministic
/// across runs.
///
/// Sort order:
/// - calendar day descending, when both groups have one and they differ;
/// - otherwise direction wire code ascending (`CRDT` before `DBIT`),
///   when both groups have one;
/// - otherwise insertion order (the comparator reports equality and the
///   sort is stable).
#[must_use]
pub fn group_records(
    records: Vec<TransactionRecord>,
) -> Vec<(GroupKey, Vec<TransactionRecord>)> {
    let mut groups: Vec<(GroupKey, Vec<TransactionRecord>)> = Vec::new();

    for record in records {
        let key = GroupKey::of(&record);
        match groups.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, members)) => members.push(record),
            None => groups.push((key, vec![record])),
        }
    }

    groups.sort_by(|(a, _), (b, _)| compare_keys(a, b));
    groups
}

fn compare_keys(a: &GroupKey, b: &GroupKey) -> Ordering {
    if let (Some(day_a), Some(day_b)) = (a.day, b.day)
        && day_a != day_b
    {
        return day_b.cmp(&day_a);
    }

    match (a.direction, b.direction) {
        (Some(dir_a), Some(dir_b)) => dir_a.as_code().cmp(dir_b.as_code()),
        _ => Ordering::Equal,
    }
}
