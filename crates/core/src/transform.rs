//! Filter, sort and group records for display
//!
//! Both the published ordering ([`process_records`]) and the consumer-side
//! grouping ([`group_records`]) order names through [`name_key`], so the two
//! can never disagree on where a record belongs inside its group.

use std::collections::HashMap;

use crate::record::Record;

/// Literal that precedes the number used as secondary sort key
pub const ITEM_PREFIX: &str = "Item ";

/// Secondary sort key derived from a record name
///
/// Every `Numbered` key orders before `Unnumbered`, which is the maximum
/// sentinel for names whose number can't be extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NameKey {
    Numbered(i32),
    Unnumbered,
}

/// A group of records sharing the same `group_id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub group_id: i64,
    pub records: Vec<Record>,
}

/// Row of a grouped list: a group header or one of its records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayRow {
    Header { group_id: i64 },
    Entry(Record),
}

/// Returns true when the record has a name with at least one non-whitespace character
pub fn has_display_name(record: &Record) -> bool {
    record
        .name
        .as_deref()
        .is_some_and(|name| !name.trim().is_empty())
}

/// Extract the integer following the rightmost `"Item "` in `name`
///
/// When the prefix is absent the whole name is the candidate. The candidate
/// has to parse entirely as an `i32`, so `"Item 12a"` or `"Item  3"` yield `None`.
/// Only ASCII digits are accepted; other Unicode decimal digits yield `None`.
pub fn item_number(name: &str) -> Option<i32> {
    let candidate = match name.rfind(ITEM_PREFIX) {
        Some(idx) => &name[idx + ITEM_PREFIX.len()..],
        None => name,
    };
    candidate.parse().ok()
}

pub fn name_key(record: &Record) -> NameKey {
    record
        .name
        .as_deref()
        .and_then(item_number)
        .map_or(NameKey::Unnumbered, NameKey::Numbered)
}

/// Drop unnamed records and order the rest for publishing
///
/// Sorted by `group_id` ascending, then by [`name_key`]. The sort is stable:
/// records with equal keys keep their payload order.
pub fn process_records(records: Vec<Record>) -> Vec<Record> {
    let mut processed: Vec<Record> = records.into_iter().filter(has_display_name).collect();
    processed.sort_by_key(|record| (record.group_id, name_key(record)));
    processed
}

/// Group records by `group_id` in order of first occurrence
///
/// Each group is re-sorted by [`name_key`] without assuming the input was
/// already ordered.
pub fn group_records(records: &[Record]) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    let mut index: HashMap<i64, usize> = HashMap::new();

    for record in records {
        let slot = *index.entry(record.group_id).or_insert_with(|| {
            groups.push(Group {
                group_id: record.group_id,
                records: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].records.push(record.clone());
    }

    for group in &mut groups {
        group.records.sort_by_key(name_key);
    }

    groups
}

/// Flatten groups into header and entry rows
pub fn display_rows(groups: &[Group]) -> Vec<DisplayRow> {
    let mut rows = Vec::with_capacity(groups.iter().map(|g| g.records.len() + 1).sum());
    for group in groups {
        rows.push(DisplayRow::Header {
            group_id: group.group_id,
        });
        rows.extend(group.records.iter().cloned().map(DisplayRow::Entry));
    }
    rows
}
