//! Greedy column assignment within one lane.
//!
//! Events are sorted by start, longest first on ties, then placed into the
//! first column whose last event they do not collide with. Whenever an event
//! starts at or after the latest end seen so far, the accumulated columns are
//! closed off as a [`FlushGroup`] and a fresh set of columns begins.

use chrono::NaiveDateTime;

use super::collision::overlaps;
use crate::models::event::TimeInterval;

/// Columns of one time-coverage run. Each column lists indices into the
/// interval slice handed to [`assign_columns`], in start order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlushGroup {
    pub columns: Vec<Vec<usize>>,
}

impl FlushGroup {
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// `(column, index)` pairs in column order
    pub fn placements(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.columns
            .iter()
            .enumerate()
            .flat_map(|(column, members)| members.iter().map(move |&index| (column, index)))
    }
}

/// Indices of `intervals` ordered by start ascending, then end descending.
///
/// The sort is stable, so identical intervals keep their input order.
pub fn sorted_order(intervals: &[TimeInterval]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..intervals.len()).collect();
    order.sort_by(|&a, &b| {
        let (a, b) = (&intervals[a], &intervals[b]);
        a.start().cmp(&b.start()).then_with(|| b.end().cmp(&a.end()))
    });
    order
}

/// Split `intervals` into flush groups of non-colliding columns.
pub fn assign_columns(intervals: &[TimeInterval]) -> Vec<FlushGroup> {
    let mut groups = Vec::new();
    let mut columns: Vec<Vec<usize>> = Vec::new();
    let mut threshold: Option<NaiveDateTime> = None;

    for index in sorted_order(intervals) {
        let interval = &intervals[index];

        if threshold.is_some_and(|end| interval.start() >= end) {
            groups.push(FlushGroup {
                columns: std::mem::take(&mut columns),
            });
            threshold = None;
        }

        let free_column = columns.iter_mut().find(|column| {
            column
                .last()
                .is_some_and(|&last| !overlaps(&intervals[last], interval))
        });

        match free_column {
            Some(column) => column.push(index),
            None => columns.push(vec![index]),
        }

        threshold = Some(threshold.map_or(interval.end(), |end| end.max(interval.end())));
    }

    if !columns.is_empty() {
        groups.push(FlushGroup { columns });
    }

    groups
}
