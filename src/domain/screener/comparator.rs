use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::record::Record;
use super::value_objects::SortDirection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey<F> {
    pub field: F,
    #[serde(default)]
    pub direction: SortDirection,
}

impl<F> SortKey<F> {
    pub fn ascending(field: F) -> Self {
        Self { field, direction: SortDirection::Ascending }
    }

    pub fn descending(field: F) -> Self {
        Self { field, direction: SortDirection::Descending }
    }
}

/// Active sort of a view, or none (store order preserved)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortState<F> {
    active: Option<SortKey<F>>,
}

impl<F> Default for SortState<F> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<F: Copy + PartialEq> SortState<F> {
    pub fn unsorted() -> Self {
        Self::default()
    }

    pub fn by(key: SortKey<F>) -> Self {
        Self { active: Some(key) }
    }

    pub fn active(&self) -> Option<SortKey<F>> {
        self.active
    }

    /// Header click: the active field flips direction, any other field
    /// starts ascending.
    pub fn toggle(&mut self, field: F) {
        let direction = match self.active {
            Some(key) if key.field == field => key.direction.reversed(),
            _ => SortDirection::Ascending,
        };
        self.active = Some(SortKey { field, direction });
    }

    pub fn toggled(mut self, field: F) -> Self {
        self.toggle(field);
        self
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    /// Arrow to show next to `field`'s header, if it is the active column
    pub fn indicator(&self, field: F) -> Option<&'static str> {
        self.active
            .filter(|key| key.field == field)
            .map(|key| key.direction.arrow())
    }
}

/// Order two records by `key`.
///
/// When either record has no value for the field the pair compares equal,
/// so rows with missing optional values keep their position relative to the
/// row they are compared with instead of being pinned to either end.
pub fn compare_records<R: Record>(a: &R, b: &R, key: SortKey<R::Field>) -> Ordering {
    let (Some(left), Some(right)) = (a.field(key.field), b.field(key.field)) else {
        return Ordering::Equal;
    };
    let ordering = left.compare(&right);
    match key.direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Stable in-place sort that only moves an element past neighbours that
/// compare strictly greater. Tolerates comparators that are not a total
/// order (the missing-value rule above) without panicking.
pub fn stable_sort_by<T>(rows: &mut [T], mut compare: impl FnMut(&T, &T) -> Ordering) {
    for i in 1..rows.len() {
        let mut j = i;
        while j > 0 && compare(&rows[j - 1], &rows[j]) == Ordering::Greater {
            rows.swap(j - 1, j);
            j -= 1;
        }
    }
}
