// Sort state and ordering for the DataTable

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::column::{find_column, ColumnDescriptor};

/// Direction of the active sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Original data order
    #[default]
    None,
    Ascending,
    Descending,
}

impl SortDirection {
    /// Next direction in the header click cycle
    pub fn next(self) -> Self {
        match self {
            SortDirection::None => SortDirection::Ascending,
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::None,
        }
    }

    /// Value for the `aria-sort` attribute
    pub fn aria(self) -> &'static str {
        match self {
            SortDirection::None => "none",
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

/// Which column is sorted, and how.
///
/// A state without an active column always has direction
/// [`SortDirection::None`]; the constructors keep it that way.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    column: Option<String>,
    direction: SortDirection,
}

impl SortState {
    /// Unsorted state
    pub fn none() -> Self {
        Self::default()
    }

    /// Sort by `column` in `direction`; `SortDirection::None` yields the unsorted state
    pub fn by(column: impl Into<String>, direction: SortDirection) -> Self {
        match direction {
            SortDirection::None => Self::none(),
            direction => Self {
                column: Some(column.into()),
                direction,
            },
        }
    }

    /// Key of the active column
    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }

    /// Active direction
    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Whether rows are shown in original order
    pub fn is_unsorted(&self) -> bool {
        self.direction == SortDirection::None
    }

    /// Direction applied to the column with `key`
    pub fn direction_for(&self, key: &str) -> SortDirection {
        match &self.column {
            Some(active) if active == key => self.direction,
            _ => SortDirection::None,
        }
    }
}

/// Tracks the single active sort column and orders rows by it
#[derive(Debug, Clone, Default)]
pub struct SortController {
    state: SortState,
}

impl SortController {
    /// Controller starting unsorted
    pub fn new() -> Self {
        Self::default()
    }

    /// Current sort state
    pub fn state(&self) -> &SortState {
        &self.state
    }

    /// Apply a header click on the column with `key`.
    ///
    /// The active column advances `None -> Ascending -> Descending -> None`;
    /// any other sortable column starts at `Ascending`. Clicks on unknown or
    /// non-sortable columns leave the state unchanged.
    pub fn cycle<T>(&mut self, key: &str, columns: &[ColumnDescriptor<T>]) -> SortState {
        let sortable = find_column(columns, key).is_some_and(|column| column.is_sortable());
        if !sortable {
            log::trace!("ignoring header click on non-sortable column {key:?}");
            return self.state.clone();
        }

        let next = self.state.direction_for(key).next();
        self.state = SortState::by(key, next);
        log::debug!("sort state -> {:?} on {:?}", self.state.direction, self.state.column);
        self.state.clone()
    }

    /// Compare two records under the current state.
    ///
    /// Unsorted state treats every pair as equal so a stable sort keeps the
    /// original order. Descending inverts the comparison result; ties stay
    /// ties in both directions.
    pub fn compare<T>(&self, a: &T, b: &T, columns: &[ColumnDescriptor<T>]) -> Ordering
    where
        T: 'static,
    {
        compare_by(&self.state, a, b, columns)
    }

    /// Original indices of `data` in display order (stable)
    pub fn sorted_indices<T>(&self, data: &[T], columns: &[ColumnDescriptor<T>]) -> Vec<usize>
    where
        T: 'static,
    {
        sorted_indices(&self.state, data, columns)
    }

    /// Reset to unsorted if the active column is gone or no longer sortable
    pub fn retain_columns<T>(&mut self, columns: &[ColumnDescriptor<T>]) {
        let Some(active) = self.state.column() else {
            return;
        };
        let still_sortable = find_column(columns, active).is_some_and(|column| column.is_sortable());
        if !still_sortable {
            log::debug!("active sort column {active:?} left the column set, resetting sort");
            self.state = SortState::none();
        }
    }

    /// Drop any sort
    pub fn reset(&mut self) {
        self.state = SortState::none();
    }
}

/// Compare two records under `state`
pub fn compare_by<T: 'static>(
    state: &SortState,
    a: &T,
    b: &T,
    columns: &[ColumnDescriptor<T>],
) -> Ordering {
    let Some(column) = state.column().and_then(|key| find_column(columns, key)) else {
        return Ordering::Equal;
    };
    match state.direction() {
        SortDirection::None => Ordering::Equal,
        SortDirection::Ascending => column.compare(a, b),
        SortDirection::Descending => column.compare(a, b).reverse(),
    }
}

/// Original indices of `data` ordered by `state`; `slice::sort_by` is stable
pub fn sorted_indices<T: 'static>(
    state: &SortState,
    data: &[T],
    columns: &[ColumnDescriptor<T>],
) -> Vec<usize> {
    let mut order: Vec<usize> = (0..data.len()).collect();
    if !state.is_unsorted() {
        order.sort_by(|&a, &b| compare_by(state, &data[a], &data[b], columns));
    }
    order
}
