// Projection of table data into display rows

use super::column::ColumnDescriptor;
use super::selection::SelectionState;
use super::sort::{sorted_indices, SortState};

/// One displayed row, built fresh for every projection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRow<'a, T> {
    /// Position of the record in the caller's data
    pub original_index: usize,
    /// The record itself
    pub record: &'a T,
    /// Whether the record is selected
    pub is_selected: bool,
}

/// What the table body shows.
///
/// Loading wins over empty, and both replace the rows entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection<'a, T> {
    /// Show the loading placeholder
    Loading,
    /// Show the empty-state message
    Empty(&'a str),
    /// Show these rows, in display order
    Rows(Vec<RenderRow<'a, T>>),
}

impl<'a, T> Projection<'a, T> {
    /// Displayed rows; empty for the loading and empty states
    pub fn rows(&self) -> &[RenderRow<'a, T>] {
        match self {
            Projection::Rows(rows) => rows,
            Projection::Loading | Projection::Empty(_) => &[],
        }
    }

    /// Original indices in display order
    pub fn order(&self) -> Vec<usize> {
        self.rows().iter().map(|row| row.original_index).collect()
    }
}

/// Inputs of one projection pass.
///
/// The projection borrows only `data` and `empty_message`; columns, sort and
/// selection are read while projecting and may be dropped afterwards.
#[derive(Debug)]
pub struct ViewProjector<'a, 'b, T> {
    pub data: &'a [T],
    pub columns: &'b [ColumnDescriptor<T>],
    pub sort: &'b SortState,
    pub selection: &'b SelectionState,
    pub loading: bool,
    pub empty_message: &'a str,
}

impl<'a, 'b, T: 'static> ViewProjector<'a, 'b, T> {
    /// Compute what to display. Pure: the same inputs give the same projection.
    pub fn project(&self) -> Projection<'a, T> {
        if self.loading {
            return Projection::Loading;
        }
        if self.data.is_empty() {
            return Projection::Empty(self.empty_message);
        }

        let data = self.data;
        let rows = sorted_indices(self.sort, data, self.columns)
            .into_iter()
            .map(|index| RenderRow {
                original_index: index,
                record: &data[index],
                // Selection follows the record's original position, not its display slot
                is_selected: self.selection.is_selected(index),
            })
            .collect();
        Projection::Rows(rows)
    }
}

/// Functional form of [`ViewProjector::project`]
pub fn project<'a, T: 'static>(
    data: &'a [T],
    columns: &[ColumnDescriptor<T>],
    sort: &SortState,
    selection: &SelectionState,
    loading: bool,
    empty_message: &'a str,
) -> Projection<'a, T> {
    ViewProjector {
        data,
        columns,
        sort,
        selection,
        loading,
        empty_message,
    }
    .project()
}
