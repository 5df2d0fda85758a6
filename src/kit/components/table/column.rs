// Column descriptors for the DataTable

use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::component::Node;

type CompareFn<T> = Arc<dyn Fn(&T, &T) -> Ordering + Send + Sync>;
type CellFn<T> = Arc<dyn Fn(&T, usize) -> Node + Send + Sync>;

/// Horizontal alignment of a column's cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// CSS `text-align` keyword
    pub fn as_css(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

/// Preferred width of a column
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnWidth {
    /// Fixed width in pixels
    Pixels(u32),
    /// Share of the table width
    Percent(f32),
}

impl Display for ColumnWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnWidth::Pixels(px) => write!(f, "{}px", px),
            ColumnWidth::Percent(pct) => write!(f, "{}%", pct),
        }
    }
}

/// Describes one column of a [`DataTable`](super::DataTable).
///
/// The value type a column reads from its rows is erased once the column is
/// built, so columns of different value types can share one `Vec`. Build
/// columns with [`ColumnDescriptor::builder`].
///
/// Keys are expected to be unique within a column set. With duplicate keys,
/// sort lookups resolve to the first matching column; this is not checked.
pub struct ColumnDescriptor<T> {
    /// Unique key within the column set
    pub key: String,
    /// Header text
    pub title: String,
    /// Preferred width
    pub width: Option<ColumnWidth>,
    /// Cell alignment
    pub align: Alignment,
    sortable: bool,
    compare: Option<CompareFn<T>>,
    cell: CellFn<T>,
}

impl<T> Clone for ColumnDescriptor<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            title: self.title.clone(),
            width: self.width,
            align: self.align,
            sortable: self.sortable,
            compare: self.compare.clone(),
            cell: self.cell.clone(),
        }
    }
}

impl<T> fmt::Debug for ColumnDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("width", &self.width)
            .field("align", &self.align)
            .field("sortable", &self.sortable)
            .finish()
    }
}

impl<T: 'static> ColumnDescriptor<T> {
    /// Start building a column that reads its value with `accessor`
    pub fn builder<V, F>(
        key: impl Into<String>,
        title: impl Into<String>,
        accessor: F,
    ) -> ColumnBuilder<T, V>
    where
        F: Fn(&T) -> V + Send + Sync + 'static,
    {
        ColumnBuilder {
            key: key.into(),
            title: title.into(),
            accessor: Arc::new(accessor),
            sortable: false,
            width: None,
            align: Alignment::default(),
            renderer: None,
        }
    }
}

impl<T> ColumnDescriptor<T> {
    /// Whether header clicks on this column change the sort
    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    /// Compare two records by this column's value in ascending order.
    ///
    /// Non-sortable columns treat every pair as equal. Values without a
    /// defined order between them (such as NaN) also compare equal.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        match &self.compare {
            Some(compare) => compare(a, b),
            None => Ordering::Equal,
        }
    }

    /// Render the cell content for `record` at original position `index`
    pub fn render_cell(&self, record: &T, index: usize) -> Node {
        (self.cell)(record, index)
    }
}

/// Typed builder for [`ColumnDescriptor`]
pub struct ColumnBuilder<T, V> {
    key: String,
    title: String,
    accessor: Arc<dyn Fn(&T) -> V + Send + Sync>,
    sortable: bool,
    width: Option<ColumnWidth>,
    align: Alignment,
    renderer: Option<Arc<dyn Fn(&V, &T, usize) -> Node + Send + Sync>>,
}

impl<T: 'static, V: 'static> ColumnBuilder<T, V> {
    /// Set the preferred width
    pub fn width(mut self, width: ColumnWidth) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the cell alignment
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Custom cell renderer receiving the value, the record and its original index
    pub fn render<R>(mut self, renderer: R) -> Self
    where
        R: Fn(&V, &T, usize) -> Node + Send + Sync + 'static,
    {
        self.renderer = Some(Arc::new(renderer));
        self
    }

    fn erase_cell(&self, fallback: Option<CellFn<T>>) -> CellFn<T> {
        match (&self.renderer, fallback) {
            (Some(renderer), _) => {
                let accessor = self.accessor.clone();
                let renderer = renderer.clone();
                Arc::new(move |record: &T, index: usize| renderer(&accessor(record), record, index))
            }
            (None, Some(fallback)) => fallback,
            (None, None) => Arc::new(|_: &T, _: usize| Node::text(String::new())),
        }
    }
}

impl<T: 'static, V: PartialOrd + 'static> ColumnBuilder<T, V> {
    /// Allow sorting by this column
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    fn erase_compare(&self) -> Option<CompareFn<T>> {
        if !self.sortable {
            return None;
        }
        let accessor = self.accessor.clone();
        Some(Arc::new(move |a: &T, b: &T| {
            accessor(a)
                .partial_cmp(&accessor(b))
                .unwrap_or(Ordering::Equal)
        }))
    }
}

impl<T: 'static, V: PartialOrd + Display + 'static> ColumnBuilder<T, V> {
    /// Finish the column; cells without a custom renderer show the value's `Display`
    pub fn build(self) -> ColumnDescriptor<T> {
        let accessor = self.accessor.clone();
        let display: CellFn<T> = Arc::new(move |record: &T, _: usize| Node::text(accessor(record).to_string()));
        ColumnDescriptor {
            compare: self.erase_compare(),
            cell: self.erase_cell(Some(display)),
            key: self.key,
            title: self.title,
            width: self.width,
            align: self.align,
            sortable: self.sortable,
        }
    }
}

impl<T: 'static, V: 'static> ColumnBuilder<T, V> {
    /// Finish a display-only column whose value type has no order or `Display`.
    ///
    /// Such columns are never sortable and need a custom renderer to show anything.
    pub fn build_unordered(self) -> ColumnDescriptor<T> {
        ColumnDescriptor {
            compare: None,
            cell: self.erase_cell(None),
            key: self.key,
            title: self.title,
            width: self.width,
            align: self.align,
            sortable: false,
        }
    }
}

/// Find the first column with `key`
pub(crate) fn find_column<'a, T>(
    columns: &'a [ColumnDescriptor<T>],
    key: &str,
) -> Option<&'a ColumnDescriptor<T>> {
    columns.iter().find(|column| column.key == key)
}
