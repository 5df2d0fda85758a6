//! Data table component for OrbitKit
//!
//! [`DataTable`] shows caller-owned rows through a set of
//! [`ColumnDescriptor`]s, with single-column sorting and row selection.
//!
//! The table's behavior is split into three pieces that can also be used on
//! their own by hosts that bring their own rendering:
//!
//! - [`SortController`] turns header clicks into a [`SortState`] and orders
//!   rows with a stable sort.
//! - [`SelectionController`] turns row clicks into a [`SelectionState`] and
//!   reports the selected records through a callback.
//! - [`ViewProjector`] combines data, columns and both states into the rows
//!   to display, or the loading / empty placeholder.
//!
//! Selection is positional: it tracks each record's index in the data the
//! table was given. Stale indices are purged whenever new data arrives, but a
//! host that reorders its data without going through the table will see the
//! selection point at whatever records now sit at those positions.

mod column;
mod selection;
mod sort;
mod view;

pub use column::{Alignment, ColumnBuilder, ColumnDescriptor, ColumnWidth};
pub use selection::{SelectionController, SelectionMode, SelectionState};
pub use sort::{compare_by, sorted_indices, SortController, SortDirection, SortState};
pub use view::{project, Projection, RenderRow, ViewProjector};

use std::sync::Arc;

use crate::component::{Callback, Component, ComponentError, Context, Node};
use crate::kit::theme::Theme;

/// Default text shown when there are no rows
pub const DEFAULT_EMPTY_MESSAGE: &str = "No data available";

/// Default text shown while loading
pub const DEFAULT_LOADING_TEXT: &str = "Loading...";

/// User interactions the table reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// Click on the header of the column with this key
    HeaderClick(String),
    /// Click on the row at this original index
    RowClick(usize),
    /// Select every row (multiple mode only)
    SelectAll,
    /// Header checkbox: select all unless everything is already selected
    ToggleAll,
    /// Deselect everything
    ClearSelection,
}

/// Data table props
pub struct DataTableProps<T> {
    /// Rows to show; a new `Arc` counts as new data
    pub data: Arc<[T]>,
    /// Column definitions
    pub columns: Vec<ColumnDescriptor<T>>,
    /// Whether the data is still loading
    pub loading: Option<bool>,
    /// Selection mode; `SelectionMode::from(bool)` maps a plain `selectable` flag
    pub selection: Option<SelectionMode>,
    /// Message shown when `data` is empty
    pub empty_message: Option<String>,
    /// Placeholder shown while loading
    pub loading_text: Option<String>,
    /// Alternate row backgrounds
    pub striped: Option<bool>,
    /// Draw cell borders
    pub bordered: Option<bool>,
    /// Table caption
    pub caption: Option<String>,
    /// Called with the selected records whenever the selection changes
    pub on_row_select: Option<Callback<Vec<T>>>,
}

impl<T> DataTableProps<T> {
    /// Props with data and columns and everything else left to defaults
    pub fn new(data: impl Into<Arc<[T]>>, columns: Vec<ColumnDescriptor<T>>) -> Self {
        Self {
            data: data.into(),
            columns,
            loading: None,
            selection: None,
            empty_message: None,
            loading_text: None,
            striped: None,
            bordered: None,
            caption: None,
            on_row_select: None,
        }
    }
}

impl<T: 'static> Clone for DataTableProps<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            columns: self.columns.clone(),
            loading: self.loading,
            selection: self.selection,
            empty_message: self.empty_message.clone(),
            loading_text: self.loading_text.clone(),
            striped: self.striped,
            bordered: self.bordered,
            caption: self.caption.clone(),
            on_row_select: self.on_row_select.clone(),
        }
    }
}

impl<T> std::fmt::Debug for DataTableProps<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataTableProps")
            .field("rows", &self.data.len())
            .field("columns", &self.columns)
            .field("loading", &self.loading)
            .field("selection", &self.selection)
            .field("empty_message", &self.empty_message)
            .finish_non_exhaustive()
    }
}

/// Generic data table with sorting and row selection
pub struct DataTable<T> {
    data: Arc<[T]>,
    columns: Vec<ColumnDescriptor<T>>,
    loading: bool,
    empty_message: String,
    loading_text: String,
    striped: bool,
    bordered: bool,
    caption: Option<String>,
    sort: SortController,
    selection: SelectionController<T>,
    theme: Theme,
}

impl<T> std::fmt::Debug for DataTable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataTable")
            .field("rows", &self.data.len())
            .field("columns", &self.columns.len())
            .field("loading", &self.loading)
            .field("sort", self.sort.state())
            .field("selection", &self.selection)
            .finish_non_exhaustive()
    }
}

impl<T: Clone + Send + Sync + 'static> DataTable<T> {
    /// Rows currently held by the table
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Current column set
    pub fn columns(&self) -> &[ColumnDescriptor<T>] {
        &self.columns
    }

    /// Current sort
    pub fn sort_state(&self) -> &SortState {
        self.sort.state()
    }

    /// Current selection
    pub fn selection_state(&self) -> &SelectionState {
        self.selection.state()
    }

    /// Records currently selected
    pub fn selected_records(&self) -> Vec<T> {
        self.selection.selected_records(&self.data)
    }

    /// What the body shows right now
    pub fn projection(&self) -> Projection<'_, T> {
        ViewProjector {
            data: &self.data,
            columns: &self.columns,
            sort: self.sort.state(),
            selection: self.selection.state(),
            loading: self.loading,
            empty_message: &self.empty_message,
        }
        .project()
    }

    /// Apply a user interaction
    pub fn handle_event(&mut self, event: TableEvent) {
        log::trace!("table event {:?}", event);
        match event {
            TableEvent::HeaderClick(key) => {
                self.click_header(&key);
            }
            TableEvent::RowClick(index) => {
                self.click_row(index);
            }
            TableEvent::SelectAll => {
                self.selection.select_all(&self.data);
            }
            TableEvent::ToggleAll => self.toggle_all(),
            TableEvent::ClearSelection => {
                self.selection.clear(&self.data);
            }
        }
    }

    /// Header click; sort changes are not reported to the host
    pub fn click_header(&mut self, key: &str) -> SortState {
        self.sort.cycle(key, &self.columns)
    }

    /// Row click on the row at original `index`
    pub fn click_row(&mut self, index: usize) -> &SelectionState {
        self.selection.toggle(index, &self.data)
    }

    fn all_selected(&self) -> bool {
        !self.data.is_empty() && self.selection.state().len() == self.data.len()
    }

    fn toggle_all(&mut self) {
        if self.all_selected() {
            self.selection.clear(&self.data);
        } else {
            self.selection.select_all(&self.data);
        }
    }

    fn column_count(&self) -> usize {
        self.columns.len() + usize::from(self.selection.state().mode().is_selectable())
    }

    fn render_header(&self) -> Node {
        let mut row = Node::element("tr");

        match self.selection.state().mode() {
            SelectionMode::Multiple => {
                let mut checkbox = Node::element("input")
                    .with_attribute("type", "checkbox")
                    .with_attribute("aria-label", "Select all rows");
                if self.all_selected() {
                    checkbox.add_attribute("checked", "checked");
                }
                row.add_child(
                    Node::element("th")
                        .with_attribute("class", self.theme.class("table", "select"))
                        .with_child(checkbox),
                );
            }
            SelectionMode::Single => {
                row.add_child(
                    Node::element("th").with_attribute("class", self.theme.class("table", "select")),
                );
            }
            SelectionMode::None => {}
        }

        for column in &self.columns {
            let mut cell = Node::element("th")
                .with_attribute("scope", "col")
                .with_attribute("data-key", column.key.clone())
                .with_attribute("style", cell_style(column))
                .with_child(Node::text(column.title.clone()));
            if column.is_sortable() {
                let direction = self.sort.state().direction_for(&column.key);
                cell.add_attribute("data-sortable", "true");
                cell.add_attribute("aria-sort", direction.aria());
                cell.add_attribute("class", self.theme.class("table", "header--sortable"));
            }
            row.add_child(cell);
        }

        Node::element("thead").with_child(row)
    }

    fn render_placeholder(&self, kind: &str, text: &str) -> Node {
        Node::element("tr")
            .with_attribute("class", self.theme.class("table", kind))
            .with_child(
                Node::element("td")
                    .with_attribute("colspan", self.column_count().to_string())
                    .with_child(Node::text(text)),
            )
    }

    fn render_row(&self, position: usize, row: &RenderRow<'_, T>) -> Node {
        let mut classes = vec![self.theme.class("table", "row")];
        let mut style = None;
        if row.is_selected {
            classes.push(self.theme.modifier("table__row", "selected"));
            style = Some(format!("background: {}", self.theme.selected_background));
        } else if self.striped && position % 2 == 1 {
            style = Some(format!("background: {}", self.theme.stripe_background));
        }

        let mut tr = Node::element("tr")
            .with_attribute("class", classes.join(" "))
            .with_attribute("data-index", row.original_index.to_string());
        if let Some(style) = style {
            tr.add_attribute("style", style);
        }

        let mode = self.selection.state().mode();
        if mode.is_selectable() {
            tr.add_attribute("aria-selected", row.is_selected.to_string());
            let kind = if mode == SelectionMode::Single {
                "radio"
            } else {
                "checkbox"
            };
            let mut input = Node::element("input")
                .with_attribute("type", kind)
                .with_attribute("aria-label", format!("Select row {}", row.original_index + 1));
            if row.is_selected {
                input.add_attribute("checked", "checked");
            }
            tr.add_child(
                Node::element("td")
                    .with_attribute("class", self.theme.class("table", "select"))
                    .with_child(input),
            );
        }

        for column in &self.columns {
            tr.add_child(
                Node::element("td")
                    .with_attribute("data-key", column.key.clone())
                    .with_attribute("style", cell_style(column))
                    .with_child(column.render_cell(row.record, row.original_index)),
            );
        }
        tr
    }

    fn render_table(&self) -> Node {
        let mut classes = vec![self.theme.class("table", "")];
        if self.striped {
            classes.push(self.theme.modifier("table", "striped"));
        }
        if self.bordered {
            classes.push(self.theme.modifier("table", "bordered"));
        }

        let mut table = Node::element("table")
            .with_attribute("class", classes.join(" "))
            .with_attribute("aria-busy", self.loading.to_string())
            .with_attribute("style", self.theme.base_style());
        if self.selection.state().mode() == SelectionMode::Multiple {
            table.add_attribute("aria-multiselectable", "true");
        }
        if let Some(caption) = &self.caption {
            table.add_child(Node::element("caption").with_child(Node::text(caption.clone())));
        }
        table.add_child(self.render_header());

        let body = match self.projection() {
            Projection::Loading => {
                Node::element("tbody").with_child(self.render_placeholder("loading", &self.loading_text))
            }
            Projection::Empty(message) => {
                Node::element("tbody").with_child(self.render_placeholder("empty", message))
            }
            Projection::Rows(rows) => Node::element("tbody").with_children(
                rows.iter()
                    .enumerate()
                    .map(|(position, row)| self.render_row(position, row)),
            ),
        };
        table.add_child(body);
        table
    }
}

fn cell_style<T>(column: &ColumnDescriptor<T>) -> String {
    match column.width {
        Some(width) => format!("text-align: {}; width: {}", column.align.as_css(), width),
        None => format!("text-align: {}", column.align.as_css()),
    }
}

impl<T: Clone + Send + Sync + 'static> Component for DataTable<T> {
    type Props = DataTableProps<T>;

    fn create(props: Self::Props, context: Context) -> Self {
        let mode = props.selection.unwrap_or_default();
        let mut selection = SelectionController::new(mode);
        selection.set_callback(props.on_row_select);

        Self {
            data: props.data,
            columns: props.columns,
            loading: props.loading.unwrap_or(false),
            empty_message: props
                .empty_message
                .unwrap_or_else(|| DEFAULT_EMPTY_MESSAGE.to_string()),
            loading_text: props
                .loading_text
                .unwrap_or_else(|| DEFAULT_LOADING_TEXT.to_string()),
            striped: props.striped.unwrap_or(false),
            bordered: props.bordered.unwrap_or(false),
            caption: props.caption,
            sort: SortController::new(),
            selection,
            theme: context.consume::<Theme>().unwrap_or_default(),
        }
    }

    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError> {
        let data_changed =
            !Arc::ptr_eq(&self.data, &props.data) || self.data.len() != props.data.len();

        self.data = props.data;
        self.columns = props.columns;
        self.loading = props.loading.unwrap_or(self.loading);
        if let Some(message) = props.empty_message {
            self.empty_message = message;
        }
        if let Some(text) = props.loading_text {
            self.loading_text = text;
        }
        self.striped = props.striped.unwrap_or(self.striped);
        self.bordered = props.bordered.unwrap_or(self.bordered);
        self.caption = props.caption;

        // State first, then one reconcile; notifications go to the new callback
        self.selection.set_callback(props.on_row_select);
        self.sort.retain_columns(&self.columns);
        if data_changed {
            log::debug!("table data replaced ({} rows)", self.data.len());
        }
        let mode = props.selection.unwrap_or(self.selection.state().mode());
        if data_changed || mode != self.selection.state().mode() {
            self.selection.sync(mode, &self.data);
        }
        Ok(())
    }

    fn unmount(&mut self) -> Result<(), ComponentError> {
        self.sort.reset();
        self.selection.reset();
        Ok(())
    }

    fn render(&self) -> Result<Vec<Node>, ComponentError> {
        Ok(vec![self.render_table()])
    }
}
