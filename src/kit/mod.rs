// OrbitKit component library

pub mod components;
pub mod config;
pub mod theme;

/// Re-export of common components for convenience
pub mod prelude {
    pub use crate::kit::components::input::{InputField, InputFieldProps, InputSize, InputVariant};
    pub use crate::kit::components::table::{
        Alignment, ColumnDescriptor, ColumnWidth, DataTable, DataTableProps, Projection,
        RenderRow, SelectionMode, SelectionState, SortDirection, SortState, TableEvent,
    };
    pub use crate::kit::config::{InputOptions, TableOptions};
    pub use crate::kit::theme::Theme;
}
