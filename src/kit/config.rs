// Serializable component options for OrbitKit
//
// Hosts that keep table or field defaults in configuration files load them
// here and apply them onto props before creating components.

use serde::{Deserialize, Serialize};

use crate::kit::components::input::{InputFieldProps, InputSize, InputVariant};
use crate::kit::components::table::{DataTableProps, SelectionMode, DEFAULT_EMPTY_MESSAGE, DEFAULT_LOADING_TEXT};
use crate::kit::theme::Theme;
use crate::Error;

/// Display options for a [`DataTable`](crate::kit::components::table::DataTable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    /// Selection mode
    pub selection: SelectionMode,
    /// Message shown for empty data
    pub empty_message: String,
    /// Placeholder shown while loading
    pub loading_text: String,
    /// Alternate row backgrounds
    pub striped: bool,
    /// Draw cell borders
    pub bordered: bool,
    /// Table caption
    pub caption: Option<String>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            selection: SelectionMode::None,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
            loading_text: DEFAULT_LOADING_TEXT.to_string(),
            striped: false,
            bordered: false,
            caption: None,
        }
    }
}

impl TableOptions {
    /// Fill every option the props leave unset
    pub fn apply<T>(&self, mut props: DataTableProps<T>) -> DataTableProps<T> {
        props.selection = props.selection.or(Some(self.selection));
        props.empty_message = props.empty_message.or_else(|| Some(self.empty_message.clone()));
        props.loading_text = props.loading_text.or_else(|| Some(self.loading_text.clone()));
        props.striped = props.striped.or(Some(self.striped));
        props.bordered = props.bordered.or(Some(self.bordered));
        props.caption = props.caption.or_else(|| self.caption.clone());
        props
    }
}

/// Display options for an [`InputField`](crate::kit::components::input::InputField)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputOptions {
    pub variant: InputVariant,
    pub size: InputSize,
}

impl InputOptions {
    /// Fill the variant and size when the props leave them unset
    pub fn apply(&self, mut props: InputFieldProps) -> InputFieldProps {
        props.variant = props.variant.or(Some(self.variant));
        props.size = props.size.or(Some(self.size));
        props
    }
}

/// Parse table options from JSON; missing fields take their defaults
pub fn table_options_from_json(json: &str) -> Result<TableOptions, Error> {
    let options = serde_json::from_str(json)?;
    log::debug!("loaded table options {:?}", options);
    Ok(options)
}

/// Parse input options from JSON; missing fields take their defaults
pub fn input_options_from_json(json: &str) -> Result<InputOptions, Error> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a theme from JSON; missing fields take their defaults
pub fn theme_from_json(json: &str) -> Result<Theme, Error> {
    Ok(serde_json::from_str(json)?)
}
