// Input field component for OrbitKit

use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};

use crate::component::{Callback, Component, ComponentError, Context, Node};
use crate::kit::theme::Theme;

/// Visual style variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputVariant {
    Filled,
    #[default]
    Outlined,
    Ghost,
}

impl InputVariant {
    fn as_str(self) -> &'static str {
        match self {
            InputVariant::Filled => "filled",
            InputVariant::Outlined => "outlined",
            InputVariant::Ghost => "ghost",
        }
    }
}

/// Size variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl InputSize {
    fn as_str(self) -> &'static str {
        match self {
            InputSize::Small => "sm",
            InputSize::Medium => "md",
            InputSize::Large => "lg",
        }
    }
}

/// Controlled text input with label, helper text and error message.
///
/// The field never stores what the user types: [`InputField::change`] hands
/// the new value to `on_change`, and the host passes it back through props.
///
/// # Examples
///
/// ```
/// use orbitkit::prelude::*;
///
/// let props = InputFieldProps {
///     label: Some("Email".to_string()),
///     placeholder: Some("you@example.com".to_string()),
///     on_change: Some(callback(|value: String| println!("typed {value}"))),
///     ..Default::default()
/// };
/// let field = InputField::create(props, Context::new());
/// assert!(field.change("me@example.com"));
/// ```
#[derive(Debug)]
pub struct InputField {
    /// DOM id of the `<input>`, used to wire label and descriptions
    pub id: String,
    /// Input type (text, password, email, etc.)
    pub input_type: String,
    /// Input value
    pub value: String,
    /// Input label
    pub label: Option<String>,
    /// Input placeholder
    pub placeholder: Option<String>,
    /// Input helper text
    pub helper_text: Option<String>,
    /// Message shown instead of the helper text while invalid
    pub error_message: Option<String>,
    /// Visual style variant
    pub variant: InputVariant,
    /// Size variant
    pub size: InputSize,
    /// Whether the input is disabled
    pub disabled: bool,
    /// Whether the current value is invalid
    pub invalid: bool,
    /// Whether the input is required
    pub required: bool,
    /// On change handler
    pub on_change: Option<Callback<String>>,
    theme: Theme,
}

/// Input field props
#[derive(Debug, Clone, Default)]
pub struct InputFieldProps {
    /// DOM id; generated when absent
    pub id: Option<String>,
    /// Input type (text, password, email, etc.)
    pub input_type: Option<String>,
    /// Input value
    pub value: String,
    /// Input label
    pub label: Option<String>,
    /// Input placeholder
    pub placeholder: Option<String>,
    /// Input helper text
    pub helper_text: Option<String>,
    /// Input error message
    pub error_message: Option<String>,
    /// Visual style variant
    pub variant: Option<InputVariant>,
    /// Size variant
    pub size: Option<InputSize>,
    /// Whether the input is disabled
    pub disabled: Option<bool>,
    /// Whether the current value is invalid
    pub invalid: Option<bool>,
    /// Whether the input is required
    pub required: Option<bool>,
    /// On change handler
    pub on_change: Option<Callback<String>>,
}

fn next_input_id() -> String {
    static NEXT_ID: AtomicUsize = AtomicUsize::new(1);
    format!("orbit-input-{}", NEXT_ID.fetch_add(1, Ordering::SeqCst))
}

impl InputField {
    /// Report a new value to the host. Returns false when the field is disabled.
    pub fn change(&self, value: impl Into<String>) -> bool {
        if self.disabled {
            log::trace!("ignoring change on disabled input {}", self.id);
            return false;
        }
        if let Some(on_change) = &self.on_change {
            on_change.call(value.into());
        }
        true
    }

    fn description(&self) -> Option<(String, &str, bool)> {
        match (&self.error_message, &self.helper_text) {
            (Some(error), _) if self.invalid => Some((format!("{}-error", self.id), error.as_str(), true)),
            (_, Some(helper)) => Some((format!("{}-helper", self.id), helper.as_str(), false)),
            _ => None,
        }
    }

    fn render_field(&self) -> Node {
        let block = "input";
        let mut root = Node::element("div").with_attribute(
            "class",
            [
                self.theme.class(block, ""),
                self.theme.modifier(block, self.variant.as_str()),
                self.theme.modifier(block, self.size.as_str()),
            ]
            .into_iter()
            .chain(self.invalid.then(|| self.theme.modifier(block, "invalid")))
            .chain(self.disabled.then(|| self.theme.modifier(block, "disabled")))
            .collect::<Vec<_>>()
            .join(" "),
        );

        if let Some(label) = &self.label {
            let mut label_node = Node::element("label")
                .with_attribute("for", self.id.clone())
                .with_attribute("class", self.theme.class(block, "label"))
                .with_child(Node::text(label.clone()));
            if self.required {
                label_node.add_child(
                    Node::element("span")
                        .with_attribute("aria-hidden", "true")
                        .with_child(Node::text(" *")),
                );
            }
            root.add_child(label_node);
        }

        let border = if self.invalid {
            &self.theme.error_color
        } else {
            &self.theme.border_color
        };
        let mut input = Node::element("input")
            .with_attribute("id", self.id.clone())
            .with_attribute("type", self.input_type.clone())
            .with_attribute("value", self.value.clone())
            .with_attribute("class", self.theme.class(block, "control"))
            .with_attribute("aria-invalid", self.invalid.to_string())
            .with_attribute(
                "style",
                format!(
                    "border-color: {}; border-radius: {}; {}",
                    border,
                    self.theme.border_radius,
                    self.theme.base_style()
                ),
            );
        if let Some(placeholder) = &self.placeholder {
            input.add_attribute("placeholder", placeholder.clone());
        }
        if self.disabled {
            input.add_attribute("disabled", "disabled");
        }
        if self.required {
            input.add_attribute("aria-required", "true");
        }

        let description = self.description();
        if let Some((id, _, _)) = &description {
            input.add_attribute("aria-describedby", id.clone());
        }
        root.add_child(input);

        if let Some((id, text, is_error)) = description {
            let mut node = Node::element("p")
                .with_attribute("id", id)
                .with_child(Node::text(text));
            if is_error {
                node.add_attribute("class", self.theme.class(block, "error"));
                node.add_attribute("role", "alert");
            } else {
                node.add_attribute("class", self.theme.class(block, "helper"));
            }
            root.add_child(node);
        }

        root
    }
}

impl Component for InputField {
    type Props = InputFieldProps;

    fn create(props: Self::Props, context: Context) -> Self {
        Self {
            id: props.id.unwrap_or_else(next_input_id),
            input_type: props.input_type.unwrap_or_else(|| "text".to_string()),
            value: props.value,
            label: props.label,
            placeholder: props.placeholder,
            helper_text: props.helper_text,
            error_message: props.error_message,
            variant: props.variant.unwrap_or_default(),
            size: props.size.unwrap_or_default(),
            disabled: props.disabled.unwrap_or(false),
            invalid: props.invalid.unwrap_or(false),
            required: props.required.unwrap_or(false),
            on_change: props.on_change,
            theme: context.consume::<Theme>().unwrap_or_default(),
        }
    }

    fn update(&mut self, props: Self::Props) -> Result<(), ComponentError> {
        if let Some(id) = props.id {
            self.id = id;
        }
        self.input_type = props.input_type.unwrap_or_else(|| self.input_type.clone());
        self.value = props.value;
        self.label = props.label;
        self.placeholder = props.placeholder;
        self.helper_text = props.helper_text;
        self.error_message = props.error_message;
        self.variant = props.variant.unwrap_or(self.variant);
        self.size = props.size.unwrap_or(self.size);
        self.disabled = props.disabled.unwrap_or(self.disabled);
        self.invalid = props.invalid.unwrap_or(self.invalid);
        self.required = props.required.unwrap_or(self.required);
        self.on_change = props.on_change;
        Ok(())
    }

    fn render(&self) -> Result<Vec<Node>, ComponentError> {
        Ok(vec![self.render_field()])
    }
}
