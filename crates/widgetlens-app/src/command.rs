//! Shell command parsing.

use kurbo::Size;
use peniko::Color;
use thiserror::Error;
use widgetlens_core::catalog::{ControlKind, Hint, PropertyDescriptor};
use widgetlens_core::color::Rgba;
use widgetlens_core::dispatch::EditValue;
use widgetlens_core::kind::{KindParseError, WidgetKind};

/// Shell command errors.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Unknown command: {0} (try `help`)")]
    UnknownCommand(String),
    #[error("Missing {0}")]
    MissingArgument(&'static str),
    #[error(transparent)]
    UnknownKind(#[from] KindParseError),
    #[error("No kind selected (try `select <Kind>`)")]
    NoKindSelected,
    #[error("{kind} has no property {property}")]
    UnknownProperty { kind: WidgetKind, property: String },
    #[error("Invalid {control} value: {value:?}")]
    InvalidValue { control: ControlKind, value: String },
    #[error("Invalid stage dimension: {0:?} (expected a positive number)")]
    InvalidDimension(String),
}

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Kinds,
    Select(WidgetKind),
    Props,
    Set {
        property: String,
        value: String,
        origin: Option<WidgetKind>,
    },
    Show,
    Frame,
    /// Resize the stage the preview is laid out in.
    Stage(Size),
    Help,
    Quit,
    /// Blank input.
    Nothing,
}

impl Command {
    /// Parse one input line.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Command::Nothing);
        }
        let (name, rest) = split_word(line);
        let mut words = rest.split_whitespace();
        let command = match name.to_ascii_lowercase().as_str() {
            "kinds" => Command::Kinds,
            "select" => {
                let kind = words.next().ok_or(CommandError::MissingArgument("kind"))?;
                Command::Select(kind.parse()?)
            }
            "props" => Command::Props,
            "set" => parse_set(rest)?,
            "show" => Command::Show,
            "frame" => Command::Frame,
            "stage" => {
                let mut dimension = |name: &'static str| -> Result<f64, CommandError> {
                    let text = words.next().ok_or(CommandError::MissingArgument(name))?;
                    parse_dimension(text).ok_or_else(|| CommandError::InvalidDimension(text.to_string()))
                };
                let width = dimension("width")?;
                let height = dimension("height")?;
                Command::Stage(Size::new(width, height))
            }
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        };
        Ok(command)
    }
}

/// Split off the first word; the remainder keeps its interior whitespace.
fn split_word(text: &str) -> (&str, &str) {
    match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (text, ""),
    }
}

/// `<property> <value> [as <Kind>]`, with `rest` already trimmed.
fn parse_set(rest: &str) -> Result<Command, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingArgument("property"));
    }
    let (property, mut value) = split_word(rest);

    let mut origin = None;
    if let Some((head, kind)) = value.rsplit_once(char::is_whitespace) {
        if let Some((text, marker)) = head.trim_end().rsplit_once(char::is_whitespace) {
            if marker.eq_ignore_ascii_case("as") {
                if let Ok(kind) = kind.parse::<WidgetKind>() {
                    origin = Some(kind);
                    value = text.trim_end();
                }
            }
        }
    }
    if value.is_empty() {
        return Err(CommandError::MissingArgument("value"));
    }

    Ok(Command::Set {
        property: property.to_string(),
        value: value.to_string(),
        origin,
    })
}

/// Parse `text` into the value family `descriptor` is edited with.
pub fn parse_value(descriptor: &PropertyDescriptor, text: &str) -> Result<EditValue, CommandError> {
    let invalid = || CommandError::InvalidValue {
        control: descriptor.control,
        value: text.to_string(),
    };
    let value = match descriptor.control {
        ControlKind::Text => EditValue::Text(text.to_string()),
        ControlKind::Color => EditValue::Color(parse_color(text).ok_or_else(invalid)?),
        ControlKind::Toggle => EditValue::Toggle(parse_toggle(text).ok_or_else(invalid)?),
        ControlKind::Slider => EditValue::Slider(text.parse().map_err(|_| invalid())?),
        ControlKind::Select => EditValue::Select(parse_choice(descriptor.hint, text).ok_or_else(invalid)?),
        ControlKind::Stepper => EditValue::Stepper(text.parse().map_err(|_| invalid())?),
    };
    Ok(value)
}

/// `none` clears; otherwise a hex color.
fn parse_color(text: &str) -> Option<Option<Color>> {
    if text.eq_ignore_ascii_case("none") {
        return Some(None);
    }
    Rgba::from_hex(text).map(|rgba| Some(Color::from(rgba)))
}

fn parse_toggle(text: &str) -> Option<bool> {
    match text.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}

/// A raw number, or the label of one of the declared choices.
fn parse_choice(hint: Hint, text: &str) -> Option<i64> {
    if let Ok(raw) = text.parse() {
        return Some(raw);
    }
    match hint {
        Hint::Choices { choices, .. } => choices
            .iter()
            .find(|choice| choice.label.eq_ignore_ascii_case(text))
            .map(|choice| choice.raw),
        _ => None,
    }
}

/// Read a positive stage dimension.
pub fn parse_dimension(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite() && *v > 0.0)
}

/// Format a stage size for display.
pub fn format_size(size: Size) -> String {
    format!("{} x {}", size.width, size.height)
}
