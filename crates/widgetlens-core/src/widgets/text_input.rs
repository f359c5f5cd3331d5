//! Single-line text input widget.

use super::{BorderStyle, ControlCore, InstanceId, ViewCore, ViewMode, WidgetTrait, text_extent};
use crate::color::Rgba;
use crate::kind::WidgetKind;
use kurbo::Size;
use serde::Serialize;
use uuid::Uuid;

/// Editable single-line text.
#[derive(Debug, Clone, Serialize)]
pub struct TextInput {
    pub(crate) id: InstanceId,
    pub view: ViewCore,
    pub control: ControlCore,
    pub text: Option<String>,
    pub text_color: Option<Rgba>,
    pub placeholder: Option<String>,
    pub border_style: BorderStyle,
    pub clear_button_mode: ViewMode,
    pub return_key: String,
    pub font_size: f64,
    /// Whether the input holds keyboard focus.
    pub is_focused: bool,
}

impl TextInput {
    /// Placeholder shown by the placeholder toggle.
    pub const SAMPLE_PLACEHOLDER: &'static str = "placeholder";

    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            view: ViewCore::default(),
            control: ControlCore::default(),
            text: None,
            text_color: Some(Rgba::black()),
            placeholder: None,
            border_style: BorderStyle::default(),
            clear_button_mode: ViewMode::default(),
            return_key: "default".to_string(),
            font_size: 17.0,
            is_focused: false,
        }
    }

    /// Show or remove the sample placeholder.
    pub fn set_placeholder_shown(&mut self, shown: bool) {
        self.placeholder = shown.then(|| Self::SAMPLE_PLACEHOLDER.to_string());
    }

    /// Take keyboard focus. Disabled inputs refuse it.
    pub fn focus(&mut self) -> bool {
        self.is_focused = self.control.is_enabled;
        self.is_focused
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetTrait for TextInput {
    fn id(&self) -> InstanceId {
        self.id
    }

    fn kind(&self) -> WidgetKind {
        WidgetKind::TextInput
    }

    fn view(&self) -> &ViewCore {
        &self.view
    }

    fn view_mut(&mut self) -> &mut ViewCore {
        &mut self.view
    }

    fn intrinsic_size(&self) -> Size {
        let shown = self
            .text
            .as_deref()
            .filter(|text| !text.is_empty())
            .or(self.placeholder.as_deref())
            .unwrap_or("");
        let text = text_extent(shown, self.font_size);
        Size::new(text.width, text.height + 14.0)
    }
}
