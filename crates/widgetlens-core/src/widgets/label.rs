//! Label widget.

use super::{InstanceId, TextAlignment, ViewCore, WidgetTrait, text_extent};
use crate::color::Rgba;
use crate::kind::WidgetKind;
use kurbo::Size;
use serde::Serialize;
use uuid::Uuid;

/// Read-only text.
#[derive(Debug, Clone, Serialize)]
pub struct Label {
    pub(crate) id: InstanceId,
    pub view: ViewCore,
    pub text: Option<String>,
    pub text_color: Option<Rgba>,
    pub font_size: f64,
    /// Maximum number of lines; 0 means unlimited.
    pub number_of_lines: usize,
    pub text_alignment: TextAlignment,
    pub minimum_scale_factor: f64,
}

impl Label {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            view: ViewCore::default(),
            text: None,
            text_color: Some(Rgba::black()),
            font_size: 17.0,
            number_of_lines: 1,
            text_alignment: TextAlignment::default(),
            minimum_scale_factor: 0.0,
        }
    }

    /// Set the line limit; negative values mean unlimited.
    pub fn set_number_of_lines(&mut self, lines: i64) {
        self.number_of_lines = usize::try_from(lines).unwrap_or(0);
    }

    pub fn set_minimum_scale_factor(&mut self, factor: f64) {
        self.minimum_scale_factor = factor.clamp(0.0, 1.0);
    }
}

impl Default for Label {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetTrait for Label {
    fn id(&self) -> InstanceId {
        self.id
    }

    fn kind(&self) -> WidgetKind {
        WidgetKind::Label
    }

    fn view(&self) -> &ViewCore {
        &self.view
    }

    fn view_mut(&mut self) -> &mut ViewCore {
        &mut self.view
    }

    fn intrinsic_size(&self) -> Size {
        text_extent(self.text.as_deref().unwrap_or(""), self.font_size)
    }
}
