//! Attributes of the abstract taxonomy levels and their bare instances.

use super::{ContentMode, HorizontalAlignment, InstanceId, VerticalAlignment, WidgetTrait};
use crate::color::Rgba;
use crate::kind::WidgetKind;
use serde::Serialize;
use uuid::Uuid;

/// Backing layer attributes.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Layer {
    pub border_width: f64,
    pub border_color: Option<Rgba>,
    pub corner_radius: f64,
}

/// Attributes every widget inherits from the base kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewCore {
    pub content_mode: ContentMode,
    pub tint_color: Option<Rgba>,
    pub background_color: Option<Rgba>,
    pub clips_to_bounds: bool,
    /// Opacity, always within 0.0..=1.0.
    pub alpha: f64,
    pub is_hidden: bool,
    pub layer: Layer,
}

impl ViewCore {
    /// Set the opacity, clamped into 0.0..=1.0.
    pub fn set_alpha(&mut self, alpha: f64) {
        self.alpha = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };
    }
}

impl Default for ViewCore {
    fn default() -> Self {
        Self {
            content_mode: ContentMode::default(),
            tint_color: Some(Rgba::system_blue()),
            background_color: None,
            clips_to_bounds: false,
            alpha: 1.0,
            is_hidden: false,
            layer: Layer::default(),
        }
    }
}

/// Attributes every control inherits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlCore {
    pub is_enabled: bool,
    pub is_selected: bool,
    pub is_highlighted: bool,
    pub horizontal_alignment: HorizontalAlignment,
    pub vertical_alignment: VerticalAlignment,
}

impl Default for ControlCore {
    fn default() -> Self {
        Self {
            is_enabled: true,
            is_selected: false,
            is_highlighted: false,
            horizontal_alignment: HorizontalAlignment::default(),
            vertical_alignment: VerticalAlignment::default(),
        }
    }
}

/// Attributes every scrollable widget inherits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScrollCore {
    pub is_scroll_enabled: bool,
    pub shows_vertical_indicator: bool,
    pub shows_horizontal_indicator: bool,
    pub bounces: bool,
}

impl Default for ScrollCore {
    fn default() -> Self {
        Self {
            is_scroll_enabled: true,
            shows_vertical_indicator: true,
            shows_horizontal_indicator: true,
            bounces: true,
        }
    }
}

/// A bare instance of the base kind.
#[derive(Debug, Clone, Serialize)]
pub struct Container {
    pub(crate) id: InstanceId,
    pub view: ViewCore,
}

impl Container {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            view: ViewCore::default(),
        }
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetTrait for Container {
    fn id(&self) -> InstanceId {
        self.id
    }

    fn kind(&self) -> WidgetKind {
        WidgetKind::Container
    }

    fn view(&self) -> &ViewCore {
        &self.view
    }

    fn view_mut(&mut self) -> &mut ViewCore {
        &mut self.view
    }
}

/// A bare control with no content of its own.
#[derive(Debug, Clone, Serialize)]
pub struct Control {
    pub(crate) id: InstanceId,
    pub view: ViewCore,
    pub control: ControlCore,
}

impl Control {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            view: ViewCore::default(),
            control: ControlCore::default(),
        }
    }
}

impl Default for Control {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetTrait for Control {
    fn id(&self) -> InstanceId {
        self.id
    }

    fn kind(&self) -> WidgetKind {
        WidgetKind::Control
    }

    fn view(&self) -> &ViewCore {
        &self.view
    }

    fn view_mut(&mut self) -> &mut ViewCore {
        &mut self.view
    }
}

/// A bare scroll view with no content provider.
#[derive(Debug, Clone, Serialize)]
pub struct ScrollView {
    pub(crate) id: InstanceId,
    pub view: ViewCore,
    pub scroll: ScrollCore,
}

impl ScrollView {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            view: ViewCore::default(),
            scroll: ScrollCore::default(),
        }
    }
}

impl Default for ScrollView {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetTrait for ScrollView {
    fn id(&self) -> InstanceId {
        self.id
    }

    fn kind(&self) -> WidgetKind {
        WidgetKind::ScrollView
    }

    fn view(&self) -> &ViewCore {
        &self.view
    }

    fn view_mut(&mut self) -> &mut ViewCore {
        &mut self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_is_clamped() {
        let mut view = ViewCore::default();
        view.set_alpha(1.5);
        assert!((view.alpha - 1.0).abs() < f64::EPSILON);
        view.set_alpha(-0.2);
        assert!(view.alpha.abs() < f64::EPSILON);
        view.set_alpha(0.25);
        assert!((view.alpha - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_new_instances_have_distinct_ids() {
        let a = Container::new();
        let b = Container::new();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_control_defaults() {
        let control = Control::new();
        assert!(control.control.is_enabled);
        assert!(!control.control.is_selected);
        assert_eq!(control.control.horizontal_alignment, HorizontalAlignment::Center);
    }
}
