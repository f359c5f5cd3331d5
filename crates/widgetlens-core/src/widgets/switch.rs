//! Switch widget.

use super::{ControlCore, InstanceId, ViewCore, WidgetTrait};
use crate::color::Rgba;
use crate::kind::WidgetKind;
use kurbo::Size;
use serde::Serialize;
use uuid::Uuid;

/// An on/off switch.
#[derive(Debug, Clone, Serialize)]
pub struct Switch {
    pub(crate) id: InstanceId,
    pub view: ViewCore,
    pub control: ControlCore,
    is_on: bool,
    /// Whether the last state change was animated.
    animated: bool,
    pub on_tint_color: Option<Rgba>,
    pub thumb_tint_color: Option<Rgba>,
}

impl Switch {
    pub const SIZE: Size = Size::new(51.0, 31.0);

    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            view: ViewCore::default(),
            control: ControlCore::default(),
            is_on: false,
            animated: false,
            on_tint_color: None,
            thumb_tint_color: None,
        }
    }

    pub fn is_on(&self) -> bool {
        self.is_on
    }

    pub fn was_animated(&self) -> bool {
        self.animated
    }

    /// Set the state, optionally animating the transition.
    pub fn set_on(&mut self, on: bool, animated: bool) {
        self.animated = animated && self.is_on != on;
        self.is_on = on;
    }
}

impl Default for Switch {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetTrait for Switch {
    fn id(&self) -> InstanceId {
        self.id
    }

    fn kind(&self) -> WidgetKind {
        WidgetKind::Switch
    }

    fn view(&self) -> &ViewCore {
        &self.view
    }

    fn view_mut(&mut self) -> &mut ViewCore {
        &mut self.view
    }

    fn intrinsic_size(&self) -> Size {
        Self::SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_on() {
        let mut switch = Switch::new();
        switch.set_on(true, true);
        assert!(switch.is_on());
        assert!(switch.was_animated());
        // No transition, nothing to animate
        switch.set_on(true, true);
        assert!(!switch.was_animated());
        switch.set_on(false, false);
        assert!(!switch.is_on());
        assert!(!switch.was_animated());
    }
}
