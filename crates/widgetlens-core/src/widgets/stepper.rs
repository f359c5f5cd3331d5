//! Stepper widget.

use super::{ControlCore, InstanceId, ViewCore, WidgetTrait};
use crate::kind::WidgetKind;
use kurbo::Size;
use serde::Serialize;
use uuid::Uuid;

/// A pair of increment/decrement buttons around a numeric value.
#[derive(Debug, Clone, Serialize)]
pub struct Stepper {
    pub(crate) id: InstanceId,
    pub view: ViewCore,
    pub control: ControlCore,
    pub value: f64,
    pub minimum: f64,
    pub maximum: f64,
    pub step: f64,
    pub wraps: bool,
    pub autorepeat: bool,
    pub increment_image: Option<String>,
    pub decrement_image: Option<String>,
    pub divider_image: Option<String>,
    pub background_image: Option<String>,
}

impl Stepper {
    pub const SIZE: Size = Size::new(94.0, 32.0);

    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            view: ViewCore::default(),
            control: ControlCore::default(),
            value: 0.0,
            minimum: 0.0,
            maximum: 100.0,
            step: 1.0,
            wraps: false,
            autorepeat: true,
            increment_image: None,
            decrement_image: None,
            divider_image: None,
            background_image: None,
        }
    }

}

impl Default for Stepper {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetTrait for Stepper {
    fn id(&self) -> InstanceId {
        self.id
    }

    fn kind(&self) -> WidgetKind {
        WidgetKind::Stepper
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
