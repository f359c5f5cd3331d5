//! Image widget.

use super::{InstanceId, ViewCore, WidgetTrait, sample_image};
use crate::kind::WidgetKind;
use kurbo::Size;
use serde::Serialize;
use uuid::Uuid;

/// Displays a named image asset.
#[derive(Debug, Clone, Serialize)]
pub struct Image {
    pub(crate) id: InstanceId,
    pub view: ViewCore,
    pub image: Option<String>,
    pub is_highlighted: bool,
}

impl Image {
    /// Natural size of the sample asset.
    pub const SAMPLE_SIZE: Size = Size::new(120.0, 120.0);

    pub fn new(image: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            view: ViewCore::default(),
            image,
            is_highlighted: false,
        }
    }

    pub fn set_image_shown(&mut self, shown: bool) {
        self.image = sample_image(shown);
    }
}

impl WidgetTrait for Image {
    fn id(&self) -> InstanceId {
        self.id
    }

    fn kind(&self) -> WidgetKind {
        WidgetKind::Image
    }

    fn view(&self) -> &ViewCore {
        &self.view
    }

    fn view_mut(&mut self) -> &mut ViewCore {
        &mut self.view
    }

    fn intrinsic_size(&self) -> Size {
        if self.image.is_some() {
            Self::SAMPLE_SIZE
        } else {
            Size::ZERO
        }
    }
}
