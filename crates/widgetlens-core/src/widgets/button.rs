//! Button widget.

use super::{ButtonType, ControlCore, InstanceId, ViewCore, WidgetTrait, sample_image, text_extent};
use crate::color::Rgba;
use crate::kind::WidgetKind;
use kurbo::Size;
use serde::Serialize;
use uuid::Uuid;

/// A tappable button with a title and optional images.
///
/// The button type is a construction parameter; changing it means building a
/// new button (see [`Button::rebuilt_as`]).
#[derive(Debug, Clone, Serialize)]
pub struct Button {
    pub(crate) id: InstanceId,
    pub view: ViewCore,
    pub control: ControlCore,
    button_type: ButtonType,
    pub title: Option<String>,
    pub title_color: Option<Rgba>,
    pub image: Option<String>,
    pub background_image: Option<String>,
    pub font_size: f64,
}

impl Button {
    /// Padding around the title, per side.
    const PADDING: f64 = 8.0;

    pub fn new(button_type: ButtonType) -> Self {
        Self {
            id: Uuid::new_v4(),
            view: ViewCore::default(),
            control: ControlCore::default(),
            button_type,
            title: None,
            title_color: None,
            image: None,
            background_image: None,
            font_size: 17.0,
        }
    }

    pub fn button_type(&self) -> ButtonType {
        self.button_type
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Show or remove the sample image.
    pub fn set_image_shown(&mut self, shown: bool) {
        self.image = sample_image(shown);
    }

    /// Show or remove the sample background image.
    pub fn set_background_image_shown(&mut self, shown: bool) {
        self.background_image = sample_image(shown);
    }

    /// Build a new button of `button_type`, carrying over every other attribute.
    pub fn rebuilt_as(&self, button_type: ButtonType) -> Self {
        Self {
            id: Uuid::new_v4(),
            button_type,
            ..self.clone()
        }
    }
}

impl WidgetTrait for Button {
    fn id(&self) -> InstanceId {
        self.id
    }

    fn kind(&self) -> WidgetKind {
        WidgetKind::Button
    }

    fn view(&self) -> &ViewCore {
        &self.view
    }

    fn view_mut(&mut self) -> &mut ViewCore {
        &mut self.view
    }

    fn intrinsic_size(&self) -> Size {
        let text = text_extent(self.title.as_deref().unwrap_or(""), self.font_size);
        let image = if self.image.is_some() { self.font_size * 1.2 } else { 0.0 };
        Size::new(
            text.width + image + Self::PADDING * 2.0,
            text.height + Self::PADDING,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::SAMPLE_IMAGE;

    #[test]
    fn test_rebuild_keeps_title_and_changes_identity() {
        let mut button = Button::new(ButtonType::Custom);
        button.set_title("Keep me");
        button.title_color = Some(Rgba::black());
        button.view.set_alpha(0.5);

        let rebuilt = button.rebuilt_as(ButtonType::ContactAdd);
        assert_ne!(rebuilt.id(), button.id());
        assert_eq!(rebuilt.button_type(), ButtonType::ContactAdd);
        assert_eq!(rebuilt.title.as_deref(), Some("Keep me"));
        assert_eq!(rebuilt.title_color, Some(Rgba::black()));
        assert!((rebuilt.view.alpha - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_image_toggles() {
        let mut button = Button::new(ButtonType::System);
        button.set_image_shown(true);
        assert_eq!(button.image.as_deref(), Some(SAMPLE_IMAGE));
        button.set_image_shown(false);
        assert!(button.image.is_none());
    }

    #[test]
    fn test_intrinsic_size_grows_with_title() {
        let mut button = Button::new(ButtonType::Custom);
        button.set_title("A");
        let short = button.intrinsic_size();
        button.set_title("A much longer title");
        assert!(button.intrinsic_size().width > short.width);
    }
}
