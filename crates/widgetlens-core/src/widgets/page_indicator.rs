//! Page indicator widget.

use super::{ControlCore, InstanceId, ViewCore, WidgetTrait};
use crate::color::Rgba;
use crate::kind::WidgetKind;
use kurbo::Size;
use serde::Serialize;
use uuid::Uuid;

/// A row of dots, one per page, with the current page highlighted.
#[derive(Debug, Clone, Serialize)]
pub struct PageIndicator {
    pub(crate) id: InstanceId,
    pub view: ViewCore,
    pub control: ControlCore,
    number_of_pages: usize,
    current_page: usize,
    pub page_indicator_tint_color: Option<Rgba>,
    pub current_page_indicator_tint_color: Option<Rgba>,
    pub hides_for_single_page: bool,
}

impl PageIndicator {
    const DOT_SPACING: f64 = 16.0;
    const HEIGHT: f64 = 26.0;

    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            view: ViewCore::default(),
            control: ControlCore::default(),
            number_of_pages: 0,
            current_page: 0,
            page_indicator_tint_color: None,
            current_page_indicator_tint_color: None,
            hides_for_single_page: false,
        }
    }

    pub fn number_of_pages(&self) -> usize {
        self.number_of_pages
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Set the page count; the current page is pulled back inside it.
    pub fn set_number_of_pages(&mut self, pages: i64) {
        self.number_of_pages = usize::try_from(pages).unwrap_or(0);
        self.current_page = self.clamp_page(self.current_page);
    }

    /// Set the current page, clamped to the existing pages.
    pub fn set_current_page(&mut self, page: i64) {
        self.current_page = self.clamp_page(usize::try_from(page).unwrap_or(0));
    }

    fn clamp_page(&self, page: usize) -> usize {
        page.min(self.number_of_pages.saturating_sub(1))
    }
}

impl Default for PageIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetTrait for PageIndicator {
    fn id(&self) -> InstanceId {
        self.id
    }

    fn kind(&self) -> WidgetKind {
        WidgetKind::PageIndicator
    }

    fn view(&self) -> &ViewCore {
        &self.view
    }

    fn view_mut(&mut self) -> &mut ViewCore {
        &mut self.view
    }

    fn intrinsic_size(&self) -> Size {
        Size::new(
            (self.number_of_pages as f64 + 1.0) * Self::DOT_SPACING,
            Self::HEIGHT,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_page_clamped() {
        let mut pages = PageIndicator::new();
        pages.set_number_of_pages(3);
        pages.set_current_page(7);
        assert_eq!(pages.current_page(), 2);
        pages.set_current_page(-1);
        assert_eq!(pages.current_page(), 0);
    }

    #[test]
    fn test_shrinking_pages_moves_current_page() {
        let mut pages = PageIndicator::new();
        pages.set_number_of_pages(5);
        pages.set_current_page(4);
        pages.set_number_of_pages(2);
        assert_eq!(pages.current_page(), 1);
        pages.set_number_of_pages(0);
        assert_eq!(pages.current_page(), 0);
    }
}
