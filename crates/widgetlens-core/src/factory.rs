//! Instance factory.
//!
//! Builds preview instances pre-populated with representative content so a
//! preview is meaningful the moment it appears.

use crate::color::Rgba;
use crate::kind::WidgetKind;
use crate::widgets::{
    Button, ButtonType, Container, ContentProvider, Control, FlowLayout, Grid, Image, Label, List,
    ListStyle, PageIndicator, PlaceholderCells, PlaceholderRows, SAMPLE_IMAGE, ScrollView,
    SegmentedControl, Stepper, Switch, TextInput, Widget,
};
use std::rc::Rc;

/// Font size used by text-bearing previews.
pub const PREVIEW_FONT_SIZE: f64 = 24.0;

/// Reuse identifier grid cells are registered under.
pub const CELL_IDENTIFIER: &str = "Cell";

/// Create a default-configured preview instance of `kind`.
pub fn make_instance(kind: WidgetKind) -> Widget {
    match kind {
        WidgetKind::Container => {
            let mut container = Container::new();
            container.view.background_color = Some(Rgba::gray());
            container.into()
        }
        WidgetKind::Control => Control::new().into(),
        WidgetKind::ScrollView => ScrollView::new().into(),
        WidgetKind::Button => make_button(ButtonType::Custom).into(),
        WidgetKind::Label => {
            let mut label = Label::new();
            label.text = Some("Test Label".to_string());
            label.font_size = PREVIEW_FONT_SIZE;
            label.into()
        }
        WidgetKind::Switch => {
            let mut switch = Switch::new();
            switch.set_on(false, false);
            switch.into()
        }
        WidgetKind::Stepper => Stepper::new().into(),
        WidgetKind::TextInput => {
            let mut input = TextInput::new();
            input.return_key = "done".to_string();
            input.focus();
            input.into()
        }
        WidgetKind::List => make_list(ListStyle::Plain).into(),
        WidgetKind::Grid => {
            let mut grid = Grid::new(FlowLayout::default());
            grid.register_cell(CELL_IDENTIFIER);
            grid.view.background_color = None;
            grid.set_content(placeholder_cells());
            grid.into()
        }
        WidgetKind::Image => Image::new(Some(SAMPLE_IMAGE.to_string())).into(),
        WidgetKind::PageIndicator => {
            let mut pages = PageIndicator::new();
            pages.set_number_of_pages(3);
            pages.set_current_page(0);
            pages.view.background_color = Some(Rgba::gray());
            pages.into()
        }
        WidgetKind::SegmentedControl => {
            let mut segments = SegmentedControl::new(["First", "Second"]);
            segments.set_selected_segment_index(0);
            segments.into()
        }
    }
}

/// Create a preview instance from a kind name.
///
/// A name that does not resolve to a known kind yields a base container, so
/// the preview is never empty.
pub fn make_instance_named(name: &str) -> Widget {
    match name.parse::<WidgetKind>() {
        Ok(kind) => make_instance(kind),
        Err(err) => {
            log::warn!("{err}; previewing a {} instead", WidgetKind::Container);
            make_instance(WidgetKind::Container)
        }
    }
}

/// Create a preview button of the given type.
pub fn make_button(button_type: ButtonType) -> Button {
    let mut button = Button::new(button_type);
    button.set_title("Test Button");
    button.title_color = Some(Rgba::black());
    button.font_size = PREVIEW_FONT_SIZE;
    button
}

/// Create a preview list of the given style with placeholder rows wired in.
pub fn make_list(style: ListStyle) -> List {
    let mut list = List::new(style);
    list.set_content(placeholder_rows());
    list
}

fn placeholder_rows() -> Rc<dyn ContentProvider> {
    Rc::new(PlaceholderRows::default())
}

fn placeholder_cells() -> Rc<dyn ContentProvider> {
    Rc::new(PlaceholderCells::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_instantiates() {
        for kind in WidgetKind::ALL {
            assert_eq!(make_instance(kind).kind(), kind);
        }
    }

    #[test]
    fn test_fresh_instances_are_distinct() {
        let a = make_instance(WidgetKind::Label);
        let b = make_instance(WidgetKind::Label);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_label_defaults() {
        let widget = make_instance(WidgetKind::Label);
        let Widget::Label(label) = widget else {
            panic!("expected a label");
        };
        assert_eq!(label.text.as_deref(), Some("Test Label"));
        assert!((label.font_size - PREVIEW_FONT_SIZE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_button_defaults() {
        let Widget::Button(button) = make_instance(WidgetKind::Button) else {
            panic!("expected a button");
        };
        assert_eq!(button.button_type(), ButtonType::Custom);
        assert_eq!(button.title.as_deref(), Some("Test Button"));
        assert_eq!(button.title_color, Some(Rgba::black()));
    }

    #[test]
    fn test_collections_get_content() {
        let list = make_instance(WidgetKind::List);
        assert_eq!(list.content().map(|c| c.total_items()), Some(4));

        let grid = make_instance(WidgetKind::Grid);
        assert_eq!(grid.content().map(|c| c.total_items()), Some(20));
        let Widget::Grid(grid) = grid else {
            panic!("expected a grid");
        };
        assert_eq!(grid.cell_identifier, CELL_IDENTIFIER);
    }

    #[test]
    fn test_page_indicator_defaults() {
        let Widget::PageIndicator(pages) = make_instance(WidgetKind::PageIndicator) else {
            panic!("expected a page indicator");
        };
        assert_eq!(pages.number_of_pages(), 3);
        assert_eq!(pages.current_page(), 0);
    }

    #[test]
    fn test_segmented_defaults() {
        let Widget::SegmentedControl(segments) = make_instance(WidgetKind::SegmentedControl)
        else {
            panic!("expected a segmented control");
        };
        assert_eq!(segments.segments(), ["First", "Second"]);
        assert_eq!(segments.selected_segment_index(), Some(0));
    }

    #[test]
    fn test_text_input_is_focused() {
        let Widget::TextInput(input) = make_instance(WidgetKind::TextInput) else {
            panic!("expected a text input");
        };
        assert!(input.is_focused);
        assert_eq!(input.return_key, "done");
    }

    #[test]
    fn test_unknown_name_falls_back_to_container() {
        assert_eq!(make_instance_named("Window").kind(), WidgetKind::Container);
        assert_eq!(make_instance_named("switch").kind(), WidgetKind::Switch);
    }
}
