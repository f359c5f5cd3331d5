//! Setter registrations for every catalog property, grouped by value family.

use super::table::{SetterTable, assign, choose, rebuild};
use crate::color::Rgba;
use crate::kind::WidgetKind;
use crate::widgets::{
    BorderStyle, Button, ButtonType, ContentMode, ControlCore, Grid, HorizontalAlignment, Image,
    Label, List, ListStyle, PageIndicator, ScrollCore, SegmentedControl, Stepper, Switch,
    TextAlignment, TextInput, VerticalAlignment, ViewCore, ViewMode, Widget, sample_image,
};
use kurbo::{Insets, Size};
use peniko::Color;

fn rgba(color: &Option<Color>) -> Option<Rgba> {
    color.map(Rgba::from)
}

pub(super) fn text() -> SetterTable<String> {
    let mut table = SetterTable::new();
    table.insert(
        WidgetKind::Button,
        "setTitle",
        assign(|button: &mut Button, title: &String| button.set_title(title.as_str())),
    );
    table.insert(
        WidgetKind::Label,
        "text",
        assign(|label: &mut Label, text: &String| label.text = Some(text.clone())),
    );
    table.insert(
        WidgetKind::TextInput,
        "text",
        assign(|input: &mut TextInput, text: &String| input.text = Some(text.clone())),
    );
    table
}

pub(super) fn color() -> SetterTable<Option<Color>> {
    let mut table = SetterTable::new();
    table.insert(
        WidgetKind::Container,
        "tintColor",
        assign(|view: &mut ViewCore, c: &Option<Color>| view.tint_color = rgba(c)),
    );
    table.insert(
        WidgetKind::Container,
        "backgroundColor",
        assign(|view: &mut ViewCore, c: &Option<Color>| view.background_color = rgba(c)),
    );
    table.insert(
        WidgetKind::Container,
        "borderColor",
        assign(|view: &mut ViewCore, c: &Option<Color>| view.layer.border_color = rgba(c)),
    );
    table.insert(
        WidgetKind::Button,
        "setTitleColor",
        assign(|button: &mut Button, c: &Option<Color>| button.title_color = rgba(c)),
    );
    table.insert(
        WidgetKind::Label,
        "textColor",
        assign(|label: &mut Label, c: &Option<Color>| label.text_color = rgba(c)),
    );
    table.insert(
        WidgetKind::Switch,
        "onTintColor",
        assign(|switch: &mut Switch, c: &Option<Color>| switch.on_tint_color = rgba(c)),
    );
    table.insert(
        WidgetKind::Switch,
        "thumbTintColor",
        assign(|switch: &mut Switch, c: &Option<Color>| switch.thumb_tint_color = rgba(c)),
    );
    table.insert(
        WidgetKind::TextInput,
        "textColor",
        assign(|input: &mut TextInput, c: &Option<Color>| input.text_color = rgba(c)),
    );
    table.insert(
        WidgetKind::List,
        "separatorColor",
        assign(|list: &mut List, c: &Option<Color>| list.separator_color = rgba(c)),
    );
    table.insert(
        WidgetKind::PageIndicator,
        "pageIndicatorTintColor",
        assign(|pages: &mut PageIndicator, c: &Option<Color>| {
            pages.page_indicator_tint_color = rgba(c);
        }),
    );
    table.insert(
        WidgetKind::PageIndicator,
        "currentPageIndicatorTintColor",
        assign(|pages: &mut PageIndicator, c: &Option<Color>| {
            pages.current_page_indicator_tint_color = rgba(c);
        }),
    );
    table.insert(
        WidgetKind::SegmentedControl,
        "selectedSegmentTintColor",
        assign(|segments: &mut SegmentedControl, c: &Option<Color>| {
            segments.selected_segment_tint_color = rgba(c);
        }),
    );
    table
}

pub(super) fn toggle() -> SetterTable<bool> {
    let mut table = SetterTable::new();
    table.insert(
        WidgetKind::Container,
        "clipsToBounds",
        assign(|view: &mut ViewCore, on: &bool| view.clips_to_bounds = *on),
    );
    table.insert(
        WidgetKind::Container,
        "isHidden",
        assign(|view: &mut ViewCore, on: &bool| view.is_hidden = *on),
    );

    table.insert(
        WidgetKind::Control,
        "isEnabled",
        assign(|control: &mut ControlCore, on: &bool| control.is_enabled = *on),
    );
    table.insert(
        WidgetKind::Control,
        "isSelected",
        assign(|control: &mut ControlCore, on: &bool| control.is_selected = *on),
    );
    table.insert(
        WidgetKind::Control,
        "isHighlighted",
        assign(|control: &mut ControlCore, on: &bool| control.is_highlighted = *on),
    );

    table.insert(
        WidgetKind::ScrollView,
        "isScrollEnabled",
        assign(|scroll: &mut ScrollCore, on: &bool| scroll.is_scroll_enabled = *on),
    );
    table.insert(
        WidgetKind::ScrollView,
        "showsVerticalScrollIndicator",
        assign(|scroll: &mut ScrollCore, on: &bool| scroll.shows_vertical_indicator = *on),
    );
    table.insert(
        WidgetKind::ScrollView,
        "showsHorizontalScrollIndicator",
        assign(|scroll: &mut ScrollCore, on: &bool| scroll.shows_horizontal_indicator = *on),
    );
    table.insert(
        WidgetKind::ScrollView,
        "bounces",
        assign(|scroll: &mut ScrollCore, on: &bool| scroll.bounces = *on),
    );

    table.insert(
        WidgetKind::Button,
        "setImage",
        assign(|button: &mut Button, on: &bool| button.set_image_shown(*on)),
    );
    table.insert(
        WidgetKind::Button,
        "setBackgroundImage",
        assign(|button: &mut Button, on: &bool| button.set_background_image_shown(*on)),
    );

    table.insert(
        WidgetKind::Switch,
        "isOn",
        assign(|switch: &mut Switch, on: &bool| switch.set_on(*on, false)),
    );
    table.insert(
        WidgetKind::Switch,
        "setOn",
        assign(|switch: &mut Switch, on: &bool| switch.set_on(*on, true)),
    );

    table.insert(
        WidgetKind::Stepper,
        "setIncrementImage",
        assign(|stepper: &mut Stepper, on: &bool| stepper.increment_image = sample_image(*on)),
    );
    table.insert(
        WidgetKind::Stepper,
        "setDecrementImage",
        assign(|stepper: &mut Stepper, on: &bool| stepper.decrement_image = sample_image(*on)),
    );
    table.insert(
        WidgetKind::Stepper,
        "setDividerImage",
        assign(|stepper: &mut Stepper, on: &bool| stepper.divider_image = sample_image(*on)),
    );
    table.insert(
        WidgetKind::Stepper,
        "setBackgroundImage",
        assign(|stepper: &mut Stepper, on: &bool| stepper.background_image = sample_image(*on)),
    );
    table.insert(
        WidgetKind::Stepper,
        "wraps",
        assign(|stepper: &mut Stepper, on: &bool| stepper.wraps = *on),
    );
    table.insert(
        WidgetKind::Stepper,
        "autorepeat",
        assign(|stepper: &mut Stepper, on: &bool| stepper.autorepeat = *on),
    );

    table.insert(
        WidgetKind::TextInput,
        "placeholder",
        assign(|input: &mut TextInput, on: &bool| input.set_placeholder_shown(*on)),
    );
    table.insert(
        WidgetKind::List,
        "backgroundView",
        assign(|list: &mut List, on: &bool| list.background_view = *on),
    );
    table.insert(
        WidgetKind::Image,
        "image",
        assign(|image: &mut Image, on: &bool| image.set_image_shown(*on)),
    );
    table.insert(
        WidgetKind::Image,
        "isHighlighted",
        assign(|image: &mut Image, on: &bool| image.is_highlighted = *on),
    );
    table.insert(
        WidgetKind::PageIndicator,
        "hidesForSinglePage",
        assign(|pages: &mut PageIndicator, on: &bool| pages.hides_for_single_page = *on),
    );
    table
}

pub(super) fn slider() -> SetterTable<f64> {
    let mut table = SetterTable::new();
    table.insert(
        WidgetKind::Container,
        "alpha",
        assign(|view: &mut ViewCore, v: &f64| view.set_alpha(*v)),
    );
    table.insert(
        WidgetKind::Container,
        "borderWidth",
        assign(|view: &mut ViewCore, v: &f64| view.layer.border_width = v.max(0.0)),
    );
    table.insert(
        WidgetKind::Container,
        "cornerRadius",
        assign(|view: &mut ViewCore, v: &f64| view.layer.corner_radius = v.max(0.0)),
    );
    table.insert(
        WidgetKind::Label,
        "minimumScaleFactor",
        assign(|label: &mut Label, v: &f64| label.set_minimum_scale_factor(*v)),
    );
    table.insert(
        WidgetKind::List,
        "rowHeight",
        assign(|list: &mut List, v: &f64| list.set_row_height(*v)),
    );

    table.insert(
        WidgetKind::Grid,
        "itemSize",
        assign(|grid: &mut Grid, v: &f64| grid.layout.item_size = Size::new(*v, *v)),
    );
    table.insert(
        WidgetKind::Grid,
        "minimumLineSpacing",
        assign(|grid: &mut Grid, v: &f64| grid.layout.minimum_line_spacing = *v),
    );
    table.insert(
        WidgetKind::Grid,
        "minimumInteritemSpacing",
        assign(|grid: &mut Grid, v: &f64| grid.layout.minimum_interitem_spacing = *v),
    );
    table.insert(
        WidgetKind::Grid,
        "sectionInset",
        assign(|grid: &mut Grid, v: &f64| grid.layout.section_inset = Insets::uniform(*v)),
    );
    table.insert(
        WidgetKind::Grid,
        "headerReferenceSize",
        assign(|grid: &mut Grid, v: &f64| grid.layout.header_reference_size = Size::new(*v, *v)),
    );
    table.insert(
        WidgetKind::Grid,
        "footerReferenceSize",
        assign(|grid: &mut Grid, v: &f64| grid.layout.footer_reference_size = Size::new(*v, *v)),
    );
    table
}

pub(super) fn select() -> SetterTable<i64> {
    let mut table = SetterTable::new();
    table.insert(
        WidgetKind::Container,
        "contentMode",
        choose(|view: &mut ViewCore, mode: ContentMode| view.content_mode = mode),
    );
    table.insert(
        WidgetKind::Control,
        "contentHorizontalAlignment",
        choose(|control: &mut ControlCore, alignment: HorizontalAlignment| {
            control.horizontal_alignment = alignment;
        }),
    );
    table.insert(
        WidgetKind::Control,
        "contentVerticalAlignment",
        choose(|control: &mut ControlCore, alignment: VerticalAlignment| {
            control.vertical_alignment = alignment;
        }),
    );
    table.insert(
        WidgetKind::Button,
        "buttonType",
        rebuild(|button: &Button, button_type: ButtonType| {
            Widget::from(button.rebuilt_as(button_type))
        }),
    );
    table.insert(
        WidgetKind::Label,
        "textAlignment",
        choose(|label: &mut Label, alignment: TextAlignment| label.text_alignment = alignment),
    );
    table.insert(
        WidgetKind::TextInput,
        "borderStyle",
        choose(|input: &mut TextInput, style: BorderStyle| input.border_style = style),
    );
    table.insert(
        WidgetKind::TextInput,
        "clearButtonMode",
        choose(|input: &mut TextInput, mode: ViewMode| input.clear_button_mode = mode),
    );
    table.insert(
        WidgetKind::List,
        "style",
        rebuild(|list: &List, style: ListStyle| Widget::from(list.rebuilt_as(style))),
    );
    table
}

pub(super) fn stepper() -> SetterTable<i64> {
    let mut table = SetterTable::new();
    table.insert(
        WidgetKind::Label,
        "numberOfLines",
        assign(|label: &mut Label, n: &i64| label.set_number_of_lines(*n)),
    );
    table.insert(
        WidgetKind::PageIndicator,
        "currentPage",
        assign(|pages: &mut PageIndicator, n: &i64| pages.set_current_page(*n)),
    );
    table.insert(
        WidgetKind::PageIndicator,
        "numberOfPages",
        assign(|pages: &mut PageIndicator, n: &i64| pages.set_number_of_pages(*n)),
    );
    table.insert(
        WidgetKind::SegmentedControl,
        "numberOfSegments",
        assign(|segments: &mut SegmentedControl, n: &i64| segments.set_number_of_segments(*n)),
    );
    table.insert(
        WidgetKind::SegmentedControl,
        "selectedSegmentIndex",
        assign(|segments: &mut SegmentedControl, n: &i64| {
            segments.set_selected_segment_index(*n);
        }),
    );
    table
}
