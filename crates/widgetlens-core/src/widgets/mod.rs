//! Live widget instances.
//!
//! Each widget kind has a concrete struct. Attributes introduced by the
//! abstract levels of the taxonomy live in shared cores ([`ViewCore`],
//! [`ControlCore`], [`ScrollCore`]) embedded in every struct that inherits them.
//! [`Widget`] wraps the concrete structs; [`WidgetCast`] is the checked
//! downcast the dispatch engine uses before mutating anything.

mod base;
mod button;
mod content;
mod domain;
mod grid;
mod image;
mod label;
mod list;
mod page_indicator;
mod segmented;
mod stepper;
mod switch;
mod text_input;

pub use base::{Container, Control, ControlCore, Layer, ScrollCore, ScrollView, ViewCore};
pub use button::Button;
pub use content::{ContentProvider, IndexPath, PlaceholderCells, PlaceholderRows};
pub use domain::{
    BorderStyle, ButtonType, ContentMode, Enumerated, HorizontalAlignment, ListStyle,
    TextAlignment, VerticalAlignment, ViewMode,
};
pub use grid::{FlowLayout, Grid};
pub use image::Image;
pub use label::Label;
pub use list::List;
pub use page_indicator::PageIndicator;
pub use segmented::SegmentedControl;
pub use stepper::Stepper;
pub use switch::Switch;
pub use text_input::TextInput;

use crate::kind::WidgetKind;
use kurbo::Size;
use serde::Serialize;
use uuid::Uuid;

/// Identity of a live instance. Changes only when an instance is rebuilt.
pub type InstanceId = Uuid;

/// Asset name of the sample image used by image toggles.
pub const SAMPLE_IMAGE: &str = "sample";

/// Common trait for all widget structs.
pub trait WidgetTrait {
    /// Get the instance identity.
    fn id(&self) -> InstanceId;

    /// Get the concrete kind.
    fn kind(&self) -> WidgetKind;

    /// Get the attributes every widget inherits from the base kind.
    fn view(&self) -> &ViewCore;

    /// Get mutable base attributes.
    fn view_mut(&mut self) -> &mut ViewCore;

    /// Natural content size, used when constraints leave a dimension open.
    fn intrinsic_size(&self) -> Size {
        Size::ZERO
    }
}

/// Enum wrapper for all widget types.
#[derive(Debug, Clone, Serialize)]
pub enum Widget {
    Container(Container),
    Control(Control),
    ScrollView(ScrollView),
    Button(Button),
    Label(Label),
    Switch(Switch),
    Stepper(Stepper),
    TextInput(TextInput),
    List(List),
    Grid(Grid),
    Image(Image),
    PageIndicator(PageIndicator),
    SegmentedControl(SegmentedControl),
}

impl Widget {
    fn as_trait(&self) -> &dyn WidgetTrait {
        match self {
            Widget::Container(w) => w,
            Widget::Control(w) => w,
            Widget::ScrollView(w) => w,
            Widget::Button(w) => w,
            Widget::Label(w) => w,
            Widget::Switch(w) => w,
            Widget::Stepper(w) => w,
            Widget::TextInput(w) => w,
            Widget::List(w) => w,
            Widget::Grid(w) => w,
            Widget::Image(w) => w,
            Widget::PageIndicator(w) => w,
            Widget::SegmentedControl(w) => w,
        }
    }

    fn as_trait_mut(&mut self) -> &mut dyn WidgetTrait {
        match self {
            Widget::Container(w) => w,
            Widget::Control(w) => w,
            Widget::ScrollView(w) => w,
            Widget::Button(w) => w,
            Widget::Label(w) => w,
            Widget::Switch(w) => w,
            Widget::Stepper(w) => w,
            Widget::TextInput(w) => w,
            Widget::List(w) => w,
            Widget::Grid(w) => w,
            Widget::Image(w) => w,
            Widget::PageIndicator(w) => w,
            Widget::SegmentedControl(w) => w,
        }
    }

    pub fn id(&self) -> InstanceId {
        self.as_trait().id()
    }

    pub fn kind(&self) -> WidgetKind {
        self.as_trait().kind()
    }

    pub fn view(&self) -> &ViewCore {
        self.as_trait().view()
    }

    pub fn view_mut(&mut self) -> &mut ViewCore {
        self.as_trait_mut().view_mut()
    }

    pub fn intrinsic_size(&self) -> Size {
        self.as_trait().intrinsic_size()
    }

    /// Get the control attributes, if this widget is a control.
    pub fn control(&self) -> Option<&ControlCore> {
        match self {
            Widget::Control(w) => Some(&w.control),
            Widget::Button(w) => Some(&w.control),
            Widget::Switch(w) => Some(&w.control),
            Widget::Stepper(w) => Some(&w.control),
            Widget::TextInput(w) => Some(&w.control),
            Widget::PageIndicator(w) => Some(&w.control),
            Widget::SegmentedControl(w) => Some(&w.control),
            _ => None,
        }
    }

    /// Get mutable control attributes, if this widget is a control.
    pub fn control_mut(&mut self) -> Option<&mut ControlCore> {
        match self {
            Widget::Control(w) => Some(&mut w.control),
            Widget::Button(w) => Some(&mut w.control),
            Widget::Switch(w) => Some(&mut w.control),
            Widget::Stepper(w) => Some(&mut w.control),
            Widget::TextInput(w) => Some(&mut w.control),
            Widget::PageIndicator(w) => Some(&mut w.control),
            Widget::SegmentedControl(w) => Some(&mut w.control),
            _ => None,
        }
    }

    /// Get the scroll attributes, if this widget scrolls.
    pub fn scroll(&self) -> Option<&ScrollCore> {
        match self {
            Widget::ScrollView(w) => Some(&w.scroll),
            Widget::List(w) => Some(&w.scroll),
            Widget::Grid(w) => Some(&w.scroll),
            _ => None,
        }
    }

    /// Get mutable scroll attributes, if this widget scrolls.
    pub fn scroll_mut(&mut self) -> Option<&mut ScrollCore> {
        match self {
            Widget::ScrollView(w) => Some(&mut w.scroll),
            Widget::List(w) => Some(&mut w.scroll),
            Widget::Grid(w) => Some(&mut w.scroll),
            _ => None,
        }
    }

    /// Get the content provider wired into a list or grid.
    pub fn content(&self) -> Option<&dyn ContentProvider> {
        match self {
            Widget::List(w) => w.content.as_deref(),
            Widget::Grid(w) => w.content.as_deref(),
            _ => None,
        }
    }

    /// Snapshot of every attribute, for display and comparison.
    pub fn snapshot(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// Checked downcast from a live instance to the type a setter needs.
pub trait WidgetCast {
    fn cast(widget: &Widget) -> Option<&Self>;

    fn cast_mut(widget: &mut Widget) -> Option<&mut Self>;
}

impl WidgetCast for ViewCore {
    fn cast(widget: &Widget) -> Option<&Self> {
        Some(widget.view())
    }

    fn cast_mut(widget: &mut Widget) -> Option<&mut Self> {
        Some(widget.view_mut())
    }
}

impl WidgetCast for ControlCore {
    fn cast(widget: &Widget) -> Option<&Self> {
        widget.control()
    }

    fn cast_mut(widget: &mut Widget) -> Option<&mut Self> {
        widget.control_mut()
    }
}

impl WidgetCast for ScrollCore {
    fn cast(widget: &Widget) -> Option<&Self> {
        widget.scroll()
    }

    fn cast_mut(widget: &mut Widget) -> Option<&mut Self> {
        widget.scroll_mut()
    }
}

macro_rules! concrete_cast {
    ($($variant:ident),* $(,)?) => {
        $(
            impl WidgetCast for $variant {
                fn cast(widget: &Widget) -> Option<&Self> {
                    match widget {
                        Widget::$variant(w) => Some(w),
                        _ => None,
                    }
                }

                fn cast_mut(widget: &mut Widget) -> Option<&mut Self> {
                    match widget {
                        Widget::$variant(w) => Some(w),
                        _ => None,
                    }
                }
            }

            impl From<$variant> for Widget {
                fn from(widget: $variant) -> Self {
                    Widget::$variant(widget)
                }
            }
        )*
    };
}

concrete_cast!(
    Container,
    Control,
    ScrollView,
    Button,
    Label,
    Switch,
    Stepper,
    TextInput,
    List,
    Grid,
    Image,
    PageIndicator,
    SegmentedControl,
);

/// Image slot value for an on/off image toggle.
pub(crate) fn sample_image(shown: bool) -> Option<String> {
    shown.then(|| SAMPLE_IMAGE.to_string())
}

/// Rough text extent used for intrinsic sizes.
pub(crate) fn text_extent(text: &str, font_size: f64) -> Size {
    Size::new(
        text.chars().count() as f64 * font_size * 0.55,
        (font_size * 1.2).ceil(),
    )
}
