//! List widget.

use super::{ContentProvider, InstanceId, ListStyle, ScrollCore, ViewCore, WidgetTrait};
use crate::color::Rgba;
use crate::kind::WidgetKind;
use serde::Serialize;
use std::rc::Rc;
use uuid::Uuid;

/// A vertically scrolling list of rows.
///
/// The style is a construction parameter; changing it means building a new
/// list (see [`List::rebuilt_as`]).
#[derive(Debug, Clone, Serialize)]
pub struct List {
    pub(crate) id: InstanceId,
    pub view: ViewCore,
    pub scroll: ScrollCore,
    style: ListStyle,
    pub separator_color: Option<Rgba>,
    pub row_height: f64,
    /// Whether a background view is installed behind the rows.
    pub background_view: bool,
    #[serde(skip)]
    pub(crate) content: Option<Rc<dyn ContentProvider>>,
}

impl List {
    pub fn new(style: ListStyle) -> Self {
        Self {
            id: Uuid::new_v4(),
            view: ViewCore::default(),
            scroll: ScrollCore::default(),
            style,
            separator_color: Some(Rgba::light_gray()),
            row_height: 44.0,
            background_view: false,
            content: None,
        }
    }

    pub fn style(&self) -> ListStyle {
        self.style
    }

    /// Wire the provider that supplies rows.
    pub fn set_content(&mut self, content: Rc<dyn ContentProvider>) {
        self.content = Some(content);
    }

    pub fn content(&self) -> Option<&Rc<dyn ContentProvider>> {
        self.content.as_ref()
    }

    pub fn set_row_height(&mut self, height: f64) {
        self.row_height = height.max(0.0);
    }

    /// Build a new list of `style`, carrying over every other attribute and
    /// re-attaching the same content provider.
    pub fn rebuilt_as(&self, style: ListStyle) -> Self {
        Self {
            id: Uuid::new_v4(),
            style,
            ..self.clone()
        }
    }
}

impl WidgetTrait for List {
    fn id(&self) -> InstanceId {
        self.id
    }

    fn kind(&self) -> WidgetKind {
        WidgetKind::List
    }

    fn view(&self) -> &ViewCore {
        &self.view
    }

    fn view_mut(&mut self) -> &mut ViewCore {
        &mut self.view
    }
}
