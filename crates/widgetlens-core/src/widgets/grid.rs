//! Grid widget with a flow layout.

use super::{ContentProvider, InstanceId, ScrollCore, ViewCore, WidgetTrait};
use crate::kind::WidgetKind;
use kurbo::{Insets, Size};
use serde::Serialize;
use std::rc::Rc;
use uuid::Uuid;

/// Flow layout parameters of a grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowLayout {
    pub item_size: Size,
    pub minimum_line_spacing: f64,
    pub minimum_interitem_spacing: f64,
    pub section_inset: Insets,
    pub header_reference_size: Size,
    pub footer_reference_size: Size,
}

impl Default for FlowLayout {
    fn default() -> Self {
        Self {
            item_size: Size::new(50.0, 50.0),
            minimum_line_spacing: 10.0,
            minimum_interitem_spacing: 10.0,
            section_inset: Insets::ZERO,
            header_reference_size: Size::ZERO,
            footer_reference_size: Size::ZERO,
        }
    }
}

/// A scrolling grid of cells.
#[derive(Debug, Clone, Serialize)]
pub struct Grid {
    pub(crate) id: InstanceId,
    pub view: ViewCore,
    pub scroll: ScrollCore,
    pub layout: FlowLayout,
    /// Reuse identifier cells are registered under.
    pub cell_identifier: String,
    #[serde(skip)]
    pub(crate) content: Option<Rc<dyn ContentProvider>>,
}

impl Grid {
    pub fn new(layout: FlowLayout) -> Self {
        Self {
            id: Uuid::new_v4(),
            view: ViewCore::default(),
            scroll: ScrollCore::default(),
            layout,
            cell_identifier: String::new(),
            content: None,
        }
    }

    /// Register the reuse identifier for cells.
    pub fn register_cell(&mut self, identifier: impl Into<String>) {
        self.cell_identifier = identifier.into();
    }

    /// Wire the provider that supplies cells.
    pub fn set_content(&mut self, content: Rc<dyn ContentProvider>) {
        self.content = Some(content);
    }

    pub fn content(&self) -> Option<&Rc<dyn ContentProvider>> {
        self.content.as_ref()
    }
}

impl WidgetTrait for Grid {
    fn id(&self) -> InstanceId {
        self.id
    }

    fn kind(&self) -> WidgetKind {
        WidgetKind::Grid
    }

    fn view(&self) -> &ViewCore {
        &self.view
    }

    fn view_mut(&mut self) -> &mut ViewCore {
        &mut self.view
    }
}
