//! Content providers for list and grid instances.
//!
//! Lists and grids only know how many rows or cells to ask for; the renderer
//! draws whatever the provider returns.

use crate::color::Rgba;
use serde::Serialize;
use std::fmt::Debug;

/// Position of a row or cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct IndexPath {
    pub section: usize,
    pub item: usize,
}

impl IndexPath {
    pub fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

/// Supplies rows or cells to a list or grid renderer.
pub trait ContentProvider: Debug {
    fn number_of_sections(&self) -> usize;

    fn number_of_items(&self, section: usize) -> usize;

    /// Header title of a section, if the section has one.
    fn header_title(&self, _section: usize) -> Option<String> {
        None
    }

    /// Text shown in a row or cell.
    fn item_label(&self, _index: IndexPath) -> Option<String> {
        None
    }

    /// Fill color of a row or cell.
    fn item_color(&self, _index: IndexPath) -> Option<Rgba> {
        None
    }

    /// Total number of rows or cells across all sections.
    fn total_items(&self) -> usize {
        (0..self.number_of_sections())
            .map(|section| self.number_of_items(section))
            .sum()
    }
}

/// Placeholder rows for a preview list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderRows {
    pub sections: usize,
    pub rows_per_section: usize,
}

impl Default for PlaceholderRows {
    fn default() -> Self {
        Self {
            sections: 2,
            rows_per_section: 2,
        }
    }
}

impl ContentProvider for PlaceholderRows {
    fn number_of_sections(&self) -> usize {
        self.sections
    }

    fn number_of_items(&self, section: usize) -> usize {
        if section < self.sections {
            self.rows_per_section
        } else {
            0
        }
    }

    fn header_title(&self, section: usize) -> Option<String> {
        (section < self.sections).then(|| format!("Section {section}"))
    }

    fn item_label(&self, index: IndexPath) -> Option<String> {
        (index.section < self.sections && index.item < self.rows_per_section)
            .then(|| format!("Section : {}, Row: {}", index.section, index.item))
    }
}

const CELL_PALETTE: [Rgba; 9] = [
    Rgba::new(61, 172, 247, 255),
    Rgba::new(56, 2, 218, 255),
    Rgba::new(206, 7, 85, 255),
    Rgba::new(239, 89, 49, 255),
    Rgba::new(245, 180, 51, 255),
    Rgba::new(119, 195, 68, 255),
    Rgba::new(170, 121, 66, 255),
    Rgba::new(128, 128, 128, 255),
    Rgba::new(0, 0, 0, 255),
];

/// Placeholder colored cells for a preview grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderCells {
    pub cells: usize,
}

impl Default for PlaceholderCells {
    fn default() -> Self {
        Self { cells: 20 }
    }
}

impl ContentProvider for PlaceholderCells {
    fn number_of_sections(&self) -> usize {
        1
    }

    fn number_of_items(&self, section: usize) -> usize {
        if section == 0 { self.cells } else { 0 }
    }

    fn item_color(&self, index: IndexPath) -> Option<Rgba> {
        (index.section == 0 && index.item < self.cells)
            .then(|| CELL_PALETTE[index.item % CELL_PALETTE.len()])
    }
}
