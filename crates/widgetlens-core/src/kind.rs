//! Widget kind registry.
//!
//! The modeled taxonomy is a static forest rooted at [`WidgetKind::Container`].
//! Every kind names at most one direct ancestor.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Upper bound on the length of any ancestor chain.
pub const MAX_DEPTH: usize = 5;

/// A category of UI element in the modeled taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum WidgetKind {
    /// The base kind every other kind descends from.
    Container,
    /// Abstract interactive element (buttons, switches, ...).
    Control,
    /// Abstract scrollable element (lists, grids).
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
}

impl WidgetKind {
    /// Every kind, in browsing order.
    pub const ALL: [WidgetKind; 13] = [
        WidgetKind::Container,
        WidgetKind::Control,
        WidgetKind::ScrollView,
        WidgetKind::Button,
        WidgetKind::Label,
        WidgetKind::Switch,
        WidgetKind::Stepper,
        WidgetKind::TextInput,
        WidgetKind::List,
        WidgetKind::Grid,
        WidgetKind::Image,
        WidgetKind::PageIndicator,
        WidgetKind::SegmentedControl,
    ];

    /// The single direct ancestor, or `None` for the root kind.
    pub const fn ancestor(self) -> Option<WidgetKind> {
        match self {
            WidgetKind::Container => None,
            WidgetKind::Control
            | WidgetKind::ScrollView
            | WidgetKind::Label
            | WidgetKind::Image => Some(WidgetKind::Container),
            WidgetKind::Button
            | WidgetKind::Switch
            | WidgetKind::Stepper
            | WidgetKind::TextInput
            | WidgetKind::PageIndicator
            | WidgetKind::SegmentedControl => Some(WidgetKind::Control),
            WidgetKind::List | WidgetKind::Grid => Some(WidgetKind::ScrollView),
        }
    }

    /// Iterate this kind followed by its ancestors, nearest first.
    pub fn chain(self) -> Chain {
        Chain {
            next: Some(self),
            steps: 0,
        }
    }

    /// Check whether `other` is this kind or one of its ancestors.
    pub fn descends_from(self, other: WidgetKind) -> bool {
        self.chain().any(|kind| kind == other)
    }

    /// Display name of the kind.
    pub const fn name(self) -> &'static str {
        match self {
            WidgetKind::Container => "Container",
            WidgetKind::Control => "Control",
            WidgetKind::ScrollView => "ScrollView",
            WidgetKind::Button => "Button",
            WidgetKind::Label => "Label",
            WidgetKind::Switch => "Switch",
            WidgetKind::Stepper => "Stepper",
            WidgetKind::TextInput => "TextInput",
            WidgetKind::List => "List",
            WidgetKind::Grid => "Grid",
            WidgetKind::Image => "Image",
            WidgetKind::PageIndicator => "PageIndicator",
            WidgetKind::SegmentedControl => "SegmentedControl",
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a name does not match any known kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown widget kind: {0}")]
pub struct KindParseError(pub String);

impl FromStr for WidgetKind {
    type Err = KindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        WidgetKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| KindParseError(s.to_string()))
    }
}

/// Iterator over a kind and its ancestors.
///
/// Stops after [`MAX_DEPTH`] steps so a malformed table can never loop.
#[derive(Debug, Clone)]
pub struct Chain {
    next: Option<WidgetKind>,
    steps: usize,
}

impl Iterator for Chain {
    type Item = WidgetKind;

    fn next(&mut self) -> Option<Self::Item> {
        if self.steps >= MAX_DEPTH {
            return None;
        }
        let current = self.next?;
        self.steps += 1;
        self.next = current.ancestor();
        Some(current)
    }
}
