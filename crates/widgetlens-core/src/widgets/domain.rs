//! Enumerated attribute domains.
//!
//! Raw values follow the platform's numbering so a select control can send the
//! same integers a native picker would.

use crate::catalog::Choice;
use serde::Serialize;

/// An attribute domain a select control edits through raw integers.
pub trait Enumerated: Sized + Copy + Default {
    /// Every value of the domain, with its raw number and label.
    const CHOICES: &'static [Choice];
    /// Raw value substituted for out-of-domain input.
    const FALLBACK: i64;

    /// Convert a raw value, `None` when it is outside the domain.
    fn from_raw(raw: i64) -> Option<Self>;

    fn raw(self) -> i64;

    /// Convert a raw value, substituting the fallback when out of domain.
    fn from_raw_or_fallback(raw: i64) -> Self {
        Self::from_raw(raw)
            .or_else(|| Self::from_raw(Self::FALLBACK))
            .unwrap_or_default()
    }
}

/// How a view lays out its content when its size changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ContentMode {
    #[default]
    ScaleToFill = 0,
    ScaleAspectFit = 1,
    ScaleAspectFill = 2,
    Redraw = 3,
    Center = 4,
    Top = 5,
    Bottom = 6,
    Left = 7,
    Right = 8,
    TopLeft = 9,
    TopRight = 10,
    BottomLeft = 11,
    BottomRight = 12,
}

impl Enumerated for ContentMode {
    const CHOICES: &'static [Choice] = &[
        Choice::new(0, "scaleToFill"),
        Choice::new(1, "scaleAspectFit"),
        Choice::new(2, "scaleAspectFill"),
        Choice::new(3, "redraw"),
        Choice::new(4, "center"),
        Choice::new(5, "top"),
        Choice::new(6, "bottom"),
        Choice::new(7, "left"),
        Choice::new(8, "right"),
        Choice::new(9, "topLeft"),
        Choice::new(10, "topRight"),
        Choice::new(11, "bottomLeft"),
        Choice::new(12, "bottomRight"),
    ];
    const FALLBACK: i64 = 0;

    fn from_raw(raw: i64) -> Option<Self> {
        Some(match raw {
            0 => Self::ScaleToFill,
            1 => Self::ScaleAspectFit,
            2 => Self::ScaleAspectFill,
            3 => Self::Redraw,
            4 => Self::Center,
            5 => Self::Top,
            6 => Self::Bottom,
            7 => Self::Left,
            8 => Self::Right,
            9 => Self::TopLeft,
            10 => Self::TopRight,
            11 => Self::BottomLeft,
            12 => Self::BottomRight,
            _ => return None,
        })
    }

    fn raw(self) -> i64 {
        self as i64
    }
}

/// Horizontal placement of a control's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum HorizontalAlignment {
    #[default]
    Center = 0,
    Left = 1,
    Right = 2,
    Fill = 3,
    Leading = 4,
    Trailing = 5,
}

impl Enumerated for HorizontalAlignment {
    const CHOICES: &'static [Choice] = &[
        Choice::new(0, "center"),
        Choice::new(1, "left"),
        Choice::new(2, "right"),
        Choice::new(3, "fill"),
        Choice::new(4, "leading"),
        Choice::new(5, "trailing"),
    ];
    const FALLBACK: i64 = 0;

    fn from_raw(raw: i64) -> Option<Self> {
        Some(match raw {
            0 => Self::Center,
            1 => Self::Left,
            2 => Self::Right,
            3 => Self::Fill,
            4 => Self::Leading,
            5 => Self::Trailing,
            _ => return None,
        })
    }

    fn raw(self) -> i64 {
        self as i64
    }
}

/// Vertical placement of a control's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum VerticalAlignment {
    #[default]
    Center = 0,
    Top = 1,
    Bottom = 2,
    Fill = 3,
}

impl Enumerated for VerticalAlignment {
    const CHOICES: &'static [Choice] = &[
        Choice::new(0, "center"),
        Choice::new(1, "top"),
        Choice::new(2, "bottom"),
        Choice::new(3, "fill"),
    ];
    const FALLBACK: i64 = 0;

    fn from_raw(raw: i64) -> Option<Self> {
        Some(match raw {
            0 => Self::Center,
            1 => Self::Top,
            2 => Self::Bottom,
            3 => Self::Fill,
            _ => return None,
        })
    }

    fn raw(self) -> i64 {
        self as i64
    }
}

/// Construction style of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ButtonType {
    #[default]
    Custom = 0,
    System = 1,
    DetailDisclosure = 2,
    InfoLight = 3,
    InfoDark = 4,
    ContactAdd = 5,
    Close = 7,
}

impl Enumerated for ButtonType {
    const CHOICES: &'static [Choice] = &[
        Choice::new(0, "custom"),
        Choice::new(1, "system"),
        Choice::new(2, "detailDisclosure"),
        Choice::new(3, "infoLight"),
        Choice::new(4, "infoDark"),
        Choice::new(5, "contactAdd"),
        Choice::new(7, "close"),
    ];
    const FALLBACK: i64 = 1;

    fn from_raw(raw: i64) -> Option<Self> {
        Some(match raw {
            0 => Self::Custom,
            1 => Self::System,
            2 => Self::DetailDisclosure,
            3 => Self::InfoLight,
            4 => Self::InfoDark,
            5 => Self::ContactAdd,
            7 => Self::Close,
            _ => return None,
        })
    }

    fn raw(self) -> i64 {
        self as i64
    }
}

/// Paragraph alignment of label text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum TextAlignment {
    Left = 0,
    Center = 1,
    Right = 2,
    Justified = 3,
    #[default]
    Natural = 4,
}

impl Enumerated for TextAlignment {
    const CHOICES: &'static [Choice] = &[
        Choice::new(0, "left"),
        Choice::new(1, "center"),
        Choice::new(2, "right"),
        Choice::new(3, "justified"),
        Choice::new(4, "natural"),
    ];
    const FALLBACK: i64 = 4;

    fn from_raw(raw: i64) -> Option<Self> {
        Some(match raw {
            0 => Self::Left,
            1 => Self::Center,
            2 => Self::Right,
            3 => Self::Justified,
            4 => Self::Natural,
            _ => return None,
        })
    }

    fn raw(self) -> i64 {
        self as i64
    }
}

/// Border drawn around a text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum BorderStyle {
    #[default]
    None = 0,
    Line = 1,
    Bezel = 2,
    RoundedRect = 3,
}

impl Enumerated for BorderStyle {
    const CHOICES: &'static [Choice] = &[
        Choice::new(0, "none"),
        Choice::new(1, "line"),
        Choice::new(2, "bezel"),
        Choice::new(3, "roundedRect"),
    ];
    const FALLBACK: i64 = 0;

    fn from_raw(raw: i64) -> Option<Self> {
        Some(match raw {
            0 => Self::None,
            1 => Self::Line,
            2 => Self::Bezel,
            3 => Self::RoundedRect,
            _ => return None,
        })
    }

    fn raw(self) -> i64 {
        self as i64
    }
}

/// When an overlay such as the clear button is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ViewMode {
    #[default]
    Never = 0,
    WhileEditing = 1,
    UnlessEditing = 2,
    Always = 3,
}

impl Enumerated for ViewMode {
    const CHOICES: &'static [Choice] = &[
        Choice::new(0, "never"),
        Choice::new(1, "whileEditing"),
        Choice::new(2, "unlessEditing"),
        Choice::new(3, "always"),
    ];
    const FALLBACK: i64 = 0;

    fn from_raw(raw: i64) -> Option<Self> {
        Some(match raw {
            0 => Self::Never,
            1 => Self::WhileEditing,
            2 => Self::UnlessEditing,
            3 => Self::Always,
            _ => return None,
        })
    }

    fn raw(self) -> i64 {
        self as i64
    }
}

/// Construction style of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ListStyle {
    #[default]
    Plain = 0,
    Grouped = 1,
    InsetGrouped = 2,
}

impl Enumerated for ListStyle {
    const CHOICES: &'static [Choice] = &[
        Choice::new(0, "plain"),
        Choice::new(1, "grouped"),
        Choice::new(2, "insetGrouped"),
    ];
    const FALLBACK: i64 = 0;

    fn from_raw(raw: i64) -> Option<Self> {
        Some(match raw {
            0 => Self::Plain,
            1 => Self::Grouped,
            2 => Self::InsetGrouped,
            _ => return None,
        })
    }

    fn raw(self) -> i64 {
        self as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_domain<E: Enumerated + PartialEq + std::fmt::Debug>() {
        for choice in E::CHOICES {
            let value = E::from_raw(choice.raw).expect("choice must convert");
            assert_eq!(value.raw(), choice.raw);
        }
        let fallback = E::from_raw(E::FALLBACK).expect("fallback must be in the domain");
        assert_eq!(E::from_raw_or_fallback(i64::MAX), fallback);
        assert_eq!(E::from_raw_or_fallback(-1), fallback);
    }

    #[test]
    fn test_domains_round_trip_their_choices() {
        check_domain::<ContentMode>();
        check_domain::<HorizontalAlignment>();
        check_domain::<VerticalAlignment>();
        check_domain::<ButtonType>();
        check_domain::<TextAlignment>();
        check_domain::<BorderStyle>();
        check_domain::<ViewMode>();
        check_domain::<ListStyle>();
    }

    #[test]
    fn test_button_type_gap() {
        assert_eq!(ButtonType::from_raw(6), None);
        assert_eq!(ButtonType::from_raw(7), Some(ButtonType::Close));
    }
}
