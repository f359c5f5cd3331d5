//! Property catalog.
//!
//! Each kind declares an ordered list of the properties it introduces itself;
//! inherited properties come from the ancestors' lists (see [`crate::resolver`]).
//! Declaration order is the presentation order of the controls.

use crate::kind::WidgetKind;
use crate::widgets::{
    BorderStyle, ButtonType, ContentMode, Enumerated, HorizontalAlignment, ListStyle,
    TextAlignment, VerticalAlignment, ViewMode,
};
use serde::Serialize;
use std::fmt;

/// The edit-input modality bound to a property.
///
/// Also the value-type family an edit must carry to reach the property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ControlKind {
    /// Free text; carries a `String`.
    Text,
    /// Color palette; carries an optional color.
    Color,
    /// On/off switch; carries a `bool`.
    Toggle,
    /// Continuous slider; carries an `f64`.
    Slider,
    /// Enumerated picker; carries a raw integer.
    Select,
    /// Stepped integer; carries an `i64`.
    Stepper,
}

impl ControlKind {
    pub const fn name(self) -> &'static str {
        match self {
            ControlKind::Text => "text",
            ControlKind::Color => "color",
            ControlKind::Toggle => "toggle",
            ControlKind::Slider => "slider",
            ControlKind::Select => "select",
            ControlKind::Stepper => "stepper",
        }
    }
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One value of an enumerated domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub raw: i64,
    pub label: &'static str,
}

impl Choice {
    pub const fn new(raw: i64, label: &'static str) -> Self {
        Self { raw, label }
    }
}

/// Presentation metadata attached to a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Hint {
    None,
    /// Suggested bounds for sliders and steppers.
    Range { min: f64, max: f64, step: f64 },
    /// Enumerated domain of a select control.
    Choices {
        choices: &'static [Choice],
        /// Raw value applied when an edit carries a value outside `choices`.
        fallback: i64,
    },
}

/// A property declared directly on one widget kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PropertyDescriptor {
    /// Property name, possibly a dotted path (`layer.borderWidth`).
    pub name: &'static str,
    /// The declaring kind.
    pub owner: WidgetKind,
    pub control: ControlKind,
    pub hint: Hint,
}

impl PropertyDescriptor {
    pub const fn new(owner: WidgetKind, name: &'static str, control: ControlKind) -> Self {
        Self {
            name,
            owner,
            control,
            hint: Hint::None,
        }
    }

    pub const fn with_range(self, min: f64, max: f64, step: f64) -> Self {
        Self {
            hint: Hint::Range { min, max, step },
            ..self
        }
    }

    /// Attach an enumerated domain, falling back to `E::FALLBACK`.
    pub const fn with_domain<E: Enumerated>(self) -> Self {
        Self {
            hint: Hint::Choices {
                choices: E::CHOICES,
                fallback: E::FALLBACK,
            },
            ..self
        }
    }

    /// The dispatch key: the last segment of the dotted name.
    pub fn key(&self) -> &'static str {
        dispatch_key(self.name)
    }

    /// Check whether `name` refers to this property, either by full name or key.
    pub fn matches(&self, name: &str) -> bool {
        self.name == name || self.key() == dispatch_key(name)
    }

    /// Map a raw select value into the declared domain.
    ///
    /// Values outside the domain become the documented fallback. Descriptors
    /// without choices pass the value through unchanged.
    pub fn normalize_choice(&self, raw: i64) -> i64 {
        match self.hint {
            Hint::Choices { choices, fallback } => {
                if choices.iter().any(|choice| choice.raw == raw) {
                    raw
                } else {
                    fallback
                }
            }
            _ => raw,
        }
    }

    /// Clamp a slider value into the declared range.
    ///
    /// NaN maps to the minimum. Descriptors without a range pass the value
    /// through unchanged.
    pub fn clamp_slider(&self, value: f64) -> f64 {
        match self.hint {
            Hint::Range { min, .. } if value.is_nan() => min,
            Hint::Range { min, max, .. } => value.clamp(min, max),
            _ => value,
        }
    }

    /// Clamp a stepper count into the whole numbers of the declared range.
    pub fn clamp_stepper(&self, count: i64) -> i64 {
        match self.hint {
            Hint::Range { min, max, .. } => count.clamp(min.ceil() as i64, max.floor() as i64),
            _ => count,
        }
    }
}

/// Last segment of a dotted property name.
pub fn dispatch_key(name: &str) -> &str {
    match name.rfind('.') {
        Some(index) => &name[index + 1..],
        None => name,
    }
}

use ControlKind::{Color, Select, Slider, Stepper, Text, Toggle};

const CONTAINER: &[PropertyDescriptor] = &[
    PropertyDescriptor::new(WidgetKind::Container, "contentMode", Select).with_domain::<ContentMode>(),
    PropertyDescriptor::new(WidgetKind::Container, "tintColor", Color),
    PropertyDescriptor::new(WidgetKind::Container, "backgroundColor", Color),
    PropertyDescriptor::new(WidgetKind::Container, "clipsToBounds", Toggle),
    PropertyDescriptor::new(WidgetKind::Container, "alpha", Slider).with_range(0.0, 1.0, 0.01),
    PropertyDescriptor::new(WidgetKind::Container, "isHidden", Toggle),
    PropertyDescriptor::new(WidgetKind::Container, "layer.borderWidth", Slider).with_range(0.0, 20.0, 0.5),
    PropertyDescriptor::new(WidgetKind::Container, "layer.borderColor", Color),
    PropertyDescriptor::new(WidgetKind::Container, "layer.cornerRadius", Slider).with_range(0.0, 50.0, 1.0),
];

const CONTROL: &[PropertyDescriptor] = &[
    PropertyDescriptor::new(WidgetKind::Control, "isEnabled", Toggle),
    PropertyDescriptor::new(WidgetKind::Control, "isSelected", Toggle),
    PropertyDescriptor::new(WidgetKind::Control, "isHighlighted", Toggle),
    PropertyDescriptor::new(WidgetKind::Control, "contentHorizontalAlignment", Select)
        .with_domain::<HorizontalAlignment>(),
    PropertyDescriptor::new(WidgetKind::Control, "contentVerticalAlignment", Select)
        .with_domain::<VerticalAlignment>(),
];

const SCROLL_VIEW: &[PropertyDescriptor] = &[
    PropertyDescriptor::new(WidgetKind::ScrollView, "isScrollEnabled", Toggle),
    PropertyDescriptor::new(WidgetKind::ScrollView, "showsVerticalScrollIndicator", Toggle),
    PropertyDescriptor::new(WidgetKind::ScrollView, "showsHorizontalScrollIndicator", Toggle),
    PropertyDescriptor::new(WidgetKind::ScrollView, "bounces", Toggle),
];

const BUTTON: &[PropertyDescriptor] = &[
    PropertyDescriptor::new(WidgetKind::Button, "buttonType", Select).with_domain::<ButtonType>(),
    PropertyDescriptor::new(WidgetKind::Button, "setTitle", Text),
    PropertyDescriptor::new(WidgetKind::Button, "setTitleColor", Color),
    PropertyDescriptor::new(WidgetKind::Button, "setImage", Toggle),
    PropertyDescriptor::new(WidgetKind::Button, "setBackgroundImage", Toggle),
];

const LABEL: &[PropertyDescriptor] = &[
    PropertyDescriptor::new(WidgetKind::Label, "text", Text),
    PropertyDescriptor::new(WidgetKind::Label, "textColor", Color),
    PropertyDescriptor::new(WidgetKind::Label, "numberOfLines", Stepper).with_range(0.0, 10.0, 1.0),
    PropertyDescriptor::new(WidgetKind::Label, "textAlignment", Select).with_domain::<TextAlignment>(),
    PropertyDescriptor::new(WidgetKind::Label, "minimumScaleFactor", Slider).with_range(0.0, 1.0, 0.05),
];

const SWITCH: &[PropertyDescriptor] = &[
    PropertyDescriptor::new(WidgetKind::Switch, "isOn", Toggle),
    PropertyDescriptor::new(WidgetKind::Switch, "setOn", Toggle),
    PropertyDescriptor::new(WidgetKind::Switch, "onTintColor", Color),
    PropertyDescriptor::new(WidgetKind::Switch, "thumbTintColor", Color),
];

const STEPPER: &[PropertyDescriptor] = &[
    PropertyDescriptor::new(WidgetKind::Stepper, "setIncrementImage", Toggle),
    PropertyDescriptor::new(WidgetKind::Stepper, "setDecrementImage", Toggle),
    PropertyDescriptor::new(WidgetKind::Stepper, "setDividerImage", Toggle),
    PropertyDescriptor::new(WidgetKind::Stepper, "setBackgroundImage", Toggle),
    PropertyDescriptor::new(WidgetKind::Stepper, "wraps", Toggle),
    PropertyDescriptor::new(WidgetKind::Stepper, "autorepeat", Toggle),
];

const TEXT_INPUT: &[PropertyDescriptor] = &[
    PropertyDescriptor::new(WidgetKind::TextInput, "text", Text),
    PropertyDescriptor::new(WidgetKind::TextInput, "textColor", Color),
    PropertyDescriptor::new(WidgetKind::TextInput, "placeholder", Toggle),
    PropertyDescriptor::new(WidgetKind::TextInput, "borderStyle", Select).with_domain::<BorderStyle>(),
    PropertyDescriptor::new(WidgetKind::TextInput, "clearButtonMode", Select).with_domain::<ViewMode>(),
];

const LIST: &[PropertyDescriptor] = &[
    PropertyDescriptor::new(WidgetKind::List, "style", Select).with_domain::<ListStyle>(),
    PropertyDescriptor::new(WidgetKind::List, "separatorColor", Color),
    PropertyDescriptor::new(WidgetKind::List, "rowHeight", Slider).with_range(20.0, 120.0, 1.0),
    PropertyDescriptor::new(WidgetKind::List, "backgroundView", Toggle),
];

const GRID: &[PropertyDescriptor] = &[
    PropertyDescriptor::new(WidgetKind::Grid, "collectionViewLayout.itemSize", Slider)
        .with_range(10.0, 150.0, 1.0),
    PropertyDescriptor::new(WidgetKind::Grid, "collectionViewLayout.minimumLineSpacing", Slider)
        .with_range(0.0, 50.0, 1.0),
    PropertyDescriptor::new(WidgetKind::Grid, "collectionViewLayout.minimumInteritemSpacing", Slider)
        .with_range(0.0, 50.0, 1.0),
    PropertyDescriptor::new(WidgetKind::Grid, "collectionViewLayout.sectionInset", Slider)
        .with_range(0.0, 50.0, 1.0),
    PropertyDescriptor::new(WidgetKind::Grid, "collectionViewLayout.headerReferenceSize", Slider)
        .with_range(0.0, 80.0, 1.0),
    PropertyDescriptor::new(WidgetKind::Grid, "collectionViewLayout.footerReferenceSize", Slider)
        .with_range(0.0, 80.0, 1.0),
];

const IMAGE: &[PropertyDescriptor] = &[
    PropertyDescriptor::new(WidgetKind::Image, "image", Toggle),
    PropertyDescriptor::new(WidgetKind::Image, "isHighlighted", Toggle),
];

const PAGE_INDICATOR: &[PropertyDescriptor] = &[
    PropertyDescriptor::new(WidgetKind::PageIndicator, "currentPage", Stepper).with_range(0.0, 9.0, 1.0),
    PropertyDescriptor::new(WidgetKind::PageIndicator, "numberOfPages", Stepper).with_range(0.0, 10.0, 1.0),
    PropertyDescriptor::new(WidgetKind::PageIndicator, "pageIndicatorTintColor", Color),
    PropertyDescriptor::new(WidgetKind::PageIndicator, "currentPageIndicatorTintColor", Color),
    PropertyDescriptor::new(WidgetKind::PageIndicator, "hidesForSinglePage", Toggle),
];

const SEGMENTED_CONTROL: &[PropertyDescriptor] = &[
    PropertyDescriptor::new(WidgetKind::SegmentedControl, "numberOfSegments", Stepper)
        .with_range(1.0, 6.0, 1.0),
    PropertyDescriptor::new(WidgetKind::SegmentedControl, "selectedSegmentIndex", Stepper)
        .with_range(-1.0, 5.0, 1.0),
    PropertyDescriptor::new(WidgetKind::SegmentedControl, "selectedSegmentTintColor", Color),
];

/// Properties declared directly on `kind`, in presentation order.
pub fn declared_properties(kind: WidgetKind) -> &'static [PropertyDescriptor] {
    match kind {
        WidgetKind::Container => CONTAINER,
        WidgetKind::Control => CONTROL,
        WidgetKind::ScrollView => SCROLL_VIEW,
        WidgetKind::Button => BUTTON,
        WidgetKind::Label => LABEL,
        WidgetKind::Switch => SWITCH,
        WidgetKind::Stepper => STEPPER,
        WidgetKind::TextInput => TEXT_INPUT,
        WidgetKind::List => LIST,
        WidgetKind::Grid => GRID,
        WidgetKind::Image => IMAGE,
        WidgetKind::PageIndicator => PAGE_INDICATOR,
        WidgetKind::SegmentedControl => SEGMENTED_CONTROL,
    }
}

/// Find a property declared directly on `kind` by full name or dispatch key.
pub fn descriptor(kind: WidgetKind, name: &str) -> Option<&'static PropertyDescriptor> {
    declared_properties(kind)
        .iter()
        .find(|descriptor| descriptor.matches(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_owner_matches_declaring_kind() {
        for kind in WidgetKind::ALL {
            for descriptor in declared_properties(kind) {
                assert_eq!(descriptor.owner, kind, "{} on {kind}", descriptor.name);
            }
        }
    }

    #[test]
    fn test_names_and_keys_unique_per_kind() {
        for kind in WidgetKind::ALL {
            let mut names = HashSet::new();
            let mut keys = HashSet::new();
            for descriptor in declared_properties(kind) {
                assert!(names.insert(descriptor.name), "duplicate {}", descriptor.name);
                assert!(keys.insert(descriptor.key()), "duplicate key {}", descriptor.key());
            }
        }
    }

    #[test]
    fn test_declaration_order_preserved() {
        let names: Vec<_> = declared_properties(WidgetKind::Label)
            .iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(
            names,
            vec!["text", "textColor", "numberOfLines", "textAlignment", "minimumScaleFactor"]
        );
    }

    #[test]
    fn test_selects_carry_choices_with_valid_fallback() {
        for kind in WidgetKind::ALL {
            for descriptor in declared_properties(kind) {
                match (descriptor.control, descriptor.hint) {
                    (ControlKind::Select, Hint::Choices { choices, fallback }) => {
                        assert!(!choices.is_empty());
                        assert!(choices.iter().any(|c| c.raw == fallback));
                    }
                    (ControlKind::Select, _) => panic!("{} has no choices", descriptor.name),
                    (_, Hint::Choices { .. }) => panic!("{} is not a select", descriptor.name),
                    _ => {}
                }
            }
        }
    }

    #[test]
    fn test_clamp_to_range() {
        let segments = descriptor(WidgetKind::SegmentedControl, "numberOfSegments").unwrap();
        assert_eq!(segments.clamp_stepper(i64::MAX), 6);
        assert_eq!(segments.clamp_stepper(i64::MIN), 1);
        assert_eq!(segments.clamp_stepper(3), 3);

        let selection = descriptor(WidgetKind::SegmentedControl, "selectedSegmentIndex").unwrap();
        assert_eq!(selection.clamp_stepper(-1), -1);

        let row_height = descriptor(WidgetKind::List, "rowHeight").unwrap();
        assert_eq!(row_height.clamp_slider(f64::INFINITY), 120.0);
        assert_eq!(row_height.clamp_slider(1.0), 20.0);
        assert_eq!(row_height.clamp_slider(f64::NAN), 20.0);
        assert_eq!(row_height.clamp_slider(60.0), 60.0);

        let text = descriptor(WidgetKind::Label, "text").unwrap();
        assert_eq!(text.clamp_stepper(i64::MAX), i64::MAX);
    }

    #[test]
    fn test_dispatch_key() {
        assert_eq!(dispatch_key("layer.borderWidth"), "borderWidth");
        assert_eq!(dispatch_key("collectionViewLayout.itemSize"), "itemSize");
        assert_eq!(dispatch_key("alpha"), "alpha");
    }

    #[test]
    fn test_descriptor_lookup_by_key() {
        let by_key = descriptor(WidgetKind::Container, "cornerRadius").unwrap();
        let by_name = descriptor(WidgetKind::Container, "layer.cornerRadius").unwrap();
        assert_eq!(by_key, by_name);
        assert!(descriptor(WidgetKind::Container, "nonexistent").is_none());
    }

    #[test]
    fn test_normalize_choice() {
        let button_type = descriptor(WidgetKind::Button, "buttonType").unwrap();
        assert_eq!(button_type.normalize_choice(5), 5);
        assert_eq!(button_type.normalize_choice(7), 7);
        assert_eq!(button_type.normalize_choice(6), ButtonType::FALLBACK);
        assert_eq!(button_type.normalize_choice(99), ButtonType::System.raw());
    }
}
