//! Property dispatch engine.
//!
//! Routes an edit to the setter registered for the property's declaring kind
//! and value family. Each setter downcasts the live instance before touching
//! it, so an edit that does not fit the instance is dropped without side
//! effects. Properties fixed at construction time are applied by rebuilding
//! the instance and swapping it on the stage.

mod setters;
mod table;

use crate::catalog::{self, ControlKind};
use crate::kind::WidgetKind;
use crate::stage::Stage;
use crate::widgets::InstanceId;
use peniko::Color;
use serde::Serialize;
use std::fmt;
use table::{Effect, SetterTable};

/// A value produced by one of the edit controls.
#[derive(Debug, Clone)]
pub enum EditValue {
    Text(String),
    Color(Option<Color>),
    Toggle(bool),
    Slider(f64),
    Select(i64),
    Stepper(i64),
}

impl EditValue {
    /// The value family, named after the control that produces it.
    pub fn family(&self) -> ControlKind {
        match self {
            EditValue::Text(_) => ControlKind::Text,
            EditValue::Color(_) => ControlKind::Color,
            EditValue::Toggle(_) => ControlKind::Toggle,
            EditValue::Slider(_) => ControlKind::Slider,
            EditValue::Select(_) => ControlKind::Select,
            EditValue::Stepper(_) => ControlKind::Stepper,
        }
    }
}

/// Why an edit left the instance untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IgnoreReason {
    /// Nothing is placed on the stage.
    NoInstance,
    /// The declaring kind is not in the instance kind's chain.
    UnrelatedOrigin,
    /// No setter for this property and value family on the declaring kind.
    UnknownProperty,
    /// The live instance is not of the type the setter targets.
    TypeMismatch,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            IgnoreReason::NoInstance => "no instance on stage",
            IgnoreReason::UnrelatedOrigin => "property belongs to an unrelated kind",
            IgnoreReason::UnknownProperty => "no such property for this value",
            IgnoreReason::TypeMismatch => "instance does not have this property",
        };
        f.write_str(text)
    }
}

/// Result of dispatching one edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DispatchOutcome {
    /// The attribute was written on the live instance.
    Applied,
    /// The live instance was replaced by a rebuilt one.
    Replaced { old: InstanceId, new: InstanceId },
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl DispatchOutcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, DispatchOutcome::Ignored(_))
    }
}

/// Registry of setters for every catalog property, one table per value family.
pub struct DispatchEngine {
    text: SetterTable<String>,
    color: SetterTable<Option<Color>>,
    toggle: SetterTable<bool>,
    slider: SetterTable<f64>,
    select: SetterTable<i64>,
    stepper: SetterTable<i64>,
}

impl DispatchEngine {
    pub fn new() -> Self {
        Self {
            text: setters::text(),
            color: setters::color(),
            toggle: setters::toggle(),
            slider: setters::slider(),
            select: setters::select(),
            stepper: setters::stepper(),
        }
    }

    /// Check whether a setter exists for `property` declared on `origin` in
    /// the given value family.
    pub fn supports(&self, family: ControlKind, origin: WidgetKind, property: &str) -> bool {
        let key = catalog::dispatch_key(property);
        match family {
            ControlKind::Text => self.text.contains(origin, key),
            ControlKind::Color => self.color.contains(origin, key),
            ControlKind::Toggle => self.toggle.contains(origin, key),
            ControlKind::Slider => self.slider.contains(origin, key),
            ControlKind::Select => self.select.contains(origin, key),
            ControlKind::Stepper => self.stepper.contains(origin, key),
        }
    }

    /// Apply an edit of `property`, declared on `origin`, to the instance
    /// placed on `stage`.
    ///
    /// `instance_kind` is the kind the instance was created as. Only the last
    /// segment of a dotted property name selects the setter. Select values
    /// outside the property's domain are replaced by its fallback first.
    pub fn apply(
        &self,
        stage: &mut Stage,
        instance_kind: WidgetKind,
        property: &str,
        value: &EditValue,
        origin: WidgetKind,
    ) -> DispatchOutcome {
        let outcome = self.dispatch(stage, instance_kind, property, value, origin);
        match outcome {
            DispatchOutcome::Ignored(reason) => {
                log::debug!("Ignored {origin}.{property} on {instance_kind}: {reason}");
            }
            DispatchOutcome::Replaced { old, new } => {
                log::info!("Rebuilt {instance_kind} for {property}: {old} -> {new}");
            }
            DispatchOutcome::Applied => {
                log::trace!("Applied {origin}.{property} on {instance_kind}");
            }
        }
        outcome
    }

    fn dispatch(
        &self,
        stage: &mut Stage,
        instance_kind: WidgetKind,
        property: &str,
        value: &EditValue,
        origin: WidgetKind,
    ) -> DispatchOutcome {
        let Some(instance) = stage.instance_mut() else {
            return DispatchOutcome::Ignored(IgnoreReason::NoInstance);
        };
        if !instance_kind.descends_from(origin) {
            return DispatchOutcome::Ignored(IgnoreReason::UnrelatedOrigin);
        }

        let key = catalog::dispatch_key(property);
        let descriptor = catalog::descriptor(origin, key);
        let effect = match value {
            EditValue::Text(text) => run(&self.text, instance, origin, key, text),
            EditValue::Color(color) => run(&self.color, instance, origin, key, color),
            EditValue::Toggle(on) => run(&self.toggle, instance, origin, key, on),
            EditValue::Slider(v) => {
                let v = descriptor.map_or(*v, |descriptor| descriptor.clamp_slider(*v));
                run(&self.slider, instance, origin, key, &v)
            }
            EditValue::Select(raw) => {
                let raw = descriptor.map_or(*raw, |descriptor| descriptor.normalize_choice(*raw));
                run(&self.select, instance, origin, key, &raw)
            }
            EditValue::Stepper(n) => {
                let n = descriptor.map_or(*n, |descriptor| descriptor.clamp_stepper(*n));
                run(&self.stepper, instance, origin, key, &n)
            }
        };

        match effect {
            Ok(Effect::Applied) => DispatchOutcome::Applied,
            Ok(Effect::Mismatch) => DispatchOutcome::Ignored(IgnoreReason::TypeMismatch),
            Ok(Effect::Rebuild(replacement)) => {
                let new = replacement.id();
                match stage.replace(replacement) {
                    Some(old) => DispatchOutcome::Replaced { old, new },
                    None => DispatchOutcome::Ignored(IgnoreReason::NoInstance),
                }
            }
            Err(reason) => DispatchOutcome::Ignored(reason),
        }
    }
}

impl Default for DispatchEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn run<T>(
    table: &SetterTable<T>,
    instance: &mut crate::widgets::Widget,
    origin: WidgetKind,
    key: &str,
    value: &T,
) -> Result<Effect, IgnoreReason> {
    let setter = table
        .get(origin, key)
        .ok_or(IgnoreReason::UnknownProperty)?;
    Ok(setter(instance, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::declared_properties;
    use crate::factory::make_instance;
    use crate::widgets::{ButtonType, Enumerated, ListStyle, Widget, WidgetTrait};
    use kurbo::Size;

    fn staged(kind: WidgetKind) -> Stage {
        let mut stage = Stage::new(Size::new(375.0, 300.0));
        stage.place(make_instance(kind));
        stage
    }

    fn placed(stage: &Stage) -> &Widget {
        stage.instance().unwrap()
    }

    #[test]
    fn test_every_catalog_property_has_a_setter() {
        let engine = DispatchEngine::new();
        for kind in WidgetKind::ALL {
            for descriptor in declared_properties(kind) {
                assert!(
                    engine.supports(descriptor.control, kind, descriptor.name),
                    "{kind}.{}",
                    descriptor.name
                );
            }
        }
    }

    #[test]
    fn test_every_setter_is_in_the_catalog() {
        let engine = DispatchEngine::new();
        let families = [
            (ControlKind::Text, engine.text.keys().collect::<Vec<_>>()),
            (ControlKind::Color, engine.color.keys().collect()),
            (ControlKind::Toggle, engine.toggle.keys().collect()),
            (ControlKind::Slider, engine.slider.keys().collect()),
            (ControlKind::Select, engine.select.keys().collect()),
            (ControlKind::Stepper, engine.stepper.keys().collect()),
        ];
        for (family, keys) in families {
            for (kind, key) in keys {
                let descriptor = catalog::descriptor(kind, key);
                assert_eq!(descriptor.map(|d| d.control), Some(family), "{kind}.{key}");
            }
        }
    }

    #[test]
    fn test_label_number_of_lines() {
        let engine = DispatchEngine::new();
        let mut stage = staged(WidgetKind::Label);
        let id = placed(&stage).id();

        let outcome = engine.apply(
            &mut stage,
            WidgetKind::Label,
            "numberOfLines",
            &EditValue::Stepper(3),
            WidgetKind::Label,
        );
        assert_eq!(outcome, DispatchOutcome::Applied);
        let Widget::Label(label) = placed(&stage) else {
            panic!("expected a label");
        };
        assert_eq!(label.number_of_lines, 3);
        assert_eq!(label.id, id);
    }

    #[test]
    fn test_inherited_property_on_subkind() {
        let engine = DispatchEngine::new();
        let mut stage = staged(WidgetKind::Button);
        let outcome = engine.apply(
            &mut stage,
            WidgetKind::Button,
            "alpha",
            &EditValue::Slider(0.4),
            WidgetKind::Container,
        );
        assert_eq!(outcome, DispatchOutcome::Applied);
        assert!((placed(&stage).view().alpha - 0.4).abs() < 1e-9);

        let outcome = engine.apply(
            &mut stage,
            WidgetKind::Button,
            "isEnabled",
            &EditValue::Toggle(false),
            WidgetKind::Control,
        );
        assert_eq!(outcome, DispatchOutcome::Applied);
        assert!(!placed(&stage).control().unwrap().is_enabled);
    }

    #[test]
    fn test_dotted_name_uses_last_segment() {
        let engine = DispatchEngine::new();
        let mut stage = staged(WidgetKind::Container);
        let outcome = engine.apply(
            &mut stage,
            WidgetKind::Container,
            "layer.borderWidth",
            &EditValue::Slider(2.0),
            WidgetKind::Container,
        );
        assert_eq!(outcome, DispatchOutcome::Applied);
        assert!((placed(&stage).view().layer.border_width - 2.0).abs() < 1e-9);

        let mut stage = staged(WidgetKind::Grid);
        engine.apply(
            &mut stage,
            WidgetKind::Grid,
            "collectionViewLayout.itemSize",
            &EditValue::Slider(80.0),
            WidgetKind::Grid,
        );
        let Widget::Grid(grid) = placed(&stage) else {
            panic!("expected a grid");
        };
        assert_eq!(grid.layout.item_size, Size::new(80.0, 80.0));
    }

    #[test]
    fn test_switch_property_on_label_is_ignored() {
        let engine = DispatchEngine::new();
        let mut stage = staged(WidgetKind::Label);
        let before = placed(&stage).snapshot();

        let outcome = engine.apply(
            &mut stage,
            WidgetKind::Switch,
            "isOn",
            &EditValue::Toggle(true),
            WidgetKind::Switch,
        );
        assert_eq!(outcome, DispatchOutcome::Ignored(IgnoreReason::TypeMismatch));
        assert_eq!(placed(&stage).snapshot(), before);
    }

    #[test]
    fn test_unrelated_origin_is_ignored() {
        let engine = DispatchEngine::new();
        let mut stage = staged(WidgetKind::Label);
        let before = placed(&stage).snapshot();

        let outcome = engine.apply(
            &mut stage,
            WidgetKind::Label,
            "isEnabled",
            &EditValue::Toggle(false),
            WidgetKind::Control,
        );
        assert_eq!(outcome, DispatchOutcome::Ignored(IgnoreReason::UnrelatedOrigin));
        assert_eq!(placed(&stage).snapshot(), before);
    }

    #[test]
    fn test_unknown_property_is_ignored() {
        let engine = DispatchEngine::new();
        let mut stage = staged(WidgetKind::Label);
        let before = placed(&stage).snapshot();

        let outcome = engine.apply(
            &mut stage,
            WidgetKind::Label,
            "frobnicate",
            &EditValue::Toggle(true),
            WidgetKind::Label,
        );
        assert_eq!(outcome, DispatchOutcome::Ignored(IgnoreReason::UnknownProperty));
        assert_eq!(placed(&stage).snapshot(), before);
    }

    #[test]
    fn test_wrong_family_is_ignored() {
        let engine = DispatchEngine::new();
        let mut stage = staged(WidgetKind::Label);
        let before = placed(&stage).snapshot();

        let outcome = engine.apply(
            &mut stage,
            WidgetKind::Label,
            "text",
            &EditValue::Toggle(true),
            WidgetKind::Label,
        );
        assert_eq!(outcome, DispatchOutcome::Ignored(IgnoreReason::UnknownProperty));
        assert_eq!(placed(&stage).snapshot(), before);
    }

    #[test]
    fn test_empty_stage_is_ignored() {
        let engine = DispatchEngine::new();
        let mut stage = Stage::new(Size::new(375.0, 300.0));
        let outcome = engine.apply(
            &mut stage,
            WidgetKind::Label,
            "text",
            &EditValue::Text("x".into()),
            WidgetKind::Label,
        );
        assert_eq!(outcome, DispatchOutcome::Ignored(IgnoreReason::NoInstance));
    }

    #[test]
    fn test_button_type_rebuilds_with_fallback() {
        let engine = DispatchEngine::new();
        let mut stage = staged(WidgetKind::Button);
        let old = placed(&stage).id();

        let outcome = engine.apply(
            &mut stage,
            WidgetKind::Button,
            "buttonType",
            &EditValue::Select(99),
            WidgetKind::Button,
        );
        let DispatchOutcome::Replaced { old: removed, new } = outcome else {
            panic!("expected a replacement, got {outcome:?}");
        };
        assert_eq!(removed, old);
        assert_ne!(new, old);

        let Widget::Button(button) = placed(&stage) else {
            panic!("expected a button");
        };
        assert_eq!(button.id, new);
        assert_eq!(button.button_type(), ButtonType::System);
        assert_eq!(button.title.as_deref(), Some("Test Button"));
    }

    #[test]
    fn test_list_style_rebuild_keeps_content() {
        let engine = DispatchEngine::new();
        let mut stage = staged(WidgetKind::List);
        let old = placed(&stage).id();
        engine.apply(
            &mut stage,
            WidgetKind::List,
            "rowHeight",
            &EditValue::Slider(60.0),
            WidgetKind::List,
        );

        let outcome = engine.apply(
            &mut stage,
            WidgetKind::List,
            "style",
            &EditValue::Select(ListStyle::Grouped.raw()),
            WidgetKind::List,
        );
        assert!(matches!(outcome, DispatchOutcome::Replaced { old: o, .. } if o == old));

        let Widget::List(list) = placed(&stage) else {
            panic!("expected a list");
        };
        assert_ne!(list.id, old);
        assert_eq!(list.style(), ListStyle::Grouped);
        assert!((list.row_height - 60.0).abs() < 1e-9);
        assert_eq!(list.content().map(|c| c.total_items()), Some(4));
    }

    #[test]
    fn test_select_fallback_in_place() {
        let engine = DispatchEngine::new();
        let mut stage = staged(WidgetKind::Label);
        let outcome = engine.apply(
            &mut stage,
            WidgetKind::Label,
            "textAlignment",
            &EditValue::Select(42),
            WidgetKind::Label,
        );
        assert_eq!(outcome, DispatchOutcome::Applied);
        let Widget::Label(label) = placed(&stage) else {
            panic!("expected a label");
        };
        assert_eq!(label.text_alignment, crate::widgets::TextAlignment::Natural);
    }

    #[test]
    fn test_set_on_is_animated() {
        let engine = DispatchEngine::new();
        let mut stage = staged(WidgetKind::Switch);
        engine.apply(
            &mut stage,
            WidgetKind::Switch,
            "setOn",
            &EditValue::Toggle(true),
            WidgetKind::Switch,
        );
        let Widget::Switch(switch) = placed(&stage) else {
            panic!("expected a switch");
        };
        assert!(switch.is_on());
        assert!(switch.was_animated());

        engine.apply(
            &mut stage,
            WidgetKind::Switch,
            "isOn",
            &EditValue::Toggle(false),
            WidgetKind::Switch,
        );
        let Widget::Switch(switch) = placed(&stage) else {
            panic!("expected a switch");
        };
        assert!(!switch.is_on());
        assert!(!switch.was_animated());
    }

    #[test]
    fn test_color_cleared() {
        let engine = DispatchEngine::new();
        let mut stage = staged(WidgetKind::Container);
        assert!(placed(&stage).view().background_color.is_some());
        engine.apply(
            &mut stage,
            WidgetKind::Container,
            "backgroundColor",
            &EditValue::Color(None),
            WidgetKind::Container,
        );
        assert!(placed(&stage).view().background_color.is_none());

        engine.apply(
            &mut stage,
            WidgetKind::Container,
            "backgroundColor",
            &EditValue::Color(Some(Color::from_rgba8(255, 0, 0, 255))),
            WidgetKind::Container,
        );
        assert_eq!(
            placed(&stage).view().background_color,
            Some(crate::color::Rgba::new(255, 0, 0, 255))
        );
    }

    #[test]
    fn test_page_indicator_clamps() {
        let engine = DispatchEngine::new();
        let mut stage = staged(WidgetKind::PageIndicator);
        engine.apply(
            &mut stage,
            WidgetKind::PageIndicator,
            "currentPage",
            &EditValue::Stepper(10),
            WidgetKind::PageIndicator,
        );
        let Widget::PageIndicator(pages) = placed(&stage) else {
            panic!("expected a page indicator");
        };
        assert_eq!(pages.current_page(), 2);
    }

    #[test]
    fn test_huge_segment_count_is_bounded() {
        let engine = DispatchEngine::new();
        let mut stage = staged(WidgetKind::SegmentedControl);
        let outcome = engine.apply(
            &mut stage,
            WidgetKind::SegmentedControl,
            "numberOfSegments",
            &EditValue::Stepper(i64::MAX),
            WidgetKind::SegmentedControl,
        );
        assert_eq!(outcome, DispatchOutcome::Applied);
        let Widget::SegmentedControl(segmented) = placed(&stage) else {
            panic!("expected a segmented control");
        };
        assert_eq!(segmented.segments().len(), 6);
        assert!(segmented.intrinsic_size().width <= 6.0 * 80.0);
    }

    #[test]
    fn test_slider_is_clamped_to_range() {
        let engine = DispatchEngine::new();
        let mut stage = staged(WidgetKind::List);
        engine.apply(
            &mut stage,
            WidgetKind::List,
            "rowHeight",
            &EditValue::Slider(f64::INFINITY),
            WidgetKind::List,
        );
        let Widget::List(list) = placed(&stage) else {
            panic!("expected a list");
        };
        assert_eq!(list.row_height, 120.0);
    }
}
