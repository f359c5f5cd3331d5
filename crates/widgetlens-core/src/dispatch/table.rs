//! Setter tables keyed by declaring kind and dispatch key.

use crate::kind::WidgetKind;
use crate::widgets::{Enumerated, Widget, WidgetCast};
use std::collections::HashMap;

/// What a setter did to the instance it was handed.
pub(crate) enum Effect {
    /// The attribute was written in place.
    Applied,
    /// The instance is not of the type the setter targets; nothing changed.
    Mismatch,
    /// The attribute is fixed at construction; this is the rebuilt instance.
    Rebuild(Widget),
}

pub(crate) type Setter<T> = Box<dyn Fn(&mut Widget, &T) -> Effect + Send + Sync>;

/// Setters for one value family.
pub(crate) struct SetterTable<T> {
    by_kind: HashMap<WidgetKind, HashMap<&'static str, Setter<T>>>,
}

impl<T> SetterTable<T> {
    pub(crate) fn new() -> Self {
        Self {
            by_kind: HashMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, kind: WidgetKind, key: &'static str, setter: Setter<T>) {
        let previous = self.by_kind.entry(kind).or_default().insert(key, setter);
        debug_assert!(previous.is_none(), "duplicate setter {kind}.{key}");
    }

    pub(crate) fn get(&self, kind: WidgetKind, key: &str) -> Option<&Setter<T>> {
        self.by_kind.get(&kind)?.get(key)
    }

    pub(crate) fn contains(&self, kind: WidgetKind, key: &str) -> bool {
        self.get(kind, key).is_some()
    }

    /// Every registered `(kind, key)` pair.
    pub(crate) fn keys(&self) -> impl Iterator<Item = (WidgetKind, &'static str)> + '_ {
        self.by_kind
            .iter()
            .flat_map(|(kind, setters)| setters.keys().map(move |key| (*kind, *key)))
    }
}

/// Setter that writes through a checked downcast to `W`.
pub(crate) fn assign<W, T>(write: impl Fn(&mut W, &T) + Send + Sync + 'static) -> Setter<T>
where
    W: WidgetCast + 'static,
    T: 'static,
{
    Box::new(move |widget: &mut Widget, value: &T| match W::cast_mut(widget) {
        Some(target) => {
            write(target, value);
            Effect::Applied
        }
        None => Effect::Mismatch,
    })
}

/// Setter for an enumerated attribute edited through raw integers.
pub(crate) fn choose<W, E>(write: impl Fn(&mut W, E) + Send + Sync + 'static) -> Setter<i64>
where
    W: WidgetCast + 'static,
    E: Enumerated + 'static,
{
    assign(move |target: &mut W, raw: &i64| write(target, E::from_raw_or_fallback(*raw)))
}

/// Setter for an enumerated attribute that only a new instance can change.
pub(crate) fn rebuild<W, E>(build: impl Fn(&W, E) -> Widget + Send + Sync + 'static) -> Setter<i64>
where
    W: WidgetCast + 'static,
    E: Enumerated + 'static,
{
    Box::new(move |widget: &mut Widget, raw: &i64| match W::cast(widget) {
        Some(current) => Effect::Rebuild(build(current, E::from_raw_or_fallback(*raw))),
        None => Effect::Mismatch,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::make_instance;
    use crate::widgets::Label;

    #[test]
    fn test_assign_checks_type() {
        let setter: Setter<String> = assign(|label: &mut Label, text: &String| {
            label.text = Some(text.clone());
        });

        let mut label = make_instance(WidgetKind::Label);
        assert!(matches!(setter(&mut label, &"hi".to_string()), Effect::Applied));
        let Widget::Label(label) = label else {
            panic!("expected a label");
        };
        assert_eq!(label.text.as_deref(), Some("hi"));

        let mut switch = make_instance(WidgetKind::Switch);
        let before = switch.snapshot();
        assert!(matches!(setter(&mut switch, &"hi".to_string()), Effect::Mismatch));
        assert_eq!(switch.snapshot(), before);
    }

    #[test]
    fn test_table_lookup() {
        let mut table: SetterTable<bool> = SetterTable::new();
        table.insert(
            WidgetKind::Image,
            "isHighlighted",
            assign(|image: &mut crate::widgets::Image, on: &bool| image.is_highlighted = *on),
        );
        assert!(table.contains(WidgetKind::Image, "isHighlighted"));
        assert!(!table.contains(WidgetKind::Control, "isHighlighted"));
        assert_eq!(table.keys().count(), 1);
    }
}
