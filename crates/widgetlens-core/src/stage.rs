//! The visible placement of the live instance.
//!
//! The stage holds at most one instance together with the layout constraints
//! that position it. Structural replacement goes through [`Stage::replace`],
//! which is the only way the placed instance's identity changes.

use crate::kind::WidgetKind;
use crate::widgets::{InstanceId, Widget};
use kurbo::{Point, Rect, Size};
use serde::Serialize;

/// Layout rule tying the instance to the stage bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Constraint {
    /// Center on both axes.
    Centered,
    /// Width no larger than a fraction of the stage width.
    MaxWidthFraction(f64),
    /// Width equal to a fraction of the stage width.
    WidthFraction(f64),
    /// Both dimensions equal to a fraction of the stage.
    SizeFraction(f64),
}

/// The constraints an instance of `kind` is placed with.
pub fn constraints_for(kind: WidgetKind) -> Vec<Constraint> {
    let mut constraints = vec![Constraint::Centered];
    match kind {
        WidgetKind::Label | WidgetKind::Button => {
            constraints.push(Constraint::MaxWidthFraction(0.5));
        }
        WidgetKind::TextInput => constraints.push(Constraint::WidthFraction(0.5)),
        WidgetKind::Container | WidgetKind::Image | WidgetKind::List | WidgetKind::Grid => {
            constraints.push(Constraint::SizeFraction(0.9));
        }
        _ => {}
    }
    constraints
}

/// A placed instance and its constraints.
#[derive(Debug, Clone)]
pub struct Placement {
    pub instance: Widget,
    pub constraints: Vec<Constraint>,
}

/// Host area the preview instance is displayed in.
#[derive(Debug, Clone)]
pub struct Stage {
    bounds: Size,
    placement: Option<Placement>,
}

impl Stage {
    pub fn new(bounds: Size) -> Self {
        Self {
            bounds,
            placement: None,
        }
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Size) {
        self.bounds = bounds;
    }

    /// Place `instance` with the constraints of its kind, returning whatever
    /// was placed before.
    pub fn place(&mut self, instance: Widget) -> Option<Widget> {
        let previous = self.remove();
        self.present(instance);
        previous
    }

    /// Place `instance`, dropping whatever was placed before, and borrow it back.
    pub fn present(&mut self, instance: Widget) -> &Widget {
        let constraints = constraints_for(instance.kind());
        &self
            .placement
            .insert(Placement {
                instance,
                constraints,
            })
            .instance
    }

    /// Take the placed instance off the stage, discarding its constraints.
    pub fn remove(&mut self) -> Option<Widget> {
        self.placement.take().map(|placement| placement.instance)
    }

    /// Swap the placed instance for `replacement` at the same placement.
    ///
    /// Returns the identity of the instance that was removed.
    pub fn replace(&mut self, replacement: Widget) -> Option<InstanceId> {
        let old = self.place(replacement)?;
        Some(old.id())
    }

    pub fn instance(&self) -> Option<&Widget> {
        self.placement.as_ref().map(|p| &p.instance)
    }

    pub fn instance_mut(&mut self) -> Option<&mut Widget> {
        self.placement.as_mut().map(|p| &mut p.instance)
    }

    pub fn constraints(&self) -> &[Constraint] {
        self.placement
            .as_ref()
            .map(|p| p.constraints.as_slice())
            .unwrap_or(&[])
    }

    /// Resolve the placed instance's frame within the stage bounds.
    pub fn frame(&self) -> Option<Rect> {
        let placement = self.placement.as_ref()?;
        let mut size = placement.instance.intrinsic_size();
        let mut centered = false;
        for constraint in &placement.constraints {
            match *constraint {
                Constraint::Centered => centered = true,
                Constraint::MaxWidthFraction(f) => {
                    size.width = size.width.min(self.bounds.width * f);
                }
                Constraint::WidthFraction(f) => size.width = self.bounds.width * f,
                Constraint::SizeFraction(f) => {
                    size = Size::new(self.bounds.width * f, self.bounds.height * f);
                }
            }
        }
        let origin = if centered {
            Point::new(
                (self.bounds.width - size.width) / 2.0,
                (self.bounds.height - size.height) / 2.0,
            )
        } else {
            Point::ORIGIN
        };
        Some(Rect::from_origin_size(origin, size))
    }
}
