//! Edit session: the inbound interface of the inspector.
//!
//! A session tracks the selected kind, owns the stage holding the live
//! preview, and routes edits through the dispatch engine. Listeners are told
//! when an edit replaces the live instance and are handed the replacement so
//! they can re-bind to it.

use crate::catalog::PropertyDescriptor;
use crate::dispatch::{DispatchEngine, DispatchOutcome, EditValue, IgnoreReason};
use crate::factory::make_instance;
use crate::kind::WidgetKind;
use crate::resolver::effective_properties;
use crate::stage::Stage;
use crate::widgets::{InstanceId, Widget};
use kurbo::Size;

/// Session configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Bounds of the stage the preview is laid out in.
    pub stage_size: Size,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            stage_size: Size::new(375.0, 300.0),
        }
    }
}

/// A user edit coming from one property control.
#[derive(Debug, Clone)]
pub struct EditEvent {
    /// Kind that declares the edited property.
    pub origin: WidgetKind,
    pub property: String,
    pub value: EditValue,
}

impl EditEvent {
    pub fn new(origin: WidgetKind, property: impl Into<String>, value: EditValue) -> Self {
        Self {
            origin,
            property: property.into(),
            value,
        }
    }
}

/// Notification sent to session listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The live instance was rebuilt; `new` is now on the stage.
    InstanceReplaced { old: InstanceId, new: InstanceId },
}

/// Called with each event and the instance live on the stage after it.
type Listener = Box<dyn FnMut(&SessionEvent, &Widget)>;

/// One inspector session.
pub struct EditSession {
    engine: DispatchEngine,
    stage: Stage,
    kind: Option<WidgetKind>,
    listeners: Vec<Listener>,
}

impl EditSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            engine: DispatchEngine::new(),
            stage: Stage::new(config.stage_size),
            kind: None,
            listeners: Vec::new(),
        }
    }

    /// Select `kind` and get its effective properties, own first.
    pub fn select_kind(&mut self, kind: WidgetKind) -> Vec<&'static PropertyDescriptor> {
        self.kind = Some(kind);
        effective_properties(kind)
    }

    /// Make a fresh default instance of `kind` and place it on the stage.
    pub fn request_preview(&mut self, kind: WidgetKind) -> &Widget {
        self.kind = Some(kind);
        let instance = make_instance(kind);
        log::debug!("Previewing {kind} {}", instance.id());
        self.stage.present(instance)
    }

    /// Apply an edit to the live instance.
    pub fn submit_edit(&mut self, event: EditEvent) -> DispatchOutcome {
        let Some(kind) = self.kind.filter(|_| self.stage.instance().is_some()) else {
            log::debug!("Ignored {} with no preview", event.property);
            return DispatchOutcome::Ignored(IgnoreReason::NoInstance);
        };
        let outcome = self.engine.apply(
            &mut self.stage,
            kind,
            &event.property,
            &event.value,
            event.origin,
        );
        if let DispatchOutcome::Replaced { old, new } = outcome {
            self.notify(SessionEvent::InstanceReplaced { old, new });
        }
        outcome
    }

    /// Register a listener for session events.
    pub fn subscribe(&mut self, listener: impl FnMut(&SessionEvent, &Widget) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Change the stage bounds. The live instance keeps its placement and its
    /// frame is resolved against the new bounds.
    pub fn resize_stage(&mut self, bounds: Size) {
        log::debug!("Stage resized to {} x {}", bounds.width, bounds.height);
        self.stage.set_bounds(bounds);
    }

    pub fn instance(&self) -> Option<&Widget> {
        self.stage.instance()
    }

    pub fn kind(&self) -> Option<WidgetKind> {
        self.kind
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    fn notify(&mut self, event: SessionEvent) {
        let Some(instance) = self.stage.instance() else {
            return;
        };
        for listener in &mut self.listeners {
            listener(&event, instance);
        }
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}
