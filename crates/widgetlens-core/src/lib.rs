//! WidgetLens Core Library
//!
//! Widget kind taxonomy, property catalog and the dispatch engine that applies
//! typed edits to a live preview instance.

pub mod catalog;
pub mod color;
pub mod dispatch;
pub mod factory;
pub mod kind;
pub mod resolver;
pub mod session;
pub mod stage;
pub mod widgets;

pub use catalog::{ControlKind, Hint, PropertyDescriptor};
pub use color::Rgba;
pub use dispatch::{DispatchEngine, DispatchOutcome, EditValue, IgnoreReason};
pub use factory::make_instance;
pub use kind::{KindParseError, WidgetKind};
pub use resolver::{effective_properties, resolve_property};
pub use session::{EditEvent, EditSession, SessionConfig, SessionEvent};
pub use stage::{Constraint, Stage};
pub use widgets::{InstanceId, Widget};
