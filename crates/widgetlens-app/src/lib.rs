//! WidgetLens Application
//!
//! Line-oriented inspector shell driving the core edit session.

mod app;
mod command;
mod help;

pub use app::{App, AppConfig, Flow, STAGE_HEIGHT_VAR, STAGE_WIDTH_VAR};
pub use command::{Command, CommandError, parse_value};
pub use help::{CommandHelp, CommandRegistry};
