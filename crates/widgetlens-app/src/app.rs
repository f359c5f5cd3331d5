//! Inspector shell: configuration and the command loop.

use crate::command::{Command, CommandError, format_size, parse_dimension, parse_value};
use crate::help::CommandRegistry;
use kurbo::Size;
use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;
use widgetlens_core::catalog::{self, Hint};
use widgetlens_core::{
    DispatchOutcome, EditEvent, EditSession, SessionConfig, SessionEvent, WidgetKind,
    resolve_property,
};

/// Environment variable overriding the stage width.
pub const STAGE_WIDTH_VAR: &str = "WIDGETLENS_STAGE_WIDTH";
/// Environment variable overriding the stage height.
pub const STAGE_HEIGHT_VAR: &str = "WIDGETLENS_STAGE_HEIGHT";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub prompt: String,
    pub stage_width: f64,
    pub stage_height: f64,
    /// Write each input line back before its reply.
    pub echo: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let stage = SessionConfig::default().stage_size;
        Self {
            prompt: "widgetlens> ".to_string(),
            stage_width: stage.width,
            stage_height: stage.height,
            echo: false,
        }
    }
}

impl AppConfig {
    /// Defaults with overrides from the process environment.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|name| std::env::var(name).ok())
    }

    /// Apply stage size overrides looked up by variable name.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        for (name, slot) in [
            (STAGE_WIDTH_VAR, &mut self.stage_width),
            (STAGE_HEIGHT_VAR, &mut self.stage_height),
        ] {
            let Some(raw) = lookup(name) else {
                continue;
            };
            match parse_dimension(&raw) {
                Some(value) => *slot = value,
                None => log::warn!("Ignoring {name}={raw:?}: expected a positive number"),
            }
        }
        self
    }

    pub fn stage_size(&self) -> Size {
        Size::new(self.stage_width, self.stage_height)
    }
}

/// What the loop does after a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    Continue(String),
    Quit,
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    session: EditSession,
    events: Rc<RefCell<Vec<SessionEvent>>>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let mut session = EditSession::new(SessionConfig {
            stage_size: config.stage_size(),
        });
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        session.subscribe(move |event, _| sink.borrow_mut().push(*event));
        Self {
            config,
            session,
            events,
        }
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    /// Read commands from `input` until it ends or `quit` is entered.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
        log::info!("Stage is {}", format_size(self.config.stage_size()));
        write!(output, "{}", self.config.prompt)?;
        output.flush()?;
        for line in input.lines() {
            let line = line?;
            if self.config.echo {
                writeln!(output, "{line}")?;
            }
            match self.execute(&line) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue(reply)) => {
                    if !reply.is_empty() {
                        writeln!(output, "{reply}")?;
                    }
                }
                Err(err) => {
                    log::debug!("Command {line:?} failed: {err}");
                    writeln!(output, "error: {err}")?;
                }
            }
            write!(output, "{}", self.config.prompt)?;
            output.flush()?;
        }
        writeln!(output)?;
        Ok(())
    }

    /// Execute one input line.
    pub fn execute(&mut self, line: &str) -> Result<Flow, CommandError> {
        let reply = match Command::parse(line)? {
            Command::Nothing => String::new(),
            Command::Kinds => list_kinds(),
            Command::Select(kind) => self.select(kind),
            Command::Props => self.list_properties()?,
            Command::Set {
                property,
                value,
                origin,
            } => self.set(&property, &value, origin)?,
            Command::Show => self.show()?,
            Command::Frame => self.frame()?,
            Command::Stage(size) => self.resize_stage(size),
            Command::Help => CommandRegistry::render(),
            Command::Quit => return Ok(Flow::Quit),
        };
        Ok(Flow::Continue(reply))
    }

    fn selected(&self) -> Result<WidgetKind, CommandError> {
        self.session.kind().ok_or(CommandError::NoKindSelected)
    }

    fn select(&mut self, kind: WidgetKind) -> String {
        let count = self.session.select_kind(kind).len();
        let id = self.session.request_preview(kind).id();
        format!("{kind} {id} ({count} properties)")
    }

    fn list_properties(&mut self) -> Result<String, CommandError> {
        let kind = self.selected()?;
        let lines: Vec<String> = self
            .session
            .select_kind(kind)
            .into_iter()
            .map(|descriptor| {
                let mut line = format!(
                    "  {:44} {:8} {}",
                    descriptor.name,
                    descriptor.control.name(),
                    descriptor.owner
                );
                match descriptor.hint {
                    Hint::Range { min, max, .. } => line.push_str(&format!("  [{min}..{max}]")),
                    Hint::Choices { choices, .. } => {
                        let labels: Vec<_> = choices.iter().map(|c| c.label).collect();
                        line.push_str(&format!("  {{{}}}", labels.join(", ")));
                    }
                    Hint::None => {}
                }
                line
            })
            .collect();
        Ok(lines.join("\n"))
    }

    fn set(
        &mut self,
        property: &str,
        value: &str,
        origin: Option<WidgetKind>,
    ) -> Result<String, CommandError> {
        let kind = self.selected()?;
        let descriptor = match origin {
            Some(origin) => catalog::descriptor(origin, property),
            None => resolve_property(kind, property),
        }
        .ok_or_else(|| CommandError::UnknownProperty {
            kind: origin.unwrap_or(kind),
            property: property.to_string(),
        })?;

        let value = parse_value(descriptor, value)?;
        let outcome = self
            .session
            .submit_edit(EditEvent::new(descriptor.owner, property, value));

        let mut reply = match outcome {
            DispatchOutcome::Applied => "applied".to_string(),
            DispatchOutcome::Replaced { old, new } => format!("replaced {old} -> {new}"),
            DispatchOutcome::Ignored(reason) => format!("ignored: {reason}"),
        };
        for event in self.events.borrow_mut().drain(..) {
            let SessionEvent::InstanceReplaced { new, .. } = event;
            reply.push_str(&format!("\nnow editing {new}"));
        }
        Ok(reply)
    }

    fn show(&self) -> Result<String, CommandError> {
        let instance = self.session.instance().ok_or(CommandError::NoKindSelected)?;
        Ok(serde_json::to_string_pretty(&instance.snapshot()).unwrap_or_default())
    }

    fn resize_stage(&mut self, size: Size) -> String {
        self.config.stage_width = size.width;
        self.config.stage_height = size.height;
        self.session.resize_stage(size);
        format!("stage {}", format_size(size))
    }

    fn frame(&self) -> Result<String, CommandError> {
        let frame = self.session.stage().frame().ok_or(CommandError::NoKindSelected)?;
        Ok(format!(
            "{} {} {} {} in {}",
            frame.x0,
            frame.y0,
            frame.width(),
            frame.height(),
            format_size(self.session.stage().bounds())
        ))
    }
}

fn list_kinds() -> String {
    WidgetKind::ALL
        .iter()
        .map(|kind| {
            let ancestors: Vec<_> = kind.chain().skip(1).map(|k| k.name()).collect();
            if ancestors.is_empty() {
                kind.name().to_string()
            } else {
                format!("{} ({})", kind.name(), ancestors.join(" > "))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use widgetlens_core::Widget;

    fn reply(app: &mut App, line: &str) -> String {
        match app.execute(line) {
            Ok(Flow::Continue(text)) => text,
            other => panic!("unexpected result for {line:?}: {other:?}"),
        }
    }

    #[test]
    fn test_config_overrides() {
        let config = AppConfig::default().with_overrides(|name| match name {
            STAGE_WIDTH_VAR => Some("640".to_string()),
            STAGE_HEIGHT_VAR => Some("tall".to_string()),
            _ => None,
        });
        assert_eq!(config.stage_width, 640.0);
        assert_eq!(config.stage_height, 300.0);
    }

    #[test]
    fn test_kinds_lists_chain() {
        let text = list_kinds();
        assert!(text.contains("Button (Control > Container)"));
        assert!(text.lines().any(|line| line == "Container"));
    }

    #[test]
    fn test_set_requires_selection() {
        let mut app = App::new(AppConfig::default());
        assert!(matches!(
            app.execute("set text hi"),
            Err(CommandError::NoKindSelected)
        ));
    }

    #[test]
    fn test_select_and_edit() {
        let mut app = App::new(AppConfig::default());
        reply(&mut app, "select Label");
        assert_eq!(reply(&mut app, "set numberOfLines 3"), "applied");
        assert_eq!(reply(&mut app, "set text Hello world"), "applied");
        let Some(Widget::Label(label)) = app.session().instance() else {
            panic!("expected a label");
        };
        assert_eq!(label.number_of_lines, 3);
        assert_eq!(label.text.as_deref(), Some("Hello world"));
        assert!(reply(&mut app, "props").contains("layer.cornerRadius"));
    }

    #[test]
    fn test_foreign_property_is_ignored() {
        let mut app = App::new(AppConfig::default());
        reply(&mut app, "select Label");
        assert!(reply(&mut app, "set isOn true as Switch").starts_with("ignored"));
        assert!(matches!(
            app.execute("set isOn true"),
            Err(CommandError::UnknownProperty { .. })
        ));
    }

    #[test]
    fn test_replacement_is_reported() {
        let mut app = App::new(AppConfig::default());
        reply(&mut app, "select Button");
        let text = reply(&mut app, "set buttonType 99");
        assert!(text.starts_with("replaced"));
        assert!(text.contains("now editing"));
        assert!(app.events.borrow().is_empty());
    }

    #[test]
    fn test_stage_command_reframes() {
        let mut app = App::new(AppConfig::default());
        reply(&mut app, "select Container");
        assert_eq!(reply(&mut app, "stage 200 100"), "stage 200 x 100");
        assert!(reply(&mut app, "frame").ends_with("in 200 x 100"));
        let frame = app.session().stage().frame().unwrap();
        assert!((frame.width() - 180.0).abs() < 1e-9);
        assert!((frame.x0 - 10.0).abs() < 1e-9);
        assert_eq!(app.config.stage_size(), Size::new(200.0, 100.0));
    }

    #[test]
    fn test_text_keeps_interior_whitespace() {
        let mut app = App::new(AppConfig::default());
        reply(&mut app, "select Label");
        assert_eq!(reply(&mut app, "set text a   b"), "applied");
        let Some(Widget::Label(label)) = app.session().instance() else {
            panic!("expected a label");
        };
        assert_eq!(label.text.as_deref(), Some("a   b"));
    }

    #[test]
    fn test_run_loop() {
        let mut app = App::new(AppConfig {
            prompt: String::new(),
            ..AppConfig::default()
        });
        let input = "select Switch\nbogus\nset setOn on\nshow\nquit\nkinds\n";
        let mut output = Vec::new();
        app.run(input.as_bytes(), &mut output).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("error: Unknown command: bogus"));
        assert!(output.contains("\"is_on\": true"));
        assert!(!output.contains("Button (Control > Container)"));
    }
}
