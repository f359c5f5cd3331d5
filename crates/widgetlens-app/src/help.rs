//! Shell command reference.

/// One shell command and what it does.
#[derive(Debug, Clone)]
pub struct CommandHelp {
    pub usage: &'static str,
    pub description: &'static str,
}

impl CommandHelp {
    pub const fn new(usage: &'static str, description: &'static str) -> Self {
        Self { usage, description }
    }
}

/// Registry of all shell commands.
pub struct CommandRegistry;

impl CommandRegistry {
    /// Get all commands, in the order `help` lists them.
    pub fn all() -> Vec<CommandHelp> {
        vec![
            CommandHelp::new("kinds", "List widget kinds and their ancestors"),
            CommandHelp::new("select <Kind>", "Select a kind and preview a fresh instance"),
            CommandHelp::new("props", "List the editable properties of the selected kind"),
            CommandHelp::new(
                "set <property> <value> [as <Kind>]",
                "Edit a property, optionally naming the kind that declares it",
            ),
            CommandHelp::new("show", "Print the live instance as JSON"),
            CommandHelp::new("frame", "Print the live instance's frame on the stage"),
            CommandHelp::new("stage <width> <height>", "Resize the stage and re-frame the preview"),
            CommandHelp::new("help", "Show this list"),
            CommandHelp::new("quit", "Leave the shell"),
        ]
    }

    /// Format the reference as a table.
    pub fn render() -> String {
        let mut out = String::from("Commands:\n");
        for command in Self::all() {
            out.push_str(&format!("  {:36} {}\n", command.usage, command.description));
        }
        out.push_str("\nValues: #rrggbb, #rrggbbaa or none for colors; true/false/on/off for toggles;");
        out.push_str("\nnumbers or choice labels for selects; numbers otherwise.");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_command_is_listed() {
        let text = CommandRegistry::render();
        for command in CommandRegistry::all() {
            assert!(text.contains(command.usage));
        }
    }
}
