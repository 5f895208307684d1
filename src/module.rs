use crate::config::Config;
use crate::console::Prompt;
use crate::exceptions::HearthError;

pub const DEFAULT_HELP: &str = "No help information available.";

/// Conventional suffix of module identities, stripped to form the command name.
pub const MODULE_SUFFIX: &str = "_module";

/// A pluggable handler for one command namespace.
pub trait CommandModule {
    /// Runs the command with its positional arguments (command name excluded).
    ///
    /// Modules may ask follow-up questions through `prompt`, typically when a
    /// subcommand is given without arguments.
    fn execute(&mut self, args: &[String], prompt: &mut dyn Prompt) -> Result<String, HearthError>;

    fn help(&self) -> String {
        DEFAULT_HELP.to_string()
    }
}

pub type ModuleFactory = fn(&Config) -> Result<Box<dyn CommandModule>, HearthError>;

/// A discoverable module: its declared identity and how to construct it.
#[derive(Clone, Copy)]
pub struct ModuleEntry {
    pub identity: &'static str,
    pub factory: ModuleFactory,
}

impl ModuleEntry {
    pub const fn new(identity: &'static str, factory: ModuleFactory) -> Self {
        Self { identity, factory }
    }

    pub fn command_name(&self) -> &'static str {
        command_name(self.identity)
    }
}

impl std::fmt::Debug for ModuleEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleEntry")
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}

/// Derives the command name from a module identity (`sl_module` -> `sl`).
pub fn command_name(identity: &str) -> &str {
    identity.strip_suffix(MODULE_SUFFIX).unwrap_or(identity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_name_strips_suffix() {
        assert_eq!(command_name("sl_module"), "sl");
        assert_eq!(command_name("task_module"), "task");
        assert_eq!(command_name("weather"), "weather");
    }
}
