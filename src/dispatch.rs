use crate::console::Prompt;
use crate::exceptions::HearthError;
use crate::registry::ModuleRegistry;

pub const BUILTIN_HELP: &str = concat!(
    "Available commands:\n",
    " - help [command]: Show this help message or help for a specific command\n",
    " - list: List all available commands\n",
    " - exit: Exit the system\n",
    "\n",
    "For detailed help on a specific command, type: help <command>"
);

/// Routes command lines to registered modules.
pub struct Dispatcher {
    registry: ModuleRegistry,
}

impl Dispatcher {
    pub fn new(registry: ModuleRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    /// Executes one command line.
    ///
    /// Returns `Ok(None)` when there is nothing to print. Unknown commands,
    /// unknown help topics and module failures come back as errors for the
    /// caller to report; the registry is left untouched in every case.
    pub fn execute_command(
        &mut self,
        line: &str,
        prompt: &mut dyn Prompt,
    ) -> Result<Option<String>, HearthError> {
        let mut tokens = line.split_whitespace();
        let Some(command_name) = tokens.next() else {
            return Ok(None);
        };
        let command_args: Vec<String> = tokens.map(str::to_string).collect();

        if command_name == "help" {
            return self.help(command_args.first().map(String::as_str)).map(Some);
        }

        let module = self
            .registry
            .get_mut(command_name)
            .ok_or_else(|| HearthError::UnknownCommand(command_name.to_string()))?;

        let output = module
            .execute(&command_args, prompt)
            .map_err(|e| HearthError::Execution {
                command: command_name.to_string(),
                reason: e.to_string(),
            })?;

        Ok(if output.is_empty() { None } else { Some(output) })
    }

    pub fn help(&self, topic: Option<&str>) -> Result<String, HearthError> {
        let Some(name) = topic else {
            return Ok(BUILTIN_HELP.to_string());
        };
        let module = self
            .registry
            .get(name)
            .ok_or_else(|| HearthError::UnknownHelpTopic(name.to_string()))?;
        Ok(format!("Help for '{}' command:\n{}", name, module.help()))
    }
}

/// Formats a dispatch failure for display in the shell.
pub fn report(error: &HearthError) -> String {
    match error {
        HearthError::Execution { .. } => error.to_string(),
        _ => format!("Error: {}", error),
    }
}
