use crate::config::Config;
use crate::console::Prompt;
use crate::exceptions::HearthError;
use crate::module::CommandModule;

pub const IDENTITY: &str = "test_module";

const HELP: &str = r#"A simple test module that greets users.

Usage: test [name]
If no name is provided, defaults to "Stranger"

Examples:
> test
> test Alice"#;

pub fn factory(_config: &Config) -> Result<Box<dyn CommandModule>, HearthError> {
    Ok(Box::new(Greeter))
}

pub struct Greeter;

impl CommandModule for Greeter {
    fn execute(&mut self, args: &[String], _prompt: &mut dyn Prompt) -> Result<String, HearthError> {
        let name = args.first().map(String::as_str).unwrap_or("Stranger");
        Ok(format!("Hello, {}!", name))
    }

    fn help(&self) -> String {
        HELP.to_string()
    }
}
