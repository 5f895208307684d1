use hearth::config::Config;
use hearth::console::{Console, Prompt};
use hearth::dispatch::Dispatcher;
use hearth::exceptions::HearthError;
use hearth::home::HomeProfile;
use hearth::module::CommandModule;
use hearth::registry::ModuleRegistry;
use std::io::Cursor;
use std::path::Path;

pub type TestConsole = Console<Cursor<String>, Vec<u8>>;

#[allow(dead_code)]
pub fn console(input: &str) -> TestConsole {
    Console::new(Cursor::new(input.to_string()), Vec::new())
}

#[allow(dead_code)]
pub fn output(console: TestConsole) -> String {
    String::from_utf8(console.into_output()).unwrap()
}

#[allow(dead_code)]
pub fn seed_profile(root: &Path) {
    let profile = HomeProfile {
        home_name: "Cozy Cottage".into(),
        owner_name: "Alice".into(),
    };
    profile.save(&Config::new(root)).unwrap();
}

/// Dispatcher over the built-in modules with data stored under `root`.
#[allow(dead_code)]
pub fn builtin_dispatcher(root: &Path) -> Dispatcher {
    let config = Config::new(root);
    let registry = ModuleRegistry::discover(&hearth::modules::builtin_catalogue(), &config);
    Dispatcher::new(registry)
}

/// Runs one line and returns the output, panicking on dispatch errors.
#[allow(dead_code)]
pub fn run(dispatcher: &mut Dispatcher, line: &str) -> String {
    run_with_input(dispatcher, line, "")
}

#[allow(dead_code)]
pub fn run_with_input(dispatcher: &mut Dispatcher, line: &str, input: &str) -> String {
    let mut console = console(input);
    dispatcher
        .execute_command(line, &mut console)
        .unwrap()
        .unwrap_or_default()
}

/// Module that echoes its arguments, tagged so replacements can be told apart.
#[allow(dead_code)]
pub struct EchoModule(pub &'static str);

impl CommandModule for EchoModule {
    fn execute(&mut self, args: &[String], _prompt: &mut dyn Prompt) -> Result<String, HearthError> {
        Ok(format!("{}:{}", self.0, args.join(" ")))
    }
}

/// Module whose every invocation fails.
#[allow(dead_code)]
pub struct FailingModule;

impl CommandModule for FailingModule {
    fn execute(&mut self, _args: &[String], _prompt: &mut dyn Prompt) -> Result<String, HearthError> {
        Err(HearthError::InvalidInput("kaput".into()))
    }

    fn help(&self) -> String {
        "Always fails.".into()
    }
}

/// Module that succeeds without producing output.
#[allow(dead_code)]
pub struct SilentModule;

impl CommandModule for SilentModule {
    fn execute(&mut self, _args: &[String], _prompt: &mut dyn Prompt) -> Result<String, HearthError> {
        Ok(String::new())
    }
}
