use crate::config::Config;
use crate::console::Console;
use crate::dispatch::{Dispatcher, report};
use crate::exceptions::HearthError;
use crate::home::HomeProfile;
use std::io::{BufRead, Write};

/// The interactive read-dispatch-print loop.
pub struct Shell<R, W> {
    config: Config,
    dispatcher: Dispatcher,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(config: Config, dispatcher: Dispatcher, console: Console<R, W>) -> Self {
        Self {
            config,
            dispatcher,
            console,
        }
    }

    pub fn run(&mut self) -> Result<(), HearthError> {
        let profile = self.start()?;
        self.run_loop(&profile)
    }

    /// Loads (or creates) the home profile and greets the owner.
    pub fn start(&mut self) -> Result<HomeProfile, HearthError> {
        let profile = HomeProfile::load_or_onboard(&self.config, &mut self.console)?;
        crate::console::clear_screen();
        self.console.println(&format!(
            "Welcome to {}, {}. Type 'help' for assistance or 'exit' to quit.",
            profile.home_name, profile.owner_name
        ))?;
        Ok(profile)
    }

    /// Reads commands until `exit` or end of input.
    pub fn run_loop(&mut self, profile: &HomeProfile) -> Result<(), HearthError> {
        loop {
            self.console.print("> ")?;
            let Some(line) = self.console.read_line()? else {
                self.console
                    .println(&format!("\nGoodbye, {}!", profile.owner_name))?;
                return Ok(());
            };

            match line.trim() {
                "exit" => {
                    self.console
                        .println(&format!("Goodbye, {}!", profile.owner_name))?;
                    return Ok(());
                }
                "list" => {
                    let listing = self.dispatcher.registry().list_commands();
                    if !listing.is_empty() {
                        self.console.println(&listing)?;
                    }
                }
                command_line => {
                    match self
                        .dispatcher
                        .execute_command(command_line, &mut self.console)
                    {
                        Ok(Some(output)) => self.console.println(&output)?,
                        Ok(None) => {}
                        Err(e) => self.console.println(&report(&e))?,
                    }
                }
            }
        }
    }

    pub fn into_output(self) -> W {
        self.console.into_output()
    }
}
