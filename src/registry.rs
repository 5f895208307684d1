//! Module discovery and the name -> handler registry.

use crate::config::Config;
use crate::exceptions::HearthError;
use crate::module::{CommandModule, ModuleEntry, command_name};
use std::collections::HashMap;

/// Registered command modules, keyed by command name.
///
/// Listing follows registration order. Registering a name twice replaces the
/// handler but keeps the name's original position.
#[derive(Default)]
pub struct ModuleRegistry {
    order: Vec<String>,
    modules: HashMap<String, Box<dyn CommandModule>>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from `catalogue`, honoring the manifest in `config`.
    ///
    /// Candidates that cannot be resolved or constructed are logged and skipped.
    pub fn discover(catalogue: &[ModuleEntry], config: &Config) -> Self {
        let mut registry = Self::new();

        let candidates: Vec<Result<ModuleEntry, HearthError>> = match &config.modules {
            Some(selected) => selected
                .iter()
                .map(|identity| resolve(catalogue, identity))
                .collect(),
            None => catalogue.iter().copied().map(Ok).collect(),
        };

        for candidate in candidates {
            let loaded = candidate.and_then(|entry| {
                (entry.factory)(config)
                    .map(|module| (entry, module))
                    .map_err(|e| HearthError::ModuleLoad {
                        identity: entry.identity.to_string(),
                        reason: e.to_string(),
                    })
            });

            match loaded {
                Ok((entry, module)) => {
                    log::debug!("registered '{}' from {}", entry.command_name(), entry.identity);
                    registry.register(entry.command_name(), module);
                }
                Err(e) => log::warn!("{}", e),
            }
        }

        registry
    }

    /// Registers `module` under `name`, returning the handler it replaced.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        module: Box<dyn CommandModule>,
    ) -> Option<Box<dyn CommandModule>> {
        let name = name.into();
        let replaced = self.modules.insert(name.clone(), module);
        if replaced.is_some() {
            log::warn!("module '{}' registered twice; keeping the later one", name);
        } else {
            self.order.push(name);
        }
        replaced
    }

    pub fn contains(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&dyn CommandModule> {
        self.modules.get(name).map(|m| m.as_ref())
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut (dyn CommandModule + 'static)> {
        self.modules.get_mut(name).map(|m| m.as_mut())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// One ` - <name>` line per registered command, in registration order.
    pub fn list_commands(&self) -> String {
        self.names()
            .map(|name| format!(" - {}", name))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Finds a catalogue entry by identity or by its derived command name.
fn resolve(catalogue: &[ModuleEntry], wanted: &str) -> Result<ModuleEntry, HearthError> {
    catalogue
        .iter()
        .find(|entry| entry.identity == wanted || command_name(entry.identity) == wanted)
        .copied()
        .ok_or_else(|| HearthError::ModuleLoad {
            identity: wanted.to_string(),
            reason: "no such module".to_string(),
        })
}
