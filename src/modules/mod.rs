pub mod greeter;
pub mod shopping;
pub mod store;
pub mod tasks;

use crate::module::ModuleEntry;

/// Every module shipped with the shell, in default load order.
///
/// To add a module, implement [`crate::module::CommandModule`] in a new file
/// here, expose a factory and append its entry below.
pub fn builtin_catalogue() -> Vec<ModuleEntry> {
    vec![
        ModuleEntry::new(shopping::IDENTITY, shopping::factory),
        ModuleEntry::new(tasks::IDENTITY, tasks::factory),
        ModuleEntry::new(greeter::IDENTITY, greeter::factory),
    ]
}
