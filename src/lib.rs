pub mod config;
pub mod console;
pub mod dispatch;
pub mod exceptions;
pub mod fs;
pub mod home;
pub mod module;
pub mod modules;
pub mod registry;
pub mod shell;
pub mod table;
pub mod utils;
