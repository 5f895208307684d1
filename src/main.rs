use clap::Parser;
use hearth::config::Config;
use hearth::console::Console;
use hearth::dispatch::Dispatcher;
use hearth::exceptions::HearthError;
use hearth::home::HomeProfile;
use hearth::registry::ModuleRegistry;
use hearth::shell::Shell;
use std::path::PathBuf;

// Use jemalloc on musl x86_64 for better performance
#[cfg(all(target_env = "musl", target_arch = "x86_64"))]
#[global_allocator]
static ALLOC: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[derive(Parser)]
#[command(
    name = "hearth",
    about = "A small home management shell for shopping lists and tasks",
    long_about = None,
    version = env!("CARGO_PKG_VERSION")
)]
struct Cli {
    /// Directory holding the home profile, module data and config.json
    #[arg(long, env = "HEARTH_DATA_DIR", value_hint = clap::ValueHint::DirPath)]
    data_dir: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Must happen while we are still single threaded
    hearth::utils::capture_local_offset();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), HearthError> {
    let config = Config::load(cli.data_dir)?;
    let registry = ModuleRegistry::discover(&hearth::modules::builtin_catalogue(), &config);

    let console = Console::new(std::io::stdin().lock(), std::io::stdout());
    let mut shell = Shell::new(config, Dispatcher::new(registry), console);

    let profile = shell.start()?;
    install_interrupt_handler(&profile);
    shell.run_loop(&profile)
}

fn install_interrupt_handler(profile: &HomeProfile) {
    let owner = profile.owner_name.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        println!("\nGoodbye, {}!", owner);
        std::process::exit(0);
    }) {
        log::warn!("could not install Ctrl-C handler: {}", e);
    }
}
