use clap::Parser;
use checklist::cli::commands::Cli;
use checklist::io::config_io::load_config;
use checklist::io::log::init_logging;

fn main() {
    let cli = Cli::parse();

    let mut config = match load_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };
    cli.apply_overrides(&mut config);

    // Dropped before exit so buffered log lines get flushed
    let log_guard = match init_logging(&config.log) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let result = checklist::tui::run(config);
    drop(log_guard);

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
