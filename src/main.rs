use anyhow::Result;
use clap::Parser;
use fitstate::app::App;
use fitstate::cli::{completions, no_color_requested, Cli, Commands};
use fitstate::styles::init_theme;
use fitstate::utils::get_log_dir;
use tracing::info;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal state before handling panic
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen
        );
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = &cli.command {
        return completions::generate(*shell, &mut std::io::stdout());
    }

    setup_panic_hook();

    // Set up logging directory
    let log_dir = get_log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("fitstate.log");

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::never(&log_dir, "fitstate.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false) // Disable ANSI colors in file
        .init();

    // Print log location before TUI starts (this will be visible briefly)
    eprintln!("Logs are being written to: {:?}", log_file);
    info!(version = env!("CARGO_PKG_VERSION"), "Starting fitstate");

    let no_color_env = no_color_requested(std::env::var("NO_COLOR").ok().as_deref());
    let (config, config_path) = cli.launch_options().load_config(no_color_env)?;
    init_theme(config.theme_type());

    let mut app = App::new(config, config_path)?;
    let result = app.run();
    drop(app);

    info!("Exiting");
    drop(guard);

    result
}
