use agenda::commands::Cli;
use agenda::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Structured logging only in debug mode; the message macros print
    // plain console output otherwise
    if is_debug_mode() {
        tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();
    }

    Cli::menu()
}
