pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod light;
pub mod models;
pub mod resolve;
pub mod setup;

use cli::output::print_error;
use config::{OutputMode, RuntimeConfig};
use error::AppError;

pub async fn run(cli_args: cli::Cli) -> i32 {
    let config = RuntimeConfig {
        output_mode: if cli_args.table {
            OutputMode::Table
        } else {
            OutputMode::Json
        },
    };

    let result = dispatch(cli_args.command, &config).await;

    match result {
        Ok(()) => 0,
        Err(err) => {
            print_error(&err);
            err.exit_code()
        }
    }
}

async fn dispatch(command: cli::Commands, config: &RuntimeConfig) -> Result<(), AppError> {
    match command {
        cli::Commands::Setup { url } => cli::setup::handle(url.as_deref(), config).await,
        cli::Commands::Entries(cmd) => cli::entries::handle(&cmd, config).await,
        cli::Commands::Info { device } => {
            cli::light::handle_info(device.as_deref(), config).await
        }
        cli::Commands::State { device } => {
            cli::light::handle_state(device.as_deref(), config).await
        }
        cli::Commands::On(args) => cli::light::handle_on(&args, config).await,
        cli::Commands::Off { device } => cli::light::handle_off(device.as_deref(), config).await,
        cli::Commands::Watch(args) => cli::light::handle_watch(&args, config).await,
    }
}

/// Install the global logger. `RUST_LOG` wins over `--verbose`.
pub fn init_logging(verbose: bool) {
    let default_filter = if verbose { "ohmled=debug" } else { "ohmled=warn" };
    let env = env_logger::Env::default().default_filter_or(default_filter);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
