//! Configuration module that handles all application settings

mod cli;
mod env;
mod slides;

pub use cli::{CliArgs, SessionCommand};
pub use env::{load_env_vars, EnvVars};
pub use slides::SlidesConfig;

/// Initialize configuration from all sources (CLI, environment, etc.)
pub fn init_config() -> (SlidesConfig, SessionCommand) {
    // Parse CLI args first
    let cli_args = CliArgs::parse();

    // Load environment variables
    let env_vars = load_env_vars();

    let command = cli_args.command.clone();

    // Create SlidesConfig by combining CLI args and environment variables
    (SlidesConfig::new(cli_args, env_vars), command)
}
