mod config;
mod editor;
mod error;
mod models;
mod session;
mod storage;
mod utils;

use chrono::Local;
use colored::*;
use config::{init_config, SessionCommand};
use editor::host::HostEditor;
use editor::Editor;
use env_logger::Builder;
use error::SlidesError;
use log::{error, info, LevelFilter};
use session::SessionController;
use std::io::Write;
use storage::{FileRepository, Repository, StorageManager};
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize the logger with a custom format that includes timestamps and colors
    Builder::new()
        .format(|buf, record| {
            // Color based on log level
            let level = match record.level() {
                log::Level::Error => record.level().to_string().red().bold(),
                log::Level::Warn => record.level().to_string().yellow().bold(),
                log::Level::Info => record.level().to_string().green(),
                log::Level::Debug => record.level().to_string().blue(),
                log::Level::Trace => record.level().to_string().purple(),
            };

            // Apply appropriate colors to the message based on level
            let message = match record.level() {
                log::Level::Error => record.args().to_string().red(),
                log::Level::Warn => record.args().to_string().yellow(),
                log::Level::Info => record.args().to_string().normal(),
                log::Level::Debug => record.args().to_string().blue(),
                log::Level::Trace => record.args().to_string().purple(),
            };

            writeln!(
                buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                level,
                message
            )
        })
        .filter(None, LevelFilter::Info) // Set default log level to Info
        .parse_env("RUST_LOG") // Allow overriding with RUST_LOG environment variable
        .init();

    // Initialize configuration
    let (slides_config, command) = init_config();

    // Validate configuration
    if let Err(errors) = slides_config.validate() {
        for error in errors {
            error!("{}", error);
        }
        std::process::exit(1);
    }

    let storage_manager = StorageManager::new(&slides_config.workspace);
    let repository = FileRepository::with_file(storage_manager, slides_config.state_file.clone());
    let editor = HostEditor::new(slides_config);
    let mut controller = SessionController::new(editor, repository);

    let result = match command {
        SessionCommand::Toggle(_) => controller.toggle().await,
        SessionCommand::Previous(_) => controller.previous().await,
        SessionCommand::Next(_) => controller.next().await,
        SessionCommand::Exit(_) => controller.exit().await,
        SessionCommand::Present(_) => present(&mut controller).await,
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}

/// Host a whole session in one process, reading navigation commands
/// from stdin until the presenter quits.
async fn present<E: Editor, R: Repository>(
    controller: &mut SessionController<E, R>,
) -> Result<(), SlidesError> {
    controller.toggle().await?;
    info!("Presenting. Commands: n(ext), p(revious), t(oggle), q(uit)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "n" | "next" => controller.next().await?,
            "p" | "prev" | "previous" => controller.previous().await?,
            "t" | "toggle" => controller.toggle().await?,
            "q" | "quit" | "exit" => break,
            "" => {}
            other => info!("Unknown command '{}'. Use n, p, t or q.", other),
        }
    }

    controller.exit().await
}
