//! Merged configuration structure and validation

use std::path::PathBuf;

use log::warn;
use serde_json::{Map, Value};

use super::{CliArgs, EnvVars};
use crate::storage::manager::paths;

pub const DEFAULT_OPEN_COMMAND: &str = "code -r {file}";

/// Configuration structure that stores all presentation settings
#[derive(Clone, Debug)]
pub struct SlidesConfig {
    pub workspace: PathBuf,
    pub folder: String,
    pub theme: Option<String>,
    pub font_family: Option<String>,
    pub preview_markdown_files: bool,
    pub editor_settings: Map<String, Value>,

    // Host command templates
    pub open_command: String,
    pub close_tabs_command: Option<String>,
    pub previous_command: Option<String>,
    pub next_command: Option<String>,
    pub preview_command: Option<String>,
    pub close_preview_command: Option<String>,
    pub hide_sidebar_command: Option<String>,
    pub show_sidebar_command: Option<String>,

    pub state_file: String,
}

impl SlidesConfig {
    /// Create a new configuration by combining CLI arguments and environment variables
    pub fn new(cli_args: CliArgs, env_vars: EnvVars) -> Self {
        let workspace = env_vars
            .workspace
            .or(cli_args.workspace)
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
            });

        let folder = env_vars.folder.or(cli_args.folder).unwrap_or_default();

        let theme = env_vars.theme.or(cli_args.theme);
        let font_family = env_vars.font_family.or(cli_args.font_family);
        let preview_markdown_files = env_vars
            .preview_markdown
            .unwrap_or(cli_args.preview_markdown);

        let editor_settings = env_vars
            .editor_settings
            .or(cli_args.editor_settings)
            .map(|raw| parse_editor_settings(&raw))
            .unwrap_or_default();

        let open_command = env_vars
            .open_command
            .or(cli_args.open_command)
            .unwrap_or_else(|| DEFAULT_OPEN_COMMAND.to_string());

        let close_tabs_command = env_vars.close_tabs_command.or(cli_args.close_tabs_command);
        let previous_command = env_vars.previous_command.or(cli_args.previous_command);
        let next_command = env_vars.next_command.or(cli_args.next_command);
        let preview_command = env_vars.preview_command.or(cli_args.preview_command);
        let close_preview_command = env_vars
            .close_preview_command
            .or(cli_args.close_preview_command);
        let hide_sidebar_command = env_vars
            .hide_sidebar_command
            .or(cli_args.hide_sidebar_command);
        let show_sidebar_command = env_vars
            .show_sidebar_command
            .or(cli_args.show_sidebar_command);

        let state_file = env_vars
            .state_file
            .or(cli_args.state_file)
            .unwrap_or_else(|| paths::STATE_FILE.to_string());

        Self {
            workspace,
            folder,
            theme,
            font_family,
            preview_markdown_files,
            editor_settings,
            open_command,
            close_tabs_command,
            previous_command,
            next_command,
            preview_command,
            close_preview_command,
            hide_sidebar_command,
            show_sidebar_command,
            state_file,
        }
    }

    /// Validate the configuration, returning every problem at once.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !self.workspace.is_dir() {
            errors.push(format!(
                "Workspace folder {:?} does not exist",
                self.workspace
            ));
        } else if !self.folder.is_empty() && !self.workspace.join(&self.folder).is_dir() {
            errors.push(format!(
                "Slide folder {:?} does not exist under workspace {:?}",
                self.folder, self.workspace
            ));
        }

        if self.open_command.trim().is_empty() {
            errors.push("The open command must not be empty".to_string());
        } else if !self.open_command.contains("{file}") {
            errors.push(format!(
                "The open command {:?} has no {{file}} placeholder",
                self.open_command
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn parse_editor_settings(raw: &str) -> Map<String, Value> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => map,
        Ok(_) => {
            warn!("Editor settings must be a JSON object, ignoring: {}", raw);
            Map::new()
        }
        Err(e) => {
            warn!("Could not parse editor settings, ignoring them: {}", e);
            Map::new()
        }
    }
}
