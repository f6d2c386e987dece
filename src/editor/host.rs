use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, error, info};
use tokio::process::Command;
use tokio::time::sleep;

use crate::config::SlidesConfig;
use crate::editor::{Configuration, Editor};
use crate::error::SlidesError;
use crate::models::Settings;
use crate::utils::folder::Folder;

// Where the host editor keeps its workspace settings.
const SETTINGS_FILE: &str = ".vscode/settings.json";

// The host offers no completion signal for spawned UI commands, so give
// it a moment to catch up after each one.
const CLOSE_TABS_DELAY: Duration = Duration::from_millis(100);
const OPEN_FILE_DELAY: Duration = Duration::from_millis(50);
const APPLY_SETTINGS_DELAY: Duration = Duration::from_millis(200);

/// Editor adapter that drives the host through configured shell
/// commands and plain file I/O on its workspace settings file.
///
/// Tab state (the open slides, the active one, a previewed markdown
/// file) only lives in-process; one-shot invocations fall back to the
/// configured navigation commands.
pub struct HostEditor {
    root_folder: Folder,
    config: SlidesConfig,
    open_files: Vec<PathBuf>,
    active_index: usize,
    previewed_markdown: Option<PathBuf>,
}

impl HostEditor {
    pub fn new(config: SlidesConfig) -> Self {
        Self {
            root_folder: Folder::new(config.workspace.clone()),
            config,
            open_files: Vec::new(),
            active_index: 0,
            previewed_markdown: None,
        }
    }

    fn settings_path(&self) -> PathBuf {
        self.root_folder.path_to(SETTINGS_FILE)
    }

    fn active_file(&self) -> Option<&PathBuf> {
        self.open_files.get(self.active_index)
    }

    /// Run a host command template, substituting `{file}`.
    async fn run_host_command(
        &self,
        template: &str,
        file: Option<&Path>,
    ) -> Result<(), SlidesError> {
        let mut parts = template.split_whitespace().map(|part| {
            if part == "{file}" {
                file.map(|f| f.to_string_lossy().into_owned())
                    .unwrap_or_else(|| part.to_string())
            } else {
                part.to_string()
            }
        });

        let program = parts.next().ok_or_else(|| SlidesError::HostCommand {
            command: template.to_string(),
            reason: "empty command template".to_string(),
        })?;

        debug!("Running host command: {}", template);
        let status = Command::new(&program)
            .args(parts)
            .status()
            .await
            .map_err(|e| SlidesError::HostCommand {
                command: template.to_string(),
                reason: e.to_string(),
            })?;

        if !status.success() {
            return Err(SlidesError::HostCommand {
                command: template.to_string(),
                reason: format!("exited with {}", status),
            });
        }
        Ok(())
    }

    /// Run an optional host command, skipping quietly when none is
    /// configured for the action.
    async fn maybe_run(&self, action: &str, template: &Option<String>) -> Result<(), SlidesError> {
        match template {
            Some(template) => self.run_host_command(template, None).await,
            None => {
                debug!("No host command configured for {}, skipping", action);
                Ok(())
            }
        }
    }

    async fn open_file(&self, file: &Path) -> Result<(), SlidesError> {
        self.run_host_command(&self.config.open_command, Some(file))
            .await?;
        sleep(OPEN_FILE_DELAY).await;
        Ok(())
    }

    /// Move the active slide by `step` (wrapping), preferring a
    /// configured host navigation command over reopening the file.
    async fn navigate(
        &mut self,
        action: &str,
        template: &Option<String>,
        step: isize,
    ) -> Result<(), SlidesError> {
        if let Some(template) = template {
            return self.run_host_command(template, None).await;
        }

        if self.open_files.is_empty() {
            debug!("No open slides tracked in this process, skipping {}", action);
            return Ok(());
        }

        let count = self.open_files.len() as isize;
        self.active_index =
            ((self.active_index as isize + step).rem_euclid(count)) as usize;

        let file = self.open_files[self.active_index].clone();
        self.open_file(&file).await
    }
}

fn is_markdown(file: &Path) -> bool {
    matches!(
        file.extension().and_then(|e| e.to_str()),
        Some("md") | Some("markdown")
    )
}

impl Editor for HostEditor {
    async fn close_all_tabs(&mut self) -> Result<(), SlidesError> {
        self.maybe_run("close-all-tabs", &self.config.close_tabs_command)
            .await?;
        sleep(CLOSE_TABS_DELAY).await;
        self.open_files.clear();
        self.active_index = 0;
        Ok(())
    }

    async fn open_all_files(&mut self, configuration: &Configuration) -> Result<(), SlidesError> {
        let slides_folder = self.root_folder.go_to(&configuration.folder);
        let files = slides_folder.visible_files()?;

        if files.is_empty() {
            return Err(SlidesError::EmptySlideFolder(
                slides_folder.path().to_path_buf(),
            ));
        }

        info!("Opening {} slides from {:?}", files.len(), slides_folder.path());
        for file in &files {
            self.open_file(file).await?;
        }

        // Focus the first slide again so the deck starts at the top.
        if let Some(first) = files.first() {
            self.open_file(first).await?;
        }

        self.open_files = files;
        self.active_index = 0;
        Ok(())
    }

    async fn open_previous_file(&mut self) -> Result<(), SlidesError> {
        let template = self.config.previous_command.clone();
        self.navigate("previous", &template, -1).await
    }

    async fn open_next_file(&mut self) -> Result<(), SlidesError> {
        let template = self.config.next_command.clone();
        self.navigate("next", &template, 1).await
    }

    async fn preview_if_markdown(&mut self) -> Result<(), SlidesError> {
        if !self.config.preview_markdown_files {
            return Ok(());
        }

        let Some(active) = self.active_file().cloned() else {
            return Ok(());
        };
        if !is_markdown(&active) {
            return Ok(());
        }

        self.maybe_run("markdown-preview", &self.config.preview_command)
            .await?;
        self.previewed_markdown = Some(active);
        Ok(())
    }

    async fn close_markdown_preview(&mut self) -> Result<(), SlidesError> {
        if self.previewed_markdown.take().is_some() {
            self.maybe_run("close-markdown-preview", &self.config.close_preview_command)
                .await?;
        }
        Ok(())
    }

    async fn hide_side_bar(&mut self) -> Result<(), SlidesError> {
        self.maybe_run("hide-sidebar", &self.config.hide_sidebar_command)
            .await
    }

    async fn show_side_bar(&mut self) -> Result<(), SlidesError> {
        self.maybe_run("show-sidebar", &self.config.show_sidebar_command)
            .await
    }

    async fn get_settings(&self) -> Result<Option<Settings>, SlidesError> {
        if !self.root_folder.path().is_dir() {
            return Err(SlidesError::MissingWorkspace(
                self.root_folder.path().to_path_buf(),
            ));
        }

        let path = self.settings_path();
        if !path.exists() {
            // Nothing customized yet; restore to an empty settings file.
            return Ok(Some("{}".to_string()));
        }

        let contents = tokio::fs::read_to_string(&path).await?;
        Ok(Some(contents))
    }

    async fn set_settings(&mut self, settings: &str) -> Result<(), SlidesError> {
        let path = self.settings_path();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&path, settings).await?;
        debug!("Wrote editor settings to {:?}", path);

        // Give the host a moment to adopt the new settings file.
        sleep(APPLY_SETTINGS_DELAY).await;
        Ok(())
    }

    fn show_error(&mut self, message: &str) {
        error!("{}", message);
    }

    fn show_message(&mut self, message: &str) {
        info!("{}", message);
    }

    fn configuration(&self) -> Configuration {
        Configuration {
            theme: self.config.theme.clone(),
            font_family: self.config.font_family.clone(),
            preview_markdown_files: self.config.preview_markdown_files,
            folder: self.config.folder.clone(),
            editor_settings: self.config.editor_settings.clone(),
        }
    }
}
