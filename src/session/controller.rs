use log::debug;

use crate::editor::Editor;
use crate::error::SlidesError;
use crate::models::{settings, StatePatch};
use crate::storage::Repository;

/// Drives the session lifecycle: Inactive <-> Active, navigation while
/// active.
///
/// `toggle` and `start` absorb every failure into user-facing messages;
/// `exit`, `previous` and `next` delegate to the ports and let their
/// errors propagate.
pub struct SessionController<E, R> {
    editor: E,
    repository: R,
}

impl<E: Editor, R: Repository> SessionController<E, R> {
    pub fn new(editor: E, repository: R) -> Self {
        Self { editor, repository }
    }

    /// The external entry point: starts a session when inactive, ends
    /// the running one otherwise.
    pub async fn toggle(&mut self) -> Result<(), SlidesError> {
        if self.repository.get().await.is_active {
            self.exit().await
        } else {
            self.start().await;
            Ok(())
        }
    }

    /// Enter presentation mode.
    ///
    /// The session is marked active even when swapping settings or
    /// opening the slides fails, so a later `exit` can still restore the
    /// captured settings. A failed open additionally leaves the sidebar
    /// alone as a recovery aid.
    pub async fn start(&mut self) {
        if let Err(error) = self.swap_settings().await {
            self.editor
                .show_error(&format!("I failed to swap your settings because: {}", error));
            self.mark_active().await;
            return;
        }

        if let Err(error) = self.open_all_slides().await {
            self.editor
                .show_message("I kept the sidebar open so you can open files manually!");
            self.editor
                .show_error(&format!("I failed to open all slides because: {}", error));
            self.mark_active().await;
            return;
        }

        if let Err(error) = self.editor.hide_side_bar().await {
            self.editor
                .show_error(&format!("I failed to hide the sidebar because: {}", error));
        }
        self.mark_active().await;
    }

    /// Leave presentation mode and restore the captured settings. No-op
    /// when no session is active.
    pub async fn exit(&mut self) -> Result<(), SlidesError> {
        let state = self.repository.get().await;
        if !state.is_active {
            debug!("No active session, nothing to exit");
            return Ok(());
        }

        if let Some(settings) = state.settings {
            self.editor.set_settings(&settings).await?;
        }
        self.editor.show_side_bar().await?;
        self.repository.store(StatePatch::active(false)).await?;
        Ok(())
    }

    /// Go to the previous slide. No-op unless a session is active.
    pub async fn previous(&mut self) -> Result<(), SlidesError> {
        if !self.repository.get().await.is_active {
            return Ok(());
        }

        // Close a lingering preview first; two stacked markdown preview
        // panes glitch in the host.
        self.editor.close_markdown_preview().await?;
        self.editor.open_previous_file().await?;
        self.editor.preview_if_markdown().await
    }

    /// Go to the next slide. No-op unless a session is active.
    pub async fn next(&mut self) -> Result<(), SlidesError> {
        if !self.repository.get().await.is_active {
            return Ok(());
        }

        self.editor.close_markdown_preview().await?;
        self.editor.open_next_file().await?;
        self.editor.preview_if_markdown().await
    }

    async fn swap_settings(&mut self) -> Result<(), SlidesError> {
        let snapshot = self.editor.get_settings().await?;
        self.repository.store(StatePatch::settings(snapshot)).await?;

        let configuration = self.editor.configuration();
        let slide_settings = settings::slide_settings(&configuration)?;
        self.editor.set_settings(&slide_settings).await?;
        Ok(())
    }

    async fn open_all_slides(&mut self) -> Result<(), SlidesError> {
        let configuration = self.editor.configuration();
        self.editor.close_all_tabs().await?;
        self.editor.open_all_files(&configuration).await
    }

    async fn mark_active(&mut self) {
        if let Err(error) = self.repository.store(StatePatch::active(true)).await {
            self.editor.show_error(&format!(
                "I failed to save the session state because: {}",
                error
            ));
        }
    }

    pub fn into_parts(self) -> (E, R) {
        (self.editor, self.repository)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    use crate::editor::Configuration;
    use crate::models::{Settings, State};
    use crate::storage::InMemoryRepository;

    #[derive(Default)]
    struct FakeEditor {
        settings: Option<Settings>,
        configuration: Configuration,
        fail_open_files: bool,
        calls: Vec<&'static str>,
        errors: Vec<String>,
        messages: Vec<String>,
    }

    impl FakeEditor {
        fn with_settings(settings: &str) -> Self {
            Self {
                settings: Some(settings.to_string()),
                ..Self::default()
            }
        }

        fn that_cant_open_files() -> Self {
            Self {
                fail_open_files: true,
                ..Self::default()
            }
        }

        fn call_count(&self, name: &str) -> usize {
            self.calls.iter().filter(|c| **c == name).count()
        }
    }

    impl Editor for FakeEditor {
        async fn close_all_tabs(&mut self) -> Result<(), SlidesError> {
            self.calls.push("close_all_tabs");
            Ok(())
        }

        async fn open_all_files(
            &mut self,
            _configuration: &Configuration,
        ) -> Result<(), SlidesError> {
            self.calls.push("open_all_files");
            if self.fail_open_files {
                return Err(SlidesError::HostCommand {
                    command: "open".to_string(),
                    reason: "Files can't be open.".to_string(),
                });
            }
            Ok(())
        }

        async fn open_previous_file(&mut self) -> Result<(), SlidesError> {
            self.calls.push("open_previous_file");
            Ok(())
        }

        async fn open_next_file(&mut self) -> Result<(), SlidesError> {
            self.calls.push("open_next_file");
            Ok(())
        }

        async fn preview_if_markdown(&mut self) -> Result<(), SlidesError> {
            self.calls.push("preview_if_markdown");
            Ok(())
        }

        async fn close_markdown_preview(&mut self) -> Result<(), SlidesError> {
            self.calls.push("close_markdown_preview");
            Ok(())
        }

        async fn hide_side_bar(&mut self) -> Result<(), SlidesError> {
            self.calls.push("hide_side_bar");
            Ok(())
        }

        async fn show_side_bar(&mut self) -> Result<(), SlidesError> {
            self.calls.push("show_side_bar");
            Ok(())
        }

        async fn get_settings(&self) -> Result<Option<Settings>, SlidesError> {
            Ok(self.settings.clone())
        }

        async fn set_settings(&mut self, settings: &str) -> Result<(), SlidesError> {
            self.calls.push("set_settings");
            self.settings = Some(settings.to_string());
            Ok(())
        }

        fn show_error(&mut self, message: &str) {
            self.errors.push(message.to_string());
        }

        fn show_message(&mut self, message: &str) {
            self.messages.push(message.to_string());
        }

        fn configuration(&self) -> Configuration {
            self.configuration.clone()
        }
    }

    fn active_state() -> State {
        State {
            settings: None,
            is_active: true,
        }
    }

    #[tokio::test]
    async fn toggle_once_activates_and_captures_settings() {
        let mut controller = SessionController::new(
            FakeEditor::with_settings(r#"{"before": true}"#),
            InMemoryRepository::new(),
        );

        controller.toggle().await.unwrap();

        let (_, repository) = controller.into_parts();
        let state = repository.get().await;
        assert!(state.is_active);
        assert_eq!(state.settings.as_deref(), Some(r#"{"before": true}"#));
    }

    #[tokio::test]
    async fn toggle_twice_restores_the_captured_settings() {
        let mut controller = SessionController::new(
            FakeEditor::with_settings(r#"{"before": true}"#),
            InMemoryRepository::new(),
        );

        controller.toggle().await.unwrap();
        controller.toggle().await.unwrap();

        let (editor, repository) = controller.into_parts();
        assert!(!repository.get().await.is_active);
        assert_eq!(editor.settings.as_deref(), Some(r#"{"before": true}"#));
    }

    #[tokio::test]
    async fn start_applies_merged_slide_settings() {
        let editor = FakeEditor {
            settings: Some("{}".to_string()),
            configuration: Configuration {
                theme: Some("T".to_string()),
                font_family: Some("F".to_string()),
                preview_markdown_files: true,
                ..Configuration::default()
            },
            ..FakeEditor::default()
        };
        let mut controller = SessionController::new(editor, InMemoryRepository::new());

        controller.start().await;

        let (editor, _) = controller.into_parts();
        let applied: Value =
            serde_json::from_str(editor.settings.as_deref().unwrap()).unwrap();
        assert_eq!(applied["workbench.colorTheme"], json!("T"));
        assert_eq!(applied["editor.fontFamily"], json!("F"));
        assert_eq!(applied["terminal.integrated.fontFamily"], json!("F"));
        assert_eq!(applied[settings::MARKDOWN_PREVIEW_KEY], json!(true));
    }

    #[tokio::test]
    async fn start_closes_tabs_opens_files_and_hides_the_sidebar() {
        let mut controller =
            SessionController::new(FakeEditor::default(), InMemoryRepository::new());

        controller.start().await;

        let (editor, repository) = controller.into_parts();
        assert_eq!(editor.call_count("close_all_tabs"), 1);
        assert_eq!(editor.call_count("open_all_files"), 1);
        assert_eq!(editor.call_count("hide_side_bar"), 1);
        assert!(repository.get().await.is_active);
    }

    #[tokio::test]
    async fn failed_open_reports_both_messages() {
        let mut controller = SessionController::new(
            FakeEditor::that_cant_open_files(),
            InMemoryRepository::new(),
        );

        controller.start().await;

        let (editor, _) = controller.into_parts();
        assert!(editor
            .messages
            .iter()
            .any(|m| m.contains("kept the sidebar open")));
        assert!(editor
            .errors
            .iter()
            .any(|e| e.contains("Files can't be open.")));
    }

    #[tokio::test]
    async fn failed_open_leaves_the_sidebar_alone_but_still_activates() {
        let mut controller = SessionController::new(
            FakeEditor::that_cant_open_files(),
            InMemoryRepository::new(),
        );

        controller.start().await;

        let (editor, repository) = controller.into_parts();
        assert_eq!(editor.call_count("hide_side_bar"), 0);
        assert!(repository.get().await.is_active);
    }

    #[tokio::test]
    async fn navigation_is_a_no_op_while_inactive() {
        let mut controller =
            SessionController::new(FakeEditor::default(), InMemoryRepository::new());

        controller.previous().await.unwrap();
        controller.next().await.unwrap();

        let (editor, _) = controller.into_parts();
        assert!(editor.calls.is_empty());
    }

    #[tokio::test]
    async fn navigation_wraps_the_preview_around_the_move() {
        let mut controller = SessionController::new(
            FakeEditor::default(),
            InMemoryRepository::with_state(active_state()),
        );

        controller.next().await.unwrap();
        controller.previous().await.unwrap();

        let (editor, _) = controller.into_parts();
        assert_eq!(
            editor.calls,
            vec![
                "close_markdown_preview",
                "open_next_file",
                "preview_if_markdown",
                "close_markdown_preview",
                "open_previous_file",
                "preview_if_markdown",
            ]
        );
    }

    #[tokio::test]
    async fn exit_without_stored_settings_does_not_touch_them() {
        let mut controller = SessionController::new(
            FakeEditor::default(),
            InMemoryRepository::with_state(active_state()),
        );

        controller.exit().await.unwrap();

        let (editor, repository) = controller.into_parts();
        assert_eq!(editor.call_count("set_settings"), 0);
        assert_eq!(editor.call_count("show_side_bar"), 1);
        assert!(!repository.get().await.is_active);
    }

    #[tokio::test]
    async fn exit_restores_stored_settings_exactly_once() {
        let mut controller = SessionController::new(
            FakeEditor::default(),
            InMemoryRepository::with_state(State {
                settings: Some("{}".to_string()),
                is_active: true,
            }),
        );

        controller.exit().await.unwrap();

        let (editor, _) = controller.into_parts();
        assert_eq!(editor.call_count("set_settings"), 1);
        assert_eq!(editor.settings.as_deref(), Some("{}"));
    }

    #[tokio::test]
    async fn exit_while_inactive_is_a_no_op() {
        let mut controller =
            SessionController::new(FakeEditor::default(), InMemoryRepository::new());

        controller.exit().await.unwrap();

        let (editor, _) = controller.into_parts();
        assert!(editor.calls.is_empty());
    }
}
