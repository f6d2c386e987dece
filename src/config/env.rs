//! Environment variable handling

/// Environment variables for the slides controller
#[derive(Debug, Default, Clone)]
pub struct EnvVars {
    pub workspace: Option<String>,
    pub folder: Option<String>,
    pub theme: Option<String>,
    pub font_family: Option<String>,
    pub preview_markdown: Option<bool>,
    pub editor_settings: Option<String>,
    pub open_command: Option<String>,
    pub close_tabs_command: Option<String>,
    pub previous_command: Option<String>,
    pub next_command: Option<String>,
    pub preview_command: Option<String>,
    pub close_preview_command: Option<String>,
    pub hide_sidebar_command: Option<String>,
    pub show_sidebar_command: Option<String>,
    pub state_file: Option<String>,
}

/// Load configuration from environment variables
pub fn load_env_vars() -> EnvVars {
    let mut env = EnvVars::default();

    if let Ok(value) = std::env::var("SLIDES_WORKSPACE") {
        env.workspace = Some(value);
    }

    if let Ok(value) = std::env::var("SLIDES_FOLDER") {
        env.folder = Some(value);
    }

    if let Ok(value) = std::env::var("SLIDES_THEME") {
        env.theme = Some(value);
    }

    if let Ok(value) = std::env::var("SLIDES_FONT_FAMILY") {
        env.font_family = Some(value);
    }

    if let Ok(value) = std::env::var("SLIDES_PREVIEW_MARKDOWN") {
        if let Ok(enabled) = value.parse::<bool>() {
            env.preview_markdown = Some(enabled);
        } else if let Ok(enabled) = value.parse::<u8>() {
            // Also support numeric values (0/1)
            env.preview_markdown = Some(enabled != 0);
        }
    }

    if let Ok(value) = std::env::var("SLIDES_EDITOR_SETTINGS") {
        env.editor_settings = Some(value);
    }

    // Host command templates
    if let Ok(value) = std::env::var("SLIDES_OPEN_COMMAND") {
        env.open_command = Some(value);
    }

    if let Ok(value) = std::env::var("SLIDES_CLOSE_TABS_COMMAND") {
        env.close_tabs_command = Some(value);
    }

    if let Ok(value) = std::env::var("SLIDES_PREVIOUS_COMMAND") {
        env.previous_command = Some(value);
    }

    if let Ok(value) = std::env::var("SLIDES_NEXT_COMMAND") {
        env.next_command = Some(value);
    }

    if let Ok(value) = std::env::var("SLIDES_PREVIEW_COMMAND") {
        env.preview_command = Some(value);
    }

    if let Ok(value) = std::env::var("SLIDES_CLOSE_PREVIEW_COMMAND") {
        env.close_preview_command = Some(value);
    }

    if let Ok(value) = std::env::var("SLIDES_HIDE_SIDEBAR_COMMAND") {
        env.hide_sidebar_command = Some(value);
    }

    if let Ok(value) = std::env::var("SLIDES_SHOW_SIDEBAR_COMMAND") {
        env.show_sidebar_command = Some(value);
    }

    if let Ok(value) = std::env::var("SLIDES_STATE_FILE") {
        env.state_file = Some(value);
    }

    env
}
