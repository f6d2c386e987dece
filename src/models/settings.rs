use once_cell::sync::Lazy;
use serde_json::{json, Map, Value};

use crate::editor::Configuration;

/// Settings key carrying the markdown-preview flag into the host editor.
pub const MARKDOWN_PREVIEW_KEY: &str = "slides.previewMarkdownFiles";

// Built-in settings applied while presenting: big fonts, no chrome.
static DEFAULT_SETTINGS: Lazy<Map<String, Value>> = Lazy::new(|| {
    let mut settings = Map::new();
    settings.insert("workbench.colorTheme".into(), json!("Visual Studio Dark"));
    settings.insert(
        "editor.fontFamily".into(),
        json!("Menlo, Monaco, 'Courier New', monospace"),
    );
    settings.insert(
        "terminal.integrated.fontFamily".into(),
        json!("Menlo, Monaco, 'Courier New', monospace"),
    );
    settings.insert("editor.fontSize".into(), json!(36));
    settings.insert("terminal.integrated.fontSize".into(), json!(24));
    settings.insert("editor.lineNumbers".into(), json!("off"));
    settings.insert("editor.minimap.enabled".into(), json!(false));
    settings.insert("editor.renderLineHighlight".into(), json!("none"));
    settings.insert("workbench.statusBar.visible".into(), json!(false));
    settings.insert("workbench.activityBar.visible".into(), json!(false));
    settings.insert("breadcrumbs.enabled".into(), json!(false));
    settings
});

/// Compute the settings payload handed to the editor when a session
/// starts.
///
/// Merge order: built-in defaults, then the configured theme and font
/// (only when non-empty), then the markdown-preview flag, then every
/// truthy entry of the free-form editor settings map. Falsy overrides
/// (`null`, `false`, `""`, `0`) never clobber a default.
pub fn slide_settings(configuration: &Configuration) -> Result<String, serde_json::Error> {
    let mut settings = DEFAULT_SETTINGS.clone();

    if let Some(theme) = configured(&configuration.theme) {
        settings.insert("workbench.colorTheme".into(), json!(theme));
    }

    if let Some(font) = configured(&configuration.font_family) {
        settings.insert("editor.fontFamily".into(), json!(font));
        settings.insert("terminal.integrated.fontFamily".into(), json!(font));
    }

    settings.insert(
        MARKDOWN_PREVIEW_KEY.into(),
        json!(configuration.preview_markdown_files),
    );

    for (key, value) in &configuration.editor_settings {
        if is_truthy(value) {
            settings.insert(key.clone(), value.clone());
        }
    }

    serde_json::to_string_pretty(&Value::Object(settings))
}

fn configured(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(configuration: &Configuration) -> Map<String, Value> {
        let payload = slide_settings(configuration).unwrap();
        serde_json::from_str::<Value>(&payload)
            .unwrap()
            .as_object()
            .unwrap()
            .clone()
    }

    #[test]
    fn defaults_apply_without_configuration() {
        let settings = parsed(&Configuration::default());

        assert_eq!(settings["workbench.colorTheme"], json!("Visual Studio Dark"));
        assert_eq!(settings["editor.fontSize"], json!(36));
        assert_eq!(settings[MARKDOWN_PREVIEW_KEY], json!(false));
    }

    #[test]
    fn theme_and_font_override_defaults() {
        let configuration = Configuration {
            theme: Some("T".to_string()),
            font_family: Some("F".to_string()),
            preview_markdown_files: true,
            ..Configuration::default()
        };

        let settings = parsed(&configuration);

        assert_eq!(settings["workbench.colorTheme"], json!("T"));
        assert_eq!(settings["editor.fontFamily"], json!("F"));
        assert_eq!(settings["terminal.integrated.fontFamily"], json!("F"));
        assert_eq!(settings[MARKDOWN_PREVIEW_KEY], json!(true));
    }

    #[test]
    fn empty_overrides_keep_defaults() {
        let configuration = Configuration {
            theme: Some(String::new()),
            font_family: None,
            ..Configuration::default()
        };

        let settings = parsed(&configuration);

        assert_eq!(settings["workbench.colorTheme"], json!("Visual Studio Dark"));
        assert_eq!(
            settings["editor.fontFamily"],
            json!("Menlo, Monaco, 'Courier New', monospace")
        );
    }

    #[test]
    fn editor_settings_pass_through_only_when_truthy() {
        let mut editor_settings = Map::new();
        editor_settings.insert("zenMode.hideTabs".into(), json!(true));
        editor_settings.insert("editor.fontSize".into(), json!(48));
        editor_settings.insert("workbench.colorTheme".into(), json!(""));
        editor_settings.insert("editor.minimap.enabled".into(), json!(null));

        let configuration = Configuration {
            editor_settings,
            ..Configuration::default()
        };

        let settings = parsed(&configuration);

        assert_eq!(settings["zenMode.hideTabs"], json!(true));
        assert_eq!(settings["editor.fontSize"], json!(48));
        assert_eq!(settings["workbench.colorTheme"], json!("Visual Studio Dark"));
        assert_eq!(settings["editor.minimap.enabled"], json!(false));
    }
}
