//! The Editor port: everything the session needs from the host editor

pub mod host;

use serde_json::{Map, Value};

use crate::error::SlidesError;
use crate::models::Settings;

/// Configuration supplied by the editor. Not persisted; read fresh each
/// time a session starts.
#[derive(Clone, Debug, Default)]
pub struct Configuration {
    pub theme: Option<String>,
    pub font_family: Option<String>,
    pub preview_markdown_files: bool,
    pub folder: String,
    pub editor_settings: Map<String, Value>,
}

/// Abstract host editor.
///
/// File and tab operations are async and assumed eventually consistent
/// with the host UI; message display is fire-and-forget.
pub trait Editor {
    async fn close_all_tabs(&mut self) -> Result<(), SlidesError>;
    async fn open_all_files(&mut self, configuration: &Configuration) -> Result<(), SlidesError>;
    async fn open_previous_file(&mut self) -> Result<(), SlidesError>;
    async fn open_next_file(&mut self) -> Result<(), SlidesError>;
    async fn preview_if_markdown(&mut self) -> Result<(), SlidesError>;
    async fn close_markdown_preview(&mut self) -> Result<(), SlidesError>;
    async fn hide_side_bar(&mut self) -> Result<(), SlidesError>;
    async fn show_side_bar(&mut self) -> Result<(), SlidesError>;
    async fn get_settings(&self) -> Result<Option<Settings>, SlidesError>;
    async fn set_settings(&mut self, settings: &str) -> Result<(), SlidesError>;
    fn show_error(&mut self, message: &str);
    fn show_message(&mut self, message: &str);
    fn configuration(&self) -> Configuration;
}
