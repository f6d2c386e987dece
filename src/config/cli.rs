//! Command-line argument parsing

/// Command-line arguments for the slides controller
#[derive(argh::FromArgs, Debug)]
/// Present a folder of files in your editor.
///
/// Swaps the editor settings for presentation-friendly ones, opens every
/// slide in the configured folder and restores everything on exit.
pub struct CliArgs {
    #[argh(option, short = 'w')]
    /// workspace root. Default: current directory
    pub workspace: Option<String>,

    #[argh(option, short = 'f')]
    /// folder of slide files, relative to the workspace root. Default: workspace root
    pub folder: Option<String>,

    #[argh(option)]
    /// color theme applied while presenting
    pub theme: Option<String>,

    #[argh(option)]
    /// font family applied while presenting (editor and terminal)
    pub font_family: Option<String>,

    #[argh(switch)]
    /// preview markdown slides instead of showing their source
    pub preview_markdown: bool,

    #[argh(option)]
    /// free-form editor settings overrides as a JSON object,
    /// e.g. '{"zenMode.hideTabs": true}'
    pub editor_settings: Option<String>,

    #[argh(option)]
    /// host command opening one slide; "{file}" is replaced by the path.
    /// Default: "code -r {file}"
    pub open_command: Option<String>,

    #[argh(option)]
    /// host command closing all editor tabs
    pub close_tabs_command: Option<String>,

    #[argh(option)]
    /// host command focusing the previous editor tab
    pub previous_command: Option<String>,

    #[argh(option)]
    /// host command focusing the next editor tab
    pub next_command: Option<String>,

    #[argh(option)]
    /// host command opening a markdown preview for the active file
    pub preview_command: Option<String>,

    #[argh(option)]
    /// host command closing the markdown preview again
    pub close_preview_command: Option<String>,

    #[argh(option)]
    /// host command hiding the editor sidebar
    pub hide_sidebar_command: Option<String>,

    #[argh(option)]
    /// host command showing the editor sidebar
    pub show_sidebar_command: Option<String>,

    #[argh(option)]
    /// session state file, relative to the workspace root.
    /// Default: ".vscode-slides.json"
    pub state_file: Option<String>,

    #[argh(subcommand)]
    pub command: SessionCommand,
}

impl CliArgs {
    /// Parse CLI arguments
    pub fn parse() -> Self {
        // Use argh to parse args from environment
        argh::from_env()
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            workspace: None,
            folder: None,
            theme: None,
            font_family: None,
            preview_markdown: false,
            editor_settings: None,
            open_command: None,
            close_tabs_command: None,
            previous_command: None,
            next_command: None,
            preview_command: None,
            close_preview_command: None,
            hide_sidebar_command: None,
            show_sidebar_command: None,
            state_file: None,
            command: SessionCommand::Toggle(ToggleArgs {}),
        }
    }
}

#[derive(argh::FromArgs, Clone, Debug, PartialEq)]
#[argh(subcommand)]
pub enum SessionCommand {
    Toggle(ToggleArgs),
    Previous(PreviousArgs),
    Next(NextArgs),
    Exit(ExitArgs),
    Present(PresentArgs),
}

#[derive(argh::FromArgs, Clone, Debug, PartialEq)]
#[argh(subcommand, name = "toggle")]
/// enter presentation mode, or leave it when already presenting
pub struct ToggleArgs {}

#[derive(argh::FromArgs, Clone, Debug, PartialEq)]
#[argh(subcommand, name = "previous")]
/// go to the previous slide (no-op unless presenting)
pub struct PreviousArgs {}

#[derive(argh::FromArgs, Clone, Debug, PartialEq)]
#[argh(subcommand, name = "next")]
/// go to the next slide (no-op unless presenting)
pub struct NextArgs {}

#[derive(argh::FromArgs, Clone, Debug, PartialEq)]
#[argh(subcommand, name = "exit")]
/// leave presentation mode and restore the saved settings
pub struct ExitArgs {}

#[derive(argh::FromArgs, Clone, Debug, PartialEq)]
#[argh(subcommand, name = "present")]
/// enter presentation mode and read navigation commands from stdin
pub struct PresentArgs {}
