/// Public WhoColor endpoint serving authorship-annotated English Wikipedia HTML.
pub const DEFAULT_AUTHORSHIP_ENDPOINT: &str = "https://api.wikicolor.net/whocolor/index.php";

/// Per-viewer options supplied by the embedding page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    /// Overrides the translated "show current version" label.
    pub show_button_label: Option<String>,
    /// Overrides the translated "hide" label.
    pub hide_button_label: Option<String>,
    pub large_button: bool,
    pub authorship_endpoint: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            show_button_label: None,
            hide_button_label: None,
            large_button: false,
            authorship_endpoint: DEFAULT_AUTHORSHIP_ENDPOINT.to_string(),
        }
    }
}
