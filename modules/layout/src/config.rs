use serde::{Deserialize, Serialize};

/// Configuration for the layout module
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    /// Language assigned to users without a stored preference.
    #[serde(default = "default_language")]
    pub default_language: String,
    /// Theme assigned to users without a stored preference.
    #[serde(default = "default_theme")]
    pub default_theme: String,
    /// Themes offered by the theme picker.
    #[serde(default = "default_themes")]
    pub themes: Vec<String>,
    /// Markup snippet emitted for the active theme option.
    #[serde(default = "default_selected_markup")]
    pub selected_markup: String,
    /// Whether the account schema carries the optional `state` column.
    /// Resolved once at startup; gates the `{state}` menu token.
    #[serde(default = "default_profile_state_field")]
    pub profile_state_field: bool,
}

impl LayoutConfig {
    /// Extract this module's section from the application configuration
    /// bag, falling back to defaults when the section is absent.
    pub fn from_app_config(config: &runtime::AppConfig) -> anyhow::Result<Self> {
        Ok(config.module_config::<Self>("layout")?.unwrap_or_default())
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            default_theme: default_theme(),
            themes: default_themes(),
            selected_markup: default_selected_markup(),
            profile_state_field: default_profile_state_field(),
        }
    }
}

fn default_language() -> String {
    "en_GB".to_string()
}

fn default_theme() -> String {
    "blue".to_string()
}

fn default_themes() -> Vec<String> {
    vec![
        "blue".to_string(),
        "green".to_string(),
        "red".to_string(),
        "yellow".to_string(),
    ]
}

fn default_selected_markup() -> String {
    r#"selected="selected""#.to_string()
}

fn default_profile_state_field() -> bool {
    true
}
