use async_trait::async_trait;

use crate::contract::model::GuiProperties;

/// Public API trait for the layout module that other modules can use
#[async_trait]
pub trait LayoutApi: Send + Sync {
    /// Resolve a user's GUI language and theme, falling back to the
    /// configured defaults field-by-field when nothing is stored.
    async fn resolve_gui_properties(&self, user_id: i64) -> anyhow::Result<GuiProperties>;

    /// Expand `{token}` placeholders in a menu template with the
    /// account's profile and domain fields.
    async fn expand_menu(
        &self,
        template: &str,
        user_id: i64,
        username: &str,
    ) -> anyhow::Result<String>;
}
