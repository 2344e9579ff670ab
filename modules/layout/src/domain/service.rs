use sea_orm::DatabaseConnection;
use tracing::{debug, instrument};

use crate::config::LayoutConfig;
use crate::contract::model::{AccountProfile, GuiProperties};
use crate::domain::error::DomainError;
use crate::domain::ports::TemplateSink;
use crate::infra::storage::{entity, mapper};
use crate::markup::{escape_html, expand_tokens};
use crate::session::Session;

/// Domain service for the GUI layout concerns.
/// Holds the shared connection and the module configuration resolved at
/// startup.
#[derive(Clone)]
pub struct Service {
    db: DatabaseConnection,
    config: LayoutConfig,
}

impl Service {
    /// Create a service with dependencies.
    pub fn new(db: DatabaseConnection, config: LayoutConfig) -> Self {
        Self { db, config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Resolve a user's GUI language and theme.
    ///
    /// A missing row is a normal state, not a failure: defaults are
    /// substituted field-by-field for whatever is absent or empty.
    #[instrument(name = "layout.service.resolve_gui_properties", skip(self), fields(user_id = %user_id))]
    pub async fn resolve_gui_properties(
        &self,
        user_id: i64,
    ) -> Result<GuiProperties, DomainError> {
        debug!("Resolving GUI properties");

        let stored = entity::gui_props::find_by_user_id(&self.db, user_id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        let (language, theme) = match stored {
            Some(row) => mapper::stored_preferences(row),
            None => (None, None),
        };

        Ok(GuiProperties {
            language: language.unwrap_or_else(|| self.config.default_language.clone()),
            theme: theme.unwrap_or_else(|| self.config.default_theme.clone()),
        })
    }

    /// Populate the session's language/theme slots at session start.
    ///
    /// Skipped for anonymous sessions and for sessions carrying
    /// delegation markers: an operator browsing under a switched
    /// identity keeps their own GUI properties.
    #[instrument(name = "layout.service.begin_session", skip(self, session))]
    pub async fn begin_session(&self, session: &mut Session) -> Result<(), DomainError> {
        let Some(user_id) = session.user_id else {
            return Ok(());
        };
        if session.is_delegated() {
            debug!("Delegated session, keeping current language and theme");
            return Ok(());
        }

        let props = self.resolve_gui_properties(user_id).await?;
        session.language = Some(props.language);
        session.theme = Some(props.theme);
        Ok(())
    }

    /// Expand menu placeholders for the session user.
    pub async fn expand_menu(
        &self,
        template: &str,
        session: &Session,
    ) -> Result<String, DomainError> {
        let user_id = session
            .user_id
            .ok_or_else(DomainError::missing_session_user)?;
        let username = session.username.as_deref().unwrap_or("");
        self.expand_menu_for(template, user_id, username).await
    }

    /// Expand `{token}` placeholders in a menu template with the
    /// account's profile and domain fields. Missing profile or domain
    /// rows substitute empty strings.
    #[instrument(
        name = "layout.service.expand_menu",
        skip(self, template),
        fields(user_id = %user_id)
    )]
    pub async fn expand_menu_for(
        &self,
        template: &str,
        user_id: i64,
        username: &str,
    ) -> Result<String, DomainError> {
        debug!("Expanding menu placeholders");

        let profile = entity::admin::find_profile(&self.db, user_id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .map(mapper::profile_to_contract);

        let domain_name = entity::domain::find_primary_domain(&self.db, user_id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .map(|d| d.domain_name);

        let table = self.token_table(
            user_id,
            username,
            profile.as_ref(),
            domain_name.as_deref(),
        );
        Ok(expand_tokens(template, &table))
    }

    /// Fixed, ordered token table for menu expansion.
    ///
    /// `{state}` and `{domain_name}` are substituted without HTML
    /// escaping, unlike their sibling tokens; `{state}` is present only
    /// when the account schema carries the column.
    fn token_table(
        &self,
        user_id: i64,
        username: &str,
        profile: Option<&AccountProfile>,
        domain_name: Option<&str>,
    ) -> Vec<(&'static str, String)> {
        fn field<'a>(
            profile: Option<&'a AccountProfile>,
            get: impl Fn(&'a AccountProfile) -> &'a str,
        ) -> &'a str {
            profile.map(get).unwrap_or("")
        }

        let mut table = Vec::with_capacity(16);
        table.push(("{uid}", user_id.to_string()));
        table.push(("{uname}", escape_html(username)));
        table.push(("{cid}", escape_html(field(profile, |p| &p.customer_id))));
        table.push(("{fname}", escape_html(field(profile, |p| &p.first_name))));
        table.push(("{lname}", escape_html(field(profile, |p| &p.last_name))));
        table.push(("{company}", escape_html(field(profile, |p| &p.company))));
        table.push(("{zip}", escape_html(field(profile, |p| &p.zip))));
        table.push(("{city}", escape_html(field(profile, |p| &p.city))));

        if self.config.profile_state_field {
            let state = profile
                .and_then(|p| p.state.clone())
                .unwrap_or_default();
            table.push(("{state}", state));
        }

        table.push(("{country}", escape_html(field(profile, |p| &p.country))));
        table.push(("{email}", escape_html(field(profile, |p| &p.email))));
        table.push(("{phone}", escape_html(field(profile, |p| &p.phone))));
        table.push(("{fax}", escape_html(field(profile, |p| &p.fax))));
        table.push(("{street1}", escape_html(field(profile, |p| &p.street1))));
        table.push(("{street2}", escape_html(field(profile, |p| &p.street2))));
        table.push(("{domain_name}", domain_name.unwrap_or("").to_string()));
        table
    }

    /// Render the pending page message and clear it.
    ///
    /// With nothing pending the message region is assigned empty; a
    /// second call in the same render cycle therefore takes the empty
    /// branch.
    pub fn render_page_message(&self, session: &mut Session, tpl: &mut dyn TemplateSink) {
        match session.take_message() {
            None => tpl.assign("PAGE_MESSAGE", ""),
            Some(message) => {
                tpl.assign("MESSAGE_CLS", message.severity.css_class());
                tpl.assign("MESSAGE", &message.text);
            }
        }
    }

    /// Render one picker block per configured theme, marking the active
    /// one selected.
    pub fn render_theme_picker(&self, tpl: &mut dyn TemplateSink, current_theme: &str) {
        for theme in &self.config.themes {
            let selected = if theme == current_theme {
                self.config.selected_markup.as_str()
            } else {
                ""
            };

            tpl.assign("LAYOUT_VALUE", theme);
            tpl.assign("LAYOUT_SELECTED", selected);
            tpl.assign("LAYOUT_NAME", theme);
            tpl.parse("DEF_LAYOUT", ".def_layout");
        }
    }
}
