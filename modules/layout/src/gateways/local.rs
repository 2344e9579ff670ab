use async_trait::async_trait;
use std::sync::Arc;

use crate::contract::{client::LayoutApi, error::LayoutError, model::GuiProperties};
use crate::domain::{error::DomainError, service::Service};

/// Local implementation of the LayoutApi trait that delegates to the domain service
pub struct LayoutLocalClient {
    service: Arc<Service>,
}

impl LayoutLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl LayoutApi for LayoutLocalClient {
    async fn resolve_gui_properties(&self, user_id: i64) -> anyhow::Result<GuiProperties> {
        self.service
            .resolve_gui_properties(user_id)
            .await
            .map_err(map_domain_error_to_anyhow)
    }

    async fn expand_menu(
        &self,
        template: &str,
        user_id: i64,
        username: &str,
    ) -> anyhow::Result<String> {
        self.service
            .expand_menu_for(template, user_id, username)
            .await
            .map_err(map_domain_error_to_anyhow)
    }
}

/// Map domain errors to contract errors wrapped in anyhow
fn map_domain_error_to_anyhow(domain_error: DomainError) -> anyhow::Error {
    let contract_error = match domain_error {
        DomainError::MissingSessionUser => LayoutError::no_session_user(),
        DomainError::Database { .. } => LayoutError::internal(),
    };

    anyhow::Error::new(contract_error)
}
