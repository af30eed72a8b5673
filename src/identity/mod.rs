// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

//! # Identity provider
//!
//! Local identities are the people using the portal. An identity is created
//! by the signup (email and password, unconfirmed until the email is
//! confirmed) or by the first login through the external identity provider
//! (already confirmed, no password).
//!
//! ## Cloud resources
//!
//! The identifiers of the cloud resources provisioned for the identity are
//! stored together, exactly once. Reading a record with only some of them set
//! fails instead of returning half provisioned identity.
//!
//! ## External login
//!
//! Link between the identity and the account of the external identity
//! provider (i.e. `google`, `keycloak`), identified by the provider subject.
use async_trait::async_trait;
use secrecy::SecretString;
use std::sync::Arc;
use validator::Validate;

pub mod backend;
pub mod error;
#[cfg(test)]
mod mock;
pub mod password_hashing;
pub mod types;

use crate::config::Config;
use crate::identity::backend::{IdentityBackend, sql::SqlBackend};
use crate::identity::types::*;
use crate::plugin_manager::PluginManager;
use crate::service::ServiceState;

pub use error::IdentityProviderError;
#[cfg(test)]
pub use mock::MockIdentityProvider;
pub use types::IdentityApi;

pub struct IdentityProvider {
    backend_driver: Arc<dyn IdentityBackend>,
}

impl IdentityProvider {
    pub fn new(
        config: &Config,
        plugin_manager: &PluginManager,
    ) -> Result<Self, IdentityProviderError> {
        let backend_driver = if let Some(driver) =
            plugin_manager.get_identity_backend(config.identity.driver.clone())
        {
            driver.clone()
        } else {
            match config.identity.driver.as_str() {
                "sql" => Arc::new(SqlBackend::default()),
                _ => {
                    return Err(IdentityProviderError::UnsupportedDriver(
                        config.identity.driver.clone(),
                    ));
                }
            }
        };
        Ok(Self { backend_driver })
    }
}

#[async_trait]
impl IdentityApi for IdentityProvider {
    /// Create identity
    #[tracing::instrument(level = "info", skip(self, state, identity), fields(email = %identity.email))]
    async fn create_identity(
        &self,
        state: &ServiceState,
        identity: IdentityCreate,
    ) -> Result<Identity, IdentityProviderError> {
        identity.validate()?;
        self.backend_driver.create_identity(state, identity).await
    }

    /// Get single identity
    #[tracing::instrument(level = "info", skip(self, state))]
    async fn get_identity(
        &self,
        state: &ServiceState,
        id: i32,
    ) -> Result<Option<Identity>, IdentityProviderError> {
        self.backend_driver.get_identity(state, id).await
    }

    /// Find identity by email
    #[tracing::instrument(level = "info", skip(self, state))]
    async fn find_identity_by_email<'a>(
        &self,
        state: &ServiceState,
        email: &'a str,
    ) -> Result<Option<Identity>, IdentityProviderError> {
        self.backend_driver.find_identity_by_email(state, email).await
    }

    /// Find identity by username
    #[tracing::instrument(level = "info", skip(self, state))]
    async fn find_identity_by_username<'a>(
        &self,
        state: &ServiceState,
        username: &'a str,
    ) -> Result<Option<Identity>, IdentityProviderError> {
        self.backend_driver
            .find_identity_by_username(state, username)
            .await
    }

    /// Delete identity
    #[tracing::instrument(level = "info", skip(self, state))]
    async fn delete_identity(
        &self,
        state: &ServiceState,
        id: i32,
    ) -> Result<(), IdentityProviderError> {
        self.backend_driver.delete_identity(state, id).await
    }

    /// Confirm identity
    #[tracing::instrument(level = "info", skip(self, state))]
    async fn set_confirmed(
        &self,
        state: &ServiceState,
        id: i32,
    ) -> Result<(), IdentityProviderError> {
        self.backend_driver.set_confirmed(state, id).await
    }

    /// Set password
    #[tracing::instrument(level = "info", skip(self, state, password))]
    async fn set_password<'a>(
        &self,
        state: &ServiceState,
        id: i32,
        password: &'a SecretString,
    ) -> Result<(), IdentityProviderError> {
        self.backend_driver.set_password(state, id, password).await
    }

    /// Set password reset token
    #[tracing::instrument(level = "info", skip(self, state, token))]
    async fn set_reset_token(
        &self,
        state: &ServiceState,
        id: i32,
        token: Option<String>,
    ) -> Result<(), IdentityProviderError> {
        self.backend_driver.set_reset_token(state, id, token).await
    }

    /// Store cloud resources
    #[tracing::instrument(level = "info", skip(self, state))]
    async fn set_cloud_resources<'a>(
        &self,
        state: &ServiceState,
        id: i32,
        resources: &'a CloudResources,
    ) -> Result<(), IdentityProviderError> {
        self.backend_driver
            .set_cloud_resources(state, id, resources)
            .await
    }

    /// Find identity by the external login
    #[tracing::instrument(level = "info", skip(self, state))]
    async fn find_identity_by_external_login<'a>(
        &self,
        state: &ServiceState,
        provider: &'a str,
        provider_user_id: &'a str,
    ) -> Result<Option<Identity>, IdentityProviderError> {
        self.backend_driver
            .find_identity_by_external_login(state, provider, provider_user_id)
            .await
    }

    /// Link identity to the external login
    #[tracing::instrument(level = "info", skip(self, state))]
    async fn create_external_login(
        &self,
        state: &ServiceState,
        link: ExternalLoginLinkCreate,
    ) -> Result<ExternalLoginLink, IdentityProviderError> {
        link.validate()?;
        self.backend_driver.create_external_login(state, link).await
    }

    /// Authenticate identity with the password
    #[tracing::instrument(level = "info", skip(self, state, password))]
    async fn authenticate_by_password<'a>(
        &self,
        state: &ServiceState,
        email: &'a str,
        password: &'a SecretString,
    ) -> Result<Identity, IdentityProviderError> {
        self.backend_driver
            .authenticate_by_password(state, email, password)
            .await
    }
}
