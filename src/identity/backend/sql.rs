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
//! SQL identity backend.
use async_trait::async_trait;
use secrecy::SecretString;

mod authenticate;
mod external_login;
mod identity;

use crate::identity::IdentityProviderError;
use crate::identity::backend::IdentityBackend;
pub(crate) use crate::identity::backend::error::IdentityDatabaseError;
use crate::identity::types::*;
use crate::service::ServiceState;

#[derive(Default)]
pub struct SqlBackend {}

#[async_trait]
impl IdentityBackend for SqlBackend {
    /// Create identity.
    #[tracing::instrument(level = "debug", skip(self, state, identity), fields(email = %identity.email))]
    async fn create_identity(
        &self,
        state: &ServiceState,
        identity: IdentityCreate,
    ) -> Result<Identity, IdentityProviderError> {
        Ok(identity::create(&state.config.identity, &state.db, identity).await?)
    }

    /// Get identity by ID.
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn get_identity(
        &self,
        state: &ServiceState,
        id: i32,
    ) -> Result<Option<Identity>, IdentityProviderError> {
        Ok(identity::get(&state.db, id).await?)
    }

    /// Find identity by email.
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn find_identity_by_email<'a>(
        &self,
        state: &ServiceState,
        email: &'a str,
    ) -> Result<Option<Identity>, IdentityProviderError> {
        Ok(identity::find_by_email(&state.db, email).await?)
    }

    /// Find identity by username.
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn find_identity_by_username<'a>(
        &self,
        state: &ServiceState,
        username: &'a str,
    ) -> Result<Option<Identity>, IdentityProviderError> {
        Ok(identity::find_by_username(&state.db, username).await?)
    }

    /// Delete identity.
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn delete_identity(
        &self,
        state: &ServiceState,
        id: i32,
    ) -> Result<(), IdentityProviderError> {
        Ok(identity::delete(&state.db, id).await?)
    }

    /// Set the confirmation flag.
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn set_confirmed(
        &self,
        state: &ServiceState,
        id: i32,
    ) -> Result<(), IdentityProviderError> {
        Ok(identity::set_confirmed(&state.db, id).await?)
    }

    /// Set the password.
    #[tracing::instrument(level = "debug", skip(self, state, password))]
    async fn set_password<'a>(
        &self,
        state: &ServiceState,
        id: i32,
        password: &'a SecretString,
    ) -> Result<(), IdentityProviderError> {
        Ok(identity::set_password(&state.config.identity, &state.db, id, password).await?)
    }

    /// Set the password reset token.
    #[tracing::instrument(level = "debug", skip(self, state, token))]
    async fn set_reset_token(
        &self,
        state: &ServiceState,
        id: i32,
        token: Option<String>,
    ) -> Result<(), IdentityProviderError> {
        Ok(identity::set_reset_token(&state.db, id, token).await?)
    }

    /// Conditionally set the cloud resources.
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn set_cloud_resources<'a>(
        &self,
        state: &ServiceState,
        id: i32,
        resources: &'a CloudResources,
    ) -> Result<(), IdentityProviderError> {
        Ok(identity::set_cloud_resources(&state.db, id, resources).await?)
    }

    /// Find identity by the external login.
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn find_identity_by_external_login<'a>(
        &self,
        state: &ServiceState,
        provider: &'a str,
        provider_user_id: &'a str,
    ) -> Result<Option<Identity>, IdentityProviderError> {
        Ok(external_login::find_identity(&state.db, provider, provider_user_id).await?)
    }

    /// Create external login link.
    #[tracing::instrument(level = "debug", skip(self, state))]
    async fn create_external_login(
        &self,
        state: &ServiceState,
        link: ExternalLoginLinkCreate,
    ) -> Result<ExternalLoginLink, IdentityProviderError> {
        Ok(external_login::create(&state.db, link).await?)
    }

    /// Authenticate by email and password.
    #[tracing::instrument(level = "debug", skip(self, state, password))]
    async fn authenticate_by_password<'a>(
        &self,
        state: &ServiceState,
        email: &'a str,
        password: &'a SecretString,
    ) -> Result<Identity, IdentityProviderError> {
        Ok(
            authenticate::authenticate_by_password(
                &state.config.identity,
                &state.db,
                email,
                password,
            )
            .await?,
        )
    }
}
