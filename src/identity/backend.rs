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
//! Identity provider backends.
use async_trait::async_trait;
use secrecy::SecretString;

pub mod error;
pub mod sql;

use crate::identity::IdentityProviderError;
use crate::identity::types::*;
use crate::service::ServiceState;

/// Identity Provider backend interface.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityBackend: Send + Sync {
    /// Create identity.
    async fn create_identity(
        &self,
        state: &ServiceState,
        identity: IdentityCreate,
    ) -> Result<Identity, IdentityProviderError>;

    /// Get identity by ID.
    async fn get_identity(
        &self,
        state: &ServiceState,
        id: i32,
    ) -> Result<Option<Identity>, IdentityProviderError>;

    /// Find identity by email.
    async fn find_identity_by_email<'a>(
        &self,
        state: &ServiceState,
        email: &'a str,
    ) -> Result<Option<Identity>, IdentityProviderError>;

    /// Find identity by username.
    async fn find_identity_by_username<'a>(
        &self,
        state: &ServiceState,
        username: &'a str,
    ) -> Result<Option<Identity>, IdentityProviderError>;

    /// Delete identity.
    async fn delete_identity(
        &self,
        state: &ServiceState,
        id: i32,
    ) -> Result<(), IdentityProviderError>;

    /// Set the confirmation flag.
    async fn set_confirmed(
        &self,
        state: &ServiceState,
        id: i32,
    ) -> Result<(), IdentityProviderError>;

    /// Set the password.
    async fn set_password<'a>(
        &self,
        state: &ServiceState,
        id: i32,
        password: &'a SecretString,
    ) -> Result<(), IdentityProviderError>;

    /// Set the password reset token.
    async fn set_reset_token(
        &self,
        state: &ServiceState,
        id: i32,
        token: Option<String>,
    ) -> Result<(), IdentityProviderError>;

    /// Conditionally set the cloud resources.
    async fn set_cloud_resources<'a>(
        &self,
        state: &ServiceState,
        id: i32,
        resources: &'a CloudResources,
    ) -> Result<(), IdentityProviderError>;

    /// Find identity by the external login.
    async fn find_identity_by_external_login<'a>(
        &self,
        state: &ServiceState,
        provider: &'a str,
        provider_user_id: &'a str,
    ) -> Result<Option<Identity>, IdentityProviderError>;

    /// Create external login link.
    async fn create_external_login(
        &self,
        state: &ServiceState,
        link: ExternalLoginLinkCreate,
    ) -> Result<ExternalLoginLink, IdentityProviderError>;

    /// Authenticate by email and password.
    async fn authenticate_by_password<'a>(
        &self,
        state: &ServiceState,
        email: &'a str,
        password: &'a SecretString,
    ) -> Result<Identity, IdentityProviderError>;
}
