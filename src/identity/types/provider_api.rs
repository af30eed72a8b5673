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

use async_trait::async_trait;
use secrecy::SecretString;

use crate::identity::IdentityProviderError;
use crate::identity::types::*;
use crate::service::ServiceState;

/// Local identity API.
#[async_trait]
pub trait IdentityApi: Send + Sync {
    /// Create a new identity hashing its password.
    async fn create_identity(
        &self,
        state: &ServiceState,
        identity: IdentityCreate,
    ) -> Result<Identity, IdentityProviderError>;

    /// Get the identity by the `id`.
    async fn get_identity(
        &self,
        state: &ServiceState,
        id: i32,
    ) -> Result<Option<Identity>, IdentityProviderError>;

    /// Find the identity by the email.
    async fn find_identity_by_email<'a>(
        &self,
        state: &ServiceState,
        email: &'a str,
    ) -> Result<Option<Identity>, IdentityProviderError>;

    /// Find the identity by the username.
    async fn find_identity_by_username<'a>(
        &self,
        state: &ServiceState,
        username: &'a str,
    ) -> Result<Option<Identity>, IdentityProviderError>;

    /// Delete the identity together with its external login links.
    async fn delete_identity(
        &self,
        state: &ServiceState,
        id: i32,
    ) -> Result<(), IdentityProviderError>;

    /// Mark the identity email as confirmed.
    async fn set_confirmed(
        &self,
        state: &ServiceState,
        id: i32,
    ) -> Result<(), IdentityProviderError>;

    /// Replace the password of the identity and drop the reset token.
    async fn set_password<'a>(
        &self,
        state: &ServiceState,
        id: i32,
        password: &'a SecretString,
    ) -> Result<(), IdentityProviderError>;

    /// Store (or clear) the password reset token.
    async fn set_reset_token(
        &self,
        state: &ServiceState,
        id: i32,
        token: Option<String>,
    ) -> Result<(), IdentityProviderError>;

    /// Store the provisioned cloud resources.
    ///
    /// Only succeeds when the identity has no cloud resources stored yet.
    async fn set_cloud_resources<'a>(
        &self,
        state: &ServiceState,
        id: i32,
        resources: &'a CloudResources,
    ) -> Result<(), IdentityProviderError>;

    /// Find the identity linked to the account of the external identity
    /// provider.
    async fn find_identity_by_external_login<'a>(
        &self,
        state: &ServiceState,
        provider: &'a str,
        provider_user_id: &'a str,
    ) -> Result<Option<Identity>, IdentityProviderError>;

    /// Link the identity to the account of the external identity provider.
    async fn create_external_login(
        &self,
        state: &ServiceState,
        link: ExternalLoginLinkCreate,
    ) -> Result<ExternalLoginLink, IdentityProviderError>;

    /// Authenticate the identity with the email and password.
    async fn authenticate_by_password<'a>(
        &self,
        state: &ServiceState,
        email: &'a str,
        password: &'a SecretString,
    ) -> Result<Identity, IdentityProviderError>;
}
