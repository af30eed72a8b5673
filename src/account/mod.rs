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

//! # Account flows
//!
//! Signup, email confirmation, login (with the password or through an external
//! identity provider) and password reset. A new identity gets its tenant
//! provisioned right away; when that fails the identity created by the flow is
//! removed again so the user can retry from scratch.
use async_trait::async_trait;
use secrecy::SecretString;
use tracing::{error, info, warn};
use validator::Validate;

pub mod error;
#[cfg(test)]
mod mock;
pub mod password;
pub mod token;
pub mod types;

use crate::config::Config;
use crate::identity::types::*;
use crate::identity::{IdentityApi, IdentityProviderError};
use crate::provisioning::ProvisioningApi;
use crate::service::ServiceState;
use token::{AccountTokens, TokenPurpose};

pub use error::AccountError;
#[cfg(test)]
pub use mock::MockAccountProvider;
pub use types::*;

pub struct AccountProvider {
    tokens: Option<AccountTokens>,
}

impl AccountProvider {
    pub fn new(config: &Config) -> Result<Self, AccountError> {
        let tokens = match &config.account.secret_key {
            Some(key) => Some(AccountTokens::new(key, config.account.token_ttl)?),
            None => {
                warn!("[account] secret_key is not set, confirmation and reset tokens are disabled");
                None
            }
        };
        Ok(Self { tokens })
    }

    fn tokens(&self) -> Result<&AccountTokens, AccountError> {
        self.tokens.as_ref().ok_or(AccountError::SecretKeyMissing)
    }

    /// Provision the identity just created by the flow, removing it on failure.
    async fn provision_new_identity(
        &self,
        state: &ServiceState,
        identity: Identity,
    ) -> Result<Identity, AccountError> {
        match state
            .provider
            .get_provisioning_provider()
            .provision(state, &identity)
            .await
        {
            Ok(cloud) => Ok(Identity {
                cloud: Some(cloud),
                ..identity
            }),
            Err(err) => {
                warn!(
                    identity_id = identity.id,
                    "provisioning of the new identity failed, removing it"
                );
                if let Err(del_err) = state
                    .provider
                    .get_identity_provider()
                    .delete_identity(state, identity.id)
                    .await
                {
                    error!(
                        identity_id = identity.id,
                        "removing the identity failed: {}", del_err
                    );
                }
                Err(err.into())
            }
        }
    }

    async fn find_by_email(
        &self,
        state: &ServiceState,
        email: &str,
    ) -> Result<Identity, AccountError> {
        state
            .provider
            .get_identity_provider()
            .find_identity_by_email(state, email)
            .await?
            .ok_or_else(|| AccountError::UnknownEmail(email.to_string()))
    }
}

#[async_trait]
impl AccountApi for AccountProvider {
    #[tracing::instrument(level = "info", skip(self, state, signup), fields(email = %signup.email))]
    async fn signup(
        &self,
        state: &ServiceState,
        signup: Signup,
    ) -> Result<SignupResponse, AccountError> {
        signup.validate()?;
        password::check_confirmation(&signup.password, &signup.confirm_password)?;
        password::check_strength(&signup.password)?;
        let tokens = self.tokens()?;

        let identity_provider = state.provider.get_identity_provider();
        if identity_provider
            .find_identity_by_email(state, &signup.email)
            .await?
            .is_some()
        {
            return Err(AccountError::EmailTaken(signup.email));
        }
        if let Some(username) = &signup.username
            && identity_provider
                .find_identity_by_username(state, username)
                .await?
                .is_some()
        {
            return Err(AccountError::UsernameTaken(username.clone()));
        }

        let mut create = IdentityCreateBuilder::default();
        create.email(signup.email.clone()).password(signup.password);
        if let Some(username) = &signup.username {
            create.username(username.clone());
        }
        let identity = identity_provider
            .create_identity(state, create.build()?)
            .await
            .map_err(|err| match (err, signup.username) {
                // Lost a race against a concurrent signup; the violated index names the column.
                (IdentityProviderError::Conflict(msg), Some(username))
                    if msg.contains("username") =>
                {
                    AccountError::UsernameTaken(username)
                }
                (IdentityProviderError::Conflict(_), _) => AccountError::EmailTaken(signup.email),
                (other, _) => other.into(),
            })?;

        let identity = self.provision_new_identity(state, identity).await?;
        let confirmation_token = tokens.issue(&identity.email, TokenPurpose::Confirm)?;
        info!(identity_id = identity.id, "identity signed up");
        Ok(SignupResponse {
            identity,
            confirmation_token,
        })
    }

    #[tracing::instrument(level = "info", skip_all)]
    async fn confirm<'a>(
        &self,
        state: &ServiceState,
        token: &'a str,
    ) -> Result<Session, AccountError> {
        let email = self.tokens()?.verify(token, TokenPurpose::Confirm)?;
        let mut identity = self.find_by_email(state, &email).await?;
        if identity.is_confirmed() {
            info!(identity_id = identity.id, "identity is already confirmed");
        } else {
            state
                .provider
                .get_identity_provider()
                .set_confirmed(state, identity.id)
                .await?;
            identity.confirmed = true;
        }
        Ok(Session::from(&identity))
    }

    #[tracing::instrument(level = "info", skip(self, state, password))]
    async fn login<'a>(
        &self,
        state: &ServiceState,
        email: &'a str,
        password: &'a SecretString,
    ) -> Result<Session, AccountError> {
        let identity = state
            .provider
            .get_identity_provider()
            .authenticate_by_password(state, email, password)
            .await
            .map_err(|err| match err {
                IdentityProviderError::AuthenticationFailed
                | IdentityProviderError::IdentityNotFound(_) => AccountError::WrongCredentials,
                other => other.into(),
            })?;
        if !identity.is_confirmed() {
            return Err(AccountError::Unconfirmed);
        }
        Ok(Session::from(&identity))
    }

    #[tracing::instrument(level = "info", skip(self, state, login), fields(provider = %login.provider))]
    async fn login_external(
        &self,
        state: &ServiceState,
        login: ExternalLogin,
    ) -> Result<Session, AccountError> {
        login.validate()?;
        let identity_provider = state.provider.get_identity_provider();
        if let Some(identity) = identity_provider
            .find_identity_by_external_login(state, &login.provider, &login.subject)
            .await?
        {
            return Ok(Session::from(&identity));
        }

        let identity = match identity_provider
            .find_identity_by_email(state, &login.email)
            .await?
        {
            Some(identity) => {
                info!(
                    identity_id = identity.id,
                    "linking the external login to the existing identity"
                );
                if identity.is_provisioned() {
                    identity
                } else {
                    let cloud = state
                        .provider
                        .get_provisioning_provider()
                        .provision(state, &identity)
                        .await?;
                    Identity {
                        cloud: Some(cloud),
                        ..identity
                    }
                }
            }
            None => {
                let mut create = IdentityCreateBuilder::default();
                create.email(login.email.clone()).confirmed(true);
                let username = login.username();
                if identity_provider
                    .find_identity_by_username(state, username)
                    .await?
                    .is_none()
                {
                    create.username(username);
                } else {
                    info!(%username, "derived username is taken, leaving it unset");
                }
                if let Some(name) = &login.name {
                    create.name(name.clone());
                }
                if let Some(picture) = &login.picture {
                    create.profile_pic(picture.clone());
                }
                let identity = identity_provider
                    .create_identity(state, create.build()?)
                    .await?;
                self.provision_new_identity(state, identity).await?
            }
        };

        identity_provider
            .create_external_login(
                state,
                ExternalLoginLinkCreateBuilder::default()
                    .provider(login.provider)
                    .provider_user_id(login.subject)
                    .identity_id(identity.id)
                    .build()?,
            )
            .await?;
        // The external provider vouches for the email once the link exists.
        let identity = if identity.is_confirmed() {
            identity
        } else {
            identity_provider.set_confirmed(state, identity.id).await?;
            Identity {
                confirmed: true,
                ..identity
            }
        };
        Ok(Session::from(&identity))
    }

    #[tracing::instrument(level = "info", skip(self, state))]
    async fn request_password_reset<'a>(
        &self,
        state: &ServiceState,
        email: &'a str,
    ) -> Result<String, AccountError> {
        let tokens = self.tokens()?;
        let identity = self.find_by_email(state, email).await?;
        let token = tokens.issue(&identity.email, TokenPurpose::Reset)?;
        state
            .provider
            .get_identity_provider()
            .set_reset_token(state, identity.id, Some(token.clone()))
            .await?;
        Ok(token)
    }

    #[tracing::instrument(level = "info", skip_all)]
    async fn reset_password(
        &self,
        state: &ServiceState,
        reset: PasswordReset,
    ) -> Result<(), AccountError> {
        let email = self.tokens()?.verify(&reset.token, TokenPurpose::Reset)?;
        let identity = self.find_by_email(state, &email).await?;
        // Only the last issued token is valid and only once.
        if identity.reset_token.as_deref() != Some(reset.token.as_str()) {
            return Err(AccountError::InvalidToken);
        }
        password::check_confirmation(&reset.password, &reset.confirm_password)?;
        password::check_strength(&reset.password)?;
        state
            .provider
            .get_identity_provider()
            .set_password(state, identity.id, &reset.password)
            .await?;
        info!(identity_id = identity.id, "password was reset");
        Ok(())
    }
}

#[cfg(test)]
mod tests;
