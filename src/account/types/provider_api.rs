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

use crate::account::AccountError;
use crate::account::types::*;
use crate::service::ServiceState;

/// Account flows.
#[async_trait]
pub trait AccountApi: Send + Sync {
    /// Register the identity with the password and provision its tenant.
    async fn signup(
        &self,
        state: &ServiceState,
        signup: Signup,
    ) -> Result<SignupResponse, AccountError>;

    /// Confirm the email with the token from the signup.
    async fn confirm<'a>(&self, state: &ServiceState, token: &'a str)
    -> Result<Session, AccountError>;

    /// Login with the email and password.
    async fn login<'a>(
        &self,
        state: &ServiceState,
        email: &'a str,
        password: &'a SecretString,
    ) -> Result<Session, AccountError>;

    /// Login through the external identity provider.
    async fn login_external(
        &self,
        state: &ServiceState,
        login: ExternalLogin,
    ) -> Result<Session, AccountError>;

    /// Issue and store the password reset token.
    async fn request_password_reset<'a>(
        &self,
        state: &ServiceState,
        email: &'a str,
    ) -> Result<String, AccountError>;

    /// Set the new password using the reset token.
    async fn reset_password(
        &self,
        state: &ServiceState,
        reset: PasswordReset,
    ) -> Result<(), AccountError>;
}
