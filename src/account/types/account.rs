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

use derive_builder::Builder;
use secrecy::SecretString;
use validator::Validate;

use crate::error::BuilderError;
use crate::identity::types::Identity;

/// Signup with the email and password.
#[derive(Builder, Clone, Debug, Validate)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct Signup {
    /// Optional unique username.
    #[builder(default)]
    #[validate(length(min = 1, max = 256))]
    pub username: Option<String>,

    #[validate(email)]
    pub email: String,

    pub password: SecretString,

    pub confirm_password: SecretString,
}

/// Result of the successful signup.
#[derive(Clone, Debug)]
pub struct SignupResponse {
    /// The provisioned (still unconfirmed) identity.
    pub identity: Identity,

    /// Token for the email confirmation link.
    pub confirmation_token: String,
}

/// Login through the external identity provider.
#[derive(Builder, Clone, Debug, Validate)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct ExternalLogin {
    /// Provider name (i.e. `google`, `keycloak`).
    #[validate(length(min = 1, max = 64))]
    pub provider: String,

    /// Subject of the user at the provider.
    #[validate(length(min = 1, max = 255))]
    pub subject: String,

    #[validate(email)]
    pub email: String,

    #[builder(default)]
    pub name: Option<String>,

    #[builder(default)]
    #[validate(url)]
    pub picture: Option<String>,
}

/// Setting new password with the reset token.
#[derive(Builder, Clone, Debug)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(into))]
pub struct PasswordReset {
    pub token: String,

    pub password: SecretString,

    pub confirm_password: SecretString,
}

impl ExternalLogin {
    /// Username of the identity created by the first login.
    pub fn username(&self) -> &str {
        self.email
            .split_once('@')
            .map_or(self.email.as_str(), |(local, _)| local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_login_username() {
        let login = ExternalLoginBuilder::default()
            .provider("keycloak")
            .subject("sub")
            .email("jane.doe@example.com")
            .build()
            .unwrap();
        assert_eq!("jane.doe", login.username());
    }

    #[test]
    fn test_signup_validate() {
        let signup = SignupBuilder::default()
            .email("not-an-email")
            .password(SecretString::from("Passw0rd!"))
            .confirm_password(SecretString::from("Passw0rd!"))
            .build()
            .unwrap();
        assert!(signup.validate().is_err());
    }
}
