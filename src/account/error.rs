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
//! Account flow errors.
use thiserror::Error;

use crate::error::BuilderError;
use crate::identity::error::IdentityProviderError;
use crate::provisioning::error::ProvisioningProviderError;

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("email {0} is already registered")]
    EmailTaken(String),

    /// Identity provider error.
    #[error(transparent)]
    Identity {
        /// The source of the error.
        #[from]
        source: IdentityProviderError,
    },

    #[error("invalid or expired token")]
    InvalidToken,

    #[error("invalid account secret key: {0}")]
    InvalidSecretKey(String),

    #[error("passwords do not match")]
    PasswordMismatch,

    /// Provisioning provider error.
    #[error(transparent)]
    Provisioning {
        /// The source of the error.
        #[from]
        source: ProvisioningProviderError,
    },

    #[error("account secret key is not configured")]
    SecretKeyMissing,

    #[error(transparent)]
    Serde {
        #[from]
        source: serde_json::Error,
    },

    #[error(transparent)]
    StructBuilder {
        #[from]
        source: BuilderError,
    },

    #[error("account is not confirmed")]
    Unconfirmed,

    #[error("no account found with the email {0}")]
    UnknownEmail(String),

    #[error("username {0} is already taken")]
    UsernameTaken(String),

    #[error(transparent)]
    Validation {
        #[from]
        source: validator::ValidationErrors,
    },

    #[error(
        "password must be at least 8 characters long and contain a lowercase letter, an uppercase letter, a digit and a special character"
    )]
    WeakPassword,

    #[error("wrong email or password")]
    WrongCredentials,
}
