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

use thiserror::Error;

use crate::error::{BuilderError, DatabaseError};
use crate::identity::backend::error::IdentityDatabaseError;

#[derive(Error, Debug)]
pub enum IdentityProviderError {
    /// The cloud resources of the identity are already stored.
    #[error("cloud resources of the identity {0} are already stored")]
    AlreadyProvisioned(i32),

    /// Wrong email or password.
    #[error("wrong email or password")]
    AuthenticationFailed,

    /// Conflict.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Identity provider error
    #[error(transparent)]
    IdentityDatabase { source: IdentityDatabaseError },

    #[error("identity {0} not found")]
    IdentityNotFound(String),

    /// Only some of the cloud resource identifiers are stored.
    #[error("identity {0} has incomplete cloud resources stored")]
    PartialCloudResources(i32),

    #[error("password hashing error")]
    PasswordHash {
        #[from]
        source: IdentityProviderPasswordHashError,
    },

    /// Structures builder error.
    #[error(transparent)]
    StructBuilder {
        /// The source of the error.
        #[from]
        source: BuilderError,
    },

    /// Unsupported driver
    #[error("unsupported driver {0}")]
    UnsupportedDriver(String),

    /// Request validation error.
    #[error("request validation error: {}", source)]
    Validation {
        /// The source of the error.
        #[from]
        source: validator::ValidationErrors,
    },
}

impl From<IdentityDatabaseError> for IdentityProviderError {
    fn from(source: IdentityDatabaseError) -> Self {
        match source {
            IdentityDatabaseError::Database {
                source: DatabaseError::Conflict { message, .. },
            } => Self::Conflict(message),
            IdentityDatabaseError::AlreadyProvisioned(x) => Self::AlreadyProvisioned(x),
            IdentityDatabaseError::IdentityNotFound(x) => Self::IdentityNotFound(x),
            IdentityDatabaseError::PartialCloudResources(x) => Self::PartialCloudResources(x),
            IdentityDatabaseError::PasswordHash { source } => Self::PasswordHash { source },
            IdentityDatabaseError::AuthenticationFailed
            | IdentityDatabaseError::NoPasswordHash(..) => Self::AuthenticationFailed,
            IdentityDatabaseError::StructBuilder { source } => Self::StructBuilder { source },
            _ => Self::IdentityDatabase { source },
        }
    }
}

/// Password hashing related errors.
#[derive(Error, Debug)]
pub enum IdentityProviderPasswordHashError {
    /// Bcrypt error.
    #[error(transparent)]
    BCrypt {
        #[from]
        source: bcrypt::BcryptError,
    },

    /// Async task join error.
    #[error(transparent)]
    Join {
        #[from]
        source: tokio::task::JoinError,
    },
}
