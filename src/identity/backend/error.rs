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
use crate::identity::error::IdentityProviderPasswordHashError;

#[derive(Error, Debug)]
pub enum IdentityDatabaseError {
    /// Conditional update of the cloud resources matched no row.
    #[error("cloud resources of the identity {0} are already stored")]
    AlreadyProvisioned(i32),

    /// Wrong email or password.
    #[error("wrong email or password")]
    AuthenticationFailed,

    /// Database error.
    #[error(transparent)]
    Database {
        #[from]
        source: DatabaseError,
    },

    #[error("identity {0} not found")]
    IdentityNotFound(String),

    /// Row does not contain password hash.
    #[error("no password hash for the identity {0}")]
    NoPasswordHash(i32),

    /// Only some of the cloud resource columns are set.
    #[error("identity {0} has incomplete cloud resources stored")]
    PartialCloudResources(i32),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash {
        /// The source of the error.
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
}
