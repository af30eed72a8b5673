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
//! # Error
//!
//! Errors that can occur while building the service and common error helpers
//! shared by the providers.
use sea_orm::SqlErr;
use thiserror::Error;

use crate::account::error::AccountError;
use crate::cloud::error::CloudProviderError;
use crate::identity::error::IdentityProviderError;
use crate::provisioning::error::ProvisioningProviderError;

/// Service error.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Account flow error.
    #[error(transparent)]
    Account {
        /// The source of the error.
        #[from]
        source: AccountError,
    },

    /// Cloud provider error.
    #[error(transparent)]
    Cloud {
        /// The source of the error.
        #[from]
        source: CloudProviderError,
    },

    /// Identity provider error.
    #[error(transparent)]
    Identity {
        /// The source of the error.
        #[from]
        source: IdentityProviderError,
    },

    #[error(transparent)]
    IO {
        #[from]
        source: std::io::Error,
    },

    /// Provisioning provider error.
    #[error(transparent)]
    Provisioning {
        /// The source of the error.
        #[from]
        source: ProvisioningProviderError,
    },
}

/// Builder error.
///
/// Shared error type of all `derive_builder` builders of the crate.
#[derive(Debug, Error)]
pub enum BuilderError {
    /// Uninitialized field.
    #[error("{0}")]
    UninitializedField(String),
    /// Custom validation error.
    #[error("{0}")]
    Validation(String),
}

impl From<derive_builder::UninitializedFieldError> for BuilderError {
    fn from(ufe: derive_builder::UninitializedFieldError) -> Self {
        Self::UninitializedField(ufe.to_string())
    }
}

impl From<String> for BuilderError {
    fn from(s: String) -> Self {
        Self::Validation(s)
    }
}

/// Database error with the context of the failed operation.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Unique or foreign key constraint violation.
    #[error("{message} while {context}")]
    Conflict {
        /// Violated constraint description.
        message: String,
        /// Operation context.
        context: String,
    },

    /// Other SQL error.
    #[error("{message} while {context}")]
    Sql {
        /// Error message.
        message: String,
        /// Operation context.
        context: String,
    },

    /// Database driver error.
    #[error("database error while {context}")]
    Database {
        /// The source of the error.
        source: sea_orm::DbErr,
        /// Operation context.
        context: String,
    },
}

/// Convert the DB error into the [DatabaseError] with the context information.
pub fn db_err(e: sea_orm::DbErr, context: &str) -> DatabaseError {
    e.sql_err().map_or_else(
        || DatabaseError::Database {
            source: e,
            context: context.to_string(),
        },
        |err| match err {
            SqlErr::UniqueConstraintViolation(descr) => DatabaseError::Conflict {
                message: descr.to_string(),
                context: context.to_string(),
            },
            SqlErr::ForeignKeyConstraintViolation(descr) => DatabaseError::Conflict {
                message: descr.to_string(),
                context: context.to_string(),
            },
            other => DatabaseError::Sql {
                message: other.to_string(),
                context: context.to_string(),
            },
        },
    )
}

/// Attach the operation context to database results.
pub trait DbContextExt<T> {
    /// Convert the error into the [`DatabaseError`] describing what was being
    /// done.
    fn context(self, context: &str) -> Result<T, DatabaseError>;
}

impl<T> DbContextExt<T> for Result<T, sea_orm::DbErr> {
    fn context(self, context: &str) -> Result<T, DatabaseError> {
        self.map_err(|err| db_err(err, context))
    }
}
