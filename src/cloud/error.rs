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

use crate::error::BuilderError;

/// Cloud provider error.
#[derive(Error, Debug)]
pub enum CloudProviderError {
    /// More than one resource matches the name.
    #[error("more than one {resource} named {name} found")]
    AmbiguousName {
        /// Resource type.
        resource: String,
        /// Requested name.
        name: String,
    },

    /// Error response of the cloud API.
    #[error("cloud API returned {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message extracted from the response.
        message: String,
    },

    /// The `auth_url` is not configured.
    #[error("cloud auth_url is not configured")]
    AuthUrlMissing,

    /// No endpoint of the service type in the catalog.
    #[error("no {0} endpoint found in the service catalog")]
    EndpointNotFound(String),

    #[error("invalid header value: {}", source)]
    HeaderValue {
        #[from]
        source: reqwest::header::ToStrError,
    },

    /// HTTP transport error.
    #[error("cloud request failed: {}", source)]
    Http {
        /// The source of the error.
        #[from]
        source: reqwest::Error,
    },

    /// Malformed response.
    #[error(transparent)]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// Structures builder error.
    #[error(transparent)]
    StructBuilder {
        /// The source of the error.
        #[from]
        source: BuilderError,
    },

    /// The token response does not carry the `X-Subject-Token` header.
    #[error("authentication response does not contain a token")]
    TokenMissing,

    /// Unsupported driver.
    #[error("unsupported driver {0}")]
    UnsupportedDriver(String),

    #[error(transparent)]
    Url {
        #[from]
        source: url::ParseError,
    },

    /// Request validation error.
    #[error("request validation error: {}", source)]
    Validation {
        /// The source of the error.
        #[from]
        source: validator::ValidationErrors,
    },
}

impl CloudProviderError {
    /// HTTP status of the failed cloud API call, when the cloud responded.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http { source } => source.status().map(|x| x.as_u16()),
            _ => None,
        }
    }

    /// Whether the failure is transient (transport failure, 5xx, 429).
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http { source } => {
                source.is_timeout() || source.is_connect() || source.is_request()
            }
            Self::Api { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}
