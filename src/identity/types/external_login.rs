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

use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::BuilderError;

/// Link of the local identity to the account of the external identity
/// provider.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ExternalLoginLink {
    /// Link ID.
    pub id: i32,
    /// Name of the external identity provider (`google`, `keycloak`).
    pub provider: String,
    /// Subject of the account in the external identity provider.
    pub provider_user_id: String,
    /// Local identity ID.
    pub identity_id: i32,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// New external login link.
#[derive(Builder, Clone, Debug, Deserialize, PartialEq, Serialize, Validate)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(into))]
pub struct ExternalLoginLinkCreate {
    /// Name of the external identity provider.
    #[validate(length(min = 1, max = 64))]
    pub provider: String,
    /// Subject of the account in the external identity provider.
    #[validate(length(min = 1, max = 256))]
    pub provider_user_id: String,
    /// Local identity ID.
    pub identity_id: i32,
}
