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
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::BuilderError;

/// Identifiers of the cloud resources provisioned for the identity.
///
/// The resources are always provisioned and stored together.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct CloudResources {
    /// Cloud project ID.
    pub project_id: String,
    /// Cloud user ID.
    pub user_id: String,
    /// Private network ID.
    pub network_id: String,
    /// Private subnet ID.
    pub subnet_id: String,
    /// Router ID.
    pub router_id: String,
}

/// Local identity.
#[derive(Builder, Clone, Debug, Deserialize, PartialEq, Serialize)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct Identity {
    /// Local identity ID.
    pub id: i32,

    /// Email of the identity.
    pub email: String,

    /// Username.
    #[builder(default)]
    pub username: Option<String>,

    /// Display name.
    #[builder(default)]
    pub name: Option<String>,

    /// Profile picture URL.
    #[builder(default)]
    pub profile_pic: Option<String>,

    /// Hash of the password. Identities created through the external login
    /// have none.
    #[builder(default)]
    #[serde(skip)]
    pub password_hash: Option<String>,

    /// Whether the email was confirmed.
    #[builder(default)]
    pub confirmed: bool,

    /// Currently issued password reset token.
    #[builder(default)]
    #[serde(skip)]
    pub reset_token: Option<String>,

    /// Provisioned cloud resources.
    #[builder(default)]
    pub cloud: Option<CloudResources>,

    /// Creation time.
    #[builder(default = "Utc::now()")]
    pub created_at: DateTime<Utc>,
}

impl Identity {
    /// Whether the tenant of the identity is already provisioned.
    pub fn is_provisioned(&self) -> bool {
        self.cloud.is_some()
    }
}

/// New local identity.
#[derive(Builder, Clone, Debug, Default, Validate)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct IdentityCreate {
    /// Email of the identity.
    #[validate(email)]
    #[validate(length(max = 256))]
    pub email: String,

    /// Username.
    #[builder(default)]
    #[validate(length(min = 1, max = 256))]
    pub username: Option<String>,

    /// Display name.
    #[builder(default)]
    #[validate(length(max = 256))]
    pub name: Option<String>,

    /// Profile picture URL.
    #[builder(default)]
    #[validate(url)]
    pub profile_pic: Option<String>,

    /// Plain text password. Hashed before being stored.
    #[builder(default)]
    pub password: Option<SecretString>,

    /// Whether the email is already confirmed.
    #[builder(default)]
    pub confirmed: bool,
}
