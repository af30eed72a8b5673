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
use serde::Deserialize;
use validator::Validate;

use crate::error::BuilderError;

/// Cloud user.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct User {
    /// The user ID.
    pub id: String,

    /// The user name.
    pub name: String,

    /// The ID of the domain owning the user.
    #[serde(default)]
    pub domain_id: Option<String>,

    /// The user email (stored by Keystone as an extra attribute).
    #[serde(default)]
    pub email: Option<String>,

    /// The ID of the default project for the user.
    #[serde(default)]
    pub default_project_id: Option<String>,

    /// Whether the user is enabled.
    #[serde(default)]
    pub enabled: bool,
}

/// New cloud user.
#[derive(Builder, Clone, Debug, Validate)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct UserCreate {
    /// The ID of the domain of the user.
    #[validate(length(min = 1, max = 64))]
    pub domain_id: String,

    /// The user email.
    #[builder(default)]
    #[validate(email)]
    pub email: Option<String>,

    /// If set to true, user is enabled.
    #[builder(default = "true")]
    pub enabled: bool,

    /// The user name. Must be unique within the owning domain.
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// The password for the user.
    pub password: SecretString,
}
