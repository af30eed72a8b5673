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

//! # Cloud connection configuration
//!
//! Credentials of the operator account used to create the tenant resources.
//! The account must be allowed to manage projects, users, role assignments
//! and networks on behalf of other projects (usually the cloud `admin`).
use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

use crate::config::common::{default_admin, default_domain_id, default_openstack_driver};

/// Cloud connection.
#[derive(Debug, Deserialize, Clone)]
pub struct CloudSection {
    /// Cloud backend driver.
    #[serde(default = "default_openstack_driver")]
    pub driver: String,

    /// Keystone authentication url (i.e. `http://keystone:5000`).
    pub auth_url: Option<Url>,

    /// Operator user name.
    #[serde(default = "default_admin")]
    pub username: String,

    /// Operator user password.
    #[serde(default)]
    pub password: SecretString,

    /// Domain of the operator user.
    #[serde(default = "default_domain_id")]
    pub user_domain_id: String,

    /// Project the operator token is scoped to.
    #[serde(default = "default_admin")]
    pub project_name: String,

    /// Domain of the scope project.
    #[serde(default = "default_domain_id")]
    pub project_domain_id: String,

    /// Region used to select the endpoints from the catalog.
    pub region_name: Option<String>,

    /// Endpoint interface used to select the endpoints from the catalog.
    #[serde(default = "default_interface")]
    pub interface: String,

    /// Identity endpoint override. Skips the catalog lookup.
    pub identity_endpoint: Option<Url>,

    /// Network endpoint override. Skips the catalog lookup.
    pub network_endpoint: Option<Url>,

    /// Timeout of a single API request in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for CloudSection {
    fn default() -> Self {
        Self {
            driver: default_openstack_driver(),
            auth_url: None,
            username: default_admin(),
            password: SecretString::default(),
            user_domain_id: default_domain_id(),
            project_name: default_admin(),
            project_domain_id: default_domain_id(),
            region_name: None,
            interface: default_interface(),
            identity_endpoint: None,
            network_endpoint: None,
            timeout: default_timeout(),
        }
    }
}

fn default_interface() -> String {
    "public".into()
}

fn default_timeout() -> u64 {
    60
}
