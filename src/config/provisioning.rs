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

//! # Tenant provisioning configuration
use serde::Deserialize;

use crate::config::common::{default_admin, default_domain_id};

/// Tenant provisioning parameters.
#[derive(Debug, Deserialize, Clone)]
pub struct ProvisioningSection {
    /// Domain where the projects and users are created.
    #[serde(default = "default_domain_id")]
    pub domain_id: String,

    /// Prefix of the project name. The local identity ID is appended.
    #[serde(default = "default_project_name_prefix")]
    pub project_name_prefix: String,

    /// Role granted to the new user on its project. Created when missing.
    #[serde(default = "default_member_role")]
    pub member_role: String,

    /// Role granted to the operator user on every new project. Never created.
    #[serde(default = "default_admin")]
    pub admin_role: String,

    /// Operator user granted the `admin_role` on every new project.
    #[serde(default = "default_admin")]
    pub admin_user: String,

    /// Name of the external network used as the router gateway.
    #[serde(default = "default_external_network")]
    pub external_network: String,

    /// IP version of the private subnet.
    #[serde(default = "default_ip_version")]
    pub ip_version: u8,

    /// CIDR of the private subnet.
    #[serde(default = "default_cidr")]
    pub cidr: String,

    /// Gateway IP of the private subnet.
    #[serde(default = "default_gateway_ip")]
    pub gateway_ip: String,

    /// Length of the random password of the cloud user.
    #[serde(default = "default_password_length")]
    pub password_length: usize,
}

impl Default for ProvisioningSection {
    fn default() -> Self {
        Self {
            domain_id: default_domain_id(),
            project_name_prefix: default_project_name_prefix(),
            member_role: default_member_role(),
            admin_role: default_admin(),
            admin_user: default_admin(),
            external_network: default_external_network(),
            ip_version: default_ip_version(),
            cidr: default_cidr(),
            gateway_ip: default_gateway_ip(),
            password_length: default_password_length(),
        }
    }
}

fn default_project_name_prefix() -> String {
    "project_".into()
}

fn default_member_role() -> String {
    "member".into()
}

fn default_external_network() -> String {
    "public".into()
}

fn default_ip_version() -> u8 {
    4
}

fn default_cidr() -> String {
    "10.0.0.0/24".into()
}

fn default_gateway_ip() -> String {
    "10.0.0.1".into()
}

fn default_password_length() -> usize {
    24
}
