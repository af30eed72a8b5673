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
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::BuilderError;

/// Cloud subnet.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Subnet {
    /// The subnet ID.
    pub id: String,

    /// The subnet name.
    #[serde(default)]
    pub name: String,

    /// The ID of the network the subnet belongs to.
    pub network_id: String,

    /// The CIDR of the subnet.
    pub cidr: String,

    /// The gateway IP address.
    #[serde(default)]
    pub gateway_ip: Option<String>,

    /// The IP protocol version.
    pub ip_version: u8,

    /// The ID of the project owning the subnet.
    #[serde(default)]
    pub project_id: Option<String>,
}

/// New cloud subnet.
#[derive(Builder, Clone, Debug, Default, PartialEq, Serialize, Validate)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct SubnetCreate {
    /// The CIDR of the subnet.
    #[validate(length(min = 1, max = 64))]
    pub cidr: String,

    /// The gateway IP address.
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_ip: Option<String>,

    /// The IP protocol version (4 or 6).
    #[validate(custom(function = "validate_ip_version"))]
    pub ip_version: u8,

    /// The subnet name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// The ID of the network the subnet is created on.
    #[validate(length(min = 1, max = 64))]
    pub network_id: String,

    /// The ID of the project owning the subnet.
    #[validate(length(min = 1, max = 64))]
    pub project_id: String,
}

fn validate_ip_version(version: u8) -> Result<(), ValidationError> {
    match version {
        4 | 6 => Ok(()),
        _ => Err(ValidationError::new("ip_version")),
    }
}
