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
use validator::Validate;

use crate::error::BuilderError;

/// External gateway of the router.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ExternalGatewayInfo {
    /// The ID of the external network. Network names are not unique, the
    /// gateway is always bound by the ID.
    pub network_id: String,
}

/// Cloud router.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Router {
    /// The router ID.
    pub id: String,

    /// The router name.
    #[serde(default)]
    pub name: String,

    /// The ID of the project owning the router.
    #[serde(default)]
    pub project_id: Option<String>,

    /// The external gateway of the router.
    #[serde(default)]
    pub external_gateway_info: Option<ExternalGatewayInfo>,
}

/// New cloud router.
#[derive(Builder, Clone, Debug, Default, PartialEq, Serialize, Validate)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(into))]
pub struct RouterCreate {
    /// The external gateway of the router.
    pub external_gateway_info: ExternalGatewayInfo,

    /// The router name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// The ID of the project owning the router.
    #[validate(length(min = 1, max = 64))]
    pub project_id: String,
}

/// Router interface attaching a subnet to the router.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RouterInterface {
    /// The router ID.
    pub id: String,

    /// The ID of the attached subnet.
    pub subnet_id: String,

    /// The ID of the port created for the interface.
    #[serde(default)]
    pub port_id: Option<String>,
}
