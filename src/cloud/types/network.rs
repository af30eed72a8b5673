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

/// Cloud network.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Network {
    /// The network ID.
    pub id: String,

    /// The network name.
    #[serde(default)]
    pub name: String,

    /// The ID of the project owning the network.
    #[serde(default)]
    pub project_id: Option<String>,

    /// Whether the network is an external network.
    #[serde(default, rename = "router:external")]
    pub external: bool,
}

/// New cloud network.
#[derive(Builder, Clone, Debug, Default, PartialEq, Serialize, Validate)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(into))]
pub struct NetworkCreate {
    /// The network name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    /// The ID of the project owning the network.
    #[validate(length(min = 1, max = 64))]
    pub project_id: String,
}
