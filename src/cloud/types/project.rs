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

/// Cloud project.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Project {
    /// The project ID.
    pub id: String,

    /// The project name.
    pub name: String,

    /// The description of the project.
    #[serde(default)]
    pub description: Option<String>,

    /// The ID of the domain owning the project.
    #[serde(default)]
    pub domain_id: Option<String>,

    /// Whether the project is enabled.
    #[serde(default)]
    pub enabled: bool,
}

/// New cloud project.
#[derive(Builder, Clone, Debug, Default, Deserialize, PartialEq, Serialize, Validate)]
#[builder(build_fn(error = "BuilderError"))]
#[builder(setter(strip_option, into))]
pub struct ProjectCreate {
    /// The description of the project.
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 255))]
    pub description: Option<String>,

    /// The ID of the domain for the project.
    #[validate(length(min = 1, max = 64))]
    pub domain_id: String,

    /// If set to true, project is enabled.
    #[builder(default = "true")]
    pub enabled: bool,

    /// The name of the project, which must be unique within the owning domain.
    #[validate(length(min = 1, max = 64))]
    pub name: String,
}
