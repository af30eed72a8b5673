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
use serde::Deserialize;

/// Cloud role.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Role {
    /// The role ID.
    pub id: String,

    /// The role name.
    pub name: String,

    /// The ID of the domain of the role. Global roles have none.
    #[serde(default)]
    pub domain_id: Option<String>,
}
