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

//! # Configuration helpers
pub fn default_sql_driver() -> String {
    "sql".into()
}

pub fn default_openstack_driver() -> String {
    "openstack".into()
}

pub fn default_domain_id() -> String {
    "default".into()
}

pub fn default_admin() -> String {
    "admin".into()
}
