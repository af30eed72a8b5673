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
//! # Cloud API types
pub mod network;
pub mod project;
pub mod provider_api;
pub mod role;
pub mod router;
pub mod subnet;
pub mod user;

pub use network::{Network, NetworkCreate, NetworkCreateBuilder};
pub use project::{Project, ProjectCreate, ProjectCreateBuilder};
pub use provider_api::CloudApi;
pub use role::Role;
pub use router::{
    ExternalGatewayInfo, Router, RouterCreate, RouterCreateBuilder, RouterInterface,
};
pub use subnet::{Subnet, SubnetCreate, SubnetCreateBuilder};
pub use user::{User, UserCreate, UserCreateBuilder};
