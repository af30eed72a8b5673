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

use async_trait::async_trait;

use crate::cloud::CloudProviderError;
use crate::cloud::types::*;

/// Cloud API.
///
/// Operations of the OpenStack Identity and Networking services required for
/// the tenant provisioning.
#[async_trait]
pub trait CloudApi: Send + Sync {
    /// Create a new project.
    async fn create_project(&self, project: ProjectCreate) -> Result<Project, CloudProviderError>;

    /// Create a new user.
    async fn create_user(&self, user: UserCreate) -> Result<User, CloudProviderError>;

    /// Set the default project of the user.
    async fn update_user_default_project<'a>(
        &self,
        user_id: &'a str,
        project_id: &'a str,
    ) -> Result<User, CloudProviderError>;

    /// Find the role by the name.
    async fn find_role<'a>(&self, name: &'a str) -> Result<Option<Role>, CloudProviderError>;

    /// Create a new global role.
    async fn create_role<'a>(&self, name: &'a str) -> Result<Role, CloudProviderError>;

    /// Grant the role to the user on the project.
    async fn assign_project_role_to_user<'a>(
        &self,
        project_id: &'a str,
        user_id: &'a str,
        role_id: &'a str,
    ) -> Result<(), CloudProviderError>;

    /// Find the user by the name in the domain.
    async fn find_user<'a>(
        &self,
        name: &'a str,
        domain_id: &'a str,
    ) -> Result<Option<User>, CloudProviderError>;

    /// Create a new network.
    async fn create_network(&self, network: NetworkCreate) -> Result<Network, CloudProviderError>;

    /// Create a new subnet.
    async fn create_subnet(&self, subnet: SubnetCreate) -> Result<Subnet, CloudProviderError>;

    /// Find the network by the name.
    async fn find_network<'a>(&self, name: &'a str) -> Result<Option<Network>, CloudProviderError>;

    /// Create a new router.
    async fn create_router(&self, router: RouterCreate) -> Result<Router, CloudProviderError>;

    /// Attach the subnet to the router.
    async fn add_interface_to_router<'a>(
        &self,
        router_id: &'a str,
        subnet_id: &'a str,
    ) -> Result<RouterInterface, CloudProviderError>;
}
