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
use mockall::mock;

use crate::cloud::CloudApi;
use crate::cloud::error::CloudProviderError;
use crate::cloud::types::*;
use crate::config::Config;
use crate::plugin_manager::PluginManager;

mock! {
    pub CloudProvider {
        pub fn new(cfg: &Config, plugin_manager: &PluginManager) -> Result<Self, CloudProviderError>;
    }

    #[async_trait]
    impl CloudApi for CloudProvider {
        async fn create_project(&self, project: ProjectCreate) -> Result<Project, CloudProviderError>;

        async fn create_user(&self, user: UserCreate) -> Result<User, CloudProviderError>;

        async fn update_user_default_project<'a>(
            &self,
            user_id: &'a str,
            project_id: &'a str,
        ) -> Result<User, CloudProviderError>;

        async fn find_role<'a>(&self, name: &'a str) -> Result<Option<Role>, CloudProviderError>;

        async fn create_role<'a>(&self, name: &'a str) -> Result<Role, CloudProviderError>;

        async fn assign_project_role_to_user<'a>(
            &self,
            project_id: &'a str,
            user_id: &'a str,
            role_id: &'a str,
        ) -> Result<(), CloudProviderError>;

        async fn find_user<'a>(
            &self,
            name: &'a str,
            domain_id: &'a str,
        ) -> Result<Option<User>, CloudProviderError>;

        async fn create_network(&self, network: NetworkCreate) -> Result<Network, CloudProviderError>;

        async fn create_subnet(&self, subnet: SubnetCreate) -> Result<Subnet, CloudProviderError>;

        async fn find_network<'a>(&self, name: &'a str) -> Result<Option<Network>, CloudProviderError>;

        async fn create_router(&self, router: RouterCreate) -> Result<Router, CloudProviderError>;

        async fn add_interface_to_router<'a>(
            &self,
            router_id: &'a str,
            subnet_id: &'a str,
        ) -> Result<RouterInterface, CloudProviderError>;
    }
}
