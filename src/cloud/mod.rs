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

//! # Cloud provider
//!
//! Access to the OpenStack cloud the tenants are provisioned in. Following
//! resources are managed:
//!
//! ## Project
//!
//! A container that groups or isolates resources. Every local identity gets
//! its own project.
//!
//! ## User and role assignment
//!
//! The cloud user of the local identity with the role granted on its project.
//!
//! ## Network, subnet and router
//!
//! The private network of the project connected to the external network
//! through the router.
use async_trait::async_trait;
use std::sync::Arc;
use validator::Validate;

pub mod backend;
pub mod error;
#[cfg(test)]
mod mock;
pub mod types;

use crate::cloud::backend::{CloudBackend, openstack::OpenStackBackend};
use crate::cloud::types::*;
use crate::config::Config;
use crate::plugin_manager::PluginManager;

pub use error::CloudProviderError;
#[cfg(test)]
pub use mock::MockCloudProvider;
pub use types::CloudApi;

pub struct CloudProvider {
    backend_driver: Arc<dyn CloudBackend>,
}

impl CloudProvider {
    pub fn new(
        config: &Config,
        plugin_manager: &PluginManager,
    ) -> Result<Self, CloudProviderError> {
        let backend_driver =
            if let Some(driver) = plugin_manager.get_cloud_backend(config.cloud.driver.clone()) {
                driver.clone()
            } else {
                match config.cloud.driver.as_str() {
                    "openstack" => Arc::new(OpenStackBackend::new(&config.cloud)?),
                    _ => {
                        return Err(CloudProviderError::UnsupportedDriver(
                            config.cloud.driver.clone(),
                        ));
                    }
                }
            };
        Ok(Self { backend_driver })
    }
}

#[async_trait]
impl CloudApi for CloudProvider {
    /// Create project
    #[tracing::instrument(level = "info", skip(self))]
    async fn create_project(&self, project: ProjectCreate) -> Result<Project, CloudProviderError> {
        project.validate()?;
        self.backend_driver.create_project(project).await
    }

    /// Create user
    #[tracing::instrument(level = "info", skip(self, user), fields(name = %user.name))]
    async fn create_user(&self, user: UserCreate) -> Result<User, CloudProviderError> {
        user.validate()?;
        self.backend_driver.create_user(user).await
    }

    /// Set the default project of the user
    #[tracing::instrument(level = "info", skip(self))]
    async fn update_user_default_project<'a>(
        &self,
        user_id: &'a str,
        project_id: &'a str,
    ) -> Result<User, CloudProviderError> {
        self.backend_driver
            .update_user_default_project(user_id, project_id)
            .await
    }

    /// Find role by name
    #[tracing::instrument(level = "info", skip(self))]
    async fn find_role<'a>(&self, name: &'a str) -> Result<Option<Role>, CloudProviderError> {
        self.backend_driver.find_role(name).await
    }

    /// Create role
    #[tracing::instrument(level = "info", skip(self))]
    async fn create_role<'a>(&self, name: &'a str) -> Result<Role, CloudProviderError> {
        self.backend_driver.create_role(name).await
    }

    /// Grant the role on the project
    #[tracing::instrument(level = "info", skip(self))]
    async fn assign_project_role_to_user<'a>(
        &self,
        project_id: &'a str,
        user_id: &'a str,
        role_id: &'a str,
    ) -> Result<(), CloudProviderError> {
        self.backend_driver
            .assign_project_role_to_user(project_id, user_id, role_id)
            .await
    }

    /// Find user by name
    #[tracing::instrument(level = "info", skip(self))]
    async fn find_user<'a>(
        &self,
        name: &'a str,
        domain_id: &'a str,
    ) -> Result<Option<User>, CloudProviderError> {
        self.backend_driver.find_user(name, domain_id).await
    }

    /// Create network
    #[tracing::instrument(level = "info", skip(self))]
    async fn create_network(&self, network: NetworkCreate) -> Result<Network, CloudProviderError> {
        network.validate()?;
        self.backend_driver.create_network(network).await
    }

    /// Create subnet
    #[tracing::instrument(level = "info", skip(self))]
    async fn create_subnet(&self, subnet: SubnetCreate) -> Result<Subnet, CloudProviderError> {
        subnet.validate()?;
        self.backend_driver.create_subnet(subnet).await
    }

    /// Find network by name
    #[tracing::instrument(level = "info", skip(self))]
    async fn find_network<'a>(&self, name: &'a str) -> Result<Option<Network>, CloudProviderError> {
        self.backend_driver.find_network(name).await
    }

    /// Create router
    #[tracing::instrument(level = "info", skip(self))]
    async fn create_router(&self, router: RouterCreate) -> Result<Router, CloudProviderError> {
        router.validate()?;
        self.backend_driver.create_router(router).await
    }

    /// Attach the subnet to the router
    #[tracing::instrument(level = "info", skip(self))]
    async fn add_interface_to_router<'a>(
        &self,
        router_id: &'a str,
        subnet_id: &'a str,
    ) -> Result<RouterInterface, CloudProviderError> {
        self.backend_driver
            .add_interface_to_router(router_id, subnet_id)
            .await
    }
}
