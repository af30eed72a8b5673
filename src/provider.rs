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
//! # Provider manager
//!
//! Provider manager provides access to the individual service providers. This
//! gives an easy interact for passing overall manager down to the individual
//! providers that might need to call other providers while also allowing an
//! easy injection of mocked providers.
use derive_builder::Builder;
use mockall_double::double;

use crate::account::AccountApi;
#[double]
use crate::account::AccountProvider;
use crate::cloud::CloudApi;
#[double]
use crate::cloud::CloudProvider;
use crate::config::Config;
use crate::error::ServiceError;
use crate::identity::IdentityApi;
#[double]
use crate::identity::IdentityProvider;
use crate::plugin_manager::PluginManager;
use crate::provisioning::ProvisioningApi;
#[double]
use crate::provisioning::ProvisioningProvider;

/// Global provider manager.
#[derive(Builder)]
// It is necessary to use the owned pattern since otherwise builder invokes clone which immediately
// confuses mockall used in tests
#[builder(pattern = "owned")]
pub struct Provider {
    /// Configuration.
    pub config: Config,
    /// Account flows provider.
    account: AccountProvider,
    /// Cloud provider.
    cloud: CloudProvider,
    /// Identity provider.
    identity: IdentityProvider,
    /// Tenant provisioning provider.
    provisioning: ProvisioningProvider,
}

impl Provider {
    pub fn new(cfg: Config, plugin_manager: PluginManager) -> Result<Self, ServiceError> {
        let account_provider = AccountProvider::new(&cfg)?;
        let cloud_provider = CloudProvider::new(&cfg, &plugin_manager)?;
        let identity_provider = IdentityProvider::new(&cfg, &plugin_manager)?;
        let provisioning_provider = ProvisioningProvider::new(&cfg)?;

        Ok(Self {
            config: cfg,
            account: account_provider,
            cloud: cloud_provider,
            identity: identity_provider,
            provisioning: provisioning_provider,
        })
    }

    /// Get the account provider.
    pub fn get_account_provider(&self) -> &impl AccountApi {
        &self.account
    }

    /// Get the cloud provider.
    pub fn get_cloud_provider(&self) -> &impl CloudApi {
        &self.cloud
    }

    /// Get the identity provider.
    pub fn get_identity_provider(&self) -> &impl IdentityApi {
        &self.identity
    }

    /// Get the provisioning provider.
    pub fn get_provisioning_provider(&self) -> &impl ProvisioningApi {
        &self.provisioning
    }
}

#[cfg(test)]
impl Provider {
    pub fn mocked_builder() -> ProviderBuilder {
        let config = Config::default();
        let account_mock = crate::account::MockAccountProvider::default();
        let cloud_mock = crate::cloud::MockCloudProvider::default();
        let identity_mock = crate::identity::MockIdentityProvider::default();
        let provisioning_mock = crate::provisioning::MockProvisioningProvider::default();

        ProviderBuilder::default()
            .config(config)
            .account(account_mock)
            .cloud(cloud_mock)
            .identity(identity_mock)
            .provisioning(provisioning_mock)
    }
}
