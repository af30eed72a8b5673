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

use crate::identity::types::{CloudResources, Identity};
use crate::provisioning::ProvisioningProviderError;
use crate::service::ServiceState;

/// Tenant provisioning API.
#[async_trait]
pub trait ProvisioningApi: Send + Sync {
    /// Provision the cloud resources for the identity.
    ///
    /// Returns the already stored resources without touching the cloud when
    /// the identity is provisioned.
    async fn provision<'a>(
        &self,
        state: &ServiceState,
        identity: &'a Identity,
    ) -> Result<CloudResources, ProvisioningProviderError>;
}
