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

//! # Tenant provisioning
//!
//! Every local identity gets its own slice of the cloud: a project, a cloud
//! user with the member role on it, a private network with a subnet and a
//! router connecting it to the external network. The resource identifiers are
//! stored on the identity once all of them exist.
//!
//! Provisioning of the same identity is serialized within the process. Inside
//! the lock the identity is read again so the second caller sees the stored
//! result of the first one. Across processes the conditional store of the
//! result lets only one writer win, the loser reports its resources as
//! orphaned.
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, error, info};

pub mod error;
#[cfg(test)]
mod mock;
pub mod types;
pub mod workflow;

use crate::config::Config;
use crate::identity::types::{CloudResources, Identity};
use crate::identity::{IdentityApi, IdentityProviderError};
use crate::service::ServiceState;

pub use error::{
    OrphanedResources, ProvisioningErrorKind, ProvisioningProviderError, ProvisioningStep,
};
#[cfg(test)]
pub use mock::MockProvisioningProvider;
pub use types::ProvisioningApi;

type IdentityLock = Arc<tokio::sync::Mutex<()>>;

/// Reference to the lock of one identity.
///
/// The registry entry is removed once the last handle is dropped, also when
/// the provisioning future is cancelled while waiting for the lock.
struct LockHandle<'a> {
    registry: &'a Mutex<HashMap<i32, IdentityLock>>,
    id: i32,
    lock: IdentityLock,
}

impl LockHandle<'_> {
    async fn lock(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.lock.lock().await
    }
}

impl Drop for LockHandle<'_> {
    fn drop(&mut self) {
        let mut locks = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
        // Only the registry and this handle refer to the lock.
        if locks.get(&self.id).is_some_and(|lock| {
            Arc::ptr_eq(lock, &self.lock) && Arc::strong_count(lock) == 2
        }) {
            locks.remove(&self.id);
        }
    }
}

#[derive(Default)]
pub struct ProvisioningProvider {
    /// Locks of the identities being provisioned.
    locks: Mutex<HashMap<i32, IdentityLock>>,
}

impl ProvisioningProvider {
    pub fn new(config: &Config) -> Result<Self, ProvisioningProviderError> {
        let conf = &config.provisioning;
        if !matches!(conf.ip_version, 4 | 6) {
            return Err(ProvisioningProviderError::InvalidConfiguration(format!(
                "unsupported ip_version {}",
                conf.ip_version
            )));
        }
        if conf.password_length < 8 {
            return Err(ProvisioningProviderError::InvalidConfiguration(
                "password_length must be at least 8".into(),
            ));
        }
        Ok(Self::default())
    }

    fn lock_handle(&self, id: i32) -> LockHandle<'_> {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        LockHandle {
            registry: &self.locks,
            id,
            lock: locks.entry(id).or_default().clone(),
        }
    }

    /// Provision the identity while holding its lock.
    async fn provision_locked(
        &self,
        state: &ServiceState,
        id: i32,
    ) -> Result<CloudResources, ProvisioningProviderError> {
        let identity_provider = state.provider.get_identity_provider();
        let identity = identity_provider
            .get_identity(state, id)
            .await?
            .ok_or(ProvisioningProviderError::IdentityNotFound(id))?;
        if let Some(cloud) = identity.cloud {
            debug!("identity {} was provisioned while waiting for the lock", id);
            return Ok(cloud);
        }

        let resources = workflow::run(
            state.provider.get_cloud_provider(),
            &state.config.provisioning,
            &identity,
        )
        .await?;

        match identity_provider
            .set_cloud_resources(state, id, &resources)
            .await
        {
            Ok(()) => {
                info!(
                    identity_id = id,
                    project_id = %resources.project_id,
                    "tenant provisioned"
                );
                Ok(resources)
            }
            Err(IdentityProviderError::AlreadyProvisioned(_)) => {
                let orphaned = OrphanedResources::from(&resources);
                error!(
                    identity_id = id,
                    ?orphaned,
                    "identity was provisioned concurrently, cloud resources left behind"
                );
                Err(ProvisioningProviderError::AlreadyProvisioned {
                    identity_id: id,
                    orphaned,
                })
            }
            Err(source) => {
                let orphaned = OrphanedResources::from(&resources);
                error!(
                    identity_id = id,
                    ?orphaned,
                    "storing cloud resources failed, cloud resources left behind: {}",
                    source
                );
                Err(ProvisioningProviderError::Store { source, orphaned })
            }
        }
    }
}

#[async_trait]
impl ProvisioningApi for ProvisioningProvider {
    /// Provision the tenant of the identity
    #[tracing::instrument(level = "info", skip(self, state, identity), fields(identity_id = identity.id))]
    async fn provision<'a>(
        &self,
        state: &ServiceState,
        identity: &'a Identity,
    ) -> Result<CloudResources, ProvisioningProviderError> {
        if let Some(cloud) = &identity.cloud {
            debug!("identity is already provisioned");
            return Ok(cloud.clone());
        }

        let handle = self.lock_handle(identity.id);
        let _guard = handle.lock().await;
        self.provision_locked(state, identity.id).await
    }
}
