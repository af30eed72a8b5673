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

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cloud::CloudProviderError;
use crate::error::BuilderError;
use crate::identity::IdentityProviderError;
use crate::identity::types::CloudResources;

/// Step of the provisioning workflow.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProvisioningStep {
    CreateProject,
    CreateUser,
    SetDefaultProject,
    ResolveRoles,
    CreateMemberRole,
    AssignMemberRole,
    ResolveAdminUser,
    AssignAdminRole,
    CreateNetwork,
    CreateSubnet,
    ResolveExternalNetwork,
    CreateRouter,
    AddRouterInterface,
}

impl fmt::Display for ProvisioningStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CreateProject => "create project",
            Self::CreateUser => "create user",
            Self::SetDefaultProject => "set default project",
            Self::ResolveRoles => "resolve roles",
            Self::CreateMemberRole => "create member role",
            Self::AssignMemberRole => "assign member role",
            Self::ResolveAdminUser => "resolve admin user",
            Self::AssignAdminRole => "assign admin role",
            Self::CreateNetwork => "create network",
            Self::CreateSubnet => "create subnet",
            Self::ResolveExternalNetwork => "resolve external network",
            Self::CreateRouter => "create router",
            Self::AddRouterInterface => "add router interface",
        };
        f.write_str(name)
    }
}

/// Cloud resources created before the provisioning failed.
///
/// They are not deleted automatically and need to be cleaned up by the
/// operator.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct OrphanedResources {
    pub project_id: Option<String>,
    pub user_id: Option<String>,
    pub network_id: Option<String>,
    pub subnet_id: Option<String>,
    pub router_id: Option<String>,
}

impl OrphanedResources {
    /// Whether nothing was created.
    pub fn is_empty(&self) -> bool {
        self.project_id.is_none()
            && self.user_id.is_none()
            && self.network_id.is_none()
            && self.subnet_id.is_none()
            && self.router_id.is_none()
    }
}

impl From<&CloudResources> for OrphanedResources {
    fn from(value: &CloudResources) -> Self {
        Self {
            project_id: Some(value.project_id.clone()),
            user_id: Some(value.user_id.clone()),
            network_id: Some(value.network_id.clone()),
            subnet_id: Some(value.subnet_id.clone()),
            router_id: Some(value.router_id.clone()),
        }
    }
}

/// Classification of the provisioning failure.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProvisioningErrorKind {
    /// The external network does not exist. Retrying does not help.
    ExternalNetworkMissing,
    /// A cloud call failed.
    CloudApi,
    /// Reading the identity or storing the result failed.
    Store,
    /// The identity was provisioned concurrently.
    Conflict,
    /// The identity does not exist.
    NotFound,
    /// The provisioning parameters are invalid.
    Configuration,
}

#[derive(Error, Debug)]
pub enum ProvisioningProviderError {
    /// The identity was provisioned by a concurrent request.
    #[error("identity {identity_id} was provisioned concurrently")]
    AlreadyProvisioned {
        identity_id: i32,
        orphaned: OrphanedResources,
    },

    /// A cloud call failed.
    #[error("provisioning failed at the {step} step: {source}")]
    CloudApi {
        step: ProvisioningStep,
        source: CloudProviderError,
        orphaned: OrphanedResources,
    },

    /// The external network does not exist.
    #[error("external network {name} not found")]
    ExternalNetworkNotFound {
        name: String,
        orphaned: OrphanedResources,
    },

    /// Reading the identity failed.
    #[error(transparent)]
    Identity {
        #[from]
        source: IdentityProviderError,
    },

    #[error("identity {0} not found")]
    IdentityNotFound(i32),

    /// Invalid `[provisioning]` configuration.
    #[error("invalid provisioning configuration: {0}")]
    InvalidConfiguration(String),

    /// Storing the provisioned resources failed.
    #[error("storing cloud resources failed: {source}")]
    Store {
        source: IdentityProviderError,
        orphaned: OrphanedResources,
    },

    /// Structures builder error.
    #[error(transparent)]
    StructBuilder {
        /// The source of the error.
        #[from]
        source: BuilderError,
    },
}

impl ProvisioningProviderError {
    /// Classify the error.
    pub fn kind(&self) -> ProvisioningErrorKind {
        match self {
            Self::AlreadyProvisioned { .. } => ProvisioningErrorKind::Conflict,
            Self::CloudApi { .. } | Self::StructBuilder { .. } => ProvisioningErrorKind::CloudApi,
            Self::ExternalNetworkNotFound { .. } => ProvisioningErrorKind::ExternalNetworkMissing,
            Self::Identity { .. } | Self::Store { .. } => ProvisioningErrorKind::Store,
            Self::IdentityNotFound(..) => ProvisioningErrorKind::NotFound,
            Self::InvalidConfiguration(..) => ProvisioningErrorKind::Configuration,
        }
    }

    /// Whether repeating the provisioning may succeed.
    pub fn is_retryable(&self) -> bool {
        !matches!(
            self.kind(),
            ProvisioningErrorKind::ExternalNetworkMissing
                | ProvisioningErrorKind::Conflict
                | ProvisioningErrorKind::NotFound
                | ProvisioningErrorKind::Configuration
        )
    }

    /// Cloud resources left behind by the failed provisioning.
    pub fn orphaned(&self) -> Option<&OrphanedResources> {
        match self {
            Self::AlreadyProvisioned { orphaned, .. }
            | Self::CloudApi { orphaned, .. }
            | Self::ExternalNetworkNotFound { orphaned, .. }
            | Self::Store { orphaned, .. } => Some(orphaned),
            _ => None,
        }
        .filter(|x| !x.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        let err = ProvisioningProviderError::ExternalNetworkNotFound {
            name: "public".into(),
            orphaned: OrphanedResources::default(),
        };
        assert_eq!(ProvisioningErrorKind::ExternalNetworkMissing, err.kind());
        assert!(!err.is_retryable());
        assert!(err.orphaned().is_none());

        let err = ProvisioningProviderError::CloudApi {
            step: ProvisioningStep::CreateSubnet,
            source: CloudProviderError::Api {
                status: 503,
                message: "unavailable".into(),
            },
            orphaned: OrphanedResources {
                project_id: Some("P1".into()),
                ..Default::default()
            },
        };
        assert_eq!(ProvisioningErrorKind::CloudApi, err.kind());
        assert!(err.is_retryable());
        assert_eq!(
            Some("P1"),
            err.orphaned().and_then(|x| x.project_id.as_deref())
        );
        assert!(err.to_string().contains("create subnet"));

        let err = ProvisioningProviderError::AlreadyProvisioned {
            identity_id: 1,
            orphaned: OrphanedResources::default(),
        };
        assert_eq!(ProvisioningErrorKind::Conflict, err.kind());
        assert!(!err.is_retryable());
    }
}
