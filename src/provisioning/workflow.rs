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
//! Tenant provisioning workflow.
//!
//! The steps run strictly in order and the first failure aborts the rest.
//! Nothing is retried and nothing created so far is removed.
use rand::distr::{Alphanumeric, SampleString};
use secrecy::SecretString;
use tracing::{error, info};

use crate::cloud::CloudApi;
use crate::cloud::CloudProviderError;
use crate::cloud::types::*;
use crate::config::ProvisioningSection;
use crate::identity::types::{CloudResources, Identity};
use crate::provisioning::error::{OrphanedResources, ProvisioningProviderError, ProvisioningStep};

/// Reason of the aborted workflow.
enum StepFailure {
    Cloud(ProvisioningStep, CloudProviderError),
    ExternalNetworkNotFound(String),
}

impl StepFailure {
    fn into_error(self, orphaned: OrphanedResources) -> ProvisioningProviderError {
        match self {
            Self::Cloud(step, source) => ProvisioningProviderError::CloudApi {
                step,
                source,
                orphaned,
            },
            Self::ExternalNetworkNotFound(name) => {
                ProvisioningProviderError::ExternalNetworkNotFound { name, orphaned }
            }
        }
    }
}

/// Wrap the error of the step.
fn failed<E: Into<CloudProviderError>>(step: ProvisioningStep) -> impl FnOnce(E) -> StepFailure {
    move |err| StepFailure::Cloud(step, err.into())
}

/// Name of the project of the identity.
pub fn project_name(config: &ProvisioningSection, identity: &Identity) -> String {
    format!("{}{}", config.project_name_prefix, identity.id)
}

/// Random password of the cloud user.
fn generate_password(length: usize) -> SecretString {
    SecretString::from(Alphanumeric.sample_string(&mut rand::rng(), length))
}

/// Run the provisioning workflow for the identity.
pub async fn run<C: CloudApi>(
    cloud: &C,
    config: &ProvisioningSection,
    identity: &Identity,
) -> Result<CloudResources, ProvisioningProviderError> {
    let mut created = OrphanedResources::default();
    match execute(cloud, config, identity, &mut created).await {
        Ok(resources) => Ok(resources),
        Err(failure) => {
            let err = failure.into_error(created);
            error!(
                identity_id = identity.id,
                orphaned = ?err.orphaned(),
                "tenant provisioning failed: {}",
                err
            );
            Err(err)
        }
    }
}

async fn execute<C: CloudApi>(
    cloud: &C,
    config: &ProvisioningSection,
    identity: &Identity,
    created: &mut OrphanedResources,
) -> Result<CloudResources, StepFailure> {
    let project_name = project_name(config, identity);

    let project = cloud
        .create_project(
            ProjectCreateBuilder::default()
                .name(project_name.clone())
                .description(format!("Project for {}", identity.email))
                .domain_id(config.domain_id.clone())
                .build()
                .map_err(failed(ProvisioningStep::CreateProject))?,
        )
        .await
        .map_err(failed(ProvisioningStep::CreateProject))?;
    created.project_id = Some(project.id.clone());

    let user = cloud
        .create_user(
            UserCreateBuilder::default()
                .name(identity.email.clone())
                .email(identity.email.clone())
                .password(generate_password(config.password_length))
                .domain_id(config.domain_id.clone())
                .build()
                .map_err(failed(ProvisioningStep::CreateUser))?,
        )
        .await
        .map_err(failed(ProvisioningStep::CreateUser))?;
    created.user_id = Some(user.id.clone());
    cloud
        .update_user_default_project(&user.id, &project.id)
        .await
        .map_err(failed(ProvisioningStep::SetDefaultProject))?;

    let member_role = match cloud
        .find_role(&config.member_role)
        .await
        .map_err(failed(ProvisioningStep::ResolveRoles))?
    {
        Some(role) => role,
        None => cloud
            .create_role(&config.member_role)
            .await
            .map_err(failed(ProvisioningStep::CreateMemberRole))?,
    };
    let admin_role = cloud
        .find_role(&config.admin_role)
        .await
        .map_err(failed(ProvisioningStep::ResolveRoles))?;
    cloud
        .assign_project_role_to_user(&project.id, &user.id, &member_role.id)
        .await
        .map_err(failed(ProvisioningStep::AssignMemberRole))?;
    let admin_user = cloud
        .find_user(&config.admin_user, &config.domain_id)
        .await
        .map_err(failed(ProvisioningStep::ResolveAdminUser))?;
    match (admin_user, admin_role) {
        (Some(admin_user), Some(admin_role)) => {
            cloud
                .assign_project_role_to_user(&project.id, &admin_user.id, &admin_role.id)
                .await
                .map_err(failed(ProvisioningStep::AssignAdminRole))?;
        }
        _ => {
            info!(
                "admin user {} or admin role {} not found, skipping the admin assignment",
                config.admin_user, config.admin_role
            );
        }
    }

    let network = cloud
        .create_network(
            NetworkCreateBuilder::default()
                .name(format!("{project_name}-private"))
                .project_id(project.id.clone())
                .build()
                .map_err(failed(ProvisioningStep::CreateNetwork))?,
        )
        .await
        .map_err(failed(ProvisioningStep::CreateNetwork))?;
    created.network_id = Some(network.id.clone());

    let subnet = cloud
        .create_subnet(
            SubnetCreateBuilder::default()
                .name(format!("{project_name}-subnet"))
                .network_id(network.id.clone())
                .project_id(project.id.clone())
                .ip_version(config.ip_version)
                .cidr(config.cidr.clone())
                .gateway_ip(config.gateway_ip.clone())
                .build()
                .map_err(failed(ProvisioningStep::CreateSubnet))?,
        )
        .await
        .map_err(failed(ProvisioningStep::CreateSubnet))?;
    created.subnet_id = Some(subnet.id.clone());

    let external_network = cloud
        .find_network(&config.external_network)
        .await
        .map_err(failed(ProvisioningStep::ResolveExternalNetwork))?
        .ok_or_else(|| StepFailure::ExternalNetworkNotFound(config.external_network.clone()))?;

    let router = cloud
        .create_router(
            RouterCreateBuilder::default()
                .name(format!("{project_name}-router"))
                .project_id(project.id.clone())
                .external_gateway_info(ExternalGatewayInfo {
                    network_id: external_network.id,
                })
                .build()
                .map_err(failed(ProvisioningStep::CreateRouter))?,
        )
        .await
        .map_err(failed(ProvisioningStep::CreateRouter))?;
    created.router_id = Some(router.id.clone());
    cloud
        .add_interface_to_router(&router.id, &subnet.id)
        .await
        .map_err(failed(ProvisioningStep::AddRouterInterface))?;

    Ok(CloudResources {
        project_id: project.id,
        user_id: user.id,
        network_id: network.id,
        subnet_id: subnet.id,
        router_id: router.id,
    })
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn test_generate_password() {
        let password = generate_password(24);
        assert_eq!(24, password.expose_secret().len());
        assert!(
            password
                .expose_secret()
                .chars()
                .all(|c| c.is_ascii_alphanumeric())
        );
        assert_ne!(
            password.expose_secret(),
            generate_password(24).expose_secret()
        );
    }

    #[test]
    fn test_project_name() {
        let identity = crate::identity::types::IdentityBuilder::default()
            .id(42)
            .email("a@b.com")
            .build()
            .unwrap();
        assert_eq!(
            "project_42",
            project_name(&ProvisioningSection::default(), &identity)
        );
    }
}
