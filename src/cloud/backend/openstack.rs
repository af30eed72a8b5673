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
//! # OpenStack cloud backend
//!
//! Talks to the Identity (Keystone v3) and Networking (Neutron v2.0) REST APIs
//! with a token of the operator account configured in the `[cloud]` section.
//! The token is cached and renewed shortly before it expires. The endpoints are
//! taken from the service catalog of the token unless overridden in the
//! configuration.
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, warn};
use url::Url;

mod auth;
mod identity;
mod network;

use crate::cloud::CloudProviderError;
use crate::cloud::backend::CloudBackend;
use crate::cloud::types::*;
use crate::config::CloudSection;
use auth::AuthSession;

/// OpenStack REST backend.
pub struct OpenStackBackend {
    /// Connection parameters.
    config: CloudSection,
    /// Shared HTTP client.
    client: Client,
    /// Cached operator session.
    session: RwLock<Option<Arc<AuthSession>>>,
}

impl OpenStackBackend {
    pub fn new(config: &CloudSection) -> Result<Self, CloudProviderError> {
        let client = Client::builder()
            .gzip(true)
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            config: config.clone(),
            client,
            session: RwLock::new(None),
        })
    }

    /// Get the valid operator session authenticating when necessary.
    async fn get_session(&self) -> Result<Arc<AuthSession>, CloudProviderError> {
        {
            let read_guard = self.session.read().await;
            if let Some(session) = read_guard.as_ref()
                && session.is_valid()
            {
                return Ok(Arc::clone(session));
            }
        }

        let mut write_guard = self.session.write().await;
        // Another task may have renewed the token while waiting for the lock.
        if let Some(session) = write_guard.as_ref()
            && session.is_valid()
        {
            return Ok(Arc::clone(session));
        }
        let session = Arc::new(self.authenticate().await?);
        *write_guard = Some(Arc::clone(&session));
        Ok(session)
    }

    /// Drop the cached session.
    async fn invalidate_session(&self) {
        self.session.write().await.take();
    }

    /// Prepare an authenticated request to the Identity API.
    async fn identity_request(
        &self,
        method: Method,
        path: &str,
    ) -> Result<RequestBuilder, CloudProviderError> {
        let session = self.get_session().await?;
        Ok(self
            .client
            .request(method, format!("{}/{}", session.identity_url, path))
            .header("X-Auth-Token", session.token.expose_secret()))
    }

    /// Prepare an authenticated request to the Networking API.
    async fn network_request(
        &self,
        method: Method,
        path: &str,
    ) -> Result<RequestBuilder, CloudProviderError> {
        let session = self.get_session().await?;
        Ok(self
            .client
            .request(method, format!("{}/{}", session.network_url, path))
            .header("X-Auth-Token", session.token.expose_secret()))
    }

    /// Send the request and convert error responses.
    async fn execute(&self, request: RequestBuilder) -> Result<Response, CloudProviderError> {
        let response = request.send().await?;
        if response.status() == StatusCode::UNAUTHORIZED {
            warn!("cloud rejected the operator token, dropping the cached session");
            self.invalidate_session().await;
        }
        check_response(response).await
    }
}

/// Convert non successful response into the [`CloudProviderError::Api`].
async fn check_response(response: Response) -> Result<Response, CloudProviderError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    debug!("cloud returned {}: {}", status, body);
    Err(CloudProviderError::Api {
        status: status.as_u16(),
        message: error_message(&body)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or_default().to_string()),
    })
}

/// Extract the error message from the Keystone or Neutron error body.
fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value["error"]["message"]
        .as_str()
        .or_else(|| value["NeutronError"]["message"].as_str())
        .or_else(|| value["message"].as_str())
        .map(String::from)
}

/// Build the base url of the versioned API.
///
/// Catalog entries are registered both with and without the version suffix,
/// so the suffix is stripped and appended again.
fn versioned_url(base: &Url, version: &str) -> String {
    let url = base.as_str().trim_end_matches('/');
    let url = url
        .strip_suffix(&format!("/{version}"))
        .unwrap_or(url);
    format!("{url}/{version}")
}

/// Extract the resource stored under the `key` of the response body.
fn take_key<T: DeserializeOwned>(mut body: Value, key: &str) -> Result<T, CloudProviderError> {
    Ok(serde_json::from_value(body[key].take())?)
}

/// Pick the only resource out of the name search results.
fn single<T>(resource: &str, name: &str, items: Vec<T>) -> Result<Option<T>, CloudProviderError> {
    if items.len() > 1 {
        return Err(CloudProviderError::AmbiguousName {
            resource: resource.into(),
            name: name.into(),
        });
    }
    Ok(items.into_iter().next())
}

#[async_trait]
impl CloudBackend for OpenStackBackend {
    async fn create_project(&self, project: ProjectCreate) -> Result<Project, CloudProviderError> {
        identity::create_project(self, &project).await
    }

    async fn create_user(&self, user: UserCreate) -> Result<User, CloudProviderError> {
        identity::create_user(self, &user).await
    }

    async fn update_user_default_project<'a>(
        &self,
        user_id: &'a str,
        project_id: &'a str,
    ) -> Result<User, CloudProviderError> {
        identity::update_user_default_project(self, user_id, project_id).await
    }

    async fn find_role<'a>(&self, name: &'a str) -> Result<Option<Role>, CloudProviderError> {
        identity::find_role(self, name).await
    }

    async fn create_role<'a>(&self, name: &'a str) -> Result<Role, CloudProviderError> {
        identity::create_role(self, name).await
    }

    async fn assign_project_role_to_user<'a>(
        &self,
        project_id: &'a str,
        user_id: &'a str,
        role_id: &'a str,
    ) -> Result<(), CloudProviderError> {
        identity::assign_project_role_to_user(self, project_id, user_id, role_id).await
    }

    async fn find_user<'a>(
        &self,
        name: &'a str,
        domain_id: &'a str,
    ) -> Result<Option<User>, CloudProviderError> {
        identity::find_user(self, name, domain_id).await
    }

    async fn create_network(&self, network: NetworkCreate) -> Result<Network, CloudProviderError> {
        network::create_network(self, &network).await
    }

    async fn create_subnet(&self, subnet: SubnetCreate) -> Result<Subnet, CloudProviderError> {
        network::create_subnet(self, &subnet).await
    }

    async fn find_network<'a>(&self, name: &'a str) -> Result<Option<Network>, CloudProviderError> {
        network::find_network(self, name).await
    }

    async fn create_router(&self, router: RouterCreate) -> Result<Router, CloudProviderError> {
        network::create_router(self, &router).await
    }

    async fn add_interface_to_router<'a>(
        &self,
        router_id: &'a str,
        subnet_id: &'a str,
    ) -> Result<RouterInterface, CloudProviderError> {
        network::add_interface_to_router(self, router_id, subnet_id).await
    }
}
