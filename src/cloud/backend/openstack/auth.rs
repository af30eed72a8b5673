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
//! Operator authentication and service catalog lookup.
use chrono::{DateTime, TimeDelta, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;
use url::Url;

use super::{OpenStackBackend, check_response, versioned_url};
use crate::cloud::CloudProviderError;

/// Seconds before the expiration when the token is renewed.
const TOKEN_RENEWAL_WINDOW: i64 = 60;

/// Authenticated operator session.
pub(super) struct AuthSession {
    /// The `X-Subject-Token`.
    pub token: SecretString,
    /// Token expiration.
    pub expires_at: DateTime<Utc>,
    /// Versioned Identity API url.
    pub identity_url: String,
    /// Versioned Networking API url.
    pub network_url: String,
}

impl AuthSession {
    /// Whether the token can still be used.
    pub fn is_valid(&self) -> bool {
        self.expires_at - TimeDelta::seconds(TOKEN_RENEWAL_WINDOW) > Utc::now()
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    token: TokenData,
}

#[derive(Deserialize)]
struct TokenData {
    expires_at: DateTime<Utc>,
    #[serde(default)]
    catalog: Vec<CatalogService>,
}

#[derive(Deserialize)]
struct CatalogService {
    #[serde(rename = "type")]
    service_type: String,
    #[serde(default)]
    endpoints: Vec<CatalogEndpoint>,
}

#[derive(Deserialize)]
struct CatalogEndpoint {
    interface: String,
    #[serde(default)]
    region: Option<String>,
    #[serde(default)]
    region_id: Option<String>,
    url: Url,
}

/// Find the endpoint of the service in the catalog.
fn find_endpoint(
    catalog: &[CatalogService],
    service_type: &str,
    interface: &str,
    region: Option<&str>,
) -> Option<Url> {
    catalog
        .iter()
        .filter(|srv| srv.service_type == service_type)
        .flat_map(|srv| srv.endpoints.iter())
        .find(|ep| {
            ep.interface == interface
                && region.is_none_or(|region| {
                    ep.region.as_deref() == Some(region) || ep.region_id.as_deref() == Some(region)
                })
        })
        .map(|ep| ep.url.clone())
}

impl OpenStackBackend {
    /// Issue a new project scoped token for the operator.
    #[tracing::instrument(level = "debug", skip(self))]
    pub(super) async fn authenticate(&self) -> Result<AuthSession, CloudProviderError> {
        let auth_url = self
            .config
            .auth_url
            .as_ref()
            .ok_or(CloudProviderError::AuthUrlMissing)?;
        let body = json!({
            "auth": {
                "identity": {
                    "methods": ["password"],
                    "password": {
                        "user": {
                            "name": self.config.username,
                            "domain": {"id": self.config.user_domain_id},
                            "password": self.config.password.expose_secret()
                        }
                    }
                },
                "scope": {
                    "project": {
                        "name": self.config.project_name,
                        "domain": {"id": self.config.project_domain_id}
                    }
                }
            }
        });
        let response = self
            .client
            .post(format!("{}/auth/tokens", versioned_url(auth_url, "v3")))
            .json(&body)
            .send()
            .await?;
        let response = check_response(response).await?;
        let token = response
            .headers()
            .get("X-Subject-Token")
            .ok_or(CloudProviderError::TokenMissing)?
            .to_str()?
            .to_string();
        let data: TokenResponse = response.json().await?;

        let region = self.config.region_name.as_deref();
        let identity_url = match &self.config.identity_endpoint {
            Some(url) => url.clone(),
            None => find_endpoint(
                &data.token.catalog,
                "identity",
                &self.config.interface,
                region,
            )
            .unwrap_or_else(|| auth_url.clone()),
        };
        let network_url = match &self.config.network_endpoint {
            Some(url) => url.clone(),
            None => find_endpoint(
                &data.token.catalog,
                "network",
                &self.config.interface,
                region,
            )
            .ok_or_else(|| CloudProviderError::EndpointNotFound("network".into()))?,
        };
        debug!(
            "operator token issued, expires at {}, identity: {}, network: {}",
            data.token.expires_at, identity_url, network_url
        );

        Ok(AuthSession {
            token: SecretString::from(token),
            expires_at: data.token.expires_at,
            identity_url: versioned_url(&identity_url, "v3"),
            network_url: versioned_url(&network_url, "v2.0"),
        })
    }
}
