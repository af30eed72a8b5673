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
//! Networking (Neutron v2.0) API calls.
use reqwest::Method;
use serde_json::{Value, json};

use super::{OpenStackBackend, single, take_key};
use crate::cloud::CloudProviderError;
use crate::cloud::types::*;

pub(super) async fn create_network(
    backend: &OpenStackBackend,
    network: &NetworkCreate,
) -> Result<Network, CloudProviderError> {
    let request = backend
        .network_request(Method::POST, "networks")
        .await?
        .json(&json!({"network": network}));
    let body: Value = backend.execute(request).await?.json().await?;
    take_key(body, "network")
}

pub(super) async fn create_subnet(
    backend: &OpenStackBackend,
    subnet: &SubnetCreate,
) -> Result<Subnet, CloudProviderError> {
    let request = backend
        .network_request(Method::POST, "subnets")
        .await?
        .json(&json!({"subnet": subnet}));
    let body: Value = backend.execute(request).await?.json().await?;
    take_key(body, "subnet")
}

pub(super) async fn find_network(
    backend: &OpenStackBackend,
    name: &str,
) -> Result<Option<Network>, CloudProviderError> {
    let request = backend
        .network_request(Method::GET, "networks")
        .await?
        .query(&[("name", name)]);
    let body: Value = backend.execute(request).await?.json().await?;
    single("network", name, take_key(body, "networks")?)
}

pub(super) async fn create_router(
    backend: &OpenStackBackend,
    router: &RouterCreate,
) -> Result<Router, CloudProviderError> {
    let request = backend
        .network_request(Method::POST, "routers")
        .await?
        .json(&json!({"router": router}));
    let body: Value = backend.execute(request).await?.json().await?;
    take_key(body, "router")
}

pub(super) async fn add_interface_to_router(
    backend: &OpenStackBackend,
    router_id: &str,
    subnet_id: &str,
) -> Result<RouterInterface, CloudProviderError> {
    let request = backend
        .network_request(
            Method::PUT,
            &format!("routers/{router_id}/add_router_interface"),
        )
        .await?
        .json(&json!({"subnet_id": subnet_id}));
    Ok(backend.execute(request).await?.json().await?)
}
