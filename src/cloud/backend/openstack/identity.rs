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
//! Identity (Keystone v3) API calls.
use reqwest::Method;
use secrecy::ExposeSecret;
use serde_json::{Value, json};

use super::{OpenStackBackend, single, take_key};
use crate::cloud::CloudProviderError;
use crate::cloud::types::*;

pub(super) async fn create_project(
    backend: &OpenStackBackend,
    project: &ProjectCreate,
) -> Result<Project, CloudProviderError> {
    let request = backend
        .identity_request(Method::POST, "projects")
        .await?
        .json(&json!({"project": project}));
    let body: Value = backend.execute(request).await?.json().await?;
    take_key(body, "project")
}

pub(super) async fn create_user(
    backend: &OpenStackBackend,
    user: &UserCreate,
) -> Result<User, CloudProviderError> {
    let mut data = json!({
        "name": user.name,
        "domain_id": user.domain_id,
        "enabled": user.enabled,
        "password": user.password.expose_secret(),
    });
    if let Some(email) = &user.email {
        data["email"] = json!(email);
    }
    let request = backend
        .identity_request(Method::POST, "users")
        .await?
        .json(&json!({"user": data}));
    let body: Value = backend.execute(request).await?.json().await?;
    take_key(body, "user")
}

pub(super) async fn update_user_default_project(
    backend: &OpenStackBackend,
    user_id: &str,
    project_id: &str,
) -> Result<User, CloudProviderError> {
    let request = backend
        .identity_request(Method::PATCH, &format!("users/{user_id}"))
        .await?
        .json(&json!({"user": {"default_project_id": project_id}}));
    let body: Value = backend.execute(request).await?.json().await?;
    take_key(body, "user")
}

pub(super) async fn find_role(
    backend: &OpenStackBackend,
    name: &str,
) -> Result<Option<Role>, CloudProviderError> {
    let request = backend
        .identity_request(Method::GET, "roles")
        .await?
        .query(&[("name", name)]);
    let body: Value = backend.execute(request).await?.json().await?;
    single("role", name, take_key(body, "roles")?)
}

pub(super) async fn create_role(
    backend: &OpenStackBackend,
    name: &str,
) -> Result<Role, CloudProviderError> {
    let request = backend
        .identity_request(Method::POST, "roles")
        .await?
        .json(&json!({"role": {"name": name}}));
    let body: Value = backend.execute(request).await?.json().await?;
    take_key(body, "role")
}

pub(super) async fn assign_project_role_to_user(
    backend: &OpenStackBackend,
    project_id: &str,
    user_id: &str,
    role_id: &str,
) -> Result<(), CloudProviderError> {
    let request = backend
        .identity_request(
            Method::PUT,
            &format!("projects/{project_id}/users/{user_id}/roles/{role_id}"),
        )
        .await?;
    backend.execute(request).await?;
    Ok(())
}

pub(super) async fn find_user(
    backend: &OpenStackBackend,
    name: &str,
    domain_id: &str,
) -> Result<Option<User>, CloudProviderError> {
    let request = backend
        .identity_request(Method::GET, "users")
        .await?
        .query(&[("name", name), ("domain_id", domain_id)]);
    let body: Value = backend.execute(request).await?.json().await?;
    single("user", name, take_key(body, "users")?)
}

#[cfg(test)]
mod tests {
    use httpmock::MockServer;
    use secrecy::SecretString;
    use serde_json::json;

    use super::super::tests::{get_backend, mock_auth};
    use super::*;
    use crate::cloud::backend::CloudBackend;

    #[tokio::test]
    async fn test_create_project() {
        let srv = MockServer::start_async().await;
        mock_auth(&srv, 3600).await;
        let mock = srv
            .mock_async(|when, then| {
                when.method("POST")
                    .path("/v3/projects")
                    .header("x-auth-token", "operator_token")
                    .json_body(json!({"project": {"name": "project_1", "domain_id": "default", "enabled": true}}));
                then.status(201).json_body(json!({"project": {
                    "id": "pid", "name": "project_1", "domain_id": "default", "enabled": true,
                    "description": "", "is_domain": false, "parent_id": "default", "tags": []
                }}));
            })
            .await;
        let backend = get_backend(&srv);

        let project = backend
            .create_project(
                ProjectCreateBuilder::default()
                    .name("project_1")
                    .domain_id("default")
                    .build()
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!("pid", project.id);
        assert_eq!("project_1", project.name);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_project_conflict() {
        let srv = MockServer::start_async().await;
        mock_auth(&srv, 3600).await;
        srv.mock_async(|when, then| {
            when.method("POST").path("/v3/projects");
            then.status(409).json_body(json!({"error": {
                "code": 409,
                "message": "Conflict occurred attempting to store project - it is not permitted to have two projects with the same name in the same domain : project_1.",
                "title": "Conflict"
            }}));
        })
        .await;
        let backend = get_backend(&srv);

        match backend
            .create_project(
                ProjectCreateBuilder::default()
                    .name("project_1")
                    .domain_id("default")
                    .build()
                    .unwrap(),
            )
            .await
        {
            Err(CloudProviderError::Api { status, message }) => {
                assert_eq!(409, status);
                assert!(message.starts_with("Conflict occurred"));
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_user() {
        let srv = MockServer::start_async().await;
        mock_auth(&srv, 3600).await;
        let mock = srv
            .mock_async(|when, then| {
                when.method("POST").path("/v3/users").json_body(json!({"user": {
                    "name": "john.doe@example.com",
                    "domain_id": "default",
                    "enabled": true,
                    "password": "Secret123",
                    "email": "john.doe@example.com"
                }}));
                then.status(201).json_body(json!({"user": {
                    "id": "uid",
                    "name": "john.doe@example.com",
                    "domain_id": "default",
                    "email": "john.doe@example.com",
                    "enabled": true
                }}));
            })
            .await;
        let backend = get_backend(&srv);

        let user = backend
            .create_user(
                UserCreateBuilder::default()
                    .name("john.doe@example.com")
                    .domain_id("default")
                    .email("john.doe@example.com")
                    .password(SecretString::from("Secret123"))
                    .build()
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!("uid", user.id);
        assert_eq!(Some("john.doe@example.com".into()), user.email);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_user_default_project() {
        let srv = MockServer::start_async().await;
        mock_auth(&srv, 3600).await;
        let mock = srv
            .mock_async(|when, then| {
                when.method("PATCH")
                    .path("/v3/users/uid")
                    .json_body(json!({"user": {"default_project_id": "pid"}}));
                then.status(200).json_body(json!({"user": {
                    "id": "uid", "name": "u", "default_project_id": "pid", "enabled": true
                }}));
            })
            .await;
        let backend = get_backend(&srv);

        let user = backend
            .update_user_default_project("uid", "pid")
            .await
            .unwrap();
        assert_eq!(Some("pid".into()), user.default_project_id);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_find_and_create_role() {
        let srv = MockServer::start_async().await;
        mock_auth(&srv, 3600).await;
        srv.mock_async(|when, then| {
            when.method("GET")
                .path("/v3/roles")
                .query_param("name", "member");
            then.status(200).json_body(json!({"roles": [], "links": {}}));
        })
        .await;
        let create = srv
            .mock_async(|when, then| {
                when.method("POST")
                    .path("/v3/roles")
                    .json_body(json!({"role": {"name": "member"}}));
                then.status(201)
                    .json_body(json!({"role": {"id": "rid", "name": "member", "domain_id": null}}));
            })
            .await;
        let backend = get_backend(&srv);

        assert!(backend.find_role("member").await.unwrap().is_none());
        let role = backend.create_role("member").await.unwrap();
        assert_eq!("rid", role.id);
        assert_eq!(None, role.domain_id);
        create.assert_async().await;
    }

    #[tokio::test]
    async fn test_assign_role() {
        let srv = MockServer::start_async().await;
        mock_auth(&srv, 3600).await;
        let mock = srv
            .mock_async(|when, then| {
                when.method("PUT")
                    .path("/v3/projects/pid/users/uid/roles/rid")
                    .header("x-auth-token", "operator_token");
                then.status(204);
            })
            .await;
        let backend = get_backend(&srv);

        backend
            .assign_project_role_to_user("pid", "uid", "rid")
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_find_user() {
        let srv = MockServer::start_async().await;
        mock_auth(&srv, 3600).await;
        srv.mock_async(|when, then| {
            when.method("GET")
                .path("/v3/users")
                .query_param("name", "admin")
                .query_param("domain_id", "default");
            then.status(200).json_body(
                json!({"users": [{"id": "aid", "name": "admin", "domain_id": "default", "enabled": true}]}),
            );
        })
        .await;
        srv.mock_async(|when, then| {
            when.method("GET")
                .path("/v3/users")
                .query_param("name", "twin");
            then.status(200).json_body(json!({"users": [
                {"id": "t1", "name": "twin", "enabled": true},
                {"id": "t2", "name": "twin", "enabled": true}
            ]}));
        })
        .await;
        let backend = get_backend(&srv);

        assert_eq!(
            "aid",
            backend
                .find_user("admin", "default")
                .await
                .unwrap()
                .unwrap()
                .id
        );
        assert!(matches!(
            backend.find_user("twin", "default").await,
            Err(CloudProviderError::AmbiguousName { .. })
        ));
    }
}
