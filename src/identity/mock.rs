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
use mockall::mock;
use secrecy::SecretString;

use crate::config::Config;
use crate::identity::IdentityApi;
use crate::identity::error::IdentityProviderError;
use crate::identity::types::*;
use crate::plugin_manager::PluginManager;
use crate::service::ServiceState;

mock! {
    pub IdentityProvider {
        pub fn new(cfg: &Config, plugin_manager: &PluginManager) -> Result<Self, IdentityProviderError>;
    }

    #[async_trait]
    impl IdentityApi for IdentityProvider {
        async fn create_identity(
            &self,
            state: &ServiceState,
            identity: IdentityCreate,
        ) -> Result<Identity, IdentityProviderError>;

        async fn get_identity(
            &self,
            state: &ServiceState,
            id: i32,
        ) -> Result<Option<Identity>, IdentityProviderError>;

        async fn find_identity_by_email<'a>(
            &self,
            state: &ServiceState,
            email: &'a str,
        ) -> Result<Option<Identity>, IdentityProviderError>;

        async fn find_identity_by_username<'a>(
            &self,
            state: &ServiceState,
            username: &'a str,
        ) -> Result<Option<Identity>, IdentityProviderError>;

        async fn delete_identity(
            &self,
            state: &ServiceState,
            id: i32,
        ) -> Result<(), IdentityProviderError>;

        async fn set_confirmed(
            &self,
            state: &ServiceState,
            id: i32,
        ) -> Result<(), IdentityProviderError>;

        async fn set_password<'a>(
            &self,
            state: &ServiceState,
            id: i32,
            password: &'a SecretString,
        ) -> Result<(), IdentityProviderError>;

        async fn set_reset_token(
            &self,
            state: &ServiceState,
            id: i32,
            token: Option<String>,
        ) -> Result<(), IdentityProviderError>;

        async fn set_cloud_resources<'a>(
            &self,
            state: &ServiceState,
            id: i32,
            resources: &'a CloudResources,
        ) -> Result<(), IdentityProviderError>;

        async fn find_identity_by_external_login<'a>(
            &self,
            state: &ServiceState,
            provider: &'a str,
            provider_user_id: &'a str,
        ) -> Result<Option<Identity>, IdentityProviderError>;

        async fn create_external_login(
            &self,
            state: &ServiceState,
            link: ExternalLoginLinkCreate,
        ) -> Result<ExternalLoginLink, IdentityProviderError>;

        async fn authenticate_by_password<'a>(
            &self,
            state: &ServiceState,
            email: &'a str,
            password: &'a SecretString,
        ) -> Result<Identity, IdentityProviderError>;
    }
}
