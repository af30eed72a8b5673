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
//! Identity records.
use crate::db::entity::identity as db_identity;
use crate::identity::backend::sql::IdentityDatabaseError;
use crate::identity::types::{CloudResources, Identity};

mod create;
mod delete;
mod get;
mod update;

pub use create::create;
pub use delete::delete;
pub use get::{find_by_email, find_by_username, get};
pub use update::{set_cloud_resources, set_confirmed, set_password, set_reset_token};

impl TryFrom<db_identity::Model> for Identity {
    type Error = IdentityDatabaseError;

    fn try_from(value: db_identity::Model) -> Result<Self, Self::Error> {
        let cloud = match (
            value.cloud_project_id,
            value.cloud_user_id,
            value.cloud_network_id,
            value.cloud_subnet_id,
            value.cloud_router_id,
        ) {
            (
                Some(project_id),
                Some(user_id),
                Some(network_id),
                Some(subnet_id),
                Some(router_id),
            ) => Some(CloudResources {
                project_id,
                user_id,
                network_id,
                subnet_id,
                router_id,
            }),
            (None, None, None, None, None) => None,
            _ => return Err(IdentityDatabaseError::PartialCloudResources(value.id)),
        };
        Ok(Self {
            id: value.id,
            email: value.email,
            username: value.username,
            name: value.name,
            profile_pic: value.profile_pic,
            password_hash: value.password,
            confirmed: value.confirmed,
            reset_token: value.reset_token,
            cloud,
            created_at: value.created_at.and_utc(),
        })
    }
}
