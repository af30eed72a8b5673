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

use chrono::Utc;
use sea_orm::DatabaseConnection;
use sea_orm::entity::*;

use crate::config::IdentitySection;
use crate::db::entity::identity as db_identity;
use crate::error::DbContextExt;
use crate::identity::backend::sql::IdentityDatabaseError;
use crate::identity::password_hashing;
use crate::identity::types::{Identity, IdentityCreate};

/// Persist the new identity.
pub async fn create(
    conf: &IdentitySection,
    db: &DatabaseConnection,
    identity: IdentityCreate,
) -> Result<Identity, IdentityDatabaseError> {
    let password = match &identity.password {
        Some(password) => Some(password_hashing::hash_password(conf, password).await?),
        None => None,
    };
    let entry = db_identity::ActiveModel {
        id: NotSet,
        email: Set(identity.email),
        username: Set(identity.username),
        name: Set(identity.name),
        profile_pic: Set(identity.profile_pic),
        password: Set(password),
        confirmed: Set(identity.confirmed),
        reset_token: Set(None),
        cloud_user_id: Set(None),
        cloud_project_id: Set(None),
        cloud_network_id: Set(None),
        cloud_subnet_id: Set(None),
        cloud_router_id: Set(None),
        created_at: Set(Utc::now().naive_utc()),
    };

    let db_entry: db_identity::Model = entry
        .insert(db)
        .await
        .context("persisting new identity record")?;

    db_entry.try_into()
}
