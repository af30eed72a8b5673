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
//! External login links.
use chrono::Utc;
use sea_orm::DatabaseConnection;
use sea_orm::entity::*;
use sea_orm::query::*;

use crate::db::entity::{
    external_login as db_external_login,
    prelude::{ExternalLogin as DbExternalLogin, Identity as DbIdentity},
};
use crate::error::DbContextExt;
use crate::identity::backend::sql::IdentityDatabaseError;
use crate::identity::types::{ExternalLoginLink, ExternalLoginLinkCreate, Identity};

impl From<db_external_login::Model> for ExternalLoginLink {
    fn from(value: db_external_login::Model) -> Self {
        Self {
            id: value.id,
            provider: value.provider,
            provider_user_id: value.provider_user_id,
            identity_id: value.identity_id,
            created_at: value.created_at.and_utc(),
        }
    }
}

/// Persist the link of the identity to the external identity provider account.
pub async fn create(
    db: &DatabaseConnection,
    link: ExternalLoginLinkCreate,
) -> Result<ExternalLoginLink, IdentityDatabaseError> {
    let entry = db_external_login::ActiveModel {
        id: NotSet,
        provider: Set(link.provider),
        provider_user_id: Set(link.provider_user_id),
        identity_id: Set(link.identity_id),
        created_at: Set(Utc::now().naive_utc()),
    };

    let db_entry: db_external_login::Model = entry
        .insert(db)
        .await
        .context("persisting external login link")?;

    Ok(db_entry.into())
}

/// Find the identity linked to the external identity provider account.
pub async fn find_identity<P: AsRef<str>, S: AsRef<str>>(
    db: &DatabaseConnection,
    provider: P,
    provider_user_id: S,
) -> Result<Option<Identity>, IdentityDatabaseError> {
    DbIdentity::find()
        .inner_join(DbExternalLogin)
        .filter(db_external_login::Column::Provider.eq(provider.as_ref()))
        .filter(db_external_login::Column::ProviderUserId.eq(provider_user_id.as_ref()))
        .one(db)
        .await
        .context("fetching identity by the external login")?
        .map(TryInto::try_into)
        .transpose()
}
