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

use sea_orm::DatabaseConnection;
use sea_orm::entity::*;
use sea_orm::query::*;

use crate::db::entity::{identity as db_identity, prelude::Identity as DbIdentity};
use crate::error::DbContextExt;
use crate::identity::backend::sql::IdentityDatabaseError;
use crate::identity::types::Identity;

/// Get the identity by the ID.
pub async fn get(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<Identity>, IdentityDatabaseError> {
    DbIdentity::find_by_id(id)
        .one(db)
        .await
        .context("fetching identity by id")?
        .map(TryInto::try_into)
        .transpose()
}

/// Find the identity by the email.
pub async fn find_by_email<E: AsRef<str>>(
    db: &DatabaseConnection,
    email: E,
) -> Result<Option<Identity>, IdentityDatabaseError> {
    DbIdentity::find()
        .filter(db_identity::Column::Email.eq(email.as_ref()))
        .one(db)
        .await
        .context("fetching identity by email")?
        .map(TryInto::try_into)
        .transpose()
}

/// Find the identity by the username.
pub async fn find_by_username<U: AsRef<str>>(
    db: &DatabaseConnection,
    username: U,
) -> Result<Option<Identity>, IdentityDatabaseError> {
    DbIdentity::find()
        .filter(db_identity::Column::Username.eq(username.as_ref()))
        .one(db)
        .await
        .context("fetching identity by username")?
        .map(TryInto::try_into)
        .transpose()
}
