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

use crate::db::entity::{external_login, prelude::ExternalLogin, prelude::Identity as DbIdentity};
use crate::error::DbContextExt;
use crate::identity::backend::sql::IdentityDatabaseError;

/// Delete the identity with its external login links.
pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<(), IdentityDatabaseError> {
    // Not every backend enforces the cascading foreign keys.
    ExternalLogin::delete_many()
        .filter(external_login::Column::IdentityId.eq(id))
        .exec(db)
        .await
        .context("deleting external logins of the identity")?;
    let res = DbIdentity::delete_by_id(id)
        .exec(db)
        .await
        .context("deleting identity record")?;
    if res.rows_affected == 0 {
        return Err(IdentityDatabaseError::IdentityNotFound(id.to_string()));
    }
    Ok(())
}
