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

use sea_orm::entity::*;
use sea_orm::query::*;
use sea_orm::sea_query::Expr;
use sea_orm::{DatabaseConnection, TransactionTrait};
use secrecy::SecretString;
use tracing::warn;

use crate::config::IdentitySection;
use crate::db::entity::{identity as db_identity, prelude::Identity as DbIdentity};
use crate::error::DbContextExt;
use crate::identity::backend::sql::IdentityDatabaseError;
use crate::identity::password_hashing;
use crate::identity::types::CloudResources;

/// Mark the identity as confirmed.
pub async fn set_confirmed(
    db: &DatabaseConnection,
    id: i32,
) -> Result<(), IdentityDatabaseError> {
    let res = DbIdentity::update_many()
        .col_expr(db_identity::Column::Confirmed, Expr::value(true))
        .filter(db_identity::Column::Id.eq(id))
        .exec(db)
        .await
        .context("confirming identity")?;
    if res.rows_affected == 0 {
        return Err(IdentityDatabaseError::IdentityNotFound(id.to_string()));
    }
    Ok(())
}

/// Replace the password hash and drop the reset token.
pub async fn set_password(
    conf: &IdentitySection,
    db: &DatabaseConnection,
    id: i32,
    password: &SecretString,
) -> Result<(), IdentityDatabaseError> {
    let hash = password_hashing::hash_password(conf, password).await?;
    let res = DbIdentity::update_many()
        .col_expr(db_identity::Column::Password, Expr::value(hash))
        .col_expr(
            db_identity::Column::ResetToken,
            Expr::value(Option::<String>::None),
        )
        .filter(db_identity::Column::Id.eq(id))
        .exec(db)
        .await
        .context("updating identity password")?;
    if res.rows_affected == 0 {
        return Err(IdentityDatabaseError::IdentityNotFound(id.to_string()));
    }
    Ok(())
}

/// Store or clear the password reset token.
pub async fn set_reset_token(
    db: &DatabaseConnection,
    id: i32,
    token: Option<String>,
) -> Result<(), IdentityDatabaseError> {
    let res = DbIdentity::update_many()
        .col_expr(db_identity::Column::ResetToken, Expr::value(token))
        .filter(db_identity::Column::Id.eq(id))
        .exec(db)
        .await
        .context("updating identity reset token")?;
    if res.rows_affected == 0 {
        return Err(IdentityDatabaseError::IdentityNotFound(id.to_string()));
    }
    Ok(())
}

/// Store the cloud resources of the identity.
///
/// All five identifiers are written with a single statement that only
/// matches the row when none of them is set yet. A concurrent writer that
/// already stored its resources makes the update match nothing, the
/// transaction is rolled back and [`IdentityDatabaseError::AlreadyProvisioned`]
/// is returned.
pub async fn set_cloud_resources(
    db: &DatabaseConnection,
    id: i32,
    resources: &CloudResources,
) -> Result<(), IdentityDatabaseError> {
    let txn = db
        .begin()
        .await
        .context("starting cloud resources transaction")?;
    let res = DbIdentity::update_many()
        .col_expr(
            db_identity::Column::CloudProjectId,
            Expr::value(resources.project_id.clone()),
        )
        .col_expr(
            db_identity::Column::CloudUserId,
            Expr::value(resources.user_id.clone()),
        )
        .col_expr(
            db_identity::Column::CloudNetworkId,
            Expr::value(resources.network_id.clone()),
        )
        .col_expr(
            db_identity::Column::CloudSubnetId,
            Expr::value(resources.subnet_id.clone()),
        )
        .col_expr(
            db_identity::Column::CloudRouterId,
            Expr::value(resources.router_id.clone()),
        )
        .filter(
            Condition::all()
                .add(db_identity::Column::Id.eq(id))
                .add(db_identity::Column::CloudProjectId.is_null())
                .add(db_identity::Column::CloudUserId.is_null())
                .add(db_identity::Column::CloudNetworkId.is_null())
                .add(db_identity::Column::CloudSubnetId.is_null())
                .add(db_identity::Column::CloudRouterId.is_null()),
        )
        .exec(&txn)
        .await
        .context("storing cloud resources of the identity")?;

    if res.rows_affected == 0 {
        let exists = DbIdentity::find_by_id(id)
            .one(&txn)
            .await
            .context("checking identity existence")?
            .is_some();
        txn.rollback()
            .await
            .context("rolling back cloud resources transaction")?;
        if !exists {
            return Err(IdentityDatabaseError::IdentityNotFound(id.to_string()));
        }
        warn!("cloud resources of the identity {} are already stored", id);
        return Err(IdentityDatabaseError::AlreadyProvisioned(id));
    }

    txn.commit()
        .await
        .context("committing cloud resources transaction")?;
    Ok(())
}
