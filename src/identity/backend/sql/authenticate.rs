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
//! Authentication implementation.
use sea_orm::DatabaseConnection;
use secrecy::SecretString;
use tracing::debug;

use super::identity;
use crate::config::IdentitySection;
use crate::identity::backend::sql::IdentityDatabaseError;
use crate::identity::password_hashing;
use crate::identity::types::Identity;

/// Authenticate the identity by the email and password.
///
/// Unknown email, identity without a password (created by the external
/// login) and password mismatch are all reported the same way.
pub async fn authenticate_by_password(
    conf: &IdentitySection,
    db: &DatabaseConnection,
    email: &str,
    password: &SecretString,
) -> Result<Identity, IdentityDatabaseError> {
    let identity = identity::find_by_email(db, email)
        .await?
        .ok_or(IdentityDatabaseError::AuthenticationFailed)?;
    let Some(expected_hash) = identity.password_hash.as_ref() else {
        debug!("identity {} has no password", identity.id);
        return Err(IdentityDatabaseError::NoPasswordHash(identity.id));
    };
    if !password_hashing::verify_password(conf, password, expected_hash).await? {
        return Err(IdentityDatabaseError::AuthenticationFailed);
    }
    Ok(identity)
}
