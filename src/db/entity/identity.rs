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
use sea_orm::entity::prelude::*;

/// Local identity record.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "identity")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(unique)]
    pub username: Option<String>,
    pub name: Option<String>,
    pub profile_pic: Option<String>,
    /// Bcrypt hash of the password.
    pub password: Option<String>,
    pub confirmed: bool,
    pub reset_token: Option<String>,
    pub cloud_user_id: Option<String>,
    pub cloud_project_id: Option<String>,
    pub cloud_network_id: Option<String>,
    pub cloud_subnet_id: Option<String>,
    pub cloud_router_id: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::external_login::Entity")]
    ExternalLogin,
}

impl Related<super::external_login::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ExternalLogin.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
