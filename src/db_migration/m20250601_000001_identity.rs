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
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Identity::Table)
                    .if_not_exists()
                    .col(pk_auto(Identity::Id))
                    .col(string_len_uniq(Identity::Email, 256))
                    .col(string_len_null(Identity::Username, 256))
                    .col(string_len_null(Identity::Name, 256))
                    .col(string_len_null(Identity::ProfilePic, 256))
                    .col(string_len_null(Identity::Password, 256))
                    .col(boolean(Identity::Confirmed))
                    .col(string_len_null(Identity::ResetToken, 256))
                    .col(string_len_null(Identity::CloudUserId, 128))
                    .col(string_len_null(Identity::CloudProjectId, 128))
                    .col(string_len_null(Identity::CloudNetworkId, 128))
                    .col(string_len_null(Identity::CloudSubnetId, 128))
                    .col(string_len_null(Identity::CloudRouterId, 128))
                    .col(date_time(Identity::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-identity-username")
                    .table(Identity::Table)
                    .col(Identity::Username)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ExternalLogin::Table)
                    .if_not_exists()
                    .col(pk_auto(ExternalLogin::Id))
                    .col(string_len(ExternalLogin::Provider, 64))
                    .col(string_len(ExternalLogin::ProviderUserId, 256))
                    .col(integer(ExternalLogin::IdentityId))
                    .col(date_time(ExternalLogin::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-external-login-identity")
                            .from(ExternalLogin::Table, ExternalLogin::IdentityId)
                            .to(Identity::Table, Identity::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-external-login-provider-user")
                    .table(ExternalLogin::Table)
                    .col(ExternalLogin::Provider)
                    .col(ExternalLogin::ProviderUserId)
                    .unique()
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ExternalLogin::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Identity::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Identity {
    Table,
    Id,
    Email,
    Username,
    Name,
    ProfilePic,
    Password,
    Confirmed,
    ResetToken,
    CloudUserId,
    CloudProjectId,
    CloudNetworkId,
    CloudSubnetId,
    CloudRouterId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum ExternalLogin {
    Table,
    Id,
    Provider,
    ProviderUserId,
    IdentityId,
    CreatedAt,
}
