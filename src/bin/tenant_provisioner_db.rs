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

//! Schema management of the tenant provisioner.
//!
//! This is the entry point of the `tenant-provisioner-db` binary. It applies
//! or rolls back the identity and external login tables.
use clap::{Parser, Subcommand};
use color_eyre::eyre::{Report, Result};
use eyre::WrapErr;
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::prelude::*;
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{Layer, filter::Targets, prelude::*};

use openstack_tenant_provisioner::config::Config;
use openstack_tenant_provisioner::db_migration::Migrator;

/// Tenant provisioner database schema.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the tenant provisioner config file.
    #[arg(short, long, default_value = "/etc/tenant-provisioner/provisioner.conf")]
    config: PathBuf,

    /// Verbosity level. Repeat to increase level.
    #[arg(short, long, global=true, action = clap::ArgAction::Count, display_order = 920)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create the missing tables. Without `-n` every pending migration runs.
    Up {
        #[arg(short('n'))]
        steps: Option<u32>,
    },
    /// Roll back the last `-n` migrations, or all of them.
    Down {
        #[arg(short('n'))]
        steps: Option<u32>,
    },
    /// List the applied and the pending migrations.
    Status,
    /// Drop every table and create the schema again. All identities are lost.
    Fresh,
    /// Roll back all migrations and apply them again.
    Refresh,
    /// Roll back all migrations.
    Reset,
}

impl Command {
    async fn run(self, conn: &DatabaseConnection) -> Result<(), DbErr> {
        match self {
            Self::Up { steps } => Migrator::up(conn, steps).await,
            Self::Down { steps } => Migrator::down(conn, steps).await,
            Self::Status => print_status(conn).await,
            Self::Fresh => Migrator::fresh(conn).await,
            Self::Refresh => Migrator::refresh(conn).await,
            Self::Reset => Migrator::reset(conn).await,
        }
    }
}

#[allow(clippy::print_stdout)]
async fn print_status(conn: &DatabaseConnection) -> Result<(), DbErr> {
    let applied = Migrator::get_applied_migrations(conn).await?;
    let pending = Migrator::get_pending_migrations(conn).await?;
    for migration in &applied {
        println!("applied  {}", migration.name());
    }
    for migration in &pending {
        println!("pending  {}", migration.name());
    }
    if pending.is_empty() {
        println!("Schema is up to date");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Report> {
    color_eyre::install()?;
    let args = Args::parse();
    let cfg = Config::new(args.config)?;

    let log_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_filter(Targets::new().with_default(cfg.log_level(args.verbose)));
    tracing_subscriber::registry().with(log_layer).init();

    info!("Establishing the database connection...");
    let conn = Database::connect(cfg.database.connect_options()?)
        .await
        .wrap_err("Database connection failed")?;

    let command = format!("{:?}", args.command);
    args.command
        .run(&conn)
        .await
        .wrap_err_with(|| format!("Migration command {command} failed"))?;
    info!("{} finished", command);
    Ok(())
}
