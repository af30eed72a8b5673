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
//! Tenant provisioner.
//!
//! This is the entry point of the `tenant-provisioner` binary. It drives the
//! account flows and the tenant provisioning from the command line. Passwords
//! are read from the standard input.
use clap::{Parser, Subcommand};
use color_eyre::eyre::{Report, Result, eyre};
use eyre::WrapErr;
use sea_orm::Database;
use secrecy::SecretString;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{Level, debug, info};
use tracing_subscriber::{Layer, filter::Targets, prelude::*};

use openstack_tenant_provisioner::account::{AccountApi, PasswordResetBuilder, SignupBuilder};
use openstack_tenant_provisioner::config::Config;
use openstack_tenant_provisioner::identity::IdentityApi;
use openstack_tenant_provisioner::plugin_manager::PluginManager;
use openstack_tenant_provisioner::provider::Provider;
use openstack_tenant_provisioner::provisioning::ProvisioningApi;
use openstack_tenant_provisioner::service::{Service, ServiceState};

/// OpenStack tenant provisioner.
///
/// Gives every local identity its own OpenStack project with a user, a private
/// network, a subnet and a router connected to the external network.
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
    /// Register the identity and provision its tenant. The password is read
    /// from stdin.
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        username: Option<String>,
    },
    /// Confirm the email with the token issued by the signup.
    Confirm { token: String },
    /// Login with the email. The password is read from stdin.
    Login {
        #[arg(long)]
        email: String,
    },
    /// Provision the tenant of the existing identity.
    Provision {
        #[arg(long)]
        email: String,
    },
    /// Show the identity with its cloud resources.
    Show {
        #[arg(long)]
        email: String,
    },
    /// Issue the password reset token.
    ResetRequest {
        #[arg(long)]
        email: String,
    },
    /// Set the new password with the reset token. The password is read from
    /// stdin.
    ResetPassword { token: String },
}

/// Read the password from the first line of stdin.
fn read_password() -> Result<SecretString> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .wrap_err("Failed to read the password")?;
    let password = line.trim_end_matches(['\r', '\n']);
    if password.is_empty() {
        return Err(eyre!("Password must be given on the standard input"));
    }
    Ok(SecretString::from(password))
}

#[allow(clippy::print_stdout)]
async fn run(state: &ServiceState, command: Command) -> Result<()> {
    let account = state.provider.get_account_provider();
    match command {
        Command::Signup { email, username } => {
            let password = read_password()?;
            let mut signup = SignupBuilder::default();
            signup
                .email(email)
                .password(password.clone())
                .confirm_password(password);
            if let Some(username) = username {
                signup.username(username);
            }
            let res = account.signup(state, signup.build()?).await?;
            println!("{}", serde_json::to_string_pretty(&res.identity)?);
            println!("confirmation token: {}", res.confirmation_token);
        }
        Command::Confirm { token } => {
            let session = account.confirm(state, &token).await?;
            println!("{}", serde_json::to_string_pretty(&session)?);
        }
        Command::Login { email } => {
            let session = account.login(state, &email, &read_password()?).await?;
            println!("{}", serde_json::to_string_pretty(&session)?);
        }
        Command::Provision { email } => {
            let identity = state
                .provider
                .get_identity_provider()
                .find_identity_by_email(state, &email)
                .await?
                .ok_or_else(|| eyre!("No identity with the email {email}"))?;
            let resources = state
                .provider
                .get_provisioning_provider()
                .provision(state, &identity)
                .await?;
            println!("{}", serde_json::to_string_pretty(&resources)?);
        }
        Command::Show { email } => {
            let identity = state
                .provider
                .get_identity_provider()
                .find_identity_by_email(state, &email)
                .await?
                .ok_or_else(|| eyre!("No identity with the email {email}"))?;
            println!("{}", serde_json::to_string_pretty(&identity)?);
        }
        Command::ResetRequest { email } => {
            let token = account.request_password_reset(state, &email).await?;
            println!("reset token: {token}");
        }
        Command::ResetPassword { token } => {
            let password = read_password()?;
            account
                .reset_password(
                    state,
                    PasswordResetBuilder::default()
                        .token(token)
                        .password(password.clone())
                        .confirm_password(password)
                        .build()?,
                )
                .await?;
            println!("Password updated");
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Report> {
    color_eyre::install()?;
    let args = Args::parse();
    let cfg = Config::new(args.config)?;

    let filter = Targets::new()
        .with_default(cfg.log_level(args.verbose))
        .with_target("hyper_util", Level::INFO)
        .with_target("sqlx", Level::WARN);

    let log_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_filter(filter);

    // build the tracing registry
    tracing_subscriber::registry().with(log_layer).init();

    info!("Starting tenant provisioner...");

    debug!("Establishing the database connection...");
    let conn = Database::connect(cfg.database.connect_options()?)
        .await
        .wrap_err("Database connection failed")?;

    let plugin_manager = PluginManager::default();
    let provider = Provider::new(cfg.clone(), plugin_manager)?;
    let state = Arc::new(Service::new(cfg, conn, provider)?);

    run(&state, args.command).await
}
