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

//! # OpenStack tenant provisioner
//!
//! Every locally registered identity (a person signing up with an email and
//! password, or logging in through an external identity provider such as
//! Google or Keycloak) gets its own isolated slice of the OpenStack cloud:
//!
//! - a project named after the local identity,
//! - a cloud user with the `member` role on that project (the operator `admin`
//!   user is granted `admin` on it as well),
//! - a private network with a single IPv4 subnet,
//! - a router with the external gateway set to the `public` network and the
//!   private subnet attached.
//!
//! The identifiers of these resources are stored on the local identity record
//! once (and only once) all of them were created.
//!
//! The crate is organized the same way as the other OpenStack identity
//! services: every concern is a provider implementing an `*Api` trait, backed
//! by a pluggable backend driver. Providers are reachable through the
//! [`provider::Provider`] manager stored in the shared
//! [`service::ServiceState`], which allows swapping any of them for a mock in
//! tests.
//!
//! - [`cloud`] talks to the OpenStack Identity (Keystone v3) and Networking
//!   (Neutron v2.0) APIs.
//! - [`identity`] manages the local identity records.
//! - [`provisioning`] implements the tenant provisioning workflow.
//! - [`account`] implements the signup/login flows triggering provisioning.

pub mod account;
pub mod cloud;
pub mod config;
pub mod db;
pub mod db_migration;
pub mod error;
pub mod identity;
pub mod plugin_manager;
pub mod provider;
pub mod provisioning;
pub mod service;
