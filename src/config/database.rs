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

use regex::Regex;
use sea_orm::ConnectOptions;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// Scheme carrying a python driver, as in `mysql+pymysql://`.
const DRIVER_SCHEME: &str = r"^(?<backend>[[:alnum:]]+)\+[[:word:]]+://";

/// Database configuration.
#[derive(Debug, Default, Deserialize, Clone)]
pub struct DatabaseSection {
    /// Database URL. Python driver suffixes of the scheme are accepted.
    pub connection: SecretString,
}

impl DatabaseSection {
    /// Connection URL understood by sea-orm.
    pub fn url(&self) -> Result<SecretString, regex::Error> {
        let scheme = Regex::new(DRIVER_SCHEME)?;
        Ok(SecretString::from(
            scheme
                .replace(self.connection.expose_secret(), "${backend}://")
                .into_owned(),
        ))
    }

    /// Connect options with the statement logging of sqlx turned off, it
    /// would print the password hashes.
    pub fn connect_options(&self) -> Result<ConnectOptions, regex::Error> {
        let mut opts = ConnectOptions::new(self.url()?.expose_secret());
        opts.sqlx_logging(false);
        Ok(opts)
    }
}
