//! Loads the application settings from the process environment.
//!
//! Settings are read once at start-up. The database settings are required
//! for the server to be useful at all, so the caller should treat a load
//! failure as fatal. The blob storage settings only gate the receipt upload
//! endpoint and may be absent.

use std::env;

use crate::Error;

/// The settings for connecting to the expense database.
///
/// All four values must be set in the environment. The host, user and
/// password are part of the deployment contract and are validated for
/// presence even though the embedded database only needs the path in
/// `database`.
#[derive(Debug, Clone, PartialEq)]
pub struct DbConfig {
    /// The database server host name.
    pub host: String,
    /// The database user name.
    pub user: String,
    /// The database user's password.
    pub password: String,
    /// The name (path) of the database to open.
    pub database: String,
}

impl DbConfig {
    /// Reads the database settings from the environment variables `DB_HOST`,
    /// `DB_USER`, `DB_PASSWORD` and `DB_DATABASE`.
    ///
    /// # Errors
    /// Returns [`Error::DatabaseSettingsIncomplete`] if any of the variables
    /// is unset or empty.
    pub fn from_env() -> Result<Self, Error> {
        match (
            non_empty_var("DB_HOST"),
            non_empty_var("DB_USER"),
            non_empty_var("DB_PASSWORD"),
            non_empty_var("DB_DATABASE"),
        ) {
            (Some(host), Some(user), Some(password), Some(database)) => Ok(Self {
                host,
                user,
                password,
                database,
            }),
            _ => Err(Error::DatabaseSettingsIncomplete),
        }
    }
}

/// The settings for the blob storage account that holds receipt images.
#[derive(Debug, Clone, PartialEq)]
pub struct BlobConfig {
    /// The storage account name.
    pub account: String,
    /// The storage account access key.
    pub access_key: String,
    /// The container that receipt blobs are uploaded into.
    pub container: String,
}

impl BlobConfig {
    /// Reads the blob storage settings from the environment variables
    /// `BLOB_ACCOUNT_NAME`, `BLOB_ACCOUNT_KEY` and `BLOB_CONTAINER_NAME`.
    ///
    /// Returns `None` if any of the variables is unset or empty. The server
    /// still starts without them, but the receipt upload endpoint will
    /// report that its settings are incomplete.
    pub fn from_env() -> Option<Self> {
        Some(Self {
            account: non_empty_var("BLOB_ACCOUNT_NAME")?,
            access_key: non_empty_var("BLOB_ACCOUNT_KEY")?,
            container: non_empty_var("BLOB_CONTAINER_NAME")?,
        })
    }

    /// The public URL that `blob_name` is served from once uploaded.
    pub fn public_url(&self, blob_name: &str) -> String {
        format!(
            "https://{}.blob.core.windows.net/{}/{}",
            self.account, self.container, blob_name
        )
    }

    /// The storage service endpoint for this account.
    pub fn endpoint_url(&self) -> String {
        format!("https://{}.blob.core.windows.net", self.account)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{BlobConfig, DbConfig};
    use crate::Error;

    // Environment variables are process-wide, so all the cases share one
    // test to avoid interleaving.
    #[test]
    fn reads_settings_from_environment() {
        unsafe {
            std::env::remove_var("DB_HOST");
            std::env::set_var("DB_USER", "tester");
            std::env::set_var("DB_PASSWORD", "hunter2");
            std::env::set_var("DB_DATABASE", "expenses.db");
        }
        assert_eq!(DbConfig::from_env(), Err(Error::DatabaseSettingsIncomplete));

        unsafe {
            std::env::set_var("DB_HOST", "");
        }
        assert_eq!(DbConfig::from_env(), Err(Error::DatabaseSettingsIncomplete));

        unsafe {
            std::env::set_var("DB_HOST", "localhost");
        }
        assert_eq!(
            DbConfig::from_env(),
            Ok(DbConfig {
                host: "localhost".to_owned(),
                user: "tester".to_owned(),
                password: "hunter2".to_owned(),
                database: "expenses.db".to_owned(),
            })
        );

        unsafe {
            std::env::remove_var("BLOB_ACCOUNT_NAME");
            std::env::set_var("BLOB_ACCOUNT_KEY", "c2VjcmV0");
            std::env::set_var("BLOB_CONTAINER_NAME", "receipts");
        }
        assert_eq!(BlobConfig::from_env(), None);

        unsafe {
            std::env::set_var("BLOB_ACCOUNT_NAME", "expensinator");
        }
        assert_eq!(
            BlobConfig::from_env(),
            Some(BlobConfig {
                account: "expensinator".to_owned(),
                access_key: "c2VjcmV0".to_owned(),
                container: "receipts".to_owned(),
            })
        );
    }

    #[test]
    fn public_url_includes_account_and_container() {
        let config = BlobConfig {
            account: "expensinator".to_owned(),
            access_key: "c2VjcmV0".to_owned(),
            container: "receipts".to_owned(),
        };

        assert_eq!(
            config.public_url("receipt-1.png"),
            "https://expensinator.blob.core.windows.net/receipts/receipt-1.png"
        );
    }
}
