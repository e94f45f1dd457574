//! Repository configuration, read from `config.toml` in the repository directory.
//!
//! ```toml
//! [user]
//! name = "A U Thor"
//! email = "author@example.com"
//!
//! [commit]
//! tz_offset = 150   # minutes east of GMT
//!
//! [tree]
//! symlinks = "record"   # or "follow"
//! ```
//!
//! Every key is optional.

use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::object::{Attribution, MAX_TZ_OFFSET, MIN_TZ_OFFSET};
use crate::repo::{Error, Result};

/// Name of the configuration file within the repository directory.
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub user: UserConfig,
    pub commit: CommitConfig,
    pub tree: TreeConfig,
}

/// Identity recorded as both author and committer.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct UserConfig {
    pub name: String,
    pub email: String,
}

impl Default for UserConfig {
    fn default() -> Self {
        UserConfig {
            name: "objstore".to_string(),
            email: "objstore@localhost".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CommitConfig {
    /// Minutes east of GMT written after each commit timestamp.
    pub tz_offset: i16,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TreeConfig {
    pub symlinks: SymlinkPolicy,
}

/// How the tree builder stores symbolic links.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum SymlinkPolicy {
    /// Read through the link: a link to a file is stored as that file's
    /// content (mode `100644`), a link to a directory as that directory's tree.
    Follow,

    /// Store the link target path as a blob with mode `120000`.
    Record,
}

impl Default for SymlinkPolicy {
    fn default() -> Self {
        SymlinkPolicy::Follow
    }
}

impl Config {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Config> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file. A missing file yields the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config> {
        match fs::read_to_string(path.as_ref()) {
            Ok(s) => Config::from_toml_str(&s),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Config::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Build the attribution for an action at `timestamp`.
    pub fn attribution(&self, timestamp: i64) -> Result<Attribution> {
        Attribution::new(
            &self.user.name,
            &self.user.email,
            timestamp,
            self.commit.tz_offset,
        )
        .ok_or_else(|| tz_out_of_range(self.commit.tz_offset))
    }

    fn validate(&self) -> Result<()> {
        let tz = self.commit.tz_offset;
        if !(MIN_TZ_OFFSET..=MAX_TZ_OFFSET).contains(&tz) {
            return Err(tz_out_of_range(tz));
        }
        Ok(())
    }
}

fn tz_out_of_range(tz: i16) -> Error {
    Error::InvalidArgument(format!(
        "time zone offset {} is outside {}..={} minutes",
        tz, MIN_TZ_OFFSET, MAX_TZ_OFFSET
    ))
}
