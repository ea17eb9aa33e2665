//! Runtime configuration

use std::path::{Path, PathBuf};

use crate::catalog::{load_table, Catalog, TableKind};
use crate::env::{env_get_bool, env_get_opt};
use crate::error::TableError;
use crate::ewarn;
use crate::log::{self, LogLevel};

pub const ENV_SOURCE_TABLE: &str = "ERRVAL_SOURCE_TABLE";
pub const ENV_CODE_TABLE: &str = "ERRVAL_CODE_TABLE";
pub const ENV_SYSTEM_TABLE: &str = "ERRVAL_SYSTEM_TABLE";

/// Where tables come from and how chatty the library is.
///
/// The default source of a subsystem is not configured here; it is fixed at
/// compile time with [`default_source!`](crate::default_source).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Replacement source table (stock table if `None`)
    pub source_table: Option<PathBuf>,

    /// Replacement code table (stock table if `None`)
    pub code_table: Option<PathBuf>,

    /// Replacement system-error name table (stock table if `None`)
    pub system_table: Option<PathBuf>,

    /// Log level override (environment / default if `None`)
    pub log_level: Option<LogLevel>,

    /// Flush stderr after every log line
    pub flush_log: bool,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read every field from `ERRVAL_*` environment variables.
    pub fn from_env() -> Self {
        Self {
            source_table: env_get_opt(ENV_SOURCE_TABLE),
            code_table: env_get_opt(ENV_CODE_TABLE),
            system_table: env_get_opt(ENV_SYSTEM_TABLE),
            log_level: env_get_opt(log::ENV_LOG_LEVEL),
            flush_log: env_get_bool(log::ENV_FLUSH_LOG, false),
        }
    }

    pub fn source_table(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_table = Some(path.into());
        self
    }

    pub fn code_table(mut self, path: impl Into<PathBuf>) -> Self {
        self.code_table = Some(path.into());
        self
    }

    pub fn system_table(mut self, path: impl Into<PathBuf>) -> Self {
        self.system_table = Some(path.into());
        self
    }

    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.log_level = Some(level);
        self
    }

    pub fn flush_log(mut self, enable: bool) -> Self {
        self.flush_log = enable;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), &'static str> {
        let paths: Vec<&Path> = [&self.source_table, &self.code_table, &self.system_table]
            .into_iter()
            .filter_map(|p| p.as_deref())
            .collect();
        if paths.iter().any(|p| p.as_os_str().is_empty()) {
            return Err("table path must not be empty");
        }
        for (i, path) in paths.iter().enumerate() {
            if paths[i + 1..].contains(path) {
                return Err("one file cannot hold two different tables");
            }
        }
        Ok(())
    }

    /// Apply the logging fields.
    pub fn apply_logging(&self) {
        if let Some(level) = self.log_level {
            log::set_log_level(level);
        }
        if self.flush_log {
            log::set_flush_enabled(true);
        }
    }

    /// Build the catalog this configuration names.
    pub fn load_catalog(&self) -> Result<Catalog, TableError> {
        let mut builder = Catalog::builder();
        if let Some(path) = &self.source_table {
            builder = builder.sources(load_table(path, TableKind::Sources)?)?;
        }
        if let Some(path) = &self.code_table {
            builder = builder.codes(load_table(path, TableKind::Codes)?)?;
        }
        if let Some(path) = &self.system_table {
            let table = load_table(path, TableKind::System)?;
            let platform = crate::sys::errno_table();
            for entry in table.iter() {
                if !platform.iter().any(|&(name, _)| name == entry.name) {
                    ewarn!("{}: {} matches no errno on this platform", path.display(), entry.name);
                }
            }
            builder = builder.system(table)?;
        }
        Ok(builder.build())
    }
}
