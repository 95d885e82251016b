//! Environment sources and the lenient typed lookups the loader is built on.

use crate::error::{Error, Result};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::warn;

/// Well-known location of the optional env file, relative to the working directory.
pub const DEFAULT_ENV_FILE: &str = "config/env/.env";

/// Read-only key/value view the configuration is assembled from.
///
/// The process environment is the default source; tests and embedders can
/// pass an explicit map instead.
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// Value of `key` if set and non-empty, otherwise `default`.
pub fn get_string<S: EnvSource + ?Sized>(src: &S, key: &str, default: &str) -> String {
    match src.var(key) {
        Some(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}

/// Base-10 integer value of `key`; missing or malformed values yield `default`.
pub fn get_int<S: EnvSource + ?Sized>(src: &S, key: &str, default: i64) -> i64 {
    let raw = get_string(src, key, "");
    if raw.is_empty() {
        return default;
    }
    match raw.parse::<i64>() {
        Ok(value) => value,
        Err(_) => {
            warn!(key, default, "ignoring malformed integer value");
            default
        }
    }
}

/// Boolean value of `key`; missing or malformed values yield `default`.
pub fn get_bool<S: EnvSource + ?Sized>(src: &S, key: &str, default: bool) -> bool {
    let raw = get_string(src, key, "");
    if raw.is_empty() {
        return default;
    }
    match parse_bool(&raw) {
        Some(value) => value,
        None => {
            warn!(key, default, "ignoring malformed boolean value");
            default
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Seed the process environment from a dotenv file.
///
/// Returns `Ok(false)` when the file does not exist. The whole file is parsed
/// before anything is set, so a broken file leaves the environment untouched.
/// Variables already present in the environment are never overridden.
pub fn seed_env_file(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(false);
    }

    let to_env_error = |source: dotenvy::Error| Error::EnvFile {
        path: path.to_path_buf(),
        source,
    };
    let entries = dotenvy::from_path_iter(path)
        .map_err(to_env_error)?
        .collect::<std::result::Result<Vec<(String, String)>, _>>()
        .map_err(to_env_error)?;

    for (key, value) in entries {
        if std::env::var_os(&key).is_none() {
            std::env::set_var(key, value);
        }
    }

    Ok(true)
}
