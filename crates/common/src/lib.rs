pub mod config;
pub mod env;
pub mod error;
pub mod logging;

pub use config::*;
pub use env::{
    get_bool, get_int, get_string, seed_env_file, EnvSource, ProcessEnv, DEFAULT_ENV_FILE,
};
pub use error::{Error, Result, ValidationError};
