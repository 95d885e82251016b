use common::{
    get_bool, get_int, get_string, seed_env_file, AuditConfig, DatabaseConfig, EnvSource,
    ProcessEnv, RedisConfig, Result, SecurityConfig, ServerConfig, ValidationError,
    DEFAULT_ENV_FILE,
};
use serde::Serialize;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};

const SERVER_TIMEOUT: Duration = Duration::from_secs(30);
const DB_MAX_OPEN_CONNS: u32 = 25;
const DB_MAX_IDLE_CONNS: u32 = 5;
const DB_CONN_MAX_LIFETIME: Duration = Duration::from_secs(5 * 60);
const TOKEN_EXPIRATION: Duration = Duration::from_secs(15 * 60);
const REFRESH_EXPIRATION: Duration = Duration::from_secs(7 * 24 * 60 * 60);
const RATE_LIMIT_WINDOW: Duration = Duration::from_secs(60);

const MIN_JWT_SECRET_LEN: usize = 32;
const ENCRYPTION_KEY_BYTES: usize = 32;

/// Serializes without secrets; there is no way back from the serialized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub security: SecurityConfig,
    pub audit: AuditConfig,
}

impl Config {
    /// Seed from the default env file, then load from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::load(DEFAULT_ENV_FILE)
    }

    /// Seed the process environment from `env_file` (if present) and build a
    /// validated configuration from it.
    ///
    /// A broken env file is not fatal: it is logged and the ambient
    /// environment is used as-is.
    pub fn load(env_file: impl AsRef<Path>) -> Result<Self> {
        let env_file = env_file.as_ref();
        match seed_env_file(env_file) {
            Ok(true) => debug!(path = %env_file.display(), "Environment seeded from file"),
            Ok(false) => {}
            Err(e) => warn!(error = %e, "Continuing with process environment"),
        }

        Self::from_source(&ProcessEnv)
    }

    /// Build and validate a configuration from an explicit source.
    pub fn from_source<S: EnvSource + ?Sized>(src: &S) -> Result<Self> {
        let config = Self::assemble(src);
        config.validate()?;
        Ok(config)
    }

    /// Apply defaults and constants without validating.
    pub fn assemble<S: EnvSource + ?Sized>(src: &S) -> Self {
        let server = ServerConfig {
            port: get_string(src, "SERVER_PORT", "8080"),
            host: get_string(src, "SERVER_HOST", "0.0.0.0"),
            read_timeout: SERVER_TIMEOUT,
            write_timeout: SERVER_TIMEOUT,
        };

        let database = DatabaseConfig {
            host: get_string(src, "DB_HOST", "localhost"),
            port: get_int(src, "DB_PORT", 5432),
            user: get_string(src, "DB_USER", "postgres"),
            password: get_string(src, "DB_PASSWORD", ""),
            db_name: get_string(src, "DB_NAME", "secure_vault"),
            ssl_mode: get_string(src, "DB_SSLMODE", "require"),
            max_open_conns: DB_MAX_OPEN_CONNS,
            max_idle_conns: DB_MAX_IDLE_CONNS,
            conn_max_lifetime: DB_CONN_MAX_LIFETIME,
        };

        let redis = RedisConfig {
            host: get_string(src, "REDIS_HOST", "localhost"),
            port: get_string(src, "REDIS_PORT", "6379"),
            password: get_string(src, "REDIS_PASSWORD", ""),
            db: get_int(src, "REDIS_DB", 0),
        };

        let security = SecurityConfig {
            jwt_secret: get_string(src, "JWT_SECRET", ""),
            encryption_key: get_string(src, "ENCRYPTION_KEY", "").into_bytes(),
            token_expiration: TOKEN_EXPIRATION,
            refresh_expiration: REFRESH_EXPIRATION,
            mfa_issuer: get_string(src, "MFA_ISSUER", "SecureVault"),
            mfa_required: get_bool(src, "MFA_REQUIRED", true),
            rate_limit_requests: get_int(src, "RATE_LIMIT_REQUESTS", 100),
            rate_limit_window: RATE_LIMIT_WINDOW,
        };

        let audit = AuditConfig {
            db_host: get_string(src, "AUDIT_DB_HOST", "localhost"),
            db_port: get_int(src, "AUDIT_DB_PORT", 5433),
            db_user: get_string(src, "AUDIT_DB_USER", "audit_user"),
            db_password: get_string(src, "AUDIT_DB_PASSWORD", ""),
            db_name: get_string(src, "AUDIT_DB_NAME", "secure_vault_audit"),
        };

        Config {
            server,
            database,
            redis,
            security,
            audit,
        }
    }

    /// Check the security invariants in order; the first failure is returned.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        let jwt_secret = &self.security.jwt_secret;
        if jwt_secret.is_empty() {
            return Err(ValidationError::MissingJwtSecret);
        }
        // Length in bytes, not characters.
        if jwt_secret.len() < MIN_JWT_SECRET_LEN {
            return Err(ValidationError::JwtSecretTooShort);
        }

        // AES-256
        if self.security.encryption_key.len() != ENCRYPTION_KEY_BYTES {
            return Err(ValidationError::InvalidEncryptionKeyLength);
        }

        if self.database.password.is_empty() {
            return Err(ValidationError::MissingDatabasePassword);
        }
        if self.audit.db_password.is_empty() {
            return Err(ValidationError::MissingAuditDatabasePassword);
        }

        Ok(())
    }
}
