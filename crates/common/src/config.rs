use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

const REDACTED: &str = "[REDACTED]";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: String,
    pub host: String,
    pub read_timeout: Duration,
    pub write_timeout: Duration,
}

impl ServerConfig {
    /// `host:port` the HTTP listener should bind to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: "8080".to_string(),
            host: "0.0.0.0".to_string(),
            read_timeout: Duration::from_secs(30),
            write_timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: i64,
    pub user: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub db_name: String,
    pub ssl_mode: String,
    pub max_open_conns: u32,
    pub max_idle_conns: u32,
    pub conn_max_lifetime: Duration,
}

impl DatabaseConfig {
    /// Connection descriptor for the primary database.
    ///
    /// Embeds the plaintext password; never log the result.
    pub fn dsn(&self) -> String {
        format!(
            "host={} port={} user={} password={} dbname={} sslmode={}",
            self.host, self.port, self.user, self.password, self.db_name, self.ssl_mode
        )
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &REDACTED)
            .field("db_name", &self.db_name)
            .field("ssl_mode", &self.ssl_mode)
            .field("max_open_conns", &self.max_open_conns)
            .field("max_idle_conns", &self.max_idle_conns)
            .field("conn_max_lifetime", &self.conn_max_lifetime)
            .finish()
    }
}

#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct RedisConfig {
    pub host: String,
    pub port: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub db: i64,
}

impl RedisConfig {
    /// `redis://` URL for the cache client. Embeds the percent-encoded
    /// password when one is set; never log the result.
    pub fn url(&self) -> String {
        if self.password.is_empty() {
            format!("redis://{}:{}/{}", self.host, self.port, self.db)
        } else {
            format!(
                "redis://:{}@{}:{}/{}",
                urlencoding::encode(&self.password),
                self.host,
                self.port,
                self.db
            )
        }
    }
}

impl fmt::Debug for RedisConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("password", &REDACTED)
            .field("db", &self.db)
            .finish()
    }
}

#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct SecurityConfig {
    #[serde(skip_serializing)]
    pub jwt_secret: String,
    /// Raw AES-256 key material; must be exactly 32 bytes.
    #[serde(skip_serializing)]
    pub encryption_key: Vec<u8>,
    pub token_expiration: Duration,
    pub refresh_expiration: Duration,
    pub mfa_issuer: String,
    pub mfa_required: bool,
    pub rate_limit_requests: i64,
    pub rate_limit_window: Duration,
}

impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("jwt_secret", &REDACTED)
            .field("encryption_key", &REDACTED)
            .field("token_expiration", &self.token_expiration)
            .field("refresh_expiration", &self.refresh_expiration)
            .field("mfa_issuer", &self.mfa_issuer)
            .field("mfa_required", &self.mfa_required)
            .field("rate_limit_requests", &self.rate_limit_requests)
            .field("rate_limit_window", &self.rate_limit_window)
            .finish()
    }
}

/// Connection settings for the isolated audit store.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditConfig {
    pub db_host: String,
    pub db_port: i64,
    pub db_user: String,
    #[serde(skip_serializing)]
    pub db_password: String,
    pub db_name: String,
}

impl AuditConfig {
    /// Connection descriptor for the audit database. TLS is always required,
    /// there is no configurable mode.
    pub fn dsn(&self) -> String {
        format!(
            "host={} port={} user={} password={} dbname={} sslmode=require",
            self.db_host, self.db_port, self.db_user, self.db_password, self.db_name
        )
    }
}

impl fmt::Debug for AuditConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuditConfig")
            .field("db_host", &self.db_host)
            .field("db_port", &self.db_port)
            .field("db_user", &self.db_user)
            .field("db_password", &REDACTED)
            .field("db_name", &self.db_name)
            .finish()
    }
}
