mod config;

use anyhow::Result;
use common::logging::{self, LogConfig};
use common::ProcessEnv;
use tracing::{error, info};

fn main() -> Result<()> {
    // Initialize tracing
    logging::init(&LogConfig::from_source(&ProcessEnv))?;

    info!("Starting Secure Vault...");

    // Load configuration
    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Configuration rejected");
            return Err(e.into());
        }
    };

    info!("Configuration loaded");
    info!(address = %config.server.bind_address(), "Server will listen");
    info!(
        host = %config.database.host,
        port = config.database.port,
        dbname = %config.database.db_name,
        sslmode = %config.database.ssl_mode,
        max_open_conns = config.database.max_open_conns,
        "Primary database"
    );
    info!(
        host = %config.redis.host,
        port = %config.redis.port,
        db = config.redis.db,
        "Cache"
    );
    info!(
        host = %config.audit.db_host,
        port = config.audit.db_port,
        dbname = %config.audit.db_name,
        "Audit database"
    );
    info!(
        mfa_issuer = %config.security.mfa_issuer,
        mfa_required = config.security.mfa_required,
        rate_limit_requests = config.security.rate_limit_requests,
        rate_limit_window_secs = config.security.rate_limit_window.as_secs(),
        "Security policy"
    );

    Ok(())
}
