use anyhow::Context;
use devdns_domain::{CliOverrides, Config};
use std::path::Path;
use tracing::{info, warn};

pub fn load_config(config_path: &Path, cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;
    config.validate()?;
    Ok(config)
}

/// Startup summary; called once logging is up.
pub fn log_config(config_path: &Path, config: &Config) {
    info!(
        config_file = %config_path.display(),
        bind = %config.server.listen_addr(),
        records = config.records.len(),
        forwarding = config.forwarding.enabled,
        upstreams = config.forwarding.servers.len(),
        "Configuration loaded"
    );

    for (domain, record) in config.unsupported_records() {
        warn!(
            domain = %domain,
            record_type = %record.record_type,
            "Record type is not supported; queries for it will get no answer"
        );
    }
}
