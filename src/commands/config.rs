use crate::config::Config;
use anyhow::Result;

/// Prints the effective configuration, saving it first when anything changed.
pub fn run(mut config: Config, api_base_url: Option<String>, timeout: Option<u64>) -> Result<()> {
    let changed = api_base_url.is_some() || timeout.is_some();
    config.apply_base_url_override(api_base_url);
    if let Some(timeout) = timeout {
        config.request_timeout = timeout;
    }

    if changed {
        let path = config.save()?;
        println!("Saved configuration to {}", path.display());
    }

    println!("api_base_url = {}", config.api_base_url);
    println!("request_timeout = {}s", config.request_timeout);
    Ok(())
}
