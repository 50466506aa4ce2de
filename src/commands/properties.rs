use crate::config::Config;
use anyhow::Result;

pub async fn run(config: &Config) -> Result<()> {
    let manager = super::load_mutation_data(config).await?;
    let state = manager.state();

    if state.properties.is_empty() {
        eprintln!("No variants available, no properties to list");
        return Ok(());
    }

    for property in &state.properties {
        if state.selected_property.as_deref() == Some(property.as_str()) {
            println!("{} (default)", property);
        } else {
            println!("{}", property);
        }
    }
    Ok(())
}
