//! Configuration commands

use crate::app::{ConfigAction, ConfigArgs, OutputFormat};
use anyhow::{bail, Result};
use ragdesk_core::Config;

pub fn run(args: ConfigArgs, format: OutputFormat) -> Result<()> {
    let path = Config::resolve_path();

    match args.action {
        ConfigAction::Show => {
            let config = Config::load_from(&path)?;
            let api_key_set = config.llm_service.api_key.is_some();
            match format {
                OutputFormat::Json => {
                    let mut output = serde_json::to_value(&config)?;
                    output["llm_service"]["api_key_set"] = serde_json::Value::Bool(api_key_set);
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                OutputFormat::Cli => {
                    print!("{}", serde_yaml::to_string(&config)?);
                    println!("# api key: {}", if api_key_set { "set" } else { "not set" });
                }
            }
        }
        ConfigAction::Path => {
            println!("{}", path.display());
        }
        ConfigAction::Init => {
            if path.exists() {
                bail!("Config already exists at {}", path.display());
            }
            Config::default().save(&path)?;
            println!("Wrote default config to {}", path.display());
        }
    }
    Ok(())
}
