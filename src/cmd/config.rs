//! Configuration view and validation commands: `keysmith config`.

use anyhow::Result;
use std::path::Path;

use super::super::ConfigCommands;

pub fn cmd_config(
    project_dir: &Path,
    config_path: Option<&Path>,
    command: Option<ConfigCommands>,
) -> Result<()> {
    use keysmith::config::{ConfigSource, KeysmithConfig, KeysmithToml};

    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| KeysmithConfig::default_path(project_dir));

    match command {
        None | Some(ConfigCommands::Show) => {
            println!();
            println!("Keysmith Configuration");
            println!("======================");
            println!();

            let config = KeysmithConfig::load(project_dir, config_path)?;
            match &config.source {
                ConfigSource::File(file) => println!("Config file: {}", file.display()),
                ConfigSource::Defaults => {
                    println!("No keysmith.toml found at {}", path.display());
                    println!("Using default configuration.");
                }
            }
            println!();

            let toml = &config.toml;
            println!("[defaults]");
            println!("  language = \"{}\"", toml.defaults.language);
            println!("  count = {}", toml.defaults.count);
            println!("  max_words = {}", toml.defaults.max_words);
            println!("  complexity = \"{}\"", toml.defaults.complexity);
            println!("  format = \"{}\"", toml.defaults.format);
            println!("  strategy = \"{}\"", toml.defaults.strategy);
            println!();

            println!("[generator]");
            println!(
                "  overgeneration_factor = {}",
                toml.generator.overgeneration_factor
            );
            println!("  max_draw_attempts = {}", toml.generator.max_draw_attempts);
            println!();

            println!("[remote]");
            println!("  command = \"{}\"", toml.remote.command);
            if !toml.remote.args.is_empty() {
                println!("  args = {:?}", toml.remote.args);
            }
            if let Some(env_var) = &toml.remote.api_key_env {
                let state = if std::env::var(env_var).is_ok() {
                    "set"
                } else {
                    "not set"
                };
                println!("  api_key_env = \"{}\" ({})", env_var, state);
            }
            if let Some(country) = &toml.remote.country {
                println!("  country = \"{}\"", country);
            }
            println!();

            if matches!(config.source, ConfigSource::Defaults) {
                println!("Run 'keysmith config init' to create a keysmith.toml file.");
                println!();
            }
        }
        Some(ConfigCommands::Validate) => {
            println!();
            println!("Validating configuration...");
            println!();

            if !path.exists() {
                println!("No keysmith.toml found. Using defaults (valid).");
                return Ok(());
            }

            let toml = KeysmithToml::load(&path)?;
            let warnings = toml.validate();

            if warnings.is_empty() {
                println!("Configuration is valid.");
            } else {
                println!("Configuration warnings:");
                for warning in warnings {
                    println!("  - {}", warning);
                }
            }
            println!();
        }
        Some(ConfigCommands::Init) => {
            if path.exists() {
                println!("keysmith.toml already exists at {}", path.display());
                println!("Delete it first if you want to recreate it.");
                return Ok(());
            }

            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
                && !parent.exists()
            {
                std::fs::create_dir_all(parent)?;
            }

            KeysmithToml::default().save(&path)?;

            println!("Created keysmith.toml at {}", path.display());
            println!();
            println!("You can now customize:");
            println!("  - [defaults] language, count, max_words, complexity, format, strategy");
            println!("  - [generator] overgeneration_factor, max_draw_attempts");
            println!("  - [remote] command, args, api_key_env, country");
            println!();
        }
    }

    Ok(())
}
