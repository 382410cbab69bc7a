use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config, init } = cmd {
        if *init {
            cfg.save()?;
            success(format!("Config file: {}", Config::config_file().display()));
        }

        if *print_config {
            let yaml = serde_yaml::to_string(cfg)
                .map_err(|e| AppError::Config(format!("failed to serialize config: {}", e)))?;
            info(format!("Configuration ({})", Config::config_file().display()));
            println!("{}", yaml);
        }
    }
    Ok(())
}
