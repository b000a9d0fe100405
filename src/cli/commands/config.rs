use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;

/// View or create the configuration file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        path,
        init,
    } = cmd
    {
        if *init {
            cfg.save()?;
            messages::success(format!(
                "Config file written: {}",
                Config::config_file().display()
            ));
        }

        if *path {
            println!("{}", Config::config_file().display());
        }

        if *print_config {
            let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            print!("{yaml}");
        }
    }

    Ok(())
}
