use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::fs;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let path = Config::config_file();
            match fs::read_to_string(&path) {
                Ok(content) => {
                    println!("# {}", path.display());
                    println!("{}", content);
                }
                Err(_) => warning(format!(
                    "No configuration file at {} (run `timetracker init`)",
                    path.display()
                )),
            }
        }

        if *check {
            match Config::check_missing_fields() {
                Ok(missing) if missing.is_empty() => {
                    success("Configuration file is complete.");
                }
                Ok(missing) => {
                    warning("Configuration file is missing fields (defaults apply):");
                    for f in missing {
                        println!("  - {}", f);
                    }
                }
                Err(_) => warning("Configuration file not found or unreadable."),
            }
        }
    }

    Ok(())
}
