use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::{check_schema, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        info,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        if *migrate {
            println!("{}▶ Running migrations…{}", CYAN, RESET);
            run_pending_migrations(&pool.conn)?;
            println!("{}✔ Migration completed.{}", GREEN, RESET);
        }

        if *info {
            stats::print_db_info(&pool, &cfg.database)?;
        }

        if *check {
            let missing = check_schema(&pool.conn)?;
            if missing.is_empty() {
                println!("{}✔ Schema is complete.{}", GREEN, RESET);
            } else {
                println!("{}✘ Missing tables: {}{}", RED, missing.join(", "), RESET);
            }
        }
    }

    Ok(())
}
