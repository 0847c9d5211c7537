use crate::cli::parser::{Commands, UserAction};
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::UserType;
use crate::ui::messages::success;
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_minutes, parse_duration};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::User { action } = cmd else {
        return Ok(());
    };

    let pool = DbPool::new(&cfg.database)?;

    match action {
        UserAction::Add {
            name,
            user_type,
            shift,
            manager,
        } => {
            let ut = UserType::from_code(user_type)
                .ok_or_else(|| AppError::InvalidUserType(user_type.clone()))?;

            let shift_minutes = match shift {
                Some(s) => parse_duration(s)?,
                None => parse_duration(&cfg.default_shift)?,
            };

            // Top-level admins are the only profiles without a manager.
            if ut != UserType::Admin && manager.is_none() {
                return Err(AppError::Config(format!(
                    "a {} profile needs --manager",
                    ut.to_db_str()
                )));
            }

            let id = queries::insert_user(&pool, name, ut, shift_minutes, *manager)?;
            ttlog(
                &pool.conn,
                "user-add",
                &id.to_string(),
                &format!("Created {} '{}'", ut.to_db_str(), name),
            )?;
            success(format!("Created user #{} ({})", id, name));
        }

        UserAction::List => {
            let users = queries::list_users(&pool)?;
            if users.is_empty() {
                println!("No users.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column { header: "ID".into(), width: 4 },
                Column { header: "Name".into(), width: 24 },
                Column { header: "Type".into(), width: 8 },
                Column { header: "Shift".into(), width: 6 },
                Column { header: "Manager".into(), width: 7 },
            ]);
            for u in users {
                table.add_row(vec![
                    u.id.to_string(),
                    u.name.clone(),
                    u.user_type.to_db_str().to_string(),
                    format_minutes(u.shift_minutes),
                    u.manager_id.map(|m| m.to_string()).unwrap_or_default(),
                ]);
            }
            print!("{}", table.render());
        }

        UserAction::Link {
            employee_id,
            admin_id,
        } => {
            let admin = queries::load_profile(&pool, *admin_id)?
                .ok_or(AppError::UserNotFound(*admin_id))?;
            if !admin.is_admin() {
                return Err(AppError::Config(format!(
                    "user #{} is not an admin",
                    admin_id
                )));
            }
            queries::load_profile(&pool, *employee_id)?
                .ok_or(AppError::UserNotFound(*employee_id))?;

            queries::link_employee(&pool, *admin_id, *employee_id)?;
            ttlog(
                &pool.conn,
                "user-link",
                &employee_id.to_string(),
                &format!("Linked employee {} to admin {}", employee_id, admin_id),
            )?;
            success(format!(
                "Employee #{} now belongs to admin #{}",
                employee_id, admin_id
            ));
        }

        UserAction::Unlink { employee_id } => {
            if queries::unlink_employee(&pool, *employee_id)? {
                ttlog(
                    &pool.conn,
                    "user-unlink",
                    &employee_id.to_string(),
                    &format!("Unlinked employee {}", employee_id),
                )?;
                success(format!("Employee #{} unlinked", employee_id));
            } else {
                println!("Employee #{} had no authorization link.", employee_id);
            }
        }
    }

    Ok(())
}
