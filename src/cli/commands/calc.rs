use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::catalog::CatalogLogic;
use crate::core::session::CalcSession;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::ui::render::{print_session, report_history};

/// Compute a calculation from `--row` arguments ("print"), optionally storing
/// it as a favourite too ("save").
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calc { rows, save, format } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let devices = CatalogLogic::list_devices(&pool.conn)?;

        let mut session = CalcSession::new();
        for spec in rows {
            session.add_row(CatalogLogic::parse_row_spec(spec, &devices)?);
        }

        let format = format.unwrap_or(cfg.record_format);

        match save {
            Some(label) => {
                let outcome = session.save(&pool.conn, &devices, format, label)?;
                print_session(&session, cfg.decimals);
                report_history(&outcome.print);
                match outcome.favourite {
                    Ok(()) => success(format!("Saved as favourite '{}'", label)),
                    Err(e) => warning(format!("{}; favourite not saved.", e)),
                }
            }
            None => {
                let outcome = session.print(&pool.conn, &devices, format)?;
                print_session(&session, cfg.decimals);
                report_history(&outcome);
            }
        }
    }

    Ok(())
}
