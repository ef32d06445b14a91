use crate::cli::commands::ask_confirmation;
use crate::cli::parser::{Commands, RecordAction};
use crate::config::Config;
use crate::core::archive::HistoryLogic;
use crate::core::catalog::CatalogLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success};
use crate::ui::render::{print_session, report_history, summarize_record};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        match action {
            RecordAction::List => {
                let records = HistoryLogic::list(&pool.conn)?;
                if records.is_empty() {
                    info("History is empty.");
                    return Ok(());
                }

                let devices = CatalogLogic::list_devices(&pool.conn)?;
                let mut table = Table::new(vec![
                    Column::left("Timestamp"),
                    Column::right("Rows"),
                    Column::right("Total"),
                ]);
                for rec in &records {
                    let (rows, total) = summarize_record(&rec.data, &devices, cfg.decimals);
                    table.add_row(vec![rec.timestamp.clone(), rows, total]);
                }
                print!("{}", table.render());
            }

            RecordAction::Show { key } => {
                let devices = CatalogLogic::list_devices(&pool.conn)?;
                let mut loaded = HistoryLogic::open(&pool.conn, key)?;

                header(key);
                let printed = loaded.session.print(&pool.conn, &devices, loaded.format);
                print_session(&loaded.session, cfg.decimals);
                report_history(&printed?);
            }

            RecordAction::Del { key, yes } => {
                if !*yes
                    && !ask_confirmation(&format!(
                        "Delete history record '{}'? This action is irreversible.",
                        key
                    ))
                {
                    info("Operation cancelled.");
                    return Ok(());
                }

                if HistoryLogic::delete(&pool.conn, key)? {
                    success(format!("History record '{}' has been deleted.", key));
                } else {
                    info(format!("No history record '{}'; nothing to delete.", key));
                }
            }
        }
    }

    Ok(())
}
