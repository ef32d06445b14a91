use crate::cli::parser::{Commands, DeviceAction};
use crate::config::Config;
use crate::core::catalog::CatalogLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Device { action } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        match action {
            DeviceAction::Add { name, power } => {
                match CatalogLogic::add_device(&pool.conn, name, power)? {
                    Some(dev) => success(format!("Device #{} added: {}", dev.id, dev.label())),
                    None => warning("Device name and power are both required; nothing saved."),
                }
            }
            DeviceAction::List => {
                let devices = CatalogLogic::list_devices(&pool.conn)?;
                if devices.is_empty() {
                    info("No devices defined yet.");
                    return Ok(());
                }

                let mut table = Table::new(vec![Column::right("#"), Column::left("Device")]);
                for dev in &devices {
                    table.add_row(vec![dev.id.to_string(), dev.label()]);
                }
                print!("{}", table.render());
            }
        }
    }

    Ok(())
}
