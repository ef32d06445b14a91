use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
        println!("📄 Current configuration:\n");
        println!("{}", yaml);
        Ok(())
    }

    /// Open `path` in the requested editor, falling back to $EDITOR/$VISUAL
    /// or the platform default.
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let first = editor.map(str::to_string).unwrap_or_else(|| default_editor.clone());

        if matches!(Command::new(&first).arg(path).status(), Ok(s) if s.success()) {
            success(format!("Configuration file edited using '{}'", first));
            return Ok(());
        }

        if first == default_editor {
            return Err(AppError::Config(format!("editor '{}' failed", first)));
        }

        warning(format!(
            "Editor '{}' not available, falling back to '{}'",
            first, default_editor
        ));

        match Command::new(&default_editor).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited using fallback '{}'",
                    default_editor
                ));
                Ok(())
            }
            _ => Err(AppError::Config(format!(
                "failed to edit configuration file using fallback '{}'",
                default_editor
            ))),
        }
    }
}
