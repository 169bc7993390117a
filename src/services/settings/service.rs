use crate::models::settings::TimelineStyle;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

const STYLE_FILE_NAME: &str = "timeline_style.toml";

/// Loads and saves [`TimelineStyle`] as TOML
pub struct StyleService;

impl StyleService {
    /// Per-user style file location, if the platform has a config directory
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "KenBoyle", "DayTimeline")
            .map(|dirs| dirs.config_dir().join(STYLE_FILE_NAME))
    }

    /// Load the style at `path`, falling back to defaults when the file does
    /// not exist.
    pub fn load(path: &Path) -> Result<TimelineStyle> {
        if !path.exists() {
            log::info!(
                "No timeline style at {}, using defaults",
                path.display()
            );
            return Ok(TimelineStyle::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read style file {}", path.display()))?;
        let style: TimelineStyle = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse style file {}", path.display()))?;

        style
            .validate()
            .map_err(|e| anyhow!("Invalid style in {}: {}", path.display(), e))?;

        log::debug!("Loaded timeline style from {}", path.display());
        Ok(style)
    }

    /// Write `style` to `path`, creating parent directories as needed.
    pub fn save(path: &Path, style: &TimelineStyle) -> Result<()> {
        style
            .validate()
            .map_err(|e| anyhow!("Refusing to save invalid style: {}", e))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let contents =
            toml::to_string_pretty(style).context("Failed to serialize timeline style")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write style file {}", path.display()))?;

        Ok(())
    }
}
