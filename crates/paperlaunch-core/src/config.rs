use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default URL handed to the generator when the user just presses enter.
pub const DEFAULT_URL: &str = "https://expert.email/classify";
/// Default output filename when the user just presses enter.
pub const DEFAULT_FILENAME: &str = "Phantom_Engaged_Whitepaper_Full.pdf";
/// Directory (relative to the working directory) where generated PDFs land.
pub const DEFAULT_OUTPUT_DIR: &str = "thoughtpaper";

/// Built-in generator command used when neither the config file nor the
/// `PAPERLAUNCH_GENERATOR` environment variable overrides it.
pub const DEFAULT_GENERATOR_PROGRAM: &str = "venv/bin/python3";
pub const DEFAULT_GENERATOR_SCRIPT: &str = "generate_whitepaper_full.py";

/// External generator command (optional section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Program to run (interpreter or binary).
    pub program: String,
    /// Leading arguments placed before the URL and output path.
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_GENERATOR_PROGRAM.to_string(),
            args: vec![DEFAULT_GENERATOR_SCRIPT.to_string()],
        }
    }
}

/// Global configuration loaded from `~/.config/paperlaunch/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchConfig {
    /// URL substituted when the URL prompt gets an empty answer.
    pub default_url: String,
    /// Filename substituted when the filename prompt gets an empty answer.
    pub default_filename: String,
    /// Output directory, created at startup if absent.
    pub output_dir: String,
    /// Optional generator command; if missing, the built-in default is used.
    #[serde(default)]
    pub generator: Option<GeneratorConfig>,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            default_url: DEFAULT_URL.to_string(),
            default_filename: DEFAULT_FILENAME.to_string(),
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            generator: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("paperlaunch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LaunchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = LaunchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: LaunchConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = LaunchConfig::default();
        assert_eq!(cfg.default_url, "https://expert.email/classify");
        assert_eq!(cfg.default_filename, "Phantom_Engaged_Whitepaper_Full.pdf");
        assert_eq!(cfg.output_dir, "thoughtpaper");
        assert!(cfg.generator.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = LaunchConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: LaunchConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.default_url, cfg.default_url);
        assert_eq!(parsed.default_filename, cfg.default_filename);
        assert_eq!(parsed.output_dir, cfg.output_dir);
        assert!(parsed.generator.is_none());
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            default_url = "http://example.com"
            default_filename = "report.pdf"
            output_dir = "out"
        "#;
        let cfg: LaunchConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.default_url, "http://example.com");
        assert_eq!(cfg.default_filename, "report.pdf");
        assert_eq!(cfg.output_dir, "out");
        assert!(cfg.generator.is_none());
    }

    #[test]
    fn config_toml_generator_section() {
        let toml = r#"
            default_url = "http://example.com"
            default_filename = "report.pdf"
            output_dir = "out"

            [generator]
            program = "/usr/bin/python3"
            args = ["gen.py", "--fast"]
        "#;
        let cfg: LaunchConfig = toml::from_str(toml).unwrap();
        let generator = cfg.generator.as_ref().unwrap();
        assert_eq!(generator.program, "/usr/bin/python3");
        assert_eq!(generator.args, vec!["gen.py", "--fast"]);
    }

    #[test]
    fn generator_config_default_args() {
        let toml = r#"
            program = "./gen"
        "#;
        let generator: GeneratorConfig = toml::from_str(toml).unwrap();
        assert_eq!(generator.program, "./gen");
        assert!(generator.args.is_empty());
    }
}
