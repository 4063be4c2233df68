//! External generator invocation.
//!
//! The generator is an opaque collaborator: it takes two positional arguments
//! (URL, output path), inherits our stdout/stderr, and signals success via
//! exit status. The launcher never parses its output.

use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

use crate::config::{GeneratorConfig, LaunchConfig};

/// Environment variable overriding the generator command. Whitespace-split:
/// first token is the program, the rest are leading arguments.
pub const GENERATOR_ENV: &str = "PAPERLAUNCH_GENERATOR";

/// Outcome of one generator run. No partial-success state exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorStatus {
    Success,
    /// Non-zero exit. Holds the child's exit code (1 if killed by a signal).
    Failure(i32),
}

/// Resolved generator command: program plus leading arguments placed before
/// the URL and output path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl GeneratorCommand {
    /// Resolve the command: `PAPERLAUNCH_GENERATOR` env var, then the config
    /// file's `[generator]` section, then the built-in default.
    pub fn resolve(cfg: &LaunchConfig) -> Self {
        if let Ok(raw) = std::env::var(GENERATOR_ENV) {
            if let Some(cmd) = Self::parse_env(&raw) {
                return cmd;
            }
            tracing::warn!("{} is set but empty, ignoring", GENERATOR_ENV);
        }
        let generator = cfg.generator.clone().unwrap_or_default();
        Self::from_config(generator)
    }

    pub fn from_config(generator: GeneratorConfig) -> Self {
        Self {
            program: generator.program,
            args: generator.args,
        }
    }

    fn parse_env(raw: &str) -> Option<Self> {
        let mut tokens = raw.split_whitespace().map(str::to_string);
        let program = tokens.next()?;
        Some(Self {
            program,
            args: tokens.collect(),
        })
    }

    /// Fail early when the configured program is a path that does not exist.
    /// Bare program names are left to PATH resolution at spawn time.
    pub fn precheck(&self) -> Result<()> {
        if self.program.contains(std::path::MAIN_SEPARATOR) && !Path::new(&self.program).exists() {
            anyhow::bail!(
                "generator program not found: {} (set {} or the [generator] config section to override)",
                self.program,
                GENERATOR_ENV
            );
        }
        Ok(())
    }
}

/// Seam between the launcher flow and the real child process, so tests can
/// substitute a recording mock.
pub trait Generator {
    fn run(&self, url: &str, output_path: &Path) -> Result<GeneratorStatus>;
}

impl Generator for GeneratorCommand {
    /// Spawn `program args... url output_path` with inherited stdio and block
    /// until it exits. No timeout is applied.
    fn run(&self, url: &str, output_path: &Path) -> Result<GeneratorStatus> {
        tracing::info!(
            program = %self.program,
            url = %url,
            output = %output_path.display(),
            "invoking generator"
        );
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(url)
            .arg(output_path)
            .status()
            .with_context(|| format!("failed to run generator: {}", self.program))?;

        if status.success() {
            Ok(GeneratorStatus::Success)
        } else {
            Ok(GeneratorStatus::Failure(status.code().unwrap_or(1)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LaunchConfig;

    #[test]
    fn default_command_is_venv_python() {
        let cmd = GeneratorCommand::from_config(GeneratorConfig::default());
        assert_eq!(cmd.program, "venv/bin/python3");
        assert_eq!(cmd.args, vec!["generate_whitepaper_full.py"]);
    }

    #[test]
    fn env_parse_splits_program_and_args() {
        let cmd = GeneratorCommand::parse_env("/usr/bin/python3 gen.py --fast").unwrap();
        assert_eq!(cmd.program, "/usr/bin/python3");
        assert_eq!(cmd.args, vec!["gen.py", "--fast"]);
    }

    #[test]
    fn env_parse_rejects_blank() {
        assert!(GeneratorCommand::parse_env("   ").is_none());
    }

    #[test]
    fn config_section_overrides_default() {
        let cfg = LaunchConfig {
            generator: Some(GeneratorConfig {
                program: "./gen".to_string(),
                args: vec![],
            }),
            ..LaunchConfig::default()
        };
        let cmd = GeneratorCommand::from_config(cfg.generator.unwrap());
        assert_eq!(cmd.program, "./gen");
        assert!(cmd.args.is_empty());
    }

    #[test]
    fn precheck_rejects_missing_path() {
        let cmd = GeneratorCommand {
            program: "/nonexistent/venv/bin/python3".to_string(),
            args: vec![],
        };
        assert!(cmd.precheck().is_err());
    }

    #[test]
    fn precheck_leaves_bare_names_to_path() {
        let cmd = GeneratorCommand {
            program: "definitely-not-installed-anywhere".to_string(),
            args: vec![],
        };
        assert!(cmd.precheck().is_ok());
    }

    #[test]
    fn run_maps_exit_zero_to_success() {
        let cmd = GeneratorCommand {
            program: "sh".to_string(),
            args: vec!["-c".to_string(), "exit 0".to_string()],
        };
        let status = cmd.run("http://example.com", Path::new("/tmp/x.pdf")).unwrap();
        assert_eq!(status, GeneratorStatus::Success);
    }

    #[test]
    fn run_maps_nonzero_exit_to_failure() {
        let cmd = GeneratorCommand {
            program: "sh".to_string(),
            args: vec!["-c".to_string(), "exit 3".to_string()],
        };
        let status = cmd.run("http://example.com", Path::new("/tmp/x.pdf")).unwrap();
        assert_eq!(status, GeneratorStatus::Failure(3));
    }

    #[test]
    fn run_receives_positional_arguments() {
        // The script exits 0 only when handed exactly the URL and output path.
        let cmd = GeneratorCommand {
            program: "sh".to_string(),
            args: vec![
                "-c".to_string(),
                r#"[ "$1" = "http://example.com" ] && [ "$2" = "thoughtpaper/custom.pdf" ]"#.to_string(),
                "check".to_string(),
            ],
        };
        let status = cmd
            .run("http://example.com", Path::new("thoughtpaper/custom.pdf"))
            .unwrap();
        assert_eq!(status, GeneratorStatus::Success);
    }
}
