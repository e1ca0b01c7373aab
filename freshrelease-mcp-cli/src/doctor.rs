//! Doctor module for Freshrelease MCP diagnostic tools
//!
//! Checks the installation and the `FRESHRELEASE_*` environment so that a
//! misconfigured server is caught before an MCP client sees its first
//! `Error: ...` result. Missing credentials are warnings, not errors: the
//! server deliberately starts without them and fails on the first call.
//!
//! The doctor returns exit codes:
//! - 0: All checks passed
//! - 1: Some warnings detected
//! - 2: Errors detected

use anyhow::Result;
use colored::*;
use freshrelease_mcp::{Config, DEFAULT_BASE_URL};
use std::env;

/// Check names constants to avoid typos and improve maintainability
pub mod check_names {
    pub const INSTALLATION: &str = "Installation";
    pub const IN_PATH: &str = "freshrelease-mcp in PATH";
    pub const API_TOKEN: &str = "FRESHRELEASE_API_TOKEN";
    pub const PROJECT_KEY: &str = "FRESHRELEASE_PROJECT_KEY";
    pub const BASE_URL: &str = "Freshrelease base URL";
}

/// Status of a diagnostic check
#[derive(Debug, PartialEq, Clone)]
pub enum CheckStatus {
    /// Check passed without issues
    Ok,
    /// Check passed but with potential issues
    Warning,
    /// Check failed with errors
    Error,
}

/// Exit codes for the doctor command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// All checks passed
    Success = 0,
    /// Warnings detected
    Warning = 1,
    /// Errors detected
    Error = 2,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Result of a single diagnostic check
#[derive(Debug, Clone)]
pub struct Check {
    /// Name of the check performed
    pub name: String,
    /// Status of the check (Ok, Warning, Error)
    pub status: CheckStatus,
    /// Descriptive message about the check result
    pub message: String,
    /// Optional fix suggestion for warnings or errors
    pub fix: Option<String>,
}

/// Main diagnostic tool for Freshrelease MCP setup checks
///
/// The Doctor struct accumulates diagnostic results and provides a summary
/// of the configuration and any potential issues.
pub struct Doctor {
    checks: Vec<Check>,
}

impl Doctor {
    /// Create a new Doctor instance for running diagnostics
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Run all diagnostic checks
    ///
    /// # Returns
    ///
    /// Returns an exit code:
    /// - 0: All checks passed
    /// - 1: Warnings detected
    /// - 2: Errors detected
    pub fn run_diagnostics(&mut self) -> Result<i32> {
        println!("{}", "🔧 Freshrelease MCP Doctor".bold().blue());
        println!("{}", "Running diagnostics...".dimmed());
        println!();

        check_installation(&mut self.checks)?;
        check_in_path(&mut self.checks)?;
        check_configuration(&mut self.checks, &Config::from_env());

        self.print_results();

        Ok(self.get_exit_code())
    }

    /// Print all check results followed by a summary line
    pub fn print_results(&self) {
        let use_color = crate::cli::Cli::should_use_color();

        if use_color {
            println!("{}", "Checks:".bold().yellow());
        } else {
            println!("Checks:");
        }
        for check in &self.checks {
            print_check(check, use_color);
        }
        println!();

        self.print_summary(use_color);
    }

    /// Print the summary of check results
    fn print_summary(&self, use_color: bool) {
        let ok_count = self.count_with_status(CheckStatus::Ok);
        let warning_count = self.count_with_status(CheckStatus::Warning);
        let error_count = self.count_with_status(CheckStatus::Error);

        if use_color {
            println!("{}", "Summary:".bold().green());
        } else {
            println!("Summary:");
        }

        match (error_count, warning_count) {
            (0, 0) => {
                println!("  All checks passed!");
            }
            (0, _) => {
                if use_color {
                    println!(
                        "  {} checks passed, {} warnings",
                        ok_count.to_string().green(),
                        warning_count.to_string().yellow()
                    );
                } else {
                    println!("  {ok_count} checks passed, {warning_count} warnings");
                }
            }
            _ => {
                if use_color {
                    println!(
                        "  {} checks passed, {} warnings, {} errors",
                        ok_count.to_string().green(),
                        warning_count.to_string().yellow(),
                        error_count.to_string().red()
                    );
                } else {
                    println!(
                        "  {ok_count} checks passed, {warning_count} warnings, {error_count} errors"
                    );
                }
            }
        }
    }

    fn count_with_status(&self, status: CheckStatus) -> usize {
        self.checks.iter().filter(|c| c.status == status).count()
    }

    /// Get exit code based on check results
    ///
    /// # Returns
    ///
    /// - 0: All checks passed (no errors or warnings)
    /// - 1: At least one warning detected
    /// - 2: At least one error detected
    pub fn get_exit_code(&self) -> i32 {
        let has_error = self.checks.iter().any(|c| c.status == CheckStatus::Error);
        let has_warning = self.checks.iter().any(|c| c.status == CheckStatus::Warning);

        let exit_code = if has_error {
            ExitCode::Error
        } else if has_warning {
            ExitCode::Warning
        } else {
            ExitCode::Success
        };

        exit_code.into()
    }
}

impl Default for Doctor {
    fn default() -> Self {
        Self::new()
    }
}

/// Check installation method and binary integrity
///
/// Reports where the binary runs from (cargo install, system package,
/// development build) along with its version and build type.
pub fn check_installation(checks: &mut Vec<Check>) -> Result<()> {
    let current_exe = env::current_exe().unwrap_or_default();
    let exe_path = current_exe.to_string_lossy();

    let installation_method = if exe_path.contains(".cargo/bin") {
        "Cargo install"
    } else if exe_path.contains("/usr/local/bin") || exe_path.contains("/usr/bin") {
        "System installation"
    } else if exe_path.contains("target/") && exe_path.contains("debug") {
        "Development build"
    } else if exe_path.contains("target/") && exe_path.contains("release") {
        "Local release build"
    } else {
        "Unknown"
    };

    let version = env!("CARGO_PKG_VERSION");
    let build_info = if cfg!(debug_assertions) {
        "debug build"
    } else {
        "release build"
    };

    checks.push(Check {
        name: check_names::INSTALLATION.to_string(),
        status: CheckStatus::Ok,
        message: format!("{installation_method} (v{version}, {build_info}) at {exe_path}"),
        fix: None,
    });

    Ok(())
}

/// Check if freshrelease-mcp is in PATH
///
/// MCP clients are routinely configured with an absolute binary path, so a
/// binary outside PATH is reported as informational with a fix hint rather
/// than as a warning.
pub fn check_in_path(checks: &mut Vec<Check>) -> Result<()> {
    let path_var = env::var("PATH").unwrap_or_default();
    let exe_name = "freshrelease-mcp";

    let found_path = env::split_paths(&path_var)
        .map(|path| path.join(exe_name))
        .find(|exe_path| exe_path.exists());

    match found_path {
        Some(path) => {
            checks.push(Check {
                name: check_names::IN_PATH.to_string(),
                status: CheckStatus::Ok,
                message: format!("Found at: {}", path.display()),
                fix: None,
            });
        }
        None => {
            checks.push(Check {
                name: check_names::IN_PATH.to_string(),
                status: CheckStatus::Ok,
                message: "freshrelease-mcp not found in PATH".to_string(),
                fix: Some(
                    "Add freshrelease-mcp to your PATH, or register it with the full binary path:\n\
                     claude mcp add --scope user freshrelease /path/to/freshrelease-mcp serve"
                        .to_string(),
                ),
            });
        }
    }

    Ok(())
}

/// Check the `FRESHRELEASE_*` environment configuration
///
/// Credentials are warnings when absent because the server starts without
/// them; the base URL check flags values that cannot be a Freshrelease
/// instance URL.
pub fn check_configuration(checks: &mut Vec<Check>, config: &Config) {
    if config.api_token.is_empty() {
        checks.push(Check {
            name: check_names::API_TOKEN.to_string(),
            status: CheckStatus::Warning,
            message: "API token is not set; every call will fail with an authorization error"
                .to_string(),
            fix: Some("Set FRESHRELEASE_API_TOKEN to your Freshrelease API token".to_string()),
        });
    } else {
        checks.push(Check {
            name: check_names::API_TOKEN.to_string(),
            status: CheckStatus::Ok,
            message: format!("Configured ({} characters)", config.api_token.len()),
            fix: None,
        });
    }

    if config.project_key.is_empty() {
        checks.push(Check {
            name: check_names::PROJECT_KEY.to_string(),
            status: CheckStatus::Warning,
            message: "Project key is not set; request URLs will be missing their scope segment"
                .to_string(),
            fix: Some("Set FRESHRELEASE_PROJECT_KEY to your project key (e.g. FBOTS)".to_string()),
        });
    } else {
        checks.push(Check {
            name: check_names::PROJECT_KEY.to_string(),
            status: CheckStatus::Ok,
            message: format!("Configured ({})", config.project_key),
            fix: None,
        });
    }

    if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
        checks.push(Check {
            name: check_names::BASE_URL.to_string(),
            status: CheckStatus::Warning,
            message: format!("Not an HTTP(S) URL: {}", config.base_url),
            fix: Some(
                "Set FRESHRELEASE_BASE_URL to a full URL, e.g. https://freshworks.freshrelease.com"
                    .to_string(),
            ),
        });
    } else if config.base_url == DEFAULT_BASE_URL {
        checks.push(Check {
            name: check_names::BASE_URL.to_string(),
            status: CheckStatus::Ok,
            message: format!("Using default instance ({DEFAULT_BASE_URL})"),
            fix: None,
        });
    } else {
        checks.push(Check {
            name: check_names::BASE_URL.to_string(),
            status: CheckStatus::Ok,
            message: format!("Using configured instance ({})", config.base_url),
            fix: None,
        });
    }
}

/// Print a single check result
fn print_check(check: &Check, use_color: bool) {
    let (symbol, color_fn): (&str, fn(&str) -> ColoredString) = match check.status {
        CheckStatus::Ok => ("✓", |s: &str| s.green()),
        CheckStatus::Warning => ("⚠", |s: &str| s.yellow()),
        CheckStatus::Error => ("✗", |s: &str| s.red()),
    };

    if use_color {
        print!(
            "  {} {} - {}",
            color_fn(symbol),
            check.name.bold(),
            check.message
        );
    } else {
        print!("  {} {} - {}", symbol, check.name, check.message);
    }

    if let Some(fix) = &check.fix {
        println!();
        if use_color {
            println!("    {} {}", "→".dimmed(), fix.dimmed());
        } else {
            println!("    → {fix}");
        }
    } else {
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_doctor_creation() {
        let doctor = Doctor::new();
        assert_eq!(doctor.checks.len(), 0);
    }

    #[test]
    fn test_check_status_exit_codes() {
        let mut doctor = Doctor::new();

        // All OK should return 0
        doctor.checks.push(Check {
            name: "Test OK".to_string(),
            status: CheckStatus::Ok,
            message: "Everything is fine".to_string(),
            fix: None,
        });
        assert_eq!(doctor.get_exit_code(), 0);

        // Warning should return 1
        doctor.checks.push(Check {
            name: "Test Warning".to_string(),
            status: CheckStatus::Warning,
            message: "Something might be wrong".to_string(),
            fix: Some("Consider fixing this".to_string()),
        });
        assert_eq!(doctor.get_exit_code(), 1);

        // Error should return 2
        doctor.checks.push(Check {
            name: "Test Error".to_string(),
            status: CheckStatus::Error,
            message: "Something is definitely wrong".to_string(),
            fix: Some("You must fix this".to_string()),
        });
        assert_eq!(doctor.get_exit_code(), 2);
    }

    #[test]
    fn test_exit_code_conversion() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::Warning), 1);
        assert_eq!(i32::from(ExitCode::Error), 2);
    }

    #[test]
    fn test_check_configuration_with_complete_config() {
        let mut checks = Vec::new();
        let config = Config::new(DEFAULT_BASE_URL, "token", "FBOTS");

        check_configuration(&mut checks, &config);

        assert_eq!(checks.len(), 3);
        assert!(checks.iter().all(|c| c.status == CheckStatus::Ok));
    }

    #[test]
    fn test_check_configuration_warns_on_missing_credentials() {
        let mut checks = Vec::new();
        let config = Config::new(DEFAULT_BASE_URL, "", "");

        check_configuration(&mut checks, &config);

        let warnings: Vec<_> = checks
            .iter()
            .filter(|c| c.status == CheckStatus::Warning)
            .collect();
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().all(|c| c.fix.is_some()));
    }

    #[test]
    fn test_check_configuration_flags_non_http_base_url() {
        let mut checks = Vec::new();
        let config = Config::new("freshworks.freshrelease.com", "token", "FBOTS");

        check_configuration(&mut checks, &config);

        let base_url_check = checks
            .iter()
            .find(|c| c.name == check_names::BASE_URL)
            .unwrap();
        assert_eq!(base_url_check.status, CheckStatus::Warning);
    }

    #[test]
    fn test_installation_check_is_informational() {
        let mut checks = Vec::new();
        check_installation(&mut checks).unwrap();

        assert_eq!(checks.len(), 1);
        assert_eq!(checks[0].status, CheckStatus::Ok);
        assert!(checks[0].message.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    #[serial]
    fn test_run_diagnostics_with_full_environment() {
        env::set_var("FRESHRELEASE_API_TOKEN", "doctor-test-token");
        env::set_var("FRESHRELEASE_PROJECT_KEY", "FBOTS");
        env::remove_var("FRESHRELEASE_BASE_URL");

        let mut doctor = Doctor::new();
        let exit_code = doctor.run_diagnostics().unwrap();

        assert!(!doctor.checks.is_empty());
        assert_eq!(exit_code, 0);

        env::remove_var("FRESHRELEASE_API_TOKEN");
        env::remove_var("FRESHRELEASE_PROJECT_KEY");
    }

    #[test]
    #[serial]
    fn test_run_diagnostics_warns_without_credentials() {
        env::remove_var("FRESHRELEASE_API_TOKEN");
        env::remove_var("FRESHRELEASE_PROJECT_KEY");
        env::remove_var("FRESHRELEASE_BASE_URL");

        let mut doctor = Doctor::new();
        let exit_code = doctor.run_diagnostics().unwrap();

        assert_eq!(exit_code, 1);
    }
}
