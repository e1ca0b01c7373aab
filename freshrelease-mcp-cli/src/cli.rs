use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use std::io;

#[derive(Parser, Debug)]
#[command(name = "freshrelease-mcp")]
#[command(version)]
#[command(about = "An MCP server exposing Freshrelease project tracking as tools")]
#[command(long_about = "
freshrelease-mcp is an MCP (Model Context Protocol) server that exposes
Freshrelease issue tracking operations as callable tools: listing users,
statuses and issue types, fetching, creating and updating issues, and
reading and adding comments.

Configuration comes from environment variables:
  FRESHRELEASE_API_TOKEN     API token for the Authorization header
  FRESHRELEASE_PROJECT_KEY   Project key that scopes every request (e.g. FBOTS)
  FRESHRELEASE_BASE_URL      Instance URL (default: https://freshworks.freshrelease.com)

Example usage:
  freshrelease-mcp serve     # Run as MCP server on stdio
  freshrelease-mcp doctor    # Check configuration and setup
  freshrelease-mcp completion bash > ~/.bashrc.d/freshrelease-mcp  # Generate bash completions
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run as MCP server (default when invoked via stdio)
    #[command(long_about = "
Runs freshrelease-mcp as an MCP server. This is the default mode when
invoked via stdio (e.g., by Claude Code). The server will:

- Expose the Freshrelease tool catalog via the MCP protocol
- Dispatch each tool call as one request to the Freshrelease API
- Report every per-call failure as an 'Error: ...' text result

Example:
  freshrelease-mcp serve
  # Or configure in Claude Code's MCP settings
")]
    Serve,
    /// Diagnose configuration and setup issues
    #[command(long_about = "
Runs diagnostics to help troubleshoot setup issues.
The doctor command will check:

- How freshrelease-mcp is installed and whether it is in your PATH
- FRESHRELEASE_API_TOKEN and FRESHRELEASE_PROJECT_KEY environment variables
- The configured Freshrelease base URL

Exit codes:
  0 - All checks passed
  1 - Warnings found
  2 - Errors found

Example:
  freshrelease-mcp doctor
")]
    Doctor,
    /// Generate shell completion scripts
    #[command(long_about = "
Generates shell completion scripts for various shells. Supports:
- bash
- zsh
- fish
- powershell

Examples:
  # Bash (add to ~/.bashrc or ~/.bash_profile)
  freshrelease-mcp completion bash > ~/.local/share/bash-completion/completions/freshrelease-mcp

  # Zsh (add to ~/.zshrc or a file in fpath)
  freshrelease-mcp completion zsh > ~/.zfunc/_freshrelease-mcp

  # Fish
  freshrelease-mcp completion fish > ~/.config/fish/completions/freshrelease-mcp.fish

  # PowerShell
  freshrelease-mcp completion powershell >> $PROFILE
")]
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn try_parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(args)
    }

    pub fn is_tty() -> bool {
        io::stdout().is_terminal()
    }

    pub fn should_use_color() -> bool {
        Self::is_tty() && std::env::var("NO_COLOR").is_err()
    }
}
