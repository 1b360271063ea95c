use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "minimal-mcp-server", author, version, about = "Minimal MCP server exposing an echo tool over stdio", long_about = None)]
pub struct Cli {
    /// Optional path to a config file (toml)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log filter, e.g. info or minimal_mcp_server=debug (logs go to stderr)
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Serve the MCP protocol on stdin/stdout (default)
    Serve,
    /// Print the tool catalog as JSON
    Tools,
    /// Print the default config path
    ConfigPath,
    /// Create an example config file if missing
    InitConfig,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn command(&self) -> &Commands {
        self.command.as_ref().unwrap_or(&Commands::Serve)
    }
}
