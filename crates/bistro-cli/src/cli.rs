use clap::{Parser, Subcommand, ValueEnum};

/// Output encoding for command results.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Single-line JSON
    Raw,
}

/// Top-level CLI parser for the `bistro` binary.
#[derive(Debug, Parser)]
#[command(name = "bistro", version, about = "Bistro - restaurant site content tools")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Skip the CMS and serve fallback content
    #[arg(long, global = true)]
    pub offline: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print menu items
    Menu,
    /// Print the homepage hero section
    Homepage,
    /// Print testimonials
    Testimonials {
        /// Only testimonials flagged for prominent display
        #[arg(long)]
        featured: bool,
    },
    /// Print the JSON Schema of a response shape
    Schema {
        /// One of: menu-items, homepage, testimonials
        name: String,
    },
    /// Print the resolved configuration (token redacted)
    Config,
}

impl Commands {
    /// Whether the command reads content and may need a CMS client.
    pub const fn needs_content(&self) -> bool {
        matches!(self, Self::Menu | Self::Homepage | Self::Testimonials { .. })
    }
}
