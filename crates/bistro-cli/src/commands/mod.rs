use bistro_cms::ContentClient;
use bistro_config::BistroConfig;

use crate::cli::{Cli, Commands};
use crate::output::output;

pub mod content;
pub mod schema;

/// Route a parsed command to its handler.
pub async fn dispatch(cli: &Cli, config: &BistroConfig) -> anyhow::Result<()> {
    let client = if cli.offline || !cli.command.needs_content() {
        None
    } else {
        ContentClient::try_from_config(&config.cms)
    };
    if client.is_none() && cli.command.needs_content() {
        tracing::info!("serving fallback content without contacting the CMS");
    }

    match &cli.command {
        Commands::Menu => content::menu(client.as_ref(), cli.format).await,
        Commands::Homepage => content::homepage(client.as_ref(), cli.format).await,
        Commands::Testimonials { featured } => {
            content::testimonials(client.as_ref(), *featured, cli.format).await
        }
        Commands::Schema { name } => schema::handle(name, cli.format),
        Commands::Config => output(&config.redacted(), cli.format),
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[tokio::test]
    async fn schema_command_is_dispatched() {
        let cli = Cli::try_parse_from(["bistro", "schema", "homepage", "--format", "raw"]).unwrap();
        assert!(dispatch(&cli, &BistroConfig::default()).await.is_ok());
    }

    #[tokio::test]
    async fn unknown_schema_name_is_an_error() {
        let cli = Cli::try_parse_from(["bistro", "schema", "reservations"]).unwrap();
        let err = dispatch(&cli, &BistroConfig::default()).await.unwrap_err();
        assert!(format!("{err:#}").contains("menu-items, homepage, testimonials"));
    }

    #[tokio::test]
    async fn offline_content_commands_succeed() {
        for args in [
            ["bistro", "--offline", "menu"].as_slice(),
            ["bistro", "--offline", "testimonials", "--featured"].as_slice(),
        ] {
            let cli = Cli::try_parse_from(args).unwrap();
            assert!(dispatch(&cli, &BistroConfig::default()).await.is_ok());
        }
    }
}
