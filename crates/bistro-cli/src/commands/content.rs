use bistro_cms::{ContentClient, Sourced, load_homepage, load_menu_items, load_testimonials};
use bistro_fallback::featured_testimonials;

use crate::cli::OutputFormat;
use crate::output::output;

/// Handle `bistro menu`.
pub async fn menu(client: Option<&ContentClient>, format: OutputFormat) -> anyhow::Result<()> {
    let menu = load_menu_items(client).await;
    tracing::debug!(source = %menu.source, items = menu.data.len(), "menu loaded");
    output(&menu, format)
}

/// Handle `bistro homepage`.
pub async fn homepage(client: Option<&ContentClient>, format: OutputFormat) -> anyhow::Result<()> {
    output(&load_homepage(client).await, format)
}

/// Handle `bistro testimonials [--featured]`.
pub async fn testimonials(
    client: Option<&ContentClient>,
    featured: bool,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let testimonials = load_testimonials(client).await;
    if !featured {
        return output(&testimonials, format);
    }

    let featured = Sourced {
        source: testimonials.source,
        data: featured_testimonials(&testimonials.data),
    };
    output(&featured, format)
}
