use anyhow::Context;
use bistro_core::schema::{SCHEMA_NAMES, schema_for_name};

use crate::cli::OutputFormat;
use crate::output::output;

/// Handle `bistro schema <name>`.
pub fn handle(name: &str, format: OutputFormat) -> anyhow::Result<()> {
    let schema = schema_for_name(name)
        .with_context(|| format!("expected one of: {}", SCHEMA_NAMES.join(", ")))?;
    output(&schema, format)
}
