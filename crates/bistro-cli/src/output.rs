use serde::Serialize;

use crate::cli::OutputFormat;

/// Render a serializable value in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable value to stdout.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn raw_is_single_line() {
        let value = serde_json::json!({"a": [1, 2]});
        assert_eq!(render(&value, OutputFormat::Raw).unwrap(), r#"{"a":[1,2]}"#);
        assert!(render(&value, OutputFormat::Json).unwrap().contains('\n'));
    }
}
