pub mod check;
pub mod completions;
pub mod decode;
pub mod encode;
pub mod init;
pub mod list;
pub mod man_pages;
pub mod parse;

use deploybase_schema::Base;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_BASE_ERROR: u8 = 2;

pub fn json_pretty(value: &impl serde::Serialize) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("JSON serialization failed: {e}"))
}

/// Record form plus the pieces the record leaves out.
pub fn base_report(base: &Base) -> serde_json::Value {
    serde_json::json!({
        "name": base.name,
        "channel": base.channel,
        "architectures": base.architectures,
        "canonical": base.to_string(),
    })
}

pub fn mark_ok(text: &str) -> String {
    use console::Style;
    format!("{} {text}", Style::new().green().apply_to("✓"))
}

pub fn mark_fail(text: &str) -> String {
    use console::Style;
    format!("{} {text}", Style::new().red().apply_to("✗"))
}
