pub mod catalog;
pub mod connection;
pub mod servers;

use serde_json::Value;

/// Pretty-print a decoded API body to stdout
pub fn print_json(value: &Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
