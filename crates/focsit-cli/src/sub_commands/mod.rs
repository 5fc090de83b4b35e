pub mod asset;
pub mod base_url;
pub mod create;
pub mod list;
pub mod submit;

use anyhow::Result;
use serde::Serialize;

/// Print a value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
