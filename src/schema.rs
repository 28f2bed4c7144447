use schemars::schema_for;

use crate::model::DepthSnapshot;

/// JSON Schema of the snapshot input document, pretty-printed.
pub fn get_schema_json() -> String {
    let schema = schema_for!(DepthSnapshot);
    serde_json::to_string_pretty(&schema).unwrap_or_else(|e| {
        serde_json::json!({ "error": format!("Serialization error: {e}") }).to_string()
    })
}

/// Generate and print the JSON Schema for `DepthSnapshot`.
pub fn run() -> anyhow::Result<()> {
    println!("{}", get_schema_json());
    Ok(())
}
