use wasm_bindgen::prelude::*;

use crate::depth::{build_profile, DepthConfig};
use crate::model::DepthSnapshot;
use crate::render::bars_from_buckets;
use crate::validate;

fn error_json(msg: String) -> String {
    serde_json::json!({ "error": msg }).to_string()
}

/// Aggregate a snapshot into `{ profile, bars }`.
///
/// `config_json` may be empty to use the default window.
#[wasm_bindgen]
pub fn aggregate_depth_json(snapshot_json: &str, config_json: &str) -> String {
    let snapshot: DepthSnapshot = match serde_json::from_str(snapshot_json) {
        Ok(s) => s,
        Err(e) => return error_json(format!("JSON parse error: {e}")),
    };
    let config: DepthConfig = if config_json.trim().is_empty() {
        DepthConfig::default()
    } else {
        match serde_json::from_str(config_json) {
            Ok(c) => c,
            Err(e) => return error_json(format!("Config parse error: {e}")),
        }
    };
    if let Err(e) = config.validate() {
        return error_json(e.to_string());
    }

    let profile = build_profile(&snapshot, &config);
    let bars = bars_from_buckets(&profile.buckets, &snapshot.base, &snapshot.quote);
    serde_json::json!({ "profile": profile, "bars": bars }).to_string()
}

#[wasm_bindgen]
pub fn validate_snapshot_json(json: &str) -> String {
    let snapshot: DepthSnapshot = match serde_json::from_str(json) {
        Ok(s) => s,
        Err(e) => {
            return serde_json::json!({
                "valid": false,
                "errors": [format!("JSON parse error: {}", e)]
            })
            .to_string();
        }
    };
    match validate::validate(&snapshot) {
        Ok(()) => serde_json::json!({ "valid": true }).to_string(),
        Err(errors) => {
            let error_strings: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            serde_json::json!({
                "valid": false,
                "errors": error_strings
            })
            .to_string()
        }
    }
}

#[wasm_bindgen]
pub fn get_schema() -> String {
    crate::schema::get_schema_json()
}
