mod pools;
mod tokens;

use std::path::Path;

use thiserror::Error;

use crate::model::DepthSnapshot;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot has no pools")]
    NoPools,

    #[error("Pool {index} (fee {fee_pips}) has tick_spacing 0")]
    ZeroTickSpacing { index: usize, fee_pips: u32 },

    #[error("Pool {index} (fee {fee_pips}) has tick_spacing {spacing}, wider than the tick range")]
    TickSpacingTooLarge { index: usize, fee_pips: u32, spacing: u32 },

    #[error("Pool {index} current tick {tick} is outside the global tick bounds")]
    CurrentTickOutOfBounds { index: usize, tick: i32 },

    #[error("Pool {index} initialized tick {tick} is outside the global tick bounds")]
    TickOutOfBounds { index: usize, tick: i32 },

    #[error("Pool {index} initialized tick {tick} is not a multiple of tick_spacing {spacing}")]
    TickNotAligned { index: usize, tick: i32, spacing: u32 },

    #[error("Pool {index} current tick {tick} differs from first pool's {expected}")]
    CurrentTickMismatch { index: usize, tick: i32, expected: i32 },

    #[error("Pools {first} and {second} share fee tier {fee_pips}")]
    DuplicateFeeTier { first: usize, second: usize, fee_pips: u32 },

    #[error("Token `{symbol}` has {decimals} decimals (max 38)")]
    DecimalsTooLarge { symbol: String, decimals: u8 },

    #[error("Token `{symbol}` has a zero USD price")]
    ZeroPrice { symbol: String },
}

/// Load and fully validate a snapshot from a JSON file.
pub fn load_and_validate(path: &Path) -> Result<DepthSnapshot, Vec<ValidationError>> {
    let contents = std::fs::read_to_string(path).map_err(|e| vec![ValidationError::Io(e)])?;
    let snapshot: DepthSnapshot =
        serde_json::from_str(&contents).map_err(|e| vec![ValidationError::Json(e)])?;
    validate(&snapshot)?;
    Ok(snapshot)
}

/// Load a snapshot for a command, folding validation errors into one report.
pub fn load_snapshot(path: &Path) -> anyhow::Result<DepthSnapshot> {
    load_and_validate(path).map_err(|errors| {
        let msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        anyhow::anyhow!(
            "Snapshot {} failed validation:\n  {}",
            path.display(),
            msgs.join("\n  ")
        )
    })
}

/// Validate a snapshot, collecting all errors.
///
/// Aggregation tolerates every one of these; validation exists so the CLI
/// can tell a user their input is malformed instead of drawing an empty chart.
pub fn validate(snapshot: &DepthSnapshot) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    errors.extend(pools::check_pools(&snapshot.pools));
    errors.extend(pools::check_fee_tiers(&snapshot.pools));
    errors.extend(tokens::check_token(&snapshot.base));
    errors.extend(tokens::check_token(&snapshot.quote));

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// CLI entry point for the `validate` subcommand.
pub fn run(path: &Path) -> anyhow::Result<()> {
    match load_and_validate(path) {
        Ok(snapshot) => {
            let ticks: usize = snapshot.pools.iter().map(|p| p.initialized_ticks.len()).sum();
            println!(
                "Snapshot '{}' is valid. {} pools, {} initialized ticks.",
                snapshot.pair(),
                snapshot.pools.len(),
                ticks
            );
            Ok(())
        }
        Err(errors) => {
            eprintln!("Validation failed with {} error(s):", errors.len());
            for (i, e) in errors.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, e);
            }
            std::process::exit(1);
        }
    }
}
