use liquidity_depth::model::{DepthSnapshot, PoolDepthRow, TokenMeta};

/// Print an example snapshot JSON to stdout.
pub fn run() -> anyhow::Result<()> {
    let snapshot = DepthSnapshot {
        // ICP (8 dp) quoted in USDC (6 dp) around $5.20
        base: TokenMeta::new("ICP", 8).with_price_e12(5_200_000_000_000),
        quote: TokenMeta::new("USDC", 6).with_price_e12(1_000_000_000_000),
        pools: vec![
            // ── 0.30% tier ──────────────────────────────────────
            PoolDepthRow::new(-29_460, 2_000_000_000, 3_000, 60)
                .with_tick(-30_600, 900_000_000)
                .with_tick(-29_940, 1_100_000_000)
                .with_tick(-29_100, -600_000_000)
                .with_tick(-28_500, -1_400_000_000),
            // ── 0.05% tier ──────────────────────────────────────
            PoolDepthRow::new(-29_460, 5_000_000_000, 500, 10)
                .with_tick(-29_700, 3_000_000_000)
                .with_tick(-29_520, 2_000_000_000)
                .with_tick(-29_380, -2_500_000_000)
                .with_tick(-29_200, -2_500_000_000),
            // ── 1% tier: one wide position ─────────────────────
            PoolDepthRow::new(-29_460, 800_000_000, 10_000, 200)
                .with_tick(-33_000, 800_000_000)
                .with_tick(-26_000, -800_000_000),
        ],
    };

    let json = serde_json::to_string_pretty(&snapshot)?;
    println!("{json}");
    Ok(())
}
