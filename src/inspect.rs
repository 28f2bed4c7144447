use std::path::Path;

use liquidity_depth::depth::build_segments;
use liquidity_depth::math::tick_to_price;
use liquidity_depth::validate;

/// Entry point for the `segments` command.
pub fn run(path: &Path) -> anyhow::Result<()> {
    let snapshot = validate::load_snapshot(path)?;
    let (bd, qd) = (snapshot.base.decimals, snapshot.quote.decimals);

    println!("\n{}", "═".repeat(96));
    println!("  Liquidity segments: {}", snapshot.pair());
    println!("{}", "═".repeat(96));

    for pool in &snapshot.pools {
        let segments = build_segments(pool);
        println!(
            "\n  Fee {:.2}%  spacing {}  current tick {}  live liquidity {}",
            pool.fee_percent(),
            pool.tick_spacing,
            pool.current_tick,
            pool.liquidity
        );
        println!(
            "  {:>10} {:>10} {:>7} {:>14} {:>14} {:>28}",
            "Lower", "Upper", "Width", "Price lo", "Price hi", "Liquidity"
        );
        println!("  {}", "-".repeat(90));
        if segments.is_empty() {
            println!("  (no depth data)");
            continue;
        }
        for s in &segments {
            let marker = if pool.current_tick >= s.tick_lower && pool.current_tick < s.tick_upper {
                " ◀"
            } else {
                ""
            };
            println!(
                "  {:>10} {:>10} {:>7} {:>14.6} {:>14.6} {:>28}{marker}",
                s.tick_lower,
                s.tick_upper,
                s.width(),
                tick_to_price(s.tick_lower, bd, qd),
                tick_to_price(s.tick_upper, bd, qd),
                s.liquidity,
            );
        }
    }
    println!("{}", "═".repeat(96));
    Ok(())
}
