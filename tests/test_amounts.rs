use liquidity_depth::math::{amounts, tick_to_price, usd, TokenAmounts, MAX_TICK, MIN_TICK};

// ── Monotonicity ────────────────────────────────────────────────────

#[test]
fn test_amounts_monotonic_in_liquidity() {
    let ranges = [(-600, 600), (-600, -60), (60, 600), (-10, 10)];
    let actives = [-1000, -600, -300, 0, 5, 300, 600, 1000];
    let liquidities = [1u128, 10, 1_000, 1_000_000, 10u128.pow(18), 10u128.pow(30)];

    for (lo, hi) in ranges {
        for active in actives {
            let mut prev = TokenAmounts::ZERO;
            for l in liquidities {
                let a = amounts(lo, hi, active, l);
                assert!(a.base >= prev.base, "base decreased at [{lo},{hi}) active {active} L {l}");
                assert!(a.quote >= prev.quote, "quote decreased at [{lo},{hi}) active {active} L {l}");
                assert!(a.base >= 0.0 && a.quote >= 0.0);
                prev = a;
            }
        }
    }
}

// ── Split across sub-ranges ─────────────────────────────────────────

#[test]
fn test_sub_ranges_sum_to_whole_range() {
    let whole = amounts(-600, 600, 90, 1_000_000);
    let parts: Vec<TokenAmounts> = (-600..600)
        .step_by(120)
        .map(|lo| amounts(lo, lo + 120, 90, 1_000_000))
        .collect();
    let base: f64 = parts.iter().map(|a| a.base).sum();
    let quote: f64 = parts.iter().map(|a| a.quote).sum();
    assert!((base - whole.base).abs() / whole.base < 1e-9);
    assert!((quote - whole.quote).abs() / whole.quote < 1e-9);
}

#[test]
fn test_side_of_active_tick_decides_token() {
    let below = amounts(-600, -300, 0, 1_000_000);
    assert_eq!(below.base, 0.0);
    assert!(below.quote > 0.0);

    let above = amounts(300, 600, 0, 1_000_000);
    assert!(above.base > 0.0);
    assert_eq!(above.quote, 0.0);
}

// ── Defensive contract ──────────────────────────────────────────────

#[test]
fn test_out_of_bounds_range_is_zero() {
    assert_eq!(amounts(MIN_TICK - 1, 0, 0, 1_000), TokenAmounts::ZERO);
    assert_eq!(amounts(0, MAX_TICK + 1, 0, 1_000), TokenAmounts::ZERO);
    // Bounds themselves are valid.
    assert!(!amounts(MAX_TICK - 60, MAX_TICK, 0, 1_000).is_zero());
}

// ── USD ─────────────────────────────────────────────────────────────

#[test]
fn test_usd_scales_by_decimals() {
    // 1 whole 18-dp token at $2,000
    let v = usd(1e18, 18, Some(2_000 * 10u128.pow(12)));
    assert!((v - 2_000.0).abs() < 1e-6);
    // Missing feed is never an error.
    assert_eq!(usd(1e18, 18, None), 0.0);
}

#[test]
fn test_price_tracks_tick() {
    let p0 = tick_to_price(0, 6, 6);
    let p1 = tick_to_price(6_932, 6, 6);
    // 1.0001^6932 ≈ 2.0
    assert!((p0 - 1.0).abs() < 1e-12);
    assert!((p1 - 2.0).abs() < 1e-3);
}

#[test]
fn test_exact_price_moves_split_within_range() {
    use liquidity_depth::math::{amounts_at, tick_to_sqrt_price};

    let at_tick = amounts(-600, 600, 0, 1_000_000);
    let above = amounts_at(-600, 600, 0, Some(tick_to_sqrt_price(300).unwrap()), 1_000_000);
    assert!(above.quote > at_tick.quote);
    assert!(above.base < at_tick.base);

    // Out-of-range prices are clamped to the range edge.
    let clamped = amounts_at(-600, 600, 0, Some(1e9), 1_000_000);
    assert_eq!(clamped.base, 0.0);
    assert_eq!(clamped, amounts(-600, 600, 600, 1_000_000));

    // Unusable prices fall back to the active tick.
    assert_eq!(amounts_at(-600, 600, 0, Some(f64::NAN), 1_000_000), at_tick);
}
