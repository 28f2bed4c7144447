use liquidity_depth::depth::{
    aggregate, bucket_count, build_profile, AggregationConfig, DepthConfig,
};
use liquidity_depth::math::{amounts, tick_to_sqrt_price, usd};
use liquidity_depth::render::current_tick_progress;
use liquidity_depth::model::{DepthSnapshot, LiquidityBucket, PoolDepthRow, TickRange, TokenMeta};

// ── Helpers ─────────────────────────────────────────────────────────

fn scenario_pool() -> PoolDepthRow {
    PoolDepthRow::new(0, 1_000_000, 3_000, 60)
        .with_tick(-600, 500_000)
        .with_tick(600, -500_000)
}

fn base() -> TokenMeta {
    TokenMeta::new("BASE", 8).with_price_e12(5_000_000_000_000)
}

fn quote() -> TokenMeta {
    TokenMeta::new("USDC", 6).with_price_e12(1_000_000_000_000)
}

fn config_for(pools: &[PoolDepthRow], base: &TokenMeta, quote: &TokenMeta) -> AggregationConfig {
    AggregationConfig::for_pools(pools, &DepthConfig::default(), base, quote)
}

fn overlaps(b: &LiquidityBucket, lo: i32, hi: i32) -> bool {
    b.tick_lower < hi && b.tick_upper > lo
}

// ── Window and completeness ─────────────────────────────────────────

#[test]
fn test_default_window_layout() {
    let pools = vec![scenario_pool()];
    let config = config_for(&pools, &base(), &quote());
    // 4000 ticks / 40 = 100 → rounded up to a multiple of 60.
    assert_eq!(config.bucket_size, 120);
    assert_eq!(config.tick_range, TickRange { min: -2040, max: 2040 });

    let buckets = aggregate(&pools, &config);
    assert_eq!(buckets.len(), 35);
}

#[test]
fn test_bucket_completeness_regardless_of_liquidity() {
    let empty_pool = PoolDepthRow::new(0, 0, 500, 10);
    for (range, size) in [
        (TickRange { min: -2040, max: 2040 }, 120),
        (TickRange { min: -1000, max: 1000 }, 30),
        (TickRange { min: 100, max: 101 }, 1),
        (TickRange { min: -60, max: -60 }, 60),
    ] {
        let config = AggregationConfig {
            tick_range: range,
            bucket_size: size,
            current_tick: 0,
            sqrt_price_x96: None,
            base_decimals: 8,
            quote_decimals: 6,
            base_price_usd_e12: None,
            quote_price_usd_e12: None,
        };
        let expected = ((range.max - range.min + size - 1) / size + 1) as usize;
        assert_eq!(bucket_count(range, size), expected);

        for pools in [vec![], vec![empty_pool.clone()], vec![scenario_pool()]] {
            let buckets = aggregate(&pools, &config);
            assert_eq!(buckets.len(), expected, "range {range:?} size {size}");
        }
    }
}

#[test]
fn test_buckets_descend_without_gaps() {
    let pools = vec![scenario_pool()];
    let buckets = aggregate(&pools, &config_for(&pools, &base(), &quote()));
    for w in buckets.windows(2) {
        assert!(w[0].tick > w[1].tick);
        assert_eq!(w[0].tick_lower, w[1].tick_upper);
    }
    assert!(buckets.iter().all(|b| b.tick_upper - b.tick_lower == 120));
}

#[test]
fn test_exactly_one_current_bucket() {
    let mut pool = scenario_pool();
    pool.current_tick = 130;
    let pools = vec![pool];
    let buckets = aggregate(&pools, &config_for(&pools, &base(), &quote()));
    let current: Vec<&LiquidityBucket> = buckets.iter().filter(|b| b.is_current_tick).collect();
    assert_eq!(current.len(), 1);
    assert!(current[0].contains_tick(130));
}

// ── Distribution ────────────────────────────────────────────────────

#[test]
fn test_zero_liquidity_outside_positions() {
    let pools = vec![scenario_pool()];
    let buckets = aggregate(&pools, &config_for(&pools, &base(), &quote()));

    for b in &buckets {
        if overlaps(b, -600, 600) {
            assert_eq!(b.total_liquidity, 1_000_000, "bucket {}", b.tick);
            assert_eq!(b.pool_contributions.len(), 1);
        } else {
            assert_eq!(b.total_liquidity, 0, "bucket {}", b.tick);
            assert_eq!(b.amount_base_locked, 0.0);
            assert_eq!(b.amount_quote_locked, 0.0);
            assert!(b.pool_contributions.is_empty());
        }
    }
}

#[test]
fn test_token_split_follows_current_tick() {
    let mut pool = scenario_pool();
    pool.current_tick = 30;
    let pools = vec![pool];
    let buckets = aggregate(&pools, &config_for(&pools, &base(), &quote()));

    for b in buckets.iter().filter(|b| !b.is_empty()) {
        if b.tick_lower > 30 {
            assert!(b.amount_base_locked > 0.0 && b.amount_quote_locked == 0.0);
        } else if b.tick_upper <= 30 {
            assert!(b.amount_quote_locked > 0.0 && b.amount_base_locked == 0.0);
        } else {
            assert!(b.amount_base_locked > 0.0 && b.amount_quote_locked > 0.0);
        }
    }
}

#[test]
fn test_amounts_computed_per_sub_range() {
    let pools = vec![scenario_pool()];
    let buckets = aggregate(&pools, &config_for(&pools, &base(), &quote()));

    let whole = amounts(-600, 600, 0, 1_000_000);
    let base_sum: f64 = buckets.iter().map(|b| b.amount_base_locked).sum();
    let quote_sum: f64 = buckets.iter().map(|b| b.amount_quote_locked).sum();
    assert!((base_sum - whole.base).abs() / whole.base < 1e-9);
    assert!((quote_sum - whole.quote).abs() / whole.quote < 1e-9);

    // A single bucket holds the amounts of its own slice, not the whole segment.
    let slice = buckets.iter().find(|b| b.tick_lower == 240).unwrap();
    let expected = amounts(240, 360, 0, 1_000_000);
    assert_eq!(slice.amount_base_locked, expected.base);
}

#[test]
fn test_segments_clipped_to_window() {
    // One wide position far beyond the ±2000 window.
    let pool = PoolDepthRow::new(0, 7_000, 10_000, 200)
        .with_tick(-40_000, 7_000)
        .with_tick(40_000, -7_000);
    let pools = vec![pool];
    let config = config_for(&pools, &base(), &quote());
    assert_eq!(config.bucket_size % 200, 0);

    let buckets = aggregate(&pools, &config);
    assert!(buckets.iter().all(|b| b.total_liquidity == 7_000));

    let top = &buckets[0];
    let expected = amounts(top.tick_lower, top.tick_upper, 0, 7_000);
    assert_eq!(top.amount_base_locked, expected.base);
}

#[test]
fn test_coarsest_spacing_sets_bucket_width() {
    let pools = vec![
        PoolDepthRow::new(0, 0, 500, 10),
        PoolDepthRow::new(0, 0, 10_000, 200),
        PoolDepthRow::new(0, 0, 3_000, 60),
    ];
    let config = config_for(&pools, &base(), &quote());
    assert_eq!(config.bucket_size, 200);
    assert_eq!(config.tick_range.min % 200, 0);
    assert_eq!(config.tick_range.max % 200, 0);
}

// ── Multi-pool ──────────────────────────────────────────────────────

#[test]
fn test_pool_contributions_per_fee_tier() {
    let narrow = PoolDepthRow::new(0, 3_000, 500, 10)
        .with_tick(-120, 3_000)
        .with_tick(120, -3_000);
    let pools = vec![scenario_pool(), narrow];
    let buckets = aggregate(&pools, &config_for(&pools, &base(), &quote()));

    let current = buckets.iter().find(|b| b.is_current_tick).unwrap();
    assert_eq!(current.pool_contributions.len(), 2);
    assert_eq!(current.pool_contributions[0].fee_pips, 3_000);
    assert_eq!(current.pool_contributions[1].fee_pips, 500);
    assert_eq!(current.total_liquidity, 1_003_000);

    for b in &buckets {
        let sum: u128 = b.pool_contributions.iter().map(|c| c.liquidity).sum();
        assert_eq!(sum, b.total_liquidity);
        let usd_sum: f64 = b.pool_contributions.iter().map(|c| c.usd_value).sum();
        assert!((usd_sum - b.usd_value_locked).abs() <= 1e-9 * b.usd_value_locked.max(1.0));
    }
}

// ── USD ─────────────────────────────────────────────────────────────

#[test]
fn test_missing_price_zeroes_usd_only() {
    let pools = vec![scenario_pool()];
    let base = TokenMeta::new("BASE", 8);
    let buckets = aggregate(&pools, &config_for(&pools, &base, &quote()));

    assert!(buckets.iter().all(|b| b.usd_value_locked == 0.0));
    let base_total: f64 = buckets.iter().map(|b| b.amount_base_locked).sum();
    let quote_total: f64 = buckets.iter().map(|b| b.amount_quote_locked).sum();
    assert!(base_total > 0.0);
    assert!(quote_total > 0.0);
}

#[test]
fn test_usd_values_with_both_prices() {
    let pools = vec![scenario_pool()];
    let (b, q) = (base(), quote());
    let buckets = aggregate(&pools, &config_for(&pools, &b, &q));

    for bucket in &buckets {
        let expected = usd(bucket.amount_base_locked, 8, b.price_usd_e12)
            + usd(bucket.amount_quote_locked, 6, q.price_usd_e12);
        assert!((bucket.usd_value_locked - expected).abs() <= 1e-9 * expected.max(1.0));
    }
    assert!(buckets.iter().any(|b| b.usd_value_locked > 0.0));
}

// ── Determinism ─────────────────────────────────────────────────────

#[test]
fn test_aggregation_is_deterministic() {
    let mut shuffled = scenario_pool();
    shuffled.initialized_ticks.reverse();
    let pools = vec![scenario_pool(), shuffled];
    let config = config_for(&pools, &base(), &quote());

    let first = serde_json::to_string(&aggregate(&pools, &config)).unwrap();
    let second = serde_json::to_string(&aggregate(&pools, &config)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_empty_snapshot_still_renders_grid() {
    let snapshot = DepthSnapshot {
        base: base(),
        quote: quote(),
        pools: vec![PoolDepthRow::new(500, 0, 3_000, 60)],
    };
    let profile = build_profile(&snapshot, &DepthConfig::default());
    assert_eq!(profile.buckets.len(), bucket_count(profile.range, profile.bucket_size));
    assert!(profile.buckets.iter().all(|b| b.is_empty()));
    assert_eq!(profile.buckets.iter().filter(|b| b.is_current_tick).count(), 1);
}

#[test]
fn test_oversized_tick_spacing_still_yields_complete_grid() {
    let snapshot = DepthSnapshot {
        base: base(),
        quote: quote(),
        pools: vec![PoolDepthRow::new(0, 1_000, 3_000, 1_200_000_000)
            .with_tick(-600, 1_000)
            .with_tick(600, -1_000)],
    };
    let profile = build_profile(&snapshot, &DepthConfig::default());

    // Spacing is capped at the ±2000 window span.
    assert_eq!(profile.bucket_size, 4_000);
    assert_eq!(profile.range, TickRange { min: -4_000, max: 4_000 });
    assert_eq!(profile.buckets.len(), bucket_count(profile.range, profile.bucket_size));
    assert_eq!(profile.buckets.iter().filter(|b| b.is_current_tick).count(), 1);
    assert!(profile.buckets.iter().all(|b| b.total_liquidity <= 1_000));
    assert_eq!(profile.buckets.iter().filter(|b| b.total_liquidity == 1_000).count(), 2);

    let spacing_max = PoolDepthRow::new(0, 0, 500, u32::MAX);
    let config = config_for(&[spacing_max.clone()], &base(), &quote());
    assert_eq!(aggregate(&[spacing_max], &config).len(), bucket_count(config.tick_range, config.bucket_size));
}

#[test]
fn test_current_bucket_split_uses_exact_price() {
    // Live price sits half a tick above tick 60.
    let exact_sqrt = 1.0001f64.powf(60.5 / 2.0);
    let mut pool = scenario_pool();
    pool.current_tick = 60;
    pool.sqrt_price_x96 = Some((exact_sqrt * 2f64.powi(96)) as u128);
    let pools = vec![pool.clone()];
    let config = config_for(&pools, &base(), &quote());
    assert_eq!(config.sqrt_price_x96, pool.sqrt_price_x96);

    let buckets = aggregate(&pools, &config);
    let current = buckets.iter().find(|b| b.is_current_tick).unwrap();
    assert_eq!((current.tick_lower, current.tick_upper), (0, 120));

    let l = 1_000_000.0;
    let sp0 = tick_to_sqrt_price(0).unwrap();
    let sp120 = tick_to_sqrt_price(120).unwrap();
    let base_expected = l * (1.0 / exact_sqrt - 1.0 / sp120);
    let quote_expected = l * (exact_sqrt - sp0);
    assert!((current.amount_base_locked - base_expected).abs() / base_expected < 1e-9);
    assert!((current.amount_quote_locked - quote_expected).abs() / quote_expected < 1e-9);

    // Without the exact price the split falls on tick 60 itself.
    let mut tick_only = pool;
    tick_only.sqrt_price_x96 = None;
    let coarse_pools = vec![tick_only];
    let coarse = aggregate(&coarse_pools, &config_for(&coarse_pools, &base(), &quote()));
    let coarse_current = coarse.iter().find(|b| b.is_current_tick).unwrap();
    assert!(coarse_current.amount_quote_locked < current.amount_quote_locked);
    assert!(coarse_current.amount_base_locked > current.amount_base_locked);

    // The drawn progress agrees with the split.
    let progress = current_tick_progress(&pools[0], &buckets).unwrap();
    assert!((progress - 60.5 / 120.0).abs() < 1e-6);
}
