// Cross-checks the crossover scanner against straightforward day-indexed arithmetic
// for many window pairs.

use analytics::moving_average;
use strategies::{MACrossover, buy_sell};

/// Deterministic oscillating prices with a little pseudo-random noise.
fn synthetic_prices(len: usize, seed: u64) -> Vec<f64> {
    let mut state = seed;
    (0..len)
        .map(|day| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let noise = ((state >> 33) % 1000) as f64 / 250.0 - 2.0;
            100.0 + 8.0 * (day as f64 * 0.35).sin() + noise
        })
        .collect()
}

/// Walks calendar days directly: the short value for day `d` lives at
/// `d - (short - 1)` and the long value at `d - (long - 1)`.
fn reference_scan(
    short_ma: &[f64],
    long_ma: &[f64],
    short: usize,
    long: usize,
) -> (Vec<usize>, Vec<usize>) {
    let mut buys = Vec::new();
    let mut sells = Vec::new();

    for i in (long - 1)..short_ma.len() {
        let day = i + short - 1;
        if day < long {
            // No long value for the previous day.
            continue;
        }
        let prev_short = short_ma[day - 1 - (short - 1)];
        let curr_short = short_ma[day - (short - 1)];
        let prev_long = long_ma[day - 1 - (long - 1)];
        let curr_long = long_ma[day - (long - 1)];

        if prev_short <= prev_long && curr_short > curr_long {
            buys.push(i);
        } else if prev_short >= prev_long && curr_short < curr_long {
            sells.push(i);
        }
    }
    (buys, sells)
}

#[test]
fn scanner_matches_day_indexed_reference() {
    let mut pairs_with_events = 0;

    for seed in 1..6u64 {
        let prices = synthetic_prices(120, seed);
        for short in 1..12 {
            for long in (short + 1)..25 {
                let short_ma = moving_average(&prices, short).unwrap();
                let long_ma = moving_average(&prices, long).unwrap();

                let crossovers =
                    buy_sell(short_ma.values(), long_ma.values(), short, long).unwrap();
                let (buys, sells) =
                    reference_scan(short_ma.values(), long_ma.values(), short, long);

                assert_eq!(crossovers.buys, buys, "buys for windows {short}/{long}, seed {seed}");
                assert_eq!(crossovers.sells, sells, "sells for windows {short}/{long}, seed {seed}");
                if !crossovers.is_empty() {
                    pairs_with_events += 1;
                }
            }
        }
    }

    assert!(pairs_with_events > 0, "synthetic prices never crossed");
}

#[test]
fn reported_days_sit_on_the_correct_side() {
    let prices = synthetic_prices(200, 42);
    for (short, long) in [(2, 5), (3, 8), (5, 10), (7, 21)] {
        let short_ma = moving_average(&prices, short).unwrap();
        let long_ma = moving_average(&prices, long).unwrap();
        let scanner = MACrossover::new(short, long).unwrap();
        let crossovers = scanner.scan(short_ma.values(), long_ma.values());

        for day in crossovers.buy_days() {
            let (Some(s), Some(l)) = (short_ma.value_on(day), long_ma.value_on(day)) else {
                panic!("buy day {day} outside both series");
            };
            assert!(s > l, "short not above long on buy day {day}");
            assert!(short_ma.value_on(day - 1).unwrap() <= long_ma.value_on(day - 1).unwrap());
        }
        for day in crossovers.sell_days() {
            let (Some(s), Some(l)) = (short_ma.value_on(day), long_ma.value_on(day)) else {
                panic!("sell day {day} outside both series");
            };
            assert!(s < l, "short not below long on sell day {day}");
            assert!(short_ma.value_on(day - 1).unwrap() >= long_ma.value_on(day - 1).unwrap());
        }

        // Every reported day is on or after the first day the scan examines.
        let first_day = short_ma.alignment().day(scanner.scan_start());
        assert!(crossovers.events().iter().all(|event| event.day >= first_day));
    }
}

#[test]
fn buy_and_sell_alternate() {
    let prices = synthetic_prices(300, 7);
    let short_ma = moving_average(&prices, 5).unwrap();
    let long_ma = moving_average(&prices, 10).unwrap();
    let crossovers = buy_sell(short_ma.values(), long_ma.values(), 5, 10).unwrap();

    let kinds: Vec<_> = crossovers.events().into_iter().map(|event| event.kind).collect();
    assert!(kinds.len() >= 2);
    assert!(kinds.windows(2).all(|pair| pair[0] != pair[1]));
}
