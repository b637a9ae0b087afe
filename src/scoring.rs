use crate::types::Recommendation;

/// Position-specific reference values used to normalize scores across roles.
/// Static positive constants, so the divisions in [`score`] can never hit a
/// zero denominator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Benchmark {
    pub euro_per_point: f64,
    pub points_per_match: f64,
}

const BENCHMARK_ST: Benchmark = Benchmark {
    euro_per_point: 12000.0,
    points_per_match: 150.0,
};
const BENCHMARK_MF: Benchmark = Benchmark {
    euro_per_point: 8000.0,
    points_per_match: 120.0,
};
const BENCHMARK_ABW: Benchmark = Benchmark {
    euro_per_point: 5000.0,
    points_per_match: 95.0,
};
const BENCHMARK_TW: Benchmark = Benchmark {
    euro_per_point: 6000.0,
    points_per_match: 100.0,
};

/// Resolves the benchmark for a scraped position code. Every code outside
/// the four known ones, including the empty string, falls back to the
/// midfield benchmark.
pub fn benchmark_for(position: &str) -> &'static Benchmark {
    match position {
        "ST" => &BENCHMARK_ST,
        "MF" => &BENCHMARK_MF,
        "ABW" => &BENCHMARK_ABW,
        "TW" => &BENCHMARK_TW,
        _ => &BENCHMARK_MF,
    }
}

/// Computes the Kickbase Efficiency Score from the derived per-player
/// ratios. Pure and deterministic: identical inputs always produce the
/// identical rounded result.
///
/// Four clamped components:
/// - value score, 0..=40, rewards low cost per point relative to benchmark
/// - performance score, 0..=30, rewards high average output
/// - efficiency score, 0..=20, saturates at a value efficiency of 300
/// - trend bonus, -5..=10, signed market-momentum adjustment
///
/// The sum is rounded to one decimal place with `f64::round`, which rounds
/// half away from zero.
pub fn score(
    euro_per_point: f64,
    avg_points: f64,
    value_efficiency: f64,
    trend_ratio: f64,
    position: &str,
) -> f64 {
    let b = benchmark_for(position);

    let value_score = (40.0
        * (1.0 - (euro_per_point - b.euro_per_point * 0.3) / (b.euro_per_point * 1.5)))
        .clamp(0.0, 40.0);
    let performance_score = (30.0 * (avg_points / (b.points_per_match * 1.2))).clamp(0.0, 30.0);
    let efficiency_score = (20.0 * (value_efficiency / 300.0).min(1.0)).clamp(0.0, 20.0);
    let trend_bonus = (trend_ratio * 1000.0).clamp(-5.0, 10.0);

    ((value_score + performance_score + efficiency_score + trend_bonus) * 10.0).round() / 10.0
}

/// Maps a KES value onto one of four contiguous recommendation bands.
/// Boundary values (exactly 70, 50, 30) resolve to the higher band.
pub fn recommend(kes: f64) -> Recommendation {
    if kes >= 70.0 {
        Recommendation::Buy
    } else if kes >= 50.0 {
        Recommendation::Hold
    } else if kes >= 30.0 {
        Recommendation::Watch
    } else {
        Recommendation::Sell
    }
}
