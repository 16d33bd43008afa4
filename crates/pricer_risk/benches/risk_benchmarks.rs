//! Criterion benchmarks for pricer_risk scenario runs.
//!
//! Compares sequential and rayon valuation across portfolio sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::market_data::{CurveInterpolation, DiscountCurve};
use pricer_core::types::KeyUnit;
use pricer_models::instruments::{Bond, Caplet, Instrument};
use pricer_risk::parallel::ParallelConfig;
use pricer_risk::portfolio::Portfolio;
use pricer_risk::scenarios::{PresetScenarioType, Scenario, ScenarioEngine};

fn market_curve() -> DiscountCurve<f64> {
    let times: Vec<f64> = (1..=60).map(|i| 0.5 * i as f64).collect();
    let rates: Vec<f64> = times.iter().map(|&t| 0.02 + 0.0008 * t).collect();
    DiscountCurve::from_zero_rates(&times, &rates, KeyUnit::Years, CurveInterpolation::LogLinear)
        .unwrap()
}

/// Alternating bonds and caplets with varied terms.
fn generate_portfolio(n: usize) -> Portfolio<f64> {
    let instruments: Vec<Instrument<f64>> = (0..n)
        .map(|i| {
            if i % 2 == 0 {
                Bond::new(0.02 + 0.0001 * (i % 50) as f64, (1 + i % 30) as f64, 2)
                    .unwrap()
                    .into()
            } else {
                Caplet::new((1 + i % 10) as f64, 0.035, 0.04, 0.25, 0.5)
                    .unwrap()
                    .into()
            }
        })
        .collect();
    Portfolio::from_instruments(instruments)
}

fn bench_scenario_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenario_run");
    let curve = market_curve();
    let scenario = Scenario::new("+25bp", 25.0);

    for size in [10, 100, 1000, 10000] {
        let portfolio = generate_portfolio(size);

        let sequential = ScenarioEngine::new(&curve, portfolio.clone())
            .with_parallel_config(ParallelConfig::sequential());
        group.bench_with_input(BenchmarkId::new("sequential", size), &sequential, |b, e| {
            b.iter(|| e.run(black_box(&scenario)))
        });

        let parallel = ScenarioEngine::new(&curve, portfolio)
            .with_parallel_config(ParallelConfig::new(64, 1));
        group.bench_with_input(BenchmarkId::new("parallel", size), &parallel, |b, e| {
            b.iter(|| e.run(black_box(&scenario)))
        });
    }

    group.finish();
}

fn bench_run_all_presets(c: &mut Criterion) {
    let curve = market_curve();
    let engine = ScenarioEngine::new(&curve, generate_portfolio(1000));
    let scenarios: Vec<Scenario<f64>> = PresetScenarioType::rate_scenarios()
        .iter()
        .map(|p| p.scenario())
        .collect();

    c.bench_function("run_all_presets/1000", |b| {
        b.iter(|| engine.run_all(black_box(&scenarios)))
    });
}

criterion_group!(benches, bench_scenario_run, bench_run_all_presets);
criterion_main!(benches);
