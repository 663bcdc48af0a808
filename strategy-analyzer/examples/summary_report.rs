use chrono::{DateTime, Datelike, Days, Utc, Weekday};
use strategy_analyzer::{
    analyzer::StrategyAnalyzer,
    config::AnalyzerConfig,
    logging::init_logging,
    series::SeriesTable,
    statistic::metric::drawdown::max::max_drawdown_detail,
};

const CONFIG: &str = r#"{
    "strategy_name": "Momentum",
    "calendar_convention": "trading_days",
    "sharpe_frequency": "week"
}"#;

fn main() {
    // Initialise Tracing
    init_logging();

    // Load AnalyzerConfig
    let config = AnalyzerConfig::from_json(CONFIG).unwrap();

    // Generate one year of weekday timestamps, with gaps for weekends
    let start = DateTime::<Utc>::from_timestamp(1_704_067_200, 0).unwrap();
    let index = (0..365)
        .filter_map(|day| start.checked_add_days(Days::new(day)))
        .filter(|time| !matches!(time.weekday(), Weekday::Sat | Weekday::Sun))
        .collect::<Vec<_>>();

    // Generate deterministic strategy & benchmark returns
    let strategy = index
        .iter()
        .enumerate()
        .map(|(row, _)| 0.0006 + 0.012 * ((row as f64) * 0.7).sin())
        .collect::<Vec<_>>();
    let benchmark = index
        .iter()
        .enumerate()
        .map(|(row, _)| 0.0003 + 0.008 * ((row as f64) * 1.3).cos())
        .collect::<Vec<_>>();

    let returns = SeriesTable::new(
        index,
        [
            (config.strategy_name.clone(), strategy),
            ("Benchmark".into(), benchmark),
        ],
    )
    .unwrap();

    // Weekday series are inferred as daily despite the weekend gaps
    let analyzer = StrategyAnalyzer::new(config, returns).unwrap();

    let summary = analyzer.summary().unwrap();
    summary.print_summary();

    for (column, drawdown) in max_drawdown_detail(analyzer.returns()) {
        println!(
            "{column}: max drawdown {:.2}% from {} to {} ({} days)",
            drawdown.value * 100.0,
            drawdown.time_peak.date_naive(),
            drawdown.time_trough.date_naive(),
            drawdown.duration().num_days()
        );
    }
}
