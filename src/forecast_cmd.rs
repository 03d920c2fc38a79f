//! Forecast command: fit on observed CSV data and forecast ahead.

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use loadcast_arimax::{Forecaster, ModelOrder};
use loadcast_io::{read_observations_csv, to_series, write_forecasts, write_forecasts_json};

use crate::cli::ForecastArgs;
use crate::config::LoadcastConfig;
use crate::convert;

/// Run the fit-and-forecast pipeline.
pub fn run(args: ForecastArgs) -> Result<()> {
    let _cmd = info_span!("forecast").entered();

    // 1. Resolve settings: CLI flags override the config file
    let config = LoadcastConfig::load(args.config.as_deref())?;
    let order: ModelOrder = match args.order.as_deref() {
        Some(s) => convert::parse_order(s)?,
        None => convert::build_order(&config.model),
    };
    let confidence_level = args.confidence.unwrap_or(config.model.confidence_level);
    let frequency = convert::build_frequency(&config.model)?;
    let fit_cfg = convert::build_fit_config(&config.fit)?;
    let (next_exog, horizon) = convert::expand_occupancy(&args.occupancy, args.horizon);

    // 2. Read observations and align
    let observations = read_observations_csv(&args.input)
        .with_context(|| format!("failed to read observations: {}", args.input.display()))?;
    let series = to_series(&observations, frequency).context("observations are not a valid series")?;
    let view = match args.window {
        Some(0) => bail!("--window must be at least 1"),
        Some(n) => series
            .tail(n)
            .with_context(|| format!("window of {n} exceeds available history"))?,
        None => series.view(),
    };
    info!(
        rows = view.len(),
        first = ?view.points().first().map(|p| p.timestamp),
        last = %series.last().timestamp,
        "series ready"
    );

    let (min_occ, max_occ) = view
        .exogs()
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| (lo.min(x), hi.max(x)));
    if next_exog.iter().any(|&x| x < min_occ || x > max_occ) {
        warn!(
            min_occ,
            max_occ, "future occupancy outside the observed range; forecast extrapolates"
        );
    }

    // 3. Fit
    let model = Forecaster::new(order)
        .with_config(fit_cfg)
        .fit_view(view)
        .with_context(|| format!("failed to fit ARIMA{order} with occupancy"))?;
    info!(
        exog_coef = model.exog_coefficient(),
        intercept = ?model.intercept(),
        sigma2 = model.sigma2(),
        aic = model.aic(),
        bic = model.bic(),
        "model fitted"
    );

    // 4. Forecast
    let forecasts = model
        .forecast_horizon(&next_exog, horizon, confidence_level)
        .context("forecast failed")?;
    let records = convert::forecast_records(&series.next_timestamps(horizon), &forecasts);
    for r in &records {
        info!(
            step = r.step,
            timestamp = %r.timestamp,
            mean = r.mean,
            lower = r.lower,
            upper = r.upper,
            "forecast"
        );
    }

    // 5. Write
    match &args.output {
        Some(path) => write_forecasts_json(path, &records)
            .with_context(|| format!("failed to write forecasts: {}", path.display()))?,
        None => write_forecasts(std::io::stdout().lock(), &records)
            .context("failed to write forecasts to stdout")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::GenerateArgs;
    use crate::generate_cmd;
    use loadcast_io::ForecastRecord;

    fn generate_week(dir: &std::path::Path) -> std::path::PathBuf {
        let input = dir.join("observations.csv");
        generate_cmd::run(GenerateArgs {
            config: None,
            output: input.clone(),
            days: Some(7),
            seed: Some(42),
            start: Some("2024-01-01 00:00:00".to_string()),
        })
        .unwrap();
        input
    }

    fn args(input: std::path::PathBuf, output: std::path::PathBuf) -> ForecastArgs {
        ForecastArgs {
            config: None,
            input,
            occupancy: vec![25.0],
            horizon: Some(3),
            confidence: Some(0.9),
            order: Some("2,1,2".to_string()),
            window: None,
            output: Some(output),
        }
    }

    #[test]
    fn generate_then_forecast_writes_json() {
        let dir = tempfile::tempdir().unwrap();
        let input = generate_week(dir.path());
        let output = dir.path().join("forecast.json");

        run(args(input, output.clone())).unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        let records: Vec<ForecastRecord> = serde_json::from_str(&text).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].step, 1);
        assert_eq!(records[0].timestamp.to_rfc3339(), "2024-01-08T00:00:00+00:00");
        for r in &records {
            assert!(r.lower < r.mean && r.mean < r.upper);
            assert_eq!(r.confidence_level, 0.9);
        }
    }

    #[test]
    fn occupancy_count_must_match_horizon() {
        let dir = tempfile::tempdir().unwrap();
        let input = generate_week(dir.path());
        let mut a = args(input, dir.path().join("out.json"));
        a.occupancy = vec![10.0, 20.0];
        let err = run(a).unwrap_err();
        assert!(format!("{err:#}").contains("shape mismatch"));
    }

    #[test]
    fn window_longer_than_history_fails() {
        let dir = tempfile::tempdir().unwrap();
        let input = generate_week(dir.path());
        let mut a = args(input, dir.path().join("out.json"));
        a.window = Some(500);
        assert!(run(a).is_err());
    }

    #[test]
    fn missing_input_names_file() {
        let dir = tempfile::tempdir().unwrap();
        let a = args(dir.path().join("absent.csv"), dir.path().join("out.json"));
        let err = run(a).unwrap_err();
        assert!(format!("{err:#}").contains("file not found"));
    }
}
