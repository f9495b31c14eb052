// File: crates/demo/src/main.rs
// Summary: Demo loads an oscillator snapshot (JSON array or CSV) and renders the ranked scatter to PNG.
// Usage: waves-demo [snapshot.json|snapshot.csv] [interval] [max_rank] [theme] [out.png]

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use waves_core::{theme, ChartConfig, ChartSession, RawRecord, RenderOptions};
use waves_render_skia::SkiaProvider;

const CANVAS_ID: &str = "waves";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let mut args = std::env::args().skip(1);
    let input = args.next();
    let interval = args.next().unwrap_or_default();
    let max_rank = args
        .next()
        .map(|s| s.parse::<f64>().with_context(|| format!("invalid max rank '{s}'")))
        .transpose()?
        .unwrap_or(0.0);
    let theme_name = args.next().unwrap_or_else(|| "dark".to_string());
    let out = args.next().map(PathBuf::from);

    let (records, out) = match input {
        Some(raw) => {
            let path = PathBuf::from(&raw);
            let records = load_snapshot(&path)
                .with_context(|| format!("failed to load snapshot '{}'", path.display()))?;
            let out = out.unwrap_or_else(|| out_name_for(&path));
            (records, out)
        }
        None => {
            tracing::info!("no snapshot given; rendering built-in sample");
            (sample_snapshot(), out.unwrap_or_else(|| PathBuf::from("target/out/waves_sample.png")))
        }
    };
    tracing::info!(records = records.len(), "snapshot loaded");

    let mut provider = SkiaProvider::new();
    provider.register_canvas(CANVAS_ID, RenderOptions::default());

    let template = ChartConfig { theme: theme::find(&theme_name), ..ChartConfig::default() };
    let mut session = ChartSession::with_config(provider, template);
    if !session.init(CANVAS_ID, &interval) {
        anyhow::bail!("could not create chart surface '{CANVAS_ID}'");
    }

    let captured_at = chrono::Local::now().format("%Y-%m-%d %H:%M").to_string();
    session.update(&records, max_rank, &captured_at);

    let surface = session.surface_mut().context("chart surface missing after init")?;
    surface.save_png(&out).with_context(|| format!("writing {}", out.display()))?;
    tracing::info!(path = %out.display(), "wrote chart");

    session.destroy();
    Ok(())
}

/// Load a snapshot: `.csv` via headers, anything else as a JSON array of records.
fn load_snapshot(path: &Path) -> Result<Vec<Value>> {
    let is_csv = path
        .extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    if is_csv {
        return load_csv(path);
    }
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let value: Value = serde_json::from_reader(std::io::BufReader::new(file))?;
    match value {
        Value::Array(items) => Ok(items),
        // tolerate `{ "items": [...] }` envelopes
        Value::Object(mut map) => match map.remove("items") {
            Some(Value::Array(items)) => Ok(items),
            _ => anyhow::bail!("expected a JSON array or an object with an `items` array"),
        },
        _ => anyhow::bail!("expected a JSON array of records"),
    }
}

/// CSV rows become records keyed by header; empty cells are treated as absent.
fn load_csv(path: &Path) -> Result<Vec<Value>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let headers = rdr.headers()?.clone();
    tracing::debug!(?headers, "csv headers");

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let pairs = headers
            .iter()
            .zip(rec.iter())
            .filter(|(_, v)| !v.is_empty());
        let record = RawRecord::from_pairs(pairs);
        out.push(serde_json::to_value(record)?);
    }
    Ok(out)
}

/// Output file name like target/out/waves_<stem>.png
fn out_name_for(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("snapshot");
    PathBuf::from("target/out").join(format!("waves_{stem}.png"))
}

fn sample_snapshot() -> Vec<Value> {
    let symbols = [
        ("BTC", "Bitcoin"), ("ETH", "Ethereum"), ("SOL", "Solana"), ("XRP", ""), ("ADA", "Cardano"),
        ("DOGE", ""), ("AVAX", "Avalanche"), ("DOT", "Polkadot"), ("LINK", "Chainlink"), ("LTC", ""),
    ];
    symbols
        .iter()
        .enumerate()
        .map(|(i, (symbol, name))| {
            let rsi = 18.0 + i as f64 * 8.7;
            let zone = if rsi >= 70.0 { "overbought" } else if rsi <= 30.0 { "oversold" } else { "neutral" };
            json!({
                "rank": i + 1,
                "rsi": rsi,
                "zone": zone,
                "symbol": symbol,
                "name": name,
                "price": 100.0 / (i as f64 + 1.0),
                "priceChangePct": (i as f64 - 4.5) * 0.8,
            })
        })
        .collect()
}
