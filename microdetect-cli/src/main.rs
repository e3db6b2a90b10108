use clap::Parser;
use microdetect::io::load_sample;
use microdetect::{
    AnalyzerConfig, Catalog, DiagnosticAnalyzer, FibrilSpec, Pattern, Recognizer, Report, Sample,
    Study,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

const DEMO_STUDY_ID: &str = "demo";

#[derive(Parser, Debug)]
#[command(author, version, about = "MicroDetect CLI (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Analyze the built-in demonstration catalog instead of a config file.
    #[arg(long)]
    demo: bool,
    /// Run samples in parallel.
    #[arg(long)]
    parallel: bool,
    /// Enable tracing output.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
struct SampleConfig {
    id: String,
    #[serde(default)]
    rows: Option<Vec<String>>,
    #[serde(default)]
    image_path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PatternConfig {
    name: String,
    rows: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct FibrilConfig {
    name: String,
    min_length: usize,
    color_min: i32,
    color_max: i32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Config {
    study_id: String,
    parallel: bool,
    output_path: Option<String>,
    samples: Vec<SampleConfig>,
    patterns: Vec<PatternConfig>,
    fibrils: Vec<FibrilConfig>,
}

#[derive(Debug, Serialize)]
struct Output {
    study_id: String,
    samples: usize,
    report: BTreeMap<String, usize>,
}

impl Output {
    fn new(study: &Study, report: Report) -> Self {
        Self {
            study_id: study.id().to_owned(),
            samples: study.len(),
            report: report.into_iter().collect(),
        }
    }
}

fn load_config_sample(cfg: &SampleConfig) -> Result<Sample, Box<dyn std::error::Error>> {
    match (&cfg.rows, &cfg.image_path) {
        (Some(rows), None) => Ok(Sample::from_hex_rows(cfg.id.as_str(), rows)?),
        (None, Some(path)) => Ok(load_sample(path, cfg.id.as_str())?),
        _ => Err(format!(
            "sample {:?} must set exactly one of rows or image_path",
            cfg.id
        )
        .into()),
    }
}

fn build_from_config(
    config: &Config,
) -> Result<(Study, DiagnosticAnalyzer), Box<dyn std::error::Error>> {
    let mut study = Study::new(config.study_id.as_str())?;
    for sample_cfg in &config.samples {
        study.add_sample(load_config_sample(sample_cfg)?)?;
    }

    let mut analyzer = DiagnosticAnalyzer::new();
    for p in &config.patterns {
        let pattern = Pattern::from_hex_rows(p.name.as_str(), &p.rows)?;
        analyzer.add_recognizer(Arc::new(Recognizer::pattern(pattern)));
    }
    for f in &config.fibrils {
        let spec = FibrilSpec::new(f.name.as_str(), f.min_length, f.color_min, f.color_max)?;
        analyzer.add_recognizer(Arc::new(Recognizer::linear(spec)));
    }
    Ok((study, analyzer))
}

fn build_demo() -> Result<(Study, DiagnosticAnalyzer), Box<dyn std::error::Error>> {
    let catalog = Catalog::predefined()?;
    let study = catalog.study(DEMO_STUDY_ID)?;
    let mut analyzer = DiagnosticAnalyzer::new();
    for recognizer in catalog.recognizers() {
        analyzer.add_recognizer(recognizer);
    }
    Ok((study, analyzer))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive("microdetect=info".parse()?),
            )
            .with_target(false)
            .init();
    }

    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let (study, analyzer, parallel, output_path) = if cli.demo {
        let (study, analyzer) = build_demo()?;
        (study, analyzer, cli.parallel, None)
    } else {
        let config_text = fs::read_to_string(&cli.config)?;
        let config: Config = serde_json::from_str(&config_text)?;
        if config.study_id.is_empty() {
            return Err("study_id must be set in the config".into());
        }
        let (study, analyzer) = build_from_config(&config)?;
        (
            study,
            analyzer,
            cli.parallel || config.parallel,
            config.output_path,
        )
    };

    tracing::info!(
        study = study.id(),
        samples = study.len(),
        recognizers = analyzer.len(),
        "starting analysis"
    );
    let analyzer = analyzer.with_config(AnalyzerConfig { parallel });
    let report = analyzer.analyze(&study)?;
    let json = serde_json::to_string_pretty(&Output::new(&study, report))?;

    match output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
