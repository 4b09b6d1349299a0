//! Offline replay driver for the facial emotion recognition pipeline.
//!
//! Stands in for the capture/detector and persistence collaborators: reads
//! landmark frames from a JSON-lines file (one array of `[x, y]` points per
//! line, `null` for frames where no face was detected) and writes the
//! emitted per-frame records as CSV or as a JSON session document.

use anyhow::{Context, Result};
use clap::Parser;
use emotion_recognition::config::Config;
use emotion_recognition::landmarks::{FaceLandmarks, Point2};
use emotion_recognition::session::{ClassifierMode, EmotionSession, FrameRecord, SessionPhase};
use emotion_recognition::signals::{ScalarKey, Signals};
use log::{info, warn};
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON-lines landmark file: one array of [x, y] points per line,
    /// null for frames with no detected face
    #[arg(short, long)]
    input: PathBuf,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<PathBuf>,

    /// Output format (csv, json)
    #[arg(short, long, default_value = "csv")]
    format: String,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Treat landmark coordinates as detector-normalized [0, 1] values
    #[arg(long)]
    normalized: bool,

    /// Frame width used to scale normalized coordinates
    #[arg(long, default_value = "640")]
    width: f64,

    /// Frame height used to scale normalized coordinates
    #[arg(long, default_value = "480")]
    height: f64,

    /// Skip the calibration phase and classify with absolute thresholds
    #[arg(long)]
    no_calibration: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

/// JSON session document consumed by downstream tooling
#[derive(Serialize)]
struct SessionDocument<'a> {
    calibration: CalibrationSummary<'a>,
    smoothing: SmoothingSummary,
    frames: &'a [FrameRecord],
}

#[derive(Serialize)]
struct CalibrationSummary<'a> {
    enabled: bool,
    baseline: Option<&'a Signals>,
}

#[derive(Serialize)]
struct SmoothingSummary {
    enabled: bool,
    alpha: f64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logger
    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Facial Emotion Recognition - replay driver");

    // Load configuration if provided
    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path.display());
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Failed to load config file: {}. Using defaults.", e);
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    if args.no_calibration {
        config.calibration.enabled = false;
    }

    let mut session = EmotionSession::new(&config)?;

    let input = File::open(&args.input)
        .with_context(|| format!("cannot open landmark file {}", args.input.display()))?;
    let reader = BufReader::new(input);

    let mut records = Vec::new();
    for (line_number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let frame: Option<Vec<[f64; 2]>> = serde_json::from_str(&line)
            .with_context(|| format!("malformed landmark frame on line {}", line_number + 1))?;

        let landmarks = frame.map(|points| {
            if args.normalized {
                FaceLandmarks::from_normalized(
                    points.iter().map(|p| (p[0], p[1])),
                    args.width,
                    args.height,
                )
            } else {
                FaceLandmarks::new(points.iter().map(|p| Point2::new(p[0], p[1])).collect())
            }
        });

        if let Some(set) = &landmarks {
            if !set.has_required_landmarks() {
                warn!(
                    "line {}: landmark set has only {} points, skipping frame",
                    line_number + 1,
                    set.len()
                );
                continue;
            }
        }

        if let Some(record) = session.process_frame(landmarks.as_ref())? {
            records.push(record);
        }
    }

    // Stream ended mid-calibration: fall back rather than abort
    if session.phase() == SessionPhase::Calibrating {
        session.finish_calibration();
    }

    match session.mode() {
        ClassifierMode::Calibrated => info!("session ran in CALIBRATED mode"),
        ClassifierMode::Absolute => info!("session ran in ABSOLUTE mode"),
    }
    info!("{} frame records emitted", records.len());

    let mut writer: BufWriter<Box<dyn Write>> = match &args.output {
        Some(path) => BufWriter::new(Box::new(
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
        )),
        None => BufWriter::new(Box::new(std::io::stdout())),
    };

    match args.format.as_str() {
        "csv" => write_csv(&mut writer, &records)?,
        "json" => {
            let document = SessionDocument {
                calibration: CalibrationSummary {
                    enabled: config.calibration.enabled,
                    baseline: session.baseline(),
                },
                smoothing: SmoothingSummary {
                    enabled: true,
                    alpha: session.smoothing_alpha(),
                },
                frames: &records,
            };
            serde_json::to_writer_pretty(&mut writer, &document)?;
            writeln!(writer)?;
        }
        other => anyhow::bail!("unknown output format: {other} (expected csv or json)"),
    }
    writer.flush()?;

    Ok(())
}

/// CSV schema: frame, emotion, every raw scalar, then every smoothed scalar
fn write_csv<W: Write>(writer: &mut W, records: &[FrameRecord]) -> Result<()> {
    let mut header = vec!["frame".to_string(), "emotion".to_string()];
    header.extend(ScalarKey::ALL.iter().map(|k| format!("{}_raw", k.as_str())));
    header.extend(ScalarKey::ALL.iter().map(|k| format!("{}_smooth", k.as_str())));
    writeln!(writer, "{}", header.join(","))?;

    for record in records {
        let mut row = vec![record.frame.to_string(), record.emotion.to_string()];
        row.extend(
            ScalarKey::ALL
                .iter()
                .map(|k| format!("{:.5}", record.raw.scalar(*k))),
        );
        row.extend(
            ScalarKey::ALL
                .iter()
                .map(|k| format!("{:.5}", record.smoothed.scalar(*k))),
        );
        writeln!(writer, "{}", row.join(","))?;
    }

    Ok(())
}
