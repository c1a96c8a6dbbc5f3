//! Render command implementation
//!
//! Evaluates every channel of a scene once and writes the traces as CSV or
//! JSON, to stdout or to a file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use colored::Colorize;

use wavescope_core::{evaluate_channel, rng, synthesize, ChannelTrace, TimeBase};
use wavescope_spec::{validate_scene, Scene, SignalSpec};

use crate::input::load_scene;
use crate::trace::{write_traces, TraceFormat};

/// A fully evaluated scene: the shared time axis plus one trace per channel.
pub struct EvaluatedScene {
    pub time: Vec<f64>,
    pub traces: Vec<ChannelTrace>,
    /// Per-channel evaluation failures, as printable messages. A failed
    /// channel keeps its slot as a hidden all-zero trace so column positions
    /// stay aligned with the scene.
    pub failures: Vec<String>,
}

/// Evaluates every channel of a validated scene.
///
/// `base_seed` is the seed the stochastic signals draw from; one-shot renders
/// pass the scene seed directly, the live scope derives a fresh base per tick.
pub fn evaluate_scene(scene: &Scene, base_seed: u32) -> Result<EvaluatedScene> {
    let timebase = TimeBase::linspace(scene.time.start, scene.time.end, scene.time.samples)
        .map_err(|e| anyhow!("invalid time window: {}", e))?;

    let message = synthesize(
        &SignalSpec::canonical_message(),
        &timebase,
        &mut rng::create_rng(base_seed),
    )
    .map_err(|e| anyhow!("message synthesis failed: {}", e))?;

    let mut traces = Vec::with_capacity(scene.channels.len());
    let mut failures = Vec::new();

    for (index, request) in scene.channels.iter().enumerate() {
        let mut channel_rng = rng::channel_rng(base_seed, index as u32);
        match evaluate_channel(
            request,
            &timebase,
            &message,
            scene.carrier_frequency,
            &mut channel_rng,
        ) {
            Ok(trace) => traces.push(trace),
            Err(err) => {
                failures.push(format!("channel {} ({}): {}", index + 1, request.identity, err));
                traces.push(ChannelTrace {
                    name: request.identity.label(),
                    samples: vec![0.0; timebase.len()],
                    visible: false,
                });
            }
        }
    }

    Ok(EvaluatedScene {
        time: timebase.samples().to_vec(),
        traces,
        failures,
    })
}

/// Run the render command
///
/// # Arguments
/// * `scene_path` - Path to the scene file (JSON)
/// * `output` - Output file path, or None for stdout
/// * `format` - Output format name ("csv" or "json")
///
/// # Returns
/// Exit code: 0 on success, 1 if validation failed
pub fn run(scene_path: &str, output: Option<&str>, format: &str) -> Result<ExitCode> {
    let format = TraceFormat::from_name(format)
        .ok_or_else(|| anyhow!("unknown output format: {}", format))?;

    let scene = load_scene(Path::new(scene_path))?;
    let validation = validate_scene(&scene);
    for warning in &validation.warnings {
        eprintln!("  {} {}", "!".yellow(), warning);
    }
    if !validation.is_ok() {
        for error in &validation.errors {
            eprintln!("  {} {}", "x".red(), error);
        }
        eprintln!(
            "{} {} error(s)",
            "Invalid scene:".red().bold(),
            validation.errors.len()
        );
        return Ok(ExitCode::FAILURE);
    }

    let evaluated = evaluate_scene(&scene, scene.seed)?;
    for failure in &evaluated.failures {
        eprintln!("  {} {}", "!".yellow(), failure);
    }

    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file: {}", path))?;
            let mut writer = BufWriter::new(file);
            write_traces(&mut writer, format, &evaluated.time, &evaluated.traces)?;
            writer.flush()?;
            eprintln!(
                "{} {} trace(s), {} sample(s) -> {}",
                "Rendered:".green().bold(),
                evaluated.traces.len(),
                evaluated.time.len(),
                path
            );
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            write_traces(&mut writer, format, &evaluated.time, &evaluated.traces)?;
            writer.flush()?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
