//! Scope command implementation
//!
//! An interactive run/freeze/reset session. Every tick re-evaluates the scene
//! with a tick-derived seed and rewrites the output file. The identities a
//! channel can name are all deterministic today, so successive ticks of the
//! same scene write identical traces; the per-tick seed is plumbed through so
//! a future stochastic identity would re-draw each tick without host changes.
//!
//! The prompt accepts `run`, `freeze`, `reset`, `quit` (or `r`/`f`/`q`); an
//! empty line advances one tick while running.

use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use colored::Colorize;

use wavescope_core::rng;
use wavescope_spec::{validate_scene, Scene};

use crate::controller::{Action, Controller, ScopeCommand};
use crate::input::load_scene;
use crate::trace::{write_traces, TraceFormat};

use super::render::evaluate_scene;

/// Run the scope command
///
/// # Returns
/// Exit code: 0 on clean quit, 1 if the scene never validated
pub fn run(scene_path: &str, output: &str, format: &str) -> Result<ExitCode> {
    let stdin = std::io::stdin();
    let mut stderr = std::io::stderr();
    run_session(scene_path, output, format, stdin.lock(), &mut stderr)
}

/// The session loop, with injected command input and console output so tests
/// can drive it.
pub fn run_session<R: BufRead, W: Write>(
    scene_path: &str,
    output: &str,
    format: &str,
    commands: R,
    console: &mut W,
) -> Result<ExitCode> {
    let format = TraceFormat::from_name(format)
        .ok_or_else(|| anyhow!("unknown output format: {}", format))?;

    let mut scene = match load_validated_scene(scene_path, console)? {
        Some(scene) => scene,
        None => return Ok(ExitCode::FAILURE),
    };

    let mut controller = Controller::new();
    render_tick(&scene, controller.tick(), output, format, console)?;
    writeln!(
        console,
        "{} run | freeze | reset | quit (empty line = tick)",
        "Scope ready.".cyan().bold()
    )?;

    for line in commands.lines() {
        let line = line.context("failed to read command input")?;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            if controller.advance() {
                render_tick(&scene, controller.tick(), output, format, console)?;
            }
            continue;
        }

        let command = match trimmed.parse::<ScopeCommand>() {
            Ok(command) => command,
            Err(message) => {
                writeln!(console, "  {} {}", "!".yellow(), message)?;
                continue;
            }
        };

        match controller.apply(command) {
            Action::None => {}
            Action::Render => {
                render_tick(&scene, controller.tick(), output, format, console)?;
            }
            Action::Reload => {
                match load_validated_scene(scene_path, console)? {
                    Some(reloaded) => {
                        scene = reloaded;
                        render_tick(&scene, controller.tick(), output, format, console)?;
                    }
                    None => {
                        writeln!(
                            console,
                            "  {} keeping the previous scene",
                            "!".yellow()
                        )?;
                    }
                }
            }
            Action::Quit => break,
        }
    }

    writeln!(console, "{}", "Scope session ended.".dimmed())?;
    Ok(ExitCode::SUCCESS)
}

/// Loads and validates the scene, reporting diagnostics to the console.
/// Returns None when validation fails.
fn load_validated_scene<W: Write>(scene_path: &str, console: &mut W) -> Result<Option<Scene>> {
    let scene = load_scene(Path::new(scene_path))?;
    let validation = validate_scene(&scene);
    for warning in &validation.warnings {
        writeln!(console, "  {} {}", "!".yellow(), warning)?;
    }
    if !validation.is_ok() {
        for error in &validation.errors {
            writeln!(console, "  {} {}", "x".red(), error)?;
        }
        return Ok(None);
    }
    Ok(Some(scene))
}

fn render_tick<W: Write>(
    scene: &Scene,
    tick: u64,
    output: &str,
    format: TraceFormat,
    console: &mut W,
) -> Result<()> {
    let base_seed = rng::derive_tick_seed(scene.seed, tick);
    let evaluated = evaluate_scene(scene, base_seed)?;
    for failure in &evaluated.failures {
        writeln!(console, "  {} {}", "!".yellow(), failure)?;
    }

    let file =
        File::create(output).with_context(|| format!("failed to create output file: {}", output))?;
    let mut writer = BufWriter::new(file);
    write_traces(&mut writer, format, &evaluated.time, &evaluated.traces)?;
    writer.flush()?;

    writeln!(console, "tick {} -> {}", tick, output)?;
    Ok(())
}
