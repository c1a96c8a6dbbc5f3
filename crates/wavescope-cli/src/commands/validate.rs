//! Validate command implementation
//!
//! Checks a scene file and reports errors and warnings without rendering.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use wavescope_spec::{validate_scene, ValidationError, ValidationWarning};

use crate::input::load_scene;

/// Run the validate command
///
/// # Arguments
/// * `scene_path` - Path to the scene file (JSON)
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(scene_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(scene_path)
    } else {
        run_human(scene_path)
    }
}

fn run_human(scene_path: &str) -> Result<ExitCode> {
    println!("{} {}", "Validating:".cyan().bold(), scene_path);

    let scene = load_scene(Path::new(scene_path))?;
    let result = validate_scene(&scene);

    for warning in &result.warnings {
        println!("  {} {}", "!".yellow(), format_diagnostic_warning(warning));
    }
    for error in &result.errors {
        println!("  {} {}", "x".red(), format_diagnostic_error(error));
    }

    if result.is_ok() {
        println!(
            "{} {} channel(s), {} warning(s)",
            "Valid:".green().bold(),
            scene.channels.len(),
            result.warnings.len()
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "{} {} error(s), {} warning(s)",
            "Invalid:".red().bold(),
            result.errors.len(),
            result.warnings.len()
        );
        Ok(ExitCode::FAILURE)
    }
}

fn run_json(scene_path: &str) -> Result<ExitCode> {
    let output = match load_scene(Path::new(scene_path)) {
        Ok(scene) => {
            let result = validate_scene(&scene);
            ValidateOutput {
                scene: scene_path.to_string(),
                valid: result.is_ok(),
                errors: result.errors.iter().map(JsonDiagnostic::from_error).collect(),
                warnings: result
                    .warnings
                    .iter()
                    .map(JsonDiagnostic::from_warning)
                    .collect(),
            }
        }
        Err(err) => ValidateOutput {
            scene: scene_path.to_string(),
            valid: false,
            errors: vec![JsonDiagnostic {
                code: "load".to_string(),
                message: format!("{:#}", err),
                path: None,
            }],
            warnings: Vec::new(),
        },
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    if output.valid {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn format_diagnostic_error(error: &ValidationError) -> String {
    match &error.path {
        Some(path) => format!("[{}] {} (at {})", error.code, error.message, path),
        None => format!("[{}] {}", error.code, error.message),
    }
}

fn format_diagnostic_warning(warning: &ValidationWarning) -> String {
    match &warning.path {
        Some(path) => format!("[{}] {} (at {})", warning.code, warning.message, path),
        None => format!("[{}] {}", warning.code, warning.message),
    }
}

/// Machine-readable validation output.
#[derive(Serialize)]
struct ValidateOutput {
    scene: String,
    valid: bool,
    errors: Vec<JsonDiagnostic>,
    warnings: Vec<JsonDiagnostic>,
}

#[derive(Serialize)]
struct JsonDiagnostic {
    code: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
}

impl JsonDiagnostic {
    fn from_error(error: &ValidationError) -> Self {
        JsonDiagnostic {
            code: error.code.code().to_string(),
            message: error.message.clone(),
            path: error.path.clone(),
        }
    }

    fn from_warning(warning: &ValidationWarning) -> Self {
        JsonDiagnostic {
            code: warning.code.code().to_string(),
            message: warning.message.clone(),
            path: warning.path.clone(),
        }
    }
}
