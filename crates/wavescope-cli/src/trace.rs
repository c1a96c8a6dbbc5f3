//! Trace output writers.
//!
//! Rendering is someone else's job; these writers emit the evaluated traces
//! as plain data. CSV carries only the visible traces (matching what a chart
//! would draw, one column per channel); JSON carries everything, with the
//! visibility flag preserved.

use std::io::{self, Write};

use serde::Serialize;

use wavescope_core::ChannelTrace;

/// Supported trace output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceFormat {
    /// Comma-separated values: a time column plus one column per visible trace.
    Csv,
    /// A single JSON document with time and all traces.
    Json,
}

impl TraceFormat {
    /// Parses a format name as accepted on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "csv" => Some(TraceFormat::Csv),
            "json" => Some(TraceFormat::Json),
            _ => None,
        }
    }
}

/// The chart-legend style label for a channel: `CH{n}: {identity}`,
/// 1-indexed like the front panel.
pub fn channel_label(index: usize, trace: &ChannelTrace) -> String {
    format!("CH{}: {}", index + 1, trace.name)
}

/// Writes traces in the requested format.
pub fn write_traces<W: Write>(
    writer: &mut W,
    format: TraceFormat,
    time: &[f64],
    traces: &[ChannelTrace],
) -> io::Result<()> {
    match format {
        TraceFormat::Csv => write_csv(writer, time, traces),
        TraceFormat::Json => write_json(writer, time, traces),
    }
}

fn write_csv<W: Write>(writer: &mut W, time: &[f64], traces: &[ChannelTrace]) -> io::Result<()> {
    let visible: Vec<(usize, &ChannelTrace)> = traces
        .iter()
        .enumerate()
        .filter(|(_, t)| t.visible)
        .collect();

    write!(writer, "time")?;
    for (index, trace) in &visible {
        write!(writer, ",{}", channel_label(*index, trace))?;
    }
    writeln!(writer)?;

    for (row, &t) in time.iter().enumerate() {
        write!(writer, "{}", t)?;
        for (_, trace) in &visible {
            write!(writer, ",{}", trace.samples[row])?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

#[derive(Serialize)]
struct TraceDocument<'a> {
    time: &'a [f64],
    traces: Vec<TraceEntry<'a>>,
}

#[derive(Serialize)]
struct TraceEntry<'a> {
    name: String,
    visible: bool,
    samples: &'a [f64],
}

fn write_json<W: Write>(writer: &mut W, time: &[f64], traces: &[ChannelTrace]) -> io::Result<()> {
    let document = TraceDocument {
        time,
        traces: traces
            .iter()
            .enumerate()
            .map(|(index, trace)| TraceEntry {
                name: channel_label(index, trace),
                visible: trace.visible,
                samples: &trace.samples,
            })
            .collect(),
    };
    serde_json::to_writer(&mut *writer, &document)?;
    writeln!(writer)?;
    Ok(())
}
