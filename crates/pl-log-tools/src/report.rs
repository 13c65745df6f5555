//! Markdown report rendering.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::types::FileAnalysis;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Write one Markdown section per analyzed file, in the given order.
pub fn write_report<W: Write>(
    results: &[(PathBuf, FileAnalysis)],
    mut writer: W,
) -> std::io::Result<()> {
    for (path, analysis) in results {
        write_section(&mut writer, path, analysis)?;
    }
    Ok(())
}

fn write_section<W: Write>(
    writer: &mut W,
    path: &Path,
    analysis: &FileAnalysis,
) -> std::io::Result<()> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_else(|| path.to_string_lossy());
    writeln!(writer, "## Ping Analysis: {name}")?;
    writeln!(writer)?;

    writeln!(writer, "**Host:** {}", analysis.target)?;
    writeln!(writer)?;

    if let Some(range) = &analysis.time_range {
        writeln!(
            writer,
            "**Time Range:** {} to {}",
            range.start.format(TIME_FORMAT),
            range.end.format(TIME_FORMAT)
        )?;
        writeln!(writer)?;
    }

    let stats = &analysis.stats;
    writeln!(writer, "| Metric | Value |")?;
    writeln!(writer, "|--------|-------|")?;
    writeln!(writer, "| Minimum Latency | {:.1} ms |", stats.min_ms)?;
    writeln!(writer, "| Average Latency | {:.1} ms |", stats.avg_ms)?;
    writeln!(writer, "| Maximum Latency | {:.1} ms |", stats.max_ms)?;
    writeln!(writer, "| Mean Deviation | {:.1} ms |", stats.mean_deviation_ms)?;
    writeln!(writer, "| Packet Loss | {:.1}% |", stats.packet_loss_percent)?;
    writeln!(writer, "| Total Pings | {} |", stats.total_probes)?;
    writeln!(writer)?;
    writeln!(writer)?;
    Ok(())
}

/// Render the report into a `String`.
pub fn render_report(results: &[(PathBuf, FileAnalysis)]) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec<u8> cannot fail
    let _ = write_report(results, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
