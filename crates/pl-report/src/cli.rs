use clap::Parser;

/// Summarize captured ping logs as a Markdown latency/loss report
#[derive(Parser, Debug, Clone)]
#[command(name = "pl-report")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Ping log files, glob patterns or directories (default: *.txt and
    /// *.log in the current directory)
    pub inputs: Vec<String>,
}
