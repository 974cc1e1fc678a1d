use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use roadsafe_cli::RoadSafeClient;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Csv,
    Both,
}

/// Download filed wildlife reports as reports.json and reports.csv.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// RoadSafe server URL
    #[arg(long, default_value = "http://localhost:3000")]
    url: String,

    #[arg(long, value_enum, default_value_t = Format::Both)]
    format: Format,

    /// Only export reports with this status (alive or dead)
    #[arg(long)]
    status: Option<String>,

    /// Directory the files are written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let client = RoadSafeClient::new(args.url);
    let status = args.status.as_deref();

    let json = client.export_reports("json", status)?;
    let reports: Vec<serde_json::Value> =
        serde_json::from_str(&json).context("export is not a JSON array")?;
    if reports.is_empty() {
        println!("No reports found.");
        return Ok(());
    }

    fs::create_dir_all(&args.out_dir)?;
    if matches!(args.format, Format::Json | Format::Both) {
        let path = args.out_dir.join("reports.json");
        fs::write(&path, serde_json::to_string_pretty(&reports)?)?;
        println!("Exported {} ({} reports)", path.display(), reports.len());
    }
    if matches!(args.format, Format::Csv | Format::Both) {
        let path = args.out_dir.join("reports.csv");
        fs::write(&path, client.export_reports("csv", status)?)?;
        println!("Exported {}", path.display());
    }

    Ok(())
}
