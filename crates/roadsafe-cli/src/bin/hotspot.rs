use anyhow::{bail, Result};
use clap::Parser;
use roadsafe_cli::{render::summarize_hotspot, RoadSafeClient};
use roadsafe_core::GeoPoint;

/// Predict the wildlife hazard at a single place.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// RoadSafe server URL
    #[arg(long, default_value = "http://localhost:3000")]
    url: String,

    /// Place to look up
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    address: Option<String>,

    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    lat: Option<f64>,

    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    lon: Option<f64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let point = match (args.lat, args.lon) {
        (Some(lat), Some(lon)) => Some(GeoPoint::new(lat, lon)),
        _ => None,
    };
    if point.is_none() && args.address.is_none() {
        bail!("pass --address or --lat/--lon");
    }

    let client = RoadSafeClient::new(args.url);
    let marker = client.hotspot(args.address.as_deref(), point)?;
    println!("{}", summarize_hotspot(&marker));
    Ok(())
}
