use anyhow::{bail, Result};
use clap::Parser;
use roadsafe_cli::{
    render::{list_segments, summarize_route},
    RoadSafeClient,
};
use roadsafe_core::GeoPoint;

/// Score a driving route for wildlife hazard.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// RoadSafe server URL
    #[arg(long, default_value = "http://localhost:3000")]
    url: String,

    /// Origin latitude
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,

    /// Origin longitude
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,

    /// Destination address
    #[arg(long)]
    to: Option<String>,

    /// Destination as "lat,lon"
    #[arg(long, allow_hyphen_values = true)]
    to_point: Option<String>,

    /// Sample spacing in meters (server default when omitted)
    #[arg(long)]
    spacing: Option<f64>,

    /// Print the raw JSON response
    #[arg(long)]
    json: bool,
}

fn parse_point(value: &str) -> Result<GeoPoint> {
    let Some((lat, lon)) = value.split_once(',') else {
        bail!("expected \"lat,lon\", got {:?}", value);
    };
    Ok(GeoPoint::new(lat.trim().parse()?, lon.trim().parse()?))
}

fn main() -> Result<()> {
    let args = Args::parse();
    let destination = args.to_point.as_deref().map(parse_point).transpose()?;
    if destination.is_none() && args.to.is_none() {
        bail!("pass --to <address> or --to-point <lat,lon>");
    }

    let client = RoadSafeClient::new(args.url);
    let origin = GeoPoint::new(args.lat, args.lon);
    println!("Requesting route risk from {:.5}, {:.5}...", origin.latitude, origin.longitude);

    let response = client.route_risk(origin, destination, args.to.as_deref(), args.spacing)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&response.report)?);
        return Ok(());
    }

    println!(
        "Destination: {:.5}, {:.5}",
        response.destination.latitude, response.destination.longitude
    );
    if !response.report.segments.is_empty() {
        println!("{}", list_segments(&response.report.segments));
    }
    println!("{}", summarize_route(&response.report));
    Ok(())
}
