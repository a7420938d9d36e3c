use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ride_booking::config::Config;
use ride_booking::error::AppResult;
use ride_booking::models::Location;
use ride_booking::services::{MapDisplay, MarkerHandle, MemoryStore, NominatimGeocoder, RouteHandle};
use ride_booking::workflow::render::{MarkerView, RenderModel};
use ride_booking::RideWorkflow;

/// Stand-in for the map widget: hands out handles and logs what a real
/// widget would draw.
#[derive(Default)]
struct TerminalMap {
    next_handle: u64,
}

impl TerminalMap {
    fn next(&mut self) -> u64 {
        self.next_handle += 1;
        self.next_handle
    }
}

impl MapDisplay for TerminalMap {
    fn add_marker(&mut self, location: &Location, label: &str) -> MarkerHandle {
        tracing::debug!(
            "map: marker '{}' at {:.5}, {:.5}",
            label,
            location.latitude,
            location.longitude
        );
        MarkerHandle(self.next())
    }

    fn remove_marker(&mut self, handle: MarkerHandle) {
        tracing::debug!("map: remove marker {:?}", handle);
    }

    fn draw_route(&mut self, from: &Location, to: &Location) -> RouteHandle {
        tracing::debug!(
            "map: route {:.5}, {:.5} -> {:.5}, {:.5}",
            from.latitude,
            from.longitude,
            to.latitude,
            to.longitude
        );
        RouteHandle(self.next())
    }

    fn remove_route(&mut self, handle: RouteHandle) {
        tracing::debug!("map: remove route {:?}", handle);
    }

    fn set_view(&mut self, center: &Location, zoom: u8) {
        tracing::debug!(
            "map: view {:.5}, {:.5} at zoom {}",
            center.latitude,
            center.longitude,
            zoom
        );
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ride_booking=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let geocoder = NominatimGeocoder::new(&config).expect("Failed to build geocoder");

    let mut workflow = RideWorkflow::new(
        config,
        Box::new(TerminalMap::default()),
        Box::new(geocoder),
        Box::new(MemoryStore::new()),
    );

    println!("Ride booking demo. Commands:");
    println!("  pick <lat> <lng>                  pick pickup, then destination");
    println!("  find <pickup> | <destination>     search both addresses");
    println!("  book <tier>                       book an offered tier");
    println!("  clear                             start over");
    println!("  quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush().ok();

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            _ => break,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" {
            break;
        }

        // Every error is a blocking notification; the workflow stays usable
        match dispatch(&mut workflow, line).await {
            Ok(()) => print_render(&workflow.render()),
            Err(err) => println!("[!] {}", err),
        }
    }
}

async fn dispatch(workflow: &mut RideWorkflow, line: &str) -> AppResult<()> {
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));

    match command {
        "pick" => {
            let coords: Vec<f64> = rest
                .split_whitespace()
                .filter_map(|part| part.parse().ok())
                .collect();
            match coords[..] {
                [latitude, longitude] => {
                    workflow.pick(latitude, longitude).await?;
                }
                _ => println!("usage: pick <lat> <lng>"),
            }
        }
        "find" => match rest.split_once('|') {
            Some((pickup, destination)) => {
                workflow.find_ride(pickup.trim(), destination.trim()).await?;
            }
            None => println!("usage: find <pickup> | <destination>"),
        },
        "book" => {
            workflow.book(rest.trim())?;
        }
        "clear" => workflow.clear(),
        _ => println!("Unknown command '{}'", command),
    }

    Ok(())
}

fn print_render(model: &RenderModel) {
    if let Some(marker) = &model.pickup {
        println!("Pickup:      {}", describe(marker));
    }
    if let Some(marker) = &model.destination {
        println!("Destination: {}", describe(marker));
    }
    if model.route.is_some() {
        println!("Route drawn between pickup and destination");
    }
    for option in &model.options {
        println!("  {} - {}", option.tier, option.price);
    }
    if let Some(confirmation) = &model.confirmation {
        println!("{}", confirmation);
    }
}

fn describe(marker: &MarkerView) -> String {
    match &marker.address {
        Some(address) => format!("{} ({:.5}, {:.5})", address, marker.latitude, marker.longitude),
        None => format!("{:.5}, {:.5}", marker.latitude, marker.longitude),
    }
}
