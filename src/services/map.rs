use crate::models::Location;
use crate::utils::geo::haversine_distance_m;

/// Handle to a marker placed on the map; kept so the marker can be replaced
/// or removed later.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MarkerHandle(pub u64);

/// Handle to a drawn route overlay.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RouteHandle(pub u64);

/// The map widget seam: markers, route overlay, viewport and distance.
pub trait MapDisplay: Send {
    fn add_marker(&mut self, location: &Location, label: &str) -> MarkerHandle;

    fn remove_marker(&mut self, handle: MarkerHandle);

    fn draw_route(&mut self, from: &Location, to: &Location) -> RouteHandle;

    fn remove_route(&mut self, handle: RouteHandle);

    fn set_view(&mut self, center: &Location, zoom: u8);

    /// Straight-line distance between two locations in meters.
    fn distance_between(&self, a: &Location, b: &Location) -> f64 {
        haversine_distance_m(a.latitude, a.longitude, b.latitude, b.longitude)
    }
}
