pub mod geocoding;
pub mod map;
pub mod store;

pub use geocoding::{ForwardHit, ForwardJoin, Geocoder, NominatimGeocoder};
pub use map::{MapDisplay, MarkerHandle, RouteHandle};
pub use store::{KeyValueStore, MemoryStore};
