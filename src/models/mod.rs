pub mod location;
pub mod ride;

pub use location::{Location, LocationRole};
pub use ride::{Booking, RideOption, RideTier};
