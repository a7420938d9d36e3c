use serde::Serialize;

use crate::models::{Location, LocationRole};

/// A marker as the view should draw it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MarkerView {
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: Option<String>,
}

impl MarkerView {
    pub(crate) fn new(role: LocationRole, location: &Location) -> Self {
        Self {
            label: role.label().to_string(),
            latitude: location.latitude,
            longitude: location.longitude,
            address: location.address.clone(),
        }
    }
}

/// Route overlay between the two selected points.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RouteView {
    pub from: (f64, f64),
    pub to: (f64, f64),
}

/// One row of the offered options list, price already formatted with the
/// currency symbol.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OptionView {
    pub tier: String,
    pub price: String,
}

/// Declarative snapshot of everything the view should show. The workflow
/// never touches presentation; a view layer consumes this instead.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RenderModel {
    pub pickup: Option<MarkerView>,
    pub destination: Option<MarkerView>,
    pub route: Option<RouteView>,
    pub options: Vec<OptionView>,
    pub confirmation: Option<String>,
}
