//! The ride selection workflow: a small state machine coordinating the map
//! and geocoding seams.

pub mod pricing;
pub mod render;

use rand::Rng;
use serde::Serialize;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{Booking, Location, LocationRole, RideOption};
use crate::services::geocoding::{ForwardHit, ForwardJoin, Geocoder};
use crate::services::map::{MapDisplay, MarkerHandle, RouteHandle};
use crate::services::store::KeyValueStore;
use self::render::{MarkerView, OptionView, RenderModel, RouteView};

/// Key under which the last computed ride options are recorded.
const RIDE_HISTORY_KEY: &str = "ride_history";

/// Confirmation codes are 4-digit.
const CONFIRMATION_CODE_RANGE: std::ops::RangeInclusive<u16> = 1000..=9999;

/// Where the selection currently stands. Picks move strictly forward;
/// `clear` returns to `NoneSet` from any state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum SelectionState {
    NoneSet,
    PickupSet,
    BothSet,
}

/// Outcome of a successful coordinate pick.
#[derive(Clone, Debug, PartialEq)]
pub struct PickOutcome {
    pub role: LocationRole,
    pub location: Location,
}

/// The workflow object. Holds the selection state and the two optional
/// locations; all handlers take it by reference — no ambient globals.
pub struct RideWorkflow {
    config: Config,
    map: Box<dyn MapDisplay>,
    geocoder: Box<dyn Geocoder>,
    store: Box<dyn KeyValueStore>,
    state: SelectionState,
    pickup: Option<Location>,
    destination: Option<Location>,
    pickup_marker: Option<MarkerHandle>,
    destination_marker: Option<MarkerHandle>,
    route: Option<RouteHandle>,
    options: Vec<RideOption>,
    booking: Option<Booking>,
}

impl RideWorkflow {
    pub fn new(
        config: Config,
        map: Box<dyn MapDisplay>,
        geocoder: Box<dyn Geocoder>,
        store: Box<dyn KeyValueStore>,
    ) -> Self {
        let mut workflow = Self {
            config,
            map,
            geocoder,
            store,
            state: SelectionState::NoneSet,
            pickup: None,
            destination: None,
            pickup_marker: None,
            destination_marker: None,
            route: None,
            options: Vec::new(),
            booking: None,
        };

        let center = Location::new(
            workflow.config.map_center_lat,
            workflow.config.map_center_lng,
        );
        workflow.map.set_view(&center, workflow.config.map_default_zoom);
        workflow
    }

    // ============ Selection ============

    /// Handle a coordinate pick (a map click). The first pick becomes the
    /// pickup, the second the destination; any further pick is rejected
    /// until the selection is cleared.
    pub async fn pick(&mut self, latitude: f64, longitude: f64) -> AppResult<PickOutcome> {
        let role = match self.state {
            SelectionState::NoneSet => LocationRole::Pickup,
            SelectionState::PickupSet => LocationRole::Destination,
            SelectionState::BothSet => return Err(AppError::SelectionComplete),
        };

        self.place(role, Location::new(latitude, longitude));
        self.sync_state();
        tracing::info!("{} set at {:.5}, {:.5}", role, latitude, longitude);

        // The pick survives a failed address lookup; only the address stays
        // unknown. Marker and state are committed before the lookup resolves.
        let resolved = self.geocoder.reverse(latitude, longitude).await;
        match resolved {
            Ok(address) => self.set_address(role, address),
            Err(err) => {
                tracing::warn!("Reverse geocoding failed for {}: {}", role, err);
                return Err(err);
            }
        }

        Ok(PickOutcome {
            role,
            location: self
                .location(role)
                .cloned()
                .unwrap_or_else(|| Location::new(latitude, longitude)),
        })
    }

    /// Clear the selection: markers, route, offered options and any shown
    /// booking.
    pub fn clear(&mut self) {
        if let Some(marker) = self.pickup_marker.take() {
            self.map.remove_marker(marker);
        }
        if let Some(marker) = self.destination_marker.take() {
            self.map.remove_marker(marker);
        }
        if let Some(route) = self.route.take() {
            self.map.remove_route(route);
        }
        self.pickup = None;
        self.destination = None;
        self.options.clear();
        self.booking = None;
        self.state = SelectionState::NoneSet;
        tracing::info!("Selection cleared");
    }

    // ============ Ride Search ============

    /// Resolve both typed addresses concurrently, then place markers, draw
    /// the route and price the three tiers. Replaces whatever was selected
    /// for the roles it resolves.
    pub async fn find_ride(
        &mut self,
        pickup_query: &str,
        destination_query: &str,
    ) -> AppResult<Vec<RideOption>> {
        // Drop any previously offered options up front
        self.options.clear();
        self.booking = None;

        // The two lookups are independent; run them as one join
        let (pickup_hit, destination_hit) = tokio::join!(
            self.geocoder.forward(pickup_query),
            self.geocoder.forward(destination_query),
        );

        match ForwardJoin::from_hits(pickup_hit?, destination_hit?) {
            ForwardJoin::PickupMissing => {
                tracing::warn!("Pickup query '{}' not found", pickup_query);
                Err(AppError::Geocoding("Pickup location not found".to_string()))
            }
            ForwardJoin::DestinationMissing { pickup } => {
                // The found pickup still lands on the map before we give up
                self.place_found(LocationRole::Pickup, &pickup);
                self.sync_state();
                tracing::warn!("Destination query '{}' not found", destination_query);
                Err(AppError::Geocoding(
                    "Destination location not found".to_string(),
                ))
            }
            ForwardJoin::BothFound {
                pickup,
                destination,
            } => {
                self.place_found(LocationRole::Pickup, &pickup);
                self.place_found(LocationRole::Destination, &destination);
                self.sync_state();
                self.redraw_route();
                self.price_current_pair()?;
                self.record_history(pickup_query, destination_query);
                Ok(self.options.clone())
            }
        }
    }

    // ============ Booking ============

    /// Book one of the currently offered tiers, producing a 4-digit
    /// confirmation code. The tier must be in the current offer.
    pub fn book(&mut self, tier_name: &str) -> AppResult<Booking> {
        let offered = self
            .options
            .iter()
            .find(|option| option.tier.name().eq_ignore_ascii_case(tier_name))
            .ok_or_else(|| AppError::UnknownTier(tier_name.to_string()))?;

        let code = rand::thread_rng().gen_range(CONFIRMATION_CODE_RANGE);
        let booking = Booking::new(offered.tier, code);
        tracing::info!(
            "Booking {} confirmed for {} with code {}",
            booking.id,
            booking.tier,
            booking.confirmation_code
        );
        self.booking = Some(booking.clone());
        Ok(booking)
    }

    // ============ Render ============

    /// Declarative snapshot for the view layer.
    pub fn render(&self) -> RenderModel {
        RenderModel {
            pickup: self
                .pickup
                .as_ref()
                .map(|location| MarkerView::new(LocationRole::Pickup, location)),
            destination: self
                .destination
                .as_ref()
                .map(|location| MarkerView::new(LocationRole::Destination, location)),
            route: match (&self.pickup, &self.destination, &self.route) {
                (Some(from), Some(to), Some(_)) => Some(RouteView {
                    from: (from.latitude, from.longitude),
                    to: (to.latitude, to.longitude),
                }),
                _ => None,
            },
            options: self
                .options
                .iter()
                .map(|option| OptionView {
                    tier: option.tier.name().to_string(),
                    price: format!(
                        "{} {}",
                        option.formatted_price(),
                        self.config.currency_symbol
                    ),
                })
                .collect(),
            confirmation: self.booking.as_ref().map(|booking| {
                format!(
                    "Booking confirmed for {}. Your OTP is: {}",
                    booking.tier, booking.confirmation_code
                )
            }),
        }
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn pickup(&self) -> Option<&Location> {
        self.pickup.as_ref()
    }

    pub fn destination(&self) -> Option<&Location> {
        self.destination.as_ref()
    }

    pub fn options(&self) -> &[RideOption] {
        &self.options
    }

    // ============ Internals ============

    /// Set a location for a role, replacing the prior marker of that role.
    fn place(&mut self, role: LocationRole, location: Location) {
        match role {
            LocationRole::Pickup => {
                if let Some(prior) = self.pickup_marker.take() {
                    self.map.remove_marker(prior);
                }
                self.pickup_marker = Some(self.map.add_marker(&location, role.label()));
                self.pickup = Some(location);
            }
            LocationRole::Destination => {
                if let Some(prior) = self.destination_marker.take() {
                    self.map.remove_marker(prior);
                }
                self.destination_marker = Some(self.map.add_marker(&location, role.label()));
                self.destination = Some(location);
            }
        }
    }

    /// Place a forward-geocoding hit; a found pickup also re-centers the map.
    fn place_found(&mut self, role: LocationRole, hit: &ForwardHit) {
        let location =
            Location::with_address(hit.latitude, hit.longitude, hit.display_name.clone());
        self.place(role, location);

        if role == LocationRole::Pickup {
            let center = Location::new(hit.latitude, hit.longitude);
            self.map.set_view(&center, self.config.map_focus_zoom);
        }
    }

    fn location(&self, role: LocationRole) -> Option<&Location> {
        match role {
            LocationRole::Pickup => self.pickup.as_ref(),
            LocationRole::Destination => self.destination.as_ref(),
        }
    }

    fn set_address(&mut self, role: LocationRole, address: String) {
        let slot = match role {
            LocationRole::Pickup => &mut self.pickup,
            LocationRole::Destination => &mut self.destination,
        };
        if let Some(location) = slot {
            location.address = Some(address);
        }
    }

    /// Keep the state flag consistent with which locations are present.
    fn sync_state(&mut self) {
        self.state = match (&self.pickup, &self.destination) {
            (None, _) => SelectionState::NoneSet,
            (Some(_), None) => SelectionState::PickupSet,
            (Some(_), Some(_)) => SelectionState::BothSet,
        };
    }

    fn redraw_route(&mut self) {
        if let Some(prior) = self.route.take() {
            self.map.remove_route(prior);
        }
        if let (Some(pickup), Some(destination)) = (&self.pickup, &self.destination) {
            self.route = Some(self.map.draw_route(pickup, destination));
        }
    }

    /// Distance between the selected pair -> priced tiers.
    fn price_current_pair(&mut self) -> AppResult<()> {
        let (Some(pickup), Some(destination)) = (&self.pickup, &self.destination) else {
            return Ok(());
        };

        let distance_km = self.map.distance_between(pickup, destination) / 1000.0;
        self.options = pricing::price_tiers(distance_km, self.config.rate_per_km)?;
        tracing::info!(
            "Offering {} tiers over {:.2} km",
            self.options.len(),
            distance_km
        );
        Ok(())
    }

    fn record_history(&mut self, pickup_query: &str, destination_query: &str) {
        let record = serde_json::json!({
            "pickup": pickup_query,
            "destination": destination_query,
            "options": self.options,
        });
        self.store.store(RIDE_HISTORY_KEY, record);
    }
}
