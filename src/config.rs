use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub rate_per_km: f64,
    pub currency_symbol: String,
    pub nominatim_url: String,
    pub geocoder_user_agent: String,
    pub geocoder_timeout_secs: u64,
    pub map_center_lat: f64,
    pub map_center_lng: f64,
    pub map_default_zoom: u8,
    pub map_focus_zoom: u8,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            rate_per_km: env::var("RATE_PER_KM")
                .unwrap_or_else(|_| "15".to_string())
                .parse()
                .expect("RATE_PER_KM must be a number"),
            currency_symbol: env::var("CURRENCY_SYMBOL")
                .unwrap_or_else(|_| "₹".to_string()),
            nominatim_url: env::var("NOMINATIM_URL")
                .unwrap_or_else(|_| "https://nominatim.openstreetmap.org".to_string()),
            geocoder_user_agent: env::var("GEOCODER_USER_AGENT")
                .unwrap_or_else(|_| default_user_agent()),
            geocoder_timeout_secs: env::var("GEOCODER_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .expect("GEOCODER_TIMEOUT_SECS must be a number"),
            map_center_lat: env::var("MAP_CENTER_LAT")
                .unwrap_or_else(|_| "13.0827".to_string())
                .parse()
                .expect("MAP_CENTER_LAT must be a number"),
            map_center_lng: env::var("MAP_CENTER_LNG")
                .unwrap_or_else(|_| "80.2707".to_string())
                .parse()
                .expect("MAP_CENTER_LNG must be a number"),
            map_default_zoom: env::var("MAP_DEFAULT_ZOOM")
                .unwrap_or_else(|_| "12".to_string())
                .parse()
                .expect("MAP_DEFAULT_ZOOM must be a number"),
            map_focus_zoom: env::var("MAP_FOCUS_ZOOM")
                .unwrap_or_else(|_| "13".to_string())
                .parse()
                .expect("MAP_FOCUS_ZOOM must be a number"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rate_per_km: 15.0,
            currency_symbol: "₹".to_string(),
            nominatim_url: "https://nominatim.openstreetmap.org".to_string(),
            geocoder_user_agent: default_user_agent(),
            geocoder_timeout_secs: 10,
            map_center_lat: 13.0827,
            map_center_lng: 80.2707,
            map_default_zoom: 12,
            map_focus_zoom: 13,
        }
    }
}

fn default_user_agent() -> String {
    format!("ride-booking/{}", env!("CARGO_PKG_VERSION"))
}
