//! Configuration for the merge pipeline
//!
//! Provides the immutable station and API configuration tables injected into
//! the pipeline components. Defaults cover the KMA surface stations around
//! the Jeolla region plant sites.

use crate::constants::{DEFAULT_STATION_ID, HTTP_TIMEOUT_SECS, KMA_API_BASE_URL};
use serde::Serialize;

/// One KMA surface observation station
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationInfo {
    /// Provider station number (the `stn` request parameter)
    pub id: u32,

    /// Station name
    pub name: String,

    /// Latitude in WGS84 decimal degrees
    pub lat: f64,

    /// Longitude in WGS84 decimal degrees
    pub lon: f64,

    /// Administrative region
    pub region: String,
}

/// KMA API request settings
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Endpoint URL of the surface observation service
    pub base_url: String,

    /// API hub credential; when absent the simulation source is used
    pub auth_key: Option<String>,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: KMA_API_BASE_URL.to_string(),
            auth_key: None,
            timeout_secs: HTTP_TIMEOUT_SECS,
        }
    }
}

/// Global configuration injected into the pipeline components
#[derive(Debug, Clone)]
pub struct Config {
    /// Known weather stations selectable for reconciliation
    pub stations: Vec<StationInfo>,

    /// Default station when none is requested
    pub default_station_id: u32,

    /// API request settings
    pub api: ApiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stations: default_stations(),
            default_station_id: DEFAULT_STATION_ID,
            api: ApiConfig::default(),
        }
    }
}

impl Config {
    /// Set the API credential, switching the weather source to the live API
    pub fn with_auth_key(mut self, auth_key: impl Into<String>) -> Self {
        self.api.auth_key = Some(auth_key.into());
        self
    }

    /// Look up a station by provider number
    pub fn station(&self, id: u32) -> Option<&StationInfo> {
        self.stations.iter().find(|s| s.id == id)
    }
}

/// The KMA surface stations covering the supported plant regions
fn default_stations() -> Vec<StationInfo> {
    fn station(id: u32, name: &str, lat: f64, lon: f64, region: &str) -> StationInfo {
        StationInfo {
            id,
            name: name.to_string(),
            lat,
            lon,
            region: region.to_string(),
        }
    }

    vec![
        station(140, "군산", 36.0053, 126.76135, "전라북도"),
        station(146, "전주", 35.84092, 127.11718, "전라북도"),
        station(156, "광주", 35.17294, 126.89156, "광주광역시"),
        station(165, "목포", 34.81732, 126.38151, "전라남도"),
        station(168, "여수", 34.73929, 127.74063, "전라남도"),
        station(170, "완도", 34.73929, 127.74063, "전라남도"),
        station(172, "고창", 34.73929, 127.74063, "전라북도"),
        station(174, "순천", 34.73929, 127.74063, "전라남도"),
        station(184, "제주", 33.51411, 126.52969, "제주특별자치도"),
        station(185, "서귀포고산", 33.29382, 126.16283, "제주특별자치도"),
        station(188, "서귀포성산", 33.38677, 126.8802, "제주특별자치도"),
        station(189, "서귀포", 33.24616, 126.5653, "제주특별자치도"),
        station(247, "남원", 33.24616, 126.5653, "전라북도"),
        station(248, "장수", 33.24616, 126.5653, "전라북도"),
    ]
}
