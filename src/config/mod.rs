mod load;
pub mod validation;

use std::time::Duration;
use serde::{Deserialize, Serialize};

pub use validation::{ConfigValidator, ValidationError};

/// Environment variable naming an alternate config file.
pub const CONFIG_ENV_VAR: &str = "LITTERBOX_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "./dashboard.yml";

/// Top-level dashboard configuration.
///
/// Every field has a compiled-in default, so an empty (or missing) file
/// yields the stock broker, topics and widget capacities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub broker: BrokerConfig,
    pub topics: TopicConfig,
    pub limits: LimitsConfig,
    pub log_dir: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            broker: BrokerConfig::default(),
            topics: TopicConfig::default(),
            limits: LimitsConfig::default(),
            log_dir: "./logs".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrokerConfig {
    pub host: String,
    pub port: u16,
    /// Websocket path, ignored for plain TCP/TLS.
    pub path: String,
    pub client_id: String,
    pub use_tls: bool,
    pub use_websocket: bool,
    /// Append a random suffix to `client_id` so two dashboards don't kick each other off.
    pub unique_client_id: bool,
    pub keep_alive_secs: u64,
    pub reconnect_delay_ms: u64,
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            host: "mqtt.eclipseprojects.io".to_string(),
            port: 443,
            path: "/mqtt".to_string(),
            client_id: "LitterBoxController".to_string(),
            use_tls: true,
            use_websocket: true,
            unique_client_id: false,
            keep_alive_secs: 30,
            reconnect_delay_ms: 2000,
        }
    }
}

impl BrokerConfig {
    pub fn keep_alive(&self) -> Duration {
        Duration::from_secs(self.keep_alive_secs)
    }

    pub fn reconnect_delay(&self) -> Duration {
        Duration::from_millis(self.reconnect_delay_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopicConfig {
    /// Relative-humidity / raking event topic.
    pub raking: String,
    pub odor: String,
    /// Weight sensor topic, payload is seconds of use.
    pub usage: String,
    pub rake_command: String,
}

impl Default for TopicConfig {
    fn default() -> Self {
        Self {
            raking: "ece445/rh".to_string(),
            odor: "ece445/odor".to_string(),
            usage: "ece445/weight".to_string(),
            rake_command: "ece445/rake".to_string(),
        }
    }
}

impl TopicConfig {
    pub fn inbound(&self) -> [&str; 3] {
        [&self.raking, &self.odor, &self.usage]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    pub usage_chart_points: usize,
    pub usage_log_entries: usize,
    pub raking_log_entries: usize,
    pub rake_effect_ms: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            usage_chart_points: 10,
            usage_log_entries: 10,
            raking_log_entries: 3,
            rake_effect_ms: 900,
        }
    }
}

impl LimitsConfig {
    pub fn rake_effect(&self) -> Duration {
        Duration::from_millis(self.rake_effect_ms)
    }
}
