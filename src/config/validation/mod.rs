use std::fmt;

use crate::log_debug;

use super::DashboardConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub error: String,
}

impl ValidationError {
    fn new(field: &str, error: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            error: error.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.error)
    }
}

impl std::error::Error for ValidationError {}

/// Upper bound for the chart and log capacities; the logs are laid out one row per entry.
pub const MAX_WIDGET_CAPACITY: usize = 1000;

pub struct ConfigValidator;

impl ConfigValidator {
    /// Collects every problem instead of stopping at the first one.
    pub fn validate(config: &DashboardConfig) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        let broker = &config.broker;
        if broker.host.trim().is_empty() {
            errors.push(ValidationError::new("broker.host", "Must not be empty"));
        }
        if broker.port == 0 {
            errors.push(ValidationError::new("broker.port", "Must be greater than 0"));
        }
        if broker.client_id.trim().is_empty() {
            errors.push(ValidationError::new("broker.client_id", "Must not be empty"));
        }
        if broker.use_websocket && !broker.path.starts_with('/') {
            errors.push(ValidationError::new(
                "broker.path",
                format!("Websocket path must start with '/', got {:?}", broker.path),
            ));
        }
        if broker.keep_alive_secs < 5 {
            errors.push(ValidationError::new("broker.keep_alive_secs", "Must be at least 5 seconds"));
        }

        let topics = &config.topics;
        for (field, topic) in [
            ("topics.raking", &topics.raking),
            ("topics.odor", &topics.odor),
            ("topics.usage", &topics.usage),
            ("topics.rake_command", &topics.rake_command),
        ] {
            if topic.trim().is_empty() {
                errors.push(ValidationError::new(field, "Must not be empty"));
            } else if topic.contains('+') || topic.contains('#') {
                errors.push(ValidationError::new(field, "Wildcards are not allowed"));
            }
        }

        let [raking, odor, usage] = topics.inbound();
        if raking == odor || raking == usage || odor == usage {
            errors.push(ValidationError::new(
                "topics",
                "Inbound topics must be distinct so each message has one handler",
            ));
        }

        let limits = &config.limits;
        for (field, value) in [
            ("limits.usage_chart_points", limits.usage_chart_points),
            ("limits.usage_log_entries", limits.usage_log_entries),
            ("limits.raking_log_entries", limits.raking_log_entries),
        ] {
            if value == 0 {
                errors.push(ValidationError::new(field, "Must be greater than 0"));
            } else if value > MAX_WIDGET_CAPACITY {
                errors.push(ValidationError::new(
                    field,
                    format!("Must be at most {}", MAX_WIDGET_CAPACITY),
                ));
            }
        }

        log_debug!("Config validation finished with {} error(s)", errors.len());

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ConfigValidator::validate(&DashboardConfig::default()).is_ok());
    }

    #[test]
    fn test_reports_every_bad_field() {
        let yaml = r#"
broker:
  host: ""
  client_id: " "
topics:
  odor: "ece445/rh"
limits:
  raking_log_entries: 0
"#;
        let config: DashboardConfig = serde_yaml::from_str(yaml).unwrap();
        let errors = ConfigValidator::validate(&config).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();

        assert_eq!(
            fields,
            vec!["broker.host", "broker.client_id", "topics", "limits.raking_log_entries"]
        );
    }

    #[test]
    fn test_wildcard_topics_rejected() {
        let mut config = DashboardConfig::default();
        config.topics.usage = "ece445/#".to_string();

        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "topics.usage: Wildcards are not allowed");
    }

    #[test]
    fn test_oversized_capacities_rejected() {
        let yaml = r#"
limits:
  usage_chart_points: 1000
  usage_log_entries: 1001
  raking_log_entries: 65535
"#;
        let config: DashboardConfig = serde_yaml::from_str(yaml).unwrap();
        let errors = ConfigValidator::validate(&config).unwrap_err();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].to_string(), "limits.usage_log_entries: Must be at most 1000");
        assert_eq!(errors[1].field, "limits.raking_log_entries");
    }

    #[test]
    fn test_plain_tcp_ignores_path() {
        let mut config = DashboardConfig::default();
        config.broker.use_websocket = false;
        config.broker.path = String::new();

        assert!(ConfigValidator::validate(&config).is_ok());
    }
}
