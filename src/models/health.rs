use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Liveness payload returned by the health endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub status: u16,
    pub status_message: String,
    pub timestamp: String,
    pub ip_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub echo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_echo: Option<String>,
}

impl Health {
    /// Build a successful health payload stamped with the current UTC time
    pub fn ok(ip_address: String, echo: Option<String>, path_echo: Option<String>) -> Self {
        Self {
            status: 200,
            status_message: "OK".to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            ip_address,
            echo,
            path_echo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_ok() {
        let health = Health::ok("10.0.0.5".to_string(), Some("ping".to_string()), None);

        assert_eq!(health.status, 200);
        assert_eq!(health.status_message, "OK");
        assert!(health.timestamp.ends_with('Z'));
        assert!(chrono::DateTime::parse_from_rfc3339(&health.timestamp).is_ok());
    }

    #[test]
    fn test_health_omits_absent_echoes() {
        let health = Health::ok("10.0.0.5".to_string(), None, None);
        let value = serde_json::to_value(&health).unwrap();

        assert!(value.get("echo").is_none());
        assert!(value.get("path_echo").is_none());
    }

    #[test]
    fn test_health_keeps_empty_echo() {
        let health = Health::ok("10.0.0.5".to_string(), Some(String::new()), Some("x".into()));
        let value = serde_json::to_value(&health).unwrap();

        assert_eq!(value["echo"], "");
        assert_eq!(value["path_echo"], "x");
    }
}
