use std::env;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub schedule: ScheduleConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// `sqlite://path/to/file.db` or a bare file path.
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleConfig {
    /// First hour shown on the board (inclusive).
    pub open_hour: u32,
    /// Last hour shown on the board (exclusive).
    pub close_hour: u32,
    /// Court ids, in display order.
    pub courts: Vec<i64>,
    /// Substring of a booking note that marks the booking as waiting for payment.
    pub pending_marker: String,
    pub venue_name: String,
    /// Offset of the venue's civil clock from UTC. Asia/Bangkok is a fixed +7.
    pub utc_offset_hours: i32,
    pub default_lang: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let schedule = ScheduleConfig {
            open_hour: env::var("SCHEDULE_OPEN_HOUR")
                .unwrap_or_else(|_| "15".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SCHEDULE_OPEN_HOUR".to_string()))?,
            close_hour: env::var("SCHEDULE_CLOSE_HOUR")
                .unwrap_or_else(|_| "23".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SCHEDULE_CLOSE_HOUR".to_string()))?,
            courts: parse_courts(&env::var("COURTS").unwrap_or_else(|_| "1,2,3,4".to_string()))
                .ok_or_else(|| ConfigError::InvalidValue("COURTS".to_string()))?,
            pending_marker: env::var("PENDING_MARKER").unwrap_or_else(|_| "รอ".to_string()),
            venue_name: env::var("VENUE_NAME")
                .unwrap_or_else(|_| "LANGSUAN BADMINTON HALL".to_string()),
            utc_offset_hours: env::var("UTC_OFFSET_HOURS")
                .unwrap_or_else(|_| "7".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("UTC_OFFSET_HOURS".to_string()))?,
            default_lang: env::var("DEFAULT_LANG").unwrap_or_else(|_| "th".to_string()),
        };
        schedule.validate()?;

        Ok(Config {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8080".to_string())
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("PORT".to_string()))?,
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "sqlite://badminton_courts.db".to_string()),
            },
            schedule,
        })
    }
}

impl ScheduleConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.close_hour > 24 || self.open_hour >= self.close_hour {
            return Err(ConfigError::InvalidValue(
                "SCHEDULE_OPEN_HOUR/SCHEDULE_CLOSE_HOUR".to_string(),
            ));
        }
        if !(-12..=14).contains(&self.utc_offset_hours) {
            return Err(ConfigError::InvalidValue("UTC_OFFSET_HOURS".to_string()));
        }
        Ok(())
    }
}

/// Parse a comma separated list of court ids, e.g. `"1, 2,3"`.
fn parse_courts(raw: &str) -> Option<Vec<i64>> {
    let courts = raw
        .split(',')
        .map(|part| part.trim().parse::<i64>().ok())
        .collect::<Option<Vec<_>>>()?;

    if courts.is_empty() {
        None
    } else {
        Some(courts)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            database: DatabaseConfig {
                url: "sqlite://badminton_courts.db".to_string(),
            },
            schedule: ScheduleConfig::default(),
        }
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        ScheduleConfig {
            open_hour: 15,
            close_hour: 23,
            courts: vec![1, 2, 3, 4],
            pending_marker: "รอ".to_string(),
            venue_name: "LANGSUAN BADMINTON HALL".to_string(),
            utc_offset_hours: 7,
            default_lang: "th".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_courts_accepts_spaces() {
        assert_eq!(parse_courts("1, 2,3 ,4"), Some(vec![1, 2, 3, 4]));
    }

    #[test]
    fn parse_courts_rejects_garbage() {
        assert_eq!(parse_courts("1,two"), None);
        assert_eq!(parse_courts(""), None);
    }

    #[test]
    fn default_schedule_is_valid() {
        assert!(ScheduleConfig::default().validate().is_ok());
    }

    #[test]
    fn inverted_hours_are_rejected() {
        let schedule = ScheduleConfig {
            open_hour: 20,
            close_hour: 18,
            ..ScheduleConfig::default()
        };
        assert!(schedule.validate().is_err());

        let schedule = ScheduleConfig {
            close_hour: 25,
            ..ScheduleConfig::default()
        };
        assert!(schedule.validate().is_err());
    }
}
