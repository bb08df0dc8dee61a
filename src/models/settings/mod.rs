// Settings module
// Display preferences for the availability grid and suggestion labels

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// IANA timezone used for suggestion labels and custom poll times.
    pub display_timezone: Option<String>,
    pub time_format: String,
    pub first_day_of_week: u8,
    pub hour_range_start: u8,
    pub hour_range_end: u8,
    pub suggestion_limit: usize,
    /// Local hours offered when no aggregated interest data exists.
    pub fallback_hours: Vec<u8>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display_timezone: None,
            time_format: "12h".to_string(),
            first_day_of_week: 0, // Sunday
            hour_range_start: 0,
            hour_range_end: 24,
            suggestion_limit: 10,
            fallback_hours: vec![19, 20],
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if self.time_format != "12h" && self.time_format != "24h" {
            return Err(format!("Unknown time format: {}", self.time_format));
        }

        if self.first_day_of_week > 6 {
            return Err("First day of week must be 0 (Sunday) through 6 (Saturday)".to_string());
        }

        if self.hour_range_start >= self.hour_range_end || self.hour_range_end > 24 {
            return Err(format!(
                "Hour range {}..{} must satisfy 0 <= start < end <= 24",
                self.hour_range_start, self.hour_range_end
            ));
        }

        if let Some(hour) = self.fallback_hours.iter().find(|hour| **hour > 23) {
            return Err(format!("Fallback hour {} is out of range", hour));
        }

        if let Some(ref tz) = self.display_timezone {
            if tz.parse::<chrono_tz::Tz>().is_err() {
                return Err(format!("Unknown timezone: {}", tz));
            }
        }

        Ok(())
    }

    pub fn timezone(&self) -> Option<chrono_tz::Tz> {
        self.display_timezone
            .as_deref()
            .and_then(crate::utils::date::parse_timezone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_hour_range() {
        let settings = Settings {
            hour_range_start: 20,
            hour_range_end: 8,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_unknown_timezone() {
        let settings = Settings {
            display_timezone: Some("Mars/Olympus_Mons".to_string()),
            ..Settings::default()
        };
        assert!(settings.validate().unwrap_err().contains("Unknown timezone"));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str("time_format = \"24h\"").unwrap();
        assert_eq!(settings.time_format, "24h");
        assert_eq!(settings.hour_range_end, 24);
        assert_eq!(settings.fallback_hours, vec![19, 20]);
    }
}
