//! Virtual site configuration.

use serde::Deserialize;

/// Times the virtual site offers for one duration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SlotOffer {
    /// Duration in minutes, e.g. `120`.
    pub duration: u16,
    /// Bookable start times, e.g. `["6:30pm"]`.
    pub times: Vec<String>,
}

/// Configuration for the virtual club site.
///
/// ```toml
/// [[virtual.slots]]
/// duration = 90
/// times = ["6:30pm", "9:00am"]
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VirtualSiteConfig {
    /// Availability per duration. Durations not listed have none.
    pub slots: Vec<SlotOffer>,
}

impl Default for VirtualSiteConfig {
    fn default() -> Self {
        Self {
            slots: vec![SlotOffer {
                duration: 120,
                times: vec!["7:00pm".to_string(), "9:00am".to_string()],
            }],
        }
    }
}

impl VirtualSiteConfig {
    /// Times offered for `duration`, empty when there are none.
    #[must_use]
    pub fn times_for(&self, duration: u16) -> Vec<String> {
        self.slots
            .iter()
            .filter(|offer| offer.duration == duration)
            .flat_map(|offer| offer.times.iter().cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_offer_primary_duration_by_default() {
        let config = VirtualSiteConfig::default();
        assert_eq!(config.times_for(120), vec!["7:00pm", "9:00am"]);
        assert!(config.times_for(90).is_empty());
    }

    #[test]
    fn should_deserialize_from_toml() {
        let toml = r#"
            [[slots]]
            duration = 90
            times = ["6:30pm"]

            [[slots]]
            duration = 120
            times = []
        "#;
        let config: VirtualSiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.times_for(90), vec!["6:30pm"]);
        assert!(config.times_for(120).is_empty());
    }

    #[test]
    fn should_use_defaults_for_missing_fields() {
        let config: VirtualSiteConfig = toml::from_str("").unwrap();
        assert_eq!(config.slots.len(), 1);
    }
}
