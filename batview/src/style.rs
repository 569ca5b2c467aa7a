use log::warn;

use serde::{Deserialize, Deserializer, Serialize};

use crate::color::Rgba;
use crate::status::BatteryStatus;

/// Construction-time attributes of a [`crate::view::BatteryView`].
///
/// Every attribute is optional in the serialized form; missing ones fall
/// back to an opaque white, fully charged, working battery.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BatteryStyle {
    pub battery_color: Rgba,
    pub battery_power: i32,
    #[serde(deserialize_with = "status_or_default")]
    pub battery_status: BatteryStatus,
}

impl BatteryStyle {
    pub const fn new() -> Self {
        Self {
            battery_color: Rgba::WHITE,
            battery_power: 100,
            battery_status: BatteryStatus::Work,
        }
    }
}

impl Default for BatteryStyle {
    fn default() -> Self {
        Self::new()
    }
}

/// Unknown status codes fall back to the default status, like
/// [`crate::view::BatteryView::set_battery_status`] ignores them.
fn status_or_default<'de, D>(deserializer: D) -> Result<BatteryStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let code = i32::deserialize(deserializer)?;

    Ok(BatteryStatus::try_from(code).unwrap_or_else(|e| {
        warn!("Ignoring battery status attribute: {}", e);

        BatteryStatus::default()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_attributes_use_defaults() {
        let style: BatteryStyle = serde_json::from_str("{}").unwrap();

        assert_eq!(style, BatteryStyle::new());
        assert_eq!(style.battery_color, Rgba::WHITE);
        assert_eq!(style.battery_power, 100);
        assert_eq!(style.battery_status, BatteryStatus::Work);
    }

    #[test]
    fn host_attribute_names() {
        let style: BatteryStyle = serde_json::from_str(
            r#"{ "batteryColor": 4294901760, "batteryPower": 42, "batteryStatus": 2 }"#,
        )
        .unwrap();

        assert_eq!(style.battery_color, Rgba::RED);
        assert_eq!(style.battery_power, 42);
        assert_eq!(style.battery_status, BatteryStatus::Charge);
    }

    #[test]
    fn partial_attributes() {
        let style: BatteryStyle = serde_json::from_str(r#"{ "batteryStatus": 1 }"#).unwrap();

        assert_eq!(style.battery_status, BatteryStatus::Loss);
        assert_eq!(style.battery_power, 100);
    }

    #[test]
    fn signed_host_color() {
        let style: BatteryStyle = serde_json::from_str(r#"{ "batteryColor": -65536 }"#).unwrap();

        assert_eq!(style.battery_color, Rgba::RED);
        assert_eq!(style.battery_power, 100);
    }

    #[test]
    fn unknown_status_falls_back_to_work() {
        let style: BatteryStyle =
            serde_json::from_str(r#"{ "batteryStatus": 5, "batteryPower": 12 }"#).unwrap();

        assert_eq!(style.battery_status, BatteryStatus::Work);
        assert_eq!(style.battery_power, 12);

        // Wrong type is still a malformed style
        assert!(serde_json::from_str::<BatteryStyle>(r#"{ "batteryStatus": "charge" }"#).is_err());
    }
}
