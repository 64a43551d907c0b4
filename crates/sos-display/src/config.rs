use serde::{Deserialize, Serialize};

use crate::{format::ValueFormat, uom::UomTable};

/// Settings shared by everything that renders observation values.
///
/// Every field is optional when deserialising; missing ones take their
/// defaults.
///
/// ```
/// use sos_display::config::DisplayConfig;
///
/// let config: DisplayConfig =
///     serde_json::from_str(r#"{"uom": {"hPa": "hPa (mbar)"}, "values": {"digits": 1}}"#).unwrap();
/// assert_eq!(config.uom.display("hPa"), "hPa (mbar)");
/// assert_eq!(config.values.format(3.14159), "3.1");
/// ```
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Unit display strings.
    pub uom: UomTable,
    /// Value formatting.
    pub values: ValueFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        let config: DisplayConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, DisplayConfig::default());
        assert_eq!(config.uom.display("Cel"), "°C");
    }

    #[test]
    fn test_uom_replaces_default_table() {
        let config: DisplayConfig = serde_json::from_str(r#"{"uom": {}}"#).unwrap();
        assert_eq!(config.uom.display("Cel"), "Cel");
    }
}
