use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Display strings for units of measure.
///
/// SOS reports units as UCUM codes (see <http://unitsofmeasure.org/>). This
/// table maps the codes that have a nicer rendering; every other code is
/// displayed as is.
///
/// The table is a plain value: build one, extend it and hand it to whatever
/// renders units.
///
/// # Examples
///
/// ```
/// use sos_display::uom::UomTable;
///
/// let mut table = UomTable::default();
/// assert_eq!(table.display("Cel"), "°C");
/// assert_eq!(table.display("unknown_unit"), "unknown_unit");
///
/// table.insert("hPa", "hectopascal");
/// assert_eq!(table.display_all(&["hPa", "m/s"]), vec!["hectopascal", "m s⁻¹"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UomTable {
    titles: BTreeMap<String, String>,
}

impl Default for UomTable {
    fn default() -> Self {
        Self::from_iter([("Cel", "°C"), ("m/s", "m s⁻¹")])
    }
}

impl UomTable {
    /// A table that maps nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            titles: BTreeMap::new(),
        }
    }

    /// Adds or replaces the display string for `uom`.
    pub fn insert(&mut self, uom: impl Into<String>, title: impl Into<String>) {
        self.titles.insert(uom.into(), title.into());
    }

    /// Display string for `uom`, or `uom` itself when it is not in the table.
    #[must_use]
    pub fn display<'a>(&'a self, uom: &'a str) -> &'a str {
        self.titles.get(uom).map_or(uom, String::as_str)
    }

    pub fn display_all<S>(&self, uoms: &[S]) -> Vec<String>
    where
        S: AsRef<str>,
    {
        uoms.iter()
            .map(|uom| self.display(uom.as_ref()).to_owned())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.titles.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for UomTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            titles: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let table = UomTable::default();
        assert_eq!(table.display("Cel"), "°C");
        assert_eq!(table.display("m/s"), "m s⁻¹");
        assert_eq!(table.display("K"), "K");
    }

    #[test]
    fn test_empty_table_passes_everything_through() {
        let table = UomTable::empty();
        assert_eq!(table.display("Cel"), "Cel");
        assert_eq!(table.iter().count(), 0);
    }

    #[test]
    fn test_insert_overrides() {
        let mut table = UomTable::default();
        table.insert("Cel", "deg C");
        assert_eq!(table.display("Cel"), "deg C");
    }

    #[test]
    fn test_deserializes_from_plain_object() {
        let table: UomTable = serde_json::from_str(r#"{"%": "percent"}"#).unwrap();
        assert_eq!(table.display("%"), "percent");
        assert_eq!(table.display("Cel"), "Cel");
    }
}
