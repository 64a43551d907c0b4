//! Display names for SOS identifiers.
//!
//! Observed properties are identified by URNs such as
//! `urn:ogc:def:phenomenon:OGC:1.0.30:air_temperature`. Each helper comes in a
//! scalar form and a sequence form that applies the scalar one element-wise.
//!
//! ```
//! use sos_display::names::{to_display_name, to_title_case, urn_to_name};
//!
//! let urn = "urn:ogc:def:phenomenon:OGC:1.0.30:air_temperature";
//! let name = urn_to_name(urn);
//! assert_eq!(name, "air_temperature");
//! assert_eq!(to_display_name(name), "air temperature");
//! assert_eq!(to_title_case(&to_display_name(name)), "Air Temperature");
//! ```

/// Strips everything up to and including the last `:`.
#[must_use]
pub fn urn_to_name(urn: &str) -> &str {
    urn.rsplit_once(':').map_or(urn, |(_, name)| name)
}

pub fn urns_to_names<S>(urns: &[S]) -> Vec<String>
where
    S: AsRef<str>,
{
    urns.iter()
        .map(|urn| urn_to_name(urn.as_ref()).to_owned())
        .collect()
}

/// Replaces underscores with spaces.
#[must_use]
pub fn to_display_name(name: &str) -> String {
    name.replace('_', " ")
}

pub fn to_display_names<S>(names: &[S]) -> Vec<String>
where
    S: AsRef<str>,
{
    names.iter().map(|n| to_display_name(n.as_ref())).collect()
}

/// Upper-cases the first character of every space-separated word.
///
/// Only single spaces separate words, so runs of spaces are kept as they are.
#[must_use]
pub fn to_title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, word) in text.split(' ').enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

pub fn to_title_case_all<S>(texts: &[S]) -> Vec<String>
where
    S: AsRef<str>,
{
    texts.iter().map(|t| to_title_case(t.as_ref())).collect()
}

/// Finds the URN in `urns` whose name part equals `name`.
///
/// The first match wins. When nothing matches, `name` itself is returned.
///
/// ```
/// # use sos_display::names::lookup_urn_from_name;
/// let urns = [
///     "urn:ogc:def:phenomenon:OGC:1.0.30:wind_speed",
///     "urn:ogc:def:phenomenon:OGC:1.0.30:air_temperature",
/// ];
/// assert_eq!(lookup_urn_from_name("air_temperature", &urns), urns[1]);
/// assert_eq!(lookup_urn_from_name("humidity", &urns), "humidity");
/// ```
#[must_use]
pub fn lookup_urn_from_name<'a, S>(name: &'a str, urns: &'a [S]) -> &'a str
where
    S: AsRef<str>,
{
    urns.iter()
        .map(AsRef::as_ref)
        .find(|urn| urn_to_name(urn) == name)
        .unwrap_or(name)
}

pub fn lookup_urns_from_names<N, S>(names: &[N], urns: &[S]) -> Vec<String>
where
    N: AsRef<str>,
    S: AsRef<str>,
{
    names
        .iter()
        .map(|name| lookup_urn_from_name(name.as_ref(), urns).to_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urn_to_name() {
        assert_eq!(urn_to_name("urn:x:wind_speed"), "wind_speed");
        assert_eq!(urn_to_name("no_colon"), "no_colon");
        assert_eq!(urn_to_name("trailing:"), "");
    }

    #[test]
    fn test_sequences_keep_order() {
        let urns = ["urn:a:b_c", "urn:d:e", "f"];
        assert_eq!(urns_to_names(&urns), vec!["b_c", "e", "f"]);
        assert_eq!(to_display_names(&["a_b", "c"]), vec!["a b", "c"]);
        assert_eq!(
            to_title_case_all(&["wind speed", "x"]),
            vec!["Wind Speed", "X"]
        );
    }

    #[test]
    fn test_title_case_edge_cases() {
        assert_eq!(to_title_case(""), "");
        assert_eq!(to_title_case("a  b"), "A  B");
        assert_eq!(to_title_case("élan vital"), "Élan Vital");
        assert_eq!(to_title_case("sea_surface temp"), "Sea_surface Temp");
    }

    #[test]
    fn test_lookup_first_match_wins() {
        let urns = ["urn:one:depth", "urn:two:depth"];
        assert_eq!(lookup_urn_from_name("depth", &urns), "urn:one:depth");
    }

    #[test]
    fn test_lookup_many() {
        let urns = vec!["urn:x:a".to_owned(), "urn:x:b".to_owned()];
        assert_eq!(
            lookup_urns_from_names(&["b", "z", "a"], &urns),
            vec!["urn:x:b", "z", "urn:x:a"]
        );
    }
}
