use serde::{Deserialize, Serialize};

/// Metadata carried in the front-matter block of a resolution.
///
/// Every field is a plain string. A key missing from the front matter is
/// represented by an empty string, never by an absent value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionMetadata {
    pub title: String,
    /// Date in `YYYY-MM-DD` form.
    #[serde(rename = "Datum")]
    pub date: String,
    /// Comma separated list of sponsoring countries.
    #[serde(rename = "Lander")]
    pub countries: String,
    /// Committee abbreviation, see [`crate::committee::COMMITTEES`].
    #[serde(rename = "Ausschuss")]
    pub committee: String,
    /// Document type, e.g. "Resolutionsentwurf".
    #[serde(rename = "Typ")]
    pub kind: String,
}

impl ResolutionMetadata {
    /// Assigns a front-matter value by its key. Returns `false` for unknown keys.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> bool {
        let slot = match key {
            "title" => &mut self.title,
            "Datum" => &mut self.date,
            "Lander" => &mut self.countries,
            "Ausschuss" => &mut self.committee,
            "Typ" => &mut self.kind,
            _ => return false,
        };
        *slot = value.into();
        true
    }
}

/// A parsed resolution: metadata plus the markdown body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub metadata: ResolutionMetadata,
    pub content: String,
}
