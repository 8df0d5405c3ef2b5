//! Campaign tone of voice.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The tone a campaign's copy and imagery should strike.
///
/// Request bodies carry the lower-case form (`"exciting"`); storage keeps
/// the upper-case form (`"EXCITING"`), see [`Tone::stored`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Professional,
    Casual,
    Exciting,
    Trustworthy,
}

impl Tone {
    /// Lower-case wire name, as accepted in request bodies and used in prompts.
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Exciting => "exciting",
            Tone::Trustworthy => "trustworthy",
        }
    }

    /// Upper-case value written to the `campaigns.tone` column.
    pub fn stored(self) -> &'static str {
        match self {
            Tone::Professional => "PROFESSIONAL",
            Tone::Casual => "CASUAL",
            Tone::Exciting => "EXCITING",
            Tone::Trustworthy => "TRUSTWORTHY",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
