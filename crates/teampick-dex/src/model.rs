//! Response models for the PokeAPI endpoints this client touches.

use serde::Deserialize;

/// Envelope of the roster listing endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct ListResponse {
    pub results: Vec<SpeciesRef>,
}

/// One entry of the roster listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SpeciesRef {
    /// The Pokemon's name, unique within the roster.
    pub name: String,
    /// Detail URL for the entry.
    #[serde(default)]
    pub url: String,
}

/// Per-Pokemon detail, a small slice of the full API response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Profile {
    /// National dex number.
    pub id: u32,
    /// The Pokemon's name.
    pub name: String,
    /// Height in decimeters.
    #[serde(default)]
    pub height: u32,
    /// Weight in hectograms.
    #[serde(default)]
    pub weight: u32,
    /// Sprite URLs.
    #[serde(default)]
    pub sprites: Sprites,
    /// Type slots.
    #[serde(default, rename = "types")]
    pub type_slots: Vec<TypeSlot>,
}

impl Profile {
    /// The default front sprite URL, if the API has one.
    #[must_use]
    pub fn sprite(&self) -> Option<&str> {
        self.sprites.front_default.as_deref()
    }

    /// Type names in slot order.
    #[must_use]
    pub fn type_names(&self) -> Vec<&str> {
        let mut slots: Vec<&TypeSlot> = self.type_slots.iter().collect();
        slots.sort_by_key(|s| s.slot);
        slots.iter().map(|s| s.kind.name.as_str()).collect()
    }
}

/// Sprite URL block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Sprites {
    /// The default front-facing sprite.
    #[serde(default)]
    pub front_default: Option<String>,
}

/// One type slot of a profile.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeSlot {
    /// 1-based slot index.
    pub slot: u32,
    /// The named type resource.
    #[serde(rename = "type")]
    pub kind: NamedRef,
}

/// A named API resource reference.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedRef {
    /// Resource name.
    pub name: String,
}
