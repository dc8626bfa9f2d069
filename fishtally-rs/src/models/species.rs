use num_derive::FromPrimitive;
use num_traits::FromPrimitive as _;
use serde_repr::{Deserialize_repr, Serialize_repr};
use strum::{AsRefStr, EnumCount, EnumIter, EnumString};

use crate::error::error::{InvalidSpeciesCodeSnafu, InvalidSubtypeCodeSnafu};
use crate::{Error, Result};

/// The species classifications produced by the counting model, keyed by their
/// raw integer codes.
#[allow(missing_docs)]
#[repr(i32)]
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    FromPrimitive,
    Eq,
    Hash,
    Ord,
    PartialOrd,
    EnumIter,
    EnumCount,
    Serialize_repr,
    Deserialize_repr,
    strum::Display,
    AsRefStr,
    EnumString,
)]
pub enum Species {
    Unknown = 0,
    Flounder = 1,
    Skate = 2,
    Cod = 3,
    Haddock = 4,
}

/// Sub-classifications within a species, keyed by their raw integer codes.
/// All known species currently share the same subtype table; `Unknown` has an
/// empty one and resolves no code.
#[allow(missing_docs)]
#[repr(i32)]
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    FromPrimitive,
    Eq,
    Hash,
    Ord,
    PartialOrd,
    EnumIter,
    EnumCount,
    Serialize_repr,
    Deserialize_repr,
    strum::Display,
    AsRefStr,
    EnumString,
)]
pub enum Subtype {
    Unknown = 0,
    SubType1 = 1,
    SubType2 = 2,
}

impl Species {
    /// Returns the display name of the species.
    pub fn name(&self) -> &'static str {
        match self {
            Species::Unknown => "Unknown",
            Species::Flounder => "Flounder",
            Species::Skate => "Skate",
            Species::Cod => "Cod",
            Species::Haddock => "Haddock",
        }
    }

    /// Resolves a subtype code against this species' subtype table.
    /// `Unknown` has no subtypes, so every code fails for it.
    pub fn subtype_from_code(&self, code: i32) -> Result<Subtype> {
        match self {
            Species::Unknown => InvalidSubtypeCodeSnafu {
                species: *self,
                code,
            }
            .fail(),
            _ => Subtype::from_i32(code).ok_or_else(|| {
                InvalidSubtypeCodeSnafu {
                    species: *self,
                    code,
                }
                .build()
            }),
        }
    }
}

impl Subtype {
    /// Returns the display name of the subtype.
    pub fn name(&self) -> &'static str {
        match self {
            Subtype::Unknown => "Unknown",
            Subtype::SubType1 => "subType1",
            Subtype::SubType2 => "subType2",
        }
    }
}

impl TryFrom<i32> for Species {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self> {
        Self::from_i32(value).ok_or_else(|| InvalidSpeciesCodeSnafu { code: value }.build())
    }
}

impl From<Species> for i32 {
    fn from(value: Species) -> Self {
        value as i32
    }
}

impl From<Subtype> for i32 {
    fn from(value: Subtype) -> Self {
        value as i32
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn all_species_codes_resolve_to_their_labels() {
        let expected = [
            (0, "Unknown"),
            (1, "Flounder"),
            (2, "Skate"),
            (3, "Cod"),
            (4, "Haddock"),
        ];

        for (code, label) in expected {
            let species = Species::try_from(code).unwrap();
            assert_eq!(label, species.name());
            assert_eq!(code, i32::from(species));
        }
    }

    #[test]
    fn species_codes_outside_the_table_are_rejected() {
        for code in [-1, 5, 100] {
            assert!(matches!(
                Species::try_from(code),
                Err(Error::InvalidSpeciesCode { .. })
            ));
        }
    }

    #[test]
    fn known_species_share_the_same_subtype_table() {
        let expected = [(0, "Unknown"), (1, "subType1"), (2, "subType2")];

        for species in Species::iter().filter(|s| *s != Species::Unknown) {
            for (code, label) in expected {
                assert_eq!(label, species.subtype_from_code(code).unwrap().name());
            }
            assert!(matches!(
                species.subtype_from_code(3),
                Err(Error::InvalidSubtypeCode { .. })
            ));
        }
    }

    #[test]
    fn unknown_species_resolves_no_subtype_code() {
        for code in [0, 1, 2, 7] {
            assert!(matches!(
                Species::Unknown.subtype_from_code(code),
                Err(Error::InvalidSubtypeCode { .. })
            ));
        }
    }
}
