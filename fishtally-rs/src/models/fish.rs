use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::error::InvalidSubtypeCodeSnafu;
use crate::{Result, Species, Subtype};

/// A single fish observation: what was counted and at which video frame.
///
/// The species and subtype labels are carried by the enums themselves and can
/// never disagree with their codes. A record with species [`Species::Unknown`]
/// has no resolved subtype since that species' subtype table is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fish {
    species: Species,
    subtype_code: i32,
    subtype: Option<Subtype>,
    frame_counted: i64,
}

impl Fish {
    /// Creates a new observation from raw species and subtype codes.
    ///
    /// Fails if the species code has no label entry, or if the subtype code
    /// is not valid for the resolved species. The one exception is species
    /// `Unknown`: its subtype table is empty, so construction succeeds with
    /// an unresolved subtype and [`Fish::subtype_label`] fails instead.
    pub fn new(species_code: i32, subtype_code: i32, frame_counted: i64) -> Result<Self> {
        let species = Species::try_from(species_code)?;

        let subtype = match species {
            Species::Unknown => {
                if subtype_code != 0 {
                    warn!("subtype code {subtype_code} cannot be resolved for an unknown species");
                }
                None
            }
            _ => Some(species.subtype_from_code(subtype_code)?),
        };

        Ok(Self {
            species,
            subtype_code,
            subtype,
            frame_counted,
        })
    }

    /// Re-resolves the species from a raw code.
    ///
    /// The stored subtype code is re-resolved against the new species' subtype
    /// table in the same step, so the subtype can never refer to the previous
    /// species. On failure the record is left unchanged.
    pub fn set_species_code(&mut self, code: i32) -> Result<()> {
        let species = Species::try_from(code)?;

        let subtype = match species {
            Species::Unknown => None,
            _ => Some(species.subtype_from_code(self.subtype_code)?),
        };

        self.species = species;
        self.subtype = subtype;
        Ok(())
    }

    /// Re-resolves the subtype from a raw code using the current species'
    /// subtype table. Always fails for species `Unknown`.
    pub fn set_subtype_code(&mut self, code: i32) -> Result<()> {
        self.subtype = Some(self.species.subtype_from_code(code)?);
        self.subtype_code = code;
        Ok(())
    }

    /// Stores the frame index verbatim, no range check.
    pub fn set_frame_counted(&mut self, frame: i64) {
        self.frame_counted = frame;
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn species_code(&self) -> i32 {
        self.species as i32
    }

    pub fn species_label(&self) -> &'static str {
        self.species.name()
    }

    pub fn subtype(&self) -> Option<Subtype> {
        self.subtype
    }

    pub fn subtype_code(&self) -> i32 {
        self.subtype_code
    }

    /// Returns the display name of the subtype, failing when the species is
    /// `Unknown` and no subtype could be resolved.
    pub fn subtype_label(&self) -> Result<&'static str> {
        match self.subtype {
            Some(subtype) => Ok(subtype.name()),
            None => InvalidSubtypeCodeSnafu {
                species: self.species,
                code: self.subtype_code,
            }
            .fail(),
        }
    }

    pub fn frame_counted(&self) -> i64 {
        self.frame_counted
    }
}

impl Default for Fish {
    fn default() -> Self {
        Self {
            species: Species::Unknown,
            subtype_code: 0,
            subtype: None,
            frame_counted: 0,
        }
    }
}
