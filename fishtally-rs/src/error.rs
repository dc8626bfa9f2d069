use snafu::{Location, Snafu};

use crate::Species;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(module, visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Encountered a species code with no label entry '{code}'"))]
    InvalidSpeciesCode {
        #[snafu(implicit)]
        location: Location,
        code: i32,
    },
    #[snafu(display(
        "Encountered a subtype code with no label entry '{code}' for species '{species}'"
    ))]
    InvalidSubtypeCode {
        #[snafu(implicit)]
        location: Location,
        species: Species,
        code: i32,
    },
}
