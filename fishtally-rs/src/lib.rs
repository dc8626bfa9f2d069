#![deny(warnings)]
#![deny(rust_2018_idioms)]

//! Implements the record types used to keep statistics on fish counted in a video

mod error;
mod models;

pub use error::{Error, Result};
pub use models::*;
