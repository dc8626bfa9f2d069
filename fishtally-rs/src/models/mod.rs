mod fish;
mod fish_list;
mod species;

pub use fish::Fish;
pub use fish_list::FishList;
pub use species::{Species, Subtype};
