pub mod apartments;
pub mod buildings;
