pub mod apartment;
pub mod building;
