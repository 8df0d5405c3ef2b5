pub mod campaign;
pub mod creative;
pub mod generation;
