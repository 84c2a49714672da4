pub mod errors;
pub mod ports;
pub mod regions;
pub mod shop;
