// Library exports for testing
// The binary (main.rs) imports these as well

pub mod controller;
pub mod error;
pub mod logger;
pub mod render;
