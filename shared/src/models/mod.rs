//! Domain models for the Farm Advisory Platform

mod assessment;
mod crop;
mod farm;
mod forecast;

pub use assessment::*;
pub use crop::*;
pub use farm::*;
pub use forecast::*;
