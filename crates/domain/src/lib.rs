#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod catalog;
mod error;
mod exercise;
mod export;
mod goal;
mod plan;
mod prescription;
mod selection;
mod split;

pub use catalog::*;
pub use error::*;
pub use exercise::*;
pub use export::*;
pub use goal::*;
pub use plan::*;
pub use prescription::*;
pub use selection::*;
pub use split::*;
