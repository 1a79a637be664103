#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod export;
pub mod file_system;
pub mod memory;
pub mod plan;

#[cfg(test)]
mod tests {
    pub mod data;
}
