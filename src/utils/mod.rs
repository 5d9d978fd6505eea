// Shared utils

pub mod constants;

pub use constants::*;
