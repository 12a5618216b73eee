//! Environment handling shared by the debench crates

pub mod constants;
pub mod env_utils;
