//! Host identity

mod system_profile;

pub use system_profile::{format_ram, SystemProfile};
