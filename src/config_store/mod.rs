//! Persistence of the machine configuration file.
//!
//! Loads, validates and saves the JSON configuration at a fixed path. Loads
//! degrade to the default server configuration instead of failing, and the
//! server-role load repairs the file on disk.

mod atomic_write;
mod store;

#[cfg(test)]
mod tests;

pub use atomic_write::write_atomically;
pub use store::ConfigStore;
