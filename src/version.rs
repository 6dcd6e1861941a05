// Crate identity, resolved at build time

/// Version from Cargo.toml, logged at export startup.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Binary name from Cargo.toml.
pub const NAME: &str = env!("CARGO_PKG_NAME");
