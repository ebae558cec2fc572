

/// Integer arithmetic, logic and HI/LO.
pub mod execution;

/// Loads and stores.
pub mod memory;
