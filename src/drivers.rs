//! Peripheral Drivers
//!
//! Drivers for external ICs on the front panel board.
//! These provide domain-specific abstractions over the HAL layer.

pub mod mcp3008;
