//! Radio Control Logic
//!
//! State machines and business logic for the tuning dial.
//! Implements the functional core of the appliance.

pub mod state;
pub mod station_map;
pub mod stations;
pub mod tuner;
