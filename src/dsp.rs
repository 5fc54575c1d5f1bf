//! Digital Signal Processing
//!
//! Conditioning applied to the tuning dial signal:
//! - Moving average smoothing of raw ADC samples

pub mod filter;
