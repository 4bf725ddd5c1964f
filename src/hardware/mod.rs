//! 硬件外设
pub mod led;
