//! CLI library components for the investor timeline renderer.

pub mod axis;
pub mod logging;
pub mod request;
