//! Host-facing side of the engine: filesystem discovery and the
//! interpreter capability probe.

pub mod depth;
pub mod locator;
