// Re-export glam for convenience
pub use glam::*;

// raylet math types
mod interval;
mod transform;
pub use interval::Interval;
pub use transform::Mat4Ext;
