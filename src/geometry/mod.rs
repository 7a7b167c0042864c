//! Shape and arc geometry builders
//!
//! Pure, deterministic constructors turning configuration descriptors into
//! concrete 2D geometry. Nothing here touches randomness or the config
//! document; callers pass centers, radii, and angles explicitly.

pub mod arc;
pub mod path;

pub use arc::{ArcDescriptor, generate_arc};
pub use path::{PathDescriptor, generate_shape_path};
