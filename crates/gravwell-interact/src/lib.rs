//! # gravwell-interact
//!
//! Pointer interaction with the bodies on the fabric.
//!
//! The pipeline is split the same way a renderer splits it:
//! 1. **Pick ray**: a [`RayCaster`] turns a normalized device coordinate into a world ray
//! 2. **Picking** [`pick_nearest`] tests the ray against every body's sphere
//! 3. **Drag** [`DragController`] moves the selected body across a plane parallel to the fabric
//!
//! Camera and orbit controls are seams ([`RayCaster`], [`NavigationControl`]),
//! so the controller runs headless in tests and against Bevy in the viewer.

pub mod camera;
pub mod drag;
pub mod picking;

pub use camera::{ndc_from_cursor, PerspectiveCamera, RayCaster};
pub use drag::{DragController, DragState, NavigationControl};
pub use picking::{pick_nearest, PickHit};
