//! Decorative "neural" starfield behind the page.
//!
//! Renders a field of slowly drifting particles on a full-viewport canvas:
//! - Particle count scales with viewport area (denser on narrow screens)
//! - Particles bounce off the viewport edges
//! - Nearby pairs are joined by faint lines that fade with distance
//! - The field is rebuilt after the window stops resizing
//!
//! The simulation and lifecycle are independent of the browser: [`Animator`]
//! talks to the outside world through the [`Host`] and [`Surface`] traits.
//!
//! # Example
//!
//! ```ignore
//! use portfolio::components::starfield::StarfieldCanvas;
//!
//! view! { <StarfieldCanvas /> }
//! ```

pub mod animator;
mod browser;
mod component;
pub mod field;
pub mod render;
pub mod theme;

pub use animator::{Animator, FrameHandle, Host, TimerHandle, Viewport};
pub use component::StarfieldCanvas;
pub use field::{FieldParams, Particle, ParticleField, Tone};
pub use render::Surface;
pub use theme::{Color, StarfieldTheme};
