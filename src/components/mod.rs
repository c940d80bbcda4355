//! Page components.

pub mod credentials;
pub mod nav;
pub mod reveal;
pub mod sections;
pub mod starfield;
