//! Campaign prize-wheel configuration core.
//!
//! Campaigns store wheel configuration in several historically-drifted
//! shapes. This crate merges those sparse sources, in caller-supplied
//! precedence order, on top of a baseline and produces one fully-specified
//! [`WheelSpec`] ready to hand to a rendering capability. Resolution is
//! pure: no I/O, no shared state, and any validation failure returns a
//! [`ResolutionError`] instead of a spec.

pub mod campaign;
pub mod constants;
pub mod error;
pub mod partial;
pub mod resolver;
pub mod source;
pub mod templates;
pub mod wheel_spec;

pub use error::ResolutionError;
pub use resolver::resolve;
pub use source::RawConfigSource;
pub use wheel_spec::{Segment, WheelSpec, DEFAULT_WHEEL_SPEC};
