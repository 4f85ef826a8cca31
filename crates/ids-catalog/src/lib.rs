//! ids-catalog: the static model catalog.
//!
//! Holds the detection models the workbench offers and their per-model
//! parameter presets. Everything here is fixed data; nothing is computed.

pub mod model;
pub mod params;

pub use model::{ModelKind, ModelParseError};
pub use params::{ParamOption, parameter_options};
