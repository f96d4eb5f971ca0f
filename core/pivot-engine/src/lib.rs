//! FILENAME: core/pivot-engine/src/lib.rs
//! Pivot Table rendering for the explorer.
//!
//! The query engine computes the pivot; this crate only lays it out. It
//! depends on `engine` for shared types (FieldType, ResultValue, Field).
//!
//! Layers:
//! - `definition`: Serializable pivot dataset (what the pivot table IS)
//! - `resolver`: Label lookup for metric headers (WHAT we call things)
//! - `view`: Renderable output for the frontend (WHAT we display)
//! - `engine`: Projection of dataset into view (HOW we lay it out)

pub mod definition;
pub mod engine;
pub mod error;
pub mod resolver;
pub mod view;

pub use definition::*;
pub use self::engine::project_pivot;
pub use error::PivotShapeError;
pub use resolver::{FieldLabels, LabelResolver};
pub use view::*;
