//! The settings record catalogue.
//!
//! Records are grouped by the part of a transcoding job they configure.
//! Every record and vocabulary is re-exported from this module.

pub mod audio;
pub mod captions;
pub mod container;
pub mod input;
pub mod language;
pub mod output_group;
pub mod registry;
pub mod video;

pub use audio::*;
pub use captions::*;
pub use container::*;
pub use input::*;
pub use language::LanguageCode;
pub use output_group::*;
pub use registry::{AnyRecord, RecordKind};
pub use video::*;
