//! Typed settings records for cloud video-transcoding job requests.
//!
//! Each record is a plain data-transfer object for one fragment of a job
//! request: codec settings, caption styling, container muxing, output group
//! packaging. Fields are optional and typed; closed vocabularies are token
//! enums that still carry tokens this crate does not know yet.
//!
//! Writes are never checked. Ranges, value sets and patterns documented for
//! the service are available through [`SettingsRecord::validate`], and
//! [`config::ModelConfig`] decides whether violations are reported or
//! rejected.
//!
//! ## Usage Example
//!
//! ```rust
//! use mediaspec_core::model::{H264RateControlMode, H264QvbrSettings, H264Settings};
//! use mediaspec_core::SettingsRecord;
//!
//! let settings = H264Settings::new()
//!     .with_rate_control_mode(H264RateControlMode::Qvbr)
//!     .with_max_bitrate(5_000_000)
//!     .with_qvbr_settings(H264QvbrSettings::new().with_qvbr_quality_level(7));
//!
//! assert_eq!(
//!     settings.describe(),
//!     "{MaxBitrate: 5000000,QvbrSettings: {QvbrQualityLevel: 7},RateControlMode: QVBR}"
//! );
//! assert!(settings.validate().is_valid());
//!
//! let json = mediaspec_core::document::to_json_string(&settings).unwrap();
//! let parsed: H264Settings = mediaspec_core::document::from_json_str(&json).unwrap();
//! assert_eq!(parsed, settings);
//! ```

// Record generators must be declared before the modules that use them
#[macro_use]
mod macros;

pub mod config;
pub mod document;
pub mod error;
pub mod model;
pub mod record;
pub mod validation;

// Re-exports for public API
pub use config::{ModelConfig, ModelConfigBuilder};
pub use document::{from_json_str, load_record, save_record, to_json_string};
pub use error::{CoreError, CoreResult};
pub use model::{AnyRecord, RecordKind};
pub use record::{FieldInfo, RecordField, SettingsRecord, UnknownToken};
pub use validation::{Constraint, ValidationMode, ValidationReport, Violation, ViolationKind};
