// ============================================================================
// mediaspec-core/src/model/registry.rs
// ============================================================================
//
// RECORD REGISTRY: Picking a record type at runtime
//
// Command-line tools and document loaders only know which record they hold
// from a name. This module maps kebab-case kind names to record types and
// wraps a record of any kind for dynamic dispatch.
//
// KEY COMPONENTS:
// - RecordKind: one variant per record type, named like `h264-settings`
// - AnyRecord: a record of any kind, with the SettingsRecord operations

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use super::audio::*;
use super::captions::*;
use super::container::*;
use super::input::*;
use super::output_group::*;
use super::video::*;
use crate::config::ModelConfig;
use crate::error::{CoreError, CoreResult};
use crate::record::{FieldInfo, SettingsRecord};
use crate::validation::ValidationReport;

/// Lower-cases a kind or record name and drops separators, so that
/// `h264-settings`, `H264Settings` and `h264_settings` compare equal.
fn normalize_kind_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

macro_rules! record_kinds {
    ( $( $record:ident = $kind:literal ),+ $(,)? ) => {
        /// Every record type in the catalogue.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum RecordKind {
            $( $record, )+
        }

        impl RecordKind {
            /// All kinds, in catalogue order.
            pub const ALL: &'static [RecordKind] = &[ $( RecordKind::$record, )+ ];

            /// Kebab-case kind name, e.g. `h264-settings`.
            pub fn name(&self) -> &'static str {
                match self {
                    $( RecordKind::$record => $kind, )+
                }
            }

            /// Record type name, e.g. `H264Settings`.
            pub fn record_name(&self) -> &'static str {
                match self {
                    $( RecordKind::$record => <$record as SettingsRecord>::NAME, )+
                }
            }

            pub fn fields(&self) -> &'static [FieldInfo] {
                match self {
                    $( RecordKind::$record => <$record as SettingsRecord>::fields(), )+
                }
            }
        }

        /// A settings record of any kind.
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum AnyRecord {
            $( $record($record), )+
        }

        impl AnyRecord {
            /// Creates an empty record of the given kind.
            pub fn empty(kind: RecordKind) -> Self {
                match kind {
                    $( RecordKind::$record => AnyRecord::$record($record::default()), )+
                }
            }

            /// Parses a JSON document as a record of the given kind.
            pub fn from_json(kind: RecordKind, json: &str) -> CoreResult<Self> {
                Ok(match kind {
                    $( RecordKind::$record => AnyRecord::$record(serde_json::from_str(json)?), )+
                })
            }

            pub fn kind(&self) -> RecordKind {
                match self {
                    $( AnyRecord::$record(_) => RecordKind::$record, )+
                }
            }

            pub fn describe(&self) -> String {
                match self {
                    $( AnyRecord::$record(record) => record.describe(), )+
                }
            }

            pub fn is_empty(&self) -> bool {
                match self {
                    $( AnyRecord::$record(record) => record.is_empty(), )+
                }
            }

            pub fn validate(&self) -> ValidationReport {
                match self {
                    $( AnyRecord::$record(record) => record.validate(), )+
                }
            }

            pub fn validate_with(&self, config: &ModelConfig) -> CoreResult<ValidationReport> {
                match self {
                    $( AnyRecord::$record(record) => record.validate_with(config), )+
                }
            }

            /// Pretty-printed JSON document.
            pub fn to_json_pretty(&self) -> CoreResult<String> {
                Ok(match self {
                    $( AnyRecord::$record(record) => serde_json::to_string_pretty(record)?, )+
                })
            }

            pub fn get_field(&self, name: &str) -> CoreResult<Option<Value>> {
                match self {
                    $( AnyRecord::$record(record) => record.get_field(name), )+
                }
            }

            pub fn set_field(&mut self, name: &str, value: Value) -> CoreResult<()> {
                match self {
                    $( AnyRecord::$record(record) => record.set_field(name, value), )+
                }
            }

            pub fn clear_field(&mut self, name: &str) -> CoreResult<()> {
                match self {
                    $( AnyRecord::$record(record) => record.clear_field(name), )+
                }
            }
        }

        impl fmt::Display for AnyRecord {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $( AnyRecord::$record(record) => fmt::Display::fmt(record, f), )+
                }
            }
        }

        $(
            impl From<$record> for AnyRecord {
                fn from(record: $record) -> Self {
                    AnyRecord::$record(record)
                }
            }
        )+
    };
}

record_kinds! {
    AudioDescription = "audio-description",
    AudioCodecSettings = "audio-codec-settings",
    Eac3Settings = "eac3-settings",
    AudioNormalizationSettings = "audio-normalization-settings",
    RemixSettings = "remix-settings",
    ChannelMapping = "channel-mapping",
    OutputChannelMapping = "output-channel-mapping",
    VideoDescription = "video-description",
    VideoCodecSettings = "video-codec-settings",
    H264Settings = "h264-settings",
    H264QvbrSettings = "h264-qvbr-settings",
    H265Settings = "h265-settings",
    H265QvbrSettings = "h265-qvbr-settings",
    Mpeg2Settings = "mpeg2-settings",
    ProresSettings = "prores-settings",
    Vp9Settings = "vp9-settings",
    Rectangle = "rectangle",
    VideoPreprocessor = "video-preprocessor",
    ColorCorrector = "color-corrector",
    Deinterlacer = "deinterlacer",
    ImageInserter = "image-inserter",
    InsertableImage = "insertable-image",
    NoiseReducer = "noise-reducer",
    NoiseReducerFilterSettings = "noise-reducer-filter-settings",
    NoiseReducerSpatialFilterSettings = "noise-reducer-spatial-filter-settings",
    TimecodeBurnin = "timecode-burnin",
    BurninDestinationSettings = "burnin-destination-settings",
    DvbSubDestinationSettings = "dvb-sub-destination-settings",
    M2tsSettings = "m2ts-settings",
    DvbNitSettings = "dvb-nit-settings",
    DvbSdtSettings = "dvb-sdt-settings",
    DvbTdtSettings = "dvb-tdt-settings",
    M2tsScte35Esam = "m2ts-scte35-esam",
    CmafGroupSettings = "cmaf-group-settings",
    CmafAdditionalManifest = "cmaf-additional-manifest",
    HlsGroupSettings = "hls-group-settings",
    HlsAdditionalManifest = "hls-additional-manifest",
    HlsCaptionLanguageMapping = "hls-caption-language-mapping",
    DestinationSettings = "destination-settings",
    S3DestinationSettings = "s3-destination-settings",
    S3DestinationAccessControl = "s3-destination-access-control",
    S3EncryptionSettings = "s3-encryption-settings",
    CmafEncryptionSettings = "cmaf-encryption-settings",
    HlsEncryptionSettings = "hls-encryption-settings",
    SpekeKeyProvider = "speke-key-provider",
    SpekeKeyProviderCmaf = "speke-key-provider-cmaf",
    StaticKeyProvider = "static-key-provider",
    InputTemplate = "input-template",
    AudioSelector = "audio-selector",
    AudioSelectorGroup = "audio-selector-group",
    CaptionSelector = "caption-selector",
    CaptionSourceSettings = "caption-source-settings",
    FileSourceSettings = "file-source-settings",
    InputClipping = "input-clipping",
    VideoSelector = "video-selector",
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RecordKind {
    type Err = CoreError;

    /// Accepts the kebab-case kind name or the record type name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_kind_name(s);
        RecordKind::ALL
            .iter()
            .copied()
            .find(|kind| normalize_kind_name(kind.name()) == wanted)
            .ok_or_else(|| CoreError::UnknownRecordKind(s.to_string()))
    }
}
