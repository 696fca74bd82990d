// ============================================================================
// mediaspec-core/src/model/input.rs
// ============================================================================
//
// INPUT SETTINGS: How a job reads its source files
//
// An input template carries the settings shared by every input built from
// it: which audio, caption and video streams to select, filtering, clipping
// and timecode handling. Selectors are keyed by name so outputs can refer to
// them (`Audio Selector 1`, `Captions Selector 1`).
//
// KEY COMPONENTS:
// - InputTemplate: reusable input settings
// - AudioSelector / AudioSelectorGroup: audio stream selection by PID, track or language
// - CaptionSelector and its source settings: caption stream selection
// - VideoSelector: color space handling and rotation of the video stream
// - InputClipping: timecode ranges to keep

use std::collections::BTreeMap;

use super::audio::RemixSettings;
use super::language::LanguageCode;
use super::video::{ImageInserter, Rectangle};

// ============================================================================
// VOCABULARIES
// ============================================================================

token_enum! {
    pub enum InputDeblockFilter {
        Enabled = "ENABLED",
        Disabled = "DISABLED",
    }
}

token_enum! {
    pub enum InputDenoiseFilter {
        Enabled = "ENABLED",
        Disabled = "DISABLED",
    }
}

token_enum! {
    /// When the deblock and denoise filters run. `AUTO` applies them to
    /// low-quality inputs only.
    pub enum InputFilterEnable {
        Auto = "AUTO",
        Disable = "DISABLE",
        Force = "FORCE",
    }
}

token_enum! {
    /// Whether program specific information is used to find streams.
    pub enum InputPsiControl {
        IgnorePsi = "IGNORE_PSI",
        UsePsi = "USE_PSI",
    }
}

token_enum! {
    /// Source of the input timecode.
    pub enum InputTimecodeSource {
        Embedded = "EMBEDDED",
        Zerobased = "ZEROBASED",
        Specifiedstart = "SPECIFIEDSTART",
    }
}

token_enum! {
    /// Whether the selector is used when an output names no selector.
    pub enum AudioDefaultSelection {
        Default = "DEFAULT",
        NotDefault = "NOT_DEFAULT",
    }
}

token_enum! {
    pub enum AudioSelectorType {
        Pid = "PID",
        Track = "TRACK",
        LanguageCode = "LANGUAGE_CODE",
    }
}

token_enum! {
    /// Format of a caption source.
    pub enum CaptionSourceType {
        Ancillary = "ANCILLARY",
        DvbSub = "DVB_SUB",
        Embedded = "EMBEDDED",
        Scte20 = "SCTE20",
        Scc = "SCC",
        Ttml = "TTML",
        Stl = "STL",
        Srt = "SRT",
        Smi = "SMI",
        Teletext = "TELETEXT",
        NullSource = "NULL_SOURCE",
        Imsc = "IMSC",
    }
}

token_enum! {
    /// Whether 608 data in a sidecar file is upconverted to 708.
    pub enum FileSourceConvert608To708 {
        Upconvert = "UPCONVERT",
        Disabled = "DISABLED",
    }
}

token_enum! {
    /// Color space of the input video.
    pub enum ColorSpace {
        Follow = "FOLLOW",
        Rec601 = "REC_601",
        Rec709 = "REC_709",
        Hdr10 = "HDR10",
        Hlg2020 = "HLG_2020",
    }
}

token_enum! {
    /// `FORCE` overrides the color space signalled in the input,
    /// `FALLBACK` only fills it in when missing.
    pub enum ColorSpaceUsage {
        Force = "FORCE",
        Fallback = "FALLBACK",
    }
}

token_enum! {
    pub enum InputRotate {
        Degree0 = "DEGREE_0",
        Degrees90 = "DEGREES_90",
        Degrees180 = "DEGREES_180",
        Degrees270 = "DEGREES_270",
        Auto = "AUTO",
    }
}

// ============================================================================
// SELECTORS
// ============================================================================

settings_record! {
    /// A named set of audio selectors that outputs can use together.
    pub struct AudioSelectorGroup {
        audio_selector_names / set_audio_selector_names / with_audio_selector_names: Vec<String> = "AudioSelectorNames",
    }
}

settings_record! {
    /// Selects one audio stream of the input.
    pub struct AudioSelector {
        /// ISO 639-2 or ISO 639-3 code for languages not in `LanguageCode`.
        custom_language_code / set_custom_language_code / with_custom_language_code: String = "CustomLanguageCode" [pattern r"^[A-Za-z]{3}$"],
        default_selection / set_default_selection / with_default_selection: AudioDefaultSelection = "DefaultSelection",
        /// Sidecar audio file used instead of the input's own audio.
        external_audio_file_input / set_external_audio_file_input / with_external_audio_file_input: String = "ExternalAudioFileInput" [pattern r"^(s3|https?)://.+\.([mM]2[vV]|[mM][pP][eE][gG]|[aA][vV][iI]|[mM][pP]4|[fF][lL][vV]|[mM][pP][tT]|[mM][pP][gG]|[mM]4[vV]|[tT][rR][pP]|[fF]4[vV]|[mM]2[tT][sS]|[tT][sS]|264|[hH]264|[mM][kK][vV]|[mM][oO][vV]|[mM][tT][sS]|[mM]2[tT]|[wW][mM][vV]|[aA][sS][fF]|[vV][oO][bB]|3[gG][pP]|3[gG][pP][pP]|[mM][xX][fF]|[dD][iI][vV][xX]|[xX][vV][iI][dD]|[rR][aA][wW]|[dD][vV]|[gG][xX][fF]|[mM]1[vV]|3[gG]2|[vV][mM][fF]|[mM]3[uU]8|[lL][cC][hH]|[gG][xX][fF]_[mM][pP][eE][gG]2|[mM][xX][fF]_[mM][pP][eE][gG]2|[mM][xX][fF][hH][dD]|[wW][aA][vV]|[yY]4[mM]|[aA][aA][cC]|[aA][iI][fF][fF]|[mM][pP]2|[aA][cC]3|[eE][cC]3|[dD][tT][sS][eE])(\?.*)?$"],
        language_code / set_language_code / with_language_code: LanguageCode = "LanguageCode",
        /// Audio offset in milliseconds.
        offset / set_offset / with_offset: i32 = "Offset",
        pids / set_pids / with_pids: Vec<i32> = "Pids" [range 1, 2147483647],
        /// Dolby E program to extract. 0 extracts all of them.
        program_selection / set_program_selection / with_program_selection: i32 = "ProgramSelection" [range 0, 8],
        remix_settings / set_remix_settings / with_remix_settings: RemixSettings = "RemixSettings",
        selector_type / set_selector_type / with_selector_type: AudioSelectorType = "SelectorType",
        /// 1-based track numbers.
        tracks / set_tracks / with_tracks: Vec<i32> = "Tracks" [range 1, 2147483647],
    }
}

settings_record! {
    /// A sidecar caption file.
    pub struct FileSourceSettings {
        convert608_to708 / set_convert608_to708 / with_convert608_to708: FileSourceConvert608To708 = "Convert608To708",
        source_file / set_source_file / with_source_file: String = "SourceFile" [pattern r"^(s3|https?)://.*\.([sS][cC][cC]|[sS][tT][lL]|[sS][rR][tT]|[xX][mM][lL]|[dD][fF][xX][pP]|[tT][tT][mM][lL]|[sS][mM][iI])$"],
        /// Seconds added to every caption timestamp.
        time_delta / set_time_delta / with_time_delta: i32 = "TimeDelta",
    }
}

settings_record! {
    pub struct CaptionSourceSettings {
        file_source_settings / set_file_source_settings / with_file_source_settings: FileSourceSettings = "FileSourceSettings",
        source_type / set_source_type / with_source_type: CaptionSourceType = "SourceType",
    }
}

settings_record! {
    /// Selects one caption stream of the input or a sidecar file.
    pub struct CaptionSelector {
        custom_language_code / set_custom_language_code / with_custom_language_code: String = "CustomLanguageCode" [pattern r"^[A-Za-z]{3}$"],
        language_code / set_language_code / with_language_code: LanguageCode = "LanguageCode",
        source_settings / set_source_settings / with_source_settings: CaptionSourceSettings = "SourceSettings",
    }
}

settings_record! {
    /// A range of the input to keep, as HH:MM:SS:FF timecodes.
    pub struct InputClipping {
        end_timecode / set_end_timecode / with_end_timecode: String = "EndTimecode" [pattern r"^([01][0-9]|2[0-4]):[0-5][0-9]:[0-5][0-9][:;][0-9]{2}$"],
        start_timecode / set_start_timecode / with_start_timecode: String = "StartTimecode" [pattern r"^([01][0-9]|2[0-4]):[0-5][0-9]:[0-5][0-9][:;][0-9]{2}$"],
    }
}

settings_record! {
    pub struct VideoSelector {
        color_space / set_color_space / with_color_space: ColorSpace = "ColorSpace",
        color_space_usage / set_color_space_usage / with_color_space_usage: ColorSpaceUsage = "ColorSpaceUsage",
        pid / set_pid / with_pid: i32 = "Pid" [range 1, 2147483647],
        program_number / set_program_number / with_program_number: i32 = "ProgramNumber",
        rotate / set_rotate / with_rotate: InputRotate = "Rotate",
    }
}

// ============================================================================
// TEMPLATE
// ============================================================================

settings_record! {
    /// Settings shared by the inputs of jobs created from a template.
    pub struct InputTemplate {
        audio_selector_groups / set_audio_selector_groups / with_audio_selector_groups: BTreeMap<String, AudioSelectorGroup> = "AudioSelectorGroups",
        audio_selectors / set_audio_selectors / with_audio_selectors: BTreeMap<String, AudioSelector> = "AudioSelectors",
        caption_selectors / set_caption_selectors / with_caption_selectors: BTreeMap<String, CaptionSelector> = "CaptionSelectors",
        /// Part of the input picture to keep.
        crop / set_crop / with_crop: Rectangle = "Crop",
        deblock_filter / set_deblock_filter / with_deblock_filter: InputDeblockFilter = "DeblockFilter",
        denoise_filter / set_denoise_filter / with_denoise_filter: InputDenoiseFilter = "DenoiseFilter",
        filter_enable / set_filter_enable / with_filter_enable: InputFilterEnable = "FilterEnable",
        filter_strength / set_filter_strength / with_filter_strength: i32 = "FilterStrength" [range -5, 5],
        image_inserter / set_image_inserter / with_image_inserter: ImageInserter = "ImageInserter",
        input_clippings / set_input_clippings / with_input_clippings: Vec<InputClipping> = "InputClippings",
        /// Where the input picture is placed in the output frame.
        position / set_position / with_position: Rectangle = "Position",
        /// Program to use from a multi-program transport stream.
        program_number / set_program_number / with_program_number: i32 = "ProgramNumber" [range 1, 2147483647],
        psi_control / set_psi_control / with_psi_control: InputPsiControl = "PsiControl",
        timecode_source / set_timecode_source / with_timecode_source: InputTimecodeSource = "TimecodeSource",
        /// Start timecode used with `SPECIFIEDSTART`.
        timecode_start / set_timecode_start / with_timecode_start: String = "TimecodeStart" [pattern r"^((([0-1]\d)|(2[0-3]))(:[0-5]\d){2}([:;][0-5]\d))$"],
        video_selector / set_video_selector / with_video_selector: VideoSelector = "VideoSelector",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::SettingsRecord;

    fn selectors() -> BTreeMap<String, AudioSelector> {
        let mut selectors = BTreeMap::new();
        selectors.insert(
            "Audio Selector 2".to_string(),
            AudioSelector::new().with_selector_type(AudioSelectorType::Track).with_tracks(vec![2]),
        );
        selectors.insert(
            "Audio Selector 1".to_string(),
            AudioSelector::new()
                .with_default_selection(AudioDefaultSelection::Default)
                .with_pids(vec![0, 482]),
        );
        selectors
    }

    #[test]
    fn selectors_dump_sorted_by_name() {
        let template = InputTemplate::new()
            .with_audio_selectors(selectors())
            .with_timecode_source(InputTimecodeSource::Zerobased);
        assert_eq!(
            template.describe(),
            "{AudioSelectors: {Audio Selector 1={DefaultSelection: DEFAULT,Pids: [0, 482]}, \
             Audio Selector 2={SelectorType: TRACK,Tracks: [2]}},TimecodeSource: ZEROBASED}"
        );
    }

    #[test]
    fn selector_violations_name_the_selector() {
        let template = InputTemplate::new()
            .with_audio_selectors(selectors())
            .with_filter_strength(6)
            .with_input_clippings(vec![InputClipping::new().with_start_timecode("00:00:10:00").with_end_timecode("00:61:00:00")]);

        let report = template.validate();
        let paths: Vec<&str> = report.violations().iter().map(|v| v.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "AudioSelectors[Audio Selector 1].Pids[0]",
                "FilterStrength",
                "InputClippings[0].EndTimecode",
            ]
        );
    }

    #[test]
    fn templates_load_from_documents() {
        let template: InputTemplate = crate::document::from_json_str(
            r#"{
                "captionSelectors": {
                    "Captions Selector 1": {
                        "languageCode": "ENG",
                        "sourceSettings": {
                            "sourceType": "SRT",
                            "fileSourceSettings": { "sourceFile": "s3://bucket/subs.srt" }
                        }
                    }
                },
                "videoSelector": { "colorSpace": "HDR10", "rotate": "AUTO" },
                "programNumber": 1
            }"#,
        )
        .unwrap();

        let selector = &template.caption_selectors().unwrap()["Captions Selector 1"];
        assert_eq!(selector.language_code(), Some(&LanguageCode::Eng));
        assert_eq!(
            selector.source_settings().and_then(|s| s.source_type()),
            Some(&CaptionSourceType::Srt)
        );
        assert_eq!(template.video_selector().and_then(|v| v.rotate()), Some(&InputRotate::Auto));
        assert!(template.validate().is_valid());
    }
}
