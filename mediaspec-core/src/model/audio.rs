// ============================================================================
// mediaspec-core/src/model/audio.rs
// ============================================================================
//
// AUDIO SETTINGS: Audio track records and their vocabularies
//
// KEY COMPONENTS:
// - AudioDescription: one output audio track
// - AudioCodecSettings: codec selector with per-codec settings
// - Eac3Settings: Dolby Digital Plus encoder settings
// - AudioNormalizationSettings: loudness measurement and correction
// - RemixSettings: channel remixing with a per-output-channel gain matrix

use super::language::LanguageCode;

// ============================================================================
// VOCABULARIES
// ============================================================================

token_enum! {
    /// Whether the audio type comes from the input or from `AudioType`.
    pub enum AudioTypeControl {
        FollowInput = "FOLLOW_INPUT",
        UseConfigured = "USE_CONFIGURED",
    }
}

token_enum! {
    /// Whether the language code comes from the input or from the configured code.
    pub enum AudioLanguageCodeControl {
        FollowInput = "FOLLOW_INPUT",
        UseConfigured = "USE_CONFIGURED",
    }
}

token_enum! {
    /// Audio codec selector.
    pub enum AudioCodec {
        Aac = "AAC",
        Mp2 = "MP2",
        Mp3 = "MP3",
        Wav = "WAV",
        Aiff = "AIFF",
        Ac3 = "AC3",
        Eac3 = "EAC3",
        Eac3Atmos = "EAC3_ATMOS",
        Vorbis = "VORBIS",
        Opus = "OPUS",
        Passthrough = "PASSTHROUGH",
    }
}

token_enum! {
    /// Loudness measurement algorithm.
    pub enum AudioNormalizationAlgorithm {
        ItuBs17701 = "ITU_BS_1770_1",
        ItuBs17702 = "ITU_BS_1770_2",
        ItuBs17703 = "ITU_BS_1770_3",
        ItuBs17704 = "ITU_BS_1770_4",
    }
}

token_enum! {
    /// Whether audio is corrected or only measured.
    pub enum AudioNormalizationAlgorithmControl {
        CorrectAudio = "CORRECT_AUDIO",
        MeasureOnly = "MEASURE_ONLY",
    }
}

token_enum! {
    /// Whether loudness measurements are written to a log.
    pub enum AudioNormalizationLoudnessLogging {
        Log = "LOG",
        DontLog = "DONT_LOG",
    }
}

token_enum! {
    /// Peak measurement method.
    pub enum AudioNormalizationPeakCalculation {
        TruePeak = "TRUE_PEAK",
        None = "NONE",
    }
}

token_enum! {
    /// 3 dB attenuation of the surround channels.
    pub enum Eac3AttenuationControl {
        Attenuate3Db = "ATTENUATE_3_DB",
        None = "NONE",
    }
}

token_enum! {
    /// Bitstream mode setting for Dolby Digital Plus.
    pub enum Eac3BitstreamMode {
        CompleteMain = "COMPLETE_MAIN",
        Commentary = "COMMENTARY",
        Emergency = "EMERGENCY",
        HearingImpaired = "HEARING_IMPAIRED",
        VisuallyImpaired = "VISUALLY_IMPAIRED",
    }
}

token_enum! {
    /// Dolby Digital Plus coding mode, named after its channel layout.
    pub enum Eac3CodingMode {
        CodingMode10 = "CODING_MODE_1_0",
        CodingMode20 = "CODING_MODE_2_0",
        CodingMode32 = "CODING_MODE_3_2",
    }
}

token_enum! {
    /// DC filter setting for Dolby Digital Plus.
    pub enum Eac3DcFilter {
        Enabled = "ENABLED",
        Disabled = "DISABLED",
    }
}

token_enum! {
    /// Dynamic range compression line setting for Dolby Digital Plus.
    pub enum Eac3DynamicRangeCompressionLine {
        None = "NONE",
        FilmStandard = "FILM_STANDARD",
        FilmLight = "FILM_LIGHT",
        MusicStandard = "MUSIC_STANDARD",
        MusicLight = "MUSIC_LIGHT",
        Speech = "SPEECH",
    }
}

token_enum! {
    /// Dynamic range compression RF setting for Dolby Digital Plus.
    pub enum Eac3DynamicRangeCompressionRf {
        None = "NONE",
        FilmStandard = "FILM_STANDARD",
        FilmLight = "FILM_LIGHT",
        MusicStandard = "MUSIC_STANDARD",
        MusicLight = "MUSIC_LIGHT",
        Speech = "SPEECH",
    }
}

token_enum! {
    /// LFE control setting for Dolby Digital Plus.
    pub enum Eac3LfeControl {
        Lfe = "LFE",
        NoLfe = "NO_LFE",
    }
}

token_enum! {
    /// LFE filter setting for Dolby Digital Plus.
    pub enum Eac3LfeFilter {
        Enabled = "ENABLED",
        Disabled = "DISABLED",
    }
}

token_enum! {
    /// Metadata control setting for Dolby Digital Plus.
    pub enum Eac3MetadataControl {
        FollowInput = "FOLLOW_INPUT",
        UseConfigured = "USE_CONFIGURED",
    }
}

token_enum! {
    /// Whether Dolby Digital Plus input is passed through untouched when possible.
    pub enum Eac3PassthroughControl {
        WhenPossible = "WHEN_POSSIBLE",
        NoPassthrough = "NO_PASSTHROUGH",
    }
}

token_enum! {
    /// Phase control setting for Dolby Digital Plus.
    pub enum Eac3PhaseControl {
        Shift90Degrees = "SHIFT_90_DEGREES",
        NoShift = "NO_SHIFT",
    }
}

token_enum! {
    /// Preferred stereo downmix written to the bitstream.
    pub enum Eac3StereoDownmix {
        NotIndicated = "NOT_INDICATED",
        LoRo = "LO_RO",
        LtRt = "LT_RT",
        Dpl2 = "DPL2",
    }
}

token_enum! {
    /// Surround EX mode setting for Dolby Digital Plus.
    pub enum Eac3SurroundExMode {
        NotIndicated = "NOT_INDICATED",
        Enabled = "ENABLED",
        Disabled = "DISABLED",
    }
}

token_enum! {
    /// Surround mode setting for Dolby Digital Plus.
    pub enum Eac3SurroundMode {
        NotIndicated = "NOT_INDICATED",
        Enabled = "ENABLED",
        Disabled = "DISABLED",
    }
}

// ============================================================================
// RECORDS
// ============================================================================

settings_record! {
    /// Dolby Digital Plus (EAC3) audio settings.
    pub struct Eac3Settings {
        attenuation_control / set_attenuation_control / with_attenuation_control: Eac3AttenuationControl = "AttenuationControl",
        /// Average bitrate in bits/second.
        bitrate / set_bitrate / with_bitrate: i32 = "Bitrate" [range 64000, 640000],
        bitstream_mode / set_bitstream_mode / with_bitstream_mode: Eac3BitstreamMode = "BitstreamMode",
        coding_mode / set_coding_mode / with_coding_mode: Eac3CodingMode = "CodingMode",
        dc_filter / set_dc_filter / with_dc_filter: Eac3DcFilter = "DcFilter",
        /// Dialogue normalization value passed through to the output.
        dialnorm / set_dialnorm / with_dialnorm: i32 = "Dialnorm" [range 1, 31],
        dynamic_range_compression_line / set_dynamic_range_compression_line / with_dynamic_range_compression_line: Eac3DynamicRangeCompressionLine = "DynamicRangeCompressionLine",
        dynamic_range_compression_rf / set_dynamic_range_compression_rf / with_dynamic_range_compression_rf: Eac3DynamicRangeCompressionRf = "DynamicRangeCompressionRf",
        lfe_control / set_lfe_control / with_lfe_control: Eac3LfeControl = "LfeControl",
        lfe_filter / set_lfe_filter / with_lfe_filter: Eac3LfeFilter = "LfeFilter",
        /// Left only/Right only center mix level in dB. `-60.0` mutes the channel.
        lo_ro_center_mix_level / set_lo_ro_center_mix_level / with_lo_ro_center_mix_level: f64 = "LoRoCenterMixLevel" [one_of 3.0, 1.5, 0.0, -1.5, -3.0, -4.5, -6.0, -60.0],
        /// Left only/Right only surround mix level in dB.
        lo_ro_surround_mix_level / set_lo_ro_surround_mix_level / with_lo_ro_surround_mix_level: f64 = "LoRoSurroundMixLevel" [one_of -1.5, -3.0, -4.5, -6.0, -60.0],
        /// Left total/Right total center mix level in dB.
        lt_rt_center_mix_level / set_lt_rt_center_mix_level / with_lt_rt_center_mix_level: f64 = "LtRtCenterMixLevel" [one_of 3.0, 1.5, 0.0, -1.5, -3.0, -4.5, -6.0, -60.0],
        /// Left total/Right total surround mix level in dB.
        lt_rt_surround_mix_level / set_lt_rt_surround_mix_level / with_lt_rt_surround_mix_level: f64 = "LtRtSurroundMixLevel" [one_of -1.5, -3.0, -4.5, -6.0, -60.0],
        metadata_control / set_metadata_control / with_metadata_control: Eac3MetadataControl = "MetadataControl",
        passthrough_control / set_passthrough_control / with_passthrough_control: Eac3PassthroughControl = "PassthroughControl",
        phase_control / set_phase_control / with_phase_control: Eac3PhaseControl = "PhaseControl",
        /// Sample rate in Hz. Only 48000 is supported.
        sample_rate / set_sample_rate / with_sample_rate: i32 = "SampleRate" [range 48000, 48000],
        stereo_downmix / set_stereo_downmix / with_stereo_downmix: Eac3StereoDownmix = "StereoDownmix",
        surround_ex_mode / set_surround_ex_mode / with_surround_ex_mode: Eac3SurroundExMode = "SurroundExMode",
        surround_mode / set_surround_mode / with_surround_mode: Eac3SurroundMode = "SurroundMode",
    }
}

settings_record! {
    /// Codec selection for an audio track.
    ///
    /// Only the settings record matching `Codec` is used by the service.
    pub struct AudioCodecSettings {
        codec / set_codec / with_codec: AudioCodec = "Codec",
        eac3_settings / set_eac3_settings / with_eac3_settings: Eac3Settings = "Eac3Settings",
    }
}

settings_record! {
    /// Loudness measurement and correction.
    pub struct AudioNormalizationSettings {
        algorithm / set_algorithm / with_algorithm: AudioNormalizationAlgorithm = "Algorithm",
        algorithm_control / set_algorithm_control / with_algorithm_control: AudioNormalizationAlgorithmControl = "AlgorithmControl",
        /// Content below this level in LUFS is excluded from the measurement.
        correction_gate_level / set_correction_gate_level / with_correction_gate_level: i32 = "CorrectionGateLevel" [range -70, 0],
        loudness_logging / set_loudness_logging / with_loudness_logging: AudioNormalizationLoudnessLogging = "LoudnessLogging",
        peak_calculation / set_peak_calculation / with_peak_calculation: AudioNormalizationPeakCalculation = "PeakCalculation",
        /// Target loudness in LKFS.
        target_lkfs / set_target_lkfs / with_target_lkfs: f64 = "TargetLkfs" [range -59, 0],
    }
}

settings_record! {
    /// Gains applied to each input channel to build one output channel.
    pub struct OutputChannelMapping {
        /// Gain in dB per input channel. -60 mutes the channel.
        input_channels / set_input_channels / with_input_channels: Vec<i32> = "InputChannels" [range -60, 6],
    }
}

settings_record! {
    /// Remix matrix: one entry per output channel.
    pub struct ChannelMapping {
        output_channels / set_output_channels / with_output_channels: Vec<OutputChannelMapping> = "OutputChannels",
    }
}

settings_record! {
    /// Advanced audio remixing.
    ///
    /// `ChannelMapping` must hold `ChannelsOut` output channels, each with
    /// `ChannelsIn` input gains. That shape is not checked.
    pub struct RemixSettings {
        channel_mapping / set_channel_mapping / with_channel_mapping: ChannelMapping = "ChannelMapping",
        channels_in / set_channels_in / with_channels_in: i32 = "ChannelsIn" [range 1, 16],
        channels_out / set_channels_out / with_channels_out: i32 = "ChannelsOut" [range 1, 8],
    }
}

settings_record! {
    /// One audio track of an output: source selection, language and codec.
    pub struct AudioDescription {
        audio_normalization_settings / set_audio_normalization_settings / with_audio_normalization_settings: AudioNormalizationSettings = "AudioNormalizationSettings",
        /// Name of the input audio selector feeding this track.
        audio_source_name / set_audio_source_name / with_audio_source_name: String = "AudioSourceName",
        /// ISO 13818-1 audio type, used when `AudioTypeControl` is `USE_CONFIGURED`.
        audio_type / set_audio_type / with_audio_type: i32 = "AudioType" [range 0, 255],
        audio_type_control / set_audio_type_control / with_audio_type_control: AudioTypeControl = "AudioTypeControl",
        codec_settings / set_codec_settings / with_codec_settings: AudioCodecSettings = "CodecSettings",
        /// RFC 5646 language code for languages outside `LanguageCode`.
        custom_language_code / set_custom_language_code / with_custom_language_code: String = "CustomLanguageCode" [pattern r"^[A-Za-z]{2,3}(-[A-Za-z-]+)?$"],
        language_code / set_language_code / with_language_code: LanguageCode = "LanguageCode",
        language_code_control / set_language_code_control / with_language_code_control: AudioLanguageCodeControl = "LanguageCodeControl",
        remix_settings / set_remix_settings / with_remix_settings: RemixSettings = "RemixSettings",
        /// Label written to the output for players that show stream names.
        stream_name / set_stream_name / with_stream_name: String = "StreamName" [pattern r"^[\w\s]*$"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::SettingsRecord;

    #[test]
    fn nested_codec_settings_dump_recursively() {
        let track = AudioDescription::new()
            .with_language_code(LanguageCode::Eng)
            .with_codec_settings(
                AudioCodecSettings::new()
                    .with_codec(AudioCodec::Eac3)
                    .with_eac3_settings(Eac3Settings::new().with_bitrate(384000)),
            );
        assert_eq!(
            track.describe(),
            "{CodecSettings: {Codec: EAC3,Eac3Settings: {Bitrate: 384000}},LanguageCode: ENG}"
        );
    }

    #[test]
    fn mix_levels_accept_only_documented_values() {
        let settings = Eac3Settings::new()
            .with_lo_ro_center_mix_level(-3.0)
            .with_lt_rt_surround_mix_level(0.0);
        let report = settings.validate();
        assert_eq!(report.len(), 1);
        assert_eq!(report.violations()[0].path, "LtRtSurroundMixLevel");
    }

    #[test]
    fn language_patterns_are_checked() {
        let track = AudioDescription::new()
            .with_custom_language_code("en-US")
            .with_stream_name("Director's commentary");
        let report = track.validate();
        assert_eq!(report.len(), 1);
        assert_eq!(report.violations()[0].path, "StreamName");
    }

    #[test]
    fn whole_number_decimals_keep_their_point() {
        let settings = AudioNormalizationSettings::new().with_target_lkfs(-23.0);
        assert_eq!(settings.describe(), "{TargetLkfs: -23.0}");
    }

    #[test]
    fn remix_gains_are_checked_per_channel() {
        let remix = RemixSettings::new()
            .with_channels_in(2)
            .with_channels_out(1)
            .with_channel_mapping(ChannelMapping::new().with_output_channels(vec![
                OutputChannelMapping::new().with_input_channels(vec![0, 12]),
            ]));
        let track = AudioDescription::new()
            .with_language_code_control(AudioLanguageCodeControl::FollowInput)
            .with_remix_settings(remix)
            .with_stream_name("Mono");

        assert_eq!(
            track.describe(),
            "{LanguageCodeControl: FOLLOW_INPUT,RemixSettings: {ChannelMapping: {OutputChannels: [{InputChannels: [0, 12]}]},ChannelsIn: 2,ChannelsOut: 1},StreamName: Mono}"
        );
        let report = track.validate();
        assert_eq!(report.len(), 1);
        assert_eq!(
            report.violations()[0].path,
            "RemixSettings.ChannelMapping.OutputChannels[0].InputChannels[1]"
        );
    }
}
