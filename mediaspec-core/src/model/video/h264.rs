// ============================================================================
// mediaspec-core/src/model/video/h264.rs
// ============================================================================
//
// H.264 SETTINGS: AVC encoder settings
//
// KEY COMPONENTS:
// - H264Settings: encoder settings for H_264 outputs
// - H264QvbrSettings: quality-defined variable bitrate settings

// ============================================================================
// VOCABULARIES
// ============================================================================

token_enum! {
    /// Adaptive quantization setting for H.264.
    pub enum H264AdaptiveQuantization {
        Off = "OFF",
        Low = "LOW",
        Medium = "MEDIUM",
        High = "HIGH",
        Higher = "HIGHER",
        Max = "MAX",
    }
}

token_enum! {
    /// H.264 level. `AUTO` lets the service pick the lowest level that fits the output.
    pub enum H264CodecLevel {
        Auto = "AUTO",
        Level1 = "LEVEL_1",
        Level11 = "LEVEL_1_1",
        Level12 = "LEVEL_1_2",
        Level13 = "LEVEL_1_3",
        Level2 = "LEVEL_2",
        Level21 = "LEVEL_2_1",
        Level22 = "LEVEL_2_2",
        Level3 = "LEVEL_3",
        Level31 = "LEVEL_3_1",
        Level32 = "LEVEL_3_2",
        Level4 = "LEVEL_4",
        Level41 = "LEVEL_4_1",
        Level42 = "LEVEL_4_2",
        Level5 = "LEVEL_5",
        Level51 = "LEVEL_5_1",
        Level52 = "LEVEL_5_2",
    }
}

token_enum! {
    /// H.264 profile. The 10-bit and 4:2:2 profiles need a matching source.
    pub enum H264CodecProfile {
        Baseline = "BASELINE",
        High = "HIGH",
        High10Bit = "HIGH_10BIT",
        High422 = "HIGH_422",
        High42210Bit = "HIGH_422_10BIT",
        Main = "MAIN",
    }
}

token_enum! {
    /// Dynamic sub-GOP setting for H.264.
    pub enum H264DynamicSubGop {
        Adaptive = "ADAPTIVE",
        Static = "STATIC",
    }
}

token_enum! {
    /// Entropy encoding setting for H.264.
    pub enum H264EntropyEncoding {
        Cabac = "CABAC",
        Cavlc = "CAVLC",
    }
}

token_enum! {
    /// Field encoding setting for H.264.
    pub enum H264FieldEncoding {
        Paff = "PAFF",
        ForceField = "FORCE_FIELD",
    }
}

token_enum! {
    /// Flicker adaptive quantization setting for H.264.
    pub enum H264FlickerAdaptiveQuantization {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

token_enum! {
    /// Framerate control setting for H.264.
    pub enum H264FramerateControl {
        InitializeFromSource = "INITIALIZE_FROM_SOURCE",
        Specified = "SPECIFIED",
    }
}

token_enum! {
    /// Framerate conversion algorithm setting for H.264.
    pub enum H264FramerateConversionAlgorithm {
        DuplicateDrop = "DUPLICATE_DROP",
        Interpolate = "INTERPOLATE",
    }
}

token_enum! {
    /// GOP B-frame reference setting for H.264.
    pub enum H264GopBReference {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

token_enum! {
    /// GOP size units setting for H.264.
    pub enum H264GopSizeUnits {
        Frames = "FRAMES",
        Seconds = "SECONDS",
    }
}

token_enum! {
    /// Interlace mode setting for H.264.
    pub enum H264InterlaceMode {
        Progressive = "PROGRESSIVE",
        TopField = "TOP_FIELD",
        BottomField = "BOTTOM_FIELD",
        FollowTopField = "FOLLOW_TOP_FIELD",
        FollowBottomField = "FOLLOW_BOTTOM_FIELD",
    }
}

token_enum! {
    /// Pixel aspect ratio control setting for H.264.
    pub enum H264ParControl {
        InitializeFromSource = "INITIALIZE_FROM_SOURCE",
        Specified = "SPECIFIED",
    }
}

token_enum! {
    /// Speed/quality trade-off of the encoder.
    pub enum H264QualityTuningLevel {
        SinglePass = "SINGLE_PASS",
        SinglePassHq = "SINGLE_PASS_HQ",
        MultiPassHq = "MULTI_PASS_HQ",
    }
}

token_enum! {
    /// Rate control mode: variable, constant or quality-defined variable bitrate.
    pub enum H264RateControlMode {
        Vbr = "VBR",
        Cbr = "CBR",
        Qvbr = "QVBR",
    }
}

token_enum! {
    /// Repeat PPS setting for H.264.
    pub enum H264RepeatPps {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

token_enum! {
    /// Scene change detect setting for H.264.
    pub enum H264SceneChangeDetect {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
        TransitionDetection = "TRANSITION_DETECTION",
    }
}

token_enum! {
    /// Slow PAL setting for H.264.
    pub enum H264SlowPal {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

token_enum! {
    /// Spatial adaptive quantization setting for H.264.
    pub enum H264SpatialAdaptiveQuantization {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

token_enum! {
    /// Syntax setting for H.264.
    pub enum H264Syntax {
        Default = "DEFAULT",
        Rp2027 = "RP2027",
    }
}

token_enum! {
    /// Telecine setting for H.264.
    pub enum H264Telecine {
        None = "NONE",
        Soft = "SOFT",
        Hard = "HARD",
    }
}

token_enum! {
    /// Temporal adaptive quantization setting for H.264.
    pub enum H264TemporalAdaptiveQuantization {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

token_enum! {
    /// Unregistered SEI timecode setting for H.264.
    pub enum H264UnregisteredSeiTimecode {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

// ============================================================================
// RECORDS
// ============================================================================

settings_record! {
    /// Quality-defined variable bitrate settings for H.264.
    pub struct H264QvbrSettings {
        /// Upper bound on the average bitrate in bits/second.
        max_average_bitrate / set_max_average_bitrate / with_max_average_bitrate: i32 = "MaxAverageBitrate" [range 1000, 1152000000],
        /// Target quality, 1 (lowest) to 10 (highest).
        qvbr_quality_level / set_qvbr_quality_level / with_qvbr_quality_level: i32 = "QvbrQualityLevel" [range 1, 10],
        /// Fractional refinement of `QvbrQualityLevel`, rounded to the nearest third by the service.
        qvbr_quality_level_fine_tune / set_qvbr_quality_level_fine_tune / with_qvbr_quality_level_fine_tune: f64 = "QvbrQualityLevelFineTune",
    }
}

settings_record! {
    /// H.264 (AVC) encoder settings.
    pub struct H264Settings {
        adaptive_quantization / set_adaptive_quantization / with_adaptive_quantization: H264AdaptiveQuantization = "AdaptiveQuantization",
        /// Average bitrate in bits/second. Required for VBR and CBR.
        bitrate / set_bitrate / with_bitrate: i32 = "Bitrate" [range 1000, 1152000000],
        codec_level / set_codec_level / with_codec_level: H264CodecLevel = "CodecLevel",
        codec_profile / set_codec_profile / with_codec_profile: H264CodecProfile = "CodecProfile",
        dynamic_sub_gop / set_dynamic_sub_gop / with_dynamic_sub_gop: H264DynamicSubGop = "DynamicSubGop",
        entropy_encoding / set_entropy_encoding / with_entropy_encoding: H264EntropyEncoding = "EntropyEncoding",
        field_encoding / set_field_encoding / with_field_encoding: H264FieldEncoding = "FieldEncoding",
        flicker_adaptive_quantization / set_flicker_adaptive_quantization / with_flicker_adaptive_quantization: H264FlickerAdaptiveQuantization = "FlickerAdaptiveQuantization",
        /// Whether the frame rate comes from the source or from the numerator and denominator below.
        framerate_control / set_framerate_control / with_framerate_control: H264FramerateControl = "FramerateControl",
        framerate_conversion_algorithm / set_framerate_conversion_algorithm / with_framerate_conversion_algorithm: H264FramerateConversionAlgorithm = "FramerateConversionAlgorithm",
        framerate_denominator / set_framerate_denominator / with_framerate_denominator: i32 = "FramerateDenominator" [range 1, 2147483647],
        framerate_numerator / set_framerate_numerator / with_framerate_numerator: i32 = "FramerateNumerator" [range 1, 2147483647],
        gop_b_reference / set_gop_b_reference / with_gop_b_reference: H264GopBReference = "GopBReference",
        /// Number of GOPs between closed GOPs.
        gop_closed_cadence / set_gop_closed_cadence / with_gop_closed_cadence: i32 = "GopClosedCadence" [range 0, 2147483647],
        /// GOP length, in frames or seconds depending on `GopSizeUnits`.
        gop_size / set_gop_size / with_gop_size: f64 = "GopSize",
        gop_size_units / set_gop_size_units / with_gop_size_units: H264GopSizeUnits = "GopSizeUnits",
        hrd_buffer_initial_fill_percentage / set_hrd_buffer_initial_fill_percentage / with_hrd_buffer_initial_fill_percentage: i32 = "HrdBufferInitialFillPercentage" [range 0, 100],
        /// Size of the HRD buffer in bits.
        hrd_buffer_size / set_hrd_buffer_size / with_hrd_buffer_size: i32 = "HrdBufferSize" [range 0, 1152000000],
        interlace_mode / set_interlace_mode / with_interlace_mode: H264InterlaceMode = "InterlaceMode",
        /// Peak bitrate in bits/second for QVBR.
        max_bitrate / set_max_bitrate / with_max_bitrate: i32 = "MaxBitrate" [range 1000, 1152000000],
        /// Minimum number of frames between an IDR frame and a scene-change I-frame.
        min_i_interval / set_min_i_interval / with_min_i_interval: i32 = "MinIInterval" [range 0, 30],
        number_b_frames_between_reference_frames / set_number_b_frames_between_reference_frames / with_number_b_frames_between_reference_frames: i32 = "NumberBFramesBetweenReferenceFrames" [range 0, 7],
        number_reference_frames / set_number_reference_frames / with_number_reference_frames: i32 = "NumberReferenceFrames" [range 1, 6],
        par_control / set_par_control / with_par_control: H264ParControl = "ParControl",
        par_denominator / set_par_denominator / with_par_denominator: i32 = "ParDenominator" [range 1, 2147483647],
        par_numerator / set_par_numerator / with_par_numerator: i32 = "ParNumerator" [range 1, 2147483647],
        quality_tuning_level / set_quality_tuning_level / with_quality_tuning_level: H264QualityTuningLevel = "QualityTuningLevel",
        /// Settings used when `RateControlMode` is `QVBR`.
        qvbr_settings / set_qvbr_settings / with_qvbr_settings: H264QvbrSettings = "QvbrSettings",
        rate_control_mode / set_rate_control_mode / with_rate_control_mode: H264RateControlMode = "RateControlMode",
        repeat_pps / set_repeat_pps / with_repeat_pps: H264RepeatPps = "RepeatPps",
        scene_change_detect / set_scene_change_detect / with_scene_change_detect: H264SceneChangeDetect = "SceneChangeDetect",
        /// Number of slices per picture. Must not exceed the number of macroblock rows.
        slices / set_slices / with_slices: i32 = "Slices" [range 1, 32],
        slow_pal / set_slow_pal / with_slow_pal: H264SlowPal = "SlowPal",
        /// Quantization matrix softness. 0 uses the encoder default.
        softness / set_softness / with_softness: i32 = "Softness" [range 0, 128],
        spatial_adaptive_quantization / set_spatial_adaptive_quantization / with_spatial_adaptive_quantization: H264SpatialAdaptiveQuantization = "SpatialAdaptiveQuantization",
        syntax / set_syntax / with_syntax: H264Syntax = "Syntax",
        telecine / set_telecine / with_telecine: H264Telecine = "Telecine",
        temporal_adaptive_quantization / set_temporal_adaptive_quantization / with_temporal_adaptive_quantization: H264TemporalAdaptiveQuantization = "TemporalAdaptiveQuantization",
        unregistered_sei_timecode / set_unregistered_sei_timecode / with_unregistered_sei_timecode: H264UnregisteredSeiTimecode = "UnregisteredSeiTimecode",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::SettingsRecord;

    #[test]
    fn raw_and_typed_rate_control_modes_are_identical() {
        let mut raw = H264Settings::new();
        raw.set_rate_control_mode("QVBR");
        let typed = H264Settings::new().with_rate_control_mode(H264RateControlMode::Qvbr);
        assert_eq!(raw, typed);
        assert_eq!(raw.rate_control_mode(), Some(&H264RateControlMode::Qvbr));
    }

    #[test]
    fn qvbr_settings_are_validated_with_nested_paths() {
        let settings = H264Settings::new()
            .with_rate_control_mode(H264RateControlMode::Qvbr)
            .with_qvbr_settings(H264QvbrSettings::new().with_qvbr_quality_level(11));
        let report = settings.validate();
        assert_eq!(report.len(), 1);
        assert_eq!(report.violations()[0].path, "QvbrSettings.QvbrQualityLevel");
    }

    #[test]
    fn level_variants_follow_their_tokens() {
        assert_eq!(H264CodecLevel::Level31.as_str(), "LEVEL_3_1");
        assert_eq!(H264CodecProfile::from("HIGH_422_10BIT"), H264CodecProfile::High42210Bit);
    }
}
