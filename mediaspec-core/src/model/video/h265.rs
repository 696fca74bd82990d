// ============================================================================
// mediaspec-core/src/model/video/h265.rs
// ============================================================================
//
// H.265 SETTINGS: HEVC encoder settings
//
// KEY COMPONENTS:
// - H265Settings: encoder settings for H_265 outputs
// - H265QvbrSettings: quality-defined variable bitrate settings

// ============================================================================
// VOCABULARIES
// ============================================================================

token_enum! {
    /// Adaptive quantization setting for H.265.
    pub enum H265AdaptiveQuantization {
        Off = "OFF",
        Low = "LOW",
        Medium = "MEDIUM",
        High = "HIGH",
        Higher = "HIGHER",
        Max = "MAX",
    }
}

token_enum! {
    /// Alternate transfer function SEI setting for H.265.
    pub enum H265AlternateTransferFunctionSei {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

token_enum! {
    /// Codec level setting for H.265.
    pub enum H265CodecLevel {
        Auto = "AUTO",
        Level1 = "LEVEL_1",
        Level2 = "LEVEL_2",
        Level21 = "LEVEL_2_1",
        Level3 = "LEVEL_3",
        Level31 = "LEVEL_3_1",
        Level4 = "LEVEL_4",
        Level41 = "LEVEL_4_1",
        Level5 = "LEVEL_5",
        Level51 = "LEVEL_5_1",
        Level52 = "LEVEL_5_2",
        Level6 = "LEVEL_6",
        Level61 = "LEVEL_6_1",
        Level62 = "LEVEL_6_2",
    }
}

token_enum! {
    /// H.265 profile and tier, e.g. `MAIN10_HIGH` is the Main 10 profile at the high tier.
    pub enum H265CodecProfile {
        MainMain = "MAIN_MAIN",
        MainHigh = "MAIN_HIGH",
        Main10Main = "MAIN10_MAIN",
        Main10High = "MAIN10_HIGH",
        Main4228BitMain = "MAIN_422_8BIT_MAIN",
        Main4228BitHigh = "MAIN_422_8BIT_HIGH",
        Main42210BitMain = "MAIN_422_10BIT_MAIN",
        Main42210BitHigh = "MAIN_422_10BIT_HIGH",
    }
}

token_enum! {
    /// Dynamic sub-GOP setting for H.265.
    pub enum H265DynamicSubGop {
        Adaptive = "ADAPTIVE",
        Static = "STATIC",
    }
}

token_enum! {
    /// Flicker adaptive quantization setting for H.265.
    pub enum H265FlickerAdaptiveQuantization {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

token_enum! {
    /// Framerate control setting for H.265.
    pub enum H265FramerateControl {
        InitializeFromSource = "INITIALIZE_FROM_SOURCE",
        Specified = "SPECIFIED",
    }
}

token_enum! {
    /// Framerate conversion algorithm setting for H.265.
    pub enum H265FramerateConversionAlgorithm {
        DuplicateDrop = "DUPLICATE_DROP",
        Interpolate = "INTERPOLATE",
    }
}

token_enum! {
    /// GOP B-frame reference setting for H.265.
    pub enum H265GopBReference {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

token_enum! {
    /// GOP size units setting for H.265.
    pub enum H265GopSizeUnits {
        Frames = "FRAMES",
        Seconds = "SECONDS",
    }
}

token_enum! {
    /// Interlace mode setting for H.265.
    pub enum H265InterlaceMode {
        Progressive = "PROGRESSIVE",
        TopField = "TOP_FIELD",
        BottomField = "BOTTOM_FIELD",
        FollowTopField = "FOLLOW_TOP_FIELD",
        FollowBottomField = "FOLLOW_BOTTOM_FIELD",
    }
}

token_enum! {
    /// Pixel aspect ratio control setting for H.265.
    pub enum H265ParControl {
        InitializeFromSource = "INITIALIZE_FROM_SOURCE",
        Specified = "SPECIFIED",
    }
}

token_enum! {
    /// Quality tuning level setting for H.265.
    pub enum H265QualityTuningLevel {
        SinglePass = "SINGLE_PASS",
        SinglePassHq = "SINGLE_PASS_HQ",
        MultiPassHq = "MULTI_PASS_HQ",
    }
}

token_enum! {
    /// Rate control mode setting for H.265.
    pub enum H265RateControlMode {
        Vbr = "VBR",
        Cbr = "CBR",
        Qvbr = "QVBR",
    }
}

token_enum! {
    /// Sample adaptive offset filter mode setting for H.265.
    pub enum H265SampleAdaptiveOffsetFilterMode {
        Default = "DEFAULT",
        Adaptive = "ADAPTIVE",
        Off = "OFF",
    }
}

token_enum! {
    /// Scene change detect setting for H.265.
    pub enum H265SceneChangeDetect {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
        TransitionDetection = "TRANSITION_DETECTION",
    }
}

token_enum! {
    /// Slow PAL setting for H.265.
    pub enum H265SlowPal {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

token_enum! {
    /// Spatial adaptive quantization setting for H.265.
    pub enum H265SpatialAdaptiveQuantization {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

token_enum! {
    /// Telecine setting for H.265.
    pub enum H265Telecine {
        None = "NONE",
        Soft = "SOFT",
        Hard = "HARD",
    }
}

token_enum! {
    /// Temporal adaptive quantization setting for H.265.
    pub enum H265TemporalAdaptiveQuantization {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

token_enum! {
    /// Temporal ids setting for H.265.
    pub enum H265TemporalIds {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

token_enum! {
    /// Tiles setting for H.265.
    pub enum H265Tiles {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

token_enum! {
    /// Unregistered SEI timecode setting for H.265.
    pub enum H265UnregisteredSeiTimecode {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

token_enum! {
    /// Sample entry written to MP4 outputs. `HVC1` carries parameter sets in the sample description.
    pub enum H265WriteMp4PackagingType {
        Hvc1 = "HVC1",
        Hev1 = "HEV1",
    }
}

// ============================================================================
// RECORDS
// ============================================================================

settings_record! {
    /// Quality-defined variable bitrate settings for H.265.
    pub struct H265QvbrSettings {
        /// Upper bound on the average bitrate in bits/second.
        max_average_bitrate / set_max_average_bitrate / with_max_average_bitrate: i32 = "MaxAverageBitrate" [range 1000, 1466400000],
        /// Target quality, 1 (lowest) to 10 (highest).
        qvbr_quality_level / set_qvbr_quality_level / with_qvbr_quality_level: i32 = "QvbrQualityLevel" [range 1, 10],
        /// Fractional refinement of `QvbrQualityLevel`, rounded to the nearest third by the service.
        qvbr_quality_level_fine_tune / set_qvbr_quality_level_fine_tune / with_qvbr_quality_level_fine_tune: f64 = "QvbrQualityLevelFineTune",
    }
}

settings_record! {
    /// H.265 (HEVC) encoder settings.
    pub struct H265Settings {
        adaptive_quantization / set_adaptive_quantization / with_adaptive_quantization: H265AdaptiveQuantization = "AdaptiveQuantization",
        alternate_transfer_function_sei / set_alternate_transfer_function_sei / with_alternate_transfer_function_sei: H265AlternateTransferFunctionSei = "AlternateTransferFunctionSei",
        /// Average bitrate in bits/second. Required for VBR and CBR.
        bitrate / set_bitrate / with_bitrate: i32 = "Bitrate" [range 1000, 1466400000],
        codec_level / set_codec_level / with_codec_level: H265CodecLevel = "CodecLevel",
        codec_profile / set_codec_profile / with_codec_profile: H265CodecProfile = "CodecProfile",
        dynamic_sub_gop / set_dynamic_sub_gop / with_dynamic_sub_gop: H265DynamicSubGop = "DynamicSubGop",
        flicker_adaptive_quantization / set_flicker_adaptive_quantization / with_flicker_adaptive_quantization: H265FlickerAdaptiveQuantization = "FlickerAdaptiveQuantization",
        /// Whether the frame rate comes from the source or from the numerator and denominator below.
        framerate_control / set_framerate_control / with_framerate_control: H265FramerateControl = "FramerateControl",
        framerate_conversion_algorithm / set_framerate_conversion_algorithm / with_framerate_conversion_algorithm: H265FramerateConversionAlgorithm = "FramerateConversionAlgorithm",
        framerate_denominator / set_framerate_denominator / with_framerate_denominator: i32 = "FramerateDenominator" [range 1, 2147483647],
        framerate_numerator / set_framerate_numerator / with_framerate_numerator: i32 = "FramerateNumerator" [range 1, 2147483647],
        gop_b_reference / set_gop_b_reference / with_gop_b_reference: H265GopBReference = "GopBReference",
        /// Number of GOPs between closed GOPs.
        gop_closed_cadence / set_gop_closed_cadence / with_gop_closed_cadence: i32 = "GopClosedCadence" [range 0, 2147483647],
        /// GOP length, in frames or seconds depending on `GopSizeUnits`.
        gop_size / set_gop_size / with_gop_size: f64 = "GopSize",
        gop_size_units / set_gop_size_units / with_gop_size_units: H265GopSizeUnits = "GopSizeUnits",
        hrd_buffer_initial_fill_percentage / set_hrd_buffer_initial_fill_percentage / with_hrd_buffer_initial_fill_percentage: i32 = "HrdBufferInitialFillPercentage" [range 0, 100],
        /// Size of the HRD buffer in bits.
        hrd_buffer_size / set_hrd_buffer_size / with_hrd_buffer_size: i32 = "HrdBufferSize" [range 0, 1466400000],
        interlace_mode / set_interlace_mode / with_interlace_mode: H265InterlaceMode = "InterlaceMode",
        /// Peak bitrate in bits/second for QVBR.
        max_bitrate / set_max_bitrate / with_max_bitrate: i32 = "MaxBitrate" [range 1000, 1466400000],
        /// Minimum number of frames between an IDR frame and a scene-change I-frame.
        min_i_interval / set_min_i_interval / with_min_i_interval: i32 = "MinIInterval" [range 0, 30],
        number_b_frames_between_reference_frames / set_number_b_frames_between_reference_frames / with_number_b_frames_between_reference_frames: i32 = "NumberBFramesBetweenReferenceFrames" [range 0, 7],
        number_reference_frames / set_number_reference_frames / with_number_reference_frames: i32 = "NumberReferenceFrames" [range 1, 6],
        par_control / set_par_control / with_par_control: H265ParControl = "ParControl",
        par_denominator / set_par_denominator / with_par_denominator: i32 = "ParDenominator" [range 1, 2147483647],
        par_numerator / set_par_numerator / with_par_numerator: i32 = "ParNumerator" [range 1, 2147483647],
        quality_tuning_level / set_quality_tuning_level / with_quality_tuning_level: H265QualityTuningLevel = "QualityTuningLevel",
        /// Settings used when `RateControlMode` is `QVBR`.
        qvbr_settings / set_qvbr_settings / with_qvbr_settings: H265QvbrSettings = "QvbrSettings",
        rate_control_mode / set_rate_control_mode / with_rate_control_mode: H265RateControlMode = "RateControlMode",
        sample_adaptive_offset_filter_mode / set_sample_adaptive_offset_filter_mode / with_sample_adaptive_offset_filter_mode: H265SampleAdaptiveOffsetFilterMode = "SampleAdaptiveOffsetFilterMode",
        scene_change_detect / set_scene_change_detect / with_scene_change_detect: H265SceneChangeDetect = "SceneChangeDetect",
        slices / set_slices / with_slices: i32 = "Slices" [range 1, 32],
        slow_pal / set_slow_pal / with_slow_pal: H265SlowPal = "SlowPal",
        spatial_adaptive_quantization / set_spatial_adaptive_quantization / with_spatial_adaptive_quantization: H265SpatialAdaptiveQuantization = "SpatialAdaptiveQuantization",
        telecine / set_telecine / with_telecine: H265Telecine = "Telecine",
        temporal_adaptive_quantization / set_temporal_adaptive_quantization / with_temporal_adaptive_quantization: H265TemporalAdaptiveQuantization = "TemporalAdaptiveQuantization",
        temporal_ids / set_temporal_ids / with_temporal_ids: H265TemporalIds = "TemporalIds",
        tiles / set_tiles / with_tiles: H265Tiles = "Tiles",
        unregistered_sei_timecode / set_unregistered_sei_timecode / with_unregistered_sei_timecode: H265UnregisteredSeiTimecode = "UnregisteredSeiTimecode",
        write_mp4_packaging_type / set_write_mp4_packaging_type / with_write_mp4_packaging_type: H265WriteMp4PackagingType = "WriteMp4PackagingType",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::SettingsRecord;

    #[test]
    fn bitrate_range_is_wider_than_h264() {
        let settings = H265Settings::new().with_bitrate(1_300_000_000);
        assert!(settings.validate().is_valid());
        assert!(!settings.with_bitrate(1_500_000_000).validate().is_valid());
    }

    #[test]
    fn profile_tokens_with_digits() {
        assert_eq!(H265CodecProfile::Main10High.as_str(), "MAIN10_HIGH");
        assert_eq!(H265CodecProfile::from("MAIN_422_8BIT_MAIN"), H265CodecProfile::Main4228BitMain);
    }
}
