//! MPEG-2 video settings.

token_enum! {
    /// Adaptive quantization setting for MPEG-2.
    pub enum Mpeg2AdaptiveQuantization {
        Off = "OFF",
        Low = "LOW",
        Medium = "MEDIUM",
        High = "HIGH",
    }
}

token_enum! {
    /// Codec level setting for MPEG-2.
    pub enum Mpeg2CodecLevel {
        Auto = "AUTO",
        Low = "LOW",
        Main = "MAIN",
        High1440 = "HIGH1440",
        High = "HIGH",
    }
}

token_enum! {
    /// Codec profile setting for MPEG-2.
    pub enum Mpeg2CodecProfile {
        Main = "MAIN",
        Profile422 = "PROFILE_422",
    }
}

token_enum! {
    /// Dynamic sub-GOP setting for MPEG-2.
    pub enum Mpeg2DynamicSubGop {
        Adaptive = "ADAPTIVE",
        Static = "STATIC",
    }
}

token_enum! {
    /// Framerate control setting for MPEG-2.
    pub enum Mpeg2FramerateControl {
        InitializeFromSource = "INITIALIZE_FROM_SOURCE",
        Specified = "SPECIFIED",
    }
}

token_enum! {
    /// Framerate conversion algorithm setting for MPEG-2.
    pub enum Mpeg2FramerateConversionAlgorithm {
        DuplicateDrop = "DUPLICATE_DROP",
        Interpolate = "INTERPOLATE",
    }
}

token_enum! {
    /// GOP size units setting for MPEG-2.
    pub enum Mpeg2GopSizeUnits {
        Frames = "FRAMES",
        Seconds = "SECONDS",
    }
}

token_enum! {
    /// Interlace mode setting for MPEG-2.
    pub enum Mpeg2InterlaceMode {
        Progressive = "PROGRESSIVE",
        TopField = "TOP_FIELD",
        BottomField = "BOTTOM_FIELD",
        FollowTopField = "FOLLOW_TOP_FIELD",
        FollowBottomField = "FOLLOW_BOTTOM_FIELD",
    }
}

token_enum! {
    /// Intra DC precision setting for MPEG-2.
    pub enum Mpeg2IntraDcPrecision {
        Auto = "AUTO",
        IntraDcPrecision8 = "INTRA_DC_PRECISION_8",
        IntraDcPrecision9 = "INTRA_DC_PRECISION_9",
        IntraDcPrecision10 = "INTRA_DC_PRECISION_10",
        IntraDcPrecision11 = "INTRA_DC_PRECISION_11",
    }
}

token_enum! {
    /// Pixel aspect ratio control setting for MPEG-2.
    pub enum Mpeg2ParControl {
        InitializeFromSource = "INITIALIZE_FROM_SOURCE",
        Specified = "SPECIFIED",
    }
}

token_enum! {
    /// Quality tuning level setting for MPEG-2.
    pub enum Mpeg2QualityTuningLevel {
        SinglePass = "SINGLE_PASS",
        MultiPass = "MULTI_PASS",
    }
}

token_enum! {
    /// Rate control mode setting for MPEG-2.
    pub enum Mpeg2RateControlMode {
        Vbr = "VBR",
        Cbr = "CBR",
    }
}

token_enum! {
    /// Scene change detect setting for MPEG-2.
    pub enum Mpeg2SceneChangeDetect {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

token_enum! {
    /// Slow PAL setting for MPEG-2.
    pub enum Mpeg2SlowPal {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

token_enum! {
    /// Spatial adaptive quantization setting for MPEG-2.
    pub enum Mpeg2SpatialAdaptiveQuantization {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

token_enum! {
    /// Syntax setting for MPEG-2.
    pub enum Mpeg2Syntax {
        Default = "DEFAULT",
        D10 = "D_10",
    }
}

token_enum! {
    /// Telecine setting for MPEG-2.
    pub enum Mpeg2Telecine {
        None = "NONE",
        Soft = "SOFT",
        Hard = "HARD",
    }
}

token_enum! {
    /// Temporal adaptive quantization setting for MPEG-2.
    pub enum Mpeg2TemporalAdaptiveQuantization {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

settings_record! {
    /// MPEG-2 video encoder settings.
    pub struct Mpeg2Settings {
        adaptive_quantization / set_adaptive_quantization / with_adaptive_quantization: Mpeg2AdaptiveQuantization = "AdaptiveQuantization",
        /// Average bitrate in bits/second.
        bitrate / set_bitrate / with_bitrate: i32 = "Bitrate" [range 1000, 288000000],
        codec_level / set_codec_level / with_codec_level: Mpeg2CodecLevel = "CodecLevel",
        codec_profile / set_codec_profile / with_codec_profile: Mpeg2CodecProfile = "CodecProfile",
        dynamic_sub_gop / set_dynamic_sub_gop / with_dynamic_sub_gop: Mpeg2DynamicSubGop = "DynamicSubGop",
        framerate_control / set_framerate_control / with_framerate_control: Mpeg2FramerateControl = "FramerateControl",
        framerate_conversion_algorithm / set_framerate_conversion_algorithm / with_framerate_conversion_algorithm: Mpeg2FramerateConversionAlgorithm = "FramerateConversionAlgorithm",
        framerate_denominator / set_framerate_denominator / with_framerate_denominator: i32 = "FramerateDenominator" [range 1, 1001],
        framerate_numerator / set_framerate_numerator / with_framerate_numerator: i32 = "FramerateNumerator" [range 24, 60000],
        gop_closed_cadence / set_gop_closed_cadence / with_gop_closed_cadence: i32 = "GopClosedCadence" [range 0, 2147483647],
        gop_size / set_gop_size / with_gop_size: f64 = "GopSize",
        gop_size_units / set_gop_size_units / with_gop_size_units: Mpeg2GopSizeUnits = "GopSizeUnits",
        hrd_buffer_initial_fill_percentage / set_hrd_buffer_initial_fill_percentage / with_hrd_buffer_initial_fill_percentage: i32 = "HrdBufferInitialFillPercentage" [range 0, 100],
        hrd_buffer_size / set_hrd_buffer_size / with_hrd_buffer_size: i32 = "HrdBufferSize" [range 0, 47185920],
        interlace_mode / set_interlace_mode / with_interlace_mode: Mpeg2InterlaceMode = "InterlaceMode",
        intra_dc_precision / set_intra_dc_precision / with_intra_dc_precision: Mpeg2IntraDcPrecision = "IntraDcPrecision",
        max_bitrate / set_max_bitrate / with_max_bitrate: i32 = "MaxBitrate" [range 1000, 300000000],
        min_i_interval / set_min_i_interval / with_min_i_interval: i32 = "MinIInterval" [range 0, 30],
        number_b_frames_between_reference_frames / set_number_b_frames_between_reference_frames / with_number_b_frames_between_reference_frames: i32 = "NumberBFramesBetweenReferenceFrames" [range 0, 7],
        par_control / set_par_control / with_par_control: Mpeg2ParControl = "ParControl",
        par_denominator / set_par_denominator / with_par_denominator: i32 = "ParDenominator" [range 1, 2147483647],
        par_numerator / set_par_numerator / with_par_numerator: i32 = "ParNumerator" [range 1, 2147483647],
        quality_tuning_level / set_quality_tuning_level / with_quality_tuning_level: Mpeg2QualityTuningLevel = "QualityTuningLevel",
        rate_control_mode / set_rate_control_mode / with_rate_control_mode: Mpeg2RateControlMode = "RateControlMode",
        scene_change_detect / set_scene_change_detect / with_scene_change_detect: Mpeg2SceneChangeDetect = "SceneChangeDetect",
        slow_pal / set_slow_pal / with_slow_pal: Mpeg2SlowPal = "SlowPal",
        softness / set_softness / with_softness: i32 = "Softness" [range 0, 128],
        spatial_adaptive_quantization / set_spatial_adaptive_quantization / with_spatial_adaptive_quantization: Mpeg2SpatialAdaptiveQuantization = "SpatialAdaptiveQuantization",
        /// `D_10` produces Sony IMX compatible streams.
        syntax / set_syntax / with_syntax: Mpeg2Syntax = "Syntax",
        telecine / set_telecine / with_telecine: Mpeg2Telecine = "Telecine",
        temporal_adaptive_quantization / set_temporal_adaptive_quantization / with_temporal_adaptive_quantization: Mpeg2TemporalAdaptiveQuantization = "TemporalAdaptiveQuantization",
    }
}
