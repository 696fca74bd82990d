token_enum! {
    /// Apple ProRes flavour.
    pub enum ProresCodecProfile {
        AppleProres422 = "APPLE_PRORES_422",
        AppleProres422Hq = "APPLE_PRORES_422_HQ",
        AppleProres422Lt = "APPLE_PRORES_422_LT",
        AppleProres422Proxy = "APPLE_PRORES_422_PROXY",
    }
}

token_enum! {
    /// Framerate control setting for Apple ProRes.
    pub enum ProresFramerateControl {
        InitializeFromSource = "INITIALIZE_FROM_SOURCE",
        Specified = "SPECIFIED",
    }
}

token_enum! {
    /// Framerate conversion algorithm setting for Apple ProRes.
    pub enum ProresFramerateConversionAlgorithm {
        DuplicateDrop = "DUPLICATE_DROP",
        Interpolate = "INTERPOLATE",
    }
}

token_enum! {
    /// Interlace mode setting for Apple ProRes.
    pub enum ProresInterlaceMode {
        Progressive = "PROGRESSIVE",
        TopField = "TOP_FIELD",
        BottomField = "BOTTOM_FIELD",
        FollowTopField = "FOLLOW_TOP_FIELD",
        FollowBottomField = "FOLLOW_BOTTOM_FIELD",
    }
}

token_enum! {
    /// Pixel aspect ratio control setting for Apple ProRes.
    pub enum ProresParControl {
        InitializeFromSource = "INITIALIZE_FROM_SOURCE",
        Specified = "SPECIFIED",
    }
}

token_enum! {
    /// Slow PAL setting for Apple ProRes.
    pub enum ProresSlowPal {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

token_enum! {
    /// Telecine setting for Apple ProRes.
    pub enum ProresTelecine {
        None = "NONE",
        Hard = "HARD",
    }
}

settings_record! {
    /// Apple ProRes encoder settings. ProRes is intra-only, so there is no GOP or bitrate control.
    pub struct ProresSettings {
        codec_profile / set_codec_profile / with_codec_profile: ProresCodecProfile = "CodecProfile",
        framerate_control / set_framerate_control / with_framerate_control: ProresFramerateControl = "FramerateControl",
        framerate_conversion_algorithm / set_framerate_conversion_algorithm / with_framerate_conversion_algorithm: ProresFramerateConversionAlgorithm = "FramerateConversionAlgorithm",
        framerate_denominator / set_framerate_denominator / with_framerate_denominator: i32 = "FramerateDenominator" [range 1, 2147483647],
        framerate_numerator / set_framerate_numerator / with_framerate_numerator: i32 = "FramerateNumerator" [range 1, 2147483647],
        interlace_mode / set_interlace_mode / with_interlace_mode: ProresInterlaceMode = "InterlaceMode",
        par_control / set_par_control / with_par_control: ProresParControl = "ParControl",
        par_denominator / set_par_denominator / with_par_denominator: i32 = "ParDenominator" [range 1, 2147483647],
        par_numerator / set_par_numerator / with_par_numerator: i32 = "ParNumerator" [range 1, 2147483647],
        slow_pal / set_slow_pal / with_slow_pal: ProresSlowPal = "SlowPal",
        telecine / set_telecine / with_telecine: ProresTelecine = "Telecine",
    }
}
