//! VP9 video settings.

token_enum! {
    /// Framerate control setting for VP9.
    pub enum Vp9FramerateControl {
        InitializeFromSource = "INITIALIZE_FROM_SOURCE",
        Specified = "SPECIFIED",
    }
}

token_enum! {
    /// Framerate conversion algorithm setting for VP9.
    pub enum Vp9FramerateConversionAlgorithm {
        DuplicateDrop = "DUPLICATE_DROP",
        Interpolate = "INTERPOLATE",
    }
}

token_enum! {
    /// Pixel aspect ratio control setting for VP9.
    pub enum Vp9ParControl {
        InitializeFromSource = "INITIALIZE_FROM_SOURCE",
        Specified = "SPECIFIED",
    }
}

token_enum! {
    /// Quality tuning level setting for VP9.
    pub enum Vp9QualityTuningLevel {
        MultiPass = "MULTI_PASS",
        MultiPassHq = "MULTI_PASS_HQ",
    }
}

token_enum! {
    /// Rate control mode setting for VP9.
    pub enum Vp9RateControlMode {
        Vbr = "VBR",
    }
}

settings_record! {
    /// VP9 encoder settings, used for WebM outputs.
    pub struct Vp9Settings {
        /// Target bitrate in bits/second.
        bitrate / set_bitrate / with_bitrate: i32 = "Bitrate" [range 1000, 480000000],
        framerate_control / set_framerate_control / with_framerate_control: Vp9FramerateControl = "FramerateControl",
        framerate_conversion_algorithm / set_framerate_conversion_algorithm / with_framerate_conversion_algorithm: Vp9FramerateConversionAlgorithm = "FramerateConversionAlgorithm",
        framerate_denominator / set_framerate_denominator / with_framerate_denominator: i32 = "FramerateDenominator" [range 1, 2147483647],
        framerate_numerator / set_framerate_numerator / with_framerate_numerator: i32 = "FramerateNumerator" [range 1, 2147483647],
        /// GOP size in frames.
        gop_size / set_gop_size / with_gop_size: f64 = "GopSize",
        hrd_buffer_size / set_hrd_buffer_size / with_hrd_buffer_size: i32 = "HrdBufferSize" [range 0, 47185920],
        max_bitrate / set_max_bitrate / with_max_bitrate: i32 = "MaxBitrate" [range 1000, 480000000],
        par_control / set_par_control / with_par_control: Vp9ParControl = "ParControl",
        par_denominator / set_par_denominator / with_par_denominator: i32 = "ParDenominator" [range 1, 2147483647],
        par_numerator / set_par_numerator / with_par_numerator: i32 = "ParNumerator" [range 1, 2147483647],
        quality_tuning_level / set_quality_tuning_level / with_quality_tuning_level: Vp9QualityTuningLevel = "QualityTuningLevel",
        /// Only `VBR` is supported.
        rate_control_mode / set_rate_control_mode / with_rate_control_mode: Vp9RateControlMode = "RateControlMode",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::SettingsRecord;

    #[test]
    fn single_token_vocabulary_still_keeps_unknown_tokens() {
        let settings = Vp9Settings::new().with_rate_control_mode("CBR");
        assert_eq!(settings.rate_control_mode().map(|mode| mode.as_str()), Some("CBR"));
        assert_eq!(settings.validate().len(), 1);
    }
}
