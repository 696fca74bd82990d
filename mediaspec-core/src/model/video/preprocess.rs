// ============================================================================
// mediaspec-core/src/model/video/preprocess.rs
// ============================================================================
//
// VIDEO PREPROCESSORS: Per-output picture processing
//
// Preprocessors run on the decoded picture before it reaches the encoder of
// one output. Each one is off unless its settings record is present.
//
// KEY COMPONENTS:
// - VideoPreprocessor: container for every preprocessor of an output
// - ColorCorrector, Deinterlacer, NoiseReducer, TimecodeBurnin
// - ImageInserter / InsertableImage: graphic overlays, also used on inputs

// ============================================================================
// VOCABULARIES
// ============================================================================

token_enum! {
    /// Color space conversion applied by the color corrector.
    pub enum ColorSpaceConversion {
        None = "NONE",
        Force601 = "FORCE_601",
        Force709 = "FORCE_709",
        ForceHdr10 = "FORCE_HDR10",
        ForceHlg2020 = "FORCE_HLG_2020",
    }
}

token_enum! {
    /// Interpolation used when deinterlacing.
    pub enum DeinterlaceAlgorithm {
        Interpolate = "INTERPOLATE",
        InterpolateTicker = "INTERPOLATE_TICKER",
        Blend = "BLEND",
        BlendTicker = "BLEND_TICKER",
    }
}

token_enum! {
    /// Whether every frame is deinterlaced or only frames flagged interlaced.
    pub enum DeinterlacerControl {
        ForceAllFrames = "FORCE_ALL_FRAMES",
        Normal = "NORMAL",
    }
}

token_enum! {
    pub enum DeinterlacerMode {
        Deinterlace = "DEINTERLACE",
        InverseTelecine = "INVERSE_TELECINE",
        Adaptive = "ADAPTIVE",
    }
}

token_enum! {
    /// Noise reduction filter.
    pub enum NoiseReducerFilter {
        Bilateral = "BILATERAL",
        Mean = "MEAN",
        Gaussian = "GAUSSIAN",
        Lanczos = "LANCZOS",
        Sharpen = "SHARPEN",
        Conserve = "CONSERVE",
        Spatial = "SPATIAL",
    }
}

token_enum! {
    /// Where the burned-in timecode is drawn.
    pub enum TimecodeBurninPosition {
        TopCenter = "TOP_CENTER",
        TopLeft = "TOP_LEFT",
        TopRight = "TOP_RIGHT",
        MiddleLeft = "MIDDLE_LEFT",
        MiddleCenter = "MIDDLE_CENTER",
        MiddleRight = "MIDDLE_RIGHT",
        BottomLeft = "BOTTOM_LEFT",
        BottomCenter = "BOTTOM_CENTER",
        BottomRight = "BOTTOM_RIGHT",
    }
}

// ============================================================================
// RECORDS
// ============================================================================

settings_record! {
    /// Brightness, contrast, hue and saturation adjustment.
    pub struct ColorCorrector {
        brightness / set_brightness / with_brightness: i32 = "Brightness" [range 1, 100],
        color_space_conversion / set_color_space_conversion / with_color_space_conversion: ColorSpaceConversion = "ColorSpaceConversion",
        contrast / set_contrast / with_contrast: i32 = "Contrast" [range 1, 100],
        /// Hue rotation in degrees.
        hue / set_hue / with_hue: i32 = "Hue" [range -180, 180],
        saturation / set_saturation / with_saturation: i32 = "Saturation" [range 1, 100],
    }
}

settings_record! {
    pub struct Deinterlacer {
        algorithm / set_algorithm / with_algorithm: DeinterlaceAlgorithm = "Algorithm",
        control / set_control / with_control: DeinterlacerControl = "Control",
        mode / set_mode / with_mode: DeinterlacerMode = "Mode",
    }
}

settings_record! {
    /// One graphic overlay.
    pub struct InsertableImage {
        /// Time the image stays on screen, in milliseconds.
        duration / set_duration / with_duration: i32 = "Duration" [range 0, 2147483647],
        fade_in / set_fade_in / with_fade_in: i32 = "FadeIn" [range 0, 2147483647],
        fade_out / set_fade_out / with_fade_out: i32 = "FadeOut" [range 0, 2147483647],
        /// Rendered height in pixels. The image's own height when absent.
        height / set_height / with_height: i32 = "Height" [range 0, 2147483647],
        /// Location of a BMP, PNG or TGA file.
        image_inserter_input / set_image_inserter_input / with_image_inserter_input: String = "ImageInserterInput" [pattern r"^(s3|https?)://.+\.(bmp|BMP|png|PNG|tga|TGA)(\?.*)?$"],
        image_x / set_image_x / with_image_x: i32 = "ImageX" [range 0, 2147483647],
        image_y / set_image_y / with_image_y: i32 = "ImageY" [range 0, 2147483647],
        /// Stacking order. Higher layers are drawn on top.
        layer / set_layer / with_layer: i32 = "Layer" [range 0, 99],
        opacity / set_opacity / with_opacity: i32 = "Opacity" [range 0, 100],
        /// Timecode (HH:MM:SS:FF or HH:MM:SS;FF) of the first frame showing the image.
        start_time / set_start_time / with_start_time: String = "StartTime" [pattern r"^((([0-1]\d)|(2[0-3]))(:[0-5]\d){2}([:;][0-5]\d))$"],
    }
}

settings_record! {
    /// Graphic overlays, up to 20 per input or output.
    pub struct ImageInserter {
        insertable_images / set_insertable_images / with_insertable_images: Vec<InsertableImage> = "InsertableImages",
    }
}

settings_record! {
    /// Strength of the non-spatial noise reduction filters.
    pub struct NoiseReducerFilterSettings {
        strength / set_strength / with_strength: i32 = "Strength" [range 0, 3],
    }
}

settings_record! {
    pub struct NoiseReducerSpatialFilterSettings {
        post_filter_sharpen_strength / set_post_filter_sharpen_strength / with_post_filter_sharpen_strength: i32 = "PostFilterSharpenStrength" [range 0, 3],
        /// Higher values trade quality for speed.
        speed / set_speed / with_speed: i32 = "Speed" [range -2, 3],
        strength / set_strength / with_strength: i32 = "Strength" [range 0, 16],
    }
}

settings_record! {
    /// Noise reduction. `SpatialFilterSettings` applies to the `SPATIAL`
    /// filter, `FilterSettings` to the others.
    pub struct NoiseReducer {
        filter / set_filter / with_filter: NoiseReducerFilter = "Filter",
        filter_settings / set_filter_settings / with_filter_settings: NoiseReducerFilterSettings = "FilterSettings",
        spatial_filter_settings / set_spatial_filter_settings / with_spatial_filter_settings: NoiseReducerSpatialFilterSettings = "SpatialFilterSettings",
    }
}

settings_record! {
    /// Burns the output timecode into the picture.
    pub struct TimecodeBurnin {
        font_size / set_font_size / with_font_size: i32 = "FontSize" [range 10, 48],
        position / set_position / with_position: TimecodeBurninPosition = "Position",
        /// Printable ASCII text drawn before the timecode.
        prefix / set_prefix / with_prefix: String = "Prefix" [pattern r"^[ -~]+$"],
    }
}

settings_record! {
    /// Preprocessors enabled on one video output.
    pub struct VideoPreprocessor {
        color_corrector / set_color_corrector / with_color_corrector: ColorCorrector = "ColorCorrector",
        deinterlacer / set_deinterlacer / with_deinterlacer: Deinterlacer = "Deinterlacer",
        image_inserter / set_image_inserter / with_image_inserter: ImageInserter = "ImageInserter",
        noise_reducer / set_noise_reducer / with_noise_reducer: NoiseReducer = "NoiseReducer",
        timecode_burnin / set_timecode_burnin / with_timecode_burnin: TimecodeBurnin = "TimecodeBurnin",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::SettingsRecord;

    #[test]
    fn overlay_timecodes_and_sources_are_checked() {
        let image = InsertableImage::new()
            .with_image_inserter_input("s3://bucket/logo.png")
            .with_layer(3)
            .with_start_time("00:00:05:00");
        assert!(image.validate().is_valid());

        let image = image
            .with_image_inserter_input("s3://bucket/logo.gif")
            .with_start_time("25:00:00:00")
            .with_opacity(101);
        let paths: Vec<String> = image.validate().violations().iter().map(|v| v.path.clone()).collect();
        assert_eq!(paths, vec!["ImageInserterInput", "Opacity", "StartTime"]);
    }

    #[test]
    fn preprocessors_validate_through_the_container() {
        let preprocessors = VideoPreprocessor::new()
            .with_color_corrector(ColorCorrector::new().with_hue(-180).with_brightness(0))
            .with_noise_reducer(
                NoiseReducer::new()
                    .with_filter(NoiseReducerFilter::Spatial)
                    .with_spatial_filter_settings(NoiseReducerSpatialFilterSettings::new().with_speed(-3)),
            );
        let report = preprocessors.validate();
        let paths: Vec<&str> = report.violations().iter().map(|v| v.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["ColorCorrector.Brightness", "NoiseReducer.SpatialFilterSettings.Speed"]
        );
    }
}
