//! Video settings
//!
//! Responsibilities:
//! - Output video stream description (geometry, AFD handling, timecode)
//! - Codec selection with one settings record per codec
//! - Per-codec encoder settings in the submodules
//! - Per-output preprocessors (color correction, deinterlacing, overlays)
//!
//! The codec submodules are re-exported here, so every video record is
//! reachable as `mediaspec_core::model::video::*`.

pub mod h264;
pub mod h265;
pub mod mpeg2;
pub mod preprocess;
pub mod prores;
pub mod vp9;

pub use h264::*;
pub use h265::*;
pub use mpeg2::*;
pub use preprocess::*;
pub use prores::*;
pub use vp9::*;

token_enum! {
    /// Video codec selector.
    pub enum VideoCodec {
        Av1 = "AV1",
        AvcIntra = "AVC_INTRA",
        FrameCapture = "FRAME_CAPTURE",
        H264 = "H_264",
        H265 = "H_265",
        Mpeg2 = "MPEG2",
        Prores = "PRORES",
        Vc3 = "VC3",
        Vp8 = "VP8",
        Vp9 = "VP9",
    }
}

token_enum! {
    /// How Active Format Description data is written to the output.
    pub enum AfdSignaling {
        None = "NONE",
        Auto = "AUTO",
        Fixed = "FIXED",
    }
}

token_enum! {
    /// Anti-aliasing filter used when scaling.
    pub enum AntiAlias {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

token_enum! {
    /// Whether color metadata is carried into the output.
    pub enum ColorMetadata {
        Ignore = "IGNORE",
        Insert = "INSERT",
    }
}

token_enum! {
    /// Drop-frame timecode for 29.97 fps outputs.
    pub enum DropFrameTimecode {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

token_enum! {
    /// How the encoder reacts to Active Format Description data in the input.
    pub enum RespondToAfd {
        None = "NONE",
        Respond = "RESPOND",
        Passthrough = "PASSTHROUGH",
    }
}

token_enum! {
    /// Whether the picture is stretched to the output resolution.
    pub enum ScalingBehavior {
        Default = "DEFAULT",
        StretchToOutput = "STRETCH_TO_OUTPUT",
    }
}

token_enum! {
    /// Whether timecode is written into the video elementary stream.
    pub enum VideoTimecodeInsertion {
        Disabled = "DISABLED",
        PicTimingSei = "PIC_TIMING_SEI",
    }
}

settings_record! {
    /// A rectangle in pixels, used for cropping and positioning.
    pub struct Rectangle {
        height / set_height / with_height: i32 = "Height" [range 2, 2147483647],
        width / set_width / with_width: i32 = "Width" [range 2, 2147483647],
        /// Distance from the left edge.
        x / set_x / with_x: i32 = "X" [range 0, 2147483647],
        /// Distance from the top edge.
        y / set_y / with_y: i32 = "Y" [range 0, 2147483647],
    }
}

settings_record! {
    /// Codec selection for a video output.
    ///
    /// Only the settings record matching `Codec` is used by the service.
    pub struct VideoCodecSettings {
        codec / set_codec / with_codec: VideoCodec = "Codec",
        h264_settings / set_h264_settings / with_h264_settings: H264Settings = "H264Settings",
        h265_settings / set_h265_settings / with_h265_settings: H265Settings = "H265Settings",
        mpeg2_settings / set_mpeg2_settings / with_mpeg2_settings: Mpeg2Settings = "Mpeg2Settings",
        prores_settings / set_prores_settings / with_prores_settings: ProresSettings = "ProresSettings",
        vp9_settings / set_vp9_settings / with_vp9_settings: Vp9Settings = "Vp9Settings",
    }
}

settings_record! {
    /// The video stream of an output: codec, geometry and picture processing.
    pub struct VideoDescription {
        afd_signaling / set_afd_signaling / with_afd_signaling: AfdSignaling = "AfdSignaling",
        anti_alias / set_anti_alias / with_anti_alias: AntiAlias = "AntiAlias",
        codec_settings / set_codec_settings / with_codec_settings: VideoCodecSettings = "CodecSettings",
        color_metadata / set_color_metadata / with_color_metadata: ColorMetadata = "ColorMetadata",
        /// Region of the input to keep. The whole frame is used when absent.
        crop / set_crop / with_crop: Rectangle = "Crop",
        drop_frame_timecode / set_drop_frame_timecode / with_drop_frame_timecode: DropFrameTimecode = "DropFrameTimecode",
        /// AFD value written when `AfdSignaling` is `FIXED`.
        fixed_afd / set_fixed_afd / with_fixed_afd: i32 = "FixedAfd" [range 0, 15],
        /// Output height in pixels. Follows the input when absent.
        height / set_height / with_height: i32 = "Height" [range 32, 8192],
        /// Placement of the picture inside the output frame.
        position / set_position / with_position: Rectangle = "Position",
        respond_to_afd / set_respond_to_afd / with_respond_to_afd: RespondToAfd = "RespondToAfd",
        scaling_behavior / set_scaling_behavior / with_scaling_behavior: ScalingBehavior = "ScalingBehavior",
        sharpness / set_sharpness / with_sharpness: i32 = "Sharpness" [range 0, 100],
        timecode_insertion / set_timecode_insertion / with_timecode_insertion: VideoTimecodeInsertion = "TimecodeInsertion",
        video_preprocessors / set_video_preprocessors / with_video_preprocessors: VideoPreprocessor = "VideoPreprocessors",
        /// Output width in pixels. Follows the input when absent.
        width / set_width / with_width: i32 = "Width" [range 32, 8192],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::SettingsRecord;

    #[test]
    fn codec_settings_nest_three_levels_deep() {
        let video = VideoDescription::new().with_codec_settings(
            VideoCodecSettings::new()
                .with_codec(VideoCodec::H264)
                .with_h264_settings(H264Settings::new().with_bitrate(10)),
        );
        let report = video.validate();
        assert_eq!(report.len(), 1);
        assert_eq!(report.violations()[0].path, "CodecSettings.H264Settings.Bitrate");
    }

    #[test]
    fn rectangles_dump_inside_their_parent() {
        let video = VideoDescription::new()
            .with_crop(Rectangle::new().with_width(1920).with_height(800).with_y(140))
            .with_width(1280);
        assert_eq!(
            video.to_string(),
            "{Crop: {Height: 800,Width: 1920,Y: 140},Width: 1280}"
        );
    }

    #[test]
    fn codec_token_uses_underscore_spelling() {
        assert_eq!(VideoCodec::H265.as_str(), "H_265");
        assert_eq!("FRAME_CAPTURE".parse::<VideoCodec>().unwrap(), VideoCodec::FrameCapture);
    }

    #[test]
    fn preprocessors_load_from_documents() {
        let video: VideoDescription = crate::document::from_json_str(
            r#"{ "videoPreprocessors": { "deinterlacer": { "mode": "ADAPTIVE" } }, "width": 1280 }"#,
        )
        .unwrap();
        assert_eq!(
            video.describe(),
            "{VideoPreprocessors: {Deinterlacer: {Mode: ADAPTIVE}},Width: 1280}"
        );
        assert_eq!(
            video.video_preprocessors().and_then(|p| p.deinterlacer()).and_then(|d| d.mode()),
            Some(&DeinterlacerMode::Adaptive)
        );
    }
}
