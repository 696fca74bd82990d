// Builds an H.264 video description, validates it and prints its JSON form.
//
// Usage: cargo run -p mediaspec-core --example h264_job [OUTPUT_JSON]

use mediaspec_core::model::{
    H264QvbrSettings, H264RateControlMode, H264Settings, VideoCodec, VideoCodecSettings,
    VideoDescription,
};
use mediaspec_core::{CoreResult, ModelConfig, SettingsRecord, save_record, to_json_string};
use std::env;
use std::path::PathBuf;

fn main() -> CoreResult<()> {
    let video = VideoDescription::new()
        .with_width(1920)
        .with_height(1080)
        .with_codec_settings(
            VideoCodecSettings::new()
                .with_codec(VideoCodec::H264)
                .with_h264_settings(
                    H264Settings::new()
                        .with_rate_control_mode(H264RateControlMode::Qvbr)
                        .with_max_bitrate(8_000_000)
                        .with_qvbr_settings(H264QvbrSettings::new().with_qvbr_quality_level(8)),
                ),
        );

    println!("{}", video.describe());

    let report = video.validate_with(&ModelConfig::from_env())?;
    println!("{}", report.format());

    match env::args().nth(1).map(PathBuf::from) {
        Some(path) => {
            save_record(&video, &path)?;
            println!("Saved to {}", path.display());
        }
        None => println!("{}", to_json_string(&video)?),
    }
    Ok(())
}
