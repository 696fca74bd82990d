use mediaspec_core::SettingsRecord;
use mediaspec_core::model::{
    Eac3Settings, H264CodecProfile, H264QvbrSettings, H264RateControlMode, H264Settings,
    M2tsSettings,
};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn sample_h264() -> H264Settings {
    H264Settings::new()
        .with_rate_control_mode("QVBR")
        .with_bitrate(5_000_000)
        .with_gop_size(2.0)
        .with_qvbr_settings(H264QvbrSettings::new().with_qvbr_quality_level(8))
}

#[test]
fn test_record_equals_itself() {
    let settings = sample_h264();
    assert_eq!(settings, settings);

    let nan = Eac3Settings::new().with_lo_ro_center_mix_level(f64::NAN);
    assert_eq!(nan, nan.clone());
}

#[test]
fn test_field_wise_equal_records_hash_identically() {
    let a = sample_h264();
    let b = sample_h264();
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));

    let empty_a = H264Settings::new();
    let empty_b = H264Settings::default();
    assert_eq!(empty_a, empty_b);
    assert_eq!(hash_of(&empty_a), hash_of(&empty_b));
}

#[test]
fn test_absent_field_is_not_equal_to_any_value() {
    let with_one_slice = H264Settings::new().with_slices(1);
    let without = H264Settings::new();
    assert_ne!(with_one_slice, without);
    assert_ne!(without, with_one_slice);
}

#[test]
fn test_unset_field_reads_absent_and_is_not_described() {
    let settings = H264Settings::new().with_bitrate(5_000_000);
    assert_eq!(settings.max_bitrate(), None);
    assert_eq!(settings.rate_control_mode(), None);
    assert!(!settings.describe().contains("MaxBitrate"));
    assert!(!settings.describe().contains("RateControlMode"));
}

#[test]
fn test_set_then_get_returns_value() {
    let mut settings = H264Settings::new();
    settings.set_bitrate(5_000_000);
    settings.set_gop_size(2.5);
    settings.set_codec_profile(H264CodecProfile::High);
    assert_eq!(settings.bitrate(), Some(5_000_000));
    assert_eq!(settings.gop_size(), Some(2.5));
    assert_eq!(settings.codec_profile(), Some(&H264CodecProfile::High));

    let mut mux = M2tsSettings::new();
    mux.set_audio_pids(vec![482, 483]);
    assert_eq!(mux.audio_pids(), Some(&[482, 483][..]));
}

#[test]
fn test_raw_and_typed_enum_writes_are_identical() {
    let mut raw = H264Settings::new();
    raw.set_rate_control_mode("QVBR");
    let mut typed = H264Settings::new();
    typed.set_rate_control_mode(H264RateControlMode::Qvbr);

    assert_eq!(raw, typed);
    assert_eq!(hash_of(&raw), hash_of(&typed));
    assert_eq!(raw.describe(), typed.describe());
    assert_eq!(raw.rate_control_mode(), typed.rate_control_mode());
    assert_eq!(
        raw.rate_control_mode().map(|mode| mode.as_str()),
        Some(H264RateControlMode::Qvbr.as_str())
    );
}

#[test]
fn test_with_composes_in_either_order() {
    let forward = H264Settings::new()
        .with_bitrate(5_000_000)
        .with_rate_control_mode(H264RateControlMode::Cbr);
    let backward = H264Settings::new()
        .with_rate_control_mode(H264RateControlMode::Cbr)
        .with_bitrate(5_000_000);

    let mut sequential = H264Settings::new();
    sequential.set_bitrate(5_000_000);
    sequential.set_rate_control_mode(H264RateControlMode::Cbr);

    assert_eq!(forward, backward);
    assert_eq!(forward, sequential);
    assert_eq!(forward.describe(), backward.describe());
}

#[test]
fn test_qvbr_example_describes_and_equals_typed_record() {
    let raw = H264Settings::new()
        .with_rate_control_mode("QVBR")
        .with_bitrate(5_000_000);
    let typed = H264Settings::new()
        .with_rate_control_mode(H264RateControlMode::Qvbr)
        .with_bitrate(5_000_000);

    let dump = raw.describe();
    assert!(dump.contains("RateControlMode: QVBR"));
    assert!(dump.contains("Bitrate: 5000000"));
    assert_eq!(dump, "{Bitrate: 5000000,RateControlMode: QVBR}");
    assert_eq!(raw, typed);
}

#[test]
fn test_describe_format() {
    assert_eq!(H264Settings::new().describe(), "{}");
    assert_eq!(
        sample_h264().to_string(),
        "{Bitrate: 5000000,GopSize: 2.0,QvbrSettings: {QvbrQualityLevel: 8},RateControlMode: QVBR}"
    );
}

#[test]
fn test_unknown_tokens_are_preserved() {
    let settings = H264Settings::new().with_rate_control_mode("ABR");
    let mode = settings.rate_control_mode().unwrap();
    assert!(!mode.is_known());
    assert_eq!(mode.as_str(), "ABR");
    assert_eq!(settings.describe(), "{RateControlMode: ABR}");
}

#[test]
fn test_records_work_as_set_members() {
    let mut seen = HashSet::new();
    seen.insert(sample_h264());
    seen.insert(sample_h264());
    seen.insert(H264Settings::new());
    assert_eq!(seen.len(), 2);
}

#[test]
fn test_records_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<H264Settings>();
    assert_send_sync::<M2tsSettings>();

    let settings = sample_h264();
    let handle = std::thread::spawn(move || settings.describe());
    assert!(handle.join().unwrap().starts_with("{Bitrate"));
}
