use mediaspec_core::model::{
    AudioCodecSettings, AudioDescription, Eac3Settings, H264RateControlMode, H264Settings,
    M2tsSettings,
};
use mediaspec_core::{AnyRecord, CoreError, RecordKind, SettingsRecord};
use serde_json::json;

#[test]
fn test_field_names_ignore_case_and_separators() {
    for name in ["RateControlMode", "rateControlMode", "rate_control_mode", "RATE-CONTROL-MODE"] {
        let info = H264Settings::field_info(name).unwrap();
        assert_eq!(info.name, "RateControlMode");
        assert_eq!(info.wire_name(), "rateControlMode");
    }
    assert!(H264Settings::field_info("RateControl").is_none());
}

#[test]
fn test_field_metadata() {
    let bitrate = H264Settings::field_info("Bitrate").unwrap();
    assert_eq!(bitrate.kind, "integer");
    assert_eq!(bitrate.constraint.to_string(), "1000..=1152000000");

    let mode = H264Settings::field_info("RateControlMode").unwrap();
    assert_eq!(mode.kind, "H264RateControlMode");
    assert_eq!(mode.tokens, Some(&["VBR", "CBR", "QVBR"][..]));

    let pids = M2tsSettings::field_info("AudioPids").unwrap();
    assert_eq!(pids.kind, "list");
    assert_eq!(pids.constraint.to_string(), "32..=8182");

    let qvbr = H264Settings::field_info("QvbrSettings").unwrap();
    assert_eq!(qvbr.kind, "H264QvbrSettings");
    assert!(qvbr.constraint.is_none());
}

#[test]
fn test_set_field_matches_typed_setter() {
    let mut dynamic = H264Settings::new();
    dynamic.set_field("rate_control_mode", json!("QVBR")).unwrap();
    dynamic.set_field("Bitrate", json!(5000000)).unwrap();

    let typed = H264Settings::new()
        .with_rate_control_mode(H264RateControlMode::Qvbr)
        .with_bitrate(5_000_000);
    assert_eq!(dynamic, typed);
    assert_eq!(dynamic.get_field("bitrate").unwrap(), Some(json!(5000000)));
}

#[test]
fn test_set_field_accepts_nested_records() {
    let mut settings = H264Settings::new();
    settings
        .set_field("QvbrSettings", json!({ "qvbrQualityLevel": 9, "qvbrQualityLevelFineTune": 0.33 }))
        .unwrap();
    assert_eq!(
        settings.describe(),
        "{QvbrSettings: {QvbrQualityLevel: 9,QvbrQualityLevelFineTune: 0.33}}"
    );
}

#[test]
fn test_set_field_does_not_check_constraints() {
    let mut settings = H264Settings::new();
    settings.set_field("Slices", json!(99)).unwrap();
    assert_eq!(settings.slices(), Some(99));
    assert_eq!(settings.validate().len(), 1);
}

#[test]
fn test_set_field_rejects_wrong_shapes() {
    let mut settings = H264Settings::new().with_slices(4);
    let err = settings.set_field("Bitrate", json!("fast")).unwrap_err();
    assert!(matches!(
        err,
        CoreError::InvalidFieldValue { record: "H264Settings", field: "Bitrate", .. }
    ));
    // A failed write leaves the record untouched
    assert_eq!(settings, H264Settings::new().with_slices(4));
}

#[test]
fn test_unknown_fields_are_errors() {
    let mut settings = H264Settings::new();
    let err = settings.set_field("Crf", json!(23)).unwrap_err();
    assert!(matches!(err, CoreError::UnknownField { record: "H264Settings", .. }));
    assert!(settings.get_field("Crf").is_err());
}

#[test]
fn test_clear_field_and_null_writes() {
    let mut settings = H264Settings::new().with_bitrate(5_000_000).with_slices(2);
    settings.clear_field("bitrate").unwrap();
    assert_eq!(settings.bitrate(), None);
    assert_eq!(settings.get_field("Bitrate").unwrap(), None);

    settings.set_field("Slices", serde_json::Value::Null).unwrap();
    assert!(settings.is_empty());
}

#[test]
fn test_any_record_dispatch() {
    let kind: RecordKind = "m2ts-settings".parse().unwrap();
    let mut record = AnyRecord::empty(kind);
    record.set_field("AudioPids", json!([482, 483])).unwrap();
    record.set_field("VideoPid", json!(481)).unwrap();
    assert_eq!(record.to_string(), "{AudioPids: [482, 483],VideoPid: 481}");
    assert_eq!(record.get_field("audioPids").unwrap(), Some(json!([482, 483])));

    match &record {
        AnyRecord::M2tsSettings(settings) => assert_eq!(settings.video_pid(), Some(481)),
        other => panic!("unexpected record kind: {}", other.kind()),
    }
}

#[test]
fn test_set_field_leaves_other_fields_untouched() {
    let mut settings = Eac3Settings::new()
        .with_lo_ro_center_mix_level(f64::NAN)
        .with_lt_rt_surround_mix_level(f64::NEG_INFINITY);
    settings.set_field("Bitrate", json!(384000)).unwrap();

    assert!(settings.lo_ro_center_mix_level().unwrap().is_nan());
    assert_eq!(settings.lt_rt_surround_mix_level(), Some(f64::NEG_INFINITY));
    assert_eq!(settings.bitrate(), Some(384000));
    assert_eq!(
        settings.describe(),
        "{Bitrate: 384000,LoRoCenterMixLevel: NaN,LtRtSurroundMixLevel: -inf}"
    );

    // A rejected write leaves the non-finite values in place too
    assert!(settings.set_field("Dialnorm", json!("loud")).is_err());
    assert!(settings.lo_ro_center_mix_level().unwrap().is_nan());
}

#[test]
fn test_non_finite_doubles_read_and_write_as_strings() {
    let mut settings = Eac3Settings::new().with_lo_ro_center_mix_level(f64::NAN);
    assert_eq!(settings.get_field("LoRoCenterMixLevel").unwrap(), Some(json!("NaN")));

    settings.set_field("LtRtCenterMixLevel", json!("-Infinity")).unwrap();
    assert_eq!(settings.lt_rt_center_mix_level(), Some(f64::NEG_INFINITY));
    assert_eq!(settings.get_field("LtRtCenterMixLevel").unwrap(), Some(json!("-Infinity")));
}

#[test]
fn test_nested_writes_keep_non_finite_values() {
    let mut track = AudioDescription::new().with_codec_settings(
        AudioCodecSettings::new()
            .with_eac3_settings(Eac3Settings::new().with_lo_ro_center_mix_level(f64::NAN)),
    );
    track.set_field("StreamName", json!("English")).unwrap();
    assert_eq!(
        track.get_field("CodecSettings").unwrap(),
        Some(json!({ "eac3Settings": { "loRoCenterMixLevel": "NaN" } }))
    );

    // A nested value read back through get_field writes an equal record
    let codec = track.get_field("CodecSettings").unwrap().unwrap();
    let mut copy = AudioDescription::new().with_stream_name("English");
    copy.set_field("CodecSettings", codec).unwrap();
    assert_eq!(copy, track);
}
