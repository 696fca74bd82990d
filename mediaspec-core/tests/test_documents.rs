use mediaspec_core::document::{load_any, save_any};
use mediaspec_core::model::{
    CmafAdditionalManifest, CmafGroupSettings, CmafSegmentControl, DestinationSettings,
    H264RateControlMode, H264Settings, S3DestinationAccessControl, S3DestinationSettings,
    H264QvbrSettings, S3ObjectCannedAcl,
};
use mediaspec_core::{AnyRecord, CoreError, RecordKind, SettingsRecord, load_record, save_record};
use std::error::Error;
use std::fs;
use tempfile::tempdir;

fn sample_group() -> CmafGroupSettings {
    CmafGroupSettings::new()
        .with_destination("s3://media-bucket/outputs/cmaf/")
        .with_segment_length(6)
        .with_fragment_length(2)
        .with_segment_control(CmafSegmentControl::SegmentedFiles)
        .with_min_final_segment_length(1.0)
        .with_additional_manifests(vec![
            CmafAdditionalManifest::new()
                .with_manifest_name_modifier("-hd")
                .with_selected_outputs(vec!["_1080p".to_string(), "_720p".to_string()]),
        ])
        .with_destination_settings(DestinationSettings::new().with_s3_settings(
            S3DestinationSettings::new().with_access_control(
                S3DestinationAccessControl::new()
                    .with_canned_acl(S3ObjectCannedAcl::BucketOwnerFullControl),
            ),
        ))
}

#[test]
fn test_save_and_load_record() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("nested").join("groups").join("cmaf.json");

    let group = sample_group();
    save_record(&group, &path)?;
    assert!(path.exists());

    let loaded: CmafGroupSettings = load_record(&path)?;
    assert_eq!(loaded, group);
    assert_eq!(loaded.describe(), group.describe());
    Ok(())
}

#[test]
fn test_saved_document_uses_service_key_names() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("cmaf.json");
    save_record(&sample_group(), &path)?;

    let contents = fs::read_to_string(&path)?;
    assert!(contents.contains("\"segmentLength\": 6"));
    assert!(contents.contains("\"minFinalSegmentLength\": 1.0"));
    assert!(contents.contains("\"cannedAcl\": \"BUCKET_OWNER_FULL_CONTROL\""));
    assert!(contents.contains("\"selectedOutputs\""));
    assert!(!contents.contains("baseUrl"));
    Ok(())
}

#[test]
fn test_load_any_record_by_kind() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("h264.json");
    fs::write(
        &path,
        r#"{ "rateControlMode": "QVBR", "maxBitrate": 6000000, "qvbrSettings": { "qvbrQualityLevel": 8 } }"#,
    )?;

    let record = load_any(RecordKind::H264Settings, &path)?;
    assert_eq!(record.kind(), RecordKind::H264Settings);
    assert_eq!(
        record.describe(),
        "{MaxBitrate: 6000000,QvbrSettings: {QvbrQualityLevel: 8},RateControlMode: QVBR}"
    );

    let expected: AnyRecord = H264Settings::new()
        .with_rate_control_mode(H264RateControlMode::Qvbr)
        .with_max_bitrate(6_000_000)
        .with_qvbr_settings(H264QvbrSettings::new().with_qvbr_quality_level(8))
        .into();
    assert_eq!(record, expected);

    let copy = dir.path().join("copy.json");
    save_any(&record, &copy)?;
    assert_eq!(load_any(RecordKind::H264Settings, &copy)?, record);
    Ok(())
}

#[test]
fn test_malformed_documents_are_json_errors() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("broken.json");
    fs::write(&path, r#"{ "bitrate": "fast" }"#)?;

    let result: Result<H264Settings, CoreError> = load_record(&path);
    assert!(matches!(result, Err(CoreError::Json(_))));
    Ok(())
}

#[test]
fn test_missing_documents_are_io_errors() {
    let result: Result<H264Settings, CoreError> =
        load_record(std::path::Path::new("surely/this/does/not/exist.json"));
    assert!(matches!(result, Err(CoreError::Io(_))));
}
