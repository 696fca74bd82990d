// ============================================================================
// mediaspec-core/src/model/output_group.rs
// ============================================================================
//
// OUTPUT GROUP SETTINGS: Packaging and delivery of a group of outputs
//
// KEY COMPONENTS:
// - CmafGroupSettings / HlsGroupSettings: packaging settings per group type
// - CmafAdditionalManifest / HlsAdditionalManifest: manifests over output subsets
// - HlsCaptionLanguageMapping: caption languages advertised in HLS playlists
// - DestinationSettings and the S3 records: where and how files are written
// - CmafEncryptionSettings / HlsEncryptionSettings: DRM through SPEKE or a static key

use super::language::LanguageCode;

token_enum! {
    /// Client cache setting for CMAF output groups.
    pub enum CmafClientCache {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

token_enum! {
    /// Codec string syntax used in the manifest.
    pub enum CmafCodecSpecification {
        Rfc6381 = "RFC_6381",
        Rfc4281 = "RFC_4281",
    }
}

token_enum! {
    /// Whether manifests are gzip-compressed.
    pub enum CmafManifestCompression {
        Gzip = "GZIP",
        None = "NONE",
    }
}

token_enum! {
    /// Manifest duration format setting for CMAF output groups.
    pub enum CmafManifestDurationFormat {
        FloatingPoint = "FLOATING_POINT",
        Integer = "INTEGER",
    }
}

token_enum! {
    /// Mpd profile setting for CMAF output groups.
    pub enum CmafMpdProfile {
        MainProfile = "MAIN_PROFILE",
        OnDemandProfile = "ON_DEMAND_PROFILE",
    }
}

token_enum! {
    /// One file per output, or one file per segment.
    pub enum CmafSegmentControl {
        SingleFile = "SINGLE_FILE",
        SegmentedFiles = "SEGMENTED_FILES",
    }
}

token_enum! {
    /// Stream inf resolution setting for CMAF output groups.
    pub enum CmafStreamInfResolution {
        Include = "INCLUDE",
        Exclude = "EXCLUDE",
    }
}

token_enum! {
    /// Write dash manifest setting for CMAF output groups.
    pub enum CmafWriteDashManifest {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

token_enum! {
    /// Write hls manifest setting for CMAF output groups.
    pub enum CmafWriteHlsManifest {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

token_enum! {
    /// Write segment timeline in representation setting for CMAF output groups.
    pub enum CmafWriteSegmentTimelineInRepresentation {
        Enabled = "ENABLED",
        Disabled = "DISABLED",
    }
}

token_enum! {
    /// Ad marker style written to the playlists.
    pub enum HlsAdMarkers {
        Elemental = "ELEMENTAL",
        ElementalScte35 = "ELEMENTAL_SCTE35",
    }
}

token_enum! {
    /// Whether caption languages are listed in the master playlist.
    pub enum HlsCaptionLanguageSetting {
        Insert = "INSERT",
        Omit = "OMIT",
        None = "NONE",
    }
}

token_enum! {
    /// Client cache setting for HLS output groups.
    pub enum HlsClientCache {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }
}

token_enum! {
    /// Codec string syntax used in the manifest.
    pub enum HlsCodecSpecification {
        Rfc6381 = "RFC_6381",
        Rfc4281 = "RFC_4281",
    }
}

token_enum! {
    /// Directory structure setting for HLS output groups.
    pub enum HlsDirectoryStructure {
        SingleDirectory = "SINGLE_DIRECTORY",
        SubdirectoryPerStream = "SUBDIRECTORY_PER_STREAM",
    }
}

token_enum! {
    /// Whether manifests are gzip-compressed.
    pub enum HlsManifestCompression {
        Gzip = "GZIP",
        None = "NONE",
    }
}

token_enum! {
    /// Manifest duration format setting for HLS output groups.
    pub enum HlsManifestDurationFormat {
        FloatingPoint = "FLOATING_POINT",
        Integer = "INTEGER",
    }
}

token_enum! {
    /// Output selection setting for HLS output groups.
    pub enum HlsOutputSelection {
        ManifestsAndSegments = "MANIFESTS_AND_SEGMENTS",
        SegmentsOnly = "SEGMENTS_ONLY",
    }
}

token_enum! {
    /// Program date time setting for HLS output groups.
    pub enum HlsProgramDateTime {
        Include = "INCLUDE",
        Exclude = "EXCLUDE",
    }
}

token_enum! {
    /// One file per output, or one file per segment.
    pub enum HlsSegmentControl {
        SingleFile = "SINGLE_FILE",
        SegmentedFiles = "SEGMENTED_FILES",
    }
}

token_enum! {
    /// Stream inf resolution setting for HLS output groups.
    pub enum HlsStreamInfResolution {
        Include = "INCLUDE",
        Exclude = "EXCLUDE",
    }
}

token_enum! {
    /// Timed metadata id3 frame setting for HLS output groups.
    pub enum HlsTimedMetadataId3Frame {
        None = "NONE",
        Priv = "PRIV",
        Tdrl = "TDRL",
    }
}

token_enum! {
    /// Canned access control list applied to written objects.
    pub enum S3ObjectCannedAcl {
        PublicRead = "PUBLIC_READ",
        AuthenticatedRead = "AUTHENTICATED_READ",
        BucketOwnerRead = "BUCKET_OWNER_READ",
        BucketOwnerFullControl = "BUCKET_OWNER_FULL_CONTROL",
    }
}

token_enum! {
    /// Server-side encryption applied to written objects.
    pub enum S3ServerSideEncryptionType {
        ServerSideEncryptionS3 = "SERVER_SIDE_ENCRYPTION_S3",
        ServerSideEncryptionKms = "SERVER_SIDE_ENCRYPTION_KMS",
    }
}

token_enum! {
    /// Segment encryption for CMAF outputs.
    pub enum CmafEncryptionType {
        SampleAes = "SAMPLE_AES",
        AesCtr = "AES_CTR",
    }
}

token_enum! {
    /// Segment encryption for HLS outputs.
    pub enum HlsEncryptionType {
        Aes128 = "AES128",
        SampleAes = "SAMPLE_AES",
    }
}

token_enum! {
    /// Whether the initialization vector is written to the CMAF manifest.
    pub enum CmafInitializationVectorInManifest {
        Include = "INCLUDE",
        Exclude = "EXCLUDE",
    }
}

token_enum! {
    /// Whether the initialization vector is written to the HLS manifest.
    pub enum HlsInitializationVectorInManifest {
        Include = "INCLUDE",
        Exclude = "EXCLUDE",
    }
}

token_enum! {
    /// Where CMAF encryption keys come from.
    pub enum CmafKeyProviderType {
        Speke = "SPEKE",
        StaticKey = "STATIC_KEY",
    }
}

token_enum! {
    /// Where HLS encryption keys come from.
    pub enum HlsKeyProviderType {
        Speke = "SPEKE",
        StaticKey = "STATIC_KEY",
    }
}

token_enum! {
    /// Whether the HLS segments were encrypted before ingest.
    pub enum HlsOfflineEncrypted {
        Enabled = "ENABLED",
        Disabled = "DISABLED",
    }
}

settings_record! {
    /// Key server settings for HLS output groups.
    pub struct SpekeKeyProvider {
        /// ACM certificate used to authenticate to the key server.
        certificate_arn / set_certificate_arn / with_certificate_arn: String = "CertificateArn" [pattern r"^arn:aws(-us-gov|-cn)?:acm:"],
        resource_id / set_resource_id / with_resource_id: String = "ResourceId",
        /// DRM system IDs (UUIDs) to request keys for.
        system_ids / set_system_ids / with_system_ids: Vec<String> = "SystemIds" [pattern r"^[A-Fa-f0-9]{8}-[A-Fa-f0-9]{4}-[A-Fa-f0-9]{4}-[A-Fa-f0-9]{4}-[A-Fa-f0-9]{12}$"],
        url / set_url / with_url: String = "Url" [pattern r"^https://"],
    }
}

settings_record! {
    /// Key server settings for CMAF output groups, with separate DRM systems
    /// signalled in the DASH and HLS manifests.
    pub struct SpekeKeyProviderCmaf {
        certificate_arn / set_certificate_arn / with_certificate_arn: String = "CertificateArn" [pattern r"^arn:aws(-us-gov|-cn)?:acm:"],
        dash_signaled_system_ids / set_dash_signaled_system_ids / with_dash_signaled_system_ids: Vec<String> = "DashSignaledSystemIds" [pattern r"^[A-Fa-f0-9]{8}-[A-Fa-f0-9]{4}-[A-Fa-f0-9]{4}-[A-Fa-f0-9]{4}-[A-Fa-f0-9]{12}$"],
        hls_signaled_system_ids / set_hls_signaled_system_ids / with_hls_signaled_system_ids: Vec<String> = "HlsSignaledSystemIds" [pattern r"^[A-Fa-f0-9]{8}-[A-Fa-f0-9]{4}-[A-Fa-f0-9]{4}-[A-Fa-f0-9]{4}-[A-Fa-f0-9]{12}$"],
        resource_id / set_resource_id / with_resource_id: String = "ResourceId",
        url / set_url / with_url: String = "Url" [pattern r"^https://"],
    }
}

settings_record! {
    /// A fixed key supplied with the job.
    pub struct StaticKeyProvider {
        /// `identity` or a reverse DNS key format name.
        key_format / set_key_format / with_key_format: String = "KeyFormat" [pattern r"^(identity|[A-Za-z]{2,6}(\.[A-Za-z0-9-]{1,63})+)$"],
        /// Slash-separated version numbers, e.g. `1/2/5`.
        key_format_versions / set_key_format_versions / with_key_format_versions: String = "KeyFormatVersions" [pattern r"^(\d+(/\d+)*)$"],
        /// 128-bit key as 32 hexadecimal characters.
        static_key_value / set_static_key_value / with_static_key_value: String = "StaticKeyValue" [pattern r"^[A-Za-z0-9]{32}$"],
        url / set_url / with_url: String = "Url",
    }
}

settings_record! {
    /// DRM settings for CMAF output groups.
    pub struct CmafEncryptionSettings {
        /// 128-bit initialization vector as 32 hexadecimal characters.
        constant_initialization_vector / set_constant_initialization_vector / with_constant_initialization_vector: String = "ConstantInitializationVector" [pattern r"^[0-9a-fA-F]{32}$"],
        encryption_method / set_encryption_method / with_encryption_method: CmafEncryptionType = "EncryptionMethod",
        initialization_vector_in_manifest / set_initialization_vector_in_manifest / with_initialization_vector_in_manifest: CmafInitializationVectorInManifest = "InitializationVectorInManifest",
        speke_key_provider / set_speke_key_provider / with_speke_key_provider: SpekeKeyProviderCmaf = "SpekeKeyProvider",
        static_key_provider / set_static_key_provider / with_static_key_provider: StaticKeyProvider = "StaticKeyProvider",
        key_provider_type / set_key_provider_type / with_key_provider_type: CmafKeyProviderType = "Type",
    }
}

settings_record! {
    /// DRM settings for HLS output groups.
    pub struct HlsEncryptionSettings {
        constant_initialization_vector / set_constant_initialization_vector / with_constant_initialization_vector: String = "ConstantInitializationVector" [pattern r"^[0-9a-fA-F]{32}$"],
        encryption_method / set_encryption_method / with_encryption_method: HlsEncryptionType = "EncryptionMethod",
        initialization_vector_in_manifest / set_initialization_vector_in_manifest / with_initialization_vector_in_manifest: HlsInitializationVectorInManifest = "InitializationVectorInManifest",
        offline_encrypted / set_offline_encrypted / with_offline_encrypted: HlsOfflineEncrypted = "OfflineEncrypted",
        speke_key_provider / set_speke_key_provider / with_speke_key_provider: SpekeKeyProvider = "SpekeKeyProvider",
        static_key_provider / set_static_key_provider / with_static_key_provider: StaticKeyProvider = "StaticKeyProvider",
        key_provider_type / set_key_provider_type / with_key_provider_type: HlsKeyProviderType = "Type",
    }
}

settings_record! {
    /// Access control for objects written to S3.
    pub struct S3DestinationAccessControl {
        canned_acl / set_canned_acl / with_canned_acl: S3ObjectCannedAcl = "CannedAcl",
    }
}

settings_record! {
    /// Encryption for objects written to S3.
    pub struct S3EncryptionSettings {
        encryption_type / set_encryption_type / with_encryption_type: S3ServerSideEncryptionType = "EncryptionType",
        /// KMS key used when `EncryptionType` is `SERVER_SIDE_ENCRYPTION_KMS`. The account default key is used when absent.
        kms_key_arn / set_kms_key_arn / with_kms_key_arn: String = "KmsKeyArn",
    }
}

settings_record! {
    /// Settings for output files written to S3.
    pub struct S3DestinationSettings {
        access_control / set_access_control / with_access_control: S3DestinationAccessControl = "AccessControl",
        encryption / set_encryption / with_encryption: S3EncryptionSettings = "Encryption",
    }
}

settings_record! {
    /// Destination-specific settings of an output group.
    pub struct DestinationSettings {
        s3_settings / set_s3_settings / with_s3_settings: S3DestinationSettings = "S3Settings",
    }
}

settings_record! {
    /// An extra top-level manifest listing a subset of the group's outputs.
    pub struct CmafAdditionalManifest {
        /// Suffix appended to the default manifest name.
        manifest_name_modifier / set_manifest_name_modifier / with_manifest_name_modifier: String = "ManifestNameModifier",
        /// Name modifiers of the outputs to include.
        selected_outputs / set_selected_outputs / with_selected_outputs: Vec<String> = "SelectedOutputs",
    }
}

settings_record! {
    /// An extra HLS master playlist listing a subset of the group's outputs.
    pub struct HlsAdditionalManifest {
        manifest_name_modifier / set_manifest_name_modifier / with_manifest_name_modifier: String = "ManifestNameModifier",
        selected_outputs / set_selected_outputs / with_selected_outputs: Vec<String> = "SelectedOutputs",
    }
}

settings_record! {
    /// Caption channel to language mapping for the HLS master playlist.
    pub struct HlsCaptionLanguageMapping {
        /// CEA-608 caption channel.
        caption_channel / set_caption_channel / with_caption_channel: i32 = "CaptionChannel" [range -2147483648, 2147483647],
        custom_language_code / set_custom_language_code / with_custom_language_code: String = "CustomLanguageCode" [pattern "^[A-Za-z]{3}$"],
        language_code / set_language_code / with_language_code: LanguageCode = "LanguageCode",
        /// Caption language description shown to viewers.
        language_description / set_language_description / with_language_description: String = "LanguageDescription",
    }
}

settings_record! {
    /// CMAF output group: fragmented MP4 segments with DASH and/or HLS manifests.
    pub struct CmafGroupSettings {
        additional_manifests / set_additional_manifests / with_additional_manifests: Vec<CmafAdditionalManifest> = "AdditionalManifests",
        /// Prefix for segment URLs when manifests and segments are served from different places.
        base_url / set_base_url / with_base_url: String = "BaseUrl",
        client_cache / set_client_cache / with_client_cache: CmafClientCache = "ClientCache",
        codec_specification / set_codec_specification / with_codec_specification: CmafCodecSpecification = "CodecSpecification",
        /// S3 prefix for the group's files, e.g. `s3://bucket/path/name`.
        destination / set_destination / with_destination: String = "Destination" [pattern "^s3://"],
        destination_settings / set_destination_settings / with_destination_settings: DestinationSettings = "DestinationSettings",
        encryption / set_encryption / with_encryption: CmafEncryptionSettings = "Encryption",
        /// Fragment length in seconds.
        fragment_length / set_fragment_length / with_fragment_length: i32 = "FragmentLength" [range 1, 2147483647],
        manifest_compression / set_manifest_compression / with_manifest_compression: CmafManifestCompression = "ManifestCompression",
        manifest_duration_format / set_manifest_duration_format / with_manifest_duration_format: CmafManifestDurationFormat = "ManifestDurationFormat",
        /// Minimum buffer time in milliseconds.
        min_buffer_time / set_min_buffer_time / with_min_buffer_time: i32 = "MinBufferTime" [range 0, 2147483647],
        /// A final segment shorter than this, in seconds, is merged into the previous one.
        min_final_segment_length / set_min_final_segment_length / with_min_final_segment_length: f64 = "MinFinalSegmentLength",
        mpd_profile / set_mpd_profile / with_mpd_profile: CmafMpdProfile = "MpdProfile",
        segment_control / set_segment_control / with_segment_control: CmafSegmentControl = "SegmentControl",
        /// Segment length in seconds.
        segment_length / set_segment_length / with_segment_length: i32 = "SegmentLength" [range 1, 2147483647],
        stream_inf_resolution / set_stream_inf_resolution / with_stream_inf_resolution: CmafStreamInfResolution = "StreamInfResolution",
        write_dash_manifest / set_write_dash_manifest / with_write_dash_manifest: CmafWriteDashManifest = "WriteDashManifest",
        write_hls_manifest / set_write_hls_manifest / with_write_hls_manifest: CmafWriteHlsManifest = "WriteHlsManifest",
        write_segment_timeline_in_representation / set_write_segment_timeline_in_representation / with_write_segment_timeline_in_representation: CmafWriteSegmentTimelineInRepresentation = "WriteSegmentTimelineInRepresentation",
    }
}

settings_record! {
    /// Apple HLS output group.
    pub struct HlsGroupSettings {
        ad_markers / set_ad_markers / with_ad_markers: Vec<HlsAdMarkers> = "AdMarkers",
        additional_manifests / set_additional_manifests / with_additional_manifests: Vec<HlsAdditionalManifest> = "AdditionalManifests",
        base_url / set_base_url / with_base_url: String = "BaseUrl",
        caption_language_mappings / set_caption_language_mappings / with_caption_language_mappings: Vec<HlsCaptionLanguageMapping> = "CaptionLanguageMappings",
        caption_language_setting / set_caption_language_setting / with_caption_language_setting: HlsCaptionLanguageSetting = "CaptionLanguageSetting",
        client_cache / set_client_cache / with_client_cache: HlsClientCache = "ClientCache",
        codec_specification / set_codec_specification / with_codec_specification: HlsCodecSpecification = "CodecSpecification",
        destination / set_destination / with_destination: String = "Destination" [pattern "^s3://"],
        destination_settings / set_destination_settings / with_destination_settings: DestinationSettings = "DestinationSettings",
        directory_structure / set_directory_structure / with_directory_structure: HlsDirectoryStructure = "DirectoryStructure",
        encryption / set_encryption / with_encryption: HlsEncryptionSettings = "Encryption",
        manifest_compression / set_manifest_compression / with_manifest_compression: HlsManifestCompression = "ManifestCompression",
        manifest_duration_format / set_manifest_duration_format / with_manifest_duration_format: HlsManifestDurationFormat = "ManifestDurationFormat",
        min_final_segment_length / set_min_final_segment_length / with_min_final_segment_length: f64 = "MinFinalSegmentLength",
        min_segment_length / set_min_segment_length / with_min_segment_length: i32 = "MinSegmentLength" [range 0, 2147483647],
        output_selection / set_output_selection / with_output_selection: HlsOutputSelection = "OutputSelection",
        program_date_time / set_program_date_time / with_program_date_time: HlsProgramDateTime = "ProgramDateTime",
        /// Interval between `EXT-X-PROGRAM-DATE-TIME` tags in seconds.
        program_date_time_period / set_program_date_time_period / with_program_date_time_period: i32 = "ProgramDateTimePeriod" [range 0, 3600],
        segment_control / set_segment_control / with_segment_control: HlsSegmentControl = "SegmentControl",
        segment_length / set_segment_length / with_segment_length: i32 = "SegmentLength" [range 1, 2147483647],
        segments_per_subdirectory / set_segments_per_subdirectory / with_segments_per_subdirectory: i32 = "SegmentsPerSubdirectory" [range 1, 2147483647],
        stream_inf_resolution / set_stream_inf_resolution / with_stream_inf_resolution: HlsStreamInfResolution = "StreamInfResolution",
        timed_metadata_id3_frame / set_timed_metadata_id3_frame / with_timed_metadata_id3_frame: HlsTimedMetadataId3Frame = "TimedMetadataId3Frame",
        timed_metadata_id3_period / set_timed_metadata_id3_period / with_timed_metadata_id3_period: i32 = "TimedMetadataId3Period" [range -2147483648, 2147483647],
        timestamp_delta_milliseconds / set_timestamp_delta_milliseconds / with_timestamp_delta_milliseconds: i32 = "TimestampDeltaMilliseconds" [range -2147483648, 2147483647],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::SettingsRecord;

    #[test]
    fn destination_must_be_an_s3_url() {
        let group = CmafGroupSettings::new()
            .with_destination("https://example.com/out/")
            .with_segment_length(6);
        let report = group.validate();
        assert_eq!(report.len(), 1);
        assert_eq!(report.violations()[0].path, "Destination");
    }

    #[test]
    fn lists_of_records_validate_with_indexes() {
        let group = HlsGroupSettings::new().with_caption_language_mappings(vec![
            HlsCaptionLanguageMapping::new().with_language_code(LanguageCode::Eng),
            HlsCaptionLanguageMapping::new().with_custom_language_code("en-GB"),
        ]);
        let report = group.validate();
        assert_eq!(report.len(), 1);
        assert_eq!(report.violations()[0].path, "CaptionLanguageMappings[1].CustomLanguageCode");
    }

    #[test]
    fn token_lists_keep_their_order() {
        let group = HlsGroupSettings::new()
            .with_ad_markers(vec![HlsAdMarkers::ElementalScte35, HlsAdMarkers::Elemental]);
        assert_eq!(group.describe(), "{AdMarkers: [ELEMENTAL_SCTE35, ELEMENTAL]}");
    }

    #[test]
    fn destination_settings_nest_down_to_encryption() {
        let destination = DestinationSettings::new().with_s3_settings(
            S3DestinationSettings::new()
                .with_access_control(
                    S3DestinationAccessControl::new().with_canned_acl(S3ObjectCannedAcl::BucketOwnerFullControl),
                )
                .with_encryption(
                    S3EncryptionSettings::new().with_encryption_type(S3ServerSideEncryptionType::ServerSideEncryptionKms),
                ),
        );
        assert_eq!(
            destination.describe(),
            "{S3Settings: {AccessControl: {CannedAcl: BUCKET_OWNER_FULL_CONTROL},Encryption: {EncryptionType: SERVER_SIDE_ENCRYPTION_KMS}}}"
        );
    }

    #[test]
    fn hls_encryption_survives_a_document_round_trip() {
        let group: HlsGroupSettings = crate::document::from_json_str(
            r#"{ "encryption": { "encryptionMethod": "AES128", "type": "STATIC_KEY" }, "segmentLength": 6 }"#,
        )
        .unwrap();
        assert_eq!(
            group.describe(),
            "{Encryption: {EncryptionMethod: AES128,Type: STATIC_KEY},SegmentLength: 6}"
        );
        assert_eq!(
            group.encryption().and_then(|e| e.key_provider_type()),
            Some(&HlsKeyProviderType::StaticKey)
        );
        assert!(HlsGroupSettings::field_info("Encryption").is_some());

        let json = crate::document::to_json_string(&group).unwrap();
        assert!(json.contains("\"encryptionMethod\": \"AES128\""));
        assert!(json.contains("\"type\": \"STATIC_KEY\""));
    }

    #[test]
    fn cmaf_key_providers_are_validated() {
        let group = CmafGroupSettings::new().with_encryption(
            CmafEncryptionSettings::new()
                .with_encryption_method(CmafEncryptionType::SampleAes)
                .with_key_provider_type(CmafKeyProviderType::Speke)
                .with_constant_initialization_vector("0123456789abcdef0123456789ABCDEF")
                .with_speke_key_provider(
                    SpekeKeyProviderCmaf::new()
                        .with_url("http://keys.example.com/speke")
                        .with_dash_signaled_system_ids(vec![
                            "edef8ba9-79d6-4ace-a3c8-27dcd51d21ed".to_string(),
                            "not-a-uuid".to_string(),
                        ]),
                ),
        );
        let report = group.validate();
        let paths: Vec<&str> = report.violations().iter().map(|v| v.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "Encryption.SpekeKeyProvider.DashSignaledSystemIds[1]",
                "Encryption.SpekeKeyProvider.Url",
            ]
        );
    }
}
