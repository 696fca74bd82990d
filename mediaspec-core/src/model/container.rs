// ============================================================================
// mediaspec-core/src/model/container.rs
// ============================================================================
//
// CONTAINER SETTINGS: MPEG-2 transport stream muxing
//
// KEY COMPONENTS:
// - M2tsSettings: transport stream muxer settings
// - DvbNitSettings / DvbSdtSettings / DvbTdtSettings: DVB service tables
// - M2tsScte35Esam: ESAM-driven SCTE-35 marker PID

token_enum! {
    /// How the service description table is generated.
    pub enum OutputSdt {
        SdtFollow = "SDT_FOLLOW",
        SdtFollowIfPresent = "SDT_FOLLOW_IF_PRESENT",
        SdtManual = "SDT_MANUAL",
        SdtNone = "SDT_NONE",
    }
}

token_enum! {
    /// Audio buffer model setting for MPEG-2 transport streams.
    pub enum M2tsAudioBufferModel {
        Dvb = "DVB",
        Atsc = "ATSC",
    }
}

token_enum! {
    /// `MULTIPLEX` paces the output for a T-STD compliant buffer; `NONE` lets it run ahead.
    pub enum M2tsBufferModel {
        Multiplex = "MULTIPLEX",
        None = "NONE",
    }
}

token_enum! {
    /// Ebp audio interval setting for MPEG-2 transport streams.
    pub enum M2tsEbpAudioInterval {
        VideoAndFixedIntervals = "VIDEO_AND_FIXED_INTERVALS",
        VideoInterval = "VIDEO_INTERVAL",
    }
}

token_enum! {
    /// Ebp placement setting for MPEG-2 transport streams.
    pub enum M2tsEbpPlacement {
        VideoAndAudioPids = "VIDEO_AND_AUDIO_PIDS",
        VideoPid = "VIDEO_PID",
    }
}

token_enum! {
    /// Es rate in pes setting for MPEG-2 transport streams.
    pub enum M2tsEsRateInPes {
        Include = "INCLUDE",
        Exclude = "EXCLUDE",
    }
}

token_enum! {
    /// Force ts video ebp order setting for MPEG-2 transport streams.
    pub enum M2tsForceTsVideoEbpOrder {
        Force = "FORCE",
        Default = "DEFAULT",
    }
}

token_enum! {
    /// Nielsen id3 setting for MPEG-2 transport streams.
    pub enum M2tsNielsenId3 {
        Insert = "INSERT",
        None = "NONE",
    }
}

token_enum! {
    /// Pcr control setting for MPEG-2 transport streams.
    pub enum M2tsPcrControl {
        PcrEveryPesPacket = "PCR_EVERY_PES_PACKET",
        ConfiguredPcrPeriod = "CONFIGURED_PCR_PERIOD",
    }
}

token_enum! {
    /// Rate mode setting for MPEG-2 transport streams.
    pub enum M2tsRateMode {
        Vbr = "VBR",
        Cbr = "CBR",
    }
}

token_enum! {
    /// Whether SCTE-35 markers from the input are passed through.
    pub enum M2tsScte35Source {
        Passthrough = "PASSTHROUGH",
        None = "NONE",
    }
}

token_enum! {
    /// Markers written at segment boundaries for downstream segmenters.
    pub enum M2tsSegmentationMarkers {
        None = "NONE",
        RaiSegstart = "RAI_SEGSTART",
        RaiAdapt = "RAI_ADAPT",
        PsiSegstart = "PSI_SEGSTART",
        Ebp = "EBP",
        EbpLegacy = "EBP_LEGACY",
    }
}

token_enum! {
    /// Segmentation style setting for MPEG-2 transport streams.
    pub enum M2tsSegmentationStyle {
        MaintainCadence = "MAINTAIN_CADENCE",
        ResetCadence = "RESET_CADENCE",
    }
}

settings_record! {
    /// DVB network information table (NIT) settings.
    pub struct DvbNitSettings {
        network_id / set_network_id / with_network_id: i32 = "NetworkId" [range 0, 65535],
        network_name / set_network_name / with_network_name: String = "NetworkName",
        /// Repetition interval in milliseconds.
        nit_interval / set_nit_interval / with_nit_interval: i32 = "NitInterval" [range 25, 10000],
    }
}

settings_record! {
    /// DVB service description table (SDT) settings.
    pub struct DvbSdtSettings {
        output_sdt / set_output_sdt / with_output_sdt: OutputSdt = "OutputSdt",
        /// Repetition interval in milliseconds.
        sdt_interval / set_sdt_interval / with_sdt_interval: i32 = "SdtInterval" [range 25, 2000],
        service_name / set_service_name / with_service_name: String = "ServiceName",
        service_provider_name / set_service_provider_name / with_service_provider_name: String = "ServiceProviderName",
    }
}

settings_record! {
    /// DVB time and date table (TDT) settings.
    pub struct DvbTdtSettings {
        /// Repetition interval in milliseconds.
        tdt_interval / set_tdt_interval / with_tdt_interval: i32 = "TdtInterval" [range 1000, 30000],
    }
}

settings_record! {
    /// SCTE-35 settings when markers come from an ESAM signal processing notification.
    pub struct M2tsScte35Esam {
        scte35_esam_pid / set_scte35_esam_pid / with_scte35_esam_pid: i32 = "Scte35EsamPid" [range 32, 8182],
    }
}

settings_record! {
    /// MPEG-2 transport stream container settings.
    pub struct M2tsSettings {
        audio_buffer_model / set_audio_buffer_model / with_audio_buffer_model: M2tsAudioBufferModel = "AudioBufferModel",
        /// Number of audio frames per PES packet.
        audio_frames_per_pes / set_audio_frames_per_pes / with_audio_frames_per_pes: i32 = "AudioFramesPerPes" [range 0, 2147483647],
        /// Packet identifiers of the audio streams, in output order.
        audio_pids / set_audio_pids / with_audio_pids: Vec<i32> = "AudioPids" [range 32, 8182],
        /// Constant transport stream bitrate in bits/second. 0 sizes the stream from its content.
        bitrate / set_bitrate / with_bitrate: i32 = "Bitrate" [range 0, 2147483647],
        buffer_model / set_buffer_model / with_buffer_model: M2tsBufferModel = "BufferModel",
        dvb_nit_settings / set_dvb_nit_settings / with_dvb_nit_settings: DvbNitSettings = "DvbNitSettings",
        dvb_sdt_settings / set_dvb_sdt_settings / with_dvb_sdt_settings: DvbSdtSettings = "DvbSdtSettings",
        dvb_sub_pids / set_dvb_sub_pids / with_dvb_sub_pids: Vec<i32> = "DvbSubPids" [range 32, 8182],
        dvb_tdt_settings / set_dvb_tdt_settings / with_dvb_tdt_settings: DvbTdtSettings = "DvbTdtSettings",
        dvb_teletext_pid / set_dvb_teletext_pid / with_dvb_teletext_pid: i32 = "DvbTeletextPid" [range 32, 8182],
        ebp_audio_interval / set_ebp_audio_interval / with_ebp_audio_interval: M2tsEbpAudioInterval = "EbpAudioInterval",
        ebp_placement / set_ebp_placement / with_ebp_placement: M2tsEbpPlacement = "EbpPlacement",
        es_rate_in_pes / set_es_rate_in_pes / with_es_rate_in_pes: M2tsEsRateInPes = "EsRateInPes",
        force_ts_video_ebp_order / set_force_ts_video_ebp_order / with_force_ts_video_ebp_order: M2tsForceTsVideoEbpOrder = "ForceTsVideoEbpOrder",
        /// Fragment length in seconds. Only used with EBP markers.
        fragment_time / set_fragment_time / with_fragment_time: f64 = "FragmentTime",
        /// Maximum time between PCRs in milliseconds.
        max_pcr_interval / set_max_pcr_interval / with_max_pcr_interval: i32 = "MaxPcrInterval" [range 0, 500],
        min_ebp_interval / set_min_ebp_interval / with_min_ebp_interval: i32 = "MinEbpInterval" [range 0, 10000],
        nielsen_id3 / set_nielsen_id3 / with_nielsen_id3: M2tsNielsenId3 = "NielsenId3",
        /// Bitrate of extra null packets, in bits/second.
        null_packet_bitrate / set_null_packet_bitrate / with_null_packet_bitrate: f64 = "NullPacketBitrate",
        pat_interval / set_pat_interval / with_pat_interval: i32 = "PatInterval" [range 0, 1000],
        pcr_control / set_pcr_control / with_pcr_control: M2tsPcrControl = "PcrControl",
        pcr_pid / set_pcr_pid / with_pcr_pid: i32 = "PcrPid" [range 32, 8182],
        pmt_interval / set_pmt_interval / with_pmt_interval: i32 = "PmtInterval" [range 0, 1000],
        pmt_pid / set_pmt_pid / with_pmt_pid: i32 = "PmtPid" [range 32, 8182],
        private_metadata_pid / set_private_metadata_pid / with_private_metadata_pid: i32 = "PrivateMetadataPid" [range 32, 8182],
        program_number / set_program_number / with_program_number: i32 = "ProgramNumber" [range 0, 65535],
        rate_mode / set_rate_mode / with_rate_mode: M2tsRateMode = "RateMode",
        scte35_esam / set_scte35_esam / with_scte35_esam: M2tsScte35Esam = "Scte35Esam",
        scte35_pid / set_scte35_pid / with_scte35_pid: i32 = "Scte35Pid" [range 32, 8182],
        scte35_source / set_scte35_source / with_scte35_source: M2tsScte35Source = "Scte35Source",
        segmentation_markers / set_segmentation_markers / with_segmentation_markers: M2tsSegmentationMarkers = "SegmentationMarkers",
        segmentation_style / set_segmentation_style / with_segmentation_style: M2tsSegmentationStyle = "SegmentationStyle",
        /// Segment length in seconds.
        segmentation_time / set_segmentation_time / with_segmentation_time: f64 = "SegmentationTime",
        timed_metadata_pid / set_timed_metadata_pid / with_timed_metadata_pid: i32 = "TimedMetadataPid" [range 32, 8182],
        transport_stream_id / set_transport_stream_id / with_transport_stream_id: i32 = "TransportStreamId" [range 0, 65535],
        video_pid / set_video_pid / with_video_pid: i32 = "VideoPid" [range 32, 8182],
    }
}
