// ============================================================================
// mediaspec-core/src/model/captions.rs
// ============================================================================
//
// CAPTION SETTINGS: Destinations that render captions as pictures
//
// Burned-in captions and DVB subtitles share their styling fields; each
// keeps its own vocabularies so the two can evolve independently.
//
// KEY COMPONENTS:
// - BurninDestinationSettings: captions drawn into the video
// - DvbSubDestinationSettings: DVB bitmap subtitle stream

token_enum! {
    /// Script used to pick glyphs for Chinese captions. `AUTOMATIC` follows the caption language.
    pub enum FontScript {
        Automatic = "AUTOMATIC",
        Hans = "HANS",
        Hant = "HANT",
    }
}

token_enum! {
    /// Whether DVB subtitles are flagged for the hard of hearing.
    pub enum DvbSubtitlingType {
        HearingImpaired = "HEARING_IMPAIRED",
        Standard = "STANDARD",
    }
}

token_enum! {
    /// Horizontal alignment of burned-in captions.
    pub enum BurninSubtitleAlignment {
        Centered = "CENTERED",
        Left = "LEFT",
    }
}

token_enum! {
    /// Background box color behind burned-in captions.
    pub enum BurninSubtitleBackgroundColor {
        None = "NONE",
        Black = "BLACK",
        White = "WHITE",
    }
}

token_enum! {
    /// Text color of burned-in captions.
    pub enum BurninSubtitleFontColor {
        White = "WHITE",
        Black = "BLACK",
        Yellow = "YELLOW",
        Red = "RED",
        Green = "GREEN",
        Blue = "BLUE",
    }
}

token_enum! {
    /// Outline color of burned-in captions.
    pub enum BurninSubtitleOutlineColor {
        Black = "BLACK",
        White = "WHITE",
        Yellow = "YELLOW",
        Red = "RED",
        Green = "GREEN",
        Blue = "BLUE",
    }
}

token_enum! {
    /// Drop shadow color of burned-in captions.
    pub enum BurninSubtitleShadowColor {
        None = "NONE",
        Black = "BLACK",
        White = "WHITE",
    }
}

token_enum! {
    /// Character spacing of burned-in captions converted from teletext.
    pub enum BurninSubtitleTeletextSpacing {
        FixedGrid = "FIXED_GRID",
        Proportional = "PROPORTIONAL",
    }
}

token_enum! {
    /// Horizontal alignment of DVB subtitles.
    pub enum DvbSubtitleAlignment {
        Centered = "CENTERED",
        Left = "LEFT",
    }
}

token_enum! {
    /// Background box color behind DVB subtitles.
    pub enum DvbSubtitleBackgroundColor {
        None = "NONE",
        Black = "BLACK",
        White = "WHITE",
    }
}

token_enum! {
    /// Text color of DVB subtitles.
    pub enum DvbSubtitleFontColor {
        White = "WHITE",
        Black = "BLACK",
        Yellow = "YELLOW",
        Red = "RED",
        Green = "GREEN",
        Blue = "BLUE",
    }
}

token_enum! {
    /// Outline color of DVB subtitles.
    pub enum DvbSubtitleOutlineColor {
        Black = "BLACK",
        White = "WHITE",
        Yellow = "YELLOW",
        Red = "RED",
        Green = "GREEN",
        Blue = "BLUE",
    }
}

token_enum! {
    /// Drop shadow color of DVB subtitles.
    pub enum DvbSubtitleShadowColor {
        None = "NONE",
        Black = "BLACK",
        White = "WHITE",
    }
}

token_enum! {
    /// Character spacing of DVB subtitles converted from teletext.
    pub enum DvbSubtitleTeletextSpacing {
        FixedGrid = "FIXED_GRID",
        Proportional = "PROPORTIONAL",
    }
}

settings_record! {
    /// Captions rendered into the video picture.
    pub struct BurninDestinationSettings {
        alignment / set_alignment / with_alignment: BurninSubtitleAlignment = "Alignment",
        background_color / set_background_color / with_background_color: BurninSubtitleBackgroundColor = "BackgroundColor",
        /// 0 is transparent, 255 is opaque.
        background_opacity / set_background_opacity / with_background_opacity: i32 = "BackgroundOpacity" [range 0, 255],
        font_color / set_font_color / with_font_color: BurninSubtitleFontColor = "FontColor",
        font_opacity / set_font_opacity / with_font_opacity: i32 = "FontOpacity" [range 0, 255],
        /// Font resolution in DPI.
        font_resolution / set_font_resolution / with_font_resolution: i32 = "FontResolution" [range 96, 600],
        font_script / set_font_script / with_font_script: FontScript = "FontScript",
        /// Font size in points. 0 sizes the text automatically.
        font_size / set_font_size / with_font_size: i32 = "FontSize" [range 0, 96],
        outline_color / set_outline_color / with_outline_color: BurninSubtitleOutlineColor = "OutlineColor",
        outline_size / set_outline_size / with_outline_size: i32 = "OutlineSize" [range 0, 10],
        shadow_color / set_shadow_color / with_shadow_color: BurninSubtitleShadowColor = "ShadowColor",
        shadow_opacity / set_shadow_opacity / with_shadow_opacity: i32 = "ShadowOpacity" [range 0, 255],
        /// Horizontal shadow offset in pixels. Negative values move the shadow left.
        shadow_x_offset / set_shadow_x_offset / with_shadow_x_offset: i32 = "ShadowXOffset" [range -2147483648, 2147483647],
        /// Vertical shadow offset in pixels. Negative values move the shadow up.
        shadow_y_offset / set_shadow_y_offset / with_shadow_y_offset: i32 = "ShadowYOffset" [range -2147483648, 2147483647],
        teletext_spacing / set_teletext_spacing / with_teletext_spacing: BurninSubtitleTeletextSpacing = "TeletextSpacing",
        /// Left offset of the caption area in pixels.
        x_position / set_x_position / with_x_position: i32 = "XPosition" [range 0, 2147483647],
        /// Top offset of the caption area in pixels.
        y_position / set_y_position / with_y_position: i32 = "YPosition" [range 0, 2147483647],
    }
}

settings_record! {
    /// Captions written as a DVB subtitle stream (ETSI EN 300 743).
    pub struct DvbSubDestinationSettings {
        alignment / set_alignment / with_alignment: DvbSubtitleAlignment = "Alignment",
        background_color / set_background_color / with_background_color: DvbSubtitleBackgroundColor = "BackgroundColor",
        /// 0 is transparent, 255 is opaque.
        background_opacity / set_background_opacity / with_background_opacity: i32 = "BackgroundOpacity" [range 0, 255],
        font_color / set_font_color / with_font_color: DvbSubtitleFontColor = "FontColor",
        font_opacity / set_font_opacity / with_font_opacity: i32 = "FontOpacity" [range 0, 255],
        /// Font resolution in DPI.
        font_resolution / set_font_resolution / with_font_resolution: i32 = "FontResolution" [range 96, 600],
        font_script / set_font_script / with_font_script: FontScript = "FontScript",
        /// Font size in points. 0 sizes the text automatically.
        font_size / set_font_size / with_font_size: i32 = "FontSize" [range 0, 96],
        outline_color / set_outline_color / with_outline_color: DvbSubtitleOutlineColor = "OutlineColor",
        outline_size / set_outline_size / with_outline_size: i32 = "OutlineSize" [range 0, 10],
        shadow_color / set_shadow_color / with_shadow_color: DvbSubtitleShadowColor = "ShadowColor",
        shadow_opacity / set_shadow_opacity / with_shadow_opacity: i32 = "ShadowOpacity" [range 0, 255],
        /// Horizontal shadow offset in pixels. Negative values move the shadow left.
        shadow_x_offset / set_shadow_x_offset / with_shadow_x_offset: i32 = "ShadowXOffset" [range -2147483648, 2147483647],
        /// Vertical shadow offset in pixels. Negative values move the shadow up.
        shadow_y_offset / set_shadow_y_offset / with_shadow_y_offset: i32 = "ShadowYOffset" [range -2147483648, 2147483647],
        subtitling_type / set_subtitling_type / with_subtitling_type: DvbSubtitlingType = "SubtitlingType",
        teletext_spacing / set_teletext_spacing / with_teletext_spacing: DvbSubtitleTeletextSpacing = "TeletextSpacing",
        /// Left offset of the caption area in pixels.
        x_position / set_x_position / with_x_position: i32 = "XPosition" [range 0, 2147483647],
        /// Top offset of the caption area in pixels.
        y_position / set_y_position / with_y_position: i32 = "YPosition" [range 0, 2147483647],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::SettingsRecord;

    #[test]
    fn shadow_offsets_may_be_negative() {
        let settings = BurninDestinationSettings::new()
            .with_shadow_x_offset(-2)
            .with_shadow_y_offset(-2)
            .with_font_size(0);
        assert!(settings.validate().is_valid());
    }

    #[test]
    fn font_resolution_has_a_floor() {
        let settings = DvbSubDestinationSettings::new()
            .with_font_resolution(72)
            .with_subtitling_type(DvbSubtitlingType::HearingImpaired);
        let report = settings.validate();
        assert_eq!(report.len(), 1);
        assert_eq!(report.violations()[0].path, "FontResolution");
    }

    #[test]
    fn subtitling_type_dumps_before_teletext_spacing() {
        let settings = DvbSubDestinationSettings::new()
            .with_teletext_spacing(DvbSubtitleTeletextSpacing::FixedGrid)
            .with_subtitling_type(DvbSubtitlingType::HearingImpaired)
            .with_y_position(10);
        assert_eq!(
            settings.describe(),
            "{SubtitlingType: HEARING_IMPAIRED,TeletextSpacing: FIXED_GRID,YPosition: 10}"
        );
    }
}
