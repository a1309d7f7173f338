//! W3C named colors.
//!
//! The table is data only: every entry is an opaque `Color<u8>` constant except
//! `TRANSPARENT`, which is the all-zero color. [`Color::from_name`] and
//! [`Color::parse`] rescale an entry into any representation.

use crate::color::Color;
use once_cell::sync::Lazy;
use std::collections::HashMap;

macro_rules! named_colors {
    ($($konst:ident => $name:literal, $hex:literal, [$r:literal, $g:literal, $b:literal, $a:literal];)*) => {
        impl Color<u8> {
            $(
                #[doc = concat!("W3C `", $name, "` (`#", $hex, "`).")]
                pub const $konst: Self = Self::new($r, $g, $b, $a);
            )*
        }

        /// Every named color with its lowercase name, in alphabetical order.
        pub static NAMED_COLORS: &[(&str, Color<u8>)] = &[$(($name, Color::<u8>::$konst)),*];
    };
}

named_colors! {
    ALICE_BLUE => "aliceblue", "F0F8FF", [0xF0, 0xF8, 0xFF, 0xFF];
    ANTIQUE_WHITE => "antiquewhite", "FAEBD7", [0xFA, 0xEB, 0xD7, 0xFF];
    AQUA => "aqua", "00FFFF", [0x00, 0xFF, 0xFF, 0xFF];
    AQUAMARINE => "aquamarine", "7FFFD4", [0x7F, 0xFF, 0xD4, 0xFF];
    AZURE => "azure", "F0FFFF", [0xF0, 0xFF, 0xFF, 0xFF];
    BEIGE => "beige", "F5F5DC", [0xF5, 0xF5, 0xDC, 0xFF];
    BISQUE => "bisque", "FFE4C4", [0xFF, 0xE4, 0xC4, 0xFF];
    BLACK => "black", "000000", [0x00, 0x00, 0x00, 0xFF];
    BLANCHED_ALMOND => "blanchedalmond", "FFEBCD", [0xFF, 0xEB, 0xCD, 0xFF];
    BLUE => "blue", "0000FF", [0x00, 0x00, 0xFF, 0xFF];
    BLUE_VIOLET => "blueviolet", "8A2BE2", [0x8A, 0x2B, 0xE2, 0xFF];
    BROWN => "brown", "A52A2A", [0xA5, 0x2A, 0x2A, 0xFF];
    BURLY_WOOD => "burlywood", "DEB887", [0xDE, 0xB8, 0x87, 0xFF];
    CADET_BLUE => "cadetblue", "5F9EA0", [0x5F, 0x9E, 0xA0, 0xFF];
    CHARTREUSE => "chartreuse", "7FFF00", [0x7F, 0xFF, 0x00, 0xFF];
    CHOCOLATE => "chocolate", "D2691E", [0xD2, 0x69, 0x1E, 0xFF];
    CORAL => "coral", "FF7F50", [0xFF, 0x7F, 0x50, 0xFF];
    CORNFLOWER_BLUE => "cornflowerblue", "6495ED", [0x64, 0x95, 0xED, 0xFF];
    CORNSILK => "cornsilk", "FFF8DC", [0xFF, 0xF8, 0xDC, 0xFF];
    CRIMSON => "crimson", "DC143C", [0xDC, 0x14, 0x3C, 0xFF];
    CYAN => "cyan", "00FFFF", [0x00, 0xFF, 0xFF, 0xFF];
    DARK_BLUE => "darkblue", "00008B", [0x00, 0x00, 0x8B, 0xFF];
    DARK_CYAN => "darkcyan", "008B8B", [0x00, 0x8B, 0x8B, 0xFF];
    DARK_GOLDENROD => "darkgoldenrod", "B8860B", [0xB8, 0x86, 0x0B, 0xFF];
    DARK_GRAY => "darkgray", "A9A9A9", [0xA9, 0xA9, 0xA9, 0xFF];
    DARK_GREEN => "darkgreen", "006400", [0x00, 0x64, 0x00, 0xFF];
    DARK_KHAKI => "darkkhaki", "BDB76B", [0xBD, 0xB7, 0x6B, 0xFF];
    DARK_MAGENTA => "darkmagenta", "8B008B", [0x8B, 0x00, 0x8B, 0xFF];
    DARK_OLIVE_GREEN => "darkolivegreen", "556B2F", [0x55, 0x6B, 0x2F, 0xFF];
    DARK_ORANGE => "darkorange", "FF8C00", [0xFF, 0x8C, 0x00, 0xFF];
    DARK_ORCHID => "darkorchid", "9932CC", [0x99, 0x32, 0xCC, 0xFF];
    DARK_RED => "darkred", "8B0000", [0x8B, 0x00, 0x00, 0xFF];
    DARK_SALMON => "darksalmon", "E9967A", [0xE9, 0x96, 0x7A, 0xFF];
    DARK_SEA_GREEN => "darkseagreen", "8FBC8B", [0x8F, 0xBC, 0x8B, 0xFF];
    DARK_SLATE_BLUE => "darkslateblue", "483D8B", [0x48, 0x3D, 0x8B, 0xFF];
    DARK_SLATE_GRAY => "darkslategray", "2F4F4F", [0x2F, 0x4F, 0x4F, 0xFF];
    DARK_TURQUOISE => "darkturquoise", "00CED1", [0x00, 0xCE, 0xD1, 0xFF];
    DARK_VIOLET => "darkviolet", "9400D3", [0x94, 0x00, 0xD3, 0xFF];
    DEEP_PINK => "deeppink", "FF1493", [0xFF, 0x14, 0x93, 0xFF];
    DEEP_SKY_BLUE => "deepskyblue", "00BFFF", [0x00, 0xBF, 0xFF, 0xFF];
    DIM_GRAY => "dimgray", "696969", [0x69, 0x69, 0x69, 0xFF];
    DODGER_BLUE => "dodgerblue", "1E90FF", [0x1E, 0x90, 0xFF, 0xFF];
    FIREBRICK => "firebrick", "B22222", [0xB2, 0x22, 0x22, 0xFF];
    FLORAL_WHITE => "floralwhite", "FFFAF0", [0xFF, 0xFA, 0xF0, 0xFF];
    FOREST_GREEN => "forestgreen", "228B22", [0x22, 0x8B, 0x22, 0xFF];
    FUCHSIA => "fuchsia", "FF00FF", [0xFF, 0x00, 0xFF, 0xFF];
    GAINSBORO => "gainsboro", "DCDCDC", [0xDC, 0xDC, 0xDC, 0xFF];
    GHOST_WHITE => "ghostwhite", "F8F8FF", [0xF8, 0xF8, 0xFF, 0xFF];
    GOLD => "gold", "FFD700", [0xFF, 0xD7, 0x00, 0xFF];
    GOLDENROD => "goldenrod", "DAA520", [0xDA, 0xA5, 0x20, 0xFF];
    GRAY => "gray", "808080", [0x80, 0x80, 0x80, 0xFF];
    GREEN => "green", "008000", [0x00, 0x80, 0x00, 0xFF];
    GREEN_YELLOW => "greenyellow", "ADFF2F", [0xAD, 0xFF, 0x2F, 0xFF];
    HONEYDEW => "honeydew", "F0FFF0", [0xF0, 0xFF, 0xF0, 0xFF];
    HOT_PINK => "hotpink", "FF69B4", [0xFF, 0x69, 0xB4, 0xFF];
    INDIAN_RED => "indianred", "CD5C5C", [0xCD, 0x5C, 0x5C, 0xFF];
    INDIGO => "indigo", "4B0082", [0x4B, 0x00, 0x82, 0xFF];
    IVORY => "ivory", "FFFFF0", [0xFF, 0xFF, 0xF0, 0xFF];
    KHAKI => "khaki", "F0E68C", [0xF0, 0xE6, 0x8C, 0xFF];
    LAVENDER => "lavender", "E6E6FA", [0xE6, 0xE6, 0xFA, 0xFF];
    LAVENDER_BLUSH => "lavenderblush", "FFF0F5", [0xFF, 0xF0, 0xF5, 0xFF];
    LAWN_GREEN => "lawngreen", "7CFC00", [0x7C, 0xFC, 0x00, 0xFF];
    LEMON_CHIFFON => "lemonchiffon", "FFFACD", [0xFF, 0xFA, 0xCD, 0xFF];
    LIGHT_BLUE => "lightblue", "ADD8E6", [0xAD, 0xD8, 0xE6, 0xFF];
    LIGHT_CORAL => "lightcoral", "F08080", [0xF0, 0x80, 0x80, 0xFF];
    LIGHT_CYAN => "lightcyan", "E0FFFF", [0xE0, 0xFF, 0xFF, 0xFF];
    LIGHT_GOLDENROD_YELLOW => "lightgoldenrodyellow", "FAFAD2", [0xFA, 0xFA, 0xD2, 0xFF];
    LIGHT_GRAY => "lightgray", "D3D3D3", [0xD3, 0xD3, 0xD3, 0xFF];
    LIGHT_GREEN => "lightgreen", "90EE90", [0x90, 0xEE, 0x90, 0xFF];
    LIGHT_PINK => "lightpink", "FFB6C1", [0xFF, 0xB6, 0xC1, 0xFF];
    LIGHT_SALMON => "lightsalmon", "FFA07A", [0xFF, 0xA0, 0x7A, 0xFF];
    LIGHT_SEA_GREEN => "lightseagreen", "20B2AA", [0x20, 0xB2, 0xAA, 0xFF];
    LIGHT_SKY_BLUE => "lightskyblue", "87CEFA", [0x87, 0xCE, 0xFA, 0xFF];
    LIGHT_SLATE_GRAY => "lightslategray", "778899", [0x77, 0x88, 0x99, 0xFF];
    LIGHT_STEEL_BLUE => "lightsteelblue", "B0C4DE", [0xB0, 0xC4, 0xDE, 0xFF];
    LIGHT_YELLOW => "lightyellow", "FFFFE0", [0xFF, 0xFF, 0xE0, 0xFF];
    LIME => "lime", "00FF00", [0x00, 0xFF, 0x00, 0xFF];
    LIME_GREEN => "limegreen", "32CD32", [0x32, 0xCD, 0x32, 0xFF];
    LINEN => "linen", "FAF0E6", [0xFA, 0xF0, 0xE6, 0xFF];
    MAGENTA => "magenta", "FF00FF", [0xFF, 0x00, 0xFF, 0xFF];
    MAROON => "maroon", "800000", [0x80, 0x00, 0x00, 0xFF];
    MEDIUM_AQUAMARINE => "mediumaquamarine", "66CDAA", [0x66, 0xCD, 0xAA, 0xFF];
    MEDIUM_BLUE => "mediumblue", "0000CD", [0x00, 0x00, 0xCD, 0xFF];
    MEDIUM_ORCHID => "mediumorchid", "BA55D3", [0xBA, 0x55, 0xD3, 0xFF];
    MEDIUM_PURPLE => "mediumpurple", "9370DB", [0x93, 0x70, 0xDB, 0xFF];
    MEDIUM_SEA_GREEN => "mediumseagreen", "3CB371", [0x3C, 0xB3, 0x71, 0xFF];
    MEDIUM_SLATE_BLUE => "mediumslateblue", "7B68EE", [0x7B, 0x68, 0xEE, 0xFF];
    MEDIUM_SPRING_GREEN => "mediumspringgreen", "00FA9A", [0x00, 0xFA, 0x9A, 0xFF];
    MEDIUM_TURQUOISE => "mediumturquoise", "48D1CC", [0x48, 0xD1, 0xCC, 0xFF];
    MEDIUM_VIOLET_RED => "mediumvioletred", "C71585", [0xC7, 0x15, 0x85, 0xFF];
    MIDNIGHT_BLUE => "midnightblue", "191970", [0x19, 0x19, 0x70, 0xFF];
    MINT_CREAM => "mintcream", "F5FFFA", [0xF5, 0xFF, 0xFA, 0xFF];
    MISTY_ROSE => "mistyrose", "FFE4E1", [0xFF, 0xE4, 0xE1, 0xFF];
    MOCCASIN => "moccasin", "FFE4B5", [0xFF, 0xE4, 0xB5, 0xFF];
    NAVAJO_WHITE => "navajowhite", "FFDEAD", [0xFF, 0xDE, 0xAD, 0xFF];
    NAVY => "navy", "000080", [0x00, 0x00, 0x80, 0xFF];
    OLD_LACE => "oldlace", "FDF5E6", [0xFD, 0xF5, 0xE6, 0xFF];
    OLIVE => "olive", "808000", [0x80, 0x80, 0x00, 0xFF];
    OLIVE_DRAB => "olivedrab", "6B8E23", [0x6B, 0x8E, 0x23, 0xFF];
    ORANGE => "orange", "FFA500", [0xFF, 0xA5, 0x00, 0xFF];
    ORANGE_RED => "orangered", "FF4500", [0xFF, 0x45, 0x00, 0xFF];
    ORCHID => "orchid", "DA70D6", [0xDA, 0x70, 0xD6, 0xFF];
    PALE_GOLDENROD => "palegoldenrod", "EEE8AA", [0xEE, 0xE8, 0xAA, 0xFF];
    PALE_GREEN => "palegreen", "98FB98", [0x98, 0xFB, 0x98, 0xFF];
    PALE_TURQUOISE => "paleturquoise", "AFEEEE", [0xAF, 0xEE, 0xEE, 0xFF];
    PALE_VIOLET_RED => "palevioletred", "DB7093", [0xDB, 0x70, 0x93, 0xFF];
    PAPAYA_WHIP => "papayawhip", "FFEFD5", [0xFF, 0xEF, 0xD5, 0xFF];
    PEACH_PUFF => "peachpuff", "FFDAB9", [0xFF, 0xDA, 0xB9, 0xFF];
    PERU => "peru", "CD853F", [0xCD, 0x85, 0x3F, 0xFF];
    PINK => "pink", "FFC0CB", [0xFF, 0xC0, 0xCB, 0xFF];
    PLUM => "plum", "DDA0DD", [0xDD, 0xA0, 0xDD, 0xFF];
    POWDER_BLUE => "powderblue", "B0E0E6", [0xB0, 0xE0, 0xE6, 0xFF];
    PURPLE => "purple", "800080", [0x80, 0x00, 0x80, 0xFF];
    REBECCA_PURPLE => "rebeccapurple", "663399", [0x66, 0x33, 0x99, 0xFF];
    RED => "red", "FF0000", [0xFF, 0x00, 0x00, 0xFF];
    ROSY_BROWN => "rosybrown", "BC8F8F", [0xBC, 0x8F, 0x8F, 0xFF];
    ROYAL_BLUE => "royalblue", "4169E1", [0x41, 0x69, 0xE1, 0xFF];
    SADDLE_BROWN => "saddlebrown", "8B4513", [0x8B, 0x45, 0x13, 0xFF];
    SALMON => "salmon", "FA8072", [0xFA, 0x80, 0x72, 0xFF];
    SANDY_BROWN => "sandybrown", "F4A460", [0xF4, 0xA4, 0x60, 0xFF];
    SEA_GREEN => "seagreen", "2E8B57", [0x2E, 0x8B, 0x57, 0xFF];
    SEA_SHELL => "seashell", "FFF5EE", [0xFF, 0xF5, 0xEE, 0xFF];
    SIENNA => "sienna", "A0522D", [0xA0, 0x52, 0x2D, 0xFF];
    SILVER => "silver", "C0C0C0", [0xC0, 0xC0, 0xC0, 0xFF];
    SKY_BLUE => "skyblue", "87CEEB", [0x87, 0xCE, 0xEB, 0xFF];
    SLATE_BLUE => "slateblue", "6A5ACD", [0x6A, 0x5A, 0xCD, 0xFF];
    SLATE_GRAY => "slategray", "708090", [0x70, 0x80, 0x90, 0xFF];
    SNOW => "snow", "FFFAFA", [0xFF, 0xFA, 0xFA, 0xFF];
    SPRING_GREEN => "springgreen", "00FF7F", [0x00, 0xFF, 0x7F, 0xFF];
    STEEL_BLUE => "steelblue", "4682B4", [0x46, 0x82, 0xB4, 0xFF];
    TAN => "tan", "D2B48C", [0xD2, 0xB4, 0x8C, 0xFF];
    TEAL => "teal", "008080", [0x00, 0x80, 0x80, 0xFF];
    THISTLE => "thistle", "D8BFD8", [0xD8, 0xBF, 0xD8, 0xFF];
    TOMATO => "tomato", "FF6347", [0xFF, 0x63, 0x47, 0xFF];
    TRANSPARENT => "transparent", "00000000", [0x00, 0x00, 0x00, 0x00];
    TURQUOISE => "turquoise", "40E0D0", [0x40, 0xE0, 0xD0, 0xFF];
    VIOLET => "violet", "EE82EE", [0xEE, 0x82, 0xEE, 0xFF];
    WHEAT => "wheat", "F5DEB3", [0xF5, 0xDE, 0xB3, 0xFF];
    WHITE => "white", "FFFFFF", [0xFF, 0xFF, 0xFF, 0xFF];
    WHITE_SMOKE => "whitesmoke", "F5F5F5", [0xF5, 0xF5, 0xF5, 0xFF];
    YELLOW => "yellow", "FFFF00", [0xFF, 0xFF, 0x00, 0xFF];
    YELLOW_GREEN => "yellowgreen", "9ACD32", [0x9A, 0xCD, 0x32, 0xFF];
}

static BY_NAME: Lazy<HashMap<&'static str, Color<u8>>> =
    Lazy::new(|| NAMED_COLORS.iter().copied().collect());

/// Looks up a named color, ignoring case and accepting `grey` for `gray`.
pub fn lookup(name: &str) -> Option<Color<u8>> {
    let key = name.trim().to_ascii_lowercase().replace("grey", "gray");
    BY_NAME.get(key.as_str()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_table_size() {
        assert_eq!(NAMED_COLORS.len(), 142);
        assert_eq!(BY_NAME.len(), NAMED_COLORS.len());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(lookup("AliceBlue"), Some(Color::<u8>::ALICE_BLUE));
        assert_eq!(lookup(" aliceblue "), Some(Color::<u8>::ALICE_BLUE));
        assert_eq!(lookup("notacolor"), None);
    }

    #[test]
    fn test_grey_spelling() {
        assert_eq!(lookup("SlateGrey"), Some(Color::<u8>::SLATE_GRAY));
        assert_eq!(lookup("grey"), Some(Color::<u8>::GRAY));
    }

    #[test]
    fn test_values_match_w3c_hex() {
        assert_eq!(Color::<u8>::from_hex("#F0F8FF").unwrap(), Color::<u8>::ALICE_BLUE);
        assert_eq!(Color::<u8>::from_hex("#663399").unwrap(), Color::<u8>::REBECCA_PURPLE);
        assert_eq!(Color::<u8>::from_hex("#9ACD32").unwrap(), Color::<u8>::YELLOW_GREEN);
    }

    #[test]
    fn test_only_transparent_has_zero_alpha() {
        for (name, color) in NAMED_COLORS {
            if *name == "transparent" {
                assert!(color.is_empty());
            } else {
                assert!(color.is_opaque(), "{name} should be opaque");
            }
        }
    }
}
