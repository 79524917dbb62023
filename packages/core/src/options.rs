//! Option catalogs for article presentation
//!
//! Every presentation slot has a fixed catalog of choices. Each slot is a
//! plain enum so a selection outside its catalog cannot be constructed; the
//! wire value strings (`"Open Sans"`, `"18px"`, `"#FFFFFF"`) only appear at
//! the serialization edge.

use crate::{FolioError, FolioResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five presentation slots of an article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    FontFamily,
    FontSize,
    FontColor,
    BackgroundColor,
    ContentWidth,
}

impl Slot {
    pub const ALL: [Self; 5] = [
        Self::FontFamily,
        Self::FontSize,
        Self::FontColor,
        Self::BackgroundColor,
        Self::ContentWidth,
    ];

    /// Field title shown above the control
    pub fn title(self) -> &'static str {
        match self {
            Self::FontFamily => "Font",
            Self::FontSize => "Font size",
            Self::FontColor => "Font color",
            Self::BackgroundColor => "Background color",
            Self::ContentWidth => "Content width",
        }
    }

    /// Key used for this slot in serialized snapshots
    pub fn key(self) -> &'static str {
        match self {
            Self::FontFamily => "fontFamilyOption",
            Self::FontSize => "fontSizeOption",
            Self::FontColor => "fontColor",
            Self::BackgroundColor => "backgroundColor",
            Self::ContentWidth => "contentWidth",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FontFamily => write!(f, "font family"),
            Self::FontSize => write!(f, "font size"),
            Self::FontColor => write!(f, "font color"),
            Self::BackgroundColor => write!(f, "background color"),
            Self::ContentWidth => write!(f, "content width"),
        }
    }
}

/// A value + label pair drawn from a fixed catalog
pub trait CatalogOption: Copy + Eq + fmt::Display + 'static {
    /// Slot this option fills
    const SLOT: Slot;

    /// Every selectable option, default first
    fn catalog() -> &'static [Self];

    /// Machine value, e.g. `"18px"` or `"#FFFFFF"`
    fn value(&self) -> &'static str;

    /// Human-readable label
    fn label(&self) -> &'static str;

    /// First catalog entry
    fn default_option() -> Self {
        Self::catalog()[0]
    }

    /// Look up an option by its machine value
    fn from_value(value: &str) -> FolioResult<Self> {
        Self::catalog()
            .iter()
            .copied()
            .find(|option| option.value() == value)
            .ok_or_else(|| FolioError::UnknownOption {
                slot: Self::SLOT,
                value: value.to_string(),
            })
    }
}

// Shared glue: Display via label, FromStr/serde via value.
macro_rules! option_conversions {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                <$ty as CatalogOption>::default_option()
            }
        }

        impl FromStr for $ty {
            type Err = FolioError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty as CatalogOption>::from_value(s)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = FolioError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$ty> for String {
            fn from(option: $ty) -> Self {
                option.value().to_string()
            }
        }
    };
}

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#RRGGBB` notation
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

// ---------------------------------------------------------------------------
// Font family
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FontFamily {
    OpenSans,
    Ubuntu,
    CormorantGaramond,
    DaysOne,
    Merriweather,
    PtSerif,
}

impl FontFamily {
    pub const ALL: [Self; 6] = [
        Self::OpenSans,
        Self::Ubuntu,
        Self::CormorantGaramond,
        Self::DaysOne,
        Self::Merriweather,
        Self::PtSerif,
    ];

    /// Family name as the font system knows it
    pub fn family_name(self) -> &'static str {
        self.value()
    }
}

impl CatalogOption for FontFamily {
    const SLOT: Slot = Slot::FontFamily;

    fn catalog() -> &'static [Self] {
        &Self::ALL
    }

    fn value(&self) -> &'static str {
        match self {
            Self::OpenSans => "Open Sans",
            Self::Ubuntu => "Ubuntu",
            Self::CormorantGaramond => "Cormorant Garamond",
            Self::DaysOne => "Days One",
            Self::Merriweather => "Merriweather",
            Self::PtSerif => "PT Serif",
        }
    }

    fn label(&self) -> &'static str {
        self.value()
    }
}

option_conversions!(FontFamily);

// ---------------------------------------------------------------------------
// Font size
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FontSize {
    Small,
    Medium,
    Large,
}

impl FontSize {
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    pub fn pixels(self) -> u16 {
        match self {
            Self::Small => 18,
            Self::Medium => 25,
            Self::Large => 38,
        }
    }
}

impl CatalogOption for FontSize {
    const SLOT: Slot = Slot::FontSize;

    fn catalog() -> &'static [Self] {
        &Self::ALL
    }

    fn value(&self) -> &'static str {
        match self {
            Self::Small => "18px",
            Self::Medium => "25px",
            Self::Large => "38px",
        }
    }

    fn label(&self) -> &'static str {
        self.value()
    }
}

option_conversions!(FontSize);

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

/// Palette shared by the font and background color catalogs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Swatch {
    Black,
    White,
    Gray,
    Pink,
    HotPink,
    Yellow,
    Green,
    SkyBlue,
    Violet,
}

impl Swatch {
    fn value(self) -> &'static str {
        match self {
            Swatch::Black => "#000000",
            Swatch::White => "#FFFFFF",
            Swatch::Gray => "#C4C4C4",
            Swatch::Pink => "#FEAFE8",
            Swatch::HotPink => "#FD24AF",
            Swatch::Yellow => "#FFC802",
            Swatch::Green => "#80D994",
            Swatch::SkyBlue => "#6FC1FD",
            Swatch::Violet => "#5F00FF",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Swatch::Black => "Black",
            Swatch::White => "White",
            Swatch::Gray => "Gray",
            Swatch::Pink => "Pink",
            Swatch::HotPink => "Hot pink",
            Swatch::Yellow => "Yellow",
            Swatch::Green => "Green",
            Swatch::SkyBlue => "Sky blue",
            Swatch::Violet => "Violet",
        }
    }

    fn rgb(self) -> Rgb {
        match self {
            Swatch::Black => Rgb::new(0x00, 0x00, 0x00),
            Swatch::White => Rgb::new(0xFF, 0xFF, 0xFF),
            Swatch::Gray => Rgb::new(0xC4, 0xC4, 0xC4),
            Swatch::Pink => Rgb::new(0xFE, 0xAF, 0xE8),
            Swatch::HotPink => Rgb::new(0xFD, 0x24, 0xAF),
            Swatch::Yellow => Rgb::new(0xFF, 0xC8, 0x02),
            Swatch::Green => Rgb::new(0x80, 0xD9, 0x94),
            Swatch::SkyBlue => Rgb::new(0x6F, 0xC1, 0xFD),
            Swatch::Violet => Rgb::new(0x5F, 0x00, 0xFF),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FontColor {
    Black,
    White,
    Gray,
    Pink,
    HotPink,
    Yellow,
    Green,
    SkyBlue,
    Violet,
}

impl FontColor {
    pub const ALL: [Self; 9] = [
        Self::Black,
        Self::White,
        Self::Gray,
        Self::Pink,
        Self::HotPink,
        Self::Yellow,
        Self::Green,
        Self::SkyBlue,
        Self::Violet,
    ];

    fn swatch(self) -> Swatch {
        match self {
            Self::Black => Swatch::Black,
            Self::White => Swatch::White,
            Self::Gray => Swatch::Gray,
            Self::Pink => Swatch::Pink,
            Self::HotPink => Swatch::HotPink,
            Self::Yellow => Swatch::Yellow,
            Self::Green => Swatch::Green,
            Self::SkyBlue => Swatch::SkyBlue,
            Self::Violet => Swatch::Violet,
        }
    }

    pub fn rgb(self) -> Rgb {
        self.swatch().rgb()
    }
}

impl CatalogOption for FontColor {
    const SLOT: Slot = Slot::FontColor;

    fn catalog() -> &'static [Self] {
        &Self::ALL
    }

    fn value(&self) -> &'static str {
        self.swatch().value()
    }

    fn label(&self) -> &'static str {
        self.swatch().label()
    }
}

option_conversions!(FontColor);

/// Background colors; same palette as [`FontColor`] but white comes first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BackgroundColor {
    White,
    Black,
    Gray,
    Pink,
    HotPink,
    Yellow,
    Green,
    SkyBlue,
    Violet,
}

impl BackgroundColor {
    pub const ALL: [Self; 9] = [
        Self::White,
        Self::Black,
        Self::Gray,
        Self::Pink,
        Self::HotPink,
        Self::Yellow,
        Self::Green,
        Self::SkyBlue,
        Self::Violet,
    ];

    fn swatch(self) -> Swatch {
        match self {
            Self::White => Swatch::White,
            Self::Black => Swatch::Black,
            Self::Gray => Swatch::Gray,
            Self::Pink => Swatch::Pink,
            Self::HotPink => Swatch::HotPink,
            Self::Yellow => Swatch::Yellow,
            Self::Green => Swatch::Green,
            Self::SkyBlue => Swatch::SkyBlue,
            Self::Violet => Swatch::Violet,
        }
    }

    pub fn rgb(self) -> Rgb {
        self.swatch().rgb()
    }
}

impl CatalogOption for BackgroundColor {
    const SLOT: Slot = Slot::BackgroundColor;

    fn catalog() -> &'static [Self] {
        &Self::ALL
    }

    fn value(&self) -> &'static str {
        self.swatch().value()
    }

    fn label(&self) -> &'static str {
        self.swatch().label()
    }
}

option_conversions!(BackgroundColor);

// ---------------------------------------------------------------------------
// Content width
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ContentWidth {
    Wide,
    Narrow,
}

impl ContentWidth {
    pub const ALL: [Self; 2] = [Self::Wide, Self::Narrow];

    pub fn pixels(self) -> u16 {
        match self {
            Self::Wide => 1394,
            Self::Narrow => 948,
        }
    }
}

impl CatalogOption for ContentWidth {
    const SLOT: Slot = Slot::ContentWidth;

    fn catalog() -> &'static [Self] {
        &Self::ALL
    }

    fn value(&self) -> &'static str {
        match self {
            Self::Wide => "1394px",
            Self::Narrow => "948px",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Wide => "Wide",
            Self::Narrow => "Narrow",
        }
    }
}

option_conversions!(ContentWidth);
