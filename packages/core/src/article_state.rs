//! Article presentation snapshot
//!
//! [`ArticleState`] holds one option per slot. It is `Copy` and every edit
//! returns a new snapshot, so a committed state can never be changed behind
//! the back of whoever holds it.

use crate::options::{
    BackgroundColor, CatalogOption, ContentWidth, FontColor, FontFamily, FontSize, Slot,
};
use crate::FolioResult;
use serde::{Deserialize, Serialize};

/// One selected option for each presentation slot
///
/// Missing keys fall back to the slot's catalog default when deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArticleState {
    #[serde(rename = "fontFamilyOption")]
    pub font_family: FontFamily,
    #[serde(rename = "fontSizeOption")]
    pub font_size: FontSize,
    pub font_color: FontColor,
    pub background_color: BackgroundColor,
    pub content_width: ContentWidth,
}

/// A new option for exactly one slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    FontFamily(FontFamily),
    FontSize(FontSize),
    FontColor(FontColor),
    BackgroundColor(BackgroundColor),
    ContentWidth(ContentWidth),
}

impl Selection {
    /// Look up `value` in `slot`'s catalog
    pub fn parse(slot: Slot, value: &str) -> FolioResult<Self> {
        Ok(match slot {
            Slot::FontFamily => Selection::FontFamily(FontFamily::from_value(value)?),
            Slot::FontSize => Selection::FontSize(FontSize::from_value(value)?),
            Slot::FontColor => Selection::FontColor(FontColor::from_value(value)?),
            Slot::BackgroundColor => {
                Selection::BackgroundColor(BackgroundColor::from_value(value)?)
            }
            Slot::ContentWidth => Selection::ContentWidth(ContentWidth::from_value(value)?),
        })
    }

    /// Slot this selection replaces
    pub fn slot(&self) -> Slot {
        match self {
            Selection::FontFamily(_) => Slot::FontFamily,
            Selection::FontSize(_) => Slot::FontSize,
            Selection::FontColor(_) => Slot::FontColor,
            Selection::BackgroundColor(_) => Slot::BackgroundColor,
            Selection::ContentWidth(_) => Slot::ContentWidth,
        }
    }

    /// Machine value of the selected option
    pub fn value(&self) -> &'static str {
        match self {
            Selection::FontFamily(o) => o.value(),
            Selection::FontSize(o) => o.value(),
            Selection::FontColor(o) => o.value(),
            Selection::BackgroundColor(o) => o.value(),
            Selection::ContentWidth(o) => o.value(),
        }
    }
}

impl ArticleState {
    pub fn with_font_family(self, font_family: FontFamily) -> Self {
        Self {
            font_family,
            ..self
        }
    }

    pub fn with_font_size(self, font_size: FontSize) -> Self {
        Self { font_size, ..self }
    }

    pub fn with_font_color(self, font_color: FontColor) -> Self {
        Self { font_color, ..self }
    }

    pub fn with_background_color(self, background_color: BackgroundColor) -> Self {
        Self {
            background_color,
            ..self
        }
    }

    pub fn with_content_width(self, content_width: ContentWidth) -> Self {
        Self {
            content_width,
            ..self
        }
    }

    /// Replace the slot named by `selection`, keeping the other four
    pub fn with(self, selection: Selection) -> Self {
        match selection {
            Selection::FontFamily(o) => self.with_font_family(o),
            Selection::FontSize(o) => self.with_font_size(o),
            Selection::FontColor(o) => self.with_font_color(o),
            Selection::BackgroundColor(o) => self.with_background_color(o),
            Selection::ContentWidth(o) => self.with_content_width(o),
        }
    }

    /// Current option of `slot`, as a selection
    pub fn get(&self, slot: Slot) -> Selection {
        match slot {
            Slot::FontFamily => Selection::FontFamily(self.font_family),
            Slot::FontSize => Selection::FontSize(self.font_size),
            Slot::FontColor => Selection::FontColor(self.font_color),
            Slot::BackgroundColor => Selection::BackgroundColor(self.background_color),
            Slot::ContentWidth => Selection::ContentWidth(self.content_width),
        }
    }

    /// Slots whose option differs from `other`
    pub fn diff(&self, other: &ArticleState) -> Vec<Slot> {
        Slot::ALL
            .into_iter()
            .filter(|slot| self.get(*slot) != other.get(*slot))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot() {
        let state = ArticleState::default();
        assert_eq!(state.font_family, FontFamily::OpenSans);
        assert_eq!(state.font_size, FontSize::Small);
        assert_eq!(state.font_color, FontColor::Black);
        assert_eq!(state.background_color, BackgroundColor::White);
        assert_eq!(state.content_width, ContentWidth::Wide);
    }

    #[test]
    fn test_with_replaces_single_slot() {
        let base = ArticleState::default();

        for slot in Slot::ALL {
            let selection = match slot {
                Slot::FontFamily => Selection::FontFamily(FontFamily::Merriweather),
                Slot::FontSize => Selection::FontSize(FontSize::Large),
                Slot::FontColor => Selection::FontColor(FontColor::Violet),
                Slot::BackgroundColor => Selection::BackgroundColor(BackgroundColor::Gray),
                Slot::ContentWidth => Selection::ContentWidth(ContentWidth::Narrow),
            };
            let updated = base.with(selection);

            assert_eq!(updated.get(slot), selection);
            assert_eq!(updated.diff(&base), vec![slot]);
        }
    }

    #[test]
    fn test_edit_leaves_original_untouched() {
        let original = ArticleState::default();
        let edited = original.with_font_family(FontFamily::PtSerif);

        assert_eq!(original.font_family, FontFamily::OpenSans);
        assert_eq!(edited.font_family, FontFamily::PtSerif);
    }

    #[test]
    fn test_serialized_shape() {
        let state = ArticleState::default().with_font_family(FontFamily::PtSerif);
        let json = serde_json::to_value(state).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "fontFamilyOption": "PT Serif",
                "fontSizeOption": "18px",
                "fontColor": "#000000",
                "backgroundColor": "#FFFFFF",
                "contentWidth": "1394px",
            })
        );
    }

    #[test]
    fn test_serialized_keys_match_slots() {
        let json = serde_json::to_value(ArticleState::default()).unwrap();
        for slot in Slot::ALL {
            assert_eq!(json[slot.key()], ArticleState::default().get(slot).value());
        }
    }

    #[test]
    fn test_deserialize_rejects_unknown_value() {
        let json = serde_json::json!({
            "fontFamilyOption": "Comic Sans",
            "fontSizeOption": "18px",
            "fontColor": "#000000",
            "backgroundColor": "#FFFFFF",
            "contentWidth": "1394px",
        });
        let err = serde_json::from_value::<ArticleState>(json).unwrap_err();
        assert!(err.to_string().contains("Comic Sans"));
    }

    #[test]
    fn test_selection_parse_by_slot() {
        assert_eq!(
            Selection::parse(Slot::FontColor, "#80D994").unwrap(),
            Selection::FontColor(FontColor::Green)
        );
        assert!(matches!(
            Selection::parse(Slot::ContentWidth, "2000px"),
            Err(crate::FolioError::UnknownOption {
                slot: Slot::ContentWidth,
                ..
            })
        ));
    }
}
