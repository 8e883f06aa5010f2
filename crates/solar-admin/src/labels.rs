//! Display label and tone tables for the enumerated fields shown in the admin console.

use serde::{Deserialize, Serialize};

/// Language preference for rendered labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ar")]
    Arabic,
}

impl Language {
    /// Lenient parse used for query strings and CLI flags; anything not Arabic is English.
    pub fn from_code(raw: &str) -> Self {
        let code = raw.trim().to_ascii_lowercase();
        if code == "ar" || code.starts_with("ar-") || code == "arabic" {
            Self::Arabic
        } else {
            Self::English
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Arabic => "ar",
        }
    }

    pub const fn unknown_label(self) -> &'static str {
        match self {
            Self::English => "Unknown",
            Self::Arabic => "غير معروف",
        }
    }
}

/// Colour family used by the UI badge for a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Info,
    Neutral,
}

/// Closed enumeration rendered with a label and a tone.
pub trait DisplayTag: Copy + PartialEq + 'static {
    /// Every variant, in display order.
    const ALL: &'static [Self];

    /// Wire representation, identical to the serde tag.
    fn as_str(self) -> &'static str;

    fn label(self, lang: Language) -> &'static str;

    fn tone(self) -> Tone {
        Tone::Neutral
    }

    fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.iter().copied().find(|tag| tag.as_str() == raw)
    }
}

/// Label for a raw wire tag, falling back to the Unknown label.
pub fn label_for<T: DisplayTag>(raw: &str, lang: Language) -> &'static str {
    T::parse(raw).map_or(lang.unknown_label(), |tag| tag.label(lang))
}

/// Tone for a raw wire tag, neutral when the tag is not recognised.
pub fn tone_for<T: DisplayTag>(raw: &str) -> Tone {
    T::parse(raw).map_or(Tone::Neutral, DisplayTag::tone)
}

/// Serializable rendering of a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TagView {
    pub value: &'static str,
    pub label: &'static str,
    pub tone: Tone,
}

impl TagView {
    pub fn of<T: DisplayTag>(tag: T, lang: Language) -> Self {
        Self {
            value: tag.as_str(),
            label: tag.label(lang),
            tone: tag.tone(),
        }
    }
}

/// Formats a whole-riyal amount with thousands separators.
pub fn format_amount(amount: u64, lang: Language) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match lang {
        Language::English => format!("SAR {grouped}"),
        Language::Arabic => format!("{grouped} ر.س"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Light {
        Green,
        Red,
    }

    impl DisplayTag for Light {
        const ALL: &'static [Self] = &[Self::Green, Self::Red];

        fn as_str(self) -> &'static str {
            match self {
                Self::Green => "green",
                Self::Red => "red",
            }
        }

        fn label(self, lang: Language) -> &'static str {
            match (self, lang) {
                (Self::Green, Language::English) => "Go",
                (Self::Green, Language::Arabic) => "انطلق",
                (Self::Red, Language::English) => "Stop",
                (Self::Red, Language::Arabic) => "قف",
            }
        }

        fn tone(self) -> Tone {
            match self {
                Self::Green => Tone::Success,
                Self::Red => Tone::Danger,
            }
        }
    }

    #[test]
    fn label_for_falls_back_to_unknown() {
        assert_eq!(label_for::<Light>("green", Language::English), "Go");
        assert_eq!(label_for::<Light>("amber", Language::English), "Unknown");
        assert_eq!(label_for::<Light>("amber", Language::Arabic), "غير معروف");
        assert_eq!(tone_for::<Light>("amber"), Tone::Neutral);
        assert_eq!(tone_for::<Light>(" red "), Tone::Danger);
    }

    #[test]
    fn language_codes_parse_leniently() {
        assert_eq!(Language::from_code("AR"), Language::Arabic);
        assert_eq!(Language::from_code("ar-SA"), Language::Arabic);
        assert_eq!(Language::from_code("fr"), Language::English);
        assert_eq!(Language::from_code(""), Language::English);
    }

    #[test]
    fn amounts_are_grouped() {
        assert_eq!(format_amount(0, Language::English), "SAR 0");
        assert_eq!(format_amount(950, Language::English), "SAR 950");
        assert_eq!(format_amount(85_000, Language::English), "SAR 85,000");
        assert_eq!(format_amount(1_250_000, Language::Arabic), "1,250,000 ر.س");
    }
}
