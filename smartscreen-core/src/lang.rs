use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Page language. Arabic pages render right-to-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Ar,
    En,
}

impl Lang {
    pub const ALL: [Self; 2] = [Self::Ar, Self::En];

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ar => "ar",
            Self::En => "en",
        }
    }

    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Ar)
    }

    /// Value for the `dir` attribute of the document element.
    #[must_use]
    pub const fn dir(self) -> &'static str {
        if self.is_rtl() { "rtl" } else { "ltr" }
    }

    /// Treats anything starting with `ar` (e.g. `ar-SA`) as Arabic, everything else as English.
    #[must_use]
    pub fn from_document_lang(lang: &str) -> Self {
        if lang.trim().to_ascii_lowercase().starts_with("ar") {
            Self::Ar
        } else {
            Self::En
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language code: {0}")]
pub struct UnknownLang(pub String);

impl FromStr for Lang {
    type Err = UnknownLang;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ar" => Ok(Self::Ar),
            "en" => Ok(Self::En),
            other => Err(UnknownLang(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_follows_language() {
        assert_eq!(Lang::Ar.dir(), "rtl");
        assert_eq!(Lang::En.dir(), "ltr");
        assert!(Lang::Ar.is_rtl());
    }

    #[test]
    fn document_lang_prefix_detection() {
        assert_eq!(Lang::from_document_lang("ar-SA"), Lang::Ar);
        assert_eq!(Lang::from_document_lang("AR"), Lang::Ar);
        assert_eq!(Lang::from_document_lang("en-US"), Lang::En);
        assert_eq!(Lang::from_document_lang(""), Lang::En);
    }

    #[test]
    fn parses_known_codes_only() {
        assert_eq!("ar".parse::<Lang>(), Ok(Lang::Ar));
        assert!("fr".parse::<Lang>().is_err());
        assert_eq!(serde_json::to_string(&Lang::En).unwrap(), "\"en\"");
    }
}
