use serde::{Deserialize, Serialize};

/// Appearance of the landing page, stored as `landing-config.json`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub title: String,
    pub subtitle: String,
    pub background_color: String,
    pub text_color: String,
    pub accent_color: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let palette = ColorScheme::Dark.palette();
        Self {
            title: "Playfairs.cc".to_string(),
            subtitle: "A simple Biolink made with Remix and Tailwind CSS just to test my skills."
                .to_string(),
            background_color: palette.background_color.to_string(),
            text_color: palette.text_color.to_string(),
            accent_color: palette.accent_color.to_string(),
        }
    }
}

impl SiteConfig {
    pub fn with_scheme(title: String, subtitle: String, scheme: ColorScheme) -> Self {
        let palette = scheme.palette();
        Self {
            title,
            subtitle,
            background_color: palette.background_color.to_string(),
            text_color: palette.text_color.to_string(),
            accent_color: palette.accent_color.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorScheme {
    #[default]
    Dark,
    Light,
    Ocean,
}

pub struct Palette {
    pub background_color: &'static str,
    pub text_color: &'static str,
    pub accent_color: &'static str,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 3] = [ColorScheme::Dark, ColorScheme::Light, ColorScheme::Ocean];

    /// Unknown names fall back to the dark palette.
    pub fn from_name(name: Option<&str>) -> Self {
        match name.map(str::trim) {
            Some("light") => ColorScheme::Light,
            Some("ocean") => ColorScheme::Ocean,
            _ => ColorScheme::Dark,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ColorScheme::Dark => "dark",
            ColorScheme::Light => "light",
            ColorScheme::Ocean => "ocean",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ColorScheme::Dark => "Dark (Default)",
            ColorScheme::Light => "Light",
            ColorScheme::Ocean => "Ocean",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            ColorScheme::Dark => Palette {
                background_color: "bg-gray-900",
                text_color: "text-gray-100",
                accent_color: "text-blue-400",
            },
            ColorScheme::Light => Palette {
                background_color: "bg-gray-100",
                text_color: "text-gray-900",
                accent_color: "text-blue-600",
            },
            ColorScheme::Ocean => Palette {
                background_color: "bg-blue-900",
                text_color: "text-blue-100",
                accent_color: "text-teal-300",
            },
        }
    }

    /// Reverse lookup used to preselect the scheme in the admin form.
    pub fn of(config: &SiteConfig) -> Option<Self> {
        Self::ALL.into_iter().find(|scheme| {
            let palette = scheme.palette();
            palette.background_color == config.background_color
                && palette.text_color == config.text_color
                && palette.accent_color == config.accent_color
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_scheme_falls_back_to_dark() {
        assert_eq!(ColorScheme::from_name(Some("neon")), ColorScheme::Dark);
        assert_eq!(ColorScheme::from_name(None), ColorScheme::Dark);
        assert_eq!(ColorScheme::from_name(Some("ocean")), ColorScheme::Ocean);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let value = serde_json::to_value(SiteConfig::default()).unwrap();
        assert_eq!(value["backgroundColor"], "bg-gray-900");
        assert_eq!(value["textColor"], "text-gray-100");
        assert_eq!(value["accentColor"], "text-blue-400");
    }

    #[test]
    fn scheme_is_recovered_from_config() {
        let config = SiteConfig::with_scheme("abc".into(), "0123456789".into(), ColorScheme::Light);
        assert_eq!(ColorScheme::of(&config), Some(ColorScheme::Light));
    }
}
