use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::utils::colors::{parse_hex_color, to_hex};
use ansi_term::{Colour, Style};
use serde::{Deserialize, Serialize};

pub const MIN_TEXT_SIZE: u8 = 12;
pub const MAX_TEXT_SIZE: u8 = 24;
pub const DEFAULT_TEXT_SIZE: u8 = 14;

pub const RESET_BACKGROUND: &str = "#FFFFFF";

/// Named two-stop gradients (`gradient_1` .. `gradient_20`).
const GRADIENTS: [(&str, &str); 20] = [
    ("#FF9A9E", "#FAD0C4"),
    ("#A18CD1", "#FBC2EB"),
    ("#FAD0C4", "#FFD1FF"),
    ("#FFECD2", "#FCB69F"),
    ("#FF9A9E", "#FECFEF"),
    ("#A1C4FD", "#C2E9FB"),
    ("#D4FC79", "#96E6A1"),
    ("#84FAB0", "#8FD3F4"),
    ("#CFD9DF", "#E2EBF0"),
    ("#A6C0FE", "#F68084"),
    ("#FCCB90", "#D57EEB"),
    ("#E0C3FC", "#8EC5FC"),
    ("#F093FB", "#F5576C"),
    ("#4FACFE", "#00F2FE"),
    ("#43E97B", "#38F9D7"),
    ("#FA709A", "#FEE140"),
    ("#30CFD0", "#330867"),
    ("#667EEA", "#764BA2"),
    ("#FDDB92", "#D1FDFF"),
    ("#9890E3", "#B1F4CF"),
];

/// Exactly one background is active at a time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Background {
    #[default]
    Default,
    Color(String),
    Gradient(String),
    Image(String),
}

impl Background {
    /// Color used for the terminal rendering: a solid color or the first
    /// stop of a gradient. Images have no terminal equivalent.
    pub fn terminal_color(&self) -> Option<(u8, u8, u8)> {
        match self {
            Background::Color(hex) => parse_hex_color(hex).ok(),
            Background::Gradient(name) => gradient_stops(name)
                .ok()
                .and_then(|(first, _)| parse_hex_color(first).ok()),
            Background::Default | Background::Image(_) => None,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Background::Default => "default".to_string(),
            Background::Color(c) => format!("color {c}"),
            Background::Gradient(g) => match gradient_stops(g) {
                Ok((a, b)) => format!("gradient {g} ({a} → {b})"),
                Err(_) => format!("gradient {g}"),
            },
            Background::Image(p) => format!("image {p}"),
        }
    }
}

pub fn gradient_stops(name: &str) -> AppResult<(&'static str, &'static str)> {
    let idx: usize = name
        .strip_prefix("gradient_")
        .and_then(|n| n.parse().ok())
        .filter(|n| (1..=GRADIENTS.len()).contains(n))
        .ok_or_else(|| AppError::InvalidGradient(name.to_string()))?;

    Ok(GRADIENTS[idx - 1])
}

pub fn gradient_names() -> impl Iterator<Item = String> {
    (1..=GRADIENTS.len()).map(|i| format!("gradient_{i}"))
}

/// Requested changes to the theme. `None` leaves a setting untouched.
#[derive(Debug, Default)]
pub struct ThemeChange {
    pub text_color: Option<String>,
    pub text_size: Option<u8>,
    pub bg_color: Option<String>,
    pub bg_gradient: Option<String>,
    pub bg_image: Option<String>,
    pub reset_background: bool,
}

impl ThemeChange {
    pub fn is_empty(&self) -> bool {
        self.text_color.is_none()
            && self.text_size.is_none()
            && self.bg_color.is_none()
            && self.bg_gradient.is_none()
            && self.bg_image.is_none()
            && !self.reset_background
    }
}

pub struct ThemeLogic;

impl ThemeLogic {
    /// Validate `change` and write it into `cfg`.
    ///
    /// The background options are mutually exclusive; the last one wins in
    /// the order color, gradient, image, reset.
    pub fn apply(cfg: &mut Config, change: &ThemeChange) -> AppResult<()> {
        if let Some(c) = &change.text_color {
            cfg.text_color = if c.eq_ignore_ascii_case("none") {
                None
            } else {
                Some(to_hex(parse_hex_color(c)?))
            };
        }

        if let Some(size) = change.text_size {
            if !(MIN_TEXT_SIZE..=MAX_TEXT_SIZE).contains(&size) {
                return Err(AppError::Config(format!(
                    "text size must be between {MIN_TEXT_SIZE} and {MAX_TEXT_SIZE}, got {size}"
                )));
            }
            cfg.text_size = size;
        }

        if let Some(c) = &change.bg_color {
            cfg.background = Background::Color(to_hex(parse_hex_color(c)?));
        }

        if let Some(g) = &change.bg_gradient {
            gradient_stops(g)?;
            cfg.background = Background::Gradient(g.clone());
        }

        if let Some(img) = &change.bg_image {
            let path = crate::utils::path::expand_tilde(img);
            if !path.is_file() {
                return Err(AppError::Config(format!(
                    "background image not found: {}",
                    path.display()
                )));
            }
            cfg.background = Background::Image(path.to_string_lossy().to_string());
        }

        if change.reset_background {
            cfg.background = Background::Color(RESET_BACKGROUND.to_string());
        }

        Ok(())
    }

    /// Body text style from the configured text color.
    pub fn text_style(cfg: &Config) -> Style {
        match cfg.text_color.as_deref().map(parse_hex_color) {
            Some(Ok((r, g, b))) => Style::new().fg(Colour::RGB(r, g, b)),
            _ => Style::new(),
        }
    }

    /// Header style: bold text over the background color, if any.
    pub fn header_style(cfg: &Config) -> Style {
        let base = Self::text_style(cfg).bold();
        match cfg.background.terminal_color() {
            Some((r, g, b)) => base.on(Colour::RGB(r, g, b)),
            None => base,
        }
    }

    /// PDF body font size, scaled from the configured text size.
    pub fn pdf_font_scale(cfg: &Config) -> f32 {
        (f32::from(cfg.text_size) / f32::from(DEFAULT_TEXT_SIZE)).clamp(0.85, 1.2)
    }
}
