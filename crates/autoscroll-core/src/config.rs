//! The per-container configuration record.
//!
//! Values arrive as a flat string mapping (the container's `data-*`
//! attributes). Parsing never fails as a whole: every field that is missing
//! or malformed falls back to its documented default and the problem is
//! logged.

use crate::constants::{GRADIENT_MAX_COLORS, PARTICLE_DENSITY_MAX};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("field `{field}`: `{value}` is not a number")]
    InvalidNumber { field: &'static str, value: String },
    #[error("field `{field}`: {value} is out of range")]
    OutOfRange { field: &'static str, value: f64 },
    #[error("unknown animation style `{0}`")]
    UnknownAnimationStyle(String),
}

/// Reveal animation flavour; each maps onto one CSS class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AnimationStyle {
    #[default]
    FadeUp,
    Scale,
    SlideLeft,
    SlideRight,
    Blur,
    Rotate,
    Stagger,
}

impl AnimationStyle {
    pub const ALL: [AnimationStyle; 7] = [
        AnimationStyle::FadeUp,
        AnimationStyle::Scale,
        AnimationStyle::SlideLeft,
        AnimationStyle::SlideRight,
        AnimationStyle::Blur,
        AnimationStyle::Rotate,
        AnimationStyle::Stagger,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AnimationStyle::FadeUp => "fade-up",
            AnimationStyle::Scale => "scale",
            AnimationStyle::SlideLeft => "slide-left",
            AnimationStyle::SlideRight => "slide-right",
            AnimationStyle::Blur => "blur",
            AnimationStyle::Rotate => "rotate",
            AnimationStyle::Stagger => "stagger",
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            AnimationStyle::FadeUp => "autoscroll-animate-fade-up",
            AnimationStyle::Scale => "autoscroll-animate-scale",
            AnimationStyle::SlideLeft => "autoscroll-animate-slide-left",
            AnimationStyle::SlideRight => "autoscroll-animate-slide-right",
            AnimationStyle::Blur => "autoscroll-animate-blur",
            AnimationStyle::Rotate => "autoscroll-animate-rotate",
            AnimationStyle::Stagger => "autoscroll-animate-stagger",
        }
    }
}

impl FromStr for AnimationStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        AnimationStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownAnimationStyle(s.to_string()))
    }
}

impl fmt::Display for AnimationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attribute names (without the `data-` prefix) the record is read from.
pub mod fields {
    pub const SCROLL_SPEED: &str = "scroll-speed";
    pub const ENABLE_ANIMATIONS: &str = "enable-animations";
    pub const ANIMATION_STYLE: &str = "animation-style";
    pub const ANIMATION_THRESHOLD: &str = "animation-threshold";
    pub const ANIMATION_DURATION: &str = "animation-duration";
    pub const ENABLE_TYPING_EFFECT: &str = "enable-typing-effect";
    pub const TYPING_SPEED: &str = "typing-speed";
    pub const ENABLE_PARALLAX: &str = "enable-parallax";
    pub const PARALLAX_INTENSITY: &str = "parallax-intensity";
    pub const ENABLE_PARTICLES: &str = "enable-particles";
    pub const PARTICLE_DENSITY: &str = "particle-density";
    pub const PARTICLE_TRAILS: &str = "particle-trails";
    pub const ENABLE_GRADIENT_SHIFT: &str = "enable-gradient-shift";
    pub const GRADIENT_COLORS: &str = "gradient-colors";
    pub const ENABLE_BLUR_TRANSITIONS: &str = "enable-blur-transitions";
    pub const BLUR_INTENSITY: &str = "blur-intensity";
    pub const ENABLE_SCALE_EFFECTS: &str = "enable-scale-effects";
    pub const SCALE_INTENSITY: &str = "scale-intensity";
    pub const ENABLE_GLITCH: &str = "enable-glitch";
    pub const GLITCH_FREQUENCY: &str = "glitch-frequency";
    pub const ENABLE_PROGRESS_BAR: &str = "enable-progress-bar";
    pub const ENABLE_RIPPLES: &str = "enable-ripples";
    pub const ENABLE_LIGHT_RAYS: &str = "enable-light-rays";
    pub const ENABLE_ANIMATED_BG: &str = "enable-animated-bg";
}

pub type GradientColors = SmallVec<[String; GRADIENT_MAX_COLORS]>;

/// Typed, validated effect parameters for one scroll container.
///
/// Parameters are kept regardless of whether their owning toggle is on.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollConfig {
    pub scroll_speed: f64,

    pub content_animations: bool,
    pub animation_style: AnimationStyle,
    pub animation_threshold: f64,
    pub animation_duration: f64,

    pub typing_effect: bool,
    pub typing_speed: u32,

    pub parallax: bool,
    pub parallax_intensity: f64,

    pub particles: bool,
    pub particle_density: u32,
    pub particle_trails: bool,

    pub gradient_shift: bool,
    pub gradient_colors: GradientColors,

    pub blur_transitions: bool,
    pub blur_intensity: f64,

    pub scale_effects: bool,
    pub scale_intensity: f64,

    pub glitch: bool,
    pub glitch_frequency: f64,

    pub progress_bar: bool,
    pub ripples: bool,
    pub light_rays: bool,
    pub animated_bg: bool,
}

pub const DEFAULT_SCROLL_SPEED: f64 = 50.0;
pub const DEFAULT_GRADIENT_COLORS: &str = "#667eea,#764ba2";

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            scroll_speed: DEFAULT_SCROLL_SPEED,
            content_animations: true,
            animation_style: AnimationStyle::FadeUp,
            animation_threshold: 0.1,
            animation_duration: 0.6,
            typing_effect: false,
            typing_speed: 50,
            parallax: false,
            parallax_intensity: 0.5,
            particles: false,
            particle_density: 50,
            particle_trails: false,
            gradient_shift: false,
            gradient_colors: split_colors(DEFAULT_GRADIENT_COLORS),
            blur_transitions: false,
            blur_intensity: 5.0,
            scale_effects: false,
            scale_intensity: 0.1,
            glitch: false,
            glitch_frequency: 0.1,
            progress_bar: true,
            ripples: false,
            light_rays: false,
            animated_bg: false,
        }
    }
}

impl ScrollConfig {
    /// Build a record from a flat field lookup. `lookup` receives the
    /// attribute name without its `data-` prefix.
    pub fn from_fields<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let d = Self::default();
        let reader = FieldReader { lookup };

        let animation_style = match reader.raw(fields::ANIMATION_STYLE) {
            Some(raw) => raw.parse::<AnimationStyle>().unwrap_or_else(|e: ConfigError| {
                log::warn!("[config] {e}; using {}", d.animation_style);
                d.animation_style
            }),
            None => d.animation_style,
        };

        let gradient_colors = reader
            .raw(fields::GRADIENT_COLORS)
            .map(|raw| split_colors(&raw))
            .filter(|colors| !colors.is_empty())
            .unwrap_or_else(|| d.gradient_colors.clone());

        Self {
            scroll_speed: reader.positive(fields::SCROLL_SPEED, d.scroll_speed),
            content_animations: reader.flag_default_on(fields::ENABLE_ANIMATIONS),
            animation_style,
            animation_threshold: reader.unit(fields::ANIMATION_THRESHOLD, d.animation_threshold),
            animation_duration: reader.positive(fields::ANIMATION_DURATION, d.animation_duration),
            typing_effect: reader.flag(fields::ENABLE_TYPING_EFFECT),
            typing_speed: reader.positive(fields::TYPING_SPEED, d.typing_speed as f64).round()
                as u32,
            parallax: reader.flag(fields::ENABLE_PARALLAX),
            parallax_intensity: reader.positive(fields::PARALLAX_INTENSITY, d.parallax_intensity),
            particles: reader.flag(fields::ENABLE_PARTICLES),
            particle_density: reader
                .positive(fields::PARTICLE_DENSITY, d.particle_density as f64)
                .floor()
                .min(PARTICLE_DENSITY_MAX as f64) as u32,
            particle_trails: reader.flag(fields::PARTICLE_TRAILS),
            gradient_shift: reader.flag(fields::ENABLE_GRADIENT_SHIFT),
            gradient_colors,
            blur_transitions: reader.flag(fields::ENABLE_BLUR_TRANSITIONS),
            blur_intensity: reader.positive(fields::BLUR_INTENSITY, d.blur_intensity),
            scale_effects: reader.flag(fields::ENABLE_SCALE_EFFECTS),
            scale_intensity: reader.unit(fields::SCALE_INTENSITY, d.scale_intensity),
            glitch: reader.flag(fields::ENABLE_GLITCH),
            glitch_frequency: reader.unit(fields::GLITCH_FREQUENCY, d.glitch_frequency),
            progress_bar: reader.flag_default_on(fields::ENABLE_PROGRESS_BAR),
            ripples: reader.flag(fields::ENABLE_RIPPLES),
            light_rays: reader.flag(fields::ENABLE_LIGHT_RAYS),
            animated_bg: reader.flag(fields::ENABLE_ANIMATED_BG),
        }
    }

    /// Whether any effect needs the page-level heading capture.
    pub fn wants_heading_capture(&self) -> bool {
        self.typing_effect
    }

    /// The record with every effect the browser cannot run switched off.
    /// Visibility-driven effects hide content until an observer reveals it,
    /// so without intersection observation they must not touch the page.
    pub fn restricted_to(&self, caps: Capabilities) -> ScrollConfig {
        let mut cfg = self.clone();
        if !caps.intersection_observer {
            cfg.content_animations = false;
            cfg.typing_effect = false;
            cfg.blur_transitions = false;
            cfg.scale_effects = false;
        }
        cfg
    }
}

/// Browser features some effects depend on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capabilities {
    pub intersection_observer: bool,
}

impl Capabilities {
    pub const ALL: Capabilities = Capabilities {
        intersection_observer: true,
    };
}

/// Split a comma separated colour list, dropping blanks and keeping the
/// first three entries.
pub fn split_colors(raw: &str) -> GradientColors {
    raw.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .take(GRADIENT_MAX_COLORS)
        .map(str::to_string)
        .collect()
}

struct FieldReader<F> {
    lookup: F,
}

impl<F> FieldReader<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn raw(&self, field: &str) -> Option<String> {
        (self.lookup)(field).filter(|v| !v.trim().is_empty())
    }

    /// Off unless the attribute is literally `true`.
    fn flag(&self, field: &str) -> bool {
        matches!(self.raw(field).as_deref().map(str::trim), Some("true"))
    }

    /// On unless the attribute is literally `false`.
    fn flag_default_on(&self, field: &str) -> bool {
        !matches!(self.raw(field).as_deref().map(str::trim), Some("false"))
    }

    fn number(&self, field: &'static str) -> Result<Option<f64>, ConfigError> {
        let Some(raw) = self.raw(field) else {
            return Ok(None);
        };
        let value: f64 = raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber {
                field,
                value: raw.clone(),
            })?;
        if !value.is_finite() {
            return Err(ConfigError::InvalidNumber { field, value: raw });
        }
        // zero means "cleared" in the editor's serialisation
        Ok((value != 0.0).then_some(value))
    }

    fn positive(&self, field: &'static str, default: f64) -> f64 {
        let checked = self.number(field).and_then(|v| match v {
            Some(v) if v < 0.0 => Err(ConfigError::OutOfRange { field, value: v }),
            other => Ok(other),
        });
        self.resolve(field, checked, default)
    }

    /// A ratio or probability, clamped into [0, 1].
    fn unit(&self, field: &'static str, default: f64) -> f64 {
        let checked = self.number(field).map(|v| {
            v.map(|v| {
                if !(0.0..=1.0).contains(&v) {
                    log::warn!("[config] {}", ConfigError::OutOfRange { field, value: v });
                }
                v.clamp(0.0, 1.0)
            })
        });
        self.resolve(field, checked, default)
    }

    fn resolve(
        &self,
        field: &'static str,
        value: Result<Option<f64>, ConfigError>,
        default: f64,
    ) -> f64 {
        match value {
            Ok(Some(v)) => v,
            Ok(None) => default,
            Err(e) => {
                log::warn!("[config] {e}; `{field}` falls back to {default}");
                default
            }
        }
    }
}
