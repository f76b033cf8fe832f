// Markup contract: selectors, classes, attributes and CSS custom properties
// shared with the block's stylesheet. Kept free of web-sys so host tests can
// include it directly.

// Containers and the control surface
pub const CONTAINER_SELECTOR: &str = ".autoscroll-block";
pub const CONTROL_SELECTOR: &str = ".autoscroll-block-control";
pub const CONTROL_TREE_SELECTOR: &str = ".autoscroll-block-control, .autoscroll-block-control *";
pub const PLAY_ICON_SELECTOR: &str = ".autoscroll-play-icon";
pub const PAUSE_ICON_SELECTOR: &str = ".autoscroll-pause-icon";

pub const DATA_PREFIX: &str = "data-";
pub const INITIALIZED_ATTR: &str = "data-autoscroll-initialized";
pub const ARIA_PRESSED: &str = "aria-pressed";

// Page events
pub const REINIT_EVENT: &str = "autoscroll-reinit";
pub const READY_STATE_LOADING: &str = "loading"; // `document.readyState` before DOMContentLoaded

// State classes
pub const ACTIVE_CLASS: &str = "autoscroll-active";
pub const IS_PLAYING_CLASS: &str = "is-playing";
pub const IS_SCROLLING_CLASS: &str = "is-scrolling";
pub const IS_VISIBLE_CLASS: &str = "is-visible";

// Reveal animations
pub const CONTENT_SELECTORS: &[&str] = &[
    "article h1, article h2, article h3, article h4, article h5, article h6",
    "article p",
    "article img",
    "article .wp-block-group",
    "article .wp-block-columns",
    "article .wp-block-image",
    "article .wp-block-heading",
    "article .wp-block-paragraph",
    "article .wp-block-list",
    "article .wp-block-quote",
    ".wp-block-group > *",
    ".wp-block-columns > *",
    ".entry-content > *",
    ".post-content > *",
    ".content > *",
];
pub const MANUAL_ANIMATION_SELECTOR: &str = ".autoscroll-animate-fade-up, \
.autoscroll-animate-scale, \
.autoscroll-animate-slide-left, \
.autoscroll-animate-slide-right, \
.autoscroll-animate-blur, \
.autoscroll-animate-rotate, \
.autoscroll-animate-stagger";
pub const ANIMATION_DURATION_VAR: &str = "--autoscroll-animation-duration";

// Typing
pub const HEADING_SELECTOR: &str = "h1, h2, h3, h4, h5, h6";
pub const ORIGINAL_TEXT_ATTR: &str = "data-original-text";
pub const TYPING_STARTED_ATTR: &str = "data-typing-started";
pub const TYPING_FADE_IN: &str = "opacity 0.3s ease-in";

// Parallax
pub const PARALLAX_BODY_CLASS: &str = "autoscroll-parallax";
pub const PARALLAX_LAYER_CLASS: &str = "autoscroll-parallax-layer";
pub const PARALLAX_SELECTOR: &str =
    "img, .wp-block-image, .wp-block-cover, [style*=\"background-image\"]";

// Gradient shift
pub const GRADIENT_BODY_CLASS: &str = "autoscroll-gradient-shift";
pub const GRADIENT_COLOR_1_VAR: &str = "--gradient-color-1";
pub const GRADIENT_COLOR_2_VAR: &str = "--gradient-color-2";

// Blur / scale
pub const BLUR_BODY_CLASS: &str = "autoscroll-blur-transitions";
pub const BLUR_ELEMENT_CLASS: &str = "autoscroll-blur-element";
pub const BLUR_SELECTOR: &str = "p, h1, h2, h3, h4, h5, h6, img, .wp-block-group, .wp-block-columns";
pub const SCALE_BODY_CLASS: &str = "autoscroll-scale-effects";
pub const SCALE_ELEMENT_CLASS: &str = "autoscroll-scale-element";
pub const SCALE_SELECTOR: &str =
    "p, h1, h2, h3, h4, h5, h6, img, .wp-block-group, .wp-block-columns, .wp-block-image";

// Glitch
pub const GLITCH_BODY_CLASS: &str = "autoscroll-glitch";
pub const GLITCH_ACTIVE_CLASS: &str = "glitch-active";

// Singletons and ephemeral elements
pub const PROGRESS_BAR_CLASS: &str = "autoscroll-progress-bar";
pub const PARTICLE_LAYER_CLASS: &str = "autoscroll-particles-container";
pub const PARTICLE_CLASS: &str = "autoscroll-particle";
pub const PARTICLE_TRAIL_CLASS: &str = "autoscroll-particle-trail";
pub const PARTICLE_X_OFFSET_VAR: &str = "--particle-x-offset";
pub const RIPPLE_CLASS: &str = "autoscroll-ripple";
pub const LIGHT_RAYS_CLASS: &str = "autoscroll-light-rays";
pub const LIGHT_RAY_CLASS: &str = "autoscroll-light-ray";
pub const RAY_DELAY_VAR: &str = "--ray-delay";
pub const RAY_DURATION_VAR: &str = "--ray-duration";

// Animated background
pub const ANIMATED_BG_CLASS: &str = "autoscroll-animated-bg";
