use crate::constants::*;
use autoscroll_core::PlayState;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The play/pause button of one container and its two icons.
pub struct ControlSurface {
    button: web::Element,
    play_icon: Option<web::HtmlElement>,
    pause_icon: Option<web::HtmlElement>,
}

impl ControlSurface {
    /// `None` when the container has no control element; such a container
    /// is skipped entirely.
    pub fn find(container: &web::Element) -> Option<Self> {
        let button = container.query_selector(CONTROL_SELECTOR).ok().flatten()?;
        let icon = |selector: &str| {
            button
                .query_selector(selector)
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        };
        let play_icon = icon(PLAY_ICON_SELECTOR);
        let pause_icon = icon(PAUSE_ICON_SELECTOR);
        Some(Self {
            button,
            play_icon,
            pause_icon,
        })
    }

    pub fn button(&self) -> &web::Element {
        &self.button
    }

    pub fn render(&self, state: PlayState) {
        let playing = state.is_playing();
        _ = self
            .button
            .set_attribute(ARIA_PRESSED, if playing { "true" } else { "false" });
        let classes = self.button.class_list();
        if playing {
            _ = classes.add_1(IS_PLAYING_CLASS);
        } else {
            _ = classes.remove_2(IS_PLAYING_CLASS, IS_SCROLLING_CLASS);
        }
        show(self.play_icon.as_ref(), !playing);
        show(self.pause_icon.as_ref(), playing);
    }
}

#[inline]
fn show(icon: Option<&web::HtmlElement>, visible: bool) {
    if let Some(icon) = icon {
        _ = icon
            .style()
            .set_property("display", if visible { "block" } else { "none" });
    }
}
