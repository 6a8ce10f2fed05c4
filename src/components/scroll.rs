use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use super::Subscription;

/// Vertical offset past which the scroll-to-top button appears.
pub const SCROLL_TOP_THRESHOLD: f64 = 500.0;

/// Mirrors the window's vertical scroll offset into component state. The
/// listener is attached on mount, seeded with the current position, and
/// removed again on unmount.
#[hook]
pub fn use_scroll_offset() -> f64 {
    let offset = use_state(|| 0.0);
    {
        let offset = offset.clone();
        use_effect_with_deps(
            move |_| {
                let mut subscription = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let offset = offset.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(y) = win.scroll_y() {
                                    offset.set(y);
                                }
                            }
                        }
                    });
                    let _ = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                    if let Ok(y) = window.scroll_y() {
                        offset.set(y);
                    }
                    Subscription::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Subscription::empty()
                };
                move || subscription.cancel()
            },
            (),
        );
    }
    *offset
}

/// Gentle vertical bob for the hero mockup, keyed off how far the page has
/// scrolled.
pub fn float_offset(scroll_y: f64) -> f64 {
    (scroll_y / 500.0).sin() * 10.0
}

/// Parallax displacement for the background blobs.
pub fn parallax(scroll_y: f64, factor: f64) -> f64 {
    scroll_y * factor
}

/// The navbar shrinks once the reader has scrolled past the hero's top edge.
pub fn navbar_height(scroll_y: f64) -> u32 {
    if scroll_y > 100.0 {
        64
    } else {
        80
    }
}

pub fn scroll_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_offset_is_bounded_and_zero_at_rest() {
        assert_eq!(float_offset(0.0), 0.0);
        for y in [120.0, 500.0, 785.0, 4000.0] {
            assert!(float_offset(y).abs() <= 10.0);
        }
    }

    #[test]
    fn parallax_scales_raw_offsets() {
        assert_eq!(parallax(0.0, 0.05), 0.0);
        assert_eq!(parallax(120.0, 0.05), 6.0);
        assert_eq!(parallax(500.0, -0.03), -15.0);
    }

    #[test]
    fn navbar_shrinks_past_hundred() {
        assert_eq!(navbar_height(0.0), 80);
        assert_eq!(navbar_height(100.0), 80);
        assert_eq!(navbar_height(101.0), 64);
    }

    #[test]
    fn scroll_top_button_needs_five_hundred() {
        assert!(!scroll_top_visible(0.0));
        assert!(!scroll_top_visible(500.0));
        assert!(scroll_top_visible(500.5));
    }
}
