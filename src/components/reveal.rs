use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use super::Subscription;

/// How long a reveal transition runs once the wrapped content comes into view.
pub const REVEAL_DURATION_MS: u32 = 1000;

/// Fraction of an element that has to be inside the viewport before a
/// `Reveal` wrapper counts it as seen.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// The closed set of entrance transitions. Sections pick one per wrapper;
/// there is no string lookup and nothing to misspell.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Animation {
    #[default]
    Fade,
    SlideFromLeft,
    SlideFromRight,
    ScaleUp,
    BounceUp,
}

/// Start or end state of a reveal transition.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct StyleDescriptor {
    pub opacity: f32,
    pub transform: &'static str,
}

impl Animation {
    /// The off-screen state an element sits in before it is first seen.
    pub fn hidden(self) -> StyleDescriptor {
        let transform = match self {
            Animation::Fade => "translateY(40px)",
            Animation::SlideFromLeft => "translateX(-20px)",
            Animation::SlideFromRight => "translateX(20px)",
            Animation::ScaleUp => "scale(0.9)",
            Animation::BounceUp => "translateY(64px)",
        };
        StyleDescriptor {
            opacity: 0.0,
            transform,
        }
    }

    /// The settled state, shared by every preset.
    pub fn shown(self) -> StyleDescriptor {
        StyleDescriptor {
            opacity: 1.0,
            transform: "none",
        }
    }
}

impl StyleDescriptor {
    /// Renders the descriptor as an inline style, with the transition delay
    /// the call site configured.
    pub fn css(self, delay_ms: u32) -> String {
        format!(
            "opacity: {}; transform: {}; transition: opacity {d}ms ease-out, transform {d}ms ease-out; transition-delay: {}ms;",
            self.opacity,
            self.transform,
            delay_ms,
            d = REVEAL_DURATION_MS,
        )
    }
}

/// Visibility signal for one tracked element. In `trigger_once` mode the
/// signal is a one-shot latch: once the threshold has been crossed it stays
/// set no matter what later intersection reports say.
#[derive(Debug)]
pub struct VisibilityLatch {
    threshold: f64,
    trigger_once: bool,
    visible: bool,
}

impl VisibilityLatch {
    pub fn new(threshold: f64, trigger_once: bool) -> Self {
        Self {
            threshold,
            trigger_once,
            visible: false,
        }
    }

    /// Feeds one intersection report into the latch.
    pub fn record(&mut self, ratio: f64) {
        if self.trigger_once && self.visible {
            return;
        }
        self.visible = ratio >= self.threshold;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Tracks whether the element behind `node` has crossed the visibility
/// threshold. The observer is registered once the node resolves and torn
/// down again on unmount or when the node/config changes; an unresolved
/// node (or a browser without IntersectionObserver) just leaves the signal
/// at `false`.
#[hook]
pub fn use_visibility(node: NodeRef, threshold: f64, trigger_once: bool) -> bool {
    let visible = use_state(|| false);
    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |deps: &(NodeRef, f64, bool)| {
                let (node, threshold, trigger_once) = deps;
                let mut subscription = match node.cast::<Element>() {
                    Some(target) => observe(target, *threshold, *trigger_once, visible),
                    None => Subscription::empty(),
                };
                move || subscription.cancel()
            },
            (node, threshold, trigger_once),
        );
    }
    *visible
}

fn observe(
    target: Element,
    threshold: f64,
    trigger_once: bool,
    visible: UseStateHandle<bool>,
) -> Subscription {
    let latch = Rc::new(RefCell::new(VisibilityLatch::new(threshold, trigger_once)));
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            if let Ok(entry) = entries.get(0).dyn_into::<IntersectionObserverEntry>() {
                let mut latch = latch.borrow_mut();
                latch.record(entry.intersection_ratio());
                visible.set(latch.is_visible());
                if trigger_once && latch.is_visible() {
                    observer.unobserve(&entry.target());
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from(threshold));
    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(&target);
            // The closure has to outlive the registration, so it rides along
            // in the release action instead of being forgotten.
            Subscription::new(move || {
                observer.disconnect();
                drop(callback);
            })
        }
        Err(_) => {
            log::warn!("IntersectionObserver unavailable, reveal signal stays unset");
            Subscription::empty()
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub animation: Animation,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wraps content in an entrance transition that plays the first time the
/// content scrolls into view and never reverses afterwards.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let seen = use_visibility(node.clone(), REVEAL_THRESHOLD, true);
    let descriptor = if seen {
        props.animation.shown()
    } else {
        props.animation.hidden()
    };
    html! {
        <div ref={node} class={props.class.clone()} style={descriptor.css(props.delay_ms)}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_sets_once_and_holds() {
        let mut latch = VisibilityLatch::new(0.1, true);
        assert!(!latch.is_visible());
        latch.record(0.5);
        assert!(latch.is_visible());
        latch.record(0.0);
        assert!(latch.is_visible(), "one-shot latch must not revert");
    }

    #[test]
    fn latch_ignores_reports_below_threshold() {
        let mut latch = VisibilityLatch::new(0.5, true);
        latch.record(0.49);
        assert!(!latch.is_visible());
        latch.record(0.5);
        assert!(latch.is_visible(), "reaching the threshold exactly counts");
    }

    #[test]
    fn non_latching_tracker_follows_current_visibility() {
        let mut latch = VisibilityLatch::new(0.25, false);
        latch.record(0.3);
        assert!(latch.is_visible());
        latch.record(0.1);
        assert!(!latch.is_visible());
        latch.record(0.9);
        assert!(latch.is_visible());
    }

    #[test]
    fn hidden_descriptors_match_their_presets() {
        let left = Animation::SlideFromLeft.hidden();
        assert_eq!(left.opacity, 0.0);
        assert_eq!(left.transform, "translateX(-20px)");
        assert_eq!(Animation::SlideFromRight.hidden().transform, "translateX(20px)");
        assert_eq!(Animation::ScaleUp.hidden().transform, "scale(0.9)");
        assert_eq!(Animation::BounceUp.hidden().transform, "translateY(64px)");
        assert_eq!(Animation::Fade.hidden().transform, "translateY(40px)");
    }

    #[test]
    fn shown_descriptor_is_settled() {
        let shown = Animation::SlideFromLeft.shown();
        assert_eq!(shown.opacity, 1.0);
        assert_eq!(shown.transform, "none");
    }

    #[test]
    fn css_carries_duration_and_delay() {
        let style = Animation::SlideFromLeft.hidden().css(300);
        assert!(style.contains("opacity: 0"));
        assert!(style.contains("transform: translateX(-20px)"));
        assert!(style.contains("opacity 1000ms ease-out"));
        assert!(style.contains("transition-delay: 300ms"));
    }

    #[test]
    fn default_preset_is_fade() {
        assert_eq!(Animation::default(), Animation::Fade);
    }
}
