/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Reveal-on-scroll wrapper.
//!
//! Children start hidden and transition in the first time the wrapper
//! intersects the viewport. The observer disconnects after the first hit,
//! so elements never animate out again.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Fraction of the element that must be visible before it reveals.
const REVEAL_THRESHOLD: f64 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealVariant {
    /// Rise 40px while fading in.
    #[default]
    FadeUp,
    Fade,
    /// Enter from the left (50px).
    FromLeft,
    /// Enter from the right (50px).
    FromRight,
    /// Short slide from the left, used by menu rows.
    Nudge,
}

impl RevealVariant {
    pub fn class_name(self) -> &'static str {
        match self {
            RevealVariant::FadeUp => "reveal-fade-up",
            RevealVariant::Fade => "reveal-fade",
            RevealVariant::FromLeft => "reveal-from-left",
            RevealVariant::FromRight => "reveal-from-right",
            RevealVariant::Nudge => "reveal-nudge",
        }
    }
}

struct OnceObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for OnceObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_once(element: &Element, on_visible: impl Fn() + 'static) -> Option<OnceObserver> {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            let hit = entries.iter().any(|entry| {
                entry
                    .unchecked_into::<IntersectionObserverEntry>()
                    .is_intersecting()
            });
            if hit {
                on_visible();
                observer.disconnect();
            }
        },
    );
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(e) => {
                log::warn!("IntersectionObserver unavailable: {e:?}");
                return None;
            }
        };
    observer.observe(element);
    Some(OnceObserver {
        observer,
        _callback: callback,
    })
}

/// `true` once the referenced element has been on screen.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let visible = use_state_eq(|| false);
    {
        let visible = visible.clone();
        use_effect_with(node, move |node| {
            let observer = node.cast::<Element>().and_then(|element| {
                let on_visible = {
                    let visible = visible.clone();
                    move || visible.set(true)
                };
                observe_once(&element, on_visible)
            });
            if observer.is_none() {
                // Nothing to wait for, show the content right away.
                visible.set(true);
            }
            move || drop(observer)
        });
    }
    *visible
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub variant: RevealVariant,
    /// Transition delay, used to stagger siblings.
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub test_id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone());

    let class = classes!(
        "reveal",
        props.variant.class_name(),
        visible.then_some("is-visible"),
        props.class.clone()
    );
    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));

    html! {
        <div ref={node} {class} {style} data-testid={props.test_id.clone()}>
            { props.children.clone() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_map_to_distinct_classes() {
        let variants = [
            RevealVariant::FadeUp,
            RevealVariant::Fade,
            RevealVariant::FromLeft,
            RevealVariant::FromRight,
            RevealVariant::Nudge,
        ];
        let mut names: Vec<_> = variants.iter().map(|v| v.class_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), variants.len());
        assert_eq!(RevealVariant::default(), RevealVariant::FadeUp);
    }
}
