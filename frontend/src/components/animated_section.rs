use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::state::RevealLatch;

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

/// Keeps the observer and its callback alive together; dropping it stops observing.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_once(element: &Element, on_reveal: impl Fn() + 'static) -> Option<RevealObserver> {
    let mut latch = RevealLatch::default();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let visible = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if latch.observe(visible) {
                observer.disconnect();
                on_reveal();
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.15));
    options.set_root_margin("0px 0px -10% 0px");

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    observer.observe(element);
    Some(RevealObserver {
        observer,
        _callback: callback,
    })
}

/// Fades and slides its children into place the first time they scroll into view.
#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let node = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node = node.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let observer = node.cast::<Element>().and_then(|element| {
                    let revealed = revealed.clone();
                    observe_once(&element, move || revealed.set(true))
                });
                if observer.is_none() {
                    // No IntersectionObserver support, show the content right away
                    debug!("reveal observer unavailable, revealing immediately");
                    revealed.set(true);
                }
                move || drop(observer)
            },
            (),
        );
    }

    html! {
        <div
            ref={node}
            class={classes!("reveal", (*revealed).then_some("revealed"), props.class.clone())}
        >
            { for props.children.iter() }
        </div>
    }
}
