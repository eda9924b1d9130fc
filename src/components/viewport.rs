use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;

/// Tracks whether the referenced element currently intersects the
/// viewport. Reports both edges; consumers that want "only the first
/// time" latch it themselves.
#[hook]
pub fn use_in_viewport(node: &NodeRef) -> bool {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                let callback = Closure::wrap(Box::new(
                    move |entries: Vec<IntersectionObserverEntry>,
                          _observer: IntersectionObserver| {
                        if let Some(entry) = entries.last() {
                            visible.set(entry.is_intersecting());
                        }
                    },
                )
                    as Box<dyn FnMut(Vec<IntersectionObserverEntry>, IntersectionObserver)>);

                let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())
                    .expect("IntersectionObserver is available in all supported browsers");

                if let Some(element) = node.cast::<Element>() {
                    observer.observe(&element);
                }

                move || {
                    observer.disconnect();
                    drop(callback);
                }
            },
            (),
        );
    }

    *visible
}
