use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::reveal::{RevealSequencer, RevealSignal};

// Observer fires once a tenth of the block is inside the viewport, so the
// first intersecting callback always carries a fraction above zero.
const OBSERVER_THRESHOLD: f64 = 0.1;

/// Page-scoped handle to the reveal sequencer, shared with every
/// [`RevealBlock`] through a context. The page owns the sequencer, so
/// blocks keep their played record across remounts while the page lives.
#[derive(Clone)]
pub struct RevealScope {
    sequencer: Rc<RefCell<RevealSequencer>>,
}

impl RevealScope {
    pub fn new() -> Self {
        Self {
            sequencer: Rc::new(RefCell::new(RevealSequencer::new())),
        }
    }

    fn register(&self, id: &str) -> bool {
        self.sequencer.borrow_mut().register_block(id).has_played()
    }

    fn observe_visibility(&self, id: &str, visible_fraction: f64) -> RevealSignal {
        self.sequencer
            .borrow_mut()
            .on_visibility_changed(id, visible_fraction)
    }

    fn has_played(&self, id: &str) -> bool {
        self.sequencer.borrow().has_played(id)
    }
}

impl PartialEq for RevealScope {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.sequencer, &other.sequencer)
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealBlockProps {
    /// Stable identity of the block inside its page's scope.
    pub id: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Extra delay before the entrance transition is applied, for staggered
    /// groups that come into view together.
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub children: Children,
}

/// Wrapper that plays a one-shot entrance transition the first time the
/// block scrolls into view. Rendering is plain CSS: the wrapper starts as
/// `.reveal` and gains `.played` when the sequencer signals the transition.
#[function_component(RevealBlock)]
pub fn reveal_block(props: &RevealBlockProps) -> Html {
    let scope = use_context::<RevealScope>().expect("RevealBlock rendered outside a RevealScope");
    let node = use_node_ref();
    let played = use_state(|| scope.has_played(&props.id));

    {
        let scope = scope.clone();
        let played = played.clone();
        let id = props.id.clone();
        let delay_ms = props.delay_ms;
        use_effect_with_deps(
            move |node: &NodeRef| {
                let already_played = scope.register(&id);
                if already_played {
                    played.set(true);
                }

                let mut observing = None;
                if !already_played {
                    if let Some(element) = node.cast::<Element>() {
                        let callback = Closure::wrap(Box::new(
                            move |entries: js_sys::Array, observer: IntersectionObserver| {
                                for entry in entries.iter() {
                                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                                        let fraction = if entry.is_intersecting() {
                                            entry.intersection_ratio()
                                        } else {
                                            0.0
                                        };
                                        if scope.observe_visibility(&id, fraction) == RevealSignal::Play {
                                            observer.disconnect();
                                            if delay_ms > 0 {
                                                let played = played.clone();
                                                Timeout::new(delay_ms, move || {
                                                    played.set(true);
                                                })
                                                .forget();
                                            } else {
                                                played.set(true);
                                            }
                                        }
                                    }
                                }
                            },
                        )
                            as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

                        let options = IntersectionObserverInit::new();
                        options.set_threshold(&JsValue::from_f64(OBSERVER_THRESHOLD));
                        if let Ok(observer) = IntersectionObserver::new_with_options(
                            callback.as_ref().unchecked_ref(),
                            &options,
                        ) {
                            observer.observe(&element);
                            observing = Some((observer, callback));
                        }
                    }
                }

                move || {
                    if let Some((observer, _callback)) = observing {
                        observer.disconnect();
                    }
                }
            },
            node.clone(),
        );
    }

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.class.clone(), (*played).then_some("played"))}
        >
            { for props.children.iter() }
        </div>
    }
}
