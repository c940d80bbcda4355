//! Reveal-on-scroll wrapper.
//!
//! Content starts hidden (faded and shifted down) and transitions in the first
//! time it intersects the viewport. After that it stays revealed and the
//! observer is disconnected.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Fraction of the element that must be visible to count as intersecting.
const THRESHOLD: f64 = 0.1;
/// Shrinks the viewport's bottom edge so elements reveal slightly after entering.
const ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// One-shot visibility flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
	revealed: bool,
}

impl RevealLatch {
	/// Feed one observation. Returns `true` only on the transition to revealed.
	pub fn observe(&mut self, intersecting: bool) -> bool {
		if self.revealed || !intersecting {
			return false;
		}
		self.revealed = true;
		true
	}

	/// Sticks at `true` once set.
	pub fn is_revealed(&self) -> bool {
		self.revealed
	}
}

/// CSS classes for a reveal wrapper in the given state.
pub fn reveal_class(revealed: bool, extra: &str) -> String {
	let state = if revealed { "is-visible" } else { "is-hidden" };
	if extra.is_empty() {
		format!("reveal {state}")
	} else {
		format!("reveal {state} {extra}")
	}
}

struct ActiveObserver {
	observer: IntersectionObserver,
	_callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

/// Fades `children` in the first time they scroll into view.
///
/// `delay` staggers the transition in milliseconds.
#[component]
pub fn Reveal(
	/// Content to reveal.
	children: Children,
	/// Extra classes for the wrapper `div`.
	#[prop(optional, into)]
	class: String,
	/// Transition delay in milliseconds.
	#[prop(default = 0)]
	delay: u32,
) -> impl IntoView {
	let node_ref = NodeRef::<leptos::html::Div>::new();
	let visible = RwSignal::new(false);
	let observer: Rc<RefCell<Option<ActiveObserver>>> = Rc::new(RefCell::new(None));
	let observer_init = observer.clone();

	Effect::new(move |_| {
		let Some(el) = node_ref.get() else {
			return;
		};
		if observer_init.borrow().is_some() {
			return;
		}

		let mut latch = RevealLatch::default();
		let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
			move |entries: js_sys::Array, obs: IntersectionObserver| {
				let intersecting = entries
					.iter()
					.filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
					.any(|e| e.is_intersecting());
				if latch.observe(intersecting) {
					visible.set(true);
					obs.disconnect();
				}
			},
		);

		let options = IntersectionObserverInit::new();
		options.set_threshold(&JsValue::from_f64(THRESHOLD));
		options.set_root_margin(ROOT_MARGIN);

		match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
			Ok(obs) => {
				obs.observe(&el);
				*observer_init.borrow_mut() = Some(ActiveObserver {
					observer: obs,
					_callback: callback,
				});
			}
			Err(e) => {
				warn!("portfolio: IntersectionObserver unavailable, revealing immediately: {:?}", e);
				visible.set(true);
			}
		}
	});

	let observer_cleanup = SendWrapper::new(observer);
	on_cleanup(move || {
		if let Some(o) = observer_cleanup.borrow_mut().take() {
			o.observer.disconnect();
		}
	});

	view! {
		<div
			node_ref=node_ref
			class=move || reveal_class(visible.get(), &class)
			style=format!("transition-delay: {delay}ms")
		>
			{children()}
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn latch_fires_once_on_first_intersection() {
		let mut latch = RevealLatch::default();
		assert!(!latch.observe(false));
		assert!(!latch.is_revealed());
		assert!(latch.observe(true));
		assert!(latch.is_revealed());
		assert!(!latch.observe(true));
		assert!(!latch.observe(false));
		assert!(latch.is_revealed());
	}

	#[test]
	fn classes_reflect_state() {
		assert_eq!(reveal_class(false, ""), "reveal is-hidden");
		assert_eq!(reveal_class(true, "card"), "reveal is-visible card");
	}
}
