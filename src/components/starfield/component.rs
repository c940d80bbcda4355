//! Leptos component wrapping the starfield canvas.
//!
//! On mount the component grabs the 2D context, builds a [`BrowserHost`] whose
//! callbacks dispatch into the shared [`Runtime`], and starts the animator.
//! On cleanup the animator is torn down and the runtime dropped, which also
//! drops the JS closures.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::animator::Animator;
use super::browser::{BrowserHost, HostCallbacks};
use super::field::FieldParams;
use super::render::CanvasSurface;
use super::theme::StarfieldTheme;

/// Animator plus the host and surface it drives.
struct Runtime {
	animator: Animator<SmallRng>,
	host: BrowserHost,
	surface: CanvasSurface,
}

impl Runtime {
	fn mount(&mut self) {
		self.animator.mount(&mut self.host, &mut self.surface);
	}

	fn frame(&mut self) {
		self.animator.frame(&mut self.host, &mut self.surface);
	}

	fn resize(&mut self) {
		self.animator.resize(&mut self.host);
	}

	fn resize_settled(&mut self) {
		self.animator.resize_settled(&mut self.host, &mut self.surface);
	}

	fn teardown(&mut self) {
		self.animator.teardown(&mut self.host);
	}
}

type SharedRuntime = Rc<RefCell<Option<Runtime>>>;

/// A JS callback that forwards to `f` while the runtime is alive.
fn dispatch(runtime: &SharedRuntime, f: fn(&mut Runtime)) -> Closure<dyn FnMut()> {
	let runtime = runtime.clone();
	Closure::new(move || {
		if let Some(ref mut rt) = *runtime.borrow_mut() {
			f(rt);
		}
	})
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok().flatten()?.dyn_into().ok()
}

fn seeded_rng() -> SmallRng {
	SmallRng::seed_from_u64((js_sys::Math::random() * u64::MAX as f64) as u64)
}

/// Full-viewport decorative particle field drawn behind the page.
///
/// The canvas ignores pointer events and follows the window size, rebuilding
/// its particles shortly after the window stops resizing.
#[component]
pub fn StarfieldCanvas(
	/// Defaults to [`FieldParams::default`].
	#[prop(optional)]
	params: Option<FieldParams>,
	/// Defaults to [`StarfieldTheme::neural`].
	#[prop(optional)]
	theme: Option<StarfieldTheme>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let runtime: SharedRuntime = Rc::new(RefCell::new(None));
	let runtime_init = runtime.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if runtime_init.borrow().is_some() {
			return;
		}
		let Some(window) = web_sys::window() else {
			warn!("portfolio: no window, starfield disabled");
			return;
		};
		let Some(ctx) = context_2d(&canvas) else {
			warn!("portfolio: canvas 2d context unavailable, starfield disabled");
			return;
		};

		let callbacks = HostCallbacks {
			on_frame: dispatch(&runtime_init, Runtime::frame),
			on_timer: dispatch(&runtime_init, Runtime::resize_settled),
			on_resize: dispatch(&runtime_init, Runtime::resize),
		};
		let mut rt = Runtime {
			animator: Animator::new(
				params.clone().unwrap_or_default(),
				theme.clone().unwrap_or_default(),
				seeded_rng(),
			),
			host: BrowserHost::new(window, callbacks),
			surface: CanvasSurface::new(canvas, ctx),
		};
		rt.mount();
		*runtime_init.borrow_mut() = Some(rt);
	});

	let runtime_cleanup = SendWrapper::new(runtime);
	on_cleanup(move || {
		let taken = runtime_cleanup.borrow_mut().take();
		if let Some(mut rt) = taken {
			rt.teardown();
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="starfield"
			aria-hidden="true"
		/>
	}
}
