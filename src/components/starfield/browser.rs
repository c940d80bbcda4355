//! `web-sys` implementation of the animator host.
//!
//! The three callbacks (frame, debounce timer, resize) are created by the
//! component and handed over here; this type only knows how to register and
//! cancel them against the window.

use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use super::animator::{FrameHandle, Host, TimerHandle, Viewport};

/// JS callbacks the host registers with the browser.
pub struct HostCallbacks {
	/// Passed to `requestAnimationFrame`.
	pub on_frame: Closure<dyn FnMut()>,
	/// Passed to `setTimeout` for the resize debounce.
	pub on_timer: Closure<dyn FnMut()>,
	/// Window `resize` listener.
	pub on_resize: Closure<dyn FnMut()>,
}

/// Host backed by the global `window`.
pub struct BrowserHost {
	window: Window,
	callbacks: HostCallbacks,
}

impl BrowserHost {
	/// Takes ownership of the callbacks; they live as long as the host.
	pub fn new(window: Window, callbacks: HostCallbacks) -> Self {
		Self { window, callbacks }
	}
}

/// Current `innerWidth`/`innerHeight`, or zero when unavailable.
pub fn window_viewport(window: &Window) -> Viewport {
	let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	Viewport {
		width: read(window.inner_width()),
		height: read(window.inner_height()),
	}
}

impl Host for BrowserHost {
	fn viewport(&self) -> Viewport {
		window_viewport(&self.window)
	}

	fn request_frame(&mut self) -> Option<FrameHandle> {
		match self
			.window
			.request_animation_frame(self.callbacks.on_frame.as_ref().unchecked_ref())
		{
			Ok(id) => Some(FrameHandle(id)),
			Err(e) => {
				warn!("portfolio: requestAnimationFrame failed: {:?}", e);
				None
			}
		}
	}

	fn cancel_frame(&mut self, handle: FrameHandle) {
		if let Err(e) = self.window.cancel_animation_frame(handle.0) {
			warn!("portfolio: cancelAnimationFrame failed: {:?}", e);
		}
	}

	fn start_timer(&mut self, delay_ms: u32) -> Option<TimerHandle> {
		match self.window.set_timeout_with_callback_and_timeout_and_arguments_0(
			self.callbacks.on_timer.as_ref().unchecked_ref(),
			delay_ms as i32,
		) {
			Ok(id) => Some(TimerHandle(id)),
			Err(e) => {
				warn!("portfolio: setTimeout failed: {:?}", e);
				None
			}
		}
	}

	fn cancel_timer(&mut self, handle: TimerHandle) {
		self.window.clear_timeout_with_handle(handle.0);
	}

	fn listen_resize(&mut self) {
		if let Err(e) = self.window.add_event_listener_with_callback(
			"resize",
			self.callbacks.on_resize.as_ref().unchecked_ref(),
		) {
			warn!("portfolio: could not subscribe to resize: {:?}", e);
		}
	}

	fn unlisten_resize(&mut self) {
		if let Err(e) = self.window.remove_event_listener_with_callback(
			"resize",
			self.callbacks.on_resize.as_ref().unchecked_ref(),
		) {
			warn!("portfolio: could not unsubscribe from resize: {:?}", e);
		}
	}
}
