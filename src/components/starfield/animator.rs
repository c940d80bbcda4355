//! Animation lifecycle for the starfield.
//!
//! [`Animator`] owns the particle field and reacts to four events: mount,
//! display-refresh frames, viewport resizes, and teardown. Everything it needs
//! from the outside world goes through [`Host`], so a synthetic host can drive
//! it in tests with fake viewports, frames and timers.

use log::{debug, info};
use rand::Rng;

use super::field::{FieldParams, ParticleField};
use super::render::{self, Surface};
use super::theme::StarfieldTheme;

/// Viewport dimensions in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
	/// Width in CSS px.
	pub width: f64,
	/// Height in CSS px.
	pub height: f64,
}

/// Handle for a scheduled display-refresh callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

/// Handle for a pending timeout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerHandle(pub i32);

/// The environment the animator runs in.
///
/// Callbacks flow the other way: whoever implements `Host` is responsible for
/// calling [`Animator::frame`] when a requested frame fires,
/// [`Animator::resize`] on every resize event while subscribed, and
/// [`Animator::resize_settled`] when a started timer elapses.
pub trait Host {
	/// Current window size.
	fn viewport(&self) -> Viewport;
	/// Schedule one frame callback. `None` if the scheduler refused.
	fn request_frame(&mut self) -> Option<FrameHandle>;
	/// Drop a scheduled frame before it fires.
	fn cancel_frame(&mut self, handle: FrameHandle);
	/// Start a one-shot timer. `None` if it could not be started.
	fn start_timer(&mut self, delay_ms: u32) -> Option<TimerHandle>;
	/// Drop a pending timer.
	fn cancel_timer(&mut self, handle: TimerHandle);
	/// Subscribe to window resize events.
	fn listen_resize(&mut self);
	/// Undo [`Host::listen_resize`].
	fn unlisten_resize(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Lifecycle {
	Idle,
	Running,
	Stopped,
}

/// Drives a [`ParticleField`] across frames and resizes.
pub struct Animator<R: Rng> {
	field: ParticleField,
	params: FieldParams,
	theme: StarfieldTheme,
	rng: R,
	lifecycle: Lifecycle,
	pending_frame: Option<FrameHandle>,
	pending_resize: Option<TimerHandle>,
	generation: u64,
}

impl<R: Rng> Animator<R> {
	/// Idle animator with an empty field. Nothing runs until [`Animator::mount`].
	pub fn new(params: FieldParams, theme: StarfieldTheme, mut rng: R) -> Self {
		let field = ParticleField::new(params.clone(), 0.0, 0.0, &mut rng);
		Self {
			field,
			params,
			theme,
			rng,
			lifecycle: Lifecycle::Idle,
			pending_frame: None,
			pending_resize: None,
			generation: 0,
		}
	}

	/// The current field.
	pub fn field(&self) -> &ParticleField {
		&self.field
	}

	/// Number of times the field has been built; bumps on every reinit.
	pub fn generation(&self) -> u64 {
		self.generation
	}

	/// Mounted and not yet torn down.
	pub fn is_running(&self) -> bool {
		self.lifecycle == Lifecycle::Running
	}

	/// Size the surface, build the field, subscribe to resizes, and draw the
	/// first frame (which schedules the next). Only the first call does anything.
	pub fn mount<H: Host + ?Sized, S: Surface + ?Sized>(&mut self, host: &mut H, surface: &mut S) {
		if self.lifecycle != Lifecycle::Idle {
			return;
		}
		self.lifecycle = Lifecycle::Running;
		self.reinit(host.viewport(), surface);
		host.listen_resize();
		info!(
			"portfolio: starfield mounted ({}x{}, {} particles)",
			self.field.width(),
			self.field.height(),
			self.field.len()
		);
		self.frame(host, surface);
	}

	/// One display-refresh tick: advance, draw, schedule the next tick.
	pub fn frame<H: Host + ?Sized, S: Surface + ?Sized>(&mut self, host: &mut H, surface: &mut S) {
		self.pending_frame = None;
		if !self.is_running() {
			return;
		}
		self.field.step();
		render::render(&self.field, surface, &self.theme);
		self.pending_frame = host.request_frame();
	}

	/// A raw resize event. Restarts the debounce timer; the field is only
	/// rebuilt once resizes stop for `resize_debounce_ms`.
	pub fn resize<H: Host + ?Sized>(&mut self, host: &mut H) {
		if !self.is_running() {
			return;
		}
		if let Some(timer) = self.pending_resize.take() {
			host.cancel_timer(timer);
		}
		self.pending_resize = host.start_timer(self.params.resize_debounce_ms);
	}

	/// The debounce timer elapsed: rebuild the field at the current viewport.
	pub fn resize_settled<H: Host + ?Sized, S: Surface + ?Sized>(
		&mut self,
		host: &mut H,
		surface: &mut S,
	) {
		self.pending_resize = None;
		if !self.is_running() {
			return;
		}
		self.reinit(host.viewport(), surface);
		debug!(
			"portfolio: starfield rebuilt at {}x{} with {} particles",
			self.field.width(),
			self.field.height(),
			self.field.len()
		);
	}

	/// Stop listening, cancel whatever is scheduled, and refuse further work.
	pub fn teardown<H: Host + ?Sized>(&mut self, host: &mut H) {
		if self.lifecycle == Lifecycle::Running {
			host.unlisten_resize();
		}
		if let Some(frame) = self.pending_frame.take() {
			host.cancel_frame(frame);
		}
		if let Some(timer) = self.pending_resize.take() {
			host.cancel_timer(timer);
		}
		self.lifecycle = Lifecycle::Stopped;
		info!("portfolio: starfield torn down");
	}

	fn reinit<S: Surface + ?Sized>(&mut self, viewport: Viewport, surface: &mut S) {
		surface.set_size(viewport.width, viewport.height);
		self.field = ParticleField::new(
			self.params.clone(),
			viewport.width,
			viewport.height,
			&mut self.rng,
		);
		self.generation += 1;
	}
}
