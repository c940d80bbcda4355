//! Drawing the particle field.
//!
//! Rendering goes through the small [`Surface`] trait so the frame logic can
//! be exercised without a browser. The canvas implementation lives here too.
//! Each frame is drawn in two passes:
//! 1. Particles as filled circles in their own tone and alpha
//! 2. Links as thin accent-colored lines

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::field::ParticleField;
use super::theme::{Color, StarfieldTheme};

/// A 2D drawing target with the three primitives the starfield needs.
pub trait Surface {
	/// Set the pixel dimensions of the backing surface.
	fn set_size(&mut self, width: f64, height: f64);
	/// Erase the `width` x `height` area from the origin.
	fn clear(&mut self, width: f64, height: f64);
	/// Filled circle centered at (`x`, `y`).
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
	/// Straight segment between two points.
	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color);
}

/// Renders one frame of the field.
pub fn render<S: Surface + ?Sized>(field: &ParticleField, surface: &mut S, theme: &StarfieldTheme) {
	surface.clear(field.width(), field.height());

	for p in &field.particles {
		surface.fill_circle(p.x, p.y, p.radius, theme.tone(p.tone).with_alpha(p.alpha));
	}

	let width = field.params().link_width;
	for link in field.links() {
		surface.stroke_line(link.from, link.to, width, theme.accent.with_alpha(link.alpha));
	}
}

/// Canvas-backed surface.
pub struct CanvasSurface {
	canvas: web_sys::HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Wraps a canvas and its 2D context.
	pub fn new(canvas: web_sys::HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
		Self { canvas, ctx }
	}
}

impl Surface for CanvasSurface {
	fn set_size(&mut self, width: f64, height: f64) {
		self.canvas.set_width(width as u32);
		self.canvas.set_height(height as u32);
	}

	fn clear(&mut self, width: f64, height: f64) {
		self.ctx.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, PI * 2.0);
		self.ctx.fill();
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color) {
		self.ctx.set_stroke_style_str(&color.to_css());
		self.ctx.set_line_width(width);
		self.ctx.begin_path();
		self.ctx.move_to(from.0, from.1);
		self.ctx.line_to(to.0, to.1);
		self.ctx.stroke();
	}
}

#[cfg(test)]
pub(crate) mod tests {
	use super::*;
	use crate::components::starfield::field::FieldParams;
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	/// Records draw calls instead of drawing.
	#[derive(Default)]
	pub(crate) struct RecordingSurface {
		pub size: Option<(f64, f64)>,
		pub clears: usize,
		pub circles: Vec<(f64, f64, f64, Color)>,
		pub lines: Vec<((f64, f64), (f64, f64), f64, Color)>,
	}

	impl RecordingSurface {
		pub fn reset_frame(&mut self) {
			self.circles.clear();
			self.lines.clear();
		}
	}

	impl Surface for RecordingSurface {
		fn set_size(&mut self, width: f64, height: f64) {
			self.size = Some((width, height));
		}

		fn clear(&mut self, _width: f64, _height: f64) {
			self.clears += 1;
		}

		fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
			self.circles.push((x, y, radius, color));
		}

		fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color) {
			self.lines.push((from, to, width, color));
		}
	}

	#[test]
	fn frame_draws_every_particle_and_link() {
		let mut rng = SmallRng::seed_from_u64(9);
		let field = ParticleField::new(FieldParams::default(), 800.0, 600.0, &mut rng);
		let theme = StarfieldTheme::default();
		let mut surface = RecordingSurface::default();

		render(&field, &mut surface, &theme);

		assert_eq!(surface.clears, 1);
		assert_eq!(surface.circles.len(), 48);
		assert_eq!(surface.lines.len(), field.links().len());
		for (p, &(x, y, r, color)) in field.particles.iter().zip(&surface.circles) {
			assert_eq!((x, y, r), (p.x, p.y, p.radius));
			assert_eq!(color, theme.tone(p.tone).with_alpha(p.alpha));
		}
		for &(_, _, width, color) in &surface.lines {
			assert_eq!(width, 0.5);
			assert_eq!((color.r, color.g, color.b), (34, 211, 238));
			assert!(color.a > 0.0 && color.a <= 0.2);
		}
	}
}
