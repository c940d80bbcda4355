//! Particle field simulation: creation, motion, and proximity links.
//!
//! The field is a flat list of particles that drift at constant speed and
//! bounce off the viewport edges. Every frame, pairs closer than the link
//! distance are joined by a faint line whose alpha fades with distance.

use rand::Rng;

/// Which of the two theme colors a particle is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
	/// The theme's primary color.
	Primary,
	/// The theme's accent color.
	Accent,
}

/// A single drifting point.
#[derive(Clone, Debug)]
pub struct Particle {
	/// Horizontal position in px.
	pub x: f64,
	/// Vertical position in px.
	pub y: f64,
	/// Horizontal velocity in px per frame.
	pub vx: f64,
	/// Vertical velocity in px per frame.
	pub vy: f64,
	/// Drawn radius in px.
	pub radius: f64,
	/// Fill opacity, fixed for the particle's lifetime.
	pub alpha: f64,
	/// Color selector.
	pub tone: Tone,
}

/// Tunable constants for particle density, motion, and linking.
#[derive(Clone, Debug)]
pub struct FieldParams {
	/// Viewports narrower than this use the narrow density and link distance.
	pub breakpoint: f64,
	/// Viewport area (px²) per particle below the breakpoint.
	pub density_narrow: f64,
	/// Viewport area (px²) per particle at or above the breakpoint.
	pub density_wide: f64,
	/// Link distance (px) below the breakpoint.
	pub link_distance_narrow: f64,
	/// Link distance (px) at or above the breakpoint.
	pub link_distance_wide: f64,
	/// Largest absolute velocity per axis, in px per frame.
	pub max_speed: f64,
	/// Radius range, half-open.
	pub radius_min: f64,
	/// Exclusive upper bound of the radius range.
	pub radius_max: f64,
	/// Probability that a particle uses the accent tone.
	pub accent_chance: f64,
	/// Alpha of a link at zero distance.
	pub link_alpha: f64,
	/// Stroke width of every link.
	pub link_width: f64,
	/// Quiet period after the last resize before the field is rebuilt.
	pub resize_debounce_ms: u32,
}

impl Default for FieldParams {
	fn default() -> Self {
		Self {
			breakpoint: 768.0,
			density_narrow: 8000.0,
			density_wide: 10000.0,
			link_distance_narrow: 60.0,
			link_distance_wide: 100.0,
			max_speed: 0.15,
			radius_min: 0.5,
			radius_max: 2.0,
			accent_chance: 0.2,
			link_alpha: 0.2,
			link_width: 0.5,
			resize_debounce_ms: 100,
		}
	}
}

impl FieldParams {
	fn is_narrow(&self, width: f64) -> bool {
		width < self.breakpoint
	}

	/// Viewport area per particle for this width.
	pub fn density(&self, width: f64) -> f64 {
		if self.is_narrow(width) {
			self.density_narrow
		} else {
			self.density_wide
		}
	}

	/// Number of particles for a viewport: `floor(width * height / density)`.
	pub fn particle_count(&self, width: f64, height: f64) -> usize {
		let area = width.max(0.0) * height.max(0.0);
		(area / self.density(width)).floor() as usize
	}

	/// Distance below which two particles are linked.
	pub fn link_distance(&self, width: f64) -> f64 {
		if self.is_narrow(width) {
			self.link_distance_narrow
		} else {
			self.link_distance_wide
		}
	}

	/// Link alpha for a pair at `distance`, or `None` when they are too far apart.
	///
	/// Falls linearly from `link_alpha` at distance 0 to 0 at `threshold`.
	pub fn link_opacity(&self, distance: f64, threshold: f64) -> Option<f64> {
		(distance < threshold).then(|| (1.0 - distance / threshold) * self.link_alpha)
	}
}

/// A segment joining two nearby particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
	/// One endpoint.
	pub from: (f64, f64),
	/// The other endpoint.
	pub to: (f64, f64),
	/// Stroke opacity, fading with distance.
	pub alpha: f64,
}

/// The complete set of particles for one viewport size.
///
/// A field is never resized in place: a new viewport gets a new field.
pub struct ParticleField {
	/// Every particle, in creation order.
	pub particles: Vec<Particle>,
	width: f64,
	height: f64,
	params: FieldParams,
}

impl ParticleField {
	/// Fresh field sized for `width` x `height`, with every attribute drawn from `rng`.
	pub fn new<R: Rng + ?Sized>(params: FieldParams, width: f64, height: f64, rng: &mut R) -> Self {
		let count = params.particle_count(width, height);
		let speed_span = params.max_speed * 2.0;
		let radius_span = params.radius_max - params.radius_min;

		let particles = (0..count)
			.map(|_| Particle {
				x: rng.r#gen::<f64>() * width,
				y: rng.r#gen::<f64>() * height,
				vx: (rng.r#gen::<f64>() - 0.5) * speed_span,
				vy: (rng.r#gen::<f64>() - 0.5) * speed_span,
				radius: rng.r#gen::<f64>() * radius_span + params.radius_min,
				alpha: rng.r#gen::<f64>(),
				tone: if rng.r#gen::<f64>() < params.accent_chance {
					Tone::Accent
				} else {
					Tone::Primary
				},
			})
			.collect();

		Self {
			particles,
			width,
			height,
			params,
		}
	}

	/// Viewport width the field was built for.
	pub fn width(&self) -> f64 {
		self.width
	}

	/// Viewport height the field was built for.
	pub fn height(&self) -> f64 {
		self.height
	}

	/// Parameters the field was built with.
	pub fn params(&self) -> &FieldParams {
		&self.params
	}

	/// Number of particles.
	pub fn len(&self) -> usize {
		self.particles.len()
	}

	/// `true` for a degenerate viewport.
	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	/// Advance every particle by one frame.
	///
	/// A particle that ends up outside `[0, width]` (or `[0, height]`) has that
	/// velocity component negated. Its position is left as is, so it may sit
	/// just past the edge for one frame before drifting back.
	pub fn step(&mut self) {
		let (w, h) = (self.width, self.height);
		for p in &mut self.particles {
			p.x += p.vx;
			p.y += p.vy;

			if p.x < 0.0 || p.x > w {
				p.vx = -p.vx;
			}
			if p.y < 0.0 || p.y > h {
				p.vy = -p.vy;
			}
		}
	}

	/// Every unordered pair closer than the link distance, as drawable segments.
	///
	/// Quadratic in particle count; the density constants keep that count in
	/// the low hundreds.
	pub fn links(&self) -> Vec<Link> {
		let threshold = self.params.link_distance(self.width);
		let mut links = Vec::new();

		for (i, a) in self.particles.iter().enumerate() {
			for b in &self.particles[i + 1..] {
				let (dx, dy) = (a.x - b.x, a.y - b.y);
				let distance = (dx * dx + dy * dy).sqrt();
				if let Some(alpha) = self.params.link_opacity(distance, threshold) {
					links.push(Link {
						from: (a.x, a.y),
						to: (b.x, b.y),
						alpha,
					});
				}
			}
		}

		links
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	fn field(width: f64, height: f64, seed: u64) -> ParticleField {
		let mut rng = SmallRng::seed_from_u64(seed);
		ParticleField::new(FieldParams::default(), width, height, &mut rng)
	}

	fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
		Particle {
			x,
			y,
			vx,
			vy,
			radius: 1.0,
			alpha: 0.5,
			tone: Tone::Primary,
		}
	}

	fn field_of(width: f64, height: f64, particles: Vec<Particle>) -> ParticleField {
		ParticleField {
			particles,
			width,
			height,
			params: FieldParams::default(),
		}
	}

	#[test]
	fn count_uses_wide_density_on_desktop() {
		let f = field(800.0, 600.0, 1);
		assert_eq!(f.len(), 48);
		assert_eq!(f.params().link_distance(800.0), 100.0);
	}

	#[test]
	fn count_uses_narrow_density_on_mobile() {
		let f = field(400.0, 800.0, 2);
		assert_eq!(f.len(), 40);
		assert_eq!(f.params().link_distance(400.0), 60.0);
	}

	#[test]
	fn count_follows_floor_formula() {
		let params = FieldParams::default();
		let viewports: [(f64, f64); 4] = [(767.0, 1000.0), (768.0, 1000.0), (1920.0, 1080.0), (320.0, 568.0)];
		for (w, h) in viewports {
			let density: f64 = if w < 768.0 { 8000.0 } else { 10000.0 };
			let expected = ((w * h) / density).floor() as usize;
			assert_eq!(params.particle_count(w, h), expected, "{w}x{h}");
		}
	}

	#[test]
	fn degenerate_viewport_has_no_particles() {
		assert!(field(0.0, 600.0, 3).is_empty());
		assert!(field(800.0, 0.0, 3).is_empty());

		let mut f = field(0.0, 0.0, 3);
		f.step();
		assert!(f.links().is_empty());
	}

	#[test]
	fn attributes_stay_in_range() {
		let f = field(1280.0, 720.0, 4);
		assert!(!f.is_empty());
		for p in &f.particles {
			assert!((0.0..=1280.0).contains(&p.x));
			assert!((0.0..=720.0).contains(&p.y));
			assert!(p.vx.abs() <= 0.15 && p.vy.abs() <= 0.15);
			assert!(p.radius >= 0.5 && p.radius < 2.0);
			assert!((0.0..1.0).contains(&p.alpha));
		}
	}

	#[test]
	fn accent_share_is_roughly_a_fifth() {
		let f = field(3000.0, 3000.0, 5);
		let accents = f.particles.iter().filter(|p| p.tone == Tone::Accent).count();
		let share = accents as f64 / f.len() as f64;
		assert!((0.12..0.28).contains(&share), "accent share {share}");
	}

	#[test]
	fn positions_stay_within_one_step_of_bounds() {
		let mut f = field(500.0, 400.0, 6);
		for _ in 0..5000 {
			f.step();
			for p in &f.particles {
				assert!(p.x >= -0.15 && p.x <= 500.15, "x = {}", p.x);
				assert!(p.y >= -0.15 && p.y <= 400.15, "y = {}", p.y);
			}
		}
	}

	#[test]
	fn velocity_flips_only_when_crossing_an_edge() {
		let mut f = field_of(
			100.0,
			100.0,
			vec![
				particle(99.95, 50.0, 0.1, 0.0),
				particle(0.05, 50.0, -0.1, 0.0),
				particle(50.0, 99.95, 0.0, 0.1),
				particle(50.0, 50.0, 0.1, -0.1),
			],
		);
		f.step();

		assert_eq!(f.particles[0].vx, -0.1);
		assert_eq!(f.particles[1].vx, 0.1);
		assert_eq!(f.particles[2].vy, -0.1);
		assert_eq!((f.particles[3].vx, f.particles[3].vy), (0.1, -0.1));

		// Overshoot is not corrected; the particle heads back next frame.
		assert!(f.particles[0].x > 100.0);
		f.step();
		assert!(f.particles[0].x <= 100.0);
		assert_eq!(f.particles[0].vx, -0.1);
	}

	#[test]
	fn links_respect_threshold() {
		let f = field_of(
			800.0,
			600.0,
			vec![
				particle(0.0, 0.0, 0.0, 0.0),
				particle(99.9, 0.0, 0.0, 0.0),
				particle(0.0, 100.0, 0.0, 0.0),
			],
		);
		let links = f.links();

		// (0,1) at 99.9 links; (0,2) at exactly 100 does not; (1,2) is ~141.
		assert_eq!(links.len(), 1);
		assert_eq!(links[0].from, (0.0, 0.0));
		assert_eq!(links[0].to, (99.9, 0.0));
	}

	#[test]
	fn narrow_viewport_links_at_shorter_range() {
		let f = field_of(
			400.0,
			800.0,
			vec![particle(0.0, 0.0, 0.0, 0.0), particle(70.0, 0.0, 0.0, 0.0)],
		);
		assert!(f.links().is_empty());

		let f = field_of(
			800.0,
			800.0,
			vec![particle(0.0, 0.0, 0.0, 0.0), particle(70.0, 0.0, 0.0, 0.0)],
		);
		assert_eq!(f.links().len(), 1);
	}

	#[test]
	fn link_opacity_matches_linear_formula() {
		let params = FieldParams::default();
		for d in [10.0_f64, 25.0, 50.0, 75.0, 99.0] {
			assert_eq!(params.link_opacity(d, 100.0), Some((1.0 - d / 100.0) * 0.2));
		}
		assert_eq!(params.link_opacity(30.0, 60.0), Some((1.0 - 30.0 / 60.0) * 0.2));
		assert_eq!(params.link_opacity(60.0, 60.0), None);
	}

	#[test]
	fn link_opacity_fades_to_zero_at_threshold() {
		let params = FieldParams::default();
		assert_eq!(params.link_opacity(0.0, 100.0), Some(0.2));
		assert_eq!(params.link_opacity(100.0, 100.0), None);
		assert_eq!(params.link_opacity(150.0, 100.0), None);

		let mut last = f64::INFINITY;
		for d in (0..100).map(f64::from) {
			let alpha = params.link_opacity(d, 100.0).unwrap();
			assert!(alpha < last);
			assert!(alpha > 0.0);
			last = alpha;
		}
		let near_edge = params.link_opacity(99.999, 100.0).unwrap();
		assert!(near_edge < 1e-4);
	}
}
