//! Colors for the starfield.

use super::field::Tone;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red.
	pub r: u8,
	/// Green.
	pub g: u8,
	/// Blue.
	pub b: u8,
	/// Alpha in `[0, 1]`.
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Same color, different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Always the `rgba(...)` form, since particle alphas vary per frame.
	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// Palette used by the particle field.
#[derive(Clone, Debug)]
pub struct StarfieldTheme {
	/// Most particles.
	pub primary: Color,
	/// Accent particles and every link.
	pub accent: Color,
}

impl StarfieldTheme {
	/// White stars with cyan accents on a black page.
	pub fn neural() -> Self {
		Self {
			primary: Color::rgb(255, 255, 255),
			accent: Color::rgb(34, 211, 238),
		}
	}

	/// Color for a particle tone.
	pub fn tone(&self, tone: Tone) -> Color {
		match tone {
			Tone::Primary => self.primary,
			Tone::Accent => self.accent,
		}
	}
}

impl Default for StarfieldTheme {
	fn default() -> Self {
		Self::neural()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_carries_alpha() {
		let c = Color::rgb(34, 211, 238).with_alpha(0.25);
		assert_eq!(c.to_css(), "rgba(34, 211, 238, 0.25)");
	}

	#[test]
	fn tones_map_to_palette() {
		let theme = StarfieldTheme::default();
		assert_eq!(theme.tone(Tone::Primary), Color::rgb(255, 255, 255));
		assert_eq!(theme.tone(Tone::Accent), Color::rgb(34, 211, 238));
	}
}
