//! Fixed navigation bar with a full-screen mobile menu.

use leptos::ev;
use leptos::prelude::*;

use crate::content::{NAV_ITEMS, anchor};

/// Scroll offset (px) after which the navbar gets its solid background.
const SCROLLED_AFTER: f64 = 50.0;

/// Whether the navbar should switch to its scrolled style.
pub fn is_scrolled(scroll_y: f64) -> bool {
	scroll_y > SCROLLED_AFTER
}

/// Open/closed state of the mobile menu overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
	open: bool,
}

impl MenuState {
	/// Whether the overlay is showing.
	pub fn is_open(self) -> bool {
		self.open
	}

	/// Flip between open and closed.
	pub fn toggle(&mut self) {
		self.open = !self.open;
	}

	/// Close; a no-op when already closed.
	pub fn close(&mut self) {
		self.open = false;
	}
}

/// Top bar with section links, collapsing to a menu button on narrow screens.
#[component]
pub fn Navbar(
	/// Text of the home link.
	#[prop(into)]
	brand: String,
) -> impl IntoView {
	let scrolled = RwSignal::new(false);
	let menu = RwSignal::new(MenuState::default());

	let scroll_handle = window_event_listener(ev::scroll, move |_| {
		let y = window().scroll_y().unwrap_or(0.0);
		scrolled.set(is_scrolled(y));
	});
	on_cleanup(move || scroll_handle.remove());

	let nav_class = move || {
		if scrolled.get() {
			"navbar navbar-scrolled"
		} else {
			"navbar"
		}
	};

	let links = NAV_ITEMS
		.iter()
		.map(|item| view! { <a class="nav-link" href=anchor(item)>{*item}</a> })
		.collect_view();

	view! {
		<nav class=nav_class>
			<div class="container nav-inner">
				<a href="#" class="brand">{brand}</a>
				<div class="nav-links">{links}</div>
				<button
					class="menu-toggle"
					aria-label="Toggle menu"
					on:click=move |_| menu.update(MenuState::toggle)
				>
					{move || if menu.get().is_open() { "✕" } else { "☰" }}
				</button>
				<Show when=move || menu.get().is_open()>
					<div class="mobile-menu">
						{NAV_ITEMS
							.iter()
							.map(|item| {
								view! {
									<a
										class="mobile-link"
										href=anchor(item)
										on:click=move |_| menu.update(MenuState::close)
									>
										{*item}
									</a>
								}
							})
							.collect_view()}
					</div>
				</Show>
			</div>
		</nav>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn scrolled_strictly_after_threshold() {
		assert!(!is_scrolled(0.0));
		assert!(!is_scrolled(50.0));
		assert!(is_scrolled(50.5));
	}

	#[test]
	fn menu_toggles_and_closes() {
		let mut menu = MenuState::default();
		assert!(!menu.is_open());
		menu.toggle();
		assert!(menu.is_open());
		menu.close();
		assert!(!menu.is_open());
		menu.close();
		assert!(!menu.is_open());
		menu.toggle();
		menu.toggle();
		assert!(!menu.is_open());
	}
}
