//! portfolio: single-page personal portfolio rendered client-side.
//!
//! This crate provides the page as a WASM Leptos app: a fixed navbar, content
//! sections that reveal on scroll, a credentials modal, and an animated
//! particle field drawn on a canvas behind everything.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod content;

pub use components::starfield::StarfieldCanvas;
pub use content::Portfolio;

use components::nav::Navbar;
use components::sections::{About, ContactFooter, Experience, Hero, Projects, SkillsSection};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio: logging initialized");
}

/// Load page content from a script element with id="portfolio-data".
/// Returns `None` when the element is absent or its JSON does not parse.
fn load_portfolio() -> Option<Portfolio> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("portfolio-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match Portfolio::from_json(&json_text) {
		Ok(data) => {
			info!(
				"portfolio: loaded content ({} certifications, {} projects, {} jobs)",
				data.certifications.len(),
				data.projects.len(),
				data.experience.len()
			);
			Some(data)
		}
		Err(e) => {
			warn!("portfolio: failed to parse content, using built-in: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads content from the DOM (or falls back to built-in content) and lays
/// out the page over the starfield.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let data = load_portfolio().unwrap_or_default();
	let featured = data.featured_certifications();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text=data.profile.page_title.clone() />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="page">
			<StarfieldCanvas />
			<Navbar brand=data.profile.short_name.clone() />
			<main>
				<Hero profile=data.profile.clone() />
				<About
					profile=data.profile
					stats=data.stats
					certifications=data.certifications
					featured=featured
				/>
				<SkillsSection skills=data.skills />
				<Projects projects=data.projects />
				<Experience jobs=data.experience />
			</main>
			<ContactFooter contact=data.contact />
		</div>
	}
}
