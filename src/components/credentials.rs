//! Certification list and the "all credentials" modal.

use leptos::ev;
use leptos::prelude::*;

use crate::content::{Certification, issuer_monogram};

/// Whether the credentials modal is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
	open: bool,
}

impl ModalState {
	/// Whether the modal is currently showing.
	pub fn is_open(self) -> bool {
		self.open
	}

	/// Show the modal.
	pub fn open(&mut self) {
		self.open = true;
	}

	/// Hide the modal.
	pub fn close(&mut self) {
		self.open = false;
	}

	/// Keys that dismiss the modal while it is open.
	pub fn handle_key(&mut self, key: &str) {
		if key == "Escape" {
			self.close();
		}
	}
}

/// Round badge with the issuer's initials.
#[component]
pub fn IssuerBadge(
	/// Issuing organization; also used as the tooltip.
	#[prop(into)]
	issuer: String,
) -> impl IntoView {
	view! {
		<span class="issuer-badge" title=issuer.clone()>
			{issuer_monogram(&issuer)}
		</span>
	}
}

/// Compact rows for the featured certifications.
#[component]
pub fn FeaturedCertifications(
	/// Already filtered to the featured subset.
	certifications: Vec<Certification>,
) -> impl IntoView {
	certifications
		.into_iter()
		.map(|cert| {
			view! {
				<a class="cert-row" href=cert.link target="_blank" rel="noopener noreferrer">
					<IssuerBadge issuer=cert.issuer.clone() />
					<div class="cert-text">
						<div class="cert-title">{cert.title}</div>
						<div class="cert-issuer">{cert.issuer}</div>
					</div>
				</a>
			}
		})
		.collect_view()
}

/// Full-screen overlay listing every certification.
///
/// Closes on the close button, a click on the backdrop, or Escape.
#[component]
pub fn CredentialsModal(
	/// Shared with the button that opens the modal.
	state: RwSignal<ModalState>,
	/// Every certification, in display order.
	certifications: Vec<Certification>,
) -> impl IntoView {
	let key_handle = window_event_listener(ev::keydown, move |ev| {
		if state.get_untracked().is_open() {
			state.update(|s| s.handle_key(&ev.key()));
		}
	});
	on_cleanup(move || key_handle.remove());

	view! {
		<Show when=move || state.get().is_open()>
			<div class="modal-backdrop" on:click=move |_| state.update(ModalState::close)>
				<div class="modal" role="dialog" aria-modal="true" on:click=|ev| ev.stop_propagation()>
					<button
						class="modal-close"
						aria-label="Close"
						on:click=move |_| state.update(ModalState::close)
					>
						"✕"
					</button>
					<h3 class="modal-title">"Credentials"</h3>
					<p class="modal-subtitle">"Verified technical achievements."</p>
					<div class="modal-list">
						{certifications
							.clone()
							.into_iter()
							.map(|cert| {
								view! {
									<a
										class="cert-card"
										href=cert.link
										target="_blank"
										rel="noopener noreferrer"
									>
										<IssuerBadge issuer=cert.issuer.clone() />
										<div class="cert-text">
											<div class="cert-title">{cert.title}</div>
											<div class="cert-issuer">{cert.issuer}</div>
										</div>
										<span class="cert-date">{cert.date}</span>
										<span class="cert-external">"↗"</span>
									</a>
								}
							})
							.collect_view()}
					</div>
				</div>
			</div>
		</Show>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn modal_opens_and_closes() {
		let mut modal = ModalState::default();
		assert!(!modal.is_open());
		modal.open();
		assert!(modal.is_open());
		modal.close();
		assert!(!modal.is_open());
	}

	#[test]
	fn only_escape_dismisses() {
		let mut modal = ModalState::default();
		modal.open();
		modal.handle_key("Enter");
		assert!(modal.is_open());
		modal.handle_key("Escape");
		assert!(!modal.is_open());
	}
}
