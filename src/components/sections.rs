//! Page sections, top to bottom.

use leptos::prelude::*;

use super::credentials::{CredentialsModal, FeaturedCertifications, ModalState};
use super::reveal::Reveal;
use crate::content::{Certification, Contact, Job, Profile, Project, Skills, Stat};

/// Cards alternate sides on wide screens; even rows put the text first.
fn alternate(index: usize, even: &'static str, odd: &'static str) -> &'static str {
	if index % 2 == 0 { even } else { odd }
}

/// Staggered reveal delay for the `index`-th item in a list.
fn stagger(index: usize) -> u32 {
	index as u32 * 100
}

/// Full-height intro. Fades in right after mount rather than on scroll.
#[component]
pub fn Hero(
	/// Name and headline.
	profile: Profile,
) -> impl IntoView {
	let loaded = RwSignal::new(false);
	Effect::new(move |_| loaded.set(true));

	let fade = move |extra: &'static str| {
		move || {
			let state = if loaded.get() { "is-visible" } else { "is-hidden" };
			format!("reveal {state} {extra}")
		}
	};

	view! {
		<section class="hero">
			<div class="container">
				<div class=fade("")>
					<h1 class="hero-name">{profile.first_name}<br />{profile.last_name}</h1>
				</div>
				<div class=fade("delay-200")>
					<p class="hero-headline">
						{profile.headline}
						<span class="highlight">{profile.headline_highlight}</span>
						"."
					</p>
				</div>
				<div class=fade("delay-300 hero-actions")>
					<a href="#projects" class="button button-solid">"View Mission Logs →"</a>
					<a href="#contact" class="button button-outline">"Establish Uplink"</a>
				</div>
			</div>
			<div class=fade("delay-700 scroll-hint")>"⌄"</div>
		</section>
	}
}

/// Bio, stat cards and the featured certifications block.
#[component]
pub fn About(
	/// Study line, bio and quote.
	profile: Profile,
	/// Headline numbers shown as cards.
	stats: Vec<Stat>,
	/// Everything listed in the credentials modal.
	certifications: Vec<Certification>,
	/// Subset shown inline.
	featured: Vec<Certification>,
) -> impl IntoView {
	let modal = RwSignal::new(ModalState::default());
	let stat_count = stats.len();

	let stat_cards = stats
		.into_iter()
		.enumerate()
		.map(|(i, stat)| {
			view! {
				<Reveal delay=stagger(i + 1) class="card stat-card">
					<div class="stat-value">{stat.value}</div>
					<div class="stat-label">{stat.label}</div>
				</Reveal>
			}
		})
		.collect_view();

	view! {
		<section id="about" class="section section-bordered">
			<div class="container about-grid">
				<Reveal>
					<h2 class="eyebrow eyebrow-cyan">"The Source Code"</h2>
					<p class="lead">
						"Currently pursuing "
						<span class="strong">{profile.study}</span>
						" "
						{profile.bio}
					</p>
					<p class="quote">{profile.quote}</p>
				</Reveal>

				<div class="stat-grid">
					{stat_cards}
					<Reveal delay=stagger(stat_count + 1) class="card cert-card-block">
						<div class="cert-header">
							<span class="cert-heading">"★ Certified Architect"</span>
							<button class="link-button" on:click=move |_| modal.update(ModalState::open)>
								"View All →"
							</button>
						</div>
						<div class="cert-rows">
							<FeaturedCertifications certifications=featured />
						</div>
					</Reveal>
				</div>
			</div>
			<CredentialsModal state=modal certifications=certifications />
		</section>
	}
}

/// Bento grid of focus areas, language bars and tools.
#[component]
pub fn SkillsSection(
	/// Grouped skill lists.
	skills: Skills,
) -> impl IntoView {
	let focus = skills
		.focus
		.into_iter()
		.map(|skill| view! { <div class="skill-item"><span class="dot"></span>{skill}</div> })
		.collect_view();

	let languages = skills
		.languages
		.into_iter()
		.map(|lang| {
			let level = lang.level.min(100);
			view! {
				<div class="proficiency">
					<div class="proficiency-label">
						<span>{lang.label}</span>
						<span>{format!("{level}%")}</span>
					</div>
					<div class="bar">
						<div class="bar-fill" style=format!("width: {level}%")></div>
					</div>
				</div>
			}
		})
		.collect_view();

	let tools = skills
		.tools
		.into_iter()
		.map(|tool| view! { <span class="chip mono">{tool}</span> })
		.collect_view();

	view! {
		<section id="skills" class="section">
			<div class="container">
				<Reveal class="section-heading">
					<h2 class="eyebrow eyebrow-purple">"Command Center"</h2>
					<h3 class="display">"Full-Stack Capabilities."</h3>
				</Reveal>
				<div class="bento">
					<Reveal delay=100 class="card bento-primary">
						<span class="eyebrow eyebrow-cyan">"Primary Engine"</span>
						<h3 class="card-title">{skills.focus_title}</h3>
						<p class="card-text">{skills.focus_blurb}</p>
						<div class="skill-grid">{focus}</div>
					</Reveal>
					<Reveal delay=200 class="card">
						<h3 class="card-title">"Engineering"</h3>
						<div class="proficiencies">{languages}</div>
					</Reveal>
					<Reveal delay=300 class="card">
						<h3 class="card-title">"Infrastructure & Tools"</h3>
						<div class="chips">{tools}</div>
					</Reveal>
				</div>
			</div>
		</section>
	}
}

/// Project rows, alternating text and visual sides.
#[component]
pub fn Projects(
	/// In display order.
	projects: Vec<Project>,
) -> impl IntoView {
	let rows = projects
		.into_iter()
		.enumerate()
		.map(|(i, project)| {
			let tags = project
				.tags
				.into_iter()
				.map(|tag| view! { <span class="chip">{tag}</span> })
				.collect_view();
			let text_order = alternate(i, "order-first", "order-last");
			let visual_order = alternate(i, "order-last", "order-first");

			view! {
				<div class="project-row">
					<Reveal delay=100 class=format!("project-text {text_order}")>
						<span class="eyebrow muted">"✦ "{project.subtitle}</span>
						<h3 class="project-title">{project.title}</h3>
						<p class="card-text">{project.description}</p>
						<div class="chips">{tags}</div>
						<a href="#" class="text-link">"View Case Study →"</a>
					</Reveal>
					<Reveal class=format!("project-visual {visual_order}")>
						<div class=format!("project-frame {}", project.accent)>
							<div class="project-inner">
								<div class="orbit orbit-outer"></div>
								<div class="orbit orbit-inner"></div>
								<div class="project-stat">{project.stat}</div>
								<div class="project-stat-label">{project.stat_label}</div>
							</div>
						</div>
					</Reveal>
				</div>
			}
		})
		.collect_view();

	view! {
		<section id="projects" class="section">
			<div class="container">
				<Reveal class="section-heading">
					<h2 class="eyebrow muted">"Mission Logs"</h2>
					<h3 class="display">"Selected Work."</h3>
				</Reveal>
				<div class="projects">{rows}</div>
			</div>
		</section>
	}
}

/// Vertical timeline of past roles.
#[component]
pub fn Experience(
	/// Most recent first.
	jobs: Vec<Job>,
) -> impl IntoView {
	let entries = jobs
		.into_iter()
		.enumerate()
		.map(|(i, job)| {
			let side = alternate(i, "timeline-left", "timeline-right");
			view! {
				<div class=format!("timeline-entry {side}")>
					<div class="timeline-dot"></div>
					<Reveal delay=stagger(i) class="timeline-body">
						<h3 class="card-title">{job.company}</h3>
						<p class="timeline-meta">{format!("{} | {}", job.role, job.period)}</p>
						<p class="card-text">{job.description}</p>
					</Reveal>
				</div>
			}
		})
		.collect_view();

	view! {
		<section id="experience" class="section section-bordered">
			<div class="container">
				<Reveal class="section-heading centered">
					<h2 class="display-small">"Trajectory."</h2>
				</Reveal>
				<div class="timeline">
					<div class="timeline-line"></div>
					{entries}
				</div>
			</div>
		</section>
	}
}

/// Call to action, social links and copyright.
#[component]
pub fn ContactFooter(
	/// Mail and social links.
	contact: Contact,
) -> impl IntoView {
	let mailto = contact.mailto();
	view! {
		<footer id="contact" class="section footer">
			<div class="container centered">
				<Reveal>
					<h2 class="display">"Let's Connect."</h2>
					<p class="lead muted">
						"Ready to deploy next-gen AI solutions?"
						<br />
						"Initialising communication protocols..."
					</p>
					<a href=mailto class="button button-solid">"✉ Send Message"</a>
					<div class="socials">
						<a href=contact.github class="social" aria-label="GitHub">"GitHub"</a>
						<a href=contact.linkedin class="social" aria-label="LinkedIn">"LinkedIn"</a>
					</div>
					<p class="copyright">{contact.copyright}</p>
				</Reveal>
			</div>
		</footer>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rows_alternate() {
		assert_eq!(alternate(0, "a", "b"), "a");
		assert_eq!(alternate(1, "a", "b"), "b");
		assert_eq!(alternate(4, "a", "b"), "a");
	}

	#[test]
	fn stagger_is_100ms_per_item() {
		assert_eq!(stagger(0), 0);
		assert_eq!(stagger(3), 300);
	}
}
