//! Page content: everything the sections display.
//!
//! The page ships with built-in content. A deployment can override any part
//! of it with a JSON `<script id="portfolio-data">` block; fields missing from
//! that JSON keep their built-in values.

use serde::Deserialize;

/// Section anchors shown in the navbar, in page order.
pub const NAV_ITEMS: [&str; 5] = ["About", "Skills", "Projects", "Experience", "Contact"];

/// `#about` for `"About"`.
pub fn anchor(item: &str) -> String {
	format!("#{}", item.to_lowercase())
}

/// Name, headline and bio.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Profile {
	/// Short name used as the navbar brand.
	pub short_name: String,
	/// First line of the hero name.
	pub first_name: String,
	/// Second line of the hero name.
	pub last_name: String,
	/// Document `<title>`.
	pub page_title: String,
	/// Headline before the highlighted phrase.
	pub headline: String,
	/// Phrase drawn in the accent color.
	pub headline_highlight: String,
	/// Degree in progress, emphasised in the bio.
	pub study: String,
	/// Remainder of the About paragraph.
	pub bio: String,
	/// Pull quote under the bio.
	pub quote: String,
}

/// A headline number in the About section.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Stat {
	/// Big number, already formatted ("3+").
	pub value: String,
	/// Caption under the number.
	pub label: String,
}

/// A certification with its verification link.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Certification {
	/// Certificate name.
	pub title: String,
	/// Issuing organization.
	pub issuer: String,
	/// Free-form, shown as is.
	pub date: String,
	/// Opened in a new tab.
	pub link: String,
	/// Featured certifications are listed inline; the rest only in the modal.
	#[serde(default)]
	pub featured: bool,
}

/// A language with a self-assessed proficiency percentage.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Proficiency {
	/// Language name.
	pub label: String,
	/// Percentage; values above 100 are drawn as 100.
	pub level: u8,
}

/// Contents of the skills bento grid.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Skills {
	/// Heading of the large card.
	pub focus_title: String,
	/// Paragraph under that heading.
	pub focus_blurb: String,
	/// Bulleted focus areas.
	pub focus: Vec<String>,
	/// Shown as progress bars.
	pub languages: Vec<Proficiency>,
	/// Shown as chips.
	pub tools: Vec<String>,
}

/// One row in the projects section.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Project {
	/// Project name.
	pub title: String,
	/// Small caption above the title.
	pub subtitle: String,
	/// Body text.
	pub description: String,
	/// Technology chips.
	pub tags: Vec<String>,
	/// CSS class selecting the card gradient.
	pub accent: String,
	/// Headline figure inside the visual card.
	pub stat: String,
	/// Caption for `stat`.
	pub stat_label: String,
}

/// A timeline entry.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Job {
	/// Job title.
	pub role: String,
	/// Employer.
	pub company: String,
	/// Free-form date range.
	pub period: String,
	/// What the role involved.
	pub description: String,
}

/// Footer links.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Contact {
	/// Bare address, without `mailto:`.
	pub email: String,
	/// Profile URL.
	pub github: String,
	/// Profile URL.
	pub linkedin: String,
	/// Footer line.
	pub copyright: String,
}

impl Contact {
	/// `mailto:` link for the send button.
	pub fn mailto(&self) -> String {
		format!("mailto:{}", self.email)
	}
}

/// Complete page content.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Portfolio {
	/// Hero and About text.
	pub profile: Profile,
	/// About stat cards.
	pub stats: Vec<Stat>,
	/// All certifications; see [`Portfolio::featured_certifications`].
	pub certifications: Vec<Certification>,
	/// Skills section.
	pub skills: Skills,
	/// Projects section.
	pub projects: Vec<Project>,
	/// Timeline, most recent first.
	pub experience: Vec<Job>,
	/// Footer.
	pub contact: Contact,
}

impl Portfolio {
	/// Parse content JSON, filling gaps from the built-in content.
	pub fn from_json(json: &str) -> serde_json::Result<Self> {
		serde_json::from_str(json)
	}

	/// Featured certifications, in declaration order.
	pub fn featured_certifications(&self) -> Vec<Certification> {
		self.certifications.iter().filter(|c| c.featured).cloned().collect()
	}
}

/// Up to three initials of an issuer's capitalised words, e.g. "AWS".
pub fn issuer_monogram(issuer: &str) -> String {
	let initials: String = issuer
		.split(|c: char| c.is_whitespace() || c == '/')
		.filter_map(|word| word.chars().next())
		.filter(|c| c.is_uppercase())
		.take(3)
		.collect();
	if initials.is_empty() {
		issuer.chars().take(1).collect::<String>().to_uppercase()
	} else {
		initials
	}
}

fn strings(items: &[&str]) -> Vec<String> {
	items.iter().map(|s| s.to_string()).collect()
}

impl Default for Profile {
	fn default() -> Self {
		Self {
			short_name: "Janani".into(),
			first_name: "Janani".into(),
			last_name: "Jayalakshmi".into(),
			page_title: "Janani | AI Engineer".into(),
			headline: "Product-Focused AI Engineer converting complex research into scalable, "
				.into(),
			headline_highlight: "human-centric solutions".into(),
			study: "B.Tech in CSE (AI & Robotics)".into(),
			bio: "at VIT Chennai. I bridge the gap between theoretical AI research and tangible, \
			      user-centric products."
				.into(),
			quote: "\"Off-duty, I'm into music, psychological thrillers, murder mysteries, and \
			        writing spontaneous blogs, plus a bit of 'vibe coding'.\""
				.into(),
		}
	}
}

impl Default for Skills {
	fn default() -> Self {
		Self {
			focus_title: "AI & Data Science".into(),
			focus_blurb: "Expertise in Neural Networks and RAG architectures. I build models that \
			              don't just predict, but reason."
				.into(),
			focus: strings(&[
				"Generative AI",
				"RAG Systems",
				"NLP / LLMs",
				"Computer Vision",
				"Graph Neural Networks",
				"Prompt Engineering",
				"OCR / Document AI",
				"TensorFlow / PyTorch",
				"Pandas / NumPy",
				"Data Visualization",
			]),
			languages: [
				("Python", 95),
				("C / C++", 90),
				("Java", 85),
				("JavaScript / Node", 85),
				("Flutter / Swift", 80),
			]
			.into_iter()
			.map(|(label, level)| Proficiency {
				label: label.into(),
				level,
			})
			.collect(),
			tools: strings(&[
				"AWS",
				"Git",
				"MongoDB",
				"MySQL",
				"Express",
				"Gemini API",
				"Docker",
				"Linux",
			]),
		}
	}
}

impl Default for Contact {
	fn default() -> Self {
		Self {
			email: "ksjananijayalakshmi@gmail.com".into(),
			github: "https://github.com/Janani-prog".into(),
			linkedin: "https://www.linkedin.com/in/janani-jayalakshmi-2a978228a/".into(),
			copyright: "© 2025 Janani Jayalakshmi. All systems nominal.".into(),
		}
	}
}

const CERT_LINK: &str = "https://www.linkedin.com/in/janani-jayalakshmi/details/certifications/";

fn default_certifications() -> Vec<Certification> {
	[
		("AWS Academy Graduate - Cloud Architecting", "Amazon Web Services", "Oct 2025", true),
		("Prompt Engineering & Programming with OpenAI", "Columbia University", "Jul 2025", true),
		("Supervised Machine Learning", "Stanford University / DeepLearning.AI", "Jun 2025", true),
		("Google Prompting Essentials", "Google", "Jul 2025", false),
		("Prompt Design in Vertex AI", "Google", "Jul 2025", false),
		("Build Rag Chatbot with Python", "LetsUpgrade", "May 2025", false),
		("AIQOD Hackathon", "VIT Chennai", "Mar 2025", false),
		("Flutter Frames", "GDG on Campus", "Feb 2025", false),
		("Break-A-thon", "IEEE Computer Society", "Jan 2025", false),
		("Introduction to Generative AI", "Google", "Oct 2024", false),
	]
	.into_iter()
	.map(|(title, issuer, date, featured)| Certification {
		title: title.into(),
		issuer: issuer.into(),
		date: date.into(),
		link: CERT_LINK.into(),
		featured,
	})
	.collect()
}

fn default_projects() -> Vec<Project> {
	vec![
		Project {
			title: "Molecular Graph NN".into(),
			subtitle: "Drug Safety Assessment".into(),
			description: "Designed a complete ML pipeline with Graph Attention Networks achieving \
			              87.2% accuracy in predicting molecular toxicity."
				.into(),
			tags: strings(&["PyTorch", "Graph ML", "Healthcare"]),
			accent: "accent-emerald".into(),
			stat: "87.2%".into(),
			stat_label: "Accuracy".into(),
		},
		Project {
			title: "Aura Response".into(),
			subtitle: "AI Disaster Management".into(),
			description: "Developed a bilingual NLP engine (English & Tamil) processing 90+ \
			              commands with <100ms response time."
				.into(),
			tags: strings(&["Flask", "NLP", "Leaflet.js"]),
			accent: "accent-orange".into(),
			stat: "<100ms".into(),
			stat_label: "Latency".into(),
		},
		Project {
			title: "Invisibl RAG".into(),
			subtitle: "Invisibl Cloud Intern".into(),
			description: "Researched and developed robust RAG architectures reducing AI \
			              hallucinations by 35% for enterprise use cases."
				.into(),
			tags: strings(&["GenAI", "AWS Bedrock", "LLMs"]),
			accent: "accent-violet".into(),
			stat: "-35%".into(),
			stat_label: "Hallucinations".into(),
		},
	]
}

fn default_experience() -> Vec<Job> {
	[
		(
			"AI/ML Intern",
			"FLSmidth",
			"Aug 2025 - Present",
			"Building an iOS app integrating ML outputs for miller analysis. Improving industrial \
			 performance modeling.",
		),
		(
			"Summer Intern",
			"Invisibl Cloud",
			"Jun 2025",
			"Evaluated AWS Bedrock, OpenAI, and Gemini models. Guided client adoption of Scalable \
			 GenAI frameworks.",
		),
		(
			"Summer Research Intern",
			"NIT Trichy",
			"Summer 2024",
			"Developed 'Aura', a bilingual NLP disaster response engine processing 90+ commands \
			 with <100ms latency.",
		),
		(
			"Music Club Core",
			"VIT Chennai",
			"2024 - 2027",
			"Performed in 20+ college events for audiences of 500+. Enhanced cultural visibility \
			 through musical leadership.",
		),
		(
			"Cultural Secretary",
			"PSBB",
			"2022 - 2023",
			"Led and organized 20+ cultural events for 1,000+ students. Leadership in action.",
		),
	]
	.into_iter()
	.map(|(role, company, period, description)| Job {
		role: role.into(),
		company: company.into(),
		period: period.into(),
		description: description.into(),
	})
	.collect()
}

impl Default for Portfolio {
	fn default() -> Self {
		Self {
			profile: Profile::default(),
			stats: vec![
				Stat {
					value: "8.4".into(),
					label: "CGPA".into(),
				},
				Stat {
					value: "10+".into(),
					label: "Prototypes".into(),
				},
			],
			certifications: default_certifications(),
			skills: Skills::default(),
			projects: default_projects(),
			experience: default_experience(),
			contact: Contact::default(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn anchors_are_lowercase_fragments() {
		let anchors: Vec<String> = NAV_ITEMS.iter().map(|i| anchor(i)).collect();
		assert_eq!(
			anchors,
			["#about", "#skills", "#projects", "#experience", "#contact"]
		);
	}

	#[test]
	fn featured_keeps_declaration_order() {
		let featured = Portfolio::default().featured_certifications();
		let titles: Vec<&str> = featured.iter().map(|c| c.title.as_str()).collect();
		assert_eq!(
			titles,
			[
				"AWS Academy Graduate - Cloud Architecting",
				"Prompt Engineering & Programming with OpenAI",
				"Supervised Machine Learning",
			]
		);
	}

	#[test]
	fn partial_json_keeps_builtin_sections() {
		let json = r#"{
			"profile": { "first_name": "Ada", "page_title": "Ada | Engineer" },
			"certifications": [
				{ "title": "Rust Fundamentals", "issuer": "Ferris Academy", "date": "Jan 2026", "link": "https://example.org" }
			]
		}"#;
		let p = Portfolio::from_json(json).unwrap();

		assert_eq!(p.profile.first_name, "Ada");
		assert_eq!(p.profile.page_title, "Ada | Engineer");
		assert_eq!(p.profile.last_name, Profile::default().last_name);
		assert_eq!(p.certifications.len(), 1);
		assert!(!p.certifications[0].featured);
		assert!(p.featured_certifications().is_empty());
		assert_eq!(p.projects, Portfolio::default().projects);
		assert_eq!(p.contact, Contact::default());
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(Portfolio::from_json("{ \"stats\": 3 }").is_err());
		assert!(Portfolio::from_json("not json").is_err());
	}

	#[test]
	fn monograms() {
		assert_eq!(issuer_monogram("Amazon Web Services"), "AWS");
		assert_eq!(issuer_monogram("Stanford University / DeepLearning.AI"), "SUD");
		assert_eq!(issuer_monogram("IEEE Computer Society"), "ICS");
		assert_eq!(issuer_monogram("Google"), "G");
		assert_eq!(issuer_monogram("GDG on Campus"), "GC");
		assert_eq!(issuer_monogram("letsupgrade"), "L");
	}

	#[test]
	fn mailto_link() {
		assert_eq!(
			Contact::default().mailto(),
			"mailto:ksjananijayalakshmi@gmail.com"
		);
	}
}
