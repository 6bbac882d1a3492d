use maud::{html, DOCTYPE, Markup};
use time::OffsetDateTime;

use crate::{
    content::{CaseStudy, SolutionLink},
    state::State,
    ui::{
        self,
        card::{CaseStudyCard, Tags},
        image::Image,
        render_content,
    },
};

pub const HOME: &str = "/";
pub const ABOUT: &str = "/about";
pub const CASE_STUDIES: &str = "/case-studies";
pub const PATTERN_LIBRARY: &str = "/entrata-pattern-library";

const NAV_LINKS: [(&str, &str); 3] = [
    ("Home", HOME),
    ("About Me", ABOUT),
    ("Case Studies", CASE_STUDIES),
];

pub fn page(state: &State, current_path: &str, title: &str, content: Markup) -> Markup {
    let site = &state.config.site;
    let year = OffsetDateTime::now_utc().year();

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title {
                    @if title.is_empty() { (site.owner) } @else { (title) " | " (site.owner) }
                }
                link rel="stylesheet" type="text/css" href="/static/css/main.css";
            }
            body {
                nav.site-nav {
                    a.brand href=(HOME) { (site.owner) }
                    menu {
                        @for (name, path) in NAV_LINKS {
                            li {
                                a.active[path == current_path] href=(path) { (name) }
                            }
                        }
                    }
                }
                main {
                    (content)
                }
                footer.site-footer {
                    menu.social {
                        @for link in &site.social {
                            li {
                                a href=(link.href) target="_blank" rel="noopener noreferrer" aria-label=(link.label) {
                                    (link.label)
                                }
                            }
                        }
                    }
                    p { "© " (year) " All rights reserved." }
                }
            }
        }
    }
}

fn back_to_case_studies() -> Markup {
    html! {
        a.back href=(CASE_STUDIES) { "← Back to Case Studies" }
    }
}

pub fn home(state: &State) -> Markup {
    let site = &state.config.site;

    const FOCUS_AREAS: [(&str, &str); 3] = [
        ("UX Strategy", "Aligning user needs with business goals to create meaningful product experiences"),
        ("Product Design", "Crafting intuitive interfaces that delight users and drive engagement"),
        ("Team Leadership", "Building and mentoring high-performing design teams that ship great products"),
    ];

    page(state, HOME, "", html! {
        section.hero {
            (Image::asset(state.assets.as_ref(), "user-test-dark.jpg", "Professional portrait").class("backdrop"))
            .hero-text {
                h1 { (site.owner) }
                @if !site.headline.is_empty() {
                    h2 { (site.headline) }
                }
                p {
                    "I'm a design leader, problem solver, husband and dad. With 13+ years of experience, \
                     I've helped teams build products that millions love to use and help guide designers \
                     into effective leaders."
                }
                menu {
                    li { a.button href=(CASE_STUDIES) { "View My Work" } }
                    li { a.button.outline href=(ABOUT) { "About Me" } }
                }
            }
        }
        section.focus {
            header {
                h2 { "What I Do" }
                p { "I specialize in transforming complex problems into elegant, user-friendly solutions" }
            }
            .grid {
                @for (title, description) in FOCUS_AREAS {
                    article {
                        span.glyph aria-hidden="true" { "✦" }
                        h3 { (title) }
                        p { (description) }
                    }
                }
            }
        }
        section.cta {
            h2 { "Ready to see my work?" }
            p {
                "Explore case studies showcasing my approach to design thinking, problem-solving, \
                 and delivering impact."
            }
            a.button href=(CASE_STUDIES) { "View Case Studies" }
        }
    })
}

pub fn about(state: &State) -> Markup {
    const PRINCIPLES: [(&str, &str); 3] = [
        ("User-Centered", "Every decision starts with understanding the people for whom we're designing."),
        ("Innovation", "Pushing boundaries while staying grounded in proven design principles."),
        ("Excellence", "Sweating the details to create experiences that truly stand out."),
    ];

    const DESIGN_SKILLS: [&str; 6] = [
        "User Research & Testing",
        "Information Architecture",
        "Interaction Design",
        "Design Systems",
        "Product Strategy",
        "Workshop Facilitation",
    ];

    const LEADERSHIP_SKILLS: [&str; 6] = [
        "Team Management",
        "Mentoring and Coaching",
        "Systems Building",
        "Figma & Adobe Creative Suite",
        "AI Enabled Product Building",
        "Analytics & Metrics",
    ];

    let site = &state.config.site;

    page(state, ABOUT, "About", html! {
        section.intro {
            .intro-text {
                h1 { "Hi, I'm " (site.owner.split_whitespace().next().unwrap_or(&site.owner)) "." }
                h2 { "I'm a design leader, problem solver, husband, and dad." }
                p {
                    "For more than 13 years, I've led teams in creating products used by millions. \
                     My focus is on clarity, trust, and thoughtful collaboration, especially when the \
                     problems are complex and the stakes are high."
                }
                p {
                    "In my current role at Entrata, I help guide the UX vision for a large, interconnected \
                     platform that supports the daily work of property managers and residents. I care deeply \
                     about understanding real needs and shaping solutions that make life easier in meaningful, \
                     lasting ways."
                }
                p {
                    "My personal life is really important to me. I love my family, spending time with my wife \
                     and kids. I have multiple house projects ongoing at any given time and am working towards \
                     perfecting my homemade pizza."
                }
                @if let Some(linkedin) = &site.linkedin {
                    a.button href=(linkedin) target="_blank" rel="noopener noreferrer" { "LinkedIn Profile" }
                }
            }
            .portrait {
                (Image::asset(state.assets.as_ref(), "family-photo.png", "Professional portrait"))
            }
        }
        section.principles {
            h2 { "A few principles that shape how I lead and design" }
            .grid {
                @for (title, description) in PRINCIPLES {
                    article {
                        h3 { (title) }
                        p { (description) }
                    }
                }
            }
        }
        section.expertise {
            header {
                h2 { "Expertise" }
                p { "Over 13 years of honing my craft across various disciplines" }
            }
            .grid {
                div {
                    h3 { "Design & Strategy" }
                    ul { @for skill in DESIGN_SKILLS { li { (skill) } } }
                }
                div {
                    h3 { "Leadership & Tools" }
                    ul { @for skill in LEADERSHIP_SKILLS { li { (skill) } } }
                }
            }
        }
    })
}

pub fn case_studies(state: &State) -> Markup {
    page(state, CASE_STUDIES, "Case Studies", html! {
        section.intro {
            h1 { "Case Studies" }
            p {
                "I specialize in designing systems, workflows, and tools that help product teams move \
                 from ambiguity to clarity. My work sits at the intersection of design, product strategy, \
                 and enablement, building frameworks that empower teams to make better decisions faster, \
                 especially as organizations adopt AI-assisted workflows."
                br; br;
                "Across these case studies, you'll see a consistent theme: "
                strong {
                    "Turning fragmented processes into clear, scalable systems that elevate quality, \
                     speed, and alignment."
                }
            }
        }
        section.featured {
            span.label { "Featured Case Study" }
            .featured-body {
                div {
                    h2 { "Entrata Pattern Library 2024" }
                    p {
                        "A deep dive into building and scaling Entrata's design system, featuring 328k+ \
                         component insertions, 268 unique components, and measurable business impact \
                         across the product suite."
                    }
                    a.button href=(PATTERN_LIBRARY) { "View Full Case Study" }
                }
                (Image::asset(state.assets.as_ref(), "design-system.png", "Entrata Pattern Library"))
            }
        }
        section.cards {
            @for study in state.studies.iter() {
                (CaseStudyCard::new(study, state.assets.as_ref()))
            }
        }
    })
}

pub fn case_study(state: &State, study: &CaseStudy) -> Markup {
    let assets = state.assets.as_ref();
    // Outer None: no link at all. Inner None: the bundled document is missing.
    let solution_url = study.solution_link().map(|link| match link {
        SolutionLink::Asset(name) => assets.resolve(name),
        SolutionLink::External(url) => Some(url.to_owned()),
    });

    // Same path the card links to, so the nav never marks a detail page active
    let current_path = ui::card::detail_path(&study.id);

    page(state, &current_path, &study.title, html! {
        article.case-study data-case-study=(study.id) {
            section.hero {
                (Image::asset(assets, &study.hero_image, &study.title).class("backdrop"))
                span.label { "Case Study" }
                h1 { (study.title) }
                p.subtitle { (study.subtitle) }
                (Tags(&study.tags))
                dl.overview {
                    div { dt { "Role" } dd { (study.role) } }
                    div { dt { "Timeline" } dd { (study.timeline) } }
                    div { dt { "Team" } dd { (study.team) } }
                }
            }
            section.tldr {
                h2 { "TL;DR" }
                p { (study.tldr) }
            }
            section.problem {
                (Image::asset(assets, &study.problem_image, "Problem illustration"))
                div {
                    h2 { "Problem" }
                    (render_content(&study.problem))
                }
            }
            section.solution {
                h2 { "Solution" }
                (Image::asset(assets, &study.solution_image, "Solution illustration"))
                @match &solution_url {
                    Some(Some(url)) => {
                        a.button.outline href=(url) target="_blank" rel="noopener noreferrer" {
                            (study.solution_button_text)
                        }
                    }
                    Some(None) => {
                        span.button.outline.disabled aria-disabled="true" title="Document unavailable" {
                            (study.solution_button_text)
                        }
                    }
                    None => {}
                }
                (render_content(&study.solution))
            }
            section.impact {
                h2 { "Impact & Metrics" }
                (render_content(&study.impact))
            }
            section.learnings {
                h2 { "Learnings" }
                p { (study.learnings) }
            }
            section.whats-next {
                h2 { "What's Next" }
                p { (study.whats_next) }
            }
            nav.back { (back_to_case_studies()) }
        }
    })
}

/// Shown for ids missing from the collection.
pub fn case_study_not_found(state: &State, path: &str) -> Markup {
    page(state, path, "Case Study Not Found", html! {
        section.not-found {
            h1 { "Case Study Not Found" }
            (back_to_case_studies())
        }
    })
}

pub fn not_found(state: &State, path: &str) -> Markup {
    page(state, path, "Page Not Found", html! {
        section.not-found {
            h1 { "Page Not Found" }
            a.back href=(HOME) { "← Back Home" }
        }
    })
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assets::StaticAssets, config::SocialLink, content::CaseStudies, Config};

    fn state() -> State {
        let mut config = Config::default();
        config.site.owner = "Jane Doe".to_owned();
        config.site.social = vec![SocialLink {
            label: "GitHub".to_owned(),
            href: "https://github.com/janedoe".to_owned(),
        }];

        State::new(config, CaseStudies::bundled().unwrap(), StaticAssets::new("/assets"))
    }

    #[test]
    fn navigation_marks_only_the_current_path() {
        let html = about(&state()).into_string();

        let active = html.find(r#"class="active""#).unwrap();

        assert_eq!(html.matches(r#"class="active""#).count(), 1);
        assert!(html.find(">Home</a>").unwrap() < active, "{html}");
        assert!(active < html.find(">About Me</a>").unwrap(), "{html}");
    }

    #[test]
    fn footer_carries_social_links_and_year() {
        let html = home(&state()).into_string();
        let year = OffsetDateTime::now_utc().year();

        assert!(html.contains("https://github.com/janedoe"), "{html}");
        assert!(html.contains(&format!("© {year} All rights reserved.")), "{html}");
    }

    #[test]
    fn listing_renders_every_study_in_order() {
        let state = state();
        let html = case_studies(&state).into_string();

        let positions: Vec<_> = state.studies.iter()
            .map(|s| html.find(&format!(r#"data-case-study="{}""#, s.id)).unwrap())
            .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains(PATTERN_LIBRARY));
    }

    #[test]
    fn detail_renders_markup_fields_and_plain_fields() {
        let state = state();
        let mut study = state.studies.iter().next().unwrap().clone();
        study.problem = "- **Slow** builds".to_owned();
        study.learnings = "- **not** parsed".to_owned();

        let html = case_study(&state, &study).into_string();

        assert!(html.contains("<strong>Slow</strong> builds"), "{html}");
        assert!(html.contains("<p>- **not** parsed</p>"), "{html}");
        assert!(html.contains(&format!("<h1>{}</h1>", study.title)), "{html}");
    }

    #[test]
    fn pdf_solution_links_go_through_the_resolver() {
        let state = state();
        let mut study = state.studies.iter().next().unwrap().clone();
        study.solution_url = Some("deck one.pdf".to_owned());
        study.solution_button_text = "Read the Deck".to_owned();

        let html = case_study(&state, &study).into_string();

        assert!(html.contains(r#"href="/assets/deck%20one.pdf""#), "{html}");
        assert!(html.contains("Read the Deck"), "{html}");
    }

    #[test]
    fn external_solution_links_are_used_verbatim() {
        let state = state();
        let mut study = state.studies.iter().next().unwrap().clone();
        study.solution_url = Some("https://example.com/proto".to_owned());

        let html = case_study(&state, &study).into_string();

        assert!(html.contains(r#"href="https://example.com/proto""#), "{html}");
    }

    #[test]
    fn unavailable_document_keeps_a_disabled_button() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.site.owner = "Jane Doe".to_owned();
        let state = State::new(
            config,
            CaseStudies::bundled().unwrap(),
            StaticAssets::new("/assets").with_dir(dir.path()),
        );
        let mut study = state.studies.iter().next().unwrap().clone();
        study.solution_url = Some("missing.pdf".to_owned());
        study.solution_button_text = "Read the Playbook".to_owned();

        let html = case_study(&state, &study).into_string();

        assert!(html.contains("Read the Playbook"), "{html}");
        assert!(html.contains(r#"aria-disabled="true""#), "{html}");
        assert!(!html.contains("missing.pdf"), "{html}");
    }

    #[test]
    fn no_solution_link_without_url() {
        let state = state();
        let mut study = state.studies.iter().next().unwrap().clone();
        study.solution_url = None;
        study.solution_button_text = "Hidden Button".to_owned();

        let html = case_study(&state, &study).into_string();

        assert!(!html.contains("Hidden Button"), "{html}");
    }

    #[test]
    fn missing_study_view_links_back_to_listing() {
        let html = case_study_not_found(&state(), "/case-studies/nope").into_string();

        assert!(html.contains("Case Study Not Found"), "{html}");
        assert!(html.contains(r#"href="/case-studies""#), "{html}");
    }
}
