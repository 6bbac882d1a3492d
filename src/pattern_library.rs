//! The featured case study: a hand-written landing page rather than a
//! record from the data file.

use maud::{html, Markup, Render};

use crate::{
    renderers::{page, CASE_STUDIES, PATTERN_LIBRARY},
    state::State,
    ui::image::Image,
};

const LIVE_SYSTEM_URL: &str =
    "https://entrata.github.io/figma_make_components_storybook/?path=/docs/introduction--docs";

const OUTCOMES_BACKDROP_URL: &str =
    "https://images.unsplash.com/photo-1575388902449-6bca946ad549?fit=max&fm=jpg&q=80&w=1080";

struct Metric {
    value: &'static str,
    label: &'static str,
    description: &'static str,
}

const METRICS: [Metric; 4] = [
    Metric {
        value: "328k+",
        label: "Components Used",
        description: "~6.3k per week, powering nearly every Entrata product interface and \
                      rocketing the speed of product development.",
    },
    Metric {
        value: "268",
        label: "Unique Components",
        description: "Built using 152 tokenized styles for ultimate consistency.",
    },
    Metric {
        value: "200+",
        label: "Published Updates",
        description: "Around 20 branches merged to improve performance and scale.",
    },
    Metric {
        value: "532",
        label: "Custom SVG Icons",
        description: "70 new additions this year for brand cohesion and clarity.",
    },
];

const CHALLENGES: [&str; 4] = [
    "Inconsistent UI patterns across products",
    "Duplicated components and design work",
    "Slower development cycles",
    "Growing technical and design debt",
];

const PILLARS: [(&str, &str); 4] = [
    ("Component Standardization", "Unified React and Figma components reduced redundant builds and enabled rapid interface updates."),
    ("Tokenized Design Language", "Systematic design tokens ensure consistency across colors, typography, spacing, and more."),
    ("Cross-Discipline Governance", "Design and engineering teams collaborate on component standards and documentation."),
    ("Documentation & Advocacy", "Comprehensive guides and active support empower teams to build confidently."),
];

// Relative monthly component usage, as a percentage of the peak month
const MONTHLY_USAGE: [u32; 12] = [30, 45, 55, 70, 60, 85, 90, 95, 100, 92, 88, 95];
const PEAK_USAGE_THOUSANDS: f64 = 3.28;

const ICONS: [&str; 24] = [
    "Apartments", "Appliances", "Beach Access", "Browser", "Bug", "Bulk Apply",
    "Cat", "Cleaning", "Clubhouse", "First Floor", "Landscaping", "Maintenance",
    "Move Out", "Package", "Piggy Bank", "Remodel", "Robot", "School",
    "Signature", "Three D", "Tools", "View", "Volleyball", "Z Wave On",
];

const OUTCOMES: [&str; 4] = [
    "Reduced time to market by 40–50%",
    "Lowered design debt and engineering redundancy",
    "Unified Entrata's product suite under one cohesive visual system",
    "Freed teams to focus on innovation instead of production work",
];

const GAINS: [(&str, u32); 3] = [
    ("Development Speed", 50),
    ("Design Consistency", 85),
    ("Team Satisfaction", 92),
];

const NEXT_STEPS: [(&str, &str); 3] = [
    ("Token Automation", "Automated design token syncing between Figma and code"),
    ("AI-Assisted Workflows", "Intelligent component generation with Figma Make and Vercel v0"),
    ("Living Infrastructure", "Self-documenting, analytics-driven component evolution"),
];

impl Render for Metric {
    fn render(&self) -> Markup {
        html! {
            article.metric {
                .value { (self.value) }
                h3 { (self.label) }
                p { (self.description) }
            }
        }
    }
}

fn usage_chart() -> Markup {
    html! {
        figure.usage-chart {
            figcaption { "Component Usage Growth" }
            ol.bars {
                @for height in MONTHLY_USAGE {
                    li style=(format!("height: {height}%")) {
                        span { (format!("{:.1}k", f64::from(height) * PEAK_USAGE_THOUSANDS)) }
                    }
                }
            }
            .axis { span { "Jan" } span { "Dec" } }
        }
    }
}

pub fn pattern_library(state: &State) -> Markup {
    let assets = state.assets.as_ref();

    page(state, PATTERN_LIBRARY, "Entrata Pattern Library 2024", html! {
        article.landing {
            section.hero {
                (Image::asset(assets, "design-system.png", "Blueprint background").class("backdrop"))
                span.label { "Case Study" }
                h1 { "Entrata Pattern Library 2024" }
                p.subtitle {
                    "The foundation of Entrata's product experience, built to scale design quality, \
                     speed, and cohesion across the platform."
                }
                p.note { "Below are some of the usage metrics and work carried out in 2024." }
                .metrics.compact {
                    @for metric in &METRICS {
                        .metric { .value { (metric.value) } span { (metric.label) } }
                    }
                }
                a.button href=(LIVE_SYSTEM_URL) target="_blank" rel="noopener noreferrer" {
                    "View Live System"
                }
            }
            section.challenge {
                h2 { "The Challenge: A Fragmented Design Ecosystem" }
                div {
                    p {
                        "As Entrata's platform expanded, multiple product teams were designing in silos. \
                         Without a shared system, we faced inconsistent visuals, duplicated work, and \
                         longer build times."
                    }
                    p {
                        "Each product felt different, making it harder for customers to navigate and harder \
                         for teams to maintain. Design debt was accumulating, and velocity was slowing down."
                    }
                    ul { @for item in CHALLENGES { li { (item) } } }
                }
                (Image::asset(assets, "design-system.png", "Fragmented design"))
            }
            section.solution {
                h2 { "The Solution: Building a Unified Design System" }
                p {
                    "I created a comprehensive pattern library that serves as the single source of truth \
                     for Entrata's design and development teams."
                }
                .grid {
                    @for (title, description) in PILLARS {
                        article { h3 { (title) } p { (description) } }
                    }
                }
            }
            section.impact {
                h2 { "Impact & Metrics" }
                p { "The numbers tell the story of transformation and scale" }
                .metrics { @for metric in &METRICS { (metric) } }
                (usage_chart())
                .icons {
                    h3 { (METRICS[3].value) " Custom Icons" }
                    p { "Unified visual language across all products" }
                    ul {
                        @for (i, name) in ICONS.iter().enumerate() {
                            li {
                                (Image::asset(assets, &format!("svg icons from entrata/{name}.svg"), &format!("Icon {}", i + 1)))
                            }
                        }
                    }
                }
            }
            section.outcomes {
                (Image::external(OUTCOMES_BACKDROP_URL, "Dashboard background").class("backdrop"))
                div {
                    h2 { "Driving Entrata's Product Velocity and Quality" }
                    p { "The Entrata Pattern Library transformed how design and engineering teams build." }
                    ul.checks { @for outcome in OUTCOMES { li { (outcome) } } }
                }
                dl.gains {
                    @for (label, gain) in GAINS {
                        div {
                            dt { (label) }
                            dd { "+" (gain) "%" }
                            meter min="0" max="100" value=(gain) {}
                        }
                    }
                }
            }
            section.next {
                span.label { "Next Evolution" }
                h2 { "What's Next: Automation and Intelligence" }
                p {
                    "The next evolution of the Entrata Pattern Library focuses on automation, \
                     token-driven pipelines, and AI-assisted design workflows."
                }
                .grid {
                    @for (title, description) in NEXT_STEPS {
                        article { h3 { (title) } p { (description) } }
                    }
                }
            }
            nav.back {
                a.back href=(CASE_STUDIES) { "← Back to Case Studies" }
            }
        }
    })
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assets::StaticAssets, content::CaseStudies, Config};

    #[test]
    fn landing_page_lists_metrics_and_icons() {
        let state = State::new(Config::default(), CaseStudies::default(), StaticAssets::new("/assets"));
        let html = pattern_library(&state).into_string();

        for metric in &METRICS {
            assert!(html.contains(metric.label), "{html}");
        }
        assert!(html.contains("/assets/svg%20icons%20from%20entrata/Beach%20Access.svg"), "{html}");
        assert!(html.contains("328.0k"), "{html}");
        assert!(html.contains(r#"href="/case-studies""#), "{html}");
    }
}
