use maud::{html, Markup, Render};

use crate::{assets::AssetResolver, content::CaseStudy, ui::image::Image};

pub fn detail_path(id: &str) -> String {
    format!("/case-studies/{}", urlencoding::encode(id))
}

pub struct Tags<'a>(pub &'a [String]);

impl<'a> Render for Tags<'a> {
    fn render(&self) -> Markup {
        html! {
            ul.tags {
                @for tag in self.0 {
                    li.tag { (tag) }
                }
            }
        }
    }
}

/// Summary of one case study for the listing page.
pub struct CaseStudyCard<'a> {
    study: &'a CaseStudy,
    assets: &'a dyn AssetResolver,
}

impl<'a> CaseStudyCard<'a> {
    pub fn new(study: &'a CaseStudy, assets: &'a dyn AssetResolver) -> Self {
        Self { study, assets }
    }
}

impl<'a> Render for CaseStudyCard<'a> {
    fn render(&self) -> Markup {
        let study = self.study;

        html! {
            c-card data-case-study=(study.id) {
                .card-image {
                    (Image::asset(self.assets, &study.hero_image, &study.title))
                }
                header {
                    (Tags(&study.tags))
                    h2 { (study.title) }
                }
                p { (study.tldr) }
                footer {
                    a.button href=(detail_path(&study.id)) { "View Case Study" }
                }
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::StaticAssets;

    fn study() -> CaseStudy {
        serde_json::from_value(serde_json::json!({
            "id": "checkout flow",
            "title": "Checkout",
            "subtitle": "",
            "tldr": "Made paying easy.",
            "role": "", "timeline": "", "team": "",
            "tags": ["Mobile", "Mobile", "Fintech"],
            "heroImage": "checkout.png",
            "problemImage": "", "solutionImage": "",
            "problem": "", "solution": "", "impact": "",
            "learnings": "", "whatsNext": ""
        })).unwrap()
    }

    #[test]
    fn card_links_to_escaped_detail_path() {
        let assets = StaticAssets::new("/assets");
        let study = study();
        let html = CaseStudyCard::new(&study, &assets).render().into_string();

        assert!(html.contains(r#"href="/case-studies/checkout%20flow""#), "{html}");
        assert!(html.contains("<h2>Checkout</h2>"), "{html}");
        assert!(html.contains("Made paying easy."), "{html}");
        assert!(html.contains(r#"src="/assets/checkout.png""#), "{html}");
    }

    #[test]
    fn tags_keep_order_and_duplicates() {
        let study = study();
        let html = Tags(&study.tags).render().into_string();

        assert_eq!(html.matches("Mobile").count(), 2);
        assert!(html.find("Mobile").unwrap() < html.find("Fintech").unwrap());
    }
}
