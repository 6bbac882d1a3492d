use maud::{html, Markup, Render};

use crate::assets::AssetResolver;

pub const PLACEHOLDER: &str = "data:image/svg+xml;utf8,\
<svg xmlns='http://www.w3.org/2000/svg' width='88' height='88' viewBox='0 0 88 88'>\
<rect x='16' y='16' width='56' height='56' rx='6' fill='none' stroke='%23999' stroke-width='3.7' opacity='.3'/>\
<path d='m16 58 16-18 32 32' fill='none' stroke='%23999' stroke-width='3.7' opacity='.3'/>\
<circle cx='53' cy='35' r='7' fill='none' stroke='%23999' stroke-width='3.7' opacity='.3'/></svg>";

// Swap to the placeholder once; clearing the handler first prevents retries
const ON_ERROR: &str = "this.onerror=null;this.src=this.dataset.fallback;this.classList.add('fallback')";

/// An image that shows a placeholder instead of a broken reference.
pub struct Image<'a> {
    src: Option<String>,
    alt: &'a str,
    class: Option<&'a str>,
}

impl<'a> Image<'a> {
    pub fn asset(assets: &dyn AssetResolver, name: &str, alt: &'a str) -> Self {
        Self { src: assets.resolve(name), alt, class: None }
    }

    pub fn external(url: &str, alt: &'a str) -> Self {
        Self { src: Some(url.to_owned()), alt, class: None }
    }

    pub fn class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }
}

impl<'a> Render for Image<'a> {
    fn render(&self) -> Markup {
        html! {
            @match &self.src {
                Some(src) => {
                    img
                        src=(src)
                        alt=(self.alt)
                        class=[self.class]
                        loading="lazy"
                        data-fallback=(PLACEHOLDER)
                        onerror=(ON_ERROR);
                }
                None => {
                    @let class = match self.class {
                        Some(class) => format!("{class} fallback"),
                        None => "fallback".to_owned(),
                    };

                    img
                        src=(PLACEHOLDER)
                        alt=(self.alt)
                        class=(class)
                        data-original-missing="true";
                }
            }
        }
    }
}
