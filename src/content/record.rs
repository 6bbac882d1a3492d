use serde::Deserialize;

use super::markup::{self, Block};

const DOCUMENT_EXTENSION: &str = ".pdf";

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub tldr: String,
    pub role: String,
    pub timeline: String,
    pub team: String,
    #[serde(default)]
    pub tags: Vec<String>,

    pub hero_image: String,
    pub problem_image: String,
    pub solution_image: String,

    pub problem: String,
    pub solution: String,
    pub impact: String,
    pub learnings: String,
    pub whats_next: String,

    pub solution_url: Option<String>,
    #[serde(default)]
    pub solution_button_text: String,
}

/// Where the solution button points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolutionLink<'a> {
    /// A document bundled with the site assets.
    Asset(&'a str),
    External(&'a str),
}

impl CaseStudy {
    pub fn problem_blocks(&self) -> Vec<Block> {
        markup::parse(&self.problem)
    }

    pub fn solution_blocks(&self) -> Vec<Block> {
        markup::parse(&self.solution)
    }

    pub fn impact_blocks(&self) -> Vec<Block> {
        markup::parse(&self.impact)
    }

    pub fn learnings_blocks(&self) -> Vec<Block> {
        markup::parse(&self.learnings)
    }

    pub fn whats_next_blocks(&self) -> Vec<Block> {
        markup::parse(&self.whats_next)
    }

    pub fn solution_link(&self) -> Option<SolutionLink<'_>> {
        let url = self.solution_url.as_deref()?;

        if url.ends_with(DOCUMENT_EXTENSION) {
            Some(SolutionLink::Asset(url))
        } else {
            Some(SolutionLink::External(url))
        }
    }
}
