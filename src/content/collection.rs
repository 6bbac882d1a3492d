use indexmap::IndexMap;
use std::{fs, path::Path};

use super::CaseStudy;
use crate::error::{Error, Result};

const BUNDLED: &str = include_str!("../../data/case-studies.json");

/// Every case study, keyed by id, in the order the data file lists them.
#[derive(Clone, Debug, Default)]
pub struct CaseStudies(IndexMap<String, CaseStudy>);

impl CaseStudies {
    /// The collection compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|source| Error::Read { path: path.to_owned(), source })?;

        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        let map: IndexMap<String, CaseStudy> = serde_json::from_str(contents)?;

        for (key, study) in &map {
            if study.id.is_empty() {
                return Err(Error::EmptyId);
            }
            if *key != study.id {
                return Err(Error::IdMismatch { key: key.clone(), id: study.id.clone() });
            }
        }

        Ok(Self(map))
    }

    pub fn get(&self, id: &str) -> Option<&CaseStudy> {
        self.0.get(id)
    }

    /// Lookup for callers that may not have an id at all.
    pub fn lookup(&self, id: Option<&str>) -> Option<&CaseStudy> {
        self.get(id?)
    }

    pub fn iter(&self) -> indexmap::map::Values<'_, String, CaseStudy> {
        self.0.values()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<CaseStudy> for CaseStudies {
    fn from_iter<I: IntoIterator<Item = CaseStudy>>(studies: I) -> Self {
        let map = studies.into_iter()
            .map(|study| (study.id.clone(), study))
            .collect();

        Self(map)
    }
}
