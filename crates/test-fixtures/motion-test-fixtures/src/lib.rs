//! Named keyframe fixtures, resolved through `fixtures/manifest.json`.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

const FIXTURE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../../fixtures");

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    serde_json::from_str(include_str!("../../../../fixtures/manifest.json"))
        .expect("fixture manifest is valid JSON")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    records: HashMap<String, RecordEntry>,
    configs: HashMap<String, String>,
}

/// A record list, optionally paired with the frame time of each record.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecordEntry {
    File(String),
    Track {
        path: String,
        #[serde(default)]
        frames: Option<Vec<f32>>,
    },
}

impl RecordEntry {
    fn file(&self) -> &str {
        match self {
            RecordEntry::File(path) | RecordEntry::Track { path, .. } => path,
        }
    }
}

fn locate(file: &str) -> PathBuf {
    Path::new(FIXTURE_DIR).join(file)
}

fn text_of(file: &str) -> Result<String> {
    let path = locate(file);
    fs::read_to_string(&path).with_context(|| format!("reading fixture {}", path.display()))
}

fn parse_file<T: DeserializeOwned>(file: &str) -> Result<T> {
    serde_json::from_str(&text_of(file)?).with_context(|| format!("parsing fixture {file}"))
}

fn sorted_names<T>(section: &HashMap<String, T>) -> Vec<String> {
    let mut names: Vec<_> = section.keys().cloned().collect();
    names.sort();
    names
}

/// Record lists (`TransformRecord` JSON arrays or single records).
pub mod records {
    use super::*;

    fn entry(name: &str) -> Result<&'static RecordEntry> {
        MANIFEST
            .records
            .get(name)
            .with_context(|| format!("no record fixture named '{name}'"))
    }

    pub fn keys() -> Vec<String> {
        sorted_names(&MANIFEST.records)
    }

    pub fn json(name: &str) -> Result<String> {
        text_of(entry(name)?.file())
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        parse_file(entry(name)?.file())
    }

    /// Frame time of each record, when the fixture is a track.
    pub fn frames(name: &str) -> Result<Option<Vec<f32>>> {
        Ok(match entry(name)? {
            RecordEntry::Track { frames, .. } => frames.clone(),
            RecordEntry::File(_) => None,
        })
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        Ok(locate(entry(name)?.file()))
    }
}

/// Timeline configs (`KeyframeConfig` JSON).
pub mod configs {
    use super::*;

    fn file(name: &str) -> Result<&'static str> {
        MANIFEST
            .configs
            .get(name)
            .map(String::as_str)
            .with_context(|| format!("no config fixture named '{name}'"))
    }

    pub fn keys() -> Vec<String> {
        sorted_names(&MANIFEST.configs)
    }

    pub fn json(name: &str) -> Result<String> {
        text_of(file(name)?)
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        parse_file(file(name)?)
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        Ok(locate(file(name)?))
    }
}
