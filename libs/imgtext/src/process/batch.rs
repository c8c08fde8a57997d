use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::types::ExtractionResult;

/// Per-image outcomes of a batch, keyed by path in input order.
#[derive(Clone, Debug, Default)]
pub struct BatchResults {
    entries: Vec<(PathBuf, Option<ExtractionResult>)>,
    index: HashMap<PathBuf, usize>,
}

impl BatchResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome for `path`. A path seen before keeps its position
    /// and takes the new outcome.
    pub fn insert(&mut self, path: PathBuf, result: Option<ExtractionResult>) {
        match self.index.get(&path) {
            Some(&position) => self.entries[position].1 = result,
            None => {
                self.index.insert(path.clone(), self.entries.len());
                self.entries.push((path, result));
            }
        }
    }

    /// `None` when the path is not part of the batch, `Some(None)` when it
    /// failed.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<Option<&ExtractionResult>> {
        self.index
            .get(path.as_ref())
            .map(|&position| self.entries[position].1.as_ref())
    }

    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.get(path).is_some()
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(|(path, _)| path.as_path())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Path, Option<&ExtractionResult>)> {
        self.entries
            .iter()
            .map(|(path, result)| (path.as_path(), result.as_ref()))
    }

    pub fn succeeded(&self) -> usize {
        self.entries.iter().filter(|(_, result)| result.is_some()).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for BatchResults {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (path, result) in &self.entries {
            map.serialize_entry(&path.display().to_string(), result)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image2text::OcrModel;

    fn result(text: &str) -> ExtractionResult {
        ExtractionResult {
            text: text.to_string(),
            language: "eng".to_string(),
            confidence: 1.0,
            engine: OcrModel::Tesseract,
        }
    }

    #[test]
    fn test_keeps_input_order() {
        let mut batch = BatchResults::new();
        batch.insert("b.png".into(), None);
        batch.insert("a.png".into(), Some(result("hello")));
        batch.insert("c.png".into(), None);

        let paths: Vec<&Path> = batch.paths().collect();
        assert_eq!(paths, vec![Path::new("b.png"), Path::new("a.png"), Path::new("c.png")]);
        assert_eq!(batch.succeeded(), 1);
        assert_eq!(batch.get("a.png"), Some(Some(&result("hello"))));
        assert_eq!(batch.get("b.png"), Some(None));
        assert_eq!(batch.get("z.png"), None);
    }

    #[test]
    fn test_repeated_path_keeps_first_position_and_last_outcome() {
        let mut batch = BatchResults::new();
        batch.insert("a.png".into(), Some(result("first")));
        batch.insert("b.png".into(), None);
        batch.insert("a.png".into(), None);

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.paths().next(), Some(Path::new("a.png")));
        assert_eq!(batch.get("a.png"), Some(None));
    }

    #[test]
    fn test_large_batch_lookups() {
        let mut batch = BatchResults::new();
        for i in 0..10_000 {
            batch.insert(PathBuf::from(format!("page-{}.png", i)), None);
        }
        batch.insert("page-42.png".into(), Some(result("found")));

        assert_eq!(batch.len(), 10_000);
        assert_eq!(batch.paths().nth(42), Some(Path::new("page-42.png")));
        assert_eq!(batch.get("page-42.png").flatten().map(|r| r.text.as_str()), Some("found"));
        assert_eq!(batch.get("page-9999.png"), Some(None));
        assert_eq!(batch.succeeded(), 1);
    }

    #[test]
    fn test_serializes_as_object() {
        let mut batch = BatchResults::new();
        batch.insert("a.png".into(), Some(result("hi")));
        batch.insert("b.png".into(), None);

        let json = serde_json::to_value(&batch).unwrap();
        assert_eq!(json["a.png"]["text"], "hi");
        assert_eq!(json["a.png"]["engine"], "tesseract");
        assert!(json["b.png"].is_null());
    }
}
