use serde::{Deserialize, Serialize};

/// A single entry from the static question catalog.
///
/// Only `category` and `sub_category` drive filtering. The rest of the payload
/// travels through untouched, and catalog fields this client does not know
/// about are preserved in `extra`.
///
/// Catalogs are hand-edited and key casing varies between entries, so field
/// names are matched case-insensitively on deserialization; serialization
/// always writes the camelCase spellings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawQuestion")]
pub struct Question {
    /// Raw category label, possibly compound ("Science_Biology").
    pub category: String,
    /// Explicit sub-category when the catalog provides one. Blank entries are
    /// backfilled from the compound category when the catalog is loaded.
    #[serde(rename = "subCategory")]
    pub sub_category: String,
    /// Question text shown to the player.
    pub prompt: String,
    pub answers: Vec<String>,
    #[serde(rename = "correctIndex")]
    pub correct_index: Option<usize>,
    /// Catalog fields this client carries but does not interpret.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// Untyped form Question deserializes through. Folding every key to lowercase
// before matching is what makes field names case-insensitive; keys that match
// no known field keep their original spelling in `extra`.
#[derive(Deserialize)]
struct RawQuestion(serde_json::Map<String, serde_json::Value>);

impl TryFrom<RawQuestion> for Question {
    type Error = serde_json::Error;

    fn try_from(raw: RawQuestion) -> Result<Self, Self::Error> {
        use serde::de::Error;

        let mut category: Option<String> = None;
        let mut sub_category = String::new();
        let mut prompt = String::new();
        let mut answers: Vec<String> = Vec::new();
        let mut correct_index: Option<usize> = None;
        let mut extra = serde_json::Map::new();

        for (key, value) in raw.0 {
            match key.to_ascii_lowercase().as_str() {
                "category" => category = Some(serde_json::from_value(value)?),
                "subcategory" | "sub_category" => sub_category = value_or_default(value)?,
                "prompt" => prompt = value_or_default(value)?,
                "answers" => answers = value_or_default(value)?,
                "correctindex" | "correct_index" => correct_index = serde_json::from_value(value)?,
                _ => {
                    extra.insert(key, value);
                }
            }
        }

        let category = match category {
            Some(category) => category,
            None => return Err(Error::missing_field("category")),
        };

        Ok(Question {
            category,
            sub_category,
            prompt,
            answers,
            correct_index,
            extra,
        })
    }
}

// Helper to treat explicit nulls like absent fields
fn value_or_default<T>(value: serde_json::Value) -> Result<T, serde_json::Error>
where
    T: serde::de::DeserializeOwned + Default,
{
    if value.is_null() {
        Ok(T::default())
    } else {
        serde_json::from_value(value)
    }
}

impl Question {
    /// Split the raw category on the first underscore into (main, sub), with
    /// whitespace trimmed from both halves. A label without a delimiter yields
    /// the whole trimmed label as main and an empty sub.
    pub fn category_parts(&self) -> (&str, &str) {
        match self.category.split_once('_') {
            Some((main, sub)) => (main.trim(), sub.trim()),
            None => (self.category.trim(), ""),
        }
    }

    /// The sub-category used for matching: the explicit field when it is
    /// non-blank, otherwise the sub half of the compound category.
    pub fn effective_sub_category(&self) -> &str {
        if self.sub_category.trim().is_empty() {
            self.category_parts().1
        } else {
            &self.sub_category
        }
    }

    /// Persist the derived sub-category on entries that arrived without one.
    /// Runs once per question during catalog load, so later reads see the
    /// filled-in field instead of a blank.
    pub(crate) fn backfill_sub_category(&mut self) {
        if !self.sub_category.trim().is_empty() {
            return;
        }
        let sub = self.category_parts().1.to_string();
        if !sub.is_empty() {
            self.sub_category = sub;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(category: &str, sub_category: &str) -> Question {
        Question {
            category: category.to_string(),
            sub_category: sub_category.to_string(),
            prompt: String::new(),
            answers: Vec::new(),
            correct_index: None,
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn test_category_parts() {
        assert_eq!(
            question("Science_Biology", "").category_parts(),
            ("Science", "Biology")
        );
        assert_eq!(question("History", "").category_parts(), ("History", ""));
        assert_eq!(
            question(" Science _ Biology ", "").category_parts(),
            ("Science", "Biology")
        );
        // Only the first underscore delimits; the rest stays in the sub half
        assert_eq!(
            question("Movies_Sci_Fi", "").category_parts(),
            ("Movies", "Sci_Fi")
        );
        assert_eq!(question("Science_", "").category_parts(), ("Science", ""));
        assert_eq!(question("", "").category_parts(), ("", ""));
    }

    #[test]
    fn test_effective_sub_category() {
        // Explicit field wins, even over a compound category
        assert_eq!(
            question("Science_Biology", "Chemistry").effective_sub_category(),
            "Chemistry"
        );
        // Blank field falls back to the compound's sub half
        assert_eq!(
            question("Science_Biology", "").effective_sub_category(),
            "Biology"
        );
        assert_eq!(
            question("Science_Biology", "   ").effective_sub_category(),
            "Biology"
        );
        assert_eq!(question("History", "").effective_sub_category(), "");
    }

    #[test]
    fn test_backfill_sub_category() {
        let mut q = question("Science_Biology", "");
        q.backfill_sub_category();
        assert_eq!(q.sub_category, "Biology");

        // Explicit values are never overwritten
        let mut q = question("Science_Biology", "Chemistry");
        q.backfill_sub_category();
        assert_eq!(q.sub_category, "Chemistry");

        // Nothing to derive from a plain category
        let mut q = question("History", "");
        q.backfill_sub_category();
        assert_eq!(q.sub_category, "");
    }

    #[test]
    fn test_deserialize_matches_field_names_case_insensitively() {
        // One record, four spellings
        let camel: Question = serde_json::from_str(
            r#"{
                "category": "Science_Biology",
                "subCategory": "Biology",
                "prompt": "What is the powerhouse of the cell?",
                "answers": ["Mitochondria", "Nucleus", "Ribosome"],
                "correctIndex": 0
            }"#,
        )
        .unwrap();
        let pascal: Question = serde_json::from_str(
            r#"{
                "Category": "Science_Biology",
                "SubCategory": "Biology",
                "Prompt": "What is the powerhouse of the cell?",
                "Answers": ["Mitochondria", "Nucleus", "Ribosome"],
                "CorrectIndex": 0
            }"#,
        )
        .unwrap();
        let upper: Question = serde_json::from_str(
            r#"{
                "CATEGORY": "Science_Biology",
                "SUBCATEGORY": "Biology",
                "PROMPT": "What is the powerhouse of the cell?",
                "ANSWERS": ["Mitochondria", "Nucleus", "Ribosome"],
                "CORRECTINDEX": 0
            }"#,
        )
        .unwrap();
        let snake: Question = serde_json::from_str(
            r#"{
                "category": "Science_Biology",
                "sub_category": "Biology",
                "prompt": "What is the powerhouse of the cell?",
                "answers": ["Mitochondria", "Nucleus", "Ribosome"],
                "correct_index": 0
            }"#,
        )
        .unwrap();

        assert_eq!(camel.category, "Science_Biology");
        assert_eq!(camel.sub_category, "Biology");
        assert_eq!(camel.answers.len(), 3);
        assert_eq!(camel.correct_index, Some(0));
        assert_eq!(camel, pascal);
        assert_eq!(camel, upper);
        assert_eq!(camel, snake);
    }

    #[test]
    fn test_deserialize_mixed_casing_across_a_catalog() {
        // One oddly-cased entry must not spoil the rest of the catalog
        let catalog: Vec<Question> = serde_json::from_str(
            r#"[
                {"category": "History"},
                {"CATEGORY": "Science_Biology", "CoRrEcTiNdEx": 1}
            ]"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].category, "History");
        assert_eq!(catalog[1].category, "Science_Biology");
        assert_eq!(catalog[1].correct_index, Some(1));
    }

    #[test]
    fn test_deserialize_preserves_unknown_fields() {
        let q: Question = serde_json::from_str(
            r#"{"category": "Geography", "Difficulty": "easy", "points": 10}"#,
        )
        .unwrap();
        assert_eq!(q.extra.get("Difficulty").and_then(|v| v.as_str()), Some("easy"));
        assert_eq!(q.extra.get("points").and_then(|v| v.as_i64()), Some(10));

        let round_tripped = serde_json::to_value(&q).unwrap();
        assert_eq!(round_tripped["category"], "Geography");
        assert_eq!(round_tripped["Difficulty"], "easy");
        assert_eq!(round_tripped["points"], 10);
    }

    #[test]
    fn test_deserialize_minimal_entry() {
        let q: Question = serde_json::from_str(r#"{"category": "Sports"}"#).unwrap();
        assert_eq!(q.category, "Sports");
        assert_eq!(q.sub_category, "");
        assert!(q.answers.is_empty());
        assert_eq!(q.correct_index, None);
        assert!(q.extra.is_empty());
    }

    #[test]
    fn test_deserialize_treats_null_fields_as_absent() {
        let q: Question = serde_json::from_str(
            r#"{"category": "Sports", "subCategory": null, "answers": null, "correctIndex": null}"#,
        )
        .unwrap();
        assert_eq!(q.sub_category, "");
        assert!(q.answers.is_empty());
        assert_eq!(q.correct_index, None);
    }

    #[test]
    fn test_deserialize_requires_a_category() {
        let err = serde_json::from_str::<Question>(r#"{"prompt": "No category"}"#).unwrap_err();
        assert!(err.to_string().contains("category"));
    }
}
