use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Player preferences that narrow the question pool.
///
/// Mirrors the settings document the host application persists, so the field
/// names follow its camelCase shape. An empty selector set places no
/// restriction on that axis.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(rename = "categoriesSelected", default)]
    pub categories_selected: HashSet<String>,
    #[serde(rename = "subCategoriesSelected", default)]
    pub sub_categories_selected: HashSet<String>,
}

impl Settings {
    /// True when neither selector set restricts the pool.
    pub fn is_unrestricted(&self) -> bool {
        self.categories_selected.is_empty() && self.sub_categories_selected.is_empty()
    }

    pub fn with_categories<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            categories_selected: categories.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn with_sub_categories<I, S>(sub_categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sub_categories_selected: sub_categories.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }
}
