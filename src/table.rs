use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;

use crate::{CodonError, Result, util::default_table_path};

/// One amino-acid category and the codons that encode it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Category {
    name:  String,
    codes: Vec<String>,
}

/// Read-only mapping from category name to its set of codon codes.
///
/// Categories keep the order in which they appear in the source document.
/// Classification scans them in that order and stops at the first hit, and
/// construction rejects any code listed under two categories, so the scan
/// order never changes the outcome for a validated table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodonTable {
    categories: Vec<Category>,
}

impl CodonTable {
    /// Builds a table from `(category, codes)` pairs, in iteration order.
    ///
    /// # Returns
    ///
    /// * `Err(CodonError::EmptyTable)` – No categories were given.
    /// * `Err(CodonError::AmbiguousCodeTable)` – A code belongs to two categories.
    pub fn from_categories<I, N, C, S>(categories: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let categories: Vec<Category> = categories
            .into_iter()
            .map(|(name, codes)| Category {
                name:  name.into(),
                codes: codes.into_iter().map(Into::into).collect(),
            })
            .collect();

        let table = Self { categories };
        table.validate()?;
        Ok(table)
    }

    /// Parses a JSON object whose keys are category names and whose values
    /// are arrays of codon strings.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Object(map) = value else {
            return Err(CodonError::MalformedTable {
                reason: "top level is not an object".into(),
            });
        };

        let mut categories = Vec::with_capacity(map.len());
        for (name, codes) in map {
            let Value::Array(codes) = codes else {
                return Err(CodonError::MalformedTable {
                    reason: format!("codes of {name} are not an array"),
                });
            };
            let codes = codes
                .into_iter()
                .map(|code| match code {
                    Value::String(s) => Ok(s),
                    other => Err(CodonError::MalformedTable {
                        reason: format!("code {other} of {name} is not a string"),
                    }),
                })
                .collect::<Result<Vec<_>>>()?;
            categories.push((name, codes));
        }

        Self::from_categories(categories)
    }

    /// Reads and parses the table stored at `path`.
    ///
    /// A missing file maps to `ResourceNotFound`, every other I/O failure to
    /// `ResourceReadError`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let _span = tracing::debug_span!("load_table", path = %path.display()).entered();

        let text = std::fs::read_to_string(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => CodonError::ResourceNotFound {
                path: path.to_path_buf(),
            },
            _ => CodonError::ResourceReadError {
                path:   path.to_path_buf(),
                reason: err.to_string(),
            },
        })?;

        let table = Self::from_json_str(&text)?;
        tracing::debug!(categories = table.len(), "codon table loaded");
        Ok(table)
    }

    /// Loads the standard genetic code bundled with the crate.
    pub fn load_default() -> Result<Self> {
        Self::load(default_table_path())
    }

    /// Looks up the category of one codon.
    ///
    /// # Arguments
    ///
    /// * `code` – Codon to classify, compared verbatim against the table codes.
    ///
    /// # Returns
    ///
    /// * `Some(category)` – The first category, in table order, listing `code`.
    /// * `None` – No category lists `code`.
    pub fn classify(&self, code: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.codes.iter().any(|k| k == code))
            .map(|c| c.name.as_str())
    }

    /// Category names in table order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    /// Codes listed under `category`, if the category exists.
    pub fn codes(&self, category: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.codes.as_slice())
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Always `false` for a table built through the public constructors.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            return Err(CodonError::EmptyTable);
        }

        let mut owner: HashMap<&str, &str> = HashMap::new();
        for category in &self.categories {
            for code in &category.codes {
                match owner.insert(code.as_str(), category.name.as_str()) {
                    // Repeating a code inside one category is harmless
                    Some(first) if first != category.name.as_str() => {
                        return Err(CodonError::AmbiguousCodeTable {
                            code:   code.clone(),
                            first:  first.to_string(),
                            second: category.name.clone(),
                        });
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }
}
