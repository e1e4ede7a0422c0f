use serde::{Deserialize, Serialize};

/// Declares which fields and relations a resource type lets clients touch.
///
/// The first list holds field names that may be omitted from results, the
/// second relation names that may be eager-loaded. Skip fields matching
/// neither list are dropped during refinement.
pub trait FieldPolicy {
    /// Returns `(omittable field names, preloadable relation names)`.
    fn skip_fields(&self) -> (Vec<String>, Vec<String>);
}

/// Static allow-list policy.
///
/// Serde-able so per-resource policies can live in configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowList {
    /// Field names clients may omit from the result
    #[serde(default)]
    pub omittable: Vec<String>,
    /// Relation names clients may eager-load
    #[serde(default)]
    pub preloadable: Vec<String>,
}

impl AllowList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_omittable<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.omittable.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn with_preloadable<I, S>(mut self, relations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preloadable.extend(relations.into_iter().map(Into::into));
        self
    }
}

impl FieldPolicy for AllowList {
    fn skip_fields(&self) -> (Vec<String>, Vec<String>) {
        (self.omittable.clone(), self.preloadable.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_accumulates_names() {
        let policy = AllowList::new()
            .with_omittable(["password"])
            .with_omittable(["email"])
            .with_preloadable(["comments"]);

        let (omittable, preloadable) = policy.skip_fields();
        assert_eq!(omittable, ["password", "email"]);
        assert_eq!(preloadable, ["comments"]);
    }

    #[test]
    fn test_deserializes_with_missing_lists() {
        let policy: AllowList = serde_json::from_str(r#"{"omittable": ["password"]}"#).unwrap();
        assert_eq!(policy.omittable, ["password"]);
        assert!(policy.preloadable.is_empty());
    }
}
