use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// A license name or expression, e.g. `MIT` or `(MIT OR Apache-2.0)`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct License {
    name: String,
}

impl License {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// License text found on disk for a package without a usable license name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseFile {
    path: PathBuf,
    content: String,
}

impl LicenseFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// The shapes a package manifest license field is found in.
///
/// npm manifests carry `license` as a string or `{ "type": ... }` object and
/// the deprecated `licenses` as a list of either. Decoding goes through
/// [`serde_json::Value`] so an unexpected shape degrades to `Absent`
/// instead of failing the whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub enum LicenseField {
    #[default]
    Absent,
    Single(String),
    SingleObject(String),
    ListOfNames(Vec<String>),
    ListOfObjects(Vec<String>),
}

impl From<Value> for LicenseField {
    fn from(value: Value) -> Self {
        match value {
            Value::String(name) => LicenseField::Single(name),
            Value::Object(_) => match license_type(&value) {
                Some(name) => LicenseField::SingleObject(name),
                None => LicenseField::Absent,
            },
            Value::Array(items) if items.is_empty() => LicenseField::Absent,
            Value::Array(items) => {
                if let Some(names) = items.iter().map(license_type).collect::<Option<Vec<_>>>() {
                    LicenseField::ListOfObjects(names)
                } else if let Some(names) = items
                    .iter()
                    .map(|item| item.as_str().map(str::to_string))
                    .collect::<Option<Vec<_>>>()
                {
                    LicenseField::ListOfNames(names)
                } else {
                    LicenseField::Absent
                }
            }
            _ => LicenseField::Absent,
        }
    }
}

fn license_type(value: &Value) -> Option<String> {
    value.get("type")?.as_str().map(str::to_string)
}

impl LicenseField {
    /// Resolves the `licenses` and `license` manifest fields into license names.
    ///
    /// Shapes are tried in a fixed order: list of objects and list of
    /// names from `licenses`, then a single object and a single name from
    /// `license`. The first match wins; nothing matching yields an empty list.
    pub fn resolve(licenses: &LicenseField, license: &LicenseField) -> Vec<License> {
        match (licenses, license) {
            (LicenseField::ListOfObjects(names), _) | (LicenseField::ListOfNames(names), _) => {
                names.iter().map(License::new).collect()
            }
            (_, LicenseField::SingleObject(name)) | (_, LicenseField::Single(name)) => {
                vec![License::new(name)]
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn names(licenses: Vec<License>) -> Vec<String> {
        licenses.into_iter().map(|l| l.name().to_string()).collect()
    }

    #[test]
    fn test_decode_single_string() {
        let field: LicenseField = serde_json::from_value(json!("MIT")).unwrap();
        assert_eq!(field, LicenseField::Single("MIT".to_string()));
    }

    #[test]
    fn test_decode_single_object() {
        let value = json!({"type": "ISC", "url": "https://opensource.org/licenses/ISC"});
        let field: LicenseField = serde_json::from_value(value).unwrap();
        assert_eq!(field, LicenseField::SingleObject("ISC".to_string()));
    }

    #[test]
    fn test_decode_list_of_objects() {
        let field: LicenseField =
            serde_json::from_value(json!([{"type": "MIT"}, {"type": "Apache-2.0"}])).unwrap();
        assert_eq!(
            field,
            LicenseField::ListOfObjects(vec!["MIT".to_string(), "Apache-2.0".to_string()])
        );
    }

    #[test]
    fn test_decode_list_of_names() {
        let field: LicenseField = serde_json::from_value(json!(["MIT", "BSD-3-Clause"])).unwrap();
        assert_eq!(
            field,
            LicenseField::ListOfNames(vec!["MIT".to_string(), "BSD-3-Clause".to_string()])
        );
    }

    #[test]
    fn test_decode_unexpected_shapes_are_absent() {
        for value in [json!(null), json!(42), json!({"url": "x"}), json!([1, 2]), json!([])] {
            let field: LicenseField = serde_json::from_value(value).unwrap();
            assert_eq!(field, LicenseField::Absent);
        }
    }

    #[test]
    fn test_resolve_prefers_list_field() {
        let licenses = LicenseField::ListOfObjects(vec!["MIT".to_string()]);
        let license = LicenseField::Single("GPL-2.0".to_string());
        assert_eq!(names(LicenseField::resolve(&licenses, &license)), vec!["MIT"]);

        let licenses = LicenseField::ListOfNames(vec!["BSD-2-Clause".to_string()]);
        assert_eq!(
            names(LicenseField::resolve(&licenses, &license)),
            vec!["BSD-2-Clause"]
        );
    }

    #[test]
    fn test_resolve_falls_back_to_single_field() {
        let object = LicenseField::SingleObject("ISC".to_string());
        assert_eq!(names(LicenseField::resolve(&LicenseField::Absent, &object)), vec!["ISC"]);

        let single = LicenseField::Single("(MIT OR Apache-2.0)".to_string());
        assert_eq!(
            names(LicenseField::resolve(&LicenseField::Absent, &single)),
            vec!["(MIT OR Apache-2.0)"]
        );
    }

    #[test]
    fn test_resolve_nothing_matches() {
        assert!(LicenseField::resolve(&LicenseField::Absent, &LicenseField::Absent).is_empty());
        // A single value in `licenses` is not one of the recognised shapes
        let licenses = LicenseField::Single("MIT".to_string());
        assert!(LicenseField::resolve(&licenses, &LicenseField::Absent).is_empty());
    }
}
