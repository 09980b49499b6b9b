use kube::{api::DynamicObject, ResourceExt};
use serde_json::Value;
use snafu::Snafu;

/// Why a nested field could not be read as a string.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
#[snafu(context(suffix(false)))]
pub enum FieldError {
    /// The key is absent or set to null.
    #[snafu(display(".{} not found", path))]
    Missing { path: String },

    /// An intermediate value on the path is not a mapping.
    #[snafu(display(".{} is a {}, expected a map", path, found))]
    NotAMap { path: String, found: &'static str },

    /// The value at the path is not a string.
    #[snafu(display(".{} is a {}, expected a string", path, found))]
    NotAString { path: String, found: &'static str },
}

/// A HelmRelease as returned by the API server: its name plus the untyped body.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseDocument {
    name: String,
    data: Value,
}

impl ReleaseDocument {
    /// Create a document from a resource name and its untyped body.
    pub fn new(name: impl Into<String>, data: Value) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// The resource name of the release.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read the string at the given path of the body.
    pub fn string_at(&self, path: &[&str]) -> Result<&str, FieldError> {
        nested_str(&self.data, path)
    }
}

impl From<DynamicObject> for ReleaseDocument {
    fn from(object: DynamicObject) -> Self {
        Self {
            name: object.name_any(),
            data: object.data,
        }
    }
}

/// Walk `path` through nested maps and return the string found at its end.
/// Every step independently reports whether the key was missing or held the wrong type.
pub fn nested_str<'a>(value: &'a Value, path: &[&str]) -> Result<&'a str, FieldError> {
    let mut current = value;
    for (depth, key) in path.iter().enumerate() {
        let Some(map) = current.as_object() else {
            return NotAMap {
                path: join(&path[..depth]),
                found: type_name(current),
            }
            .fail();
        };
        current = match map.get(*key) {
            None | Some(Value::Null) => {
                return Missing {
                    path: join(&path[..=depth]),
                }
                .fail()
            }
            Some(next) => next,
        };
    }
    match current.as_str() {
        Some(string) => Ok(string),
        None => NotAString {
            path: join(path),
            found: type_name(current),
        }
        .fail(),
    }
}

fn join(path: &[&str]) -> String {
    path.join(".")
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "map",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_str_reads_string_leaf() {
        let value = json!({"spec": {"chart": {"name": "redis"}}});
        assert_eq!(nested_str(&value, &["spec", "chart", "name"]), Ok("redis"));
    }

    #[test]
    fn nested_str_reports_missing_key() {
        let value = json!({"spec": {"chart": {}}});
        assert_eq!(
            nested_str(&value, &["spec", "chart", "version"]),
            Err(FieldError::Missing {
                path: "spec.chart.version".to_string()
            })
        );

        let value = json!({});
        assert_eq!(
            nested_str(&value, &["status", "phase"]),
            Err(FieldError::Missing {
                path: "status".to_string()
            })
        );
    }

    #[test]
    fn nested_str_treats_null_as_missing() {
        let value = json!({"status": {"phase": null}});
        assert!(matches!(
            nested_str(&value, &["status", "phase"]),
            Err(FieldError::Missing { .. })
        ));
    }

    #[test]
    fn nested_str_reports_wrong_types() {
        let value = json!({"spec": {"chart": {"version": 1.2}}});
        assert_eq!(
            nested_str(&value, &["spec", "chart", "version"]),
            Err(FieldError::NotAString {
                path: "spec.chart.version".to_string(),
                found: "number",
            })
        );

        let value = json!({"spec": {"chart": ["redis"]}});
        assert_eq!(
            nested_str(&value, &["spec", "chart", "name"]),
            Err(FieldError::NotAMap {
                path: "spec.chart".to_string(),
                found: "sequence",
            })
        );
    }

    #[test]
    fn document_from_dynamic_object() {
        let resource = kube::api::ApiResource {
            group: "helm.fluxcd.io".to_string(),
            version: "v1".to_string(),
            api_version: "helm.fluxcd.io/v1".to_string(),
            kind: "HelmRelease".to_string(),
            plural: "helmreleases".to_string(),
        };
        let object = DynamicObject::new("redis", &resource)
            .within("prod")
            .data(json!({"spec": {"chart": {"version": "1.2.3"}}}));

        let document = ReleaseDocument::from(object);
        assert_eq!(document.name(), "redis");
        assert_eq!(
            document.string_at(&["spec", "chart", "version"]),
            Ok("1.2.3")
        );
    }
}
