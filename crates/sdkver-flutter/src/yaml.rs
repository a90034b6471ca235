//! Shared YAML access for pubspec.yaml and pubspec.lock.

use sdkver_core::{Result, SdkError};
use yaml_rust2::{Yaml, YamlLoader};

/// Loads the first document of `content`, which must be a mapping.
///
/// An empty stream, or a document that is only `null`, is a decode error.
pub(crate) fn load_document(content: &str, file: &str) -> Result<Yaml> {
    let docs =
        YamlLoader::load_from_str(content).map_err(|e| SdkError::decode(file, e.to_string()))?;

    match docs.into_iter().next() {
        Some(doc @ Yaml::Hash(_)) => Ok(doc),
        None | Some(Yaml::Null) => Err(SdkError::decode(file, "empty document")),
        Some(_) => Err(SdkError::decode(file, "expected a mapping at the top level")),
    }
}

/// Reads the scalar at `doc[section][key]` as text.
///
/// Missing or null nodes are `None`; mappings, lists and booleans are
/// decode errors.
pub(crate) fn sdk_field(
    doc: &Yaml,
    section: &str,
    key: &str,
    file: &str,
) -> Result<Option<String>> {
    let node = &doc[section];
    match node {
        Yaml::Hash(_) => {}
        Yaml::Null | Yaml::BadValue => return Ok(None),
        _ => {
            return Err(SdkError::decode(
                file,
                format!("`{section}` must be a mapping"),
            ));
        }
    }

    match &node[key] {
        Yaml::String(s) | Yaml::Real(s) => Ok(Some(s.clone())),
        Yaml::Integer(i) => Ok(Some(i.to_string())),
        Yaml::Null | Yaml::BadValue => Ok(None),
        _ => Err(SdkError::decode(
            file,
            format!("`{section}.{key}` must be a string"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(content: &str) -> Yaml {
        load_document(content, "test.yaml").unwrap()
    }

    #[test]
    fn test_load_empty_document() {
        for content in ["", "# only a comment\n", "~\n"] {
            let err = load_document(content, "pubspec.yaml").unwrap_err();
            assert_eq!(err.to_string(), "Failed to parse pubspec.yaml: empty document");
        }
    }

    #[test]
    fn test_load_invalid_yaml() {
        let err = load_document("sdks: [unclosed", "pubspec.lock").unwrap_err();
        assert!(matches!(err, SdkError::Decode { ref file, .. } if file == "pubspec.lock"));
    }

    #[test]
    fn test_load_scalar_document() {
        assert!(load_document("just text", "test.yaml").is_err());
    }

    #[test]
    fn test_sdk_field_string() {
        let d = doc("environment:\n  sdk: \">=2.19.6 <3.0.0\"\n");
        assert_eq!(
            sdk_field(&d, "environment", "sdk", "f").unwrap().as_deref(),
            Some(">=2.19.6 <3.0.0")
        );
        assert!(sdk_field(&d, "environment", "flutter", "f").unwrap().is_none());
        assert!(sdk_field(&d, "sdks", "dart", "f").unwrap().is_none());
    }

    #[test]
    fn test_sdk_field_numeric() {
        let d = doc("environment:\n  sdk: 3.0\n  flutter: 3\n");
        assert_eq!(
            sdk_field(&d, "environment", "sdk", "f").unwrap().as_deref(),
            Some("3.0")
        );
        assert_eq!(
            sdk_field(&d, "environment", "flutter", "f").unwrap().as_deref(),
            Some("3")
        );
    }

    #[test]
    fn test_sdk_field_null() {
        let d = doc("environment:\n  sdk:\n");
        assert!(sdk_field(&d, "environment", "sdk", "f").unwrap().is_none());
    }

    #[test]
    fn test_sdk_field_wrong_shape() {
        let d = doc("environment: \"3.0.0\"\n");
        assert!(sdk_field(&d, "environment", "sdk", "f").is_err());

        let d = doc("environment:\n  sdk:\n    min: 3.0.0\n");
        assert!(sdk_field(&d, "environment", "sdk", "f").is_err());
    }
}
