//! Resolution report.

use sdkver_core::SdkVersion;
use serde::{Deserialize, Deserializer, Serialize};

/// Flutter and Dart SDK versions found across all sources, in reader order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlutterAndDartSdkVersions {
    #[serde(rename = "FlutterSDKVersions", default, deserialize_with = "null_as_empty")]
    pub flutter_sdk_versions: Vec<SdkVersion>,
    #[serde(rename = "DartSDKVersions", default, deserialize_with = "null_as_empty")]
    pub dart_sdk_versions: Vec<SdkVersion>,
}

impl FlutterAndDartSdkVersions {
    pub fn is_empty(&self) -> bool {
        self.flutter_sdk_versions.is_empty() && self.dart_sdk_versions.is_empty()
    }

    /// The Flutter version from the highest-priority source.
    pub fn first_flutter(&self) -> Option<&SdkVersion> {
        self.flutter_sdk_versions.first()
    }

    /// The Dart version from the highest-priority source.
    pub fn first_dart(&self) -> Option<&SdkVersion> {
        self.dart_sdk_versions.first()
    }
}

// Reports written by older tooling use `null` for an empty list.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<SdkVersion>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<SdkVersion>>::deserialize(deserializer)?.unwrap_or_default())
}
