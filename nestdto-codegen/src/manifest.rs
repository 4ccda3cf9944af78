//! Generator manifest announced to the host before any generation request.

use serde::Serialize;

/// Output location used when the host config does not declare one.
pub const DEFAULT_OUTPUT: &str = "../src/generated/nestjs-dto";

/// Display name of the generator.
pub const PRETTY_NAME: &str = "NestJS DTO Generator";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorManifest {
    pub default_output: &'static str,
    pub pretty_name: &'static str,
}

impl Default for GeneratorManifest {
    fn default() -> Self {
        Self {
            default_output: DEFAULT_OUTPUT,
            pretty_name: PRETTY_NAME,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_json() {
        let json = serde_json::to_string(&GeneratorManifest::default()).unwrap();
        assert_eq!(
            json,
            r#"{"defaultOutput":"../src/generated/nestjs-dto","prettyName":"NestJS DTO Generator"}"#
        );
    }
}
