//! Resolution of raw generator options into a [`ResolvedConfig`].

use serde::Serialize;
use tracing::debug;

use crate::{
    NamingStyle, RawConfig, Result,
    coerce::{
        DEFAULT_FILE_NAMING_STYLE, FILE_NAMING_STYLE, option_to_bool,
        option_to_file_naming_style, option_to_string,
    },
};

/// Option keys understood by the resolver.
pub mod keys {
    pub const OUTPUT_TO_NEST_JS_RESOURCE_STRUCTURE: &str = "outputToNestJsResourceStructure";
    pub const EXPORT_RELATION_MODIFIER_CLASSES: &str = "exportRelationModifierClasses";
    pub const RE_EXPORT: &str = "reExport";
    pub const CONNECT_DTO_PREFIX: &str = "connectDtoPrefix";
    pub const CREATE_DTO_PREFIX: &str = "createDtoPrefix";
    pub const UPDATE_DTO_PREFIX: &str = "updateDtoPrefix";
    pub const DTO_SUFFIX: &str = "dtoSuffix";
    pub const ENTITY_PREFIX: &str = "entityPrefix";
    pub const ENTITY_SUFFIX: &str = "entitySuffix";
    pub use crate::coerce::FILE_NAMING_STYLE;

    /// Every recognized key.
    pub const ALL: [&str; 10] = [
        OUTPUT_TO_NEST_JS_RESOURCE_STRUCTURE,
        EXPORT_RELATION_MODIFIER_CLASSES,
        RE_EXPORT,
        CONNECT_DTO_PREFIX,
        CREATE_DTO_PREFIX,
        UPDATE_DTO_PREFIX,
        DTO_SUFFIX,
        ENTITY_PREFIX,
        ENTITY_SUFFIX,
        FILE_NAMING_STYLE,
    ];
}

/// Fully-defaulted, validated generator options.
///
/// Serializes with the option key names so it can be spread into the
/// transformation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    pub output_to_nest_js_resource_structure: bool,
    pub export_relation_modifier_classes: bool,
    pub re_export: bool,
    pub connect_dto_prefix: String,
    pub create_dto_prefix: String,
    pub update_dto_prefix: String,
    pub dto_suffix: String,
    pub entity_prefix: String,
    pub entity_suffix: String,
    pub file_naming_style: NamingStyle,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            output_to_nest_js_resource_structure: true,
            export_relation_modifier_classes: true,
            re_export: false,
            connect_dto_prefix: "Connect".to_string(),
            create_dto_prefix: "Create".to_string(),
            update_dto_prefix: "Update".to_string(),
            dto_suffix: "Dto".to_string(),
            entity_prefix: String::new(),
            entity_suffix: String::new(),
            file_naming_style: NamingStyle::Camel,
        }
    }
}

impl ResolvedConfig {
    /// Resolve raw options, applying defaults to anything absent.
    ///
    /// Unrecognized keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfigValue`](crate::Error::InvalidConfigValue)
    /// if `fileNamingStyle` is not a supported style.
    pub fn resolve(raw: &RawConfig) -> Result<Self> {
        for key in unrecognized_keys(raw) {
            debug!(key = %key, "ignoring unrecognized generator option");
        }

        let defaults = Self::default();

        Ok(Self {
            output_to_nest_js_resource_structure: option_to_bool(
                raw.get(keys::OUTPUT_TO_NEST_JS_RESOURCE_STRUCTURE),
                defaults.output_to_nest_js_resource_structure,
            ),
            export_relation_modifier_classes: option_to_bool(
                raw.get(keys::EXPORT_RELATION_MODIFIER_CLASSES),
                defaults.export_relation_modifier_classes,
            ),
            re_export: option_to_bool(raw.get(keys::RE_EXPORT), defaults.re_export),
            connect_dto_prefix: option_to_string(
                raw.get(keys::CONNECT_DTO_PREFIX),
                &defaults.connect_dto_prefix,
            ),
            create_dto_prefix: option_to_string(
                raw.get(keys::CREATE_DTO_PREFIX),
                &defaults.create_dto_prefix,
            ),
            update_dto_prefix: option_to_string(
                raw.get(keys::UPDATE_DTO_PREFIX),
                &defaults.update_dto_prefix,
            ),
            dto_suffix: option_to_string(raw.get(keys::DTO_SUFFIX), &defaults.dto_suffix),
            entity_prefix: option_to_string(raw.get(keys::ENTITY_PREFIX), &defaults.entity_prefix),
            entity_suffix: option_to_string(raw.get(keys::ENTITY_SUFFIX), &defaults.entity_suffix),
            file_naming_style: option_to_file_naming_style(
                raw.get(FILE_NAMING_STYLE),
                DEFAULT_FILE_NAMING_STYLE,
            )?,
        })
    }

    /// Option key and display value for every field, in key order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                keys::OUTPUT_TO_NEST_JS_RESOURCE_STRUCTURE,
                self.output_to_nest_js_resource_structure.to_string(),
            ),
            (
                keys::EXPORT_RELATION_MODIFIER_CLASSES,
                self.export_relation_modifier_classes.to_string(),
            ),
            (keys::RE_EXPORT, self.re_export.to_string()),
            (keys::CONNECT_DTO_PREFIX, self.connect_dto_prefix.clone()),
            (keys::CREATE_DTO_PREFIX, self.create_dto_prefix.clone()),
            (keys::UPDATE_DTO_PREFIX, self.update_dto_prefix.clone()),
            (keys::DTO_SUFFIX, self.dto_suffix.clone()),
            (keys::ENTITY_PREFIX, self.entity_prefix.clone()),
            (keys::ENTITY_SUFFIX, self.entity_suffix.clone()),
            (keys::FILE_NAMING_STYLE, self.file_naming_style.to_string()),
        ]
    }
}

/// Keys of `raw` that the resolver does not recognize.
pub fn unrecognized_keys(raw: &RawConfig) -> impl Iterator<Item = &str> {
    raw.keys().filter(|key| !keys::ALL.iter().any(|known| known == key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, RawOption};

    #[test]
    fn test_empty_config_resolves_to_defaults() {
        let config = ResolvedConfig::resolve(&RawConfig::new()).unwrap();
        assert_eq!(config, ResolvedConfig::default());
        assert!(config.output_to_nest_js_resource_structure);
        assert!(config.export_relation_modifier_classes);
        assert!(!config.re_export);
        assert_eq!(config.connect_dto_prefix, "Connect");
        assert_eq!(config.create_dto_prefix, "Create");
        assert_eq!(config.update_dto_prefix, "Update");
        assert_eq!(config.dto_suffix, "Dto");
        assert_eq!(config.entity_prefix, "");
        assert_eq!(config.entity_suffix, "");
        assert_eq!(config.file_naming_style, NamingStyle::Camel);
    }

    #[test]
    fn test_all_keys_applied() {
        let raw = RawConfig::new()
            .with(keys::OUTPUT_TO_NEST_JS_RESOURCE_STRUCTURE, "false")
            .with(keys::EXPORT_RELATION_MODIFIER_CLASSES, "false")
            .with(keys::RE_EXPORT, "true")
            .with(keys::CONNECT_DTO_PREFIX, "Link")
            .with(keys::CREATE_DTO_PREFIX, "New")
            .with(keys::UPDATE_DTO_PREFIX, "Patch")
            .with(keys::DTO_SUFFIX, "Input")
            .with(keys::ENTITY_PREFIX, "Db")
            .with(keys::ENTITY_SUFFIX, "Entity")
            .with(keys::FILE_NAMING_STYLE, "kebab");

        let config = ResolvedConfig::resolve(&raw).unwrap();

        assert_eq!(
            config,
            ResolvedConfig {
                output_to_nest_js_resource_structure: false,
                export_relation_modifier_classes: false,
                re_export: true,
                connect_dto_prefix: "Link".to_string(),
                create_dto_prefix: "New".to_string(),
                update_dto_prefix: "Patch".to_string(),
                dto_suffix: "Input".to_string(),
                entity_prefix: "Db".to_string(),
                entity_suffix: "Entity".to_string(),
                file_naming_style: NamingStyle::Kebab,
            }
        );
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let raw = RawConfig::new()
            .with("somethingNew", "true")
            .with("output", "../elsewhere");
        assert_eq!(
            ResolvedConfig::resolve(&raw).unwrap(),
            ResolvedConfig::default()
        );
    }

    #[test]
    fn test_invalid_naming_style_aborts() {
        let raw = RawConfig::new()
            .with(keys::RE_EXPORT, "true")
            .with(keys::FILE_NAMING_STYLE, "upper");
        let err = ResolvedConfig::resolve(&raw).unwrap_err();
        assert!(matches!(*err, Error::InvalidConfigValue { .. }));
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let raw = RawConfig::new()
            .with(keys::DTO_SUFFIX, RawOption::from(vec!["Dto", "Ignored"]))
            .with(keys::FILE_NAMING_STYLE, "snake");
        let first = ResolvedConfig::resolve(&raw).unwrap();
        let second = ResolvedConfig::resolve(&raw).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.dto_suffix, "Dto");
    }

    #[test]
    fn test_entries_follow_key_order() {
        let entries = ResolvedConfig::default().entries();
        let names: Vec<_> = entries.iter().map(|(k, _)| *k).collect();
        assert_eq!(names, keys::ALL);
        assert_eq!(entries[2], ("reExport", "false".to_string()));
        assert_eq!(entries[9], ("fileNamingStyle", "camel".to_string()));
    }

    #[test]
    fn test_unrecognized_keys() {
        let raw = RawConfig::new()
            .with(keys::DTO_SUFFIX, "Dto")
            .with("provider", "nestjs-dto")
            .with("futureOption", "x");
        assert_eq!(
            unrecognized_keys(&raw).collect::<Vec<_>>(),
            vec!["provider", "futureOption"]
        );
    }

    #[test]
    fn test_serializes_with_option_names() {
        let json = serde_json::to_value(ResolvedConfig::default()).unwrap();
        for key in keys::ALL {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(json["fileNamingStyle"], "camel");
        assert_eq!(json["reExport"], false);
    }
}
