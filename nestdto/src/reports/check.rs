//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from resolving a generator config.
#[derive(Debug)]
pub struct CheckReport {
    /// Generator config file that was checked.
    pub config_path: PathBuf,

    /// Resolved output directory.
    pub output_dir: PathBuf,

    /// Resolved options as (key, value) pairs.
    pub options: Vec<(String, String)>,

    /// Option keys that are not recognized and will be ignored.
    pub ignored: Vec<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for key in &self.ignored {
            out.warning(&format!("unrecognized option '{}' is ignored", key));
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();

        out.key_value("Output", &self.output_dir.display().to_string());
        out.newline();

        out.section("Options");
        for (key, value) in &self.options {
            out.key_value_indented(key, &format!("{:?}", value));
        }
    }
}
