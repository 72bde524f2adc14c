use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::debug;

use crate::errors::{ RunnerError, RunnerResult };
use crate::traits::filter::TemplateFilter;

/// Default templating collaborator: `${name}` substitution over UTF-8
/// recipe text. Unresolved placeholders pass through untouched.
#[derive(Debug, Default, Clone)]
pub struct PropertyFilter;

impl TemplateFilter for PropertyFilter {
    fn filter(&self, path: &Path, properties: &HashMap<String, String>) -> RunnerResult<Vec<u8>> {
        let text = fs::read_to_string(path).map_err(|e| RunnerError::Filter {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        if properties.is_empty() {
            return Ok(text.into_bytes());
        }

        let mut filtered = text;
        for (name, value) in properties {
            let placeholder = format!("${{{}}}", name);
            filtered = filtered.replace(&placeholder, value);
        }

        debug!("Filtered {} with {} properties", path.display(), properties.len());
        Ok(filtered.into_bytes())
    }
}
