use serde::Deserialize;

/// The four free-text inputs a search is built from.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchQuery {
    pub term: String,
    pub location: String,
    pub platform: String,
    pub site: String,
}

/// Per-invocation replacements for configured query terms; `None` keeps the configured value.
#[derive(Debug, Default)]
pub struct QueryOverrides {
    pub term: Option<String>,
    pub location: Option<String>,
    pub platform: Option<String>,
    pub site: Option<String>,
}

impl SearchQuery {
    pub fn apply_overrides(&mut self, overrides: QueryOverrides) {
        if let Some(term) = overrides.term {
            self.term = term;
        }
        if let Some(location) = overrides.location {
            self.location = location;
        }
        if let Some(platform) = overrides.platform {
            self.platform = platform;
        }
        if let Some(site) = overrides.site {
            self.site = site;
        }
    }

    /// Builds `site:<site> "<term>" "<location>" "<platform>"`.
    ///
    /// Inputs are not escaped, a double quote inside a term ends up in the query as is.
    pub fn build(&self) -> String {
        format!(
            r#"site:{} "{}" "{}" "{}""#,
            self.site, self.term, self.location, self.platform
        )
    }
}
