use repolens_protocol::RawAnalysisPayload;
use std::collections::HashSet;

pub const MAX_CORE_FRONTEND_COMPONENTS: usize = 30;
pub const MAX_CORE_FRONTEND_PAGES: usize = 20;

/// Last `/`-separated segment of a path.
pub fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Core component names across every shape group, first occurrence wins.
pub(crate) fn core_components(raw: &RawAnalysisPayload) -> Vec<String> {
    let mut names = UniqueNames::default();

    names.extend(raw.controllers.iter().map(|c| c.name.as_str()));
    names.extend(raw.models.iter().map(|m| m.name.as_str()));
    names.extend(raw.services.iter().map(|s| s.name.as_str()));

    if let Some(fe) = raw.primary_frontend() {
        names.extend(
            fe.components
                .iter()
                .map(|path| basename(path))
                .take(MAX_CORE_FRONTEND_COMPONENTS),
        );
        names.extend(
            fe.pages
                .iter()
                .map(|path| basename(path))
                .take(MAX_CORE_FRONTEND_PAGES),
        );
    }

    names.into_vec()
}

#[derive(Default)]
struct UniqueNames {
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl UniqueNames {
    fn push(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() || self.seen.contains(name) {
            return;
        }
        self.seen.insert(name.to_string());
        self.ordered.push(name.to_string());
    }

    fn extend<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) {
        for name in names {
            self.push(name);
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}
