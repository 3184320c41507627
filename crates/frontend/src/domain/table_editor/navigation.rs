use contracts::meta::Table;
use leptos_router::NavigateOptions;

pub const DEFAULT_SCHEMA: &str = "public";

pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// `Navigator` over the closure returned by `leptos_router::hooks::use_navigate`
pub struct RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    navigate: F,
}

impl<F> RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&self, path: &str) {
        log::debug!("navigate to {}", path);
        (self.navigate)(path, NavigateOptions::default());
    }
}

/// `/project/{ref}/editor?schema={schema}`
pub fn schema_root_path(project_ref: &str, schema: &str) -> String {
    format!(
        "/project/{}/editor?schema={}",
        project_ref,
        urlencoding::encode(schema)
    )
}

/// `/project/{ref}/editor/{id}?schema={schema}`
pub fn entity_path(project_ref: &str, id: i64, schema: &str) -> String {
    format!(
        "/project/{}/editor/{}?schema={}",
        project_ref,
        id,
        urlencoding::encode(schema)
    )
}

/// Where to go after `deleted` is gone: the first remaining table of its
/// schema in load order, otherwise the schema root
pub fn after_table_deleted(project_ref: &str, deleted: &Table, remaining: &[Table]) -> String {
    remaining
        .iter()
        .find(|t| t.id != deleted.id && t.schema == deleted.schema)
        .map(|t| entity_path(project_ref, t.id, &t.schema))
        .unwrap_or_else(|| schema_root_path(project_ref, &deleted.schema))
}
