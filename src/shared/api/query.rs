use serde::Deserialize;
use utoipa::IntoParams;

use crate::shared::pagination::PageRequest;

/// `?search=&page=&per_page=` on admin inbox-style listings.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Case-insensitive substring
    pub search: Option<String>,

    /// 1-based, defaults to 1
    #[serde(default)]
    pub page: u32,

    /// Defaults to 10, at most 100
    #[serde(default)]
    pub per_page: u32,
}

impl From<ListQuery> for (Option<String>, PageRequest) {
    fn from(q: ListQuery) -> Self {
        (q.search, PageRequest::new(q.page, q.per_page))
    }
}
