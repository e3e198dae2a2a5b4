//! Filter State
//!
//! Query parameters for list endpoints. Empty values are omitted; sets are
//! sent as repeated keys (`categories=1&categories=2`).

type Query = Vec<(String, String)>;

/// `from`/`size` paging understood by every list endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    pub from: Option<u32>,
    pub size: Option<u32>,
}

impl Page {
    pub fn to_query(&self) -> Query {
        let mut query = Query::new();
        self.append_to(&mut query);
        query
    }

    fn append_to(&self, query: &mut Query) {
        if let Some(from) = self.from {
            query.push(("from".into(), from.to_string()));
        }
        if let Some(size) = self.size {
            query.push(("size".into(), size.to_string()));
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilters {
    pub ids: Vec<i64>,
    pub page: Page,
}

impl UserFilters {
    pub fn to_query(&self) -> Query {
        let mut query: Query = self
            .ids
            .iter()
            .map(|id| ("ids".to_string(), id.to_string()))
            .collect();
        self.page.append_to(&mut query);
        query
    }
}

/// Paid/free selector of the event filter bar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaidFilter {
    #[default]
    All,
    Paid,
    Free,
}

impl PaidFilter {
    pub const ALL: [PaidFilter; 3] = [PaidFilter::All, PaidFilter::Paid, PaidFilter::Free];

    pub fn as_param(&self) -> Option<&'static str> {
        match self {
            PaidFilter::All => None,
            PaidFilter::Paid => Some("true"),
            PaidFilter::Free => Some("false"),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaidFilter::All => "All",
            PaidFilter::Paid => "Paid",
            PaidFilter::Free => "Free",
        }
    }

    /// Inverse of the select value used by the filter bar ("", "true", "false")
    pub fn from_param(value: &str) -> Self {
        match value {
            "true" => PaidFilter::Paid,
            "false" => PaidFilter::Free,
            _ => PaidFilter::All,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilters {
    /// Free-text search on the event title
    pub title: String,
    pub paid: PaidFilter,
    pub categories: Vec<i64>,
    /// Lifecycle states such as `PENDING` or `PUBLISHED`
    pub states: Vec<String>,
    pub page: Page,
}

impl EventFilters {
    pub fn to_query(&self) -> Query {
        let mut query = Query::new();
        let title = self.title.trim();
        if !title.is_empty() {
            query.push(("title".into(), title.to_string()));
        }
        if let Some(paid) = self.paid.as_param() {
            query.push(("paid".into(), paid.to_string()));
        }
        query.extend(
            self.categories
                .iter()
                .map(|id| ("categories".to_string(), id.to_string())),
        );
        query.extend(
            self.states
                .iter()
                .map(|state| ("states".to_string(), state.clone())),
        );
        self.page.append_to(&mut query);
        query
    }

    pub fn toggle_category(&mut self, category_id: i64) {
        if let Some(pos) = self.categories.iter().position(|id| *id == category_id) {
            self.categories.remove(pos);
        } else {
            self.categories.push(category_id);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFilters {
    pub page: Page,
}

impl CategoryFilters {
    pub fn to_query(&self) -> Query {
        self.page.to_query()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompilationFilters {
    pub pinned: Option<bool>,
    pub page: Page,
}

impl CompilationFilters {
    pub fn to_query(&self) -> Query {
        let mut query = Query::new();
        if let Some(pinned) = self.pinned {
            query.push(("pinned".into(), pinned.to_string()));
        }
        self.page.append_to(&mut query);
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(query: &[(String, String)]) -> Vec<(&str, &str)> {
        query.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
    }

    #[test]
    fn default_event_filters_send_nothing() {
        assert!(EventFilters::default().to_query().is_empty());
    }

    #[test]
    fn event_filters_repeat_set_keys() {
        let filters = EventFilters {
            title: "  jazz ".into(),
            paid: PaidFilter::Free,
            categories: vec![1, 4],
            states: vec!["PUBLISHED".into()],
            page: Page { from: Some(0), size: Some(20) },
        };
        assert_eq!(
            pairs(&filters.to_query()),
            vec![
                ("title", "jazz"),
                ("paid", "false"),
                ("categories", "1"),
                ("categories", "4"),
                ("states", "PUBLISHED"),
                ("from", "0"),
                ("size", "20"),
            ]
        );
    }

    #[test]
    fn toggle_category_adds_then_removes() {
        let mut filters = EventFilters::default();
        filters.toggle_category(3);
        filters.toggle_category(5);
        filters.toggle_category(3);
        assert_eq!(filters.categories, vec![5]);
    }

    #[test]
    fn paid_filter_round_trips_select_values() {
        for filter in PaidFilter::ALL {
            let param = filter.as_param().unwrap_or("");
            assert_eq!(PaidFilter::from_param(param), filter);
        }
    }

    #[test]
    fn user_and_compilation_filters() {
        let users = UserFilters { ids: vec![5, 6], page: Page::default() };
        assert_eq!(pairs(&users.to_query()), vec![("ids", "5"), ("ids", "6")]);

        let compilations = CompilationFilters { pinned: Some(true), page: Page { from: None, size: Some(5) } };
        assert_eq!(
            pairs(&compilations.to_query()),
            vec![("pinned", "true"), ("size", "5")]
        );
    }
}
