pub const SEARCH_TERMS: &str = "noticias -deportes";
pub const LANGUAGE: &str = "es";
pub const SORT_BY: &str = "publishedAt";
pub const PAGE_SIZE: u32 = 5;
pub const HEADLINES_COUNTRY: &str = "mx";
pub const HEADLINES_CATEGORY: &str = "general";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Everything,
    TopHeadlines,
}

impl Endpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Everything => "everything",
            Endpoint::TopHeadlines => "top-headlines",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single-page NewsAPI request, minus the API key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsQuery {
    pub endpoint: Endpoint,
    pub params: Vec<(&'static str, String)>,
}

impl NewsQuery {
    /// Most recent Spanish-language articles matching the search terms
    pub fn everything() -> Self {
        Self {
            endpoint: Endpoint::Everything,
            params: vec![
                ("q", SEARCH_TERMS.to_string()),
                ("language", LANGUAGE.to_string()),
                ("sortBy", SORT_BY.to_string()),
                ("pageSize", PAGE_SIZE.to_string()),
            ],
        }
    }

    /// General top headlines for Mexico
    pub fn top_headlines() -> Self {
        Self {
            endpoint: Endpoint::TopHeadlines,
            params: vec![
                ("country", HEADLINES_COUNTRY.to_string()),
                ("category", HEADLINES_CATEGORY.to_string()),
                ("language", LANGUAGE.to_string()),
                ("pageSize", PAGE_SIZE.to_string()),
            ],
        }
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

impl Default for NewsQuery {
    fn default() -> Self {
        Self::everything()
    }
}
