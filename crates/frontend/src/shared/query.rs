//! Query builder for paginated list endpoints.
//!
//! UI filter state is carried as a typed [`ListQuery`] and serialized
//! explicitly; the parameter list is rebuilt from scratch on every change so
//! a cleared filter can never leak into the next request.

/// One `name=value` pair of the request query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParam {
    pub name: &'static str,
    pub value: String,
}

/// Wire query for list endpoints. `page` is 1-based; empty `search_term` or
/// `status` means "no filter".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: usize,
    pub limit: usize,
    pub search_term: String,
    pub status: String,
}

impl ListQuery {
    /// Ordered parameter list: `page` and `limit` always, `searchTerm` and
    /// `status` only while non-empty.
    pub fn params(&self) -> Vec<QueryParam> {
        let mut params = vec![
            QueryParam {
                name: "page",
                value: self.page.to_string(),
            },
            QueryParam {
                name: "limit",
                value: self.limit.to_string(),
            },
        ];
        if !self.search_term.is_empty() {
            params.push(QueryParam {
                name: "searchTerm",
                value: self.search_term.clone(),
            });
        }
        if !self.status.is_empty() {
            params.push(QueryParam {
                name: "status",
                value: self.status.clone(),
            });
        }
        params
    }

    /// Percent-encoded query string, e.g. `page=1&limit=10&searchTerm=acme`.
    pub fn query_string(&self) -> String {
        self.params()
            .iter()
            .map(|p| format!("{}={}", p.name, urlencoding::encode(&p.value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: usize, limit: usize, search: &str, status: &str) -> ListQuery {
        ListQuery {
            page,
            limit,
            search_term: search.to_string(),
            status: status.to_string(),
        }
    }

    #[test]
    fn test_page_and_limit_always_present() {
        let params = query(3, 20, "", "").params();
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].name, "page");
        assert_eq!(params[0].value, "3");
        assert_eq!(params[1].name, "limit");
        assert_eq!(params[1].value, "20");
    }

    #[test]
    fn test_cleared_filters_are_absent() {
        // A filter reset to empty must disappear entirely, not serialize as
        // `status=`.
        let params = query(1, 10, "", "").params();
        assert!(params.iter().all(|p| p.name != "status"));
        assert!(params.iter().all(|p| p.name != "searchTerm"));
    }

    #[test]
    fn test_filters_follow_page_and_limit() {
        let params = query(1, 5, "acme", "IN_PROGRESS").params();
        let names: Vec<&str> = params.iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["page", "limit", "searchTerm", "status"]);
    }

    #[test]
    fn test_query_string_encodes_values() {
        let q = query(1, 10, "a & b", "");
        assert_eq!(q.query_string(), "page=1&limit=10&searchTerm=a%20%26%20b");
    }
}
