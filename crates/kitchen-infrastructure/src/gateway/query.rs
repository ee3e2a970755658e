//! Typed builder for the gateway's table-query parameters.
//!
//! The gateway speaks a PostgREST-style dialect: equality predicates as
//! `column=eq.value`, ordering as `order=col.asc,col2.desc`, projections
//! (including embedded relations) as `select=*,children(*)`, and row limits
//! as `limit=n`. Single-row fetch is a limit of one.

use kitchen_shared::types::SortDirection;

#[derive(Debug, Clone)]
pub struct SelectQuery {
    table: String,
    select: String,
    filters: Vec<(String, String)>,
    order: Vec<(String, SortDirection)>,
    limit: Option<usize>,
}

impl SelectQuery {
    pub fn table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            select: "*".to_string(),
            filters: Vec::new(),
            order: Vec::new(),
            limit: None,
        }
    }

    /// Projection, e.g. `*` or `*,menu_items(*),ordering_links(*)` for a
    /// nested relation fetch.
    pub fn select(mut self, projection: impl Into<String>) -> Self {
        self.select = projection.into();
        self
    }

    pub fn eq(mut self, column: impl Into<String>, value: impl ToString) -> Self {
        self.filters.push((column.into(), value.to_string()));
        self
    }

    pub fn order(mut self, column: impl Into<String>, direction: SortDirection) -> Self {
        self.order.push((column.into(), direction));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Single-row fetch.
    pub fn single(self) -> Self {
        self.limit(1)
    }

    pub fn table_name(&self) -> &str {
        &self.table
    }

    /// Query pairs in a fixed order so the same query always produces the
    /// same URL.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("select".to_string(), self.select.clone())];
        for (column, value) in &self.filters {
            pairs.push((column.clone(), format!("eq.{}", value)));
        }
        if !self.order.is_empty() {
            let order = self
                .order
                .iter()
                .map(|(column, direction)| {
                    if direction.is_ascending() {
                        format!("{}.asc", column)
                    } else {
                        format!("{}.desc", column)
                    }
                })
                .collect::<Vec<_>>()
                .join(",");
            pairs.push(("order".to_string(), order));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(query: &SelectQuery) -> Vec<String> {
        query
            .query_pairs()
            .into_iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect()
    }

    #[test]
    fn test_defaults_to_star_projection() {
        let query = SelectQuery::table("kitchens");
        assert_eq!(rendered(&query), vec!["select=*"]);
    }

    #[test]
    fn test_filters_order_and_limit() {
        let query = SelectQuery::table("kitchens")
            .eq("location_id", "abc")
            .eq("is_active", true)
            .order("sort_order", SortDirection::Ascending)
            .order("name", SortDirection::Descending)
            .limit(10);
        assert_eq!(
            rendered(&query),
            vec![
                "select=*",
                "location_id=eq.abc",
                "is_active=eq.true",
                "order=sort_order.asc,name.desc",
                "limit=10",
            ]
        );
    }

    #[test]
    fn test_nested_relation_projection() {
        let query = SelectQuery::table("kitchens")
            .select("*,menu_items(*),ordering_links(*)")
            .single();
        assert_eq!(
            rendered(&query),
            vec!["select=*,menu_items(*),ordering_links(*)", "limit=1"]
        );
    }

    #[test]
    fn test_same_query_renders_identically() {
        let build = || {
            SelectQuery::table("locations")
                .eq("is_active", true)
                .order("is_default", SortDirection::Descending)
                .order("name", SortDirection::Ascending)
        };
        assert_eq!(rendered(&build()), rendered(&build()));
    }
}
