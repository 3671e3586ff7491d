//! Renders composed feed queries into parameterized SQL.
//!
//! The union of filter terms becomes one disjunction over the `activity`
//! table. Rows are unique by primary key, so a row matched by several terms
//! still appears once, which is exactly the union the query layer promises.
//! Ordering and windowing are rendered into the same statement, keeping the
//! whole feed a single execution.

use activity_core_db::query::{ActivityFilter, FeedQuery, PageWindow};
use sqlx::{Postgres, QueryBuilder};

/// Columns selected for every feed page, in row-mapping order.
const ACTIVITY_COLUMNS: &str =
    "id, timestamp, user_id, object_id, revision_id, activity_type, data";

/// Builds the executable statement for one feed page.
pub fn feed_statement(query: &FeedQuery, window: PageWindow) -> QueryBuilder<'static, Postgres> {
    let mut builder: QueryBuilder<'static, Postgres> =
        QueryBuilder::new(format!("SELECT {ACTIVITY_COLUMNS} FROM activity WHERE "));

    push_union(&mut builder, query.terms());
    builder.push(" ORDER BY timestamp DESC, id DESC");

    if let Some(limit) = window.limit() {
        builder.push(" LIMIT ");
        builder.push_bind(limit);
    }
    if let Some(offset) = window.offset() {
        builder.push(" OFFSET ");
        builder.push_bind(offset);
    }
    builder
}

/// A union with no terms selects nothing.
fn push_union(builder: &mut QueryBuilder<'static, Postgres>, terms: &[ActivityFilter]) {
    if terms.is_empty() {
        builder.push("FALSE");
        return;
    }
    for (i, term) in terms.iter().enumerate() {
        if i > 0 {
            builder.push(" OR ");
        }
        builder.push("(");
        push_filter(builder, term);
        builder.push(")");
    }
}

fn push_filter(builder: &mut QueryBuilder<'static, Postgres>, filter: &ActivityFilter) {
    match filter {
        ActivityFilter::MatchNone => {
            builder.push("FALSE");
        }
        ActivityFilter::FromUser(id) => {
            builder.push("user_id = ");
            builder.push_bind(*id);
        }
        ActivityFilter::FromUsers(ids) => {
            builder.push("user_id = ANY(");
            builder.push_bind(ids.clone());
            builder.push(")");
        }
        ActivityFilter::AboutObject(id) => {
            builder.push("object_id = ");
            builder.push_bind(*id);
        }
        ActivityFilter::AboutObjects(ids) => {
            builder.push("object_id = ANY(");
            builder.push_bind(ids.clone());
            builder.push(")");
        }
        ActivityFilter::TypeEndsWith(suffix) => {
            builder.push("activity_type LIKE ");
            builder.push_bind(format!("%{}", escape_like(suffix)));
        }
        ActivityFilter::AnyOf(filters) => {
            push_union(builder, filters);
        }
    }
}

/// Escapes `%`, `_` and `\` so a suffix participates in `LIKE` literally.
fn escape_like(suffix: &str) -> String {
    let mut escaped = String::with_capacity(suffix.len());
    for c in suffix.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_renders_union_of_terms() {
        let user_id = Uuid::new_v4();
        let query = FeedQuery::from_filter(ActivityFilter::FromUser(user_id))
            .union(ActivityFilter::AboutObject(user_id));

        let statement = feed_statement(&query, PageWindow::unbounded());

        assert_eq!(
            statement.sql(),
            "SELECT id, timestamp, user_id, object_id, revision_id, activity_type, data \
             FROM activity WHERE (user_id = $1) OR (object_id = $2) \
             ORDER BY timestamp DESC, id DESC"
        );
    }

    #[test]
    fn test_query_without_terms_renders_false() {
        let query = FeedQuery::from_terms(Vec::new());
        let statement = feed_statement(&query, PageWindow::unbounded());

        assert!(statement.sql().contains("WHERE FALSE ORDER BY"));
    }

    #[test]
    fn test_match_none_term_renders_false() {
        let query = FeedQuery::from_filter(ActivityFilter::MatchNone);
        let statement = feed_statement(&query, PageWindow::unbounded());

        assert!(statement.sql().contains("WHERE (FALSE) ORDER BY"));
    }

    #[test]
    fn test_group_term_renders_nested_disjunction() {
        let group_id = Uuid::new_v4();
        let query = FeedQuery::from_filter(ActivityFilter::AnyOf(vec![
            ActivityFilter::AboutObject(group_id),
            ActivityFilter::AboutObjects(vec![Uuid::new_v4()]),
        ]));

        let statement = feed_statement(&query, PageWindow::unbounded());

        assert!(statement
            .sql()
            .contains("WHERE ((object_id = $1) OR (object_id = ANY($2)))"));
    }

    #[test]
    fn test_window_binds_follow_the_filter_binds() {
        let query = FeedQuery::from_filter(ActivityFilter::FromUser(Uuid::new_v4()));
        let statement = feed_statement(&query, PageWindow::new(15, 30).unwrap());

        assert!(statement
            .sql()
            .ends_with("ORDER BY timestamp DESC, id DESC LIMIT $2 OFFSET $3"));
    }

    #[test]
    fn test_unbounded_window_renders_no_clauses() {
        let query = FeedQuery::from_filter(ActivityFilter::FromUser(Uuid::new_v4()));
        let statement = feed_statement(&query, PageWindow::unbounded());

        let sql = statement.sql();
        assert!(!sql.contains("LIMIT"));
        assert!(!sql.contains("OFFSET"));
    }

    #[test]
    fn test_type_suffix_binds_a_like_pattern() {
        let query = FeedQuery::from_filter(ActivityFilter::type_ends_with("package"));
        let statement = feed_statement(&query, PageWindow::unbounded());

        assert!(statement.sql().contains("activity_type LIKE $1"));
    }

    #[test]
    fn test_like_wildcards_are_escaped() {
        assert_eq!(escape_like("package"), "package");
        assert_eq!(escape_like("100%_done\\"), "100\\%\\_done\\\\");
    }
}
