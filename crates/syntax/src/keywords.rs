//! GoogleSQL reserved keywords plus the statement verbs the linter cares about.

use std::collections::HashSet;
use std::sync::LazyLock;

const RESERVED: &[&str] = &[
    "ALL",
    "AND",
    "ANY",
    "ARRAY",
    "AS",
    "ASC",
    "ASSERT_ROWS_MODIFIED",
    "AT",
    "BETWEEN",
    "BY",
    "CASE",
    "CAST",
    "COLLATE",
    "CONTAINS",
    "CREATE",
    "CROSS",
    "CUBE",
    "CURRENT",
    "DEFAULT",
    "DEFINE",
    "DESC",
    "DISTINCT",
    "ELSE",
    "END",
    "ENUM",
    "ESCAPE",
    "EXCEPT",
    "EXCLUDE",
    "EXISTS",
    "EXTRACT",
    "FALSE",
    "FETCH",
    "FOLLOWING",
    "FOR",
    "FROM",
    "FULL",
    "GROUP",
    "GROUPING",
    "GROUPS",
    "HASH",
    "HAVING",
    "IF",
    "IGNORE",
    "IN",
    "INNER",
    "INTERSECT",
    "INTERVAL",
    "INTO",
    "IS",
    "JOIN",
    "LATERAL",
    "LEFT",
    "LIKE",
    "LIMIT",
    "LOOKUP",
    "MERGE",
    "NATURAL",
    "NEW",
    "NO",
    "NOT",
    "NULL",
    "NULLS",
    "OF",
    "ON",
    "OR",
    "ORDER",
    "OUTER",
    "OVER",
    "PARTITION",
    "PRECEDING",
    "PROTO",
    "QUALIFY",
    "RANGE",
    "RECURSIVE",
    "RESPECT",
    "RIGHT",
    "ROLLUP",
    "ROWS",
    "SELECT",
    "SET",
    "SOME",
    "STRUCT",
    "TABLESAMPLE",
    "THEN",
    "TO",
    "TREAT",
    "TRUE",
    "UNBOUNDED",
    "UNION",
    "UNNEST",
    "USING",
    "WHEN",
    "WHERE",
    "WINDOW",
    "WITH",
    "WITHIN",
];

/// Statement verbs that are not reserved in GoogleSQL but start statements.
const STATEMENT_VERBS: &[&str] = &[
    "ALTER", "CALL", "DECLARE", "DELETE", "DROP", "EXECUTE", "INSERT", "TRUNCATE", "UPDATE",
    "VALUES",
];

static KEYWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    RESERVED
        .iter()
        .chain(STATEMENT_VERBS.iter())
        .copied()
        .collect()
});

/// Returns `true` if `word` is a keyword, ignoring ASCII case.
#[must_use]
pub fn is_keyword(word: &str) -> bool {
    if !word.is_ascii() {
        return false;
    }
    KEYWORDS.contains(word.to_ascii_uppercase().as_str())
}
