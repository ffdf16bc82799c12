//! Query planning: one subject fans out into category-specific queries.

use crate::types::Category;

/// Number of queries planned for every category.
pub const QUERIES_PER_SUBJECT: usize = 3;

/// Facet suffixes appended to the subject, per category.
fn facets(category: Category) -> [&'static str; QUERIES_PER_SUBJECT] {
    match category {
        Category::Place => [
            "history",
            "economy and industry",
            "government and politics",
        ],
        Category::Organization => [
            "company history",
            "products and services",
            "leadership and executives",
        ],
        Category::Person => [
            "biography",
            "achievements and career",
            "awards and recognition",
        ],
    }
}

/// Plan the search queries for `subject`, in execution order.
///
/// ```
/// use wikigen_research::orchestrator::planner::plan;
/// use wikigen_research::Category;
///
/// let queries = plan("Ada Lovelace", Category::Person);
/// assert_eq!(queries[0], "Ada Lovelace biography");
/// ```
pub fn plan(subject: &str, category: Category) -> Vec<String> {
    let subject = subject.trim();
    facets(category)
        .iter()
        .map(|facet| format!("{subject} {facet}"))
        .collect()
}
