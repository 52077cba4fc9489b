use crate::server::model::test_result::ResultAggregate;

/// Outcome of a seed run: created IDs and the logged aggregates.
#[derive(Debug, Clone)]
pub struct SeedSummary {
    pub teacher_id: i32,
    pub student_ids: Vec<i32>,
    pub course_id: i32,
    /// Aggregate per test, keyed by test name, in test order.
    pub test_aggregates: Vec<(String, ResultAggregate)>,
    /// Aggregate per student across all tests, keyed by email.
    pub student_aggregates: Vec<(String, ResultAggregate)>,
}
