//! Test result parameters and aggregate statistics.

/// Parameters for recording one graded result.
#[derive(Debug, Clone)]
pub struct CreateTestResultParam {
    pub test_id: i32,
    pub student_id: i32,
    pub grader_id: i32,
    pub result: i32,
}

/// Average, maximum, minimum and count over a set of results.
///
/// `avg`, `max` and `min` are `None` when there are no results.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultAggregate {
    pub count: usize,
    pub avg: Option<f64>,
    pub max: Option<i32>,
    pub min: Option<i32>,
}

impl ResultAggregate {
    pub fn from_results(results: &[i32]) -> Self {
        let count = results.len();
        let avg = (count > 0)
            .then(|| results.iter().map(|&r| f64::from(r)).sum::<f64>() / count as f64);

        Self {
            count,
            avg,
            max: results.iter().copied().max(),
            min: results.iter().copied().min(),
        }
    }
}
