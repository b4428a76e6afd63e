use hickory_proto::op::Query;
use mockdns_domain::{QueryOutcome, QueryRoute};
use tracing::info;

/// Emits one classification line per question of a completed query.
#[derive(Debug, Clone, Copy)]
pub struct QueryLogger {
    verbose: bool,
}

impl QueryLogger {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn log(&self, queries: &[Query], route: QueryRoute, outcome: QueryOutcome) {
        if !self.verbose {
            return;
        }

        for line in Self::render(queries, route, outcome) {
            info!(route = route.as_str(), outcome = outcome.as_str(), "{}", line);
        }
    }

    /// `[<route>,<outcome>]: <name> <class> <type>` for each question.
    pub fn render(queries: &[Query], route: QueryRoute, outcome: QueryOutcome) -> Vec<String> {
        queries
            .iter()
            .map(|q| {
                format!(
                    "[{},{}]: {} {} {}",
                    route.marker(),
                    outcome.marker(),
                    q.name(),
                    q.query_class(),
                    q.query_type()
                )
            })
            .collect()
    }
}
