use crate::priority::{OptimizeReport, PriorityOptimizer};

impl super::Command {
    /// Re-rank active entries through the ranking service, falling back to
    /// the category heuristic.
    pub async fn optimize(&self) -> OptimizeReport {
        PriorityOptimizer::new(self.ranking.clone())
            .optimize(&self.store)
            .await
    }
}
