use async_trait::async_trait;
use larder_shared::shopping::{Priority, ShoppingItem};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::store::Store;

/// Categories the heuristic tier always promotes to `high`.
pub const HIGH_PRIORITY_CATEGORIES: [&str; 5] = ["produce", "dairy", "bakery", "meat", "seafood"];

/// What the ranking service is told about one active entry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RankingEntry {
    pub id: String,
    pub name: String,
    pub category: String,
    pub priority: Priority,
}

impl From<&ShoppingItem> for RankingEntry {
    fn from(item: &ShoppingItem) -> Self {
        Self {
            id: item.id.to_owned(),
            name: item.name.to_owned(),
            category: item.category.to_owned(),
            priority: item.priority,
        }
    }
}

/// One `(id, priority)` pair returned by the ranking service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RankedPriority {
    pub id: String,
    pub priority: Priority,
}

/// External priority ranking capability.
#[async_trait]
pub trait RankingProvider: Send + Sync {
    async fn rank(&self, items: &[RankingEntry]) -> anyhow::Result<Vec<RankedPriority>>;
}

/// Used when no ranking service is configured; always defers to the
/// heuristic tier.
pub struct NoRanking;

#[async_trait]
impl RankingProvider for NoRanking {
    async fn rank(&self, _items: &[RankingEntry]) -> anyhow::Result<Vec<RankedPriority>> {
        anyhow::bail!("ranking service not configured")
    }
}

/// Ranking service reached over HTTP with a bounded timeout.
///
/// Request body is the JSON array of [`RankingEntry`]; the response must be
/// a JSON array of [`RankedPriority`].
pub struct HttpRanking {
    client: reqwest::Client,
    url: String,
}

impl HttpRanking {
    pub fn new(url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl RankingProvider for HttpRanking {
    async fn rank(&self, items: &[RankingEntry]) -> anyhow::Result<Vec<RankedPriority>> {
        let ranked = self
            .client
            .post(&self.url)
            .json(items)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<RankedPriority>>()
            .await?;

        Ok(ranked)
    }
}

/// Deterministic fallback: promote fixed categories, keep everything else.
pub fn heuristic_priority(category: &str, current: Priority) -> Priority {
    let category = category.to_lowercase();

    if HIGH_PRIORITY_CATEGORIES
        .iter()
        .any(|high| category.contains(high))
    {
        return Priority::High;
    }

    current
}

/// Which tier produced the priorities of a run.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Ranking,
    Heuristic,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct OptimizeReport {
    pub tier: Tier,
    /// Entries whose priority actually changed.
    pub updated: usize,
}

/// Two-tier priority rewrite over the shopping list.
///
/// Never adds, removes or reorders entries and never touches anything but
/// the `priority` field.
pub struct PriorityOptimizer {
    provider: Arc<dyn RankingProvider>,
}

impl PriorityOptimizer {
    pub fn new(provider: Arc<dyn RankingProvider>) -> Self {
        Self { provider }
    }

    pub async fn optimize(&self, store: &Store) -> OptimizeReport {
        let entries = store
            .read()
            .await
            .shopping
            .iter()
            .filter(|item| item.is_active())
            .map(RankingEntry::from)
            .collect::<Vec<_>>();

        // The store is not locked while the service is awaited.
        if !entries.is_empty() {
            match self.ranking(&entries).await {
                Ok(ranking) => {
                    let updated = apply_ranking(&mut store.write().await.shopping, &ranking);
                    tracing::info!(updated, "priorities applied from ranking service");

                    return OptimizeReport {
                        tier: Tier::Ranking,
                        updated,
                    };
                }
                Err(e) => {
                    tracing::warn!(error = %e, "ranking service failed, using heuristic priorities");
                }
            }
        }

        let updated = apply_heuristic(&mut store.write().await.shopping);
        tracing::info!(updated, "heuristic priorities applied");

        OptimizeReport {
            tier: Tier::Heuristic,
            updated,
        }
    }

    async fn ranking(&self, entries: &[RankingEntry]) -> anyhow::Result<HashMap<String, Priority>> {
        let ranked = self.provider.rank(entries).await?;

        if ranked.is_empty() {
            anyhow::bail!("ranking service returned no priorities");
        }

        Ok(ranked
            .into_iter()
            .map(|ranked| (ranked.id, ranked.priority))
            .collect())
    }
}

/// Set each entry found in `ranking`; unmatched entries keep theirs.
pub fn apply_ranking(items: &mut [ShoppingItem], ranking: &HashMap<String, Priority>) -> usize {
    let mut updated = 0;

    for item in items.iter_mut() {
        if let Some(priority) = ranking.get(&item.id) {
            if item.priority != *priority {
                item.priority = *priority;
                updated += 1;
            }
        }
    }

    updated
}

pub fn apply_heuristic(items: &mut [ShoppingItem]) -> usize {
    let mut updated = 0;

    for item in items.iter_mut() {
        let priority = heuristic_priority(&item.category, item.priority);
        if item.priority != priority {
            item.priority = priority;
            updated += 1;
        }
    }

    updated
}
