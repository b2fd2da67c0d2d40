use mongodb::error::Error;
use tracing::{debug, info};

use crate::{models::Variant, store::ProductStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded(usize),
    AlreadyPopulated(u64),
}

/// Inserts the variant's sample products when the collection is empty.
///
/// Count and insert are separate calls, so two processes starting against
/// the same empty collection can both insert.
pub async fn seed_if_empty<S: ProductStore>(
    store: &S,
    variant: Variant,
) -> Result<SeedOutcome, Error> {
    let existing = store.count().await?;
    if existing != 0 {
        debug!("Products collection already holds {} documents", existing);
        return Ok(SeedOutcome::AlreadyPopulated(existing));
    }

    let documents = variant.seed_documents();
    let inserted = documents.len();
    store.insert_many(documents).await?;

    info!("Seeded products collection with sample data.");
    Ok(SeedOutcome::Seeded(inserted))
}
