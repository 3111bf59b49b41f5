use log::info;
use mongodb::error::Result;
use mongodb::{Collection, IndexModel};

/// Implemented by entities that require collection indexes.
pub trait MongoIndexModelProvider {
    fn index_models() -> Vec<IndexModel>;
}

/// Creates the given indexes, skipping any whose name already exists.
pub async fn ensure_indexes<T: Send + Sync>(collection: &Collection<T>, targets: Vec<IndexModel>) -> Result<()> {
    let existing = collection.list_index_names().await.unwrap_or_default();
    for target in targets {
        let name = target.options.as_ref().and_then(|options| options.name.clone());
        if let Some(name) = &name {
            if existing.iter().any(|n| n == name) {
                continue;
            }
        }
        collection.create_index(target).await?;
        info!("created index {} on {}", name.unwrap_or_default(), collection.name());
    }
    Ok(())
}
