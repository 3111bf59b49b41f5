use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Bson, Document, doc};
use mongodb::error::Result;
use mongodb::options::FindOptions;
use mongodb::{Collection, Database};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub enum OrderType {
    #[default]
    Asc,
    Desc,
}

impl OrderType {
    /// MongoDB sort direction value.
    pub fn direction(&self) -> i32 {
        match self {
            OrderType::Asc => 1,
            OrderType::Desc => -1,
        }
    }
}

#[async_trait]
pub trait Repository<T> {
    async fn insert(&self, entity: &T) -> Result<Bson>;
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<T>>;
    async fn find_one(&self, filter: Document) -> Result<Option<T>>;
    async fn query(&self, filter: Document) -> Result<Vec<T>>;
    async fn find_page(&self, filter: Document, sort: Document, skip: u64, limit: i64) -> Result<Vec<T>>;
    async fn update_one(&self, filter: Document, update: Document) -> Result<u64>;
    async fn count(&self, filter: Document) -> Result<u64>;
}

pub struct BaseRepository<T: Send + Sync> {
    pub collection: Collection<T>,
}

impl<T: Send + Sync> BaseRepository<T> {
    pub fn new(db: &Database, name: &str) -> Self {
        Self { collection: db.collection(name) }
    }
}

#[async_trait]
impl<T> Repository<T> for BaseRepository<T>
where
    T: Serialize + DeserializeOwned + Unpin + Send + Sync,
{
    async fn insert(&self, entity: &T) -> Result<Bson> {
        let result = self.collection.insert_one(entity).await?;
        Ok(result.inserted_id)
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<T>> {
        self.find_one(doc! { "_id": id }).await
    }

    async fn find_one(&self, filter: Document) -> Result<Option<T>> {
        let result = self.collection.find_one(filter).await?;
        Ok(result)
    }

    async fn query(&self, filter: Document) -> Result<Vec<T>> {
        let mut cursor = self.collection.find(filter).await?;
        let mut result = vec![];
        while let Some(doc) = cursor.try_next().await? {
            result.push(doc);
        }
        Ok(result)
    }

    async fn find_page(&self, filter: Document, sort: Document, skip: u64, limit: i64) -> Result<Vec<T>> {
        let options = FindOptions::builder().sort(sort).skip(skip).limit(limit).build();
        let mut cursor = self.collection.find(filter).with_options(options).await?;
        let mut result = vec![];
        while let Some(doc) = cursor.try_next().await? {
            result.push(doc);
        }
        Ok(result)
    }

    async fn update_one(&self, filter: Document, update: Document) -> Result<u64> {
        let result = self.collection.update_one(filter, update).await?;
        // matched, not modified: a no-op set on an existing document is still a hit
        Ok(result.matched_count)
    }

    async fn count(&self, filter: Document) -> Result<u64> {
        self.collection.count_documents(filter).await
    }
}
