use crate::biz_service::country_service::CountryService;
use crate::entitys::country_entity::CountryEntity;
use crate::entitys::country_neighbour_entity::{CountryNeighbourEntity, NeighbourRef};
use common::errors::AppError;
use common::index_trait::{self, MongoIndexModelProvider};
use common::repository_util::{BaseRepository, Repository};
use common::util::common_utils::parse_object_id;
use common::util::date_util;
use common::util::page_util;
use futures::stream::TryStreamExt;
use futures::try_join;
use mongodb::Database;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Document, doc};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::FindOptions;
use serde::Serialize;
use utoipa::ToSchema;

/// Payload of `GET /countries/{id}/neighbours`.
#[derive(Debug, Serialize, ToSchema)]
pub struct NeighbourPage {
    pub neighbour_countries: Vec<CountryEntity>,
    pub total: u64,
    #[serde(rename = "hasNextPage")]
    pub has_next_page: bool,
    #[serde(rename = "hasPreviousPage")]
    pub has_previous_page: bool,
    #[serde(rename = "totalPages")]
    pub total_pages: i64,
    pub page: i64,
    pub per_page: i64,
}

pub struct CountryNeighbourService {
    pub dao: BaseRepository<CountryNeighbourEntity>,
}

impl CountryNeighbourService {
    pub fn new(db: &Database) -> Self {
        Self { dao: BaseRepository::new(db, "country_neighbour") }
    }

    /// Creates the unique `(country_id, neighbour_country_id)` index if missing.
    pub async fn ensure_indexes(&self) -> mongodb::error::Result<()> {
        index_trait::ensure_indexes(&self.dao.collection, CountryNeighbourEntity::index_models()).await
    }

    /// Records the directed edge `country → neighbour`.
    pub async fn add_neighbour(
        &self,
        countries: &CountryService,
        country_id: &str,
        neighbour_id: &str,
    ) -> Result<(), AppError> {
        const INVALID_ID: &str = "Invalid country ID or neighbour_country_id format";
        let cid = parse_object_id(country_id, INVALID_ID)?;
        let nid = parse_object_id(neighbour_id, INVALID_ID)?;

        let (country, neighbour) = try_join!(countries.dao.find_by_id(&cid), countries.dao.find_by_id(&nid))?;
        if country.is_none() || neighbour.is_none() {
            return Err(AppError::NotFound("One or more countries not found".to_string()));
        }

        let pair = doc! { "country_id": cid, "neighbour_country_id": nid };
        if self.dao.find_one(pair).await?.is_some() {
            return Err(AppError::Duplicate("These countries are already neighbours".to_string()));
        }

        let now = date_util::now_millis();
        let relation = CountryNeighbourEntity {
            id: None,
            country_id: cid,
            neighbour_country_id: nid,
            created_at: now,
            updated_at: now,
        };
        // Two racing identical inserts both pass the pre-check; the unique
        // index rejects the loser and that is still a duplicate, not a 500.
        match self.dao.insert(&relation).await {
            Ok(_) => Ok(()),
            Err(e) if is_duplicate_key(&e) => {
                Err(AppError::Duplicate("These countries are already neighbours".to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Pages through the country's outgoing edges and resolves the far
    /// endpoints. Pages past the end read back empty rather than erroring;
    /// the resolved countries come back in batch-fetch order.
    pub async fn list_neighbours(
        &self,
        countries: &CountryService,
        country_id: &str,
        page: i64,
        per_page: i64,
    ) -> Result<NeighbourPage, AppError> {
        let cid = parse_object_id(country_id, "Invalid country ID format")?;
        let filter = doc! { "country_id": cid };
        let total = self.dao.count(filter.clone()).await?;
        let meta = page_util::page_meta(total, page, per_page);

        let skip = ((page - 1).max(0) * per_page.max(0)) as u64;
        let neighbour_ids = self.neighbour_ids(filter, skip, per_page).await?;
        let neighbour_countries = countries.dao.query(doc! { "_id": { "$in": neighbour_ids } }).await?;

        Ok(NeighbourPage {
            neighbour_countries,
            total,
            has_next_page: meta.has_next_page,
            has_previous_page: meta.has_previous_page,
            total_pages: meta.total_pages,
            page,
            per_page,
        })
    }

    /// One relation page projected down to the neighbour ids.
    async fn neighbour_ids(&self, filter: Document, skip: u64, limit: i64) -> mongodb::error::Result<Vec<ObjectId>> {
        let options = FindOptions::builder()
            .projection(doc! { "neighbour_country_id": 1, "_id": 0 })
            .skip(skip)
            .limit(limit)
            .build();
        let refs = self.dao.collection.clone_with_type::<NeighbourRef>();
        let mut cursor = refs.find(filter).with_options(options).await?;
        let mut ids = vec![];
        while let Some(r) = cursor.try_next().await? {
            ids.push(r.neighbour_country_id);
        }
        Ok(ids)
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(&*err.kind, ErrorKind::Write(WriteFailure::WriteError(e)) if e.code == 11000)
}
