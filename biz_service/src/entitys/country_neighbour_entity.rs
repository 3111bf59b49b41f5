use common::index_trait::MongoIndexModelProvider;
use mongodb::IndexModel;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::options::IndexOptions;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Directed neighbour edge between two countries, collection
/// `country_neighbour`. Storing A→B says nothing about B→A.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CountryNeighbourEntity {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,
    #[schema(value_type = String)]
    pub country_id: ObjectId,
    #[schema(value_type = String)]
    pub neighbour_country_id: ObjectId,
    pub created_at: i64,
    pub updated_at: i64,
}

impl MongoIndexModelProvider for CountryNeighbourEntity {
    // The unique compound index is the authoritative duplicate-edge guard;
    // service-level pre-checks are only a fast path.
    fn index_models() -> Vec<IndexModel> {
        vec![
            IndexModel::builder()
                .keys(doc! { "country_id": 1, "neighbour_country_id": 1 })
                .options(IndexOptions::builder().name("idx_country_neighbour".to_string()).unique(true).build())
                .build(),
        ]
    }
}

/// Relation row projected down to the far endpoint.
#[derive(Debug, Deserialize)]
pub struct NeighbourRef {
    pub neighbour_country_id: ObjectId,
}
