use crate::entitys::country_entity::CountryEntity;
use crate::util::sort_util;
use common::errors::AppError;
use common::models::property_value::{FieldType, PropertyValue};
use common::repository_util::{BaseRepository, Repository};
use common::util::common_utils::parse_object_id;
use common::util::date_util;
use common::util::page_util;
use mongodb::Database;
use mongodb::bson::{Document, doc};
use serde::Serialize;
use utoipa::ToSchema;

/// Fields PATCH may set, with the value type each setter accepts.
const MUTABLE_FIELDS: &[(&str, FieldType)] = &[
    ("name", FieldType::Text),
    ("cca", FieldType::Text),
    ("currency_code", FieldType::Text),
    ("currency", FieldType::Text),
    ("capital", FieldType::Text),
    ("region", FieldType::Text),
    ("subregion", FieldType::Text),
    ("map_url", FieldType::Text),
    ("flag_url", FieldType::Text),
    ("area", FieldType::Double),
    ("population", FieldType::Long),
];

/// Payload of `GET /countries`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CountryPage {
    pub countries: Vec<CountryEntity>,
    pub current_page: i64,
    pub total_countries: u64,
    pub total_pages: i64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

pub struct CountryService {
    pub dao: BaseRepository<CountryEntity>,
}

impl CountryService {
    pub fn new(db: &Database) -> Self {
        Self { dao: BaseRepository::new(db, "country") }
    }

    pub async fn list_countries(&self, page: i64, limit: i64, sort_by: Option<&str>) -> Result<CountryPage, AppError> {
        page_util::validate_page(page)?;
        let sort = sort_util::sort_document(sort_by);
        let total = self.dao.count(doc! {}).await?;
        let meta = page_util::check_page_bounds(total, page, limit)?;
        let skip = ((page - 1) * limit) as u64;
        let countries = self.dao.find_page(doc! {}, sort, skip, limit).await?;
        Ok(CountryPage {
            countries,
            current_page: page,
            total_countries: total,
            total_pages: meta.total_pages,
            has_next_page: meta.has_next_page,
            has_previous_page: meta.has_previous_page,
        })
    }

    /// Inserts the country with both timestamps stamped to now.
    pub async fn create_country(&self, mut entity: CountryEntity) -> Result<CountryEntity, AppError> {
        let now = date_util::now_millis();
        entity.id = None;
        entity.created_at = now;
        entity.updated_at = now;
        let inserted_id = self.dao.insert(&entity).await?;
        entity.id = inserted_id.as_object_id();
        Ok(entity)
    }

    pub async fn get_country(&self, id: &str) -> Result<CountryEntity, AppError> {
        let oid = parse_object_id(id, "Invalid country ID format")?;
        match self.dao.find_by_id(&oid).await? {
            Some(country) => Ok(country),
            None => Err(AppError::NotFound("No valid country found for country ID".to_string())),
        }
    }

    /// Applies a list of `{propName, value}` set operations.
    pub async fn update_country(&self, id: &str, ops: &[PropertyValue]) -> Result<(), AppError> {
        let oid = parse_object_id(id, "Invalid Country ID format")?;
        let update = build_update_doc(ops)?;
        let matched = self.dao.update_one(doc! { "_id": oid }, update).await?;
        if matched == 0 {
            return Err(AppError::NotFound("No valid Country found for provided ID".to_string()));
        }
        Ok(())
    }
}

/// Builds the `$set` document, rejecting properties outside the allow-list
/// and values of the wrong type. `updated_at` rides along in the same set.
fn build_update_doc(ops: &[PropertyValue]) -> Result<Document, AppError> {
    let mut set = Document::new();
    for op in ops {
        let field = MUTABLE_FIELDS.iter().find(|(name, _)| *name == op.property_name);
        let Some((name, field_type)) = field else {
            return Err(AppError::Validation(format!("Property cannot be updated: {}", op.property_name)));
        };
        let value = field_type
            .to_bson(&op.value)
            .map_err(|e| AppError::Validation(format!("Invalid value for {}: {}", name, e)))?;
        set.insert(*name, value);
    }
    set.insert("updated_at", date_util::now_millis());
    Ok(doc! { "$set": set })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn op(name: &str, value: serde_json::Value) -> PropertyValue {
        PropertyValue { property_name: name.to_string(), value }
    }

    #[test]
    fn update_doc_sets_typed_values() {
        let update = build_update_doc(&[op("population", json!(500)), op("name", json!("Wakanda"))]).unwrap();
        let set = update.get_document("$set").unwrap();
        assert_eq!(set.get_i64("population").unwrap(), 500);
        assert_eq!(set.get_str("name").unwrap(), "Wakanda");
    }

    #[test]
    fn update_doc_always_refreshes_updated_at() {
        let update = build_update_doc(&[]).unwrap();
        let set = update.get_document("$set").unwrap();
        assert!(set.contains_key("updated_at"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn update_doc_rejects_unknown_properties() {
        for name in ["_id", "created_at", "updated_at", "ruler"] {
            let err = build_update_doc(&[op(name, json!("x"))]).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "{name} should be rejected");
        }
    }

    #[test]
    fn update_doc_rejects_mistyped_values() {
        assert!(matches!(build_update_doc(&[op("population", json!("lots"))]), Err(AppError::Validation(_))));
        assert!(matches!(build_update_doc(&[op("name", json!(7))]), Err(AppError::Validation(_))));
        assert!(matches!(build_update_doc(&[op("area", json!("wide"))]), Err(AppError::Validation(_))));
    }

    #[test]
    fn update_doc_accepts_every_allow_listed_field() {
        let ops: Vec<PropertyValue> = MUTABLE_FIELDS
            .iter()
            .map(|&(name, field_type)| {
                let value = match field_type {
                    FieldType::Text => json!("x"),
                    FieldType::Double => json!(1.5),
                    FieldType::Long => json!(7),
                };
                op(name, value)
            })
            .collect();
        let update = build_update_doc(&ops).unwrap();
        let set = update.get_document("$set").unwrap();
        // every field plus updated_at
        assert_eq!(set.len(), MUTABLE_FIELDS.len() + 1);
    }
}
