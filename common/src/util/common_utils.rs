use crate::errors::AppError;
use mongodb::bson::oid::ObjectId;

/// Parses a path/body identifier, failing with the route's own message
/// before any store access happens.
pub fn parse_object_id(raw: &str, message: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(raw).map_err(|_| AppError::Validation(message.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_ids() {
        let id = parse_object_id("65a1b2c3d4e5f6a7b8c9d0e1", "Invalid country ID format").unwrap();
        assert_eq!(id.to_hex(), "65a1b2c3d4e5f6a7b8c9d0e1");
    }

    #[test]
    fn rejects_malformed_ids_with_route_message() {
        for raw in ["wakanda", "65a1b2c3", "65a1b2c3d4e5f6a7b8c9d0e1ff", ""] {
            let err = parse_object_id(raw, "Invalid country ID format").unwrap_err();
            match err {
                AppError::Validation(message) => assert_eq!(message, "Invalid country ID format"),
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }
}
