use common::repository_util::OrderType;
use mongodb::bson::Document;

const DEFAULT_SORT: &str = "name_asc";

/// Parses a comma-separated list of `field_direction` tokens.
///
/// The direction is taken from the last underscore segment only when it is
/// a known keyword, so underscore-bearing fields (`currency_code_desc`)
/// keep their full name. Anything else sorts ascending by the whole token.
pub fn parse_sort_tokens(raw: Option<&str>) -> Vec<(String, OrderType)> {
    let spec = match raw {
        Some(s) if !s.trim().is_empty() => s,
        _ => DEFAULT_SORT,
    };
    spec.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(split_token)
        .collect()
}

/// Multi-key BSON sort document; earlier fields take priority.
pub fn sort_document(raw: Option<&str>) -> Document {
    let mut sort = Document::new();
    for (field, order) in parse_sort_tokens(raw) {
        sort.insert(field, order.direction());
    }
    if sort.is_empty() {
        sort.insert("name", OrderType::Asc.direction());
    }
    sort
}

fn split_token(token: &str) -> (String, OrderType) {
    match token.rsplit_once('_') {
        Some((field, dir)) if dir.eq_ignore_ascii_case("desc") => (field.to_string(), OrderType::Desc),
        Some((field, dir)) if dir.eq_ignore_ascii_case("asc") => (field.to_string(), OrderType::Asc),
        _ => (token.to_string(), OrderType::Asc),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn default_is_name_ascending() {
        assert_eq!(sort_document(None), doc! { "name": 1 });
        assert_eq!(sort_document(Some("")), doc! { "name": 1 });
        assert_eq!(sort_document(Some("  ")), doc! { "name": 1 });
    }

    #[test]
    fn explicit_directions() {
        assert_eq!(sort_document(Some("population_desc")), doc! { "population": -1 });
        assert_eq!(sort_document(Some("name_asc")), doc! { "name": 1 });
    }

    #[test]
    fn direction_keyword_is_case_insensitive() {
        assert_eq!(sort_document(Some("population_DESC")), doc! { "population": -1 });
        assert_eq!(sort_document(Some("name_Asc")), doc! { "name": 1 });
    }

    #[test]
    fn underscore_fields_keep_their_full_name() {
        assert_eq!(sort_document(Some("currency_code_desc")), doc! { "currency_code": -1 });
        // no direction suffix: the whole token is the field
        assert_eq!(sort_document(Some("currency_code")), doc! { "currency_code": 1 });
    }

    #[test]
    fn unknown_suffix_sorts_ascending_by_whole_token() {
        assert_eq!(sort_document(Some("population_down")), doc! { "population_down": 1 });
    }

    #[test]
    fn multi_key_order_is_preserved() {
        let tokens = parse_sort_tokens(Some("population_desc,name_asc,area"));
        assert_eq!(
            tokens,
            vec![
                ("population".to_string(), OrderType::Desc),
                ("name".to_string(), OrderType::Asc),
                ("area".to_string(), OrderType::Asc),
            ]
        );
        let sort = sort_document(Some("population_desc,name_asc"));
        assert_eq!(sort.iter().count(), 2);
        assert_eq!(sort.keys().next().unwrap(), "population");
    }

    #[test]
    fn blank_tokens_are_skipped() {
        assert_eq!(sort_document(Some("population_desc,,name_asc")), doc! { "population": -1, "name": 1 });
        assert_eq!(sort_document(Some(",")), doc! { "name": 1 });
    }
}
