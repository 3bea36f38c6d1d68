//! Product catalog loading.
//!
//! Accepts either a bare JSON array of products or an object carrying a
//! `products` array, read from a file or from stdin when the path is `-`.

use super::Product;
use crate::error::{CatalogErrorKind, ErrorContext, RankingError, Result};
use serde_json::Value;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

/// Parse a product list from JSON text, keeping the supplied order.
pub fn parse_products(text: &str) -> Result<Vec<Product>> {
    let document: Value = serde_json::from_str(text)?;
    let list = match document {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut map) => match map.remove("products") {
            Some(list @ Value::Array(_)) => list,
            Some(other) => {
                return Err(RankingError::catalog(
                    "reading 'products' field",
                    CatalogErrorKind::UnexpectedShape(json_kind(&other).to_string()),
                ))
            }
            None => {
                return Err(RankingError::catalog(
                    "reading document",
                    CatalogErrorKind::UnexpectedShape("an object without 'products'".to_string()),
                ))
            }
        },
        other => {
            return Err(RankingError::catalog(
                "reading document",
                CatalogErrorKind::UnexpectedShape(json_kind(&other).to_string()),
            ))
        }
    };

    let products: Vec<Product> = serde_json::from_value(list)?;
    ensure_unique_ids(&products)?;
    tracing::debug!(count = products.len(), "parsed product catalog");
    Ok(products)
}

/// Load a product list from `path`, or from stdin when `path` is `-`.
pub fn load_products(path: &Path) -> Result<Vec<Product>> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading products from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|e| RankingError::io(path, e))?
    };

    parse_products(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Reject lists in which two products share an id.
pub fn ensure_unique_ids(products: &[Product]) -> Result<()> {
    let mut seen = HashSet::with_capacity(products.len());
    for product in products {
        if !seen.insert(&product.id) {
            return Err(RankingError::duplicate_id(product.id.to_string()));
        }
    }
    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;

    const TWO_PRODUCTS: &str = r#"[
        {"id": 1, "name": "A", "imageURL": "a.png", "brandInfo": {"name": "Alpha"}, "price": {"sellingPrice": 1000}},
        {"id": 2, "name": "B", "imageURL": "b.png", "brandInfo": {"name": "Beta"}, "price": {"sellingPrice": 2000}}
    ]"#;

    #[test]
    fn test_parse_bare_array_keeps_order() {
        let products = parse_products(TWO_PRODUCTS).expect("valid catalog");
        let ids: Vec<_> = products.iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids, vec![ProductId::Number(1), ProductId::Number(2)]);
    }

    #[test]
    fn test_parse_wrapped_object() {
        let wrapped = format!(r#"{{"products": {TWO_PRODUCTS}}}"#);
        let products = parse_products(&wrapped).expect("valid catalog");
        assert_eq!(products.len(), 2);
    }

    #[test]
    fn test_empty_list_is_fine() {
        assert!(parse_products("[]").expect("valid catalog").is_empty());
    }

    #[test]
    fn test_rejects_scalar_document() {
        let err = parse_products("42").unwrap_err();
        assert!(matches!(
            err,
            RankingError::Catalog {
                source: CatalogErrorKind::UnexpectedShape(ref kind),
                ..
            } if kind == "a number"
        ));
    }

    #[test]
    fn test_rejects_object_without_products() {
        let err = parse_products(r#"{"items": []}"#).unwrap_err();
        assert!(matches!(
            err,
            RankingError::Catalog {
                source: CatalogErrorKind::UnexpectedShape(_),
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let dup = r#"[
            {"id": 5, "name": "A", "brandInfo": {"name": "x"}, "price": {"sellingPrice": 1}},
            {"id": 5, "name": "B", "brandInfo": {"name": "y"}, "price": {"sellingPrice": 2}}
        ]"#;
        let err = parse_products(dup).unwrap_err();
        assert!(matches!(
            err,
            RankingError::Catalog {
                source: CatalogErrorKind::DuplicateId(ref id),
                ..
            } if id == "5"
        ));
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = load_products(Path::new("/definitely/not/here.json")).unwrap_err();
        match err {
            RankingError::Io { path, .. } => {
                assert_eq!(path.as_deref(), Some(Path::new("/definitely/not/here.json")));
            }
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
