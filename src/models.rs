use mongodb::bson::{doc, Document};
use serde::Serialize;
use serde_json::Value;
use std::str::FromStr;

pub const DEFAULT_NAME: &str = "Unnamed Product";
pub const DEFAULT_DESCRIPTION: &str = "No description available.";
pub const DEFAULT_PRICE: &str = "N/A";

/// Which sample catalog is seeded and how products are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Full records: name, category, description and price.
    Catalog,
    /// Name-only records.
    Basic,
}

impl Variant {
    pub fn cors_by_default(&self) -> bool {
        matches!(self, Variant::Catalog)
    }

    /// Sample documents inserted into an empty collection, in insertion order.
    pub fn seed_documents(&self) -> Vec<Document> {
        match self {
            Variant::Catalog => vec![
                doc! {
                    "name": "T-shirt",
                    "category": "Men",
                    "description": "100% cotton casual wear",
                    "price": 499,
                },
                doc! {
                    "name": "Saree",
                    "category": "Women",
                    "description": "Elegant traditional silk saree",
                    "price": 1499,
                },
                doc! {
                    "name": "Laptop",
                    "category": "Electronics",
                    "description": "i7, 16GB RAM, 512GB SSD",
                    "price": 55999,
                },
                doc! {
                    "name": "Sofa",
                    "category": "Home",
                    "description": "Luxury 3-seater sofa",
                    "price": 23999,
                },
                doc! {
                    "name": "Cricket Bat",
                    "category": "Sports",
                    "description": "Professional grade willow bat",
                    "price": 1999,
                },
                doc! {
                    "name": "Novel",
                    "category": "Books",
                    "description": "Fictional thriller bestseller",
                    "price": 299,
                },
            ],
            Variant::Basic => ["T-shirt", "Shoes", "Hoodie"]
                .iter()
                .map(|name| doc! { "name": *name })
                .collect(),
        }
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "catalog" => Ok(Variant::Catalog),
            "basic" => Ok(Variant::Basic),
            other => Err(format!("unknown variant: {}", other)),
        }
    }
}

/// A product as returned by `GET /products`.
#[derive(Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum ProductView {
    Full {
        name: Value,
        description: Value,
        price: Value,
    },
    Named {
        name: Value,
    },
}

impl ProductView {
    pub fn from_document(variant: Variant, document: &Document) -> Self {
        match variant {
            Variant::Catalog => ProductView::Full {
                name: field_or(document, "name", DEFAULT_NAME),
                description: field_or(document, "description", DEFAULT_DESCRIPTION),
                price: field_or(document, "price", DEFAULT_PRICE),
            },
            Variant::Basic => ProductView::Named {
                name: field_or(document, "name", DEFAULT_NAME),
            },
        }
    }
}

fn field_or(document: &Document, key: &str, default: &str) -> Value {
    document
        .get(key)
        .cloned()
        .map(|value| value.into_relaxed_extjson())
        .unwrap_or_else(|| Value::String(default.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn catalog_view_passes_through_stored_fields() {
        let laptop = &Variant::Catalog.seed_documents()[2];
        let view = ProductView::from_document(Variant::Catalog, laptop);
        assert_eq!(
            serde_json::to_value(&view).unwrap(),
            json!({"name": "Laptop", "description": "i7, 16GB RAM, 512GB SSD", "price": 55999})
        );
    }

    #[test]
    fn catalog_view_fills_missing_fields() {
        let view = ProductView::from_document(Variant::Catalog, &doc! { "category": "Misc" });
        assert_eq!(
            serde_json::to_value(&view).unwrap(),
            json!({
                "name": "Unnamed Product",
                "description": "No description available.",
                "price": "N/A"
            })
        );

        let view = ProductView::from_document(Variant::Catalog, &doc! { "name": "Mug", "price": 4.5 });
        assert_eq!(
            serde_json::to_value(&view).unwrap(),
            json!({"name": "Mug", "description": "No description available.", "price": 4.5})
        );
    }

    #[test]
    fn basic_view_exposes_only_name() {
        let view = ProductView::from_document(
            Variant::Basic,
            &doc! { "name": "Shoes", "price": 10, "_id": mongodb::bson::oid::ObjectId::new() },
        );
        assert_eq!(serde_json::to_value(&view).unwrap(), json!({"name": "Shoes"}));
    }

    #[test]
    fn seed_sets_are_fixed() {
        let catalog = Variant::Catalog.seed_documents();
        assert_eq!(catalog.len(), 6);
        assert!(catalog.iter().all(|d| d.contains_key("category")));

        let basic = Variant::Basic.seed_documents();
        let names: Vec<&str> = basic.iter().map(|d| d.get_str("name").unwrap()).collect();
        assert_eq!(names, vec!["T-shirt", "Shoes", "Hoodie"]);
    }

    #[test]
    fn variant_parses_case_insensitively() {
        assert_eq!("Catalog".parse::<Variant>(), Ok(Variant::Catalog));
        assert_eq!(" basic ".parse::<Variant>(), Ok(Variant::Basic));
        assert!("other".parse::<Variant>().is_err());
    }
}
