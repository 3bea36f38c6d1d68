use serde::{Deserialize, Serialize};
use std::fmt;

/// Product identifier as shipped by the storefront API.
///
/// The API uses numeric ids, but string ids are accepted so fixtures and
/// other feeds load without conversion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

/// Brand descriptor attached to a product.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BrandInfo {
    pub name: String,
}

/// Price descriptor attached to a product.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub selling_price: f64,
}

/// A single ranked product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(rename = "imageURL", default)]
    pub image_url: String,
    pub brand_info: BrandInfo,
    pub price: Price,
}

impl Product {
    /// Create a product with an empty brand, no image and a zero price.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image_url: String::new(),
            brand_info: BrandInfo::default(),
            price: Price::default(),
        }
    }

    #[must_use]
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand_info.name = brand.into();
        self
    }

    #[must_use]
    pub fn with_price(mut self, selling_price: f64) -> Self {
        self.price.selling_price = selling_price;
        self
    }

    #[must_use]
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    pub fn brand_name(&self) -> &str {
        &self.brand_info.name
    }

    pub fn selling_price(&self) -> f64 {
        self.price.selling_price
    }
}
