use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ProductId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Merchandise category of a catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    TShirts,
    Hoodies,
    Jackets,
    Accessories,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[
            Category::TShirts,
            Category::Hoodies,
            Category::Jackets,
            Category::Accessories,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::TShirts => "T-Shirts",
            Category::Hoodies => "Hoodies",
            Category::Jackets => "Jackets",
            Category::Accessories => "Accessories",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "t-shirts" | "tshirts" => Ok(Category::TShirts),
            "hoodies" => Ok(Category::Hoodies),
            "jackets" => Ok(Category::Jackets),
            "accessories" => Ok(Category::Accessories),
            other => Err(format!("unknown category: {other}")),
        }
    }
}

/// A product listed in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    /// Unit price in paise (smallest INR unit).
    pub price_paise: u64,
    pub category: Category,
    /// Image URIs, primary image first. Never empty for a well-formed product.
    pub images: Vec<String>,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub in_stock: bool,
    pub featured: bool,
}

impl Product {
    /// The image copied into cart and order lines.
    pub fn primary_image(&self) -> &str {
        self.images.first().map(String::as_str).unwrap_or("")
    }

    /// Shallow-merge a patch: only fields present in the patch change.
    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price_paise) = patch.price_paise {
            self.price_paise = price_paise;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(images) = patch.images {
            self.images = images;
        }
        if let Some(sizes) = patch.sizes {
            self.sizes = sizes;
        }
        if let Some(colors) = patch.colors {
            self.colors = colors;
        }
        if let Some(in_stock) = patch.in_stock {
            self.in_stock = in_stock;
        }
        if let Some(featured) = patch.featured {
            self.featured = featured;
        }
    }
}

/// Fields supplied when creating a product. The catalog assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    pub price_paise: u64,
    pub category: Category,
    pub images: Vec<String>,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub in_stock: bool,
    pub featured: bool,
}

impl ProductDraft {
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            title: self.title,
            description: self.description,
            price_paise: self.price_paise,
            category: self.category,
            images: self.images,
            sizes: self.sizes,
            colors: self.colors,
            in_stock: self.in_stock,
            featured: self.featured,
        }
    }
}

/// Partial product update. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price_paise: Option<u64>,
    pub category: Option<Category>,
    pub images: Option<Vec<String>>,
    pub sizes: Option<Vec<String>>,
    pub colors: Option<Vec<String>>,
    pub in_stock: Option<bool>,
    pub featured: Option<bool>,
}
