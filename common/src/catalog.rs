use serde::{Deserialize, Serialize};

use crate::product::{Category, Product, ProductDraft, ProductId, ProductPatch};

/// Default upper price bound for the browse filter: ₹75,000.
pub const DEFAULT_MAX_PRICE_PAISE: u64 = 7_500_000;

/// Category narrowing for the browse filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    Any,
    Only(Category),
}

impl CategoryFilter {
    fn admits(&self, category: Category) -> bool {
        match self {
            CategoryFilter::Any => true,
            CategoryFilter::Only(only) => *only == category,
        }
    }
}

/// Browse criteria applied over the full catalog. Session-only state:
/// never persisted, reset by `clear`.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub category: CategoryFilter,
    /// Inclusive price bounds, in paise.
    pub min_paise: u64,
    pub max_paise: u64,
    /// Case-insensitive substring match against title or description.
    pub query: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            category: CategoryFilter::Any,
            min_paise: 0,
            max_paise: DEFAULT_MAX_PRICE_PAISE,
            query: String::new(),
        }
    }
}

impl FilterCriteria {
    /// All predicates are independent and AND-ed.
    pub fn matches(&self, product: &Product) -> bool {
        if !self.category.admits(product.category) {
            return false;
        }
        if product.price_paise < self.min_paise || product.price_paise > self.max_paise {
            return false;
        }
        if !self.query.is_empty() {
            let query = self.query.to_lowercase();
            if !product.title.to_lowercase().contains(&query)
                && !product.description.to_lowercase().contains(&query)
            {
                return false;
            }
        }
        true
    }

    /// Shallow-merge a patch: only fields present in the patch change.
    pub fn apply(&mut self, patch: FilterPatch) {
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(min_paise) = patch.min_paise {
            self.min_paise = min_paise;
        }
        if let Some(max_paise) = patch.max_paise {
            self.max_paise = max_paise;
        }
        if let Some(query) = patch.query {
            self.query = query;
        }
    }
}

/// Partial filter update. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct FilterPatch {
    pub category: Option<CategoryFilter>,
    pub min_paise: Option<u64>,
    pub max_paise: Option<u64>,
    pub query: Option<String>,
}

/// The full product catalog, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogState {
    pub products: Vec<Product>,
}

impl CatalogState {
    /// Append a new product under a fresh id. No title uniqueness check.
    pub fn insert(&mut self, draft: ProductDraft) -> ProductId {
        let id = ProductId::new();
        self.products.push(draft.into_product(id));
        id
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Shallow-merge a patch into the product. Returns false if the id is unknown.
    pub fn update(&mut self, id: ProductId, patch: ProductPatch) -> bool {
        match self.products.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                product.apply(patch);
                true
            }
            None => false,
        }
    }

    /// Drop the product. Returns false if the id is unknown.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        self.products.len() != before
    }

    pub fn featured(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    /// Evaluated fresh on every call; no caching.
    pub fn filtered(&self, criteria: &FilterCriteria) -> Vec<&Product> {
        self.products.iter().filter(|p| criteria.matches(p)).collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
