use serde::{Deserialize, Serialize};

use crate::product::{Product, ProductId};

/// One cart entry. Identity is the (product, size, color) triple; title,
/// price and image are copies taken from the product at add time and do
/// not follow later catalog edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub title: String,
    /// Unit price in paise at add time.
    pub price_paise: u64,
    pub image: String,
    pub size: String,
    pub color: String,
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal_paise(&self) -> u64 {
        self.price_paise * u64::from(self.quantity)
    }
}

/// The shopping cart: line items plus two denormalized aggregates.
/// Both aggregates are re-derived from the lines after every mutation
/// and must never disagree with them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartState {
    pub items: Vec<CartLine>,
    pub total_items: u32,
    pub total_paise: u64,
}

impl CartState {
    fn position(&self, product_id: ProductId, size: &str, color: &str) -> Option<usize> {
        self.items
            .iter()
            .position(|line| line.product_id == product_id && line.size == size && line.color == color)
    }

    /// Add `quantity` units of the product in the given size and color.
    /// An existing line for the same triple is incremented; otherwise a
    /// new denormalized line is appended.
    pub fn add(&mut self, product: &Product, quantity: u32, size: &str, color: &str) {
        match self.position(product.id, size, color) {
            Some(index) => self.items[index].quantity += quantity,
            None => self.items.push(CartLine {
                product_id: product.id,
                title: product.title.clone(),
                price_paise: product.price_paise,
                image: product.primary_image().to_string(),
                size: size.to_string(),
                color: color.to_string(),
                quantity,
            }),
        }
        self.recompute();
    }

    /// Remove the matching line. Returns false (cart untouched) if no
    /// line matches the triple.
    pub fn remove(&mut self, product_id: ProductId, size: &str, color: &str) -> bool {
        match self.position(product_id, size, color) {
            Some(index) => {
                self.items.remove(index);
                self.recompute();
                true
            }
            None => false,
        }
    }

    /// Replace (not add to) the matching line's quantity. Returns false
    /// (cart untouched) if no line matches the triple.
    pub fn set_quantity(
        &mut self,
        product_id: ProductId,
        size: &str,
        color: &str,
        quantity: u32,
    ) -> bool {
        match self.position(product_id, size, color) {
            Some(index) => {
                self.items[index].quantity = quantity;
                self.recompute();
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.recompute();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn recompute(&mut self) {
        self.total_items = self.items.iter().map(|line| line.quantity).sum();
        self.total_paise = self.items.iter().map(CartLine::subtotal_paise).sum();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Category;

    fn dummy_product(title: &str, price_paise: u64) -> Product {
        Product {
            id: ProductId::new(),
            title: title.into(),
            description: String::new(),
            price_paise,
            category: Category::TShirts,
            images: vec!["https://example.com/a.jpg".into(), "https://example.com/b.jpg".into()],
            sizes: vec!["S".into(), "M".into()],
            colors: vec!["Black".into(), "White".into()],
            in_stock: true,
            featured: false,
        }
    }

    #[test]
    fn repeated_add_of_same_triple_increments_one_line() {
        let product = dummy_product("Classic T-Shirt", 224_925);
        let mut cart = CartState::default();

        cart.add(&product, 1, "S", "Black");
        cart.add(&product, 2, "S", "Black");

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 3);
        assert_eq!(cart.total_items, 3);
        assert_eq!(cart.total_paise, 674_775);
    }

    #[test]
    fn same_product_different_size_or_color_gets_own_line() {
        let product = dummy_product("Classic T-Shirt", 224_925);
        let mut cart = CartState::default();

        cart.add(&product, 1, "S", "Black");
        cart.add(&product, 1, "M", "Black");
        cart.add(&product, 1, "S", "White");

        assert_eq!(cart.items.len(), 3);
        assert_eq!(cart.total_items, 3);
    }

    #[test]
    fn line_snapshots_price_and_primary_image() {
        let product = dummy_product("Hoodie", 374_925);
        let mut cart = CartState::default();
        cart.add(&product, 1, "M", "Black");

        let line = &cart.items[0];
        assert_eq!(line.title, "Hoodie");
        assert_eq!(line.price_paise, 374_925);
        assert_eq!(line.image, "https://example.com/a.jpg");
    }

    #[test]
    fn totals_track_every_mutation() {
        let tee = dummy_product("Tee", 100_000);
        let cap = dummy_product("Cap", 50_000);
        let mut cart = CartState::default();

        cart.add(&tee, 2, "S", "Black");
        cart.add(&cap, 1, "One Size", "Navy");
        assert_eq!(cart.total_items, 3);
        assert_eq!(cart.total_paise, 250_000);

        assert!(cart.set_quantity(tee.id, "S", "Black", 1));
        assert_eq!(cart.total_items, 2);
        assert_eq!(cart.total_paise, 150_000);

        assert!(cart.remove(cap.id, "One Size", "Navy"));
        assert_eq!(cart.total_items, 1);
        assert_eq!(cart.total_paise, 100_000);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items, 0);
        assert_eq!(cart.total_paise, 0);
    }

    #[test]
    fn set_quantity_replaces_rather_than_adds() {
        let product = dummy_product("Tee", 100_000);
        let mut cart = CartState::default();
        cart.add(&product, 5, "S", "Black");

        assert!(cart.set_quantity(product.id, "S", "Black", 2));
        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.total_paise, 200_000);
    }

    #[test]
    fn remove_then_re_add_matches_fresh_add() {
        let product = dummy_product("Tee", 100_000);
        let mut fresh = CartState::default();
        fresh.add(&product, 2, "S", "Black");

        let mut cart = CartState::default();
        cart.add(&product, 5, "S", "Black");
        assert!(cart.remove(product.id, "S", "Black"));
        cart.add(&product, 2, "S", "Black");

        assert_eq!(cart, fresh);
    }

    #[test]
    fn missing_triple_is_reported_and_leaves_cart_untouched() {
        let product = dummy_product("Tee", 100_000);
        let mut cart = CartState::default();
        cart.add(&product, 1, "S", "Black");
        let before = cart.clone();

        assert!(!cart.remove(product.id, "M", "Black"));
        assert!(!cart.set_quantity(product.id, "S", "White", 4));
        assert!(!cart.remove(ProductId::new(), "S", "Black"));
        assert_eq!(cart, before);
    }
}
