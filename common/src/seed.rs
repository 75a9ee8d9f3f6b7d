use crate::catalog::CatalogState;
use crate::currency::usd_cents_to_paise;
use crate::product::{Category, ProductDraft};

/// The four-product demo catalog the shop starts with when no catalog
/// has been persisted yet.
pub fn demo_catalog() -> CatalogState {
    let mut catalog = CatalogState::default();

    catalog.insert(ProductDraft {
        title: "ATKU Classic T-Shirt".into(),
        description: "Premium cotton t-shirt with ATKU logo on the front. Comfortable fit for everyday wear.".into(),
        price_paise: usd_cents_to_paise(2999),
        category: Category::TShirts,
        images: vec![
            "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=60".into(),
            "https://images.unsplash.com/photo-1503341504253-dff4815485f1?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=60".into(),
            "https://images.unsplash.com/photo-1503342217505-b0a15ec3261c?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=60".into(),
        ],
        sizes: vec!["S".into(), "M".into(), "L".into(), "XL".into()],
        colors: vec!["Black".into(), "White".into(), "Gray".into()],
        in_stock: true,
        featured: true,
    });

    catalog.insert(ProductDraft {
        title: "ATKU Hoodie".into(),
        description: "Warm and stylish hoodie with ATKU embroidered logo. Perfect for cooler weather.".into(),
        price_paise: usd_cents_to_paise(4999),
        category: Category::Hoodies,
        images: vec![
            "https://images.unsplash.com/photo-1556821840-3a63f95609a7?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=60".into(),
            "https://images.unsplash.com/photo-1578768079050-7b3a5ec23b8d?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=60".into(),
            "https://images.unsplash.com/photo-1564557287817-3785e38ec1f5?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=60".into(),
        ],
        sizes: vec!["S".into(), "M".into(), "L".into(), "XL".into()],
        colors: vec!["Black".into(), "Navy".into(), "Maroon".into()],
        in_stock: true,
        featured: false,
    });

    catalog.insert(ProductDraft {
        title: "ATKU Denim Jacket".into(),
        description: "Stylish denim jacket with ATKU patches. A statement piece for your wardrobe.".into(),
        price_paise: usd_cents_to_paise(7999),
        category: Category::Jackets,
        images: vec![
            "https://images.unsplash.com/photo-1551537482-f2075a1d41f2?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=60".into(),
            "https://images.unsplash.com/photo-1601333144130-8cbb312386b6?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=60".into(),
            "https://images.unsplash.com/photo-1548126032-079a0fb0099d?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=60".into(),
        ],
        sizes: vec!["S".into(), "M".into(), "L".into(), "XL".into()],
        colors: vec!["Blue".into(), "Black".into()],
        in_stock: true,
        featured: true,
    });

    catalog.insert(ProductDraft {
        title: "ATKU Cap".into(),
        description: "Adjustable cap with embroidered ATKU logo. One size fits most.".into(),
        price_paise: usd_cents_to_paise(2499),
        category: Category::Accessories,
        images: vec![
            "https://images.unsplash.com/photo-1588850561407-ed78c282e89b?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=60".into(),
            "https://images.unsplash.com/photo-1521369909029-2afed882baee?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=60".into(),
        ],
        sizes: vec!["One Size".into()],
        colors: vec!["Black".into(), "White".into(), "Navy".into()],
        in_stock: true,
        featured: false,
    });

    catalog
}
