//! ATKU shop command-line front end.
//!
//! Drives one [`Storefront`] per invocation over a JSON-file data
//! directory: browse and filter the catalog, manage the cart, check out,
//! inspect orders, and run the admin back-office operations. Sessions
//! persist across invocations, so `atku login` once and keep shopping.
//!
//! The data directory is `--data-dir`, else `$ATKU_DATA_DIR`, else
//! `atku/` under the platform data directory.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use atku_common::catalog::{CategoryFilter, FilterPatch};
use atku_common::currency::format_inr;
use atku_common::order::{Order, OrderId, OrderStatus, PaymentMethod, ShippingAddress};
use atku_common::product::{Category, Product, ProductDraft, ProductId, ProductPatch};
use atku_common::user::ProfilePatch;
use atku_store::{CheckoutRequest, JsonFileStore, Storefront};

#[derive(Parser)]
#[command(name = "atku", about = "ATKU shop command-line front end")]
struct Cli {
    /// Data directory holding the persisted shop state.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Browse the catalog with optional filters.
    Browse {
        /// Only this category (t-shirts, hoodies, jackets, accessories).
        #[arg(long)]
        category: Option<Category>,

        /// Minimum price in rupees (inclusive).
        #[arg(long)]
        min_price: Option<f64>,

        /// Maximum price in rupees (inclusive).
        #[arg(long)]
        max_price: Option<f64>,

        /// Case-insensitive substring of title or description.
        #[arg(long)]
        search: Option<String>,

        /// Only featured products.
        #[arg(long)]
        featured: bool,
    },

    /// Admin product management.
    #[command(subcommand)]
    Product(ProductCmd),

    /// Cart operations.
    #[command(subcommand)]
    Cart(CartCmd),

    /// Place an order from the current cart.
    Checkout {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        address: String,
        #[arg(long)]
        city: String,
        #[arg(long)]
        state: String,
        #[arg(long)]
        zip: String,
        #[arg(long, default_value = "India")]
        country: String,
        /// credit-card, paypal, or cash-on-delivery.
        #[arg(long, default_value = "cash-on-delivery")]
        payment: PaymentMethod,
    },

    /// Order inspection and admin status management.
    #[command(subcommand)]
    Order(OrderCmd),

    /// Log in with email and password.
    Login { email: String, password: String },

    /// Register a new customer account and log in.
    Register {
        name: String,
        email: String,
        password: String,
    },

    /// Tear down the current session.
    Logout,

    /// Show the current session.
    Whoami,

    /// Show or update the signed-in user's profile.
    Profile {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
    },

    /// Reset the catalog to the demo product set.
    Seed,
}

#[derive(Subcommand)]
enum ProductCmd {
    /// Show one product in full.
    Show { id: ProductId },

    /// Add a product to the catalog (admin).
    Add {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Price in rupees.
        #[arg(long)]
        price: f64,
        #[arg(long)]
        category: Category,
        /// Repeat for each image URI; the first is the primary image.
        #[arg(long = "image", required = true)]
        images: Vec<String>,
        #[arg(long = "size", required = true)]
        sizes: Vec<String>,
        #[arg(long = "color", required = true)]
        colors: Vec<String>,
        #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
        in_stock: bool,
        #[arg(long)]
        featured: bool,
    },

    /// Update fields of an existing product (admin).
    Update {
        id: ProductId,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Price in rupees.
        #[arg(long)]
        price: Option<f64>,
        #[arg(long)]
        category: Option<Category>,
        #[arg(long)]
        in_stock: Option<bool>,
        #[arg(long)]
        featured: Option<bool>,
    },

    /// Remove a product from the catalog (admin).
    Remove { id: ProductId },
}

#[derive(Subcommand)]
enum CartCmd {
    /// Show the cart with totals and the checkout breakdown.
    Show,

    /// Add a product to the cart.
    Add {
        id: ProductId,
        #[arg(long)]
        size: String,
        #[arg(long)]
        color: String,
        #[arg(long, default_value_t = 1)]
        qty: u32,
    },

    /// Remove one line from the cart.
    Remove {
        id: ProductId,
        #[arg(long)]
        size: String,
        #[arg(long)]
        color: String,
    },

    /// Set a line's quantity outright.
    Set {
        id: ProductId,
        #[arg(long)]
        size: String,
        #[arg(long)]
        color: String,
        #[arg(long)]
        qty: u32,
    },

    /// Empty the cart.
    Clear,
}

#[derive(Subcommand)]
enum OrderCmd {
    /// List orders: all of them for admins, your own otherwise.
    List {
        /// Only orders in this status.
        #[arg(long)]
        status: Option<OrderStatus>,

        /// Only the N most recent orders.
        #[arg(long)]
        recent: Option<usize>,
    },

    /// Show one order in full.
    Show { id: OrderId },

    /// Move an order to a new status (admin).
    SetStatus { id: OrderId, status: OrderStatus },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let data_dir = resolve_data_dir(cli.data_dir)?;
    tracing::debug!(dir = %data_dir.display(), "opening shop data directory");
    let port = Arc::new(JsonFileStore::open(&data_dir)?);
    let mut shop = Storefront::open_demo(port);

    match cli.command {
        Command::Browse {
            category,
            min_price,
            max_price,
            search,
            featured,
        } => {
            shop.catalog.set_filters(FilterPatch {
                category: category.map(CategoryFilter::Only),
                min_paise: min_price.map(rupees_to_paise),
                max_paise: max_price.map(rupees_to_paise),
                query: search,
            });
            let products = if featured {
                shop.catalog
                    .filtered()
                    .into_iter()
                    .filter(|p| p.featured)
                    .collect()
            } else {
                shop.catalog.filtered()
            };
            if products.is_empty() {
                println!("no products match");
            }
            for product in products {
                print_product_line(product);
            }
        }

        Command::Product(cmd) => run_product(&mut shop, cmd)?,
        Command::Cart(cmd) => run_cart(&mut shop, cmd)?,

        Command::Checkout {
            name,
            email,
            phone,
            address,
            city,
            state,
            zip,
            country,
            payment,
        } => {
            let totals = shop.checkout_totals();
            let id = shop.place_order(CheckoutRequest {
                contact_name: name,
                contact_email: email,
                contact_phone: phone,
                shipping_address: ShippingAddress {
                    address,
                    city,
                    state,
                    zip_code: zip,
                    country,
                },
                payment_method: payment,
            })?;
            println!("order placed: {id}");
            println!("  subtotal  {}", format_inr(totals.subtotal_paise));
            if totals.shipping_paise == 0 {
                println!("  shipping  free");
            } else {
                println!("  shipping  {}", format_inr(totals.shipping_paise));
            }
            println!("  tax       {}", format_inr(totals.tax_paise));
            println!("  total     {}", format_inr(totals.grand_total_paise));
        }

        Command::Order(cmd) => run_order(&mut shop, cmd)?,

        Command::Login { email, password } => {
            let session = shop.auth.login(&email, &password)?;
            println!("logged in as {} ({:?})", session.user.email, session.user.role);
        }

        Command::Register {
            name,
            email,
            password,
        } => {
            let session = shop.auth.register(&name, &email, &password)?;
            println!("registered and logged in as {}", session.user.email);
        }

        Command::Logout => {
            shop.auth.logout()?;
            println!("logged out");
        }

        Command::Whoami => match shop.auth.user() {
            Some(user) => {
                println!("{} <{}> ({:?})", user.name, user.email, user.role);
            }
            None => println!("not logged in"),
        },

        Command::Profile {
            name,
            email,
            phone,
            address,
        } => {
            if name.is_none() && email.is_none() && phone.is_none() && address.is_none() {
                let user = shop.auth.user().context("not logged in")?;
                println!("name:    {}", user.name);
                println!("email:   {}", user.email);
                println!("phone:   {}", user.phone.as_deref().unwrap_or("-"));
                println!("address: {}", user.address.as_deref().unwrap_or("-"));
            } else {
                let user = shop.auth.update_profile(ProfilePatch {
                    name,
                    email,
                    phone,
                    address,
                })?;
                println!("profile updated for {}", user.email);
            }
        }

        Command::Seed => {
            shop.catalog.reset_to_demo()?;
            println!("catalog reset to the demo product set");
        }
    }

    Ok(())
}

fn run_product(shop: &mut Storefront, cmd: ProductCmd) -> Result<()> {
    match cmd {
        ProductCmd::Show { id } => {
            let product = shop
                .catalog
                .product(id)
                .with_context(|| format!("product {id} not found"))?;
            print_product_full(product);
        }

        ProductCmd::Add {
            title,
            description,
            price,
            category,
            images,
            sizes,
            colors,
            in_stock,
            featured,
        } => {
            require_admin(shop)?;
            let id = shop.catalog.add_product(ProductDraft {
                title,
                description,
                price_paise: rupees_to_paise(price),
                category,
                images,
                sizes,
                colors,
                in_stock,
                featured,
            })?;
            println!("product added: {id}");
        }

        ProductCmd::Update {
            id,
            title,
            description,
            price,
            category,
            in_stock,
            featured,
        } => {
            require_admin(shop)?;
            shop.catalog.update_product(
                id,
                ProductPatch {
                    title,
                    description,
                    price_paise: price.map(rupees_to_paise),
                    category,
                    in_stock,
                    featured,
                    ..ProductPatch::default()
                },
            )?;
            println!("product updated: {id}");
        }

        ProductCmd::Remove { id } => {
            require_admin(shop)?;
            shop.catalog.remove_product(id)?;
            println!("product removed: {id}");
        }
    }
    Ok(())
}

fn run_cart(shop: &mut Storefront, cmd: CartCmd) -> Result<()> {
    match cmd {
        CartCmd::Show => {
            if shop.cart.is_empty() {
                println!("cart is empty");
                return Ok(());
            }
            for line in shop.cart.lines() {
                println!(
                    "{}  {} ({}, {})  {} x {} = {}",
                    line.product_id,
                    line.title,
                    line.size,
                    line.color,
                    format_inr(line.price_paise),
                    line.quantity,
                    format_inr(line.subtotal_paise()),
                );
            }
            let totals = shop.checkout_totals();
            println!("items: {}", shop.cart.total_items());
            println!("subtotal: {}", format_inr(totals.subtotal_paise));
            if let Some(remaining) = totals.remaining_for_free_shipping() {
                println!(
                    "add {} more to qualify for free shipping",
                    format_inr(remaining)
                );
            } else {
                println!("this order ships free");
            }
        }

        CartCmd::Add {
            id,
            size,
            color,
            qty,
        } => {
            let product = shop
                .catalog
                .product(id)
                .with_context(|| format!("product {id} not found"))?
                .clone();
            shop.cart.add(&product, qty, &size, &color)?;
            println!(
                "added {} x {} ({}, {})",
                qty, product.title, size, color
            );
        }

        CartCmd::Remove { id, size, color } => {
            shop.cart.remove(id, &size, &color)?;
            println!("line removed");
        }

        CartCmd::Set {
            id,
            size,
            color,
            qty,
        } => {
            shop.cart.set_quantity(id, &size, &color, qty)?;
            println!("quantity set to {qty}");
        }

        CartCmd::Clear => {
            shop.cart.clear()?;
            println!("cart cleared");
        }
    }
    Ok(())
}

fn run_order(shop: &mut Storefront, cmd: OrderCmd) -> Result<()> {
    match cmd {
        OrderCmd::List { status, recent } => {
            let orders: Vec<&Order> = if shop.auth.is_admin() {
                match (status, recent) {
                    (Some(status), _) => shop.orders.by_status(status),
                    (None, Some(limit)) => shop.orders.recent(limit),
                    (None, None) => shop.orders.all().iter().collect(),
                }
            } else {
                // Customers only ever see their own orders
                let user = shop.auth.user().context("not logged in")?;
                shop.orders
                    .by_customer(user.id)
                    .into_iter()
                    .filter(|o| status.is_none_or(|s| o.status == s))
                    .collect()
            };
            if orders.is_empty() {
                println!("no orders");
            }
            for order in orders {
                println!(
                    "{}  {}  {}  {}  {}",
                    order.id,
                    order.created_at.format("%Y-%m-%d %H:%M"),
                    order.status,
                    format_inr(order.total_paise),
                    order.customer.name,
                );
            }
        }

        OrderCmd::Show { id } => {
            let order = shop
                .orders
                .get(id)
                .with_context(|| format!("order {id} not found"))?;
            println!("order {}", order.id);
            println!("  placed:   {}", order.created_at.to_rfc3339());
            println!("  updated:  {}", order.updated_at.to_rfc3339());
            println!("  status:   {}", order.status);
            println!("  payment:  {} ({:?})", order.payment_method, order.payment_status);
            println!(
                "  customer: {} <{}> {}",
                order.customer.name, order.customer.email, order.customer.phone
            );
            let addr = &order.shipping_address;
            println!(
                "  ship to:  {}, {}, {} {}, {}",
                addr.address, addr.city, addr.state, addr.zip_code, addr.country
            );
            for line in &order.items {
                println!(
                    "    {} ({}, {})  {} x {}",
                    line.title,
                    line.size,
                    line.color,
                    format_inr(line.price_paise),
                    line.quantity,
                );
            }
            println!("  total:    {}", format_inr(order.total_paise));
        }

        OrderCmd::SetStatus { id, status } => {
            require_admin(shop)?;
            shop.orders.set_status(id, status)?;
            println!("order {id} is now {status}");
        }
    }
    Ok(())
}

fn require_admin(shop: &Storefront) -> Result<()> {
    if !shop.auth.is_admin() {
        bail!("this command requires an admin session (try `atku login`)");
    }
    Ok(())
}

fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Ok(dir) = std::env::var("ATKU_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let base = dirs::data_dir().context("could not determine a data directory")?;
    Ok(base.join("atku"))
}

fn rupees_to_paise(rupees: f64) -> u64 {
    (rupees * 100.0).round() as u64
}

fn print_product_line(product: &Product) {
    let mut flags = String::new();
    if product.featured {
        flags.push_str("  [featured]");
    }
    if !product.in_stock {
        flags.push_str("  [out of stock]");
    }
    println!(
        "{}  {}  {}  {}{}",
        product.id,
        product.title,
        format_inr(product.price_paise),
        product.category,
        flags,
    );
}

fn print_product_full(product: &Product) {
    println!("{}  {}", product.id, product.title);
    println!("  {}", product.description);
    println!("  price:    {}", format_inr(product.price_paise));
    println!("  category: {}", product.category);
    println!("  sizes:    {}", product.sizes.join(", "));
    println!("  colors:   {}", product.colors.join(", "));
    println!("  in stock: {}", product.in_stock);
    println!("  featured: {}", product.featured);
    for image in &product.images {
        println!("  image:    {image}");
    }
}
