//! CLI administration tool for ddd-store.
//!
//! Drives the application services against the configured SQLite database:
//! registering customers, maintaining the catalog and placing orders.
//!
//! # Usage
//!
//! ```bash
//! # Apply migrations
//! cargo run --bin admin -- db migrate
//!
//! # Register a customer with an address
//! cargo run --bin admin -- customer create --name "Customer 1" \
//!     --street "Street 1" --number 1 --zip "Zipcode 1" --city "City 1"
//!
//! # Add a product and reprice the catalog
//! cargo run --bin admin -- product create --name "Product 1" --price 10
//! cargo run --bin admin -- product reprice 10
//!
//! # Place an order (product_id:quantity)
//! cargo run --bin admin -- order place <customer_id> --item <product_id>:2
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_PATH`: SQLite database location
//! - `RUST_LOG`, `LOG_FORMAT`: logging
//!
//! Domain events raised by the services are handled by the default log
//! handlers, so their output shows up in the tracing log.

use ddd_store::application::services::{
    CatalogService, CheckoutService, CustomerService, OrderLine,
};
use ddd_store::config;
use ddd_store::domain::entities::{Address, Customer, Order, Product};
use ddd_store::domain::events::{EventDispatcher, register_default_handlers};
use ddd_store::domain::services::OrderService;
use ddd_store::infrastructure::database;
use ddd_store::infrastructure::persistence::{
    SqliteCustomerRepository, SqliteOrderRepository, SqliteProductRepository,
};
use ddd_store::logging;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing ddd-store.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Manage customers
    Customer {
        #[command(subcommand)]
        action: CustomerAction,
    },

    /// Manage the product catalog
    Product {
        #[command(subcommand)]
        action: ProductAction,
    },

    /// Place and inspect orders
    Order {
        #[command(subcommand)]
        action: OrderAction,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Apply pending migrations
    Migrate,

    /// Check database connection
    Check,
}

/// Address fields shared by `customer create` and `customer move`.
#[derive(Args)]
struct AddressArgs {
    #[arg(long)]
    street: Option<String>,

    #[arg(long)]
    number: Option<i64>,

    #[arg(long)]
    zip: Option<String>,

    #[arg(long)]
    city: Option<String>,
}

#[derive(Subcommand)]
enum CustomerAction {
    /// Register a customer; with an address the customer is activated
    Create {
        #[arg(short, long)]
        name: Option<String>,

        #[command(flatten)]
        address: AddressArgs,
    },

    /// List all customers
    List,

    /// Change a customer's address
    Move {
        /// Customer id
        id: String,

        #[command(flatten)]
        address: AddressArgs,
    },
}

#[derive(Subcommand)]
enum ProductAction {
    /// Add a product to the catalog
    Create {
        #[arg(short, long)]
        name: Option<String>,

        #[arg(short, long)]
        price: Option<f64>,
    },

    /// List all products
    List,

    /// Raise every product price by a percentage
    Reprice {
        /// Percentage to add (e.g. 10 for +10%)
        percent: f64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum OrderAction {
    /// Place an order for a customer
    Place {
        /// Customer id
        customer: String,

        /// Order line as `product_id:quantity` (repeatable)
        #[arg(short, long = "item", value_parser = parse_line, required = true)]
        items: Vec<OrderLine>,
    },

    /// Replace the items of an order
    Items {
        /// Order id
        id: String,

        /// Order line as `product_id:quantity` (repeatable)
        #[arg(short, long = "item", value_parser = parse_line, required = true)]
        items: Vec<OrderLine>,
    },

    /// List all orders priced at current product prices
    List,

    /// Show one order as stored
    Show {
        /// Order id
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    logging::init(&config);
    config.print_summary();

    let pool = database::connect(&config)
        .await
        .context("Failed to connect to database")?;

    let mut dispatcher = EventDispatcher::new();
    register_default_handlers(&mut dispatcher);
    let dispatcher = Arc::new(dispatcher);

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::Customer { action } => handle_customer_action(action, &pool, dispatcher).await?,
        Commands::Product { action } => handle_product_action(action, &pool, dispatcher).await?,
        Commands::Order { action } => handle_order_action(action, &pool).await?,
    }

    Ok(())
}

async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Migrate => {
            println!("{}", "Applying migrations...".bright_blue());
            database::migrate(pool).await?;
            println!("{}", "Migrations applied".green().bold());
        }
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());
            database::check(pool).await?;
            println!("{}", "Database connection OK".green().bold());
        }
    }

    Ok(())
}

async fn handle_customer_action(
    action: CustomerAction,
    pool: &SqlitePool,
    dispatcher: Arc<EventDispatcher>,
) -> Result<()> {
    let repo = Arc::new(SqliteCustomerRepository::new(Arc::new(pool.clone())));
    let service = CustomerService::new(repo, dispatcher);

    match action {
        CustomerAction::Create { name, address } => {
            let name = match name {
                Some(n) => n,
                None => Input::new().with_prompt("Customer name").interact_text()?,
            };
            let address = address.into_address()?;

            let customer = service
                .register_customer(name, address)
                .await
                .context("Failed to register customer")?;

            println!("{}", "Customer registered".green().bold());
            print_customer(&customer);
        }
        CustomerAction::List => {
            let customers = service.list_customers().await?;
            print_customers(&customers);
        }
        CustomerAction::Move { id, address } => {
            let address = match address.into_address()? {
                Some(a) => a,
                None => prompt_address()?,
            };

            let customer = service
                .change_address(&id, address)
                .await
                .context("Failed to change address")?;

            println!("{}", "Address changed".green().bold());
            print_customer(&customer);
        }
    }

    Ok(())
}

async fn handle_product_action(
    action: ProductAction,
    pool: &SqlitePool,
    dispatcher: Arc<EventDispatcher>,
) -> Result<()> {
    let repo = Arc::new(SqliteProductRepository::new(Arc::new(pool.clone())));
    let service = CatalogService::new(repo, dispatcher);

    match action {
        ProductAction::Create { name, price } => {
            let name = match name {
                Some(n) => n,
                None => Input::new().with_prompt("Product name").interact_text()?,
            };
            let price = match price {
                Some(p) => p,
                None => Input::new().with_prompt("Price").interact_text()?,
            };

            let product = service
                .create_product(name, price)
                .await
                .context("Failed to create product")?;

            println!("{}", "Product created".green().bold());
            print_products(std::slice::from_ref(&product));
        }
        ProductAction::List => {
            let products = service.list_products().await?;
            print_products(&products);
        }
        ProductAction::Reprice { percent, yes } => {
            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Raise every product price by {}%?", percent))
                    .default(false)
                    .interact()?;

                if !confirmed {
                    println!("{}", "Cancelled".red());
                    return Ok(());
                }
            }

            let products = service
                .increase_prices(percent)
                .await
                .context("Failed to reprice catalog")?;

            println!("{}", "Prices updated".green().bold());
            print_products(&products);
        }
    }

    Ok(())
}

async fn handle_order_action(action: OrderAction, pool: &SqlitePool) -> Result<()> {
    let pool = Arc::new(pool.clone());
    let service = CheckoutService::new(
        Arc::new(SqliteCustomerRepository::new(pool.clone())),
        Arc::new(SqliteProductRepository::new(pool.clone())),
        Arc::new(SqliteOrderRepository::new(pool)),
    );

    match action {
        OrderAction::Place { customer, items } => {
            let order = service
                .place_order(&customer, items)
                .await
                .context("Failed to place order")?;

            println!("{}", "Order placed".green().bold());
            print_order(&order);
        }
        OrderAction::Items { id, items } => {
            let order = service
                .change_order_items(&id, items)
                .await
                .context("Failed to change order items")?;

            println!("{}", "Order items replaced".green().bold());
            print_order(&order);
        }
        OrderAction::List => {
            let orders = service.list_orders().await?;
            if orders.is_empty() {
                println!("{}", "  No orders found".yellow());
                return Ok(());
            }
            for order in &orders {
                print_order(order);
            }
            println!(
                "  Grand total: {}",
                format!("{:.2}", OrderService::total(&orders))
                    .bright_white()
                    .bold()
            );
        }
        OrderAction::Show { id } => {
            let order = service.get_order(&id).await?;
            print_order(&order);
        }
    }

    Ok(())
}

impl AddressArgs {
    /// `None` when no address flag was given; all four are required otherwise.
    fn into_address(self) -> Result<Option<Address>> {
        if self.street.is_none() && self.number.is_none() && self.zip.is_none() && self.city.is_none()
        {
            return Ok(None);
        }

        let address = Address::new(
            self.street.context("--street is required with an address")?,
            self.number.context("--number is required with an address")?,
            self.zip.context("--zip is required with an address")?,
            self.city.context("--city is required with an address")?,
        )?;
        Ok(Some(address))
    }
}

fn prompt_address() -> Result<Address> {
    let street: String = Input::new().with_prompt("Street").interact_text()?;
    let number: i64 = Input::new().with_prompt("Number").interact_text()?;
    let zip: String = Input::new().with_prompt("Zip").interact_text()?;
    let city: String = Input::new().with_prompt("City").interact_text()?;

    Ok(Address::new(street, number, zip, city)?)
}

fn parse_line(raw: &str) -> Result<OrderLine, String> {
    let (product_id, quantity) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected product_id:quantity, got '{}'", raw))?;
    let quantity = quantity
        .parse::<i64>()
        .map_err(|e| format!("invalid quantity '{}': {}", quantity, e))?;

    Ok(OrderLine::new(product_id, quantity))
}

fn print_customer(customer: &Customer) {
    println!("  ID:      {}", customer.id().bright_black());
    println!("  Name:    {}", customer.name().cyan());
    match customer.address() {
        Some(address) => println!("  Address: {}", address),
        None => println!("  Address: {}", "-".bright_black()),
    }
    println!(
        "  Status:  {}",
        if customer.is_active() {
            "ACTIVE".green()
        } else {
            "INACTIVE".yellow()
        }
    );
    println!("  Points:  {}", customer.reward_points());
    println!();
}

fn print_customers(customers: &[Customer]) {
    if customers.is_empty() {
        println!("{}", "  No customers found".yellow());
        return;
    }

    println!(
        "  {:<36} {:<24} {:<10} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Status".bright_white().bold(),
        "Points".bright_white().bold()
    );
    println!("  {}", "─".repeat(80).bright_black());

    for customer in customers {
        let status = if customer.is_active() {
            "ACTIVE".green()
        } else {
            "INACTIVE".yellow()
        };
        println!(
            "  {:<36} {:<24} {:<10} {}",
            customer.id().bright_black(),
            customer.name().cyan(),
            status,
            customer.reward_points()
        );
    }

    println!();
    println!(
        "  Total: {}",
        customers.len().to_string().bright_white().bold()
    );
}

fn print_products(products: &[Product]) {
    if products.is_empty() {
        println!("{}", "  No products found".yellow());
        return;
    }

    println!(
        "  {:<36} {:<24} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Price".bright_white().bold()
    );
    println!("  {}", "─".repeat(70).bright_black());

    for product in products {
        println!(
            "  {:<36} {:<24} {:.2}",
            product.id().bright_black(),
            product.name().cyan(),
            product.price()
        );
    }
    println!();
}

fn print_order(order: &Order) {
    println!(
        "  Order {} for customer {}",
        order.id().bright_white().bold(),
        order.customer_id().cyan()
    );
    for item in order.items() {
        println!(
            "    {:<24} {:>4} x {:>8.2} = {:>10.2}",
            item.name(),
            item.quantity(),
            item.price(),
            item.total()
        );
    }
    println!(
        "    Total: {}",
        format!("{:.2}", order.total()).bright_green().bold()
    );
    println!();
}
