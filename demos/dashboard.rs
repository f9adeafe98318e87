//! Renders the bundled placeholder dashboard data to stdout.
//!
//! ```bash
//! cargo run --example dashboard
//! ```

use std::error::Error;

use invoice_dashboard::{
    authorize, fetch_card_data, fetch_filtered_invoices, fetch_invoices_pages,
    fetch_latest_invoices, placeholder,
};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().init();

    let store = placeholder()?;

    let cards = fetch_card_data(&store)?;
    println!("cards: {}", serde_json::to_string_pretty(&cards)?);

    println!("\nlatest invoices:");
    for row in fetch_latest_invoices(&store)? {
        println!("  {:>12}  {}  <{}>", row.amount, row.name, row.email);
    }

    let query = "pending";
    let pages = fetch_invoices_pages(&store, query)?;
    println!("\ninvoices matching {query:?} ({pages} page(s)):");
    for row in fetch_filtered_invoices(&store, query, 1)? {
        println!("  {}  {:>8}  {}", row.date, row.amount, row.name);
    }

    println!("\ngate: logged-out /dashboard -> {:?}", authorize(false, "/dashboard"));
    println!("gate: logged-in  /          -> {:?}", authorize(true, "/"));

    Ok(())
}
