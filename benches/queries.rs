use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use invoice_dashboard::{
    fetch_card_data, fetch_filtered_customers, fetch_filtered_invoices, fetch_invoices_pages,
    Customer, Invoice, InvoiceStatus, SeedStore,
};

const NUM_CUSTOMERS: usize = 100;
const INVOICES_PER_CUSTOMER: usize = 100;

/// Builds a deterministic large seed: every customer gets the same number
/// of invoices with amounts, statuses and dates derived from the indices.
fn large_store() -> SeedStore {
    let customers: Vec<Customer> = (0..NUM_CUSTOMERS)
        .map(|i| Customer {
            id: format!("cus_{i:05}"),
            name: format!("Customer {i:05}"),
            email: format!("customer{i:05}@example.com"),
            image_url: format!("/avatars/customer{i:05}.png"),
        })
        .collect();

    let mut invoices = Vec::with_capacity(NUM_CUSTOMERS * INVOICES_PER_CUSTOMER);
    for i in 0..NUM_CUSTOMERS {
        for j in 0..INVOICES_PER_CUSTOMER {
            invoices.push(Invoice {
                id: format!("inv_{i:05}_{j:03}"),
                customer_id: format!("cus_{i:05}"),
                amount: ((i * 37 + j * 113) % 500_000) as i64,
                status: if (i + j) % 2 == 0 {
                    InvoiceStatus::Paid
                } else {
                    InvoiceStatus::Pending
                },
                date: NaiveDate::from_ymd_opt(
                    2020 + (j % 4) as i32,
                    (j % 12) as u32 + 1,
                    (j % 28) as u32 + 1,
                )
                .unwrap(),
            });
        }
    }

    SeedStore::from_records(customers, invoices, Vec::new()).unwrap()
}

fn dashboard_queries(c: &mut Criterion) {
    let store = large_store();
    let num_invoices = (NUM_CUSTOMERS * INVOICES_PER_CUSTOMER) as u64;

    let mut group = c.benchmark_group("queries");
    group.throughput(Throughput::Elements(num_invoices));

    group.bench_function("filtered_invoices_10K", |b| {
        b.iter(|| fetch_filtered_invoices(&store, "pending", 1).unwrap());
    });

    group.bench_function("invoices_pages_10K", |b| {
        b.iter(|| fetch_invoices_pages(&store, "pending").unwrap());
    });

    group.bench_function("filtered_customers_10K", |b| {
        b.iter(|| fetch_filtered_customers(&store, "customer").unwrap());
    });

    group.bench_function("card_data_10K", |b| {
        b.iter(|| fetch_card_data(&store).unwrap());
    });

    group.finish();
}

criterion_group!(benches, dashboard_queries);
criterion_main!(benches);
