use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Invoice {
    pub id: String,
    pub customer_id: String,
    /// Amount in minor currency units (cents).
    #[serde(deserialize_with = "deserialize_minor_units")]
    pub amount: i64,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Revenue {
    pub month: String,
    pub revenue: i64,
}

fn deserialize_minor_units<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = i64::deserialize(deserializer)?;
    if amount < 0 {
        return Err(de::Error::custom("invoice amount must not be negative"));
    }
    Ok(amount)
}

/// Row shape for the latest-invoices panel: joined customer fields plus
/// the amount rendered as a currency string.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LatestInvoice {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub email: String,
    pub amount: String,
}

/// Row shape for the filterable invoices table.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InvoiceRow {
    pub id: String,
    pub customer_id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub date: NaiveDate,
    pub amount: i64,
    pub status: InvoiceStatus,
}

/// Summary counts and status totals for the dashboard cards.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CardData {
    pub number_of_customers: usize,
    pub number_of_invoices: usize,
    pub total_paid_invoices: String,
    pub total_pending_invoices: String,
}

/// Single invoice in the shape the edit form consumes, with the amount
/// converted to major units.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InvoiceForm {
    pub id: String,
    pub customer_id: String,
    pub amount: Decimal,
    pub status: InvoiceStatus,
}

/// Id/name pair for customer selection widgets.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CustomerField {
    pub id: String,
    pub name: String,
}

/// Row shape for the customers table, annotated with derived invoice
/// counts and per-status totals in minor units.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CustomerRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_invoices: usize,
    pub total_pending: i64,
    pub total_paid: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_invoice_row(row: &str) -> Result<Invoice, csv::Error> {
        let data_with_header = format!("id,customer_id,amount,status,date\n{}", row);
        let mut reader = csv::Reader::from_reader(data_with_header.as_bytes());
        reader.deserialize().next().unwrap()
    }

    #[test]
    fn test_parse_paid_invoice() {
        assert_eq!(
            parse_invoice_row("inv_001,cus_01,15795,paid,2022-12-06").unwrap(),
            Invoice {
                id: "inv_001".into(),
                customer_id: "cus_01".into(),
                amount: 15795,
                status: InvoiceStatus::Paid,
                date: NaiveDate::from_ymd_opt(2022, 12, 6).unwrap(),
            }
        );
    }

    #[test]
    fn test_parse_pending_invoice() {
        assert_eq!(
            parse_invoice_row("inv_002,cus_02,666,pending,2023-06-27").unwrap(),
            Invoice {
                id: "inv_002".into(),
                customer_id: "cus_02".into(),
                amount: 666,
                status: InvoiceStatus::Pending,
                date: NaiveDate::from_ymd_opt(2023, 6, 27).unwrap(),
            }
        );
    }

    #[test]
    fn test_parse_invalid_status() {
        let result = parse_invoice_row("inv_001,cus_01,100,overdue,2023-01-01");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_negative_amount() {
        let result = parse_invoice_row("inv_001,cus_01,-100,paid,2023-01-01");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_fractional_amount() {
        // Amounts are integer minor units; "157.95" is not a valid seed value.
        let result = parse_invoice_row("inv_001,cus_01,157.95,paid,2023-01-01");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_invalid_date() {
        let result = parse_invoice_row("inv_001,cus_01,100,paid,2023-13-01");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_customer_row() {
        let data = "id,name,email,image_url\ncus_01,Amy Tran,amy.tran@fernmail.io,/avatars/amy-tran.png";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let customer: Customer = reader.deserialize().next().unwrap().unwrap();
        assert_eq!(
            customer,
            Customer {
                id: "cus_01".into(),
                name: "Amy Tran".into(),
                email: "amy.tran@fernmail.io".into(),
                image_url: "/avatars/amy-tran.png".into(),
            }
        );
    }

    #[test]
    fn test_parse_revenue_row() {
        let data = "month,revenue\nJan,2000";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let revenue: Revenue = reader.deserialize().next().unwrap().unwrap();
        assert_eq!(
            revenue,
            Revenue {
                month: "Jan".into(),
                revenue: 2000,
            }
        );
    }

    #[test]
    fn test_status_as_str() {
        assert_eq!(InvoiceStatus::Pending.as_str(), "pending");
        assert_eq!(InvoiceStatus::Paid.as_str(), "paid");
    }
}
