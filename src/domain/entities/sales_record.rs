//! Sales record entity, the only persisted entity in the system.

use chrono::NaiveDate;

/// One synthetic sale: what was sold, when, and for how much.
///
/// Rows are written once by the seeder and never updated or deleted
/// afterwards, so the aggregation pipeline can treat the table as immutable.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct SalesRecord {
    pub id: i64,
    pub date: NaiveDate,
    pub product: String,
    pub category: String,
    pub quantity: i64,
    pub revenue: f64,
}

/// Input data for a record that has not been persisted yet.
///
/// The store assigns the id on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSalesRecord {
    pub date: NaiveDate,
    pub product: String,
    pub category: String,
    pub quantity: i64,
    pub revenue: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sales_record_fields() {
        let record = SalesRecord {
            id: 1,
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            product: "Laptop".to_string(),
            category: "Computing".to_string(),
            quantity: 4,
            revenue: 1299.50,
        };

        assert_eq!(record.id, 1);
        assert_eq!(record.category, "Computing");
        assert_eq!(record.quantity, 4);
        assert!(record.revenue > 0.0);
    }

    #[test]
    fn test_new_sales_record_has_no_id() {
        let record = NewSalesRecord {
            date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            product: "Phone".to_string(),
            category: "Mobile".to_string(),
            quantity: 2,
            revenue: 450.0,
        };

        assert_eq!(record.product, "Phone");
        assert_eq!(record.date.to_string(), "2024-07-01");
    }
}
