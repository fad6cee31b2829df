//! # Fallback Fixtures
//!
//! Static substitute datasets served when the backend is unreachable.
//!
//! ## Shape Invariant
//! Fixture data is built from the same canonical types live data normalizes
//! into, so downstream consumers never branch on data origin: a product list
//! from here has exactly the field set a live one has, and the same query
//! filters are applied by the store before it is returned.
//!
//! The data itself is a small, recognisable demo catalog; totals computed
//! against it are as valid as against live data, but sales cannot be
//! submitted while offline (writes are blocked, see the store).

use vela_core::{Customer, Product};

/// The fallback product catalog.
pub fn fallback_products() -> Vec<Product> {
    vec![
        product(1, "BEV-COLA", Some("7501031311309"), "Cola 330ml", 150, 1000, Some(1)),
        product(2, "BEV-AGUA", Some("7501055300895"), "Still Water 600ml", 100, 0, Some(1)),
        product(3, "CAF-ESP", None, "Espresso", 250, 825, Some(2)),
        product(4, "CAF-LAT", None, "Latte", 380, 825, Some(2)),
        product(5, "BAK-CROI", Some("2000000000057"), "Butter Croissant", 320, 0, Some(3)),
        product(6, "BAK-BAG", None, "Bagel", 280, 0, Some(3)),
        product(7, "SNK-CHIP", Some("7501011101234"), "Potato Chips 45g", 180, 1600, Some(4)),
        product(8, "SNK-CHOC", Some("7501024544106"), "Chocolate Bar", 220, 1600, Some(4)),
    ]
}

/// The fallback customer list.
///
/// Field set matches the live `/customers` response after normalization:
/// id, name, email, phone.
pub fn fallback_customers() -> Vec<Customer> {
    vec![
        customer(1, "Walk-in Counter", None, None),
        customer(2, "Ada Lovelace", Some("ada@example.com"), Some("555-0101")),
        customer(3, "Grace Hopper", Some("grace@example.com"), Some("555-0102")),
        customer(4, "Alan Turing", Some("alan@example.com"), None),
    ]
}

fn product(
    id: i64,
    sku: &str,
    barcode: Option<&str>,
    name: &str,
    price_cents: i64,
    tax_rate_bps: u32,
    category_id: Option<i64>,
) -> Product {
    Product {
        id,
        sku: sku.to_string(),
        barcode: barcode.map(String::from),
        name: name.to_string(),
        price_cents,
        tax_rate_bps,
        category_id,
        is_active: true,
    }
}

fn customer(id: i64, name: &str, email: Option<&str>, phone: Option<&str>) -> Customer {
    Customer {
        id,
        name: name.to_string(),
        email: email.map(String::from),
        phone: phone.map(String::from),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_ids_are_unique() {
        let products = fallback_products();
        let mut ids: Vec<i64> = products.iter().map(|p| p.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_fixtures_are_active_and_priced() {
        for p in fallback_products() {
            assert!(p.is_active);
            assert!(p.price_cents > 0);
            assert!(p.tax_rate_bps <= 10000);
        }
    }

    #[test]
    fn test_customer_shape() {
        let customers = fallback_customers();
        assert!(!customers.is_empty());
        // Serialized shape carries the full live field set.
        let json = serde_json::to_value(&customers[1]).unwrap();
        for field in ["id", "name", "email", "phone"] {
            assert!(json.get(field).is_some(), "missing field {field}");
        }
    }
}
