//! Fixture entity types
//!
//! This module defines the records served by the mock API:
//! - [`Vendor`]: a supplier, with contact info and location
//! - [`Part`]: an inventory item with a default vendor
//! - [`Order`]: a purchase order with its line items
//! - [`Fixtures`]: the four collections loaded together at startup
//!
//! Field names follow the camelCase JSON shape of the fixture files. Dates
//! are kept as the ISO-8601 strings the fixtures carry.

use serde::{Deserialize, Serialize};

use crate::behavior::Behavior;

/// Whether a vendor is currently used for purchasing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VendorStatus {
    /// Vendor accepts new orders
    Active,
    /// Vendor is kept for history only
    Inactive,
}

impl VendorStatus {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            VendorStatus::Active => "active",
            VendorStatus::Inactive => "inactive",
        }
    }
}

impl std::fmt::Display for VendorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Vendor contact person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Contact name
    pub name: String,
    /// Contact email address
    pub email: String,
    /// Contact phone number
    pub phone: String,
}

/// A supplier
///
/// `id` is unique across the vendor collection.
///
/// # Examples
///
/// ```
/// use vendorbook_core::{Vendor, VendorStatus};
///
/// let vendor: Vendor = serde_json::from_str(r#"{
///     "id": "V1", "name": "Acme Corp", "status": "active", "rating": 4.5,
///     "leadTimeDaysTypical": 10, "country": "US", "city": "Denver",
///     "lastOrderDate": null, "tags": ["metal"],
///     "contact": {"name": "Ann", "email": "ann@acme.test", "phone": "555-0100"}
/// }"#).unwrap();
/// assert_eq!(vendor.status, VendorStatus::Active);
/// assert!(vendor.last_order_date.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    /// Unique vendor identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Purchasing status
    pub status: VendorStatus,
    /// Quality rating
    pub rating: f64,
    /// Typical lead time in days
    pub lead_time_days_typical: u32,
    /// Country of the vendor's location
    pub country: String,
    /// City of the vendor's location
    pub city: String,
    /// Date of the most recent order, if any
    #[serde(default)]
    pub last_order_date: Option<String>,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Contact person
    pub contact: Contact,
}

/// An inventory item
///
/// `default_vendor_id` refers to a [`Vendor::id`]; the reference is assumed,
/// not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Unique part identifier
    pub id: String,
    /// Manufacturer or catalog part number
    pub part_number: String,
    /// Human-readable description
    pub description: String,
    /// Unit of measure
    pub uom: String,
    /// Vendor this part is normally bought from
    pub default_vendor_id: String,
    /// Cost per unit
    pub unit_cost: f64,
    /// Units in stock
    pub stock_on_hand: u32,
    /// Stock level that triggers a reorder
    pub reorder_point: u32,
    /// Lead time in days
    pub lead_time_days: u32,
    /// Date of the most recent purchase, if any
    #[serde(default)]
    pub last_purchased_date: Option<String>,
    /// Part category
    pub category: String,
}

/// Purchase order lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Awaiting delivery
    Open,
    /// Fully received
    Closed,
    /// Cancelled before completion
    Cancelled,
}

impl OrderStatus {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Open => "open",
            OrderStatus::Closed => "closed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// One line of a purchase order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Line identifier
    pub id: String,
    /// Ordered part
    pub part_id: String,
    /// Ordered quantity
    pub qty: u32,
    /// Agreed cost per unit
    pub unit_cost: f64,
    /// Quantity received so far
    pub received_qty: u32,
}

/// A purchase order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique order identifier
    pub id: String,
    /// Purchase order number
    pub po_number: String,
    /// Vendor the order was placed with
    pub vendor_id: String,
    /// Lifecycle status
    pub status: OrderStatus,
    /// Creation date
    pub created_date: String,
    /// Expected delivery date, if known
    #[serde(default)]
    pub expected_date: Option<String>,
    /// Order total
    pub total: f64,
    /// Line items, in order
    #[serde(default)]
    pub line_items: Vec<LineItem>,
}

/// All fixture collections, loaded once and never mutated
#[derive(Debug, Clone, PartialEq)]
pub struct Fixtures {
    /// Simulated API characteristics
    pub behavior: Behavior,
    /// Vendor collection, in fixture order
    pub vendors: Vec<Vendor>,
    /// Part collection, in fixture order
    pub parts: Vec<Part>,
    /// Order collection, in fixture order
    pub orders: Vec<Order>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vendor_json() -> &'static str {
        r#"{
            "id": "V-100",
            "name": "Northwind Metals",
            "status": "inactive",
            "rating": 3.25,
            "leadTimeDaysTypical": 21,
            "country": "CA",
            "city": "Toronto",
            "lastOrderDate": "2024-03-02",
            "tags": ["steel", "castings"],
            "contact": {"name": "Lee", "email": "lee@northwind.test", "phone": "555-0101"}
        }"#
    }

    #[test]
    fn test_vendor_camel_case_fields() {
        let vendor: Vendor = serde_json::from_str(vendor_json()).unwrap();
        assert_eq!(vendor.id, "V-100");
        assert_eq!(vendor.status, VendorStatus::Inactive);
        assert_eq!(vendor.lead_time_days_typical, 21);
        assert_eq!(vendor.last_order_date.as_deref(), Some("2024-03-02"));
        assert_eq!(vendor.tags, vec!["steel", "castings"]);
        assert_eq!(vendor.contact.email, "lee@northwind.test");
    }

    #[test]
    fn test_vendor_unknown_status_rejected() {
        let json = vendor_json().replace("inactive", "suspended");
        assert!(serde_json::from_str::<Vendor>(&json).is_err());
    }

    #[test]
    fn test_order_with_line_items() {
        let order: Order = serde_json::from_str(
            r#"{
                "id": "O-1",
                "poNumber": "PO-2024-001",
                "vendorId": "V-100",
                "status": "cancelled",
                "createdDate": "2024-01-05",
                "expectedDate": null,
                "total": 120.5,
                "lineItems": [
                    {"id": "L1", "partId": "P-1", "qty": 10, "unitCost": 12.05, "receivedQty": 0}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(order.status, OrderStatus::Cancelled);
        assert!(order.expected_date.is_none());
        assert_eq!(order.line_items.len(), 1);
        assert_eq!(order.line_items[0].part_id, "P-1");
    }

    #[test]
    fn test_part_serializes_camel_case() {
        let part = Part {
            id: "P-1".into(),
            part_number: "BRK-10".into(),
            description: "Bracket".into(),
            uom: "ea".into(),
            default_vendor_id: "V-100".into(),
            unit_cost: 1.5,
            stock_on_hand: 40,
            reorder_point: 10,
            lead_time_days: 7,
            last_purchased_date: None,
            category: "hardware".into(),
        };
        let json = serde_json::to_string(&part).unwrap();
        assert!(json.contains(r#""defaultVendorId":"V-100""#));
        assert!(json.contains(r#""partNumber":"BRK-10""#));
    }

    #[test]
    fn test_status_display() {
        assert_eq!(VendorStatus::Active.to_string(), "active");
        assert_eq!(OrderStatus::Closed.to_string(), "closed");
    }
}
