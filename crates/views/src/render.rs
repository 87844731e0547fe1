//! Plain-text rendering of the pages

use std::fmt::Write;

use vendorbook_core::{Order, Part, Vendor};

use crate::state::{ListState, LoadState, VendorDetail};

/// Marker printed next to errors; the retry action is available.
pub const RETRY_CONTROL: &str = "[Retry]";
/// Marker for the back link on the detail page.
pub const BACK_CONTROL: &str = "[Back]";
/// Marker for the refresh button on the list page.
pub const REFRESH_CONTROL: &str = "[Refresh]";

/// Render the list page.
pub fn list_page(query: &str, state: &ListState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Vendors");
    let _ = writeln!(
        out,
        "Search: {:<24} {}    {} vendor(s)",
        if query.is_empty() { "Name or ID..." } else { query },
        REFRESH_CONTROL,
        state.shown
    );
    let _ = writeln!(out);

    match &state.load {
        LoadState::Loading => {
            let _ = writeln!(out, "Loading vendors...");
        }
        LoadState::Error(msg) => {
            let _ = writeln!(out, "{}  {}", msg, RETRY_CONTROL);
        }
        LoadState::Loaded(vendors) => vendor_table(&mut out, vendors),
    }
    out
}

fn vendor_table(out: &mut String, vendors: &[Vendor]) {
    let _ = writeln!(
        out,
        "{:<10} {:<28} {:<9} {:>6}  {}",
        "ID", "Name", "Status", "Rating", "City"
    );
    for v in vendors {
        let _ = writeln!(
            out,
            "{:<10} {:<28} {:<9} {:>6.1}  {}",
            v.id, v.name, v.status, v.rating, v.city
        );
    }
    if vendors.is_empty() {
        let _ = writeln!(out, "No results");
    }
}

/// Render the detail page.
pub fn detail_page(state: &LoadState<VendorDetail>) -> String {
    let mut out = String::new();
    match state {
        LoadState::Loading => {
            let _ = writeln!(out, "Loading vendor...");
        }
        LoadState::Error(msg) => {
            let _ = writeln!(out, "{}", msg);
            let _ = writeln!(out, "{}  {}", RETRY_CONTROL, BACK_CONTROL);
        }
        LoadState::Loaded(detail) => {
            vendor_info(&mut out, &detail.vendor);
            parts_section(&mut out, &detail.parts);
            orders_section(&mut out, &detail.orders);
        }
    }
    out
}

fn vendor_info(out: &mut String, v: &Vendor) {
    let _ = writeln!(out, "{}    {}", v.name, BACK_CONTROL);
    let _ = writeln!(out);
    let _ = writeln!(out, "Vendor Info");
    let _ = writeln!(out, "  ID: {}", v.id);
    let _ = writeln!(out, "  Status: {}", v.status);
    let _ = writeln!(out, "  Rating: {:.1}", v.rating);
    let _ = writeln!(out, "  Lead time: {} days", v.lead_time_days_typical);
    let _ = writeln!(out, "  Location: {}, {}", v.city, v.country);
    let _ = writeln!(
        out,
        "  Last order: {}",
        v.last_order_date.as_deref().unwrap_or("—")
    );
    let _ = writeln!(out, "  Tags: {}", v.tags.join(", "));
    let _ = writeln!(out, "  Contact");
    let _ = writeln!(out, "    {}", v.contact.name);
    let _ = writeln!(out, "    {}", v.contact.email);
    let _ = writeln!(out, "    {}", v.contact.phone);
    let _ = writeln!(out);
}

fn parts_section(out: &mut String, parts: &[Part]) {
    let _ = writeln!(out, "Parts (default vendor)");
    if parts.is_empty() {
        let _ = writeln!(out, "  None");
    }
    for p in parts {
        let _ = writeln!(
            out,
            "  - {} — {} · ${:.2} · stock {}",
            p.part_number, p.description, p.unit_cost, p.stock_on_hand
        );
    }
    let _ = writeln!(out);
}

fn orders_section(out: &mut String, orders: &[Order]) {
    let _ = writeln!(out, "Orders");
    if orders.is_empty() {
        let _ = writeln!(out, "  None");
    }
    for o in orders {
        let _ = writeln!(
            out,
            "  - {} — {} · total ${:.2} · created {}",
            o.po_number, o.status, o.total, o.created_date
        );
    }
}

/// Render the placeholder for unknown routes.
pub fn not_found_page(path: &str) -> String {
    format!("Not found\n  no page at {}\n", path)
}
