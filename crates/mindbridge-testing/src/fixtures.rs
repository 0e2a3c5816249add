//! Sample dashboard tables.

use mindbridge_types::{ColumnDef, Row, Selector, TableData};
use serde_json::{Value, json};

fn rows(values: Value) -> Vec<Row> {
    values
        .as_array()
        .map(|items| items.iter().filter_map(|v| v.as_object().cloned()).collect())
        .unwrap_or_default()
}

/// Client details page: name, email, phone and an action column.
pub fn client_details() -> TableData {
    let columns = vec![
        ColumnDef::new("Client")
            .with_selector_id("client_first_name")
            .with_selector(Selector::join(["client_first_name", "client_last_name"], " ")),
        ColumnDef::new("Email").with_selector_id("email"),
        ColumnDef::new("Phone").with_selector_id("phone"),
        ColumnDef::new("Joined").with_selector_id("created_at"),
        ColumnDef::nameless(),
    ];

    let data = rows(json!([
        {"client_first_name": "Jane", "client_last_name": "Doe", "email": "jane.doe@example.com", "phone": "0400 111 222", "created_at": "2024-03-05"},
        {"client_first_name": "John", "client_last_name": "Smith", "email": "jsmith@example.org", "phone": "0400 333 444", "created_at": "2024-03-18"},
        {"client_first_name": "Ana", "client_last_name": "Lopez", "email": "ana.lopez@example.com", "phone": null, "created_at": "2024-04-02"},
        {"client_first_name": "Tom", "client_last_name": "Baker", "email": "tom@example.net", "phone": "0400 555 666", "created_at": "2024-05-21"},
        {"client_first_name": "Lena", "client_last_name": "Park", "email": "lena.park@example.com", "phone": "0400 777 888", "created_at": "2024-06-30"}
    ]));

    TableData::new(columns, data).with_caption("Client Details")
}

/// Invoice list with `count` generated rows, for paging tests.
pub fn invoices(count: usize) -> TableData {
    let columns = vec![
        ColumnDef::new("Invoice").with_selector_id("invoice_no"),
        ColumnDef::new("Counsellor")
            .with_selector_id("user_first_name")
            .with_selector(Selector::join(["user_first_name", "user_last_name"], " ")),
        ColumnDef::new("GST").with_selector_id("gst"),
        ColumnDef::new("Total").with_selector_id("total_invoice"),
    ];

    let counsellors = [("Priya", "Nair"), ("Marcus", "Reed"), ("Sofia", "Rossi")];

    let data = (0..count)
        .filter_map(|i| {
            let (first, last) = counsellors[i % counsellors.len()];
            let total = 100 + (i % 5) * 10;
            json!({
                "invoice_no": format!("INV-{:04}", i + 1),
                "user_first_name": first,
                "user_last_name": last,
                "gst": total as f64 / 10.0,
                "total_invoice": total,
            })
            .as_object()
            .cloned()
        })
        .collect();

    TableData::new(columns, data).with_caption("Invoices")
}

pub fn to_json_string(table: &TableData) -> String {
    serde_json::to_string_pretty(table).unwrap_or_else(|_| "{}".to_string())
}
