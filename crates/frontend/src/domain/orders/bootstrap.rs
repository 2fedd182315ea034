use contracts::domain::orders::Order;

/// Id of the `<script type="application/json">` island the backend renders
pub const BOOTSTRAP_ELEMENT_ID: &str = "orders-bootstrap";

/// Parse the rows embedded in the page
pub fn parse_bootstrap(text: &str) -> Result<Vec<Order>, serde_json::Error> {
    serde_json::from_str(text)
}

/// Orders rendered into the page by the backend; empty when the island is
/// missing or malformed
pub fn read_bootstrap_orders() -> Vec<Order> {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(BOOTSTRAP_ELEMENT_ID))
        .and_then(|el| el.text_content());

    let Some(text) = text else {
        log::warn!("No #{} element, starting with an empty table", BOOTSTRAP_ELEMENT_ID);
        return Vec::new();
    };

    match parse_bootstrap(&text) {
        Ok(orders) => {
            log::info!("Loaded {} orders from the page", orders.len());
            orders
        }
        Err(e) => {
            log::warn!("Malformed #{}: {}", BOOTSTRAP_ELEMENT_ID, e);
            Vec::new()
        }
    }
}
