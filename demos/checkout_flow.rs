use lastmile_core::{
    error::Result,
    models::{
        dimensions::Dimensions,
        dropoff::{Dropoff, DropoffContact, DropoffLocation},
        line_item::{LineItem, ProductId},
        warehouse::{PlacesResponse, WarehouseRegistry},
    },
    requests::{build, quote::QuoteResponse, Endpoints},
    session::CheckoutSession,
};

/// The wire bodies a real integration would fetch over HTTP. Canned here so
/// the demo runs offline; the shapes are exactly what the provider sends.
const PLACES_BODY: &str = r#"{
    "places": [
        {"id": "quito-norte", "contact": "Berna", "address": "Av. Amazonas N36-152", "lat": -0.176, "lng": -78.485},
        {"id": "guayaquil-sur", "contact": "Guille", "address": "Av. 25 de Julio", "lat": -2.219, "lng": -79.889}
    ]
}"#;

const QUOTE_BODY: &str = r#"{"payload": {"quotes": [{"quoteId": 9182, "cost": 4.5}]}}"#;

fn example() -> Result<()> {
    // step 1: index the provider's warehouse listing
    let listing: PlacesResponse = serde_json::from_str(PLACES_BODY).expect("canned json");
    let warehouses = WarehouseRegistry::from_places(listing);

    // the cart, as read from the host platform. two products dispatch from
    // Quito, one from Guayaquil.
    let items = vec![
        cart_row("sku-201", 1, "quito-norte", Dimensions::new(20.0, 30.0, 12.0)),
        cart_row("sku-202", 3, "quito-norte", Dimensions::unset()),
        cart_row("sku-305", 1, "guayaquil-sur", Dimensions::new(80.0, 80.0, 120.0)),
    ];
    let dropoff = Dropoff::builder()
        .contact(DropoffContact::builder()
            .name("Larry Chairs")
            .email("larry@chairs.example")
            .phone("+593999999999")
            .build().map_err(lastmile_core::Error::BuilderFailed)?)
        .location(DropoffLocation::builder()
            .address("444 Checkmate lane")
            .lat(-0.201)
            .lng(-78.491)
            .instructions("blue gate, ring twice")
            .build().map_err(lastmile_core::Error::BuilderFailed)?)
        .build().map_err(lastmile_core::Error::BuilderFailed)?;

    // step 2: group the cart by warehouse. this is also the validation gate;
    // an item without a known warehouse would error out right here.
    let groups = build::build(&items, &warehouses, &dropoff)?;
    println!("built {} delivery groups", groups.len());

    // step 3: quote, then dispatch, threading state through the session
    let endpoints = Endpoints::production()?;
    let mut session = CheckoutSession::open(groups);
    let quote_body = serde_json::to_string(&session.quote_request()).expect("encodes");
    println!("POST {} -> {}", endpoints.quotes(), quote_body);

    let response: QuoteResponse = serde_json::from_str(QUOTE_BODY).expect("canned json");
    if let Some(quote) = response.best() {
        println!("quoted fare: {}", quote.cost());
        session.record_quote(quote, &chrono::Utc::now());
    }

    let dispatch = session.dispatch_request("order-1042", true);
    let dispatch_body = serde_json::to_string(&dispatch).expect("encodes");
    println!("POST {} -> {}", endpoints.deliveries(), dispatch_body);
    Ok(())
}

fn cart_row(sku: &str, quantity: u32, warehouse: &str, dimensions: Dimensions) -> LineItem {
    LineItem::builder()
        .product_id(ProductId::new(sku))
        .quantity(quantity)
        .name(format!("demo {}", sku))
        .price(lastmile_core::num!(19.90))
        .dimensions(dimensions)
        .warehouse_id(warehouse)
        .build()
        .expect("demo line items are complete")
}

fn main() {
    example().unwrap();
}
