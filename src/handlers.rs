use actix_cors::Cors;
use actix_web::{
    middleware::{Condition, DefaultHeaders},
    web, Error, HttpResponse,
};
use mongodb::bson::doc;
use tracing::{debug, error, info};

use crate::{
    models::{ProductView, Variant},
    store::ProductStore,
};

pub const WELCOME_MESSAGE: &str = "Welcome to the E-commerce API";

pub fn configure<S: ProductStore + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/products", web::get().to(list_products::<S>));
}

/// Any origin, method and header; answers with a literal `*` origin.
pub fn cors_middleware(enabled: bool) -> Condition<Cors> {
    let cors = Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allow_any_header();
    Condition::new(enabled, cors)
}

/// `Cors` only answers requests that carry an `Origin`; this stamps the
/// wildcard origin on every other response too.
pub fn wildcard_origin_header(enabled: bool) -> Condition<DefaultHeaders> {
    Condition::new(
        enabled,
        DefaultHeaders::new().add(("Access-Control-Allow-Origin", "*")),
    )
}

pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(doc! { "message": WELCOME_MESSAGE })
}

pub async fn list_products<S: ProductStore>(
    store: web::Data<S>,
    variant: web::Data<Variant>,
) -> Result<HttpResponse, Error> {
    debug!("Fetching products");

    let documents = store.find_all().await.map_err(|e| {
        error!("Failed to fetch products: {}", e);
        actix_web::error::ErrorInternalServerError(format!("Database error: {}", e))
    })?;

    let variant = *variant.get_ref();
    let products: Vec<ProductView> = documents
        .iter()
        .map(|document| ProductView::from_document(variant, document))
        .collect();

    info!("Retrieved {} products", products.len());
    Ok(HttpResponse::Ok().json(products))
}
