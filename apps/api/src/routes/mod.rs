//! # Request Router
//!
//! Maps each HTTP method+path to exactly one handler. No per-route
//! middleware beyond tracing and permissive CORS; unmatched routes get
//! axum's default 404.
//!
//! ## Surface
//! ```text
//! GET    /api/sales                        → list_sales    200 / 500
//! POST   /api/sales                        → create_sale   201 / 500
//! PUT    /api/sales/{id}                   → update_sale   200 / 500
//! DELETE /api/sales/{id}                   → delete_sale   200 / 500
//! POST   /api/sales/{id}/items             → add_item      201 / 400
//! PUT    /api/sales/{id}/items/{item_id}   → update_item   200 / 400
//! GET    /health                           → health        200
//! ```

pub mod items;
pub mod sales;

use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use penjualan_db::Database;

/// Builds the application router with the database as shared state.
pub fn app(db: Database) -> Router {
    Router::new()
        .route("/api/sales", get(sales::list_sales).post(sales::create_sale))
        .route(
            "/api/sales/{id}",
            put(sales::update_sale).delete(sales::delete_sale),
        )
        .route("/api/sales/{id}/items", post(items::add_item))
        .route("/api/sales/{id}/items/{item_id}", put(items::update_item))
        .route("/health", get(health))
        .with_state(db)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// GET /health - liveness probe.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// =============================================================================
// Router Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use penjualan_db::DbConfig;

    async fn test_app() -> (Router, Database) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        (app(db.clone()), db)
    }

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn create_sale(app: &Router, no_faktur: &str) -> i64 {
        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/api/sales",
                json!({
                    "no_faktur": no_faktur,
                    "tanggal_faktur": "2024-01-01",
                    "nama_customer": "Budi",
                    "grand_total": 0.0
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        // The create ack carries no entity, so read the id back via list
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/sales")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let sales: Vec<Value> = serde_json::from_str(&body_string(response).await).unwrap();
        sales
            .iter()
            .find(|s| s["no_faktur"] == no_faktur)
            .unwrap()["id_penjualan"]
            .as_i64()
            .unwrap()
    }

    async fn add_item(app: &Router, sale_id: i64, qty: Value, price: Value) -> StatusCode {
        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                &format!("/api/sales/{sale_id}/items"),
                json!({ "nama_barang": "Kopi", "qty_barang": qty, "price": price }),
            ))
            .await
            .unwrap();
        response.status()
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _db) = test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unmatched_route_is_404() {
        let (app, _db) = test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/nothing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_sale_returns_ack_and_list_includes_it() {
        let (app, _db) = test_app().await;

        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/api/sales",
                json!({
                    "no_faktur": "INV1",
                    "tanggal_faktur": "2024-01-01",
                    "nama_customer": "Budi",
                    "grand_total": 0.0
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            body_string(response).await,
            "Data penjualan berhasil ditambahkan"
        );

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/sales")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let sales: Vec<Value> = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(sales.len(), 1);
        assert_eq!(sales[0]["no_faktur"], "INV1");
        assert_eq!(sales[0]["nama_customer"], "Budi");
        assert_eq!(sales[0]["grand_total"], 0.0);
    }

    #[tokio::test]
    async fn test_add_item_computes_line_and_grand_total() {
        let (app, db) = test_app().await;
        let sale_id = create_sale(&app, "INV1").await;

        let status = add_item(&app, sale_id, json!(2), json!(100)).await;
        assert_eq!(status, StatusCode::CREATED);

        let items = db.sale_items().list_for_sale(sale_id).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].total_price, 200.0);

        let sale = db.sales().get_by_id(sale_id).await.unwrap().unwrap();
        assert_eq!(sale.grand_total, Some(200.0));
    }

    #[tokio::test]
    async fn test_two_sequential_adds_accumulate_grand_total() {
        let (app, db) = test_app().await;
        let sale_id = create_sale(&app, "INV1").await;

        assert_eq!(
            add_item(&app, sale_id, json!(1), json!(50)).await,
            StatusCode::CREATED
        );
        assert_eq!(
            add_item(&app, sale_id, json!(1), json!(50)).await,
            StatusCode::CREATED
        );

        let sale = db.sales().get_by_id(sale_id).await.unwrap().unwrap();
        assert_eq!(sale.grand_total, Some(100.0));
    }

    #[tokio::test]
    async fn test_add_item_accepts_string_amounts() {
        let (app, db) = test_app().await;
        let sale_id = create_sale(&app, "INV1").await;

        let status = add_item(&app, sale_id, json!(" 2.5 "), json!("10")).await;
        assert_eq!(status, StatusCode::CREATED);

        let sale = db.sales().get_by_id(sale_id).await.unwrap().unwrap();
        assert_eq!(sale.grand_total, Some(25.0));
    }

    #[tokio::test]
    async fn test_add_item_rejects_non_numeric_without_mutating() {
        let (app, db) = test_app().await;
        let sale_id = create_sale(&app, "INV1").await;

        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                &format!("/api/sales/{sale_id}/items"),
                json!({ "nama_barang": "Kopi", "qty_barang": "abc", "price": 10 }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(
            body["error"],
            "Invalid quantity or price. Check if the values are numeric."
        );

        // Nothing was written
        assert!(db.sale_items().list_for_sale(sale_id).await.unwrap().is_empty());
        let sale = db.sales().get_by_id(sale_id).await.unwrap().unwrap();
        assert_eq!(sale.grand_total, Some(0.0));
    }

    #[tokio::test]
    async fn test_add_item_rejects_nan_string_without_mutating() {
        let (app, db) = test_app().await;
        let sale_id = create_sale(&app, "INV1").await;

        // f64 parsing alone would accept "NaN" and poison the stored totals
        let status = add_item(&app, sale_id, json!("NaN"), json!(10)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let status = add_item(&app, sale_id, json!(1), json!("nan")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        assert!(db.sale_items().list_for_sale(sale_id).await.unwrap().is_empty());
        let sale = db.sales().get_by_id(sale_id).await.unwrap().unwrap();
        assert_eq!(sale.grand_total, Some(0.0));
    }

    #[tokio::test]
    async fn test_add_item_missing_amounts_is_400() {
        let (app, _db) = test_app().await;
        let sale_id = create_sale(&app, "INV1").await;

        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                &format!("/api/sales/{sale_id}/items"),
                json!({ "nama_barang": "Kopi" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_add_item_to_missing_sale_is_400() {
        let (app, _db) = test_app().await;

        // FK violation is a storage failure; item endpoints report those as 400
        let status = add_item(&app, 9999, json!(1), json!(10)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_item_does_not_touch_grand_total() {
        let (app, db) = test_app().await;
        let sale_id = create_sale(&app, "INV1").await;
        add_item(&app, sale_id, json!(2), json!(100)).await;

        let item_id = db.sale_items().list_for_sale(sale_id).await.unwrap()[0]
            .id_detail_penjualan;

        let response = app
            .clone()
            .oneshot(json_request(
                Method::PUT,
                &format!("/api/sales/{sale_id}/items/{item_id}"),
                json!({ "nama_barang": "Teh", "qty_barang": 5, "price": 100 }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_string(response).await,
            "Item penjualan berhasil diperbarui"
        );

        // The item's own total moved, but the header total is stale
        let items = db.sale_items().list_for_sale(sale_id).await.unwrap();
        assert_eq!(items[0].total_price, 500.0);

        let sale = db.sales().get_by_id(sale_id).await.unwrap().unwrap();
        assert_eq!(sale.grand_total, Some(200.0));
    }

    #[tokio::test]
    async fn test_update_item_rejects_non_numeric() {
        let (app, db) = test_app().await;
        let sale_id = create_sale(&app, "INV1").await;
        add_item(&app, sale_id, json!(2), json!(100)).await;

        let item_id = db.sale_items().list_for_sale(sale_id).await.unwrap()[0]
            .id_detail_penjualan;

        let response = app
            .clone()
            .oneshot(json_request(
                Method::PUT,
                &format!("/api/sales/{sale_id}/items/{item_id}"),
                json!({ "nama_barang": "Teh", "qty_barang": "x", "price": 100 }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // Unchanged
        let items = db.sale_items().list_for_sale(sale_id).await.unwrap();
        assert_eq!(items[0].total_price, 200.0);
    }

    #[tokio::test]
    async fn test_update_sale_overwrites_fields() {
        let (app, db) = test_app().await;
        let sale_id = create_sale(&app, "INV1").await;

        let response = app
            .clone()
            .oneshot(json_request(
                Method::PUT,
                &format!("/api/sales/{sale_id}"),
                json!({
                    "no_faktur": "INV2",
                    "tanggal_faktur": "2024-02-02",
                    "nama_customer": "Siti",
                    "grand_total": 999.0
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_string(response).await,
            "Data penjualan berhasil diperbarui"
        );

        let sale = db.sales().get_by_id(sale_id).await.unwrap().unwrap();
        assert_eq!(sale.no_faktur.as_deref(), Some("INV2"));
        // Caller-supplied grand_total is stored as-is, item sum or not
        assert_eq!(sale.grand_total, Some(999.0));
    }

    #[tokio::test]
    async fn test_update_missing_sale_succeeds_silently() {
        let (app, _db) = test_app().await;

        let response = app
            .oneshot(json_request(
                Method::PUT,
                "/api/sales/9999",
                json!({ "no_faktur": "INV9" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_delete_sale_removes_items_and_header() {
        let (app, db) = test_app().await;
        let sale_id = create_sale(&app, "INV1").await;
        add_item(&app, sale_id, json!(1), json!(10)).await;
        add_item(&app, sale_id, json!(2), json!(20)).await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::DELETE)
                    .uri(format!("/api/sales/{sale_id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_string(response).await,
            "Penjualan beserta itemnya berhasil dihapus"
        );

        assert!(db.sale_items().list_for_sale(sale_id).await.unwrap().is_empty());
        assert!(db.sales().get_by_id(sale_id).await.unwrap().is_none());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/sales")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let sales: Vec<Value> = serde_json::from_str(&body_string(response).await).unwrap();
        assert!(sales.is_empty());
    }
}
