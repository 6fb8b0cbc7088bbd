//! HTTP routes and handlers for the trading dashboard.

use crate::render;
use alphatrade_core::{Broker, BrokerStatus, PriceOracle, TradeSide};
use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    routing::{get, post},
    Form, Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// Shared server state: the broker account and the quote source.
#[derive(Clone)]
pub struct AppState {
    broker: Arc<RwLock<Broker>>,
    oracle: Arc<dyn PriceOracle + Send + Sync>,
}

impl AppState {
    /// Create server state around a broker account and a price oracle.
    pub fn new(broker: Broker, oracle: Arc<dyn PriceOracle + Send + Sync>) -> Self {
        Self {
            broker: Arc::new(RwLock::new(broker)),
            oracle,
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/trade", post(trade))
        .route("/health", get(health))
        .route("/status", get(status))
        .with_state(state)
}

/// Start the HTTP server.
pub async fn serve(state: AppState, bind: &str) -> anyhow::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("AlphaTrade web server listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

/// Query parameters for the dashboard page.
#[derive(Debug, Deserialize)]
pub struct HomeQuery {
    message: Option<String>,
}

/// Form fields for a trade submission.
#[derive(Debug, Deserialize)]
pub struct TradeForm {
    symbol: String,
    action: String,
    shares: u64,
}

/// GET / - render the dashboard.
async fn home(State(state): State<AppState>, Query(query): Query<HomeQuery>) -> Html<String> {
    let broker = state.broker.read().await;
    Html(render::home_page(&broker, query.message.as_deref()))
}

/// POST /trade - apply a buy or sell and redirect home with the outcome.
///
/// Business failures are not HTTP errors: every submission answers with a
/// redirect whose `message` query parameter carries the outcome text.
async fn trade(State(state): State<AppState>, Form(form): Form<TradeForm>) -> Redirect {
    let price = state.oracle.quote(&form.symbol);
    let mut broker = state.broker.write().await;

    let message = match form.action.parse::<TradeSide>() {
        Ok(TradeSide::Buy) => match broker.buy(&form.symbol, price, form.shares) {
            Ok(trade) => format!(
                "Bought {} shares of {} @ ${:.2} each.",
                trade.shares, trade.symbol, trade.price
            ),
            Err(e) => e.to_string(),
        },
        Ok(TradeSide::Sell) => match broker.sell(&form.symbol, price, form.shares) {
            Ok(trade) => format!(
                "Sold {} shares of {} @ ${:.2} each.",
                trade.shares, trade.symbol, trade.price
            ),
            Err(e) => e.to_string(),
        },
        Err(e) => e.to_string(),
    };

    info!(
        "Trade request: action={}, symbol={}, shares={} -> {}",
        form.action, form.symbol, form.shares, message
    );

    redirect_home(&message)
}

/// GET /health - service liveness.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "alphatrade-web",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /status - one-shot JSON account snapshot.
async fn status(State(state): State<AppState>) -> Json<BrokerStatus> {
    let broker = state.broker.read().await;
    Json(broker.status())
}

/// Redirect back to the dashboard carrying a status message.
fn redirect_home(message: &str) -> Redirect {
    Redirect::to(&home_with_message(message))
}

/// Build the dashboard path with a URL-encoded `message` query parameter.
fn home_with_message(message: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("message", message)
        .finish();
    format!("/?{query}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use alphatrade_core::FixedOracle;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn test_state(balance: f64, price: f64) -> AppState {
        AppState::new(
            Broker::new("Test", balance),
            Arc::new(FixedOracle::new(price)),
        )
    }

    fn trade_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/trade")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn location(response: &axum::response::Response) -> String {
        response.headers()[header::LOCATION]
            .to_str()
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn test_health() {
        let app = router(test_state(10_000.0, 100.0));

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
    async fn test_home_renders() {
        let app = router(test_state(10_000.0, 100.0));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_buy_updates_broker() {
        let state = test_state(10_000.0, 100.0);
        let app = router(state.clone());

        let response = app
            .oneshot(trade_request("symbol=abc&action=buy&shares=10"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let location = location(&response);
        assert!(location.starts_with("/?message="));
        assert!(location.contains("Bought"));

        let broker = state.broker.read().await;
        assert_eq!(broker.cash(), 9_000.0);
        assert_eq!(broker.position("ABC").unwrap().shares, 10);
    }

    #[tokio::test]
    async fn test_sell_without_position() {
        let state = test_state(10_000.0, 100.0);
        let app = router(state.clone());

        let response = app
            .oneshot(trade_request("symbol=abc&action=sell&shares=5"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert!(location(&response).contains("Not+enough+shares"));

        let broker = state.broker.read().await;
        assert_eq!(broker.cash(), 10_000.0);
        assert!(broker.positions().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_action() {
        let state = test_state(10_000.0, 100.0);
        let app = router(state.clone());

        let response = app
            .oneshot(trade_request("symbol=abc&action=hold&shares=5"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert!(location(&response).contains("Invalid+action"));

        let broker = state.broker.read().await;
        assert_eq!(broker.cash(), 10_000.0);
        assert!(broker.trades().is_empty());
    }

    #[tokio::test]
    async fn test_insufficient_funds_message() {
        let state = test_state(100.0, 100.0);
        let app = router(state.clone());

        let response = app
            .oneshot(trade_request("symbol=abc&action=buy&shares=10"))
            .await
            .unwrap();

        assert!(location(&response).contains("Insufficient+funds"));

        let broker = state.broker.read().await;
        assert_eq!(broker.cash(), 100.0);
    }

    #[test]
    fn test_home_with_message_encoding() {
        assert_eq!(home_with_message("all done"), "/?message=all+done");
        // '@' and '$' must not survive unencoded
        let encoded = home_with_message("Bought 10 shares of ABC @ $100.00 each.");
        assert!(encoded.contains("%40"));
        assert!(encoded.contains("%24100.00"));
    }
}
