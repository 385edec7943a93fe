//! Dispatcher semantics: URL assembly, pre-flight failures with zero
//! network calls, error normalization and header construction.

mod common;

use common::{MockReply, MockTransport, anonymous_client, authenticated_client, ok_envelope};
use cobinhood::endpoint::{self, ApiVersion, Endpoint, Scope};
use cobinhood::types::{OrderPatch, OrderRequest, OrderSide};
use cobinhood::{Error, Params};
use reqwest::Method;
use reqwest::header::AUTHORIZATION;
use serde_json::json;

#[tokio::test]
async fn order_book_url_matches_documented_shape() {
    let transport = MockTransport::replying(json!({
        "success": true,
        "result": {
            "orderbook": {
                "sequence": 1939573,
                "bids": [["10006", 1, "0.1"]],
                "asks": [["10007", 2, "0.25"]],
            },
        },
    }));
    let client = anonymous_client(transport.clone());

    let response = client.fetch_order_book("COB-USDT", Some(50)).await.unwrap();

    let request = transport.only_request();
    assert_eq!(
        request.url,
        "https://api.cobinhood.com/v1/market/orderbooks/COB-USDT?limit=50"
    );
    assert_eq!(request.method, Method::GET);

    assert!(response.success);
    let orderbook = response.result_field("orderbook").unwrap();
    assert!(orderbook["bids"].is_array());
    assert!(orderbook["asks"].is_array());
}

#[tokio::test]
async fn system_time_round_trip() {
    let transport =
        MockTransport::replying(json!({"success": true, "result": {"time": 1520288666216_i64}}));
    let client = anonymous_client(transport.clone());

    let response = client.fetch_system_time().await.unwrap();

    assert_eq!(
        transport.only_request().url,
        "https://api.cobinhood.com/v1/system/time"
    );
    assert!(response.success);
    assert_eq!(
        response.result_field("time").and_then(|v| v.as_i64()),
        Some(1520288666216)
    );
}

#[tokio::test]
async fn repeated_read_only_requests_are_structurally_identical() {
    let transport =
        MockTransport::replying(json!({"success": true, "result": {"time": 1520288666216_i64}}));
    let client = anonymous_client(transport.clone());

    let first = client.fetch_system_time().await.unwrap();
    let second = client.fetch_system_time().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(transport.call_count(), 2);
}

#[tokio::test]
async fn unknown_operation_fails_without_network_call() {
    let transport = MockTransport::replying(ok_envelope());
    let client = anonymous_client(transport.clone());

    let err = client.call("no_such_operation", &[], None).await.unwrap_err();

    assert!(matches!(err, Error::Configuration(_)));
    assert!(err.to_string().contains("incorrect method call"));
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn unresolved_placeholder_fails_without_network_call() {
    let transport = MockTransport::replying(ok_envelope());
    let client = anonymous_client(transport.clone());

    let err = client
        .dispatch(&endpoint::MARKET_TICKER, &[], None, None)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Configuration(_)));
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn unsupported_verb_fails_without_network_call() {
    let transport = MockTransport::replying(ok_envelope());
    let client = anonymous_client(transport.clone());

    let patch_endpoint = Endpoint {
        name: "bogus_patch",
        version: ApiVersion::V1,
        path: "system/time",
        verb: "PATCH",
        scope: Scope::Public,
    };

    let err = client
        .dispatch(&patch_endpoint, &[], None, None)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::UnsupportedVerb(_)));
    assert!(err.to_string().contains("invalid request type"));
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn connection_failure_normalizes_to_resource_not_found() {
    let transport = MockTransport::failing(MockReply::ConnectionFailure);
    let client = anonymous_client(transport.clone());

    let err = client.fetch_system_time().await.unwrap_err();

    assert_eq!(
        err.payload().unwrap(),
        &json!({"success": false, "error": {"error_code": "resource_not_found"}})
    );
    assert_eq!(transport.call_count(), 1);
}

#[tokio::test]
async fn non_json_body_normalizes_to_resource_not_found() {
    let transport = MockTransport::failing(MockReply::DecodeFailure);
    let client = anonymous_client(transport.clone());

    let err = client.fetch_system_time().await.unwrap_err();
    assert!(err.is_remote());
}

#[tokio::test]
async fn malformed_envelope_normalizes_to_resource_not_found() {
    let transport = MockTransport::replying(json!(["not", "an", "envelope"]));
    let client = anonymous_client(transport.clone());

    let err = client.fetch_system_time().await.unwrap_err();

    assert_eq!(
        err.payload().unwrap(),
        &json!({"success": false, "error": {"error_code": "resource_not_found"}})
    );
}

#[tokio::test]
async fn server_side_failure_envelope_is_returned_not_raised() {
    let transport = MockTransport::replying(
        json!({"success": false, "error": {"error_code": "insufficient_balance"}}),
    );
    let client = authenticated_client("tok", transport);

    let response = client.fetch_balances().await.unwrap();

    assert!(!response.success);
    assert_eq!(response.error_code(), Some("insufficient_balance"));
}

#[tokio::test]
async fn anonymous_requests_carry_empty_authorization_header() {
    let transport = MockTransport::replying(ok_envelope());
    let client = anonymous_client(transport.clone());

    client.fetch_ticker("BTC-USDT").await.unwrap();

    let request = transport.only_request();
    assert_eq!(request.headers.get(AUTHORIZATION).unwrap(), "");
    assert!(request.headers.get("nonce").is_none());
}

#[tokio::test]
async fn authenticated_requests_carry_the_token() {
    let transport = MockTransport::replying(ok_envelope());
    let client = authenticated_client("secret-token", transport.clone());

    client.fetch_balances().await.unwrap();

    let request = transport.only_request();
    assert_eq!(request.headers.get(AUTHORIZATION).unwrap(), "secret-token");
    // Private read-only calls carry no nonce.
    assert!(request.headers.get("nonce").is_none());
}

#[tokio::test]
async fn mutating_requests_carry_increasing_nonces() {
    let transport = MockTransport::replying(ok_envelope());
    let client = authenticated_client("secret-token", transport.clone());

    let order = OrderRequest::limit("BTC-USDT", OrderSide::Bid, "5000.11000001", "1.0101");
    client.place_order(&order).await.unwrap();
    client.cancel_order("37f550a202aa6a3fe120f420637c894d").await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);

    let first: i64 = requests[0]
        .headers
        .get("nonce")
        .unwrap()
        .to_str()
        .unwrap()
        .parse()
        .unwrap();
    let second: i64 = requests[1]
        .headers
        .get("nonce")
        .unwrap()
        .to_str()
        .unwrap()
        .parse()
        .unwrap();
    assert!(second > first, "nonce must strictly increase");
}

#[tokio::test]
async fn place_order_sends_documented_payload() {
    let transport = MockTransport::replying(ok_envelope());
    let client = authenticated_client("tok", transport.clone());

    let order = OrderRequest::limit("BTC-USDT", OrderSide::Bid, "5000.11000001", "1.0101");
    client.place_order(&order).await.unwrap();

    let request = transport.only_request();
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.url, "https://api.cobinhood.com/v1/trading/orders");
    assert_eq!(
        request.body.unwrap(),
        json!({
            "trading_pair_id": "BTC-USDT",
            "side": "bid",
            "type": "limit",
            "price": "5000.11000001",
            "size": "1.0101",
        })
    );
}

#[tokio::test]
async fn modify_order_uses_put_with_patch_body() {
    let transport = MockTransport::replying(ok_envelope());
    let client = authenticated_client("tok", transport.clone());

    client
        .modify_order("37f550a202aa6a3fe120f420637c895c", &OrderPatch::new("5100.00", "0.5"))
        .await
        .unwrap();

    let request = transport.only_request();
    assert_eq!(request.method, Method::PUT);
    assert_eq!(
        request.url,
        "https://api.cobinhood.com/v1/trading/orders/37f550a202aa6a3fe120f420637c895c"
    );
    assert_eq!(
        request.body.unwrap(),
        json!({"price": "5100.00", "size": "0.5"})
    );
}

#[tokio::test]
async fn query_parameters_keep_insertion_order() {
    let transport = MockTransport::replying(ok_envelope());
    let client = authenticated_client("tok", transport.clone());

    client.fetch_ledger(Some("BTC"), None).await.unwrap();

    assert_eq!(
        transport.only_request().url,
        "https://api.cobinhood.com/v1/wallet/ledger?currency=BTC&limit=20"
    );
}

#[tokio::test]
async fn explicit_dispatch_with_params_encodes_values() {
    let transport = MockTransport::replying(ok_envelope());
    let client = anonymous_client(transport.clone());

    let params = Params::new().with("limit", 10).with("note", "a b");
    client
        .dispatch(
            &endpoint::MARKET_TRADES,
            &[("trading_pair_id", "ETH-BTC")],
            Some(&params),
            None,
        )
        .await
        .unwrap();

    assert_eq!(
        transport.only_request().url,
        "https://api.cobinhood.com/v1/market/trades/ETH-BTC?limit=10&note=a%20b"
    );
}

#[tokio::test]
async fn base_url_override_is_honored() {
    let transport = MockTransport::replying(ok_envelope());
    let config = cobinhood::ClientConfig::builder()
        .base_url("http://localhost:8080")
        .build();
    let client = cobinhood::Cobinhood::with_transport(config, transport.clone());

    client.fetch_system_info().await.unwrap();

    assert_eq!(
        transport.only_request().url,
        "http://localhost:8080/v1/system/info"
    );
}
