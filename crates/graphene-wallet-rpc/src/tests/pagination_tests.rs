use serde_json::json;
use tokio_util::sync::CancellationToken;

use graphene_wallet_types::{CreditDeal, PageLimits};

use crate::error::RpcError;
use crate::pagination::{fetch_all_pages, fetch_collection};
use crate::tests::mock::{deal_page, mock_connection, new_log, script_of, test_endpoint, MockConnector};

const METHOD: &str = "get_credit_deals_by_borrower";
const ACCOUNT: &str = "1.2.100";

#[test_log::test(tokio::test)]
async fn short_page_terminates_the_fetch() {
    let log = new_log();
    let script = script_of(vec![
        Ok(deal_page(0, 100)),
        Ok(deal_page(100, 100)),
        Ok(deal_page(200, 37)),
    ]);
    let mut conn = mock_connection(log.clone(), script);

    let deals: Vec<CreditDeal> = fetch_all_pages(
        &mut conn,
        METHOD,
        ACCOUNT,
        PageLimits::new(100, 10),
        &CancellationToken::new(),
    )
    .await
    .unwrap();

    assert_eq!(deals.len(), 237);
    assert_eq!(deals.first().unwrap().id, "1.22.0");
    assert_eq!(deals.last().unwrap().id, "1.22.236");

    let calls = &log.lock().unwrap().calls;
    assert_eq!(calls.len(), 3);
    // First page has no cursor; each later page starts after the
    // previous page's last id.
    assert_eq!(calls[0].1, json!([ACCOUNT, 100]));
    assert_eq!(calls[1].1, json!([ACCOUNT, 100, "1.22.99"]));
    assert_eq!(calls[2].1, json!([ACCOUNT, 100, "1.22.199"]));
}

#[test_log::test(tokio::test)]
async fn page_cap_bounds_the_fetch_without_error() {
    let log = new_log();
    let script = script_of((0..6).map(|i| Ok(deal_page(i * 10, 10))).collect());
    let mut conn = mock_connection(log.clone(), script);

    let deals: Vec<CreditDeal> = fetch_all_pages(
        &mut conn,
        METHOD,
        ACCOUNT,
        PageLimits::new(10, 5),
        &CancellationToken::new(),
    )
    .await
    .unwrap();

    // The accumulated result is returned, not discarded, and no sixth
    // call is issued.
    assert_eq!(deals.len(), 50);
    assert_eq!(log.lock().unwrap().calls.len(), 5);
}

#[test_log::test(tokio::test)]
async fn empty_first_page_is_no_records() {
    let mut conn = mock_connection(new_log(), script_of(vec![Ok(json!([]))]));

    let err = fetch_all_pages::<CreditDeal>(
        &mut conn,
        METHOD,
        ACCOUNT,
        PageLimits::new(100, 10),
        &CancellationToken::new(),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, RpcError::NoRecordsFound { .. }));
}

#[test_log::test(tokio::test)]
async fn first_page_transport_failure_keeps_its_kind() {
    let mut conn = mock_connection(
        new_log(),
        script_of(vec![Err(RpcError::Transport("session dropped".to_string()))]),
    );

    let err = fetch_all_pages::<CreditDeal>(
        &mut conn,
        METHOD,
        ACCOUNT,
        PageLimits::new(100, 10),
        &CancellationToken::new(),
    )
    .await
    .unwrap_err();

    // The transport can tell "nothing exists" from "the fetch failed",
    // so the error kind survives.
    assert!(matches!(err, RpcError::Transport(_)));
}

#[test_log::test(tokio::test)]
async fn later_page_failure_aborts_the_whole_fetch() {
    let mut conn = mock_connection(
        new_log(),
        script_of(vec![
            Ok(deal_page(0, 100)),
            Err(RpcError::Remote {
                code: -32000,
                message: "database unavailable".to_string(),
                data: None,
            }),
        ]),
    );

    let err = fetch_all_pages::<CreditDeal>(
        &mut conn,
        METHOD,
        ACCOUNT,
        PageLimits::new(100, 10),
        &CancellationToken::new(),
    )
    .await
    .unwrap_err();

    // No silent partial collection.
    assert!(matches!(err, RpcError::Remote { .. }));
}

#[test_log::test(tokio::test)]
async fn owned_connection_opens_and_closes_exactly_once() {
    let log = new_log();
    let connector = MockConnector {
        log: log.clone(),
        script: script_of(vec![Ok(deal_page(0, 3))]),
    };

    let deals: Vec<CreditDeal> = fetch_collection(
        &connector,
        &test_endpoint(),
        None,
        METHOD,
        ACCOUNT,
        PageLimits::new(100, 10),
        &CancellationToken::new(),
    )
    .await
    .unwrap();

    assert_eq!(deals.len(), 3);
    let log = log.lock().unwrap();
    assert_eq!(log.opens, 1);
    assert_eq!(log.closes, 1);
}

#[test_log::test(tokio::test)]
async fn owned_connection_closes_when_page_two_fails() {
    let log = new_log();
    let connector = MockConnector {
        log: log.clone(),
        script: script_of(vec![
            Ok(deal_page(0, 100)),
            Err(RpcError::Transport("session dropped".to_string())),
        ]),
    };

    let result = fetch_collection::<CreditDeal>(
        &connector,
        &test_endpoint(),
        None,
        METHOD,
        ACCOUNT,
        PageLimits::new(100, 10),
        &CancellationToken::new(),
    )
    .await;

    assert!(result.is_err());
    let log = log.lock().unwrap();
    assert_eq!(log.opens, 1);
    assert_eq!(log.closes, 1);
}

#[test_log::test(tokio::test)]
async fn borrowed_connection_is_left_open() {
    let log = new_log();
    let mut conn = mock_connection(log.clone(), script_of(vec![Ok(deal_page(0, 3))]));
    let connector = MockConnector {
        log: log.clone(),
        script: script_of(vec![]),
    };

    let deals: Vec<CreditDeal> = fetch_collection(
        &connector,
        &test_endpoint(),
        Some(&mut conn),
        METHOD,
        ACCOUNT,
        PageLimits::new(100, 10),
        &CancellationToken::new(),
    )
    .await
    .unwrap();

    assert_eq!(deals.len(), 3);
    assert!(conn.is_open());
    let log = log.lock().unwrap();
    assert_eq!(log.opens, 0, "a supplied connection must be reused");
    assert_eq!(log.closes, 0, "a supplied connection belongs to its owner");
}

#[test_log::test(tokio::test)]
async fn cancelled_fetch_issues_no_calls() {
    let log = new_log();
    let mut conn = mock_connection(log.clone(), script_of(vec![Ok(deal_page(0, 100))]));
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = fetch_all_pages::<CreditDeal>(
        &mut conn,
        METHOD,
        ACCOUNT,
        PageLimits::new(100, 10),
        &cancel,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, RpcError::Cancelled));
    assert!(log.lock().unwrap().calls.is_empty());
}

#[test_log::test(tokio::test)]
async fn closing_twice_is_a_no_op() {
    let log = new_log();
    let mut conn = mock_connection(log.clone(), script_of(vec![]));

    conn.close().await;
    conn.close().await;

    assert!(!conn.is_open());
    assert_eq!(log.lock().unwrap().closes, 1);

    // A closed connection refuses calls with a transport error.
    let err = conn.call("get_objects", &json!([["2.0.0"]])).await.unwrap_err();
    assert!(matches!(err, RpcError::Transport(_)));
}
