//! Count resolution through the datasource: cache admission, eviction,
//! expiry, and degraded responses.

mod common;

use common::{config, datasource, pattern};
use std::time::Duration;
use vivo_ldf::transport::count_body;
use vivo_ldf::{
    build_count_query, CountCacheConfig, DatasourceError, MockTransport, PatternCountSource,
    TransportError, TriplePattern, VivoSparqlDatasource,
};

#[tokio::test]
async fn small_counts_are_requeried_every_time() {
    let p = pattern(0);
    let (ds, transport) = datasource(&config(), MockTransport::new().with_count(&p, 100_000));

    assert_eq!(ds.pattern_count(&p).await.unwrap(), 100_000);
    assert_eq!(ds.pattern_count(&p).await.unwrap(), 100_000);
    assert_eq!(transport.request_count(), 2);
}

#[tokio::test]
async fn large_counts_are_served_from_cache() {
    let p = pattern(0);
    let (ds, transport) = datasource(&config(), MockTransport::new().with_count(&p, 2_500_000));

    for _ in 0..5 {
        assert_eq!(ds.pattern_count(&p).await.unwrap(), 2_500_000);
    }
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn least_recently_used_pattern_is_evicted_at_capacity() {
    let mut transport = MockTransport::new();
    for i in 0..=1000 {
        transport = transport.with_count(&pattern(i), 1_000_000 + i as u64);
    }
    let (ds, transport) = datasource(&config(), transport);

    for i in 0..=1000 {
        ds.pattern_count(&pattern(i)).await.unwrap();
    }
    assert_eq!(transport.request_count(), 1001);
    assert_eq!(ds.count_cache().len(), 1000);

    for i in 1..=1000 {
        assert_eq!(ds.pattern_count(&pattern(i)).await.unwrap(), 1_000_000 + i as u64);
    }
    assert_eq!(transport.request_count(), 1001, "remaining patterns hit the cache");

    assert_eq!(ds.pattern_count(&pattern(0)).await.unwrap(), 1_000_000);
    assert_eq!(transport.request_count(), 1002, "evicted pattern was re-queried");
}

#[tokio::test]
async fn expired_count_is_resolved_again() {
    let p = pattern(0);
    let config = config().with_cache(CountCacheConfig {
        ttl: Duration::from_millis(50),
        ..CountCacheConfig::default()
    });
    let (ds, transport) = datasource(&config, MockTransport::new().with_count(&p, 750_000));

    ds.pattern_count(&p).await.unwrap();
    ds.pattern_count(&p).await.unwrap();
    assert_eq!(transport.request_count(), 1);

    tokio::time::sleep(Duration::from_millis(100)).await;

    ds.pattern_count(&p).await.unwrap();
    assert_eq!(transport.request_count(), 2);
}

#[tokio::test]
async fn malformed_responses_resolve_to_fallback_count() {
    let missing = TriplePattern::new("{?s a ?type}");
    let garbled = TriplePattern::new("{?s ?p \"x\"}");
    let transport = MockTransport::new()
        .with_body(build_count_query(&missing), r#"{"results": {"bindings": []}}"#)
        .with_body(build_count_query(&garbled), count_body("lots"));
    let (ds, _) = datasource(&config(), transport);

    assert_eq!(ds.pattern_count(&missing).await.unwrap(), 10);
    assert_eq!(ds.pattern_count(&garbled).await.unwrap(), 10);
    assert!(ds.count_cache().is_empty());
}

#[tokio::test]
async fn transport_failures_reach_the_caller() {
    let p = pattern(0);
    let (ds, transport) =
        datasource(&config(), MockTransport::new().with_status(build_count_query(&p), 500));

    let err = ds.pattern_count(&p).await.unwrap_err();
    assert!(matches!(err, DatasourceError::Transport(TransportError::Status(500))));

    // Failures are not cached either.
    ds.pattern_count(&p).await.unwrap_err();
    assert_eq!(transport.request_count(), 2);
}

#[test]
fn construction_without_password_sends_nothing() {
    let transport = std::sync::Arc::new(MockTransport::new());
    let mut config = config();
    config.password = None;

    let result = VivoSparqlDatasource::new(&config, transport.clone());
    assert!(matches!(result, Err(DatasourceError::MissingCredentials)));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn concurrent_resolutions_share_the_cache() {
    let mut transport = MockTransport::new();
    for i in 0..16 {
        transport = transport.with_count(&pattern(i), 400_000);
    }
    let (ds, transport) = datasource(&config(), transport);
    let ds = std::sync::Arc::new(ds);

    let mut tasks = tokio::task::JoinSet::new();
    for i in 0..16 {
        let ds = ds.clone();
        tasks.spawn(async move { ds.pattern_count(&pattern(i)).await });
    }
    while let Some(result) = tasks.join_next().await {
        assert_eq!(result.unwrap().unwrap(), 400_000);
    }
    assert_eq!(ds.count_cache().len(), 16);

    for i in 0..16 {
        ds.pattern_count(&pattern(i)).await.unwrap();
    }
    assert_eq!(transport.request_count(), 16);
}

#[tokio::test]
async fn datasource_works_behind_the_capability_trait() {
    let p = pattern(0);
    let (ds, _) = datasource(
        &config().with_graphs(["http://vitro.mannlib.cornell.edu/default/vitro-kb-2"]),
        MockTransport::new().with_count(&p, 12),
    );
    let source: &dyn PatternCountSource = &ds;

    assert_eq!(source.pattern_count(&p).await.unwrap(), 12);
    let query = source.construct_query(&p, Some(0), Some(50));
    assert!(query.contains("FROM <http://vitro.mannlib.cornell.edu/default/vitro-kb-2>"));
    assert!(query.ends_with("LIMIT 50"));
}
