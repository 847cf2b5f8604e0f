mod common;

use auction_catalog::auction::Status;
use auction_catalog::seed::seed_auctions;
use auction_catalog::store::AuctionStore;
use common::MemoryAuctionStore;
use std::sync::atomic::Ordering;

/// 빈 저장소에 초기 데이터 등록
#[tokio::test]
async fn test_seed_fills_empty_store() {
    let store = MemoryAuctionStore::default();

    let inserted = seed_auctions(&store).await.unwrap();

    assert_eq!(inserted, 10);
    assert_eq!(store.count().await.unwrap(), 10);

    let auctions = store.list().await.unwrap();
    assert!(auctions.windows(2).all(|pair| pair[0].item.make <= pair[1].item.make));
    assert!(auctions.iter().any(|a| a.status == Status::ReserveNotMet));
    assert!(auctions.iter().any(|a| a.status == Status::Finished));
}

/// 데이터가 있으면 다시 등록하지 않음
#[tokio::test]
async fn test_seed_skips_populated_store() {
    let store = MemoryAuctionStore::default();
    seed_auctions(&store).await.unwrap();

    let inserted = seed_auctions(&store).await.unwrap();

    assert_eq!(inserted, 0);
    assert_eq!(store.count().await.unwrap(), 10);
}

/// 중간에 실패하면 아무것도 등록하지 않고, 재시작 시 다시 등록
#[tokio::test]
async fn test_seed_failure_leaves_store_empty() {
    let store = MemoryAuctionStore::default();
    store.fail_on_insert.store(4, Ordering::SeqCst);

    assert!(seed_auctions(&store).await.is_err());
    assert_eq!(store.count().await.unwrap(), 0);

    store.fail_on_insert.store(0, Ordering::SeqCst);
    let inserted = seed_auctions(&store).await.unwrap();

    assert_eq!(inserted, 10);
    assert_eq!(store.count().await.unwrap(), 10);
}

/// 저장소 오류는 그대로 전달
#[tokio::test]
async fn test_seed_propagates_storage_error() {
    let store = MemoryAuctionStore::default();
    store.unavailable.store(true, Ordering::SeqCst);

    assert!(seed_auctions(&store).await.is_err());
}
