#![allow(dead_code)]

use async_trait::async_trait;
use auction_catalog::auction::Auction;
use auction_catalog::handlers;
use auction_catalog::store::AuctionStore;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use uuid::Uuid;

/// 테스트용 메모리 경매 저장소
#[derive(Default)]
pub struct MemoryAuctionStore {
    auctions: RwLock<Vec<Auction>>,
    /// 쓰기 요청에 반영된 행 0을 반환
    pub reject_writes: AtomicBool,
    /// 모든 요청에 데이터베이스 오류 반환
    pub unavailable: AtomicBool,
    /// n번째 경매 등록에서 오류 반환 (0이면 사용 안 함)
    pub fail_on_insert: AtomicUsize,
    insert_attempts: AtomicUsize,
}

impl MemoryAuctionStore {
    fn check_available(&self) -> Result<(), sqlx::Error> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolClosed);
        }
        Ok(())
    }

    fn writes_rejected(&self) -> bool {
        self.reject_writes.load(Ordering::SeqCst)
    }

    fn check_insert(&self) -> Result<(), sqlx::Error> {
        let attempt = self.insert_attempts.fetch_add(1, Ordering::SeqCst) + 1;
        if attempt == self.fail_on_insert.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(())
    }
}

#[async_trait]
impl AuctionStore for MemoryAuctionStore {
    async fn list(&self) -> Result<Vec<Auction>, sqlx::Error> {
        self.check_available()?;
        let mut auctions = self.auctions.read().await.clone();
        auctions.sort_by(|a, b| a.item.make.cmp(&b.item.make));
        Ok(auctions)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Auction>, sqlx::Error> {
        self.check_available()?;
        Ok(self
            .auctions
            .read()
            .await
            .iter()
            .find(|auction| auction.id == id)
            .cloned())
    }

    async fn count(&self) -> Result<i64, sqlx::Error> {
        self.check_available()?;
        Ok(self.auctions.read().await.len() as i64)
    }

    async fn insert(&self, auction: &Auction) -> Result<u64, sqlx::Error> {
        self.check_available()?;
        if self.writes_rejected() {
            return Ok(0);
        }
        self.check_insert()?;
        self.auctions.write().await.push(auction.clone());
        Ok(2)
    }

    async fn insert_many(&self, auctions: &[Auction]) -> Result<u64, sqlx::Error> {
        self.check_available()?;
        if self.writes_rejected() {
            return Ok(0);
        }
        // 모두 성공했을 때만 반영
        let mut staged = Vec::with_capacity(auctions.len());
        for auction in auctions {
            self.check_insert()?;
            staged.push(auction.clone());
        }
        let rows = staged.len() as u64 * 2;
        self.auctions.write().await.extend(staged);
        Ok(rows)
    }

    async fn update(&self, auction: &Auction) -> Result<u64, sqlx::Error> {
        self.check_available()?;
        if self.writes_rejected() {
            return Ok(0);
        }
        let mut auctions = self.auctions.write().await;
        match auctions.iter_mut().find(|existing| existing.id == auction.id) {
            Some(existing) => {
                *existing = auction.clone();
                Ok(2)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        self.check_available()?;
        if self.writes_rejected() {
            return Ok(0);
        }
        let mut auctions = self.auctions.write().await;
        let before = auctions.len();
        auctions.retain(|auction| auction.id != id);
        Ok((before - auctions.len()) as u64)
    }
}

/// 트레이싱 초기화
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .without_time()
        .with_target(false)
        .with_test_writer()
        .try_init();
}

/// 임의 포트로 테스트 서버 실행
pub async fn spawn_app(store: Arc<MemoryAuctionStore>) -> SocketAddr {
    init_tracing();
    let app = handlers::routes(store);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}
