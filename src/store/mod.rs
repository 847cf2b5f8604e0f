// region:    --- Imports
use crate::auction::{Auction, Item, Status};
use crate::database::DatabaseManager;
use crate::query::queries;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

// endregion: --- Imports

// region:    --- Auction Store Trait
/// 경매 저장소 트레이트
/// 쓰기 작업은 반영된 행 수를 반환한다.
#[async_trait]
pub trait AuctionStore: Send + Sync {
    /// 모든 경매 조회 (상품 제조사 오름차순)
    async fn list(&self) -> Result<Vec<Auction>, sqlx::Error>;

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Auction>, sqlx::Error>;

    async fn count(&self) -> Result<i64, sqlx::Error>;

    /// 경매와 상품을 함께 등록
    async fn insert(&self, auction: &Auction) -> Result<u64, sqlx::Error>;

    /// 여러 경매를 한 번에 등록 (하나라도 실패하면 아무것도 등록하지 않음)
    async fn insert_many(&self, auctions: &[Auction]) -> Result<u64, sqlx::Error>;

    /// 상품 필드와 수정 시각 저장
    async fn update(&self, auction: &Auction) -> Result<u64, sqlx::Error>;

    /// 경매 삭제 (상품 포함)
    async fn delete(&self, id: Uuid) -> Result<u64, sqlx::Error>;
}
// endregion: --- Auction Store Trait

// region:    --- Row Model
/// auctions JOIN items 조회 결과
#[derive(Debug, FromRow)]
struct AuctionRow {
    id: Uuid,
    reserve_price: i32,
    seller: String,
    winner: Option<String>,
    sold_amount: i32,
    current_high_bid: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    auction_end: DateTime<Utc>,
    status: String,
    item_id: Uuid,
    make: String,
    model: String,
    year: i32,
    color: String,
    mileage: i32,
    image_url: Option<String>,
}

impl TryFrom<AuctionRow> for Auction {
    type Error = sqlx::Error;

    fn try_from(row: AuctionRow) -> Result<Self, Self::Error> {
        let status = row
            .status
            .parse::<Status>()
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
        Ok(Auction {
            id: row.id,
            reserve_price: row.reserve_price,
            seller: row.seller,
            winner: row.winner,
            sold_amount: row.sold_amount,
            current_high_bid: row.current_high_bid,
            created_at: row.created_at,
            updated_at: row.updated_at,
            auction_end: row.auction_end,
            status,
            item: Item {
                id: row.item_id,
                make: row.make,
                model: row.model,
                year: row.year,
                color: row.color,
                mileage: row.mileage,
                image_url: row.image_url,
            },
        })
    }
}
// endregion: --- Row Model

// region:    --- Postgres Auction Store
/// 경매 저장소 구현체
pub struct PostgresAuctionStore {
    db_manager: Arc<DatabaseManager>,
}

impl PostgresAuctionStore {
    pub fn new(db_manager: Arc<DatabaseManager>) -> Self {
        Self { db_manager }
    }
}

/// 경매 저장소 구현체 메서드 구현
#[async_trait]
impl AuctionStore for PostgresAuctionStore {
    async fn list(&self) -> Result<Vec<Auction>, sqlx::Error> {
        info!("{:<12} --> 모든 경매 조회", "Store");
        sqlx::query_as::<_, AuctionRow>(queries::GET_ALL_AUCTIONS)
            .fetch_all(self.db_manager.pool())
            .await?
            .into_iter()
            .map(Auction::try_from)
            .collect()
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Auction>, sqlx::Error> {
        info!("{:<12} --> 경매 조회 id: {}", "Store", id);
        sqlx::query_as::<_, AuctionRow>(queries::GET_AUCTION)
            .bind(id)
            .fetch_optional(self.db_manager.pool())
            .await?
            .map(Auction::try_from)
            .transpose()
    }

    async fn count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(queries::COUNT_AUCTIONS)
            .fetch_one(self.db_manager.pool())
            .await
    }

    async fn insert(&self, auction: &Auction) -> Result<u64, sqlx::Error> {
        info!("{:<12} --> 경매 등록 id: {}", "Store", auction.id);
        let auction = auction.clone();
        self.db_manager
            .transaction(|tx| Box::pin(async move { insert_auction(&mut **tx, &auction).await }))
            .await
    }

    async fn insert_many(&self, auctions: &[Auction]) -> Result<u64, sqlx::Error> {
        info!("{:<12} --> 경매 {}건 등록", "Store", auctions.len());
        let auctions = auctions.to_vec();
        self.db_manager
            .transaction(|tx| {
                Box::pin(async move {
                    let mut rows = 0;
                    for auction in &auctions {
                        rows += insert_auction(&mut **tx, auction).await?;
                    }
                    Ok::<u64, sqlx::Error>(rows)
                })
            })
            .await
    }

    async fn update(&self, auction: &Auction) -> Result<u64, sqlx::Error> {
        info!("{:<12} --> 경매 수정 id: {}", "Store", auction.id);
        let auction = auction.clone();
        self.db_manager
            .transaction(|tx| {
                Box::pin(async move {
                    let item = &auction.item;
                    let item_rows = sqlx::query(queries::UPDATE_ITEM)
                        .bind(&item.make)
                        .bind(&item.model)
                        .bind(item.year)
                        .bind(&item.color)
                        .bind(item.mileage)
                        .bind(auction.id)
                        .execute(&mut **tx)
                        .await?
                        .rows_affected();

                    let auction_rows = sqlx::query(queries::TOUCH_AUCTION)
                        .bind(auction.updated_at)
                        .bind(auction.id)
                        .execute(&mut **tx)
                        .await?
                        .rows_affected();

                    Ok::<u64, sqlx::Error>(item_rows + auction_rows)
                })
            })
            .await
    }

    async fn delete(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        info!("{:<12} --> 경매 삭제 id: {}", "Store", id);
        let result = sqlx::query(queries::DELETE_AUCTION)
            .bind(id)
            .execute(self.db_manager.pool())
            .await?;
        Ok(result.rows_affected())
    }
}

/// 경매 행과 상품 행 등록
async fn insert_auction(conn: &mut PgConnection, auction: &Auction) -> Result<u64, sqlx::Error> {
    let auction_rows = sqlx::query(queries::INSERT_AUCTION)
        .bind(auction.id)
        .bind(auction.reserve_price)
        .bind(&auction.seller)
        .bind(&auction.winner)
        .bind(auction.sold_amount)
        .bind(auction.current_high_bid)
        .bind(auction.created_at)
        .bind(auction.updated_at)
        .bind(auction.auction_end)
        .bind(auction.status.as_str())
        .execute(&mut *conn)
        .await?
        .rows_affected();

    let item = &auction.item;
    let item_rows = sqlx::query(queries::INSERT_ITEM)
        .bind(item.id)
        .bind(&item.make)
        .bind(&item.model)
        .bind(item.year)
        .bind(&item.color)
        .bind(item.mileage)
        .bind(&item.image_url)
        .bind(auction.id)
        .execute(&mut *conn)
        .await?
        .rows_affected();

    Ok(auction_rows + item_rows)
}
// endregion: --- Postgres Auction Store
