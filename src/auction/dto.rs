/// 경매 요청/응답 모델과 매핑
/// 1. 응답: Auction + Item -> AuctionDto (평탄화)
/// 2. 생성: CreateAuctionDto -> Auction + Item
/// 3. 수정: UpdateAuctionDto -> Item (값이 있는 필드만)
// region:    --- Imports
use super::model::{stored_now, stored_timestamp, Auction, Item, Status};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// endregion: --- Imports

// region:    --- Transfer Objects

/// 경매 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionDto {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub auction_end: DateTime<Utc>,
    pub seller: String,
    pub winner: Option<String>,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub mileage: i32,
    pub image_url: Option<String>,
    pub status: String,
    pub reserve_price: i32,
    pub sold_amount: i32,
    pub current_high_bid: i32,
}

/// 경매 생성 요청
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuctionDto {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub mileage: i32,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub reserve_price: i32,
    pub auction_end: DateTime<Utc>,
}

/// 경매 수정 요청 (None 필드는 변경하지 않음)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAuctionDto {
    pub make: Option<String>,
    pub model: Option<String>,
    pub color: Option<String>,
    pub mileage: Option<i32>,
    pub year: Option<i32>,
}

// endregion: --- Transfer Objects

// region:    --- Mapping

impl From<&Auction> for AuctionDto {
    fn from(auction: &Auction) -> Self {
        Self {
            id: auction.id,
            created_at: auction.created_at,
            updated_at: auction.updated_at,
            auction_end: auction.auction_end,
            seller: auction.seller.clone(),
            winner: auction.winner.clone(),
            make: auction.item.make.clone(),
            model: auction.item.model.clone(),
            year: auction.item.year,
            color: auction.item.color.clone(),
            mileage: auction.item.mileage,
            image_url: auction.item.image_url.clone(),
            status: auction.status.to_string(),
            reserve_price: auction.reserve_price,
            sold_amount: auction.sold_amount,
            current_high_bid: auction.current_high_bid,
        }
    }
}

impl From<Auction> for AuctionDto {
    fn from(auction: Auction) -> Self {
        Self::from(&auction)
    }
}

impl CreateAuctionDto {
    /// 새 경매 생성 (식별자 발급, 상태 Live, 금액 0)
    /// 시각은 마이크로초 단위로 자른다.
    pub fn into_auction(self, seller: impl Into<String>) -> Auction {
        let now = stored_now();
        Auction {
            id: Uuid::new_v4(),
            reserve_price: self.reserve_price,
            seller: seller.into(),
            winner: None,
            sold_amount: 0,
            current_high_bid: 0,
            created_at: now,
            updated_at: now,
            auction_end: stored_timestamp(self.auction_end),
            status: Status::Live,
            item: Item {
                id: Uuid::new_v4(),
                make: self.make,
                model: self.model,
                year: self.year,
                color: self.color,
                mileage: self.mileage,
                image_url: self.image_url,
            },
        }
    }
}

impl UpdateAuctionDto {
    /// 값이 있는 필드만 상품에 덮어쓰고, 실제 변경 여부를 반환
    pub fn apply_to(self, item: &mut Item) -> bool {
        let mut changed = false;
        changed |= replace(&mut item.make, self.make);
        changed |= replace(&mut item.model, self.model);
        changed |= replace(&mut item.color, self.color);
        changed |= replace(&mut item.mileage, self.mileage);
        changed |= replace(&mut item.year, self.year);
        changed
    }
}

fn replace<T: PartialEq>(field: &mut T, value: Option<T>) -> bool {
    match value {
        Some(value) if *field != value => {
            *field = value;
            true
        }
        _ => false,
    }
}

// endregion: --- Mapping
