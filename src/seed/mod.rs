/// 초기 데이터
/// 저장소가 비어 있을 때만 샘플 경매를 등록한다.
// region:    --- Imports
use crate::auction::{stored_now, Auction, Item, Status};
use crate::store::AuctionStore;
use chrono::Duration;
use tracing::info;
use uuid::Uuid;

// endregion: --- Imports

struct SampleAuction {
    make: &'static str,
    model: &'static str,
    year: i32,
    color: &'static str,
    mileage: i32,
    seller: &'static str,
    reserve_price: i32,
    ends_in_days: i64,
    status: Status,
}

const SAMPLE_AUCTIONS: [SampleAuction; 10] = [
    SampleAuction {
        make: "Ford",
        model: "GT",
        year: 2020,
        color: "White",
        mileage: 50000,
        seller: "bob",
        reserve_price: 20000,
        ends_in_days: 10,
        status: Status::Live,
    },
    SampleAuction {
        make: "Bugatti",
        model: "Veyron",
        year: 2018,
        color: "Black",
        mileage: 15035,
        seller: "alice",
        reserve_price: 90000,
        ends_in_days: 60,
        status: Status::Live,
    },
    SampleAuction {
        make: "Ford",
        model: "Mustang",
        year: 2023,
        color: "Black",
        mileage: 65125,
        seller: "bob",
        reserve_price: 0,
        ends_in_days: 4,
        status: Status::Live,
    },
    SampleAuction {
        make: "Mercedes",
        model: "SLK",
        year: 2020,
        color: "Silver",
        mileage: 15001,
        seller: "tom",
        reserve_price: 50000,
        ends_in_days: -10,
        status: Status::ReserveNotMet,
    },
    SampleAuction {
        make: "BMW",
        model: "X1",
        year: 2017,
        color: "White",
        mileage: 90000,
        seller: "alice",
        reserve_price: 20000,
        ends_in_days: 30,
        status: Status::Live,
    },
    SampleAuction {
        make: "Ferrari",
        model: "F-430",
        year: 2022,
        color: "Red",
        mileage: 5000,
        seller: "bob",
        reserve_price: 150000,
        ends_in_days: 45,
        status: Status::Live,
    },
    SampleAuction {
        make: "Ferrari",
        model: "Spider",
        year: 2015,
        color: "Red",
        mileage: 50000,
        seller: "alice",
        reserve_price: 0,
        ends_in_days: 13,
        status: Status::Live,
    },
    SampleAuction {
        make: "Ford",
        model: "Model T",
        year: 1938,
        color: "Rust",
        mileage: 150150,
        seller: "bob",
        reserve_price: 0,
        ends_in_days: -2,
        status: Status::Finished,
    },
    SampleAuction {
        make: "Audi",
        model: "R8",
        year: 2021,
        color: "White",
        mileage: 10050,
        seller: "alice",
        reserve_price: 20000,
        ends_in_days: 27,
        status: Status::Live,
    },
    SampleAuction {
        make: "Audi",
        model: "TT",
        year: 2020,
        color: "Black",
        mileage: 25400,
        seller: "tom",
        reserve_price: 20000,
        ends_in_days: 5,
        status: Status::Live,
    },
];

impl SampleAuction {
    fn to_auction(&self) -> Auction {
        let now = stored_now();
        Auction {
            id: Uuid::new_v4(),
            reserve_price: self.reserve_price,
            seller: self.seller.to_string(),
            winner: None,
            sold_amount: 0,
            current_high_bid: 0,
            created_at: now,
            updated_at: now,
            auction_end: now + Duration::days(self.ends_in_days),
            status: self.status,
            item: Item {
                id: Uuid::new_v4(),
                make: self.make.to_string(),
                model: self.model.to_string(),
                year: self.year,
                color: self.color.to_string(),
                mileage: self.mileage,
                image_url: None,
            },
        }
    }
}

/// 샘플 경매 등록, 등록한 개수를 반환
pub async fn seed_auctions(store: &dyn AuctionStore) -> Result<usize, sqlx::Error> {
    if store.count().await? > 0 {
        info!("{:<12} --> 기존 데이터가 있어 초기 데이터를 건너뜁니다.", "Seed");
        return Ok(0);
    }

    // 한 번에 등록 (일부만 등록된 상태로 남지 않음)
    let auctions: Vec<Auction> = SAMPLE_AUCTIONS
        .iter()
        .map(SampleAuction::to_auction)
        .collect();
    store.insert_many(&auctions).await?;

    info!(
        "{:<12} --> 초기 데이터 {}건 등록",
        "Seed",
        SAMPLE_AUCTIONS.len()
    );
    Ok(SAMPLE_AUCTIONS.len())
}
