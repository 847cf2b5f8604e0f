use chrono::{DateTime, SubsecRound, Utc};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// 저장소 정밀도(마이크로초)로 자른 시각
pub fn stored_timestamp(at: DateTime<Utc>) -> DateTime<Utc> {
    at.trunc_subsecs(6)
}

/// 현재 시각 (마이크로초 단위)
pub fn stored_now() -> DateTime<Utc> {
    stored_timestamp(Utc::now())
}

// 경매 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Live,
    Finished,
    ReserveNotMet,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Live => "Live",
            Status::Finished => "Finished",
            Status::ReserveNotMet => "ReserveNotMet",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("Unknown auction status '{0}'")]
pub struct UnknownStatusError(pub String);

impl FromStr for Status {
    type Err = UnknownStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Live" => Ok(Status::Live),
            "Finished" => Ok(Status::Finished),
            "ReserveNotMet" => Ok(Status::ReserveNotMet),
            other => Err(UnknownStatusError(other.to_string())),
        }
    }
}

// 경매 모델 (상품을 하나 소유)
#[derive(Debug, Clone, PartialEq)]
pub struct Auction {
    pub id: Uuid,
    pub reserve_price: i32,
    pub seller: String,
    pub winner: Option<String>,
    pub sold_amount: i32,
    pub current_high_bid: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub auction_end: DateTime<Utc>,
    pub status: Status,
    pub item: Item,
}

// 상품 모델
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: Uuid,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub mileage: i32,
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_its_own_name() {
        for status in [Status::Live, Status::Finished, Status::ReserveNotMet] {
            assert_eq!(status.as_str().parse::<Status>().unwrap(), status);
        }
    }

    #[test]
    fn stored_timestamp_drops_sub_microsecond_digits() {
        let at = "2030-01-01T00:00:00.123456789Z".parse::<DateTime<Utc>>().unwrap();

        let stored = stored_timestamp(at);

        assert_eq!(stored.to_rfc3339(), "2030-01-01T00:00:00.123456+00:00");
        assert_eq!(stored_now().timestamp_subsec_nanos() % 1000, 0);
    }

    #[test]
    fn unknown_status_is_rejected() {
        let err = "Cancelled".parse::<Status>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown auction status 'Cancelled'");
    }
}
