/// 모든 경매 조회 (상품 제조사 오름차순)
pub const GET_ALL_AUCTIONS: &str = r#"
    SELECT a.id, a.reserve_price, a.seller, a.winner, a.sold_amount, a.current_high_bid,
           a.created_at, a.updated_at, a.auction_end, a.status,
           i.id AS item_id, i.make, i.model, i.year, i.color, i.mileage, i.image_url
    FROM auctions a
    JOIN items i ON i.auction_id = a.id
    ORDER BY i.make ASC
"#;

/// 경매 조회
pub const GET_AUCTION: &str = r#"
    SELECT a.id, a.reserve_price, a.seller, a.winner, a.sold_amount, a.current_high_bid,
           a.created_at, a.updated_at, a.auction_end, a.status,
           i.id AS item_id, i.make, i.model, i.year, i.color, i.mileage, i.image_url
    FROM auctions a
    JOIN items i ON i.auction_id = a.id
    WHERE a.id = $1
"#;

/// 경매 수 조회
pub const COUNT_AUCTIONS: &str = "SELECT COUNT(*) FROM auctions";

/// 경매 등록
pub const INSERT_AUCTION: &str = r#"
    INSERT INTO auctions (id, reserve_price, seller, winner, sold_amount, current_high_bid,
                          created_at, updated_at, auction_end, status)
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
"#;

/// 상품 등록
pub const INSERT_ITEM: &str = r#"
    INSERT INTO items (id, make, model, year, color, mileage, image_url, auction_id)
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
"#;

/// 상품 수정
pub const UPDATE_ITEM: &str = r#"
    UPDATE items SET make = $1, model = $2, year = $3, color = $4, mileage = $5
    WHERE auction_id = $6
"#;

/// 경매 수정 시각 갱신
pub const TOUCH_AUCTION: &str = "UPDATE auctions SET updated_at = $1 WHERE id = $2";

/// 경매 삭제 (상품은 cascade 삭제)
pub const DELETE_AUCTION: &str = "DELETE FROM auctions WHERE id = $1";
