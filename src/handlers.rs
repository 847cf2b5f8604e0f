// region:    --- Imports
use crate::auction::dto::{AuctionDto, CreateAuctionDto, UpdateAuctionDto};
use crate::auction::stored_now;
use crate::error::AppError;
use crate::identity::{self, Caller};
use crate::store::AuctionStore;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{middleware, Extension, Json, Router};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

// endregion: --- Imports

pub type SharedStore = Arc<dyn AuctionStore>;

/// 경매 API 라우터
pub fn routes(store: SharedStore) -> Router {
    Router::new()
        .route(
            "/api/auctions",
            get(handle_get_auctions).post(handle_create_auction),
        )
        .route(
            "/api/auctions/:id",
            get(handle_get_auction)
                .put(handle_update_auction)
                .delete(handle_delete_auction),
        )
        .layer(middleware::from_fn(identity::authorize))
        .with_state(store)
}

// region:    --- Query Handlers

/// 모든 경매 조회
pub async fn handle_get_auctions(
    State(store): State<SharedStore>,
) -> Result<Json<Vec<AuctionDto>>, AppError> {
    info!("{:<12} --> 모든 경매 조회", "Handler");
    let auctions = store.list().await?;
    Ok(Json(auctions.into_iter().map(AuctionDto::from).collect()))
}

/// 경매 조회
pub async fn handle_get_auction(
    State(store): State<SharedStore>,
    Path(id): Path<Uuid>,
) -> Result<Json<AuctionDto>, AppError> {
    info!("{:<12} --> 경매 조회 id: {}", "Handler", id);
    let auction = store.get_by_id(id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(AuctionDto::from(auction)))
}

// endregion: --- Query Handlers

// region:    --- Command Handlers

/// 경매 등록
pub async fn handle_create_auction(
    State(store): State<SharedStore>,
    Extension(caller): Extension<Caller>,
    Json(dto): Json<CreateAuctionDto>,
) -> Result<impl IntoResponse, AppError> {
    info!(
        "{:<12} --> 경매 등록 요청: {} {} (seller: {})",
        "Handler", dto.make, dto.model, caller.username
    );
    let auction = dto.into_auction(caller.username);

    if store.insert(&auction).await? == 0 {
        return Err(AppError::SaveFailed("Could not save changes to the Database"));
    }

    let location = format!("/api/auctions/{}", auction.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(AuctionDto::from(auction)),
    ))
}

/// 경매 수정 (값이 있는 필드만 변경)
pub async fn handle_update_auction(
    State(store): State<SharedStore>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<Uuid>,
    Json(dto): Json<UpdateAuctionDto>,
) -> Result<StatusCode, AppError> {
    info!(
        "{:<12} --> 경매 수정 요청 id: {} (caller: {})",
        "Handler", id, caller.username
    );
    let mut auction = store.get_by_id(id).await?.ok_or(AppError::NotFound)?;

    // 변경된 필드가 없으면 저장하지 않는다
    let rows = if dto.apply_to(&mut auction.item) {
        auction.updated_at = stored_now();
        store.update(&auction).await?
    } else {
        0
    };

    if rows == 0 {
        return Err(AppError::SaveFailed("Could not update auction"));
    }
    Ok(StatusCode::OK)
}

/// 경매 삭제
pub async fn handle_delete_auction(
    State(store): State<SharedStore>,
    Extension(caller): Extension<Caller>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    info!(
        "{:<12} --> 경매 삭제 요청 id: {} (caller: {})",
        "Handler", id, caller.username
    );
    let auction = store.get_by_id(id).await?.ok_or(AppError::NotFound)?;

    if store.delete(auction.id).await? == 0 {
        return Err(AppError::SaveFailed("Could not delete auction"));
    }
    Ok(StatusCode::OK)
}

// endregion: --- Command Handlers
