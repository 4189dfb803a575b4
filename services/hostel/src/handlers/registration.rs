use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use hostel_session::identity::CurrentSession;

use crate::domain::types::FeeStatus;
use crate::error::HostelError;
use crate::state::AppState;
use crate::usecase::registration::{PayAndBookInput, PayAndBookUseCase};

// ── POST /api/registration/pay-and-book ──────────────────────────────────────

#[derive(Deserialize)]
pub struct PayAndBookRequest {
    #[serde(alias = "room_type")]
    #[serde(rename = "roomType")]
    pub room_type: Option<String>,
    pub amount: Option<Decimal>,
}

#[derive(Serialize)]
pub struct BookedRoom {
    pub room_id: i32,
    pub room_no: String,
    pub room_type: String,
}

#[derive(Serialize)]
pub struct PayAndBookResponse {
    pub room: BookedRoom,
    #[serde(rename = "feeStatus")]
    pub fee_status: FeeStatus,
    pub message: &'static str,
}

pub async fn pay_and_book(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    body: Result<Json<PayAndBookRequest>, JsonRejection>,
) -> Result<Json<PayAndBookResponse>, HostelError> {
    let Json(body) = body?;
    let requested_type = body.room_type.clone().unwrap_or_default();
    let usecase = PayAndBookUseCase {
        uow: state.unit_of_work(),
        today: chrono::Local::now().date_naive(),
    };
    let out = usecase
        .execute(
            &session,
            PayAndBookInput {
                room_type: body.room_type,
                amount: body.amount,
            },
        )
        .await?;
    Ok(Json(PayAndBookResponse {
        room: BookedRoom {
            room_id: out.room.room_id,
            room_no: out.room.room_no,
            room_type: out
                .room
                .room_type
                .unwrap_or_else(|| requested_type.trim().to_owned()),
        },
        fee_status: out.fee_status,
        message: "Room booked and fee recorded.",
    }))
}
