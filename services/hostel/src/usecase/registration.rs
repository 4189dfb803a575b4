use chrono::NaiveDate;
use rust_decimal::Decimal;

use hostel_domain::role::Role;
use hostel_session::session::SessionData;

use crate::domain::allocation::{RoomChoice, choose_room};
use crate::domain::repository::{BookingTx, UnitOfWork};
use crate::domain::types::{
    FEE_AMOUNT_MAX_CENTS, FEE_AMOUNT_SCALE, FEE_PERIOD_YEAR, FEE_TYPE_YEARLY, FeeStatus, NewFee,
    ROOM_TYPE_MAX_LEN, Room,
};
use crate::error::HostelError;
use crate::usecase::{check_len, settle};

pub struct PayAndBookInput {
    pub room_type: Option<String>,
    pub amount: Option<Decimal>,
}

#[derive(Debug)]
pub struct PayAndBookOutput {
    pub room: Room,
    pub fee_status: FeeStatus,
}

/// Records a simulated payment and assigns the student a room, all or nothing.
pub struct PayAndBookUseCase<U: UnitOfWork> {
    pub uow: U,
    pub today: NaiveDate,
}

impl<U: UnitOfWork> PayAndBookUseCase<U> {
    pub async fn execute(
        &self,
        session: &SessionData,
        input: PayAndBookInput,
    ) -> Result<PayAndBookOutput, HostelError> {
        session.authorize(&[Role::Student])?;
        let student_id = session.student_id.ok_or(HostelError::NoStudentRecord)?;
        let room_type = input
            .room_type
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(HostelError::InvalidInput("room type and amount are required"))?;
        let amount = input
            .amount
            .filter(|a| a.is_sign_positive() && !a.is_zero())
            .ok_or(HostelError::InvalidInput("room type and amount are required"))?;
        check_len(room_type, ROOM_TYPE_MAX_LEN, "room type is too long")?;
        if amount.normalize().scale() > FEE_AMOUNT_SCALE {
            return Err(HostelError::InvalidInput(
                "amount cannot have more than two decimal places",
            ));
        }
        if amount > Decimal::new(FEE_AMOUNT_MAX_CENTS, FEE_AMOUNT_SCALE) {
            return Err(HostelError::InvalidInput("amount is too large"));
        }

        let tx = self.uow.begin().await?;
        let result = self.book(&tx, student_id, room_type, amount).await;
        let room = settle(tx, result).await?;
        tracing::info!(student_id, room_id = room.room_id, room_no = %room.room_no, "room booked");
        Ok(PayAndBookOutput {
            room,
            fee_status: FeeStatus::Paid,
        })
    }

    async fn book(
        &self,
        tx: &U::Tx,
        student_id: i32,
        room_type: &str,
        amount: Decimal,
    ) -> Result<Room, HostelError> {
        tx.insert_fee(&NewFee {
            student_id,
            amount,
            payment_date: self.today,
            status: FeeStatus::Paid,
            fee_type: FEE_TYPE_YEARLY,
            period: FEE_PERIOD_YEAR,
        })
        .await?;

        tx.lock_rooms().await?;
        let rooms = tx.rooms_with_occupancy().await?;
        let room = match choose_room(&rooms, room_type) {
            RoomChoice::Existing(room) => room,
            RoomChoice::Create(new_room) => tx.insert_room(&new_room).await?,
        };

        if tx.set_student_room(student_id, room.room_id).await? == 0 {
            return Err(HostelError::NoStudentRecord);
        }
        tx.insert_allocation(student_id, room.room_id, self.today)
            .await?;
        Ok(room)
    }
}
