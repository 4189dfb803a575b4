use sea_orm::entity::prelude::*;

/// Room. Occupancy is derived from `student.room_id`, never stored.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "room")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub room_id: i32,
    #[sea_orm(unique)]
    pub room_no: String,
    pub room_type: Option<String>,
    pub capacity: Option<i32>,
    pub hostel_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::student::Entity")]
    Student,
    #[sea_orm(has_many = "super::room_allocation::Entity")]
    RoomAllocation,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::room_allocation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoomAllocation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
