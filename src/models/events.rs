use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `events` table.
///
/// `support_contact_id` starts NULL and is claimed once by a support user;
/// after that only the same user may touch the event.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub contract_id: i32,
    pub support_contact_id: Option<i32>,
    pub start_date: Date,
    pub end_date: Date,
    pub attendees: i32,
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::contracts::Entity",
        from = "Column::ContractId",
        to = "super::contracts::Column::Id"
    )]
    Contract,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::SupportContactId",
        to = "super::users::Column::Id"
    )]
    SupportContact,
}

impl Related<super::contracts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contract.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SupportContact.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

#[derive(Debug, Clone, Deserialize)]
pub struct CreateEvent {
    pub contract_id: i32,
    pub start_date: Date,
    pub end_date: Date,
    pub attendees: i32,
    pub notes: Option<String>,
}

/// All fields optional: absent fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEvent {
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub attendees: Option<i32>,
    pub notes: Option<String>,
}
