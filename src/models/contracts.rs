use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Contract status stored as an uppercase string in the database.
///
/// The only modelled transition is EN_COURS → TERMINE, applied by the
/// lifecycle hook right after creation. It never reverts on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ContractStatus {
    #[sea_orm(string_value = "EN_COURS")]
    EnCours,
    #[sea_orm(string_value = "TERMINE")]
    Termine,
}

impl ContractStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractStatus::EnCours => "EN_COURS",
            ContractStatus::Termine => "TERMINE",
        }
    }
}

impl std::fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ContractStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "EN_COURS" => Ok(ContractStatus::EnCours),
            "TERMINE" => Ok(ContractStatus::Termine),
            other => Err(format!(
                "unknown contract status '{other}' (expected EN_COURS or TERMINE)"
            )),
        }
    }
}

/// SeaORM entity for the `contracts` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contracts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub client_id: i32,
    pub status: ContractStatus,
    pub start_date: Date,
    pub end_date: Date,
    pub price: i32,
    pub payment_received: bool,
    pub is_signed: bool,
    pub author_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::clients::Entity",
        from = "Column::ClientId",
        to = "super::clients::Column::Id"
    )]
    Client,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::AuthorId",
        to = "super::users::Column::Id"
    )]
    Author,
    #[sea_orm(has_many = "super::events::Entity")]
    Events,
}

impl Related<super::clients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl Related<super::events::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Events.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── DTOs ──

/// Status is not part of the input: new contracts always start EN_COURS and
/// only the post-create lifecycle hook may promote them.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContract {
    pub client_id: i32,
    pub start_date: Date,
    pub end_date: Date,
    pub price: i32,
    pub is_signed: bool,
    pub payment_received: bool,
}

/// All fields optional: absent fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateContract {
    pub status: Option<ContractStatus>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub price: Option<i32>,
    pub payment_received: Option<bool>,
    pub is_signed: Option<bool>,
}
