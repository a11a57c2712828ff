use serde::{Serialize, Deserialize};
use sea_orm::entity::prelude::*;
use rust_decimal::Decimal;

// L'id n'est jamais auto-généré: il reprend l'id du vacataire propriétaire (relation 1:1)
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "payement")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub salaire_actuel: Option<Decimal>,
    pub salaire_previsionel: Option<Decimal>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vacataire::Entity",
        from = "Column::Id",
        to = "super::vacataire::Column::Id"
    )]
    Vacataire,
}

impl Related<super::vacataire::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vacataire.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
