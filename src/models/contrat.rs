use serde::{Serialize, Deserialize};
use sea_orm::entity::prelude::*;
use rust_decimal::Decimal;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contrat")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nom_cours: Option<String>,
    // Copie dénormalisée du nom du vacataire, jamais resynchronisée
    pub nom_vacataire: Option<String>,
    pub id_vacataire: Option<i32>,
    pub duree: Option<i32>,
    pub salaire_horaire: Option<Decimal>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vacataire::Entity",
        from = "Column::IdVacataire",
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
