use serde::{Serialize, Deserialize};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "emploi_de_temps")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date: Option<Date>,
    pub nom_cours: Option<String>,
    pub heure_debut: Option<Time>,
    pub heure_fin: Option<Time>,
    pub id_vacataire: Option<i32>,
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
