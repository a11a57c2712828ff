use serde::{Serialize, Deserialize};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vacataire")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nom: Option<String>,
    pub prenom: Option<String>,
    pub email: Option<String>,
    pub num_tel: Option<String>,
    #[serde(skip_serializing)] // Ne pas exposer le mot de passe en JSON
    pub password: Option<String>, // Stocké en clair dans le schéma existant
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::contrat::Entity")]
    Contrat,

    #[sea_orm(has_many = "super::emploi_de_temps::Entity")]
    EmploiDeTemps,

    #[sea_orm(has_many = "super::pointage::Entity")]
    Pointage,

    // 1:1, Payement partage la clé primaire du vacataire
    #[sea_orm(has_one = "super::payement::Entity")]
    Payement,
}

impl Related<super::contrat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contrat.def()
    }
}

impl Related<super::emploi_de_temps::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmploiDeTemps.def()
    }
}

impl Related<super::pointage::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Pointage.def()
    }
}

impl Related<super::payement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payement.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
