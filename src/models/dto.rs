//pour les réponses structurées et les payloads d'entrée
use serde::{Serialize, Deserialize};
use chrono::{NaiveDate, NaiveTime};
use validator::Validate;

// Projection de lecture: 1 ligne d'emploi de temps jointe au nom de son vacataire.
// Jamais persistée, construite à la volée par le service puis sérialisée.
// Les noms JSON reprennent la casse historique du front existant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoEmploisDeTemps {
    pub cour: String,
    #[serde(rename = "Enseignant")]
    pub enseignant: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "HeureDebut")]
    pub heure_debut: String,
    #[serde(rename = "HeureFin")]
    pub heure_fin: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateEmploiDeTempsRequest {
    pub date: Option<NaiveDate>,
    #[validate(length(min = 1, max = 500))]
    pub nom_cours: Option<String>,
    pub heure_debut: Option<NaiveTime>,
    pub heure_fin: Option<NaiveTime>,
    pub id_vacataire: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_valide() {
        let request = CreateEmploiDeTempsRequest {
            date: NaiveDate::from_ymd_opt(2024, 5, 1),
            nom_cours: Some("Algo".to_string()),
            heure_debut: NaiveTime::from_hms_opt(8, 0, 0),
            heure_fin: NaiveTime::from_hms_opt(10, 0, 0),
            id_vacataire: Some(1),
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_nom_cours_vide_refuse() {
        let request = CreateEmploiDeTempsRequest {
            date: None,
            nom_cours: Some("".to_string()),
            heure_debut: None,
            heure_fin: None,
            id_vacataire: None,
        };

        assert!(request.validate().is_err());
    }
}
