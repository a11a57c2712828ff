use sea_orm::*;
use crate::models::{emploi_de_temps, vacataire};
use crate::models::dto::{CreateEmploiDeTempsRequest, InfoEmploisDeTemps};

pub struct EmploiDeTempsService;

impl EmploiDeTempsService {
    /// Liste tous les créneaux d'emploi de temps joints à leur vacataire.
    /// Jointure interne: un créneau sans vacataire (id null ou orphelin)
    /// n'apparaît pas dans le résultat. Ordre: celui de la base.
    pub async fn get_all_emplois_de_temps(
        db: &DatabaseConnection,
    ) -> Result<Vec<InfoEmploisDeTemps>, DbErr> {
        let rows = Self::emplois_avec_vacataire().all(db).await?;

        Ok(rows.into_iter().filter_map(Self::vers_projection).collect())
    }

    /// Créneaux d'un vacataire donné.
    /// Attention: le filtre porte sur l'id du VACATAIRE, pas sur l'id du
    /// créneau — sémantique historique de l'API, conservée telle quelle.
    pub async fn get_emplois_de_temps_by_vacataire(
        db: &DatabaseConnection,
        id_vacataire: i32,
    ) -> Result<Vec<InfoEmploisDeTemps>, DbErr> {
        let rows = Self::emplois_avec_vacataire()
            .filter(vacataire::Column::Id.eq(id_vacataire))
            .all(db)
            .await?;

        Ok(rows.into_iter().filter_map(Self::vers_projection).collect())
    }

    /// Cherche le premier créneau correspondant exactement au nom du
    /// vacataire ET au nom du cours (égalité stricte, sensible à la casse
    /// et aux espaces, aucune normalisation).
    pub async fn tcheck_emploi_de_temps(
        db: &DatabaseConnection,
        nom: &str,
        matiere: &str,
    ) -> Result<Option<InfoEmploisDeTemps>, DbErr> {
        let row = Self::tcheck_query(nom, matiere).one(db).await?;

        Ok(row.and_then(Self::vers_projection))
    }

    /// Insère un nouveau créneau et retourne son id généré.
    pub async fn create_emploi_de_temps(
        db: &DatabaseConnection,
        request: CreateEmploiDeTempsRequest,
    ) -> Result<i32, DbErr> {
        let nouveau = emploi_de_temps::ActiveModel {
            date: Set(request.date),
            nom_cours: Set(request.nom_cours),
            heure_debut: Set(request.heure_debut),
            heure_fin: Set(request.heure_fin),
            id_vacataire: Set(request.id_vacataire),
            ..Default::default()
        };

        let insere = nouveau.insert(db).await?;

        Ok(insere.id)
    }

    // Jointure commune aux trois lectures, pour ne pas la redériver
    // avec trois prédicats différents à trois endroits
    fn emplois_avec_vacataire() -> SelectTwo<emploi_de_temps::Entity, vacataire::Entity> {
        emploi_de_temps::Entity::find().find_also_related(vacataire::Entity)
    }

    fn tcheck_query(
        nom: &str,
        matiere: &str,
    ) -> SelectTwo<emploi_de_temps::Entity, vacataire::Entity> {
        Self::emplois_avec_vacataire()
            .filter(emploi_de_temps::Column::NomCours.eq(matiere))
            .filter(vacataire::Column::Nom.eq(nom))
    }

    // Une paire (créneau, vacataire) -> projection texte.
    // None quand le vacataire manque: c'est ce qui donne la sémantique
    // de jointure interne au-dessus du LEFT JOIN de find_also_related.
    fn vers_projection(
        (emploi, vacataire): (emploi_de_temps::Model, Option<vacataire::Model>),
    ) -> Option<InfoEmploisDeTemps> {
        let vacataire = vacataire?;

        Some(InfoEmploisDeTemps {
            cour: emploi.nom_cours.unwrap_or_default(),
            enseignant: vacataire.nom.unwrap_or_default(),
            date: emploi.date.map(|d| d.to_string()).unwrap_or_default(),
            heure_debut: emploi.heure_debut.map(|h| h.to_string()).unwrap_or_default(),
            heure_fin: emploi.heure_fin.map(|h| h.to_string()).unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn vacataire(id: i32, nom: &str) -> vacataire::Model {
        vacataire::Model {
            id,
            nom: Some(nom.to_string()),
            prenom: None,
            email: None,
            num_tel: None,
            password: None,
        }
    }

    fn emploi(id: i32, id_vacataire: Option<i32>, cours: &str) -> emploi_de_temps::Model {
        emploi_de_temps::Model {
            id,
            date: Some(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()),
            nom_cours: Some(cours.to_string()),
            heure_debut: Some(NaiveTime::from_hms_opt(8, 0, 0).unwrap()),
            heure_fin: Some(NaiveTime::from_hms_opt(10, 0, 0).unwrap()),
            id_vacataire,
        }
    }

    #[test]
    fn test_projection_complete() {
        let projection = EmploiDeTempsService::vers_projection((
            emploi(1, Some(1), "Algo"),
            Some(vacataire(1, "Diallo")),
        ))
        .unwrap();

        assert_eq!(projection.cour, "Algo");
        assert_eq!(projection.enseignant, "Diallo");
        assert_eq!(projection.date, "2024-05-01");
        assert_eq!(projection.heure_debut, "08:00:00");
        assert_eq!(projection.heure_fin, "10:00:00");
    }

    #[test]
    fn test_creneau_sans_vacataire_ecarte() {
        // id_vacataire null ou orphelin: la paire arrive sans vacataire
        let projection = EmploiDeTempsService::vers_projection((emploi(2, None, "Algo"), None));

        assert!(projection.is_none());
    }

    #[test]
    fn test_champs_nulls_projetes_en_chaines_vides() {
        let mut creneau = emploi(3, Some(1), "Algo");
        creneau.nom_cours = None;
        creneau.date = None;
        creneau.heure_debut = None;
        creneau.heure_fin = None;

        let projection =
            EmploiDeTempsService::vers_projection((creneau, Some(vacataire(1, "Diallo"))))
                .unwrap();

        assert_eq!(projection.cour, "");
        assert_eq!(projection.date, "");
        assert_eq!(projection.heure_debut, "");
        assert_eq!(projection.heure_fin, "");
    }

    #[test]
    fn test_noms_json_historiques() {
        let projection = EmploiDeTempsService::vers_projection((
            emploi(1, Some(1), "Algo"),
            Some(vacataire(1, "Diallo")),
        ))
        .unwrap();

        let json = serde_json::to_value(&projection).unwrap();

        assert_eq!(json["cour"], "Algo");
        assert_eq!(json["Enseignant"], "Diallo");
        assert_eq!(json["Date"], "2024-05-01");
        assert_eq!(json["HeureDebut"], "08:00:00");
        assert_eq!(json["HeureFin"], "10:00:00");
    }

    #[test]
    fn test_filtre_par_id_du_vacataire() {
        // Le WHERE doit viser vacataire.id, pas emploi_de_temps.id
        let sql = EmploiDeTempsService::emplois_avec_vacataire()
            .filter(vacataire::Column::Id.eq(5))
            .build(DbBackend::Postgres)
            .to_string();

        assert!(sql.contains(r#""vacataire"."id" = 5"#));
        assert!(!sql.contains(r#""emploi_de_temps"."id" = 5"#));
    }

    #[test]
    fn test_tcheck_filtre_nom_et_cours() {
        // Les deux égalités portent chacune sur leur table: le cours côté
        // emploi_de_temps, le nom côté vacataire
        let sql = EmploiDeTempsService::tcheck_query("Diallo", "Algo")
            .build(DbBackend::Postgres)
            .to_string();

        assert!(sql.contains(r#""emploi_de_temps"."nom_cours" = 'Algo'"#));
        assert!(sql.contains(r#""vacataire"."nom" = 'Diallo'"#));
    }

    #[test]
    fn test_tcheck_egalite_stricte() {
        // Égalité exacte, aucune normalisation: pas de LIKE ni de LOWER
        let sql = EmploiDeTempsService::tcheck_query("diallo", "ALGO ")
            .build(DbBackend::Postgres)
            .to_string();

        assert!(sql.contains(r#"= 'ALGO '"#));
        assert!(sql.contains(r#"= 'diallo'"#));
        assert!(!sql.contains("LIKE"));
        assert!(!sql.contains("LOWER"));
    }

    #[test]
    fn test_tcheck_sans_correspondance_rend_none() {
        // Aucune ligne ne franchit les deux filtres: le .one remonte None
        // et la projection le propage tel quel
        let resultat = None::<(emploi_de_temps::Model, Option<vacataire::Model>)>
            .and_then(EmploiDeTempsService::vers_projection);

        assert!(resultat.is_none());
    }

    #[test]
    fn test_tcheck_projette_la_ligne_retenue() {
        let resultat = Some((emploi(1, Some(1), "Algo"), Some(vacataire(1, "Diallo"))))
            .and_then(EmploiDeTempsService::vers_projection)
            .unwrap();

        assert_eq!(resultat.cour, "Algo");
        assert_eq!(resultat.enseignant, "Diallo");
    }

    #[test]
    fn test_jointure_sur_id_vacataire() {
        let sql = EmploiDeTempsService::emplois_avec_vacataire()
            .build(DbBackend::Postgres)
            .to_string();

        assert!(sql.contains(r#""emploi_de_temps"."id_vacataire" = "vacataire"."id""#));
    }
}
