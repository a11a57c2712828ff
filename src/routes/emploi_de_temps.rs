use actix_web::{get, post, put, delete, web, HttpResponse, Responder};
use sea_orm::DatabaseConnection;
use validator::Validate;
use crate::models::dto::CreateEmploiDeTempsRequest;
use crate::services::emploi_de_temps_service::EmploiDeTempsService;

#[get("")]
pub async fn get_all_emplois_de_temps(db: web::Data<DatabaseConnection>) -> impl Responder {
    match EmploiDeTempsService::get_all_emplois_de_temps(db.get_ref()).await {
        Ok(emplois) => HttpResponse::Ok().json(emplois),
        Err(e) => HttpResponse::InternalServerError().json(format!("Error: {}", e)),
    }
}

// NB: {id} désigne l'id du VACATAIRE, pas celui du créneau.
// Sémantique historique de l'API, conservée pour le front existant.
#[get("/{id}")]
pub async fn get_emplois_de_temps_by_vacataire(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> impl Responder {
    let id_vacataire = path.into_inner();

    match EmploiDeTempsService::get_emplois_de_temps_by_vacataire(db.get_ref(), id_vacataire).await {
        Ok(emplois) if emplois.is_empty() => HttpResponse::NotFound().finish(),
        Ok(emplois) => HttpResponse::Ok().json(emplois),
        Err(e) => HttpResponse::InternalServerError().json(format!("Error: {}", e)),
    }
}

#[post("")]
pub async fn create_emploi_de_temps(
    db: web::Data<DatabaseConnection>,
    request: web::Json<CreateEmploiDeTempsRequest>,
) -> impl Responder {
    if let Err(errors) = request.validate() {
        return HttpResponse::BadRequest().json(errors);
    }

    match EmploiDeTempsService::create_emploi_de_temps(db.get_ref(), request.into_inner()).await {
        Ok(id) => HttpResponse::Created().json(serde_json::json!({
            "success": true,
            "id": id
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "success": false,
            "error": format!("{}", e)
        })),
    }
}

// Routes déclarées mais volontairement sans effet

#[put("/{id}")]
pub async fn update_emploi_de_temps(_path: web::Path<i32>) -> impl Responder {
    HttpResponse::Ok().finish()
}

#[delete("/{id}")]
pub async fn delete_emploi_de_temps(_path: web::Path<i32>) -> impl Responder {
    HttpResponse::Ok().finish()
}

pub fn emploi_de_temps_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/EmploiDeTemps")
            .service(get_all_emplois_de_temps)
            .service(get_emplois_de_temps_by_vacataire)
            .service(create_emploi_de_temps)
            .service(update_emploi_de_temps)
            .service(delete_emploi_de_temps)
    );
}
