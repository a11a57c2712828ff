pub mod health;
pub mod emploi_de_temps;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(health::health_check)
            .configure(emploi_de_temps::emploi_de_temps_routes)
    );
}
