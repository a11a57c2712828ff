pub mod emploi_de_temps_service;
