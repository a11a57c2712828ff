// ============================================================================
// MODELS - MODULE PRINCIPAL
// ============================================================================
//
// Description:
//   Point d'entrée pour tous les modèles de données.
//   Chaque modèle correspond à une table PostgreSQL avec SeaORM.
//
// Liste des modules:
//   - health : Health check API
//   - vacataire : Enseignants vacataires (identité + mot de passe)
//   - contrat : Contrats (cours, durée, salaire horaire)
//   - emploi_de_temps : Créneaux de cours (date, heures, vacataire)
//   - payement : Salaires (1:1 avec vacataire, même id)
//   - pointage : Pointages de présence (date + photo)
//   - dto : Data Transfer Objects pour les réponses API
//
// Points d'attention:
//   - Tous les modèles utilisent SeaORM (pas de SQL brut)
//   - Les clés étrangères sont des colonnes scalaires explicites,
//     les jointures sont faites par la couche service
//   - Les relations entre tables sont définies dans chaque modèle
//
// ============================================================================

pub mod health;
pub mod vacataire;
pub mod contrat;
pub mod emploi_de_temps;
pub mod payement;
pub mod pointage;
pub mod dto;
