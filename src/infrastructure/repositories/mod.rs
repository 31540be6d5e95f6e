pub mod sqlx_catalogue_repository;
