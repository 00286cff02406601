pub mod maps_backend_repo;
