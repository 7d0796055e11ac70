mod explorer_service;

pub use explorer_service::ExplorerService;
