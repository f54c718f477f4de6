pub mod catalog_repository;
pub mod image_size_repository;
pub mod memory_catalog_repository;
pub mod memory_settings_repository;
pub mod settings_repository;

pub use catalog_repository::PgCatalogRepository;
pub use image_size_repository::ConfiguredImageSizeRegistry;
pub use memory_catalog_repository::InMemoryCatalogRepository;
pub use memory_settings_repository::InMemorySettingsStore;
pub use settings_repository::SettingsRepository;
