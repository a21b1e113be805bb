pub mod repository;
pub mod traits;

pub use repository::PropertyRepository;
pub use traits::PropertyProvider;
