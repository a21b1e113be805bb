pub mod comparison;
pub mod local;
pub mod memory;
pub mod remote;
pub mod store;
pub mod traits;

pub use comparison::{CompareError, ComparisonSet};
pub use local::LocalProfileStore;
pub use memory::MemoryProfileStore;
pub use remote::RemoteProfileStore;
pub use store::{FavoritesError, FavoritesState, FavoritesStore};
pub use traits::{ProfileStore, StoreError};
