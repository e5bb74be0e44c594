// Tue Feb 10 2026 - Alex

pub mod bimap;
pub mod date_time;
pub mod list;
pub mod optional;
pub mod shared_ptr;
pub mod unordered;
pub mod variant;

pub use bimap::BoostBimap;
pub use date_time::{BoostGregorianDate, BoostPtime, BoostTimeDuration};
pub use list::BoostContainerList;
pub use optional::BoostOptional;
pub use shared_ptr::BoostSharedPtr;
pub use unordered::{BoostUnorderedMap, BoostUnorderedSet};
pub use variant::BoostVariant;
