// Typed Utilities - Core Library
// Small pure utilities over numbers, strings and plain records

pub mod error;
pub mod aggregate;      // Numeric sums
pub mod deduplication;  // First-seen-order dedupe
pub mod word_count;     // Token vs substring counting
pub mod shapes;         // Tagged-union area dispatch
pub mod property;       // Typed field access + key validation
pub mod profile;        // Partial updates
pub mod car;            // Derived age + injected clock
pub mod config;         // Demo settings

// Re-export commonly used types
pub use error::{Result, UtilError};
pub use aggregate::{sum, sum_integers};
pub use deduplication::{dedupe, dedupe_by_key, dedupe_values};
pub use word_count::{count_occurrences, count_substrings, count_tokens, CountPolicy};
pub use shapes::{area, area_from_value, Shape};
pub use property::{
    get_json_property, get_property, has_all_keys, missing_keys,
    Field, Person, Record,
};
pub use profile::{merge_records, update_profile, Profile, ProfilePatch};
pub use car::{Car, Clock, FixedClock, SystemClock};
pub use config::DemoConfig;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
