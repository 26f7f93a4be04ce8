pub mod asset_path;
pub mod normalize;

pub use asset_path::{file_name, numeric_prefix, prefix_key};
pub use normalize::{normalize_category, normalize_search, same_category};
