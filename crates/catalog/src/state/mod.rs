pub mod page_state;

pub use page_state::{CatalogPageState, PageAction};
