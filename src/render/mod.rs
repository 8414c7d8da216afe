//----------------------------------------
// render mod
//----------------------------------------
pub mod json;
pub mod summary;
pub mod table;
pub mod types;
pub mod vega;

pub use json::render_json;
pub use summary::render_summary;
pub use table::render_table;
pub use types::Report;
pub use vega::vega_lite_spec;
