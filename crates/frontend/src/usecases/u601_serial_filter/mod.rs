pub mod api;
pub mod filter_panel;
pub mod results_panel;
pub mod state;
pub mod upload_panel;
pub mod view;

pub use view::SerialFilterPage;
