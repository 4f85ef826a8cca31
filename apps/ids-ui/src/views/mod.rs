pub mod comparison_view;
pub mod history_view;
pub mod results_view;
pub mod setup_view;

pub use comparison_view::ComparisonView;
pub use history_view::HistoryView;
pub use results_view::ResultsView;
pub use setup_view::{SetupActions, SetupView};
