pub mod domain_picker;
pub mod kpi_card;
pub mod model_comparison;
pub mod projection_table;
pub mod toast;
