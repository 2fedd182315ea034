pub mod stat_card;
pub mod table_checkbox;

pub use stat_card::StatCard;
pub use table_checkbox::TableCheckbox;
