pub mod format;
pub mod record;

pub use record::PriceRecord;
