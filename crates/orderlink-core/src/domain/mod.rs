pub mod phone;
pub mod record;
pub mod sheet;

pub use phone::{first_phone_in_row, normalize_phone, NormalizedPhone};
pub use record::OrderRecord;
pub use sheet::{Sheet, SheetRow};
