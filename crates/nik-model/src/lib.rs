pub mod gender;
pub mod record;
pub mod regions;

pub use gender::Gender;
pub use record::{Address, Age, BornDate, NextBirthday, NikValidation, ParsedNik};
pub use regions::RegionTable;
