pub mod types;
pub mod slot_utils;
pub mod index;
pub mod selector;
pub mod experienced;
pub mod assignment;

pub use types::{AssignmentMap, StaffingWarning};
pub use slot_utils::slot_number;
pub use index::ScheduleIndex;
pub use experienced::ExperiencedPool;
pub use assignment::assign_scramblers_and_judges;
