pub mod availability;
pub mod commit;
pub mod slots;
pub mod wizard;
