pub mod court;
pub mod filters;
pub mod review;
