pub mod billing;
pub mod gantt;
pub mod portfolio;
pub mod rollup;
pub mod rollup_service;

pub use gantt::position;
pub use rollup::compute;
pub use rollup_service::RollupService;
