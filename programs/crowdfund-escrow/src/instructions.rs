pub mod initialize_global_config;
pub mod update_global_admin;
pub mod create_campaign;
pub mod donate;
pub mod withdraw;

pub use initialize_global_config::*;
pub use update_global_admin::*;
pub use create_campaign::*;
pub use donate::*;
pub use withdraw::*;
