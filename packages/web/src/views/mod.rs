mod accounts;
mod coming_soon;
mod dashboard;
mod shell;

pub use accounts::{Managers, Techs, Users};
pub use coming_soon::{
    Dispatch, Estimates, Inventory, Invoices, Jobs, Reports, Scheduling, Settings, TimeTracking,
};
pub use dashboard::Dashboard;
