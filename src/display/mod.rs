//! Display formatting for terminal output
//!
//! Every function returns a `String`; printing is left to the caller.

pub mod group;
pub mod hardware;
pub mod progress;

pub use group::{
    format_configuration_summary, format_free_ranges, format_group_details, format_group_list,
};
pub use hardware::format_hardware_details;
pub use progress::{format_progress_bar, format_step_header, format_step_list};
