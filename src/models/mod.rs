pub mod opening;
