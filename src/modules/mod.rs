pub mod dashboards;
pub mod navigation;
