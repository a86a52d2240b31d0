pub mod classify;
pub mod components;
pub mod config;
pub mod ranking;

pub use classify::classify;
pub use components::{label_components, label_components_reported};
pub use config::{ClassifierConfig, Hue};
pub use ranking::{rank, rank_table, tabulate, ComponentStats, ComponentTable, RankedComponents};
