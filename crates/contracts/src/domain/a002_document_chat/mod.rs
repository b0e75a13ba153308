pub mod aggregate;
pub mod answer;
