// Risk scoring: feature records in, bounded scores and levels out.

pub mod features;
pub mod level;
pub mod risk;
