pub mod candidates;
pub mod probes;
