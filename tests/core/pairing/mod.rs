pub mod test_consolidation;
pub mod test_generation;
