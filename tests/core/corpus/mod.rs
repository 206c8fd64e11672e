pub mod test_loader;
