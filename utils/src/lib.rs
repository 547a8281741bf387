pub mod arb;
pub mod bench;
