//! Fixed-width 256-bit words with the total arithmetic of the EVM.

pub mod arithmetic;
pub mod bitwise;
pub mod compare;
pub mod constants;
pub mod error;
pub mod evm;
pub mod opcode;
pub mod ops;
pub mod utils;
pub mod word;

pub use error::WordError;
pub use opcode::Opcode;
pub use word::U256;
