//! Stack-ordered dispatch over the 25 word opcodes.

use core::fmt;

use crate::error::WordError;
use crate::evm;
use crate::word::U256;

/// A word opcode, with its EVM instruction byte as discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    Add = 0x01,
    Mul = 0x02,
    Sub = 0x03,
    Div = 0x04,
    SDiv = 0x05,
    Mod = 0x06,
    SMod = 0x07,
    AddMod = 0x08,
    MulMod = 0x09,
    Exp = 0x0a,
    SignExtend = 0x0b,
    Lt = 0x10,
    Gt = 0x11,
    Slt = 0x12,
    Sgt = 0x13,
    Eq = 0x14,
    IsZero = 0x15,
    And = 0x16,
    Or = 0x17,
    Xor = 0x18,
    Not = 0x19,
    Byte = 0x1a,
    Shl = 0x1b,
    Shr = 0x1c,
    Sar = 0x1d,
}

impl Opcode {
    pub const ALL: [Opcode; 25] = [
        Opcode::Add,
        Opcode::Mul,
        Opcode::Sub,
        Opcode::Div,
        Opcode::SDiv,
        Opcode::Mod,
        Opcode::SMod,
        Opcode::AddMod,
        Opcode::MulMod,
        Opcode::Exp,
        Opcode::SignExtend,
        Opcode::Lt,
        Opcode::Gt,
        Opcode::Slt,
        Opcode::Sgt,
        Opcode::Eq,
        Opcode::IsZero,
        Opcode::And,
        Opcode::Or,
        Opcode::Xor,
        Opcode::Not,
        Opcode::Byte,
        Opcode::Shl,
        Opcode::Shr,
        Opcode::Sar,
    ];

    /// Number of stack operands consumed.
    pub fn arity(self) -> usize {
        match self {
            Opcode::IsZero | Opcode::Not => 1,
            Opcode::AddMod | Opcode::MulMod => 3,
            _ => 2,
        }
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Add => "ADD",
            Opcode::Mul => "MUL",
            Opcode::Sub => "SUB",
            Opcode::Div => "DIV",
            Opcode::SDiv => "SDIV",
            Opcode::Mod => "MOD",
            Opcode::SMod => "SMOD",
            Opcode::AddMod => "ADDMOD",
            Opcode::MulMod => "MULMOD",
            Opcode::Exp => "EXP",
            Opcode::SignExtend => "SIGNEXTEND",
            Opcode::Lt => "LT",
            Opcode::Gt => "GT",
            Opcode::Slt => "SLT",
            Opcode::Sgt => "SGT",
            Opcode::Eq => "EQ",
            Opcode::IsZero => "ISZERO",
            Opcode::And => "AND",
            Opcode::Or => "OR",
            Opcode::Xor => "XOR",
            Opcode::Not => "NOT",
            Opcode::Byte => "BYTE",
            Opcode::Shl => "SHL",
            Opcode::Shr => "SHR",
            Opcode::Sar => "SAR",
        }
    }

    /// Applies the opcode to `operands` given top of stack first, the way
    /// the EVM pops them: `SUB [a, b]` is `a - b`, `SHL [shift, value]`,
    /// `BYTE [i, x]` and `SIGNEXTEND [b, x]`. Boolean results are the words
    /// 0 and 1.
    pub fn execute(self, operands: &[U256]) -> Result<U256, WordError> {
        let result = match (self, operands) {
            (Opcode::Add, &[a, b]) => evm::add(a, b),
            (Opcode::Mul, &[a, b]) => evm::mul(a, b),
            (Opcode::Sub, &[a, b]) => evm::sub(a, b),
            (Opcode::Div, &[a, b]) => evm::div(a, b),
            (Opcode::SDiv, &[a, b]) => evm::sdiv(a, b),
            (Opcode::Mod, &[a, b]) => evm::modulo(a, b),
            (Opcode::SMod, &[a, b]) => evm::smod(a, b),
            (Opcode::AddMod, &[a, b, m]) => evm::add_mod(a, b, m),
            (Opcode::MulMod, &[a, b, m]) => evm::mul_mod(a, b, m),
            (Opcode::Exp, &[base, exponent]) => evm::exp(base, exponent),
            (Opcode::SignExtend, &[b, x]) => evm::sign_extend(x, b),
            (Opcode::Lt, &[a, b]) => evm::lt(a, b).into(),
            (Opcode::Gt, &[a, b]) => evm::gt(a, b).into(),
            (Opcode::Slt, &[a, b]) => evm::slt(a, b).into(),
            (Opcode::Sgt, &[a, b]) => evm::sgt(a, b).into(),
            (Opcode::Eq, &[a, b]) => evm::eq(a, b).into(),
            (Opcode::IsZero, &[a]) => evm::is_zero(a).into(),
            (Opcode::And, &[a, b]) => evm::and(a, b),
            (Opcode::Or, &[a, b]) => evm::or(a, b),
            (Opcode::Xor, &[a, b]) => evm::xor(a, b),
            (Opcode::Not, &[a]) => evm::not(a),
            (Opcode::Byte, &[i, x]) => evm::byte(x, i),
            (Opcode::Shl, &[shift, value]) => evm::shl(value, shift),
            (Opcode::Shr, &[shift, value]) => evm::shr(value, shift),
            (Opcode::Sar, &[shift, value]) => evm::sar(value, shift),
            _ => {
                log::debug!(
                    "{self} called with {} operands, takes {}",
                    operands.len(),
                    self.arity()
                );
                return Err(WordError::Arity {
                    opcode: self,
                    expected: self.arity(),
                    actual: operands.len(),
                });
            }
        };
        Ok(result)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

impl From<Opcode> for u8 {
    fn from(opcode: Opcode) -> Self {
        opcode as u8
    }
}

impl TryFrom<u8> for Opcode {
    type Error = WordError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Opcode::ALL
            .into_iter()
            .find(|&opcode| u8::from(opcode) == byte)
            .ok_or(WordError::UnknownOpcode(byte))
    }
}
