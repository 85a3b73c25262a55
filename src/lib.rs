//! Pure Rust implementation of unsigned multi-precision natural-number
//! arithmetic.
//!
//! # About
//! This crate is the kernel underneath a general-purpose big-integer stack:
//! signed integers, rationals and arbitrary-precision floats are built on
//! top of the [`Nat`] type provided here. It implements the classic
//! multi-precision primitives — addition, subtraction, comparison,
//! grade-school and Karatsuba multiplication, short and Knuth Algorithm D
//! division, shifts, bitwise operations, plain/windowed/Montgomery modular
//! exponentiation, integer square root, random generation and big-endian
//! byte I/O — over a little-endian vector of machine-word limbs.
//!
//! # Dual-time contract
//! Every primitive comes in two forms. The variable-time form (`add`, `mul`,
//! `exp_mod`, ...) returns normalized values and may branch on operand
//! values. The constant-time form (`ct_add`, `ct_mul`, `ct_exp_mod`, ...)
//! takes an explicit output length `zcap`: the result is zero-padded to
//! exactly `zcap` limbs, and the inner loops avoid data-dependent branching,
//! memory access patterns and loop counts over the operand values. Routing
//! decisions (such as Karatsuba versus grade-school) are made on lengths,
//! which are public. A constant-time result that cannot fit its `zcap` is a
//! caller-contract breach and panics.
//!
//! # Ownership
//! A `Nat` is a plain owned value; operations borrow their operands
//! immutably and return fresh results, so destination/operand aliasing
//! cannot occur. Values may be shared between threads for reading; the only
//! process-wide mutable state is an internal, mutex-protected free list of
//! scratch buffers.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

mod arith;
mod limb;
mod nat;
mod pool;
mod word;

pub use crate::{
    limb::Limb,
    nat::Nat,
    word::{WideWord, Word},
};
pub use subtle;

#[cfg(feature = "rand_core")]
pub use rand_core;

#[cfg(feature = "zeroize")]
pub use zeroize;
