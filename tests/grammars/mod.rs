#![allow(dead_code)]

pub mod arith;
pub mod minimal;
pub mod statements;
