//! Mathematical primitives for SCPN Plasma Source.

pub mod interp;
pub mod quadrature;
