#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![cfg_attr(not(feature = "std"), no_std)]

/// The `DXGI_FORMAT` catalog.
pub mod dxgi_format;

/// Legacy four-character codes.
pub mod four_cc;

pub use dxgi_format::*;
pub use four_cc::*;
