#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use rj_cfg as cfg;
pub use rj_reflect as reflect;
