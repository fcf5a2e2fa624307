#![allow(unused_imports)]

mod builders;

pub use builders::{append_opt_record, QueryBytes};
