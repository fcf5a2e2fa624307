#![allow(unused_imports)]

mod builders;

pub use builders::ReplyBuilder;
