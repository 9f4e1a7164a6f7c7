mod common;

mod domain;
mod payload;
