pub mod clear;
pub mod create;
pub mod history;
