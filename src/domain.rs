//! Domain types shared by the store and command handlers

pub mod bookmark;
