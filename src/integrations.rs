// External integrations module
// This module contains integrations with external tools

pub mod shell;
