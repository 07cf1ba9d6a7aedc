mod command_runner;
mod config;
mod lifecycle;
mod support;
