//! Scripts for deploying the subscription payment contracts and recording
//! their addresses in the network-scoped deployments file.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod chain;
pub mod cli;
pub mod commands;
pub mod constants;
pub mod deployments;
pub mod errors;
