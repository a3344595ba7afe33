//! Client for the mashup generation service: validates the request form,
//! submits the job and polls its status until a terminal state, rendering
//! progress through a pluggable interface.

pub mod api;
pub mod config;
pub mod form;
pub mod job;
pub mod render;
pub mod shutdown;
