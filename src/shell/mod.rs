// Composition root for the calendar_events service.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the in memory event store and the id policy it uses.
// - Wire the use case handlers into one router with CORS, tracing and the front-end page.

pub mod config;
pub mod cors;
pub mod http;
pub mod state;
