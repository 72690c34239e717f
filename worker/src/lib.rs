//! # Code Sender Worker
//!
//! Consumes delivery requests from the queue and sends one email per
//! request. Messages whose email was sent are acknowledged; failed ones are
//! left on the queue for redelivery.

pub mod poller;

pub use poller::QueuePoller;
