//! Runtime-agnostic core of the penstock queue.
//!
//! The crate provides a single coordination primitive: an unbounded
//! asynchronous FIFO queue ([`queue::AsyncQueue`]) in which producers
//! append values synchronously and consumers claim positions that
//! resolve through futures. Closing the queue poisons every read past
//! the remaining buffered values with a caller-supplied error.
//!
//! No executor is assumed; the futures in this crate are plain
//! [`core::future::Future`] implementations and can be driven by any
//! runtime. The Tokio-based piping layer lives in the companion
//! `penstock-queue-std-rs` crate.

#![no_std]

extern crate alloc;

pub mod queue;
pub mod sync;
