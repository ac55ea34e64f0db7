//! # Events Module
//!
//! Event-driven progress reporting for the pipeline.
//!
//! ## Design
//! The core library emits events through a channel, allowing any UI
//! (CLI, GUI, web) to subscribe and display per-file progress. When no
//! sink is configured the core runs silently against a null sender.
//!
//! ## Example
//! ```rust,ignore
//! let (sender, receiver) = EventChannel::new();
//!
//! // In a separate thread, listen for events
//! std::thread::spawn(move || {
//!     for event in receiver.iter() {
//!         match event {
//!             Event::Organize(OrganizeEvent::FileMoved { file, .. }) => {
//!                 println!("moved {}", file)
//!             }
//!             _ => {}
//!         }
//!     }
//! });
//!
//! // Run the workflow with the sender
//! workflow.organize_with_events(&sender)?;
//! ```

mod channel;
mod types;

pub use channel::{null_sender, EventChannel, EventReceiver, EventSender};
pub use types::*;
