//! The WindowManager owns the registry and implements creation, closing,
//! lookup, z-order, invalidation and request dispatch.

mod broadcast;
mod close;
mod create;
mod dispatch;
mod events;
mod hooks;
mod invalidate;
mod limit;
mod lookup;
mod zorder;

pub use types::*;

mod types;

#[cfg(test)]
mod tests;
